//! Attachment models built from training records.
//!
//! - Majority-class baseline (`MajorityModel`)
//! - Verb/noun length-ratio threshold (`RatioModel`)
//! - Masked n-gram powerset counter (`NGramModel`), diagnostic only

/// Constant prediction of the most frequent training label.
pub mod majority;

/// Threshold on the verb-to-noun1 character length ratio.
pub mod ratio;

/// Counts of every wildcard-masked variant of the training tuples.
///
/// Built and summarised, never consulted by a predictor.
pub mod ngram_model;

pub use majority::{MajorityModel, count_attachments};
pub use ngram_model::{MaskedKey, NGramModel, NGramSummary};
pub use ratio::RatioModel;
