//! Baseline classifiers for prepositional-phrase attachment.
//!
//! This crate provides a small comparative-evaluation harness including:
//! - A validating loader for `id verb noun1 preposition noun2 label` files
//! - Majority-class and length-ratio baseline models
//! - A masked n-gram (powerset) counter used as a diagnostic
//! - An evaluator producing accuracy and a 2x2 confusion matrix
//!
//! The whole run is exposed through [`pipeline::run`], which takes a
//! [`config::RunConfig`] instead of reading process arguments.

/// Error type shared by every stage of the pipeline.
pub mod error;

/// Attachment labels and parsed records.
pub mod record;

/// Baseline models (majority, ratio) and the n-gram powerset counter.
pub mod model;

/// Accuracy and confusion matrix reporting.
pub mod evaluate;

/// Dataset selection for a run.
pub mod config;

/// Load, build, predict, evaluate.
pub mod pipeline;

/// File loading helpers.
pub mod io;

pub use error::{PpaError, Result};
pub use record::{Label, Record};
