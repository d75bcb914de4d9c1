//! Error types for the attachment harness.

use std::path::PathBuf;

use thiserror::Error;

use crate::record::Label;

/// Errors that can occur while loading data, building models or evaluating.
///
/// None of them are recovered from: the driver reports the error and exits.
#[derive(Debug, Error)]
pub enum PpaError {
	/// Input file does not exist.
	#[error("Input file not found: {}", .path.display())]
	MissingFile { path: PathBuf },

	/// Any other I/O failure while reading an input file.
	#[error("Failed to read {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// A line that does not hold the six expected fields.
	#[error("{}:{line}: malformed record: {reason}", .path.display())]
	MalformedRecord { path: PathBuf, line: usize, reason: String },

	/// The attachment field is neither `V` nor `N`.
	#[error("{}:{line}: invalid attachment label '{label}' (expected V or N)", .path.display())]
	InvalidLabel { path: PathBuf, line: usize, label: String },

	/// Ratio feature requested for a record with an empty first noun.
	#[error("Record {id}: noun1 is empty, cannot compute length ratio")]
	EmptyNoun { id: String },

	/// Training data holds no record with the given label.
	#[error("Training data has no {label}-attached records")]
	NoInstances { label: Label },

	/// Evaluation requested with no predictions.
	#[error("Cannot evaluate an empty prediction set")]
	EmptyPredictions,

	/// Prediction and record sequences differ in length.
	#[error("Length mismatch: {predictions} predictions for {records} records")]
	LengthMismatch { predictions: usize, records: usize },

	/// A cross-check between two models failed.
	#[error("Invariant violated: {message}")]
	InvariantViolation { message: String },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PpaError>;
