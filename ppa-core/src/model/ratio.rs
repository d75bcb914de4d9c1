use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{PpaError, Result};
use crate::model::majority::count_attachments;
use crate::record::{Label, Record};

/// Character length of the verb divided by the character length of noun1.
///
/// Lengths count Unicode scalar values, not bytes.
///
/// # Errors
/// Returns `EmptyNoun` if noun1 is empty.
pub fn ratio(record: &Record) -> Result<f64> {
	let noun1_len = record.noun1().chars().count();
	if noun1_len == 0 {
		return Err(PpaError::EmptyNoun { id: record.id().to_owned() });
	}
	Ok(record.verb().chars().count() as f64 / noun1_len as f64)
}

/// Length-ratio threshold model.
///
/// Built on the idea that longer verbs relative to the first noun attract
/// verb attachment. The threshold is the midpoint between the mean ratio of
/// `V`-attached and `N`-attached training records.
///
/// # Invariants
/// - `threshold == (mean_v + mean_n) / 2`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RatioModel {
	mean_v: f64,
	mean_n: f64,
	threshold: f64,
}

impl RatioModel {
	/// Builds the threshold from training records.
	///
	/// # Errors
	/// - `NoInstances` if either label is absent (an empty set included)
	/// - `EmptyNoun` if any record has an empty noun1
	pub fn build(records: &[Record]) -> Result<Self> {
		let mut sum_v = 0.0;
		let mut sum_n = 0.0;
		for record in records {
			let value = ratio(record)?;
			match record.label() {
				Label::V => sum_v += value,
				Label::N => sum_n += value,
			}
		}

		let mean_v = sum_v / Self::instances(records, Label::V)? as f64;
		let mean_n = sum_n / Self::instances(records, Label::N)? as f64;
		let threshold = (mean_v + mean_n) / 2.0;
		debug!("Ratio model: mean_v={mean_v}, mean_n={mean_n}, threshold={threshold}");

		Ok(Self { mean_v, mean_n, threshold })
	}

	fn instances(records: &[Record], label: Label) -> Result<usize> {
		match count_attachments(records, label) {
			0 => Err(PpaError::NoInstances { label }),
			count => Ok(count),
		}
	}

	pub fn threshold(&self) -> f64 {
		self.threshold
	}

	/// Mean ratio over `V`-attached training records.
	pub fn mean_v(&self) -> f64 {
		self.mean_v
	}

	/// Mean ratio over `N`-attached training records.
	pub fn mean_n(&self) -> f64 {
		self.mean_n
	}

	/// `V` if the record's ratio is strictly above the threshold, else `N`.
	pub fn classify(&self, record: &Record) -> Result<Label> {
		if ratio(record)? > self.threshold {
			Ok(Label::V)
		} else {
			Ok(Label::N)
		}
	}

	pub fn predict(&self, records: &[Record]) -> Result<Vec<Label>> {
		records.iter().map(|record| self.classify(record)).collect()
	}
}

impl fmt::Display for RatioModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "  Building the Ratio Model ... ")?;
		writeln!(f, "    for V attachments, ratio of V length to N1 length is {:.2}", self.mean_v)?;
		writeln!(f, "    for N attachments, ratio of V length to N1 length is {:.2}", self.mean_n)?;
		write!(f, "    so setting threshold to be {:.2} ", self.threshold)
	}
}
