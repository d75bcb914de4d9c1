//! Accuracy and confusion matrix of predictions against true labels.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PpaError, Result};
use crate::record::{Label, Record};

/// 2x2 breakdown of predicted against true attachment.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfusionMatrix {
	pub pred_v_true_v: usize,
	pub pred_v_true_n: usize,
	pub pred_n_true_v: usize,
	pub pred_n_true_n: usize,
}

impl ConfusionMatrix {
	pub fn record(&mut self, predicted: Label, truth: Label) {
		match (predicted, truth) {
			(Label::V, Label::V) => self.pred_v_true_v += 1,
			(Label::V, Label::N) => self.pred_v_true_n += 1,
			(Label::N, Label::V) => self.pred_n_true_v += 1,
			(Label::N, Label::N) => self.pred_n_true_n += 1,
		}
	}

	pub fn get(&self, predicted: Label, truth: Label) -> usize {
		match (predicted, truth) {
			(Label::V, Label::V) => self.pred_v_true_v,
			(Label::V, Label::N) => self.pred_v_true_n,
			(Label::N, Label::V) => self.pred_n_true_v,
			(Label::N, Label::N) => self.pred_n_true_n,
		}
	}

	pub fn correct(&self) -> usize {
		self.pred_v_true_v + self.pred_n_true_n
	}

	pub fn total(&self) -> usize {
		self.pred_v_true_v + self.pred_v_true_n + self.pred_n_true_v + self.pred_n_true_n
	}
}

/// Outcome of evaluating one model on one dataset.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EvaluationReport {
	pub title: String,
	pub accuracy: f64,
	pub correct: usize,
	pub total: usize,
	pub confusion: ConfusionMatrix,
}

/// Compares predictions with the labels of `records`, pairwise and in order.
///
/// # Errors
/// - `LengthMismatch` if the two sequences differ in length
/// - `EmptyPredictions` if there is nothing to evaluate
pub fn evaluate(title: &str, predictions: &[Label], records: &[Record]) -> Result<EvaluationReport> {
	if predictions.len() != records.len() {
		return Err(PpaError::LengthMismatch {
			predictions: predictions.len(),
			records: records.len(),
		});
	}
	if predictions.is_empty() {
		return Err(PpaError::EmptyPredictions);
	}

	let mut confusion = ConfusionMatrix::default();
	for (predicted, record) in predictions.iter().zip(records) {
		confusion.record(*predicted, record.label());
	}

	let correct = confusion.correct();
	let total = predictions.len();
	Ok(EvaluationReport {
		title: title.to_owned(),
		accuracy: correct as f64 / total as f64,
		correct,
		total,
		confusion,
	})
}

impl fmt::Display for EvaluationReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f)?;
		writeln!(f, "--- Performance of {} ---", self.title)?;
		writeln!(f, "  Accuracy is {:.2}", self.accuracy)?;
		writeln!(f, "                true V   true N")?;
		for predicted in Label::ALL {
			writeln!(
				f,
				"  predicted {}    {:4}     {:4} ",
				predicted,
				self.confusion.get(predicted, Label::V),
				self.confusion.get(predicted, Label::N)
			)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn truth(labels: &[Label]) -> Vec<Record> {
		labels
			.iter()
			.enumerate()
			.map(|(i, label)| Record::new(&i.to_string(), "join", "board", "as", "director", *label))
			.collect()
	}

	#[test]
	fn accuracy_and_confusion() {
		let records = truth(&[Label::V, Label::N, Label::N]);
		let report = evaluate("test", &[Label::V, Label::N, Label::V], &records).unwrap();

		assert_eq!(report.correct, 2);
		assert_eq!(report.total, 3);
		assert!((report.accuracy - 2.0 / 3.0).abs() < 1e-12);
		assert_eq!(report.confusion.pred_v_true_v, 1);
		assert_eq!(report.confusion.pred_v_true_n, 1);
		assert_eq!(report.confusion.pred_n_true_v, 0);
		assert_eq!(report.confusion.pred_n_true_n, 1);
		assert_eq!(report.confusion.total(), 3);
	}

	#[test]
	fn perfect_predictions() {
		let labels = [Label::N, Label::V, Label::N, Label::V];
		let report = evaluate("perfect", &labels, &truth(&labels)).unwrap();
		assert_eq!(report.accuracy, 1.0);
		assert_eq!(report.confusion.pred_v_true_n + report.confusion.pred_n_true_v, 0);
	}

	#[test]
	fn empty_predictions_fail() {
		assert!(matches!(evaluate("empty", &[], &[]), Err(PpaError::EmptyPredictions)));
	}

	#[test]
	fn length_mismatch_fails() {
		let records = truth(&[Label::V, Label::N]);
		let err = evaluate("short", &[Label::V], &records).unwrap_err();
		assert!(matches!(err, PpaError::LengthMismatch { predictions: 1, records: 2 }));
	}

	#[test]
	fn display_matches_report_layout() {
		let records = truth(&[Label::V, Label::N, Label::N]);
		let report = evaluate("Majority Model on devData", &[Label::V, Label::N, Label::V], &records).unwrap();
		let expected = "\n--- Performance of Majority Model on devData ---\n  Accuracy is 0.67\n                true V   true N\n  predicted V       1        1 \n  predicted N       0        1 \n";
		assert_eq!(report.to_string(), expected);
	}
}
