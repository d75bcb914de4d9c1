use serde::{Deserialize, Serialize};

use crate::record::{Label, Record};

/// Number of records carrying the given attachment label.
pub fn count_attachments(records: &[Record], label: Label) -> usize {
	records.iter().filter(|record| record.label() == label).count()
}

/// Majority-class baseline.
///
/// Always predicts the label that is strictly more frequent in training;
/// ties (including an empty training set) resolve to `N`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MajorityModel {
	label: Label,
}

impl MajorityModel {
	pub fn build(records: &[Record]) -> Self {
		let label = if count_attachments(records, Label::V) > count_attachments(records, Label::N) {
			Label::V
		} else {
			Label::N
		};
		Self { label }
	}

	pub fn label(&self) -> Label {
		self.label
	}

	/// One copy of the model label per input record.
	pub fn predict(&self, records: &[Record]) -> Vec<Label> {
		vec![self.label; records.len()]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(label: Label) -> Record {
		Record::new("0", "join", "board", "as", "director", label)
	}

	#[test]
	fn picks_strict_majority() {
		let records = vec![record(Label::V), record(Label::V), record(Label::N)];
		assert_eq!(MajorityModel::build(&records).label(), Label::V);

		let records = vec![record(Label::N), record(Label::N), record(Label::V)];
		assert_eq!(MajorityModel::build(&records).label(), Label::N);
	}

	#[test]
	fn tie_resolves_to_noun() {
		let records = vec![record(Label::V), record(Label::N)];
		assert_eq!(MajorityModel::build(&records).label(), Label::N);
		assert_eq!(MajorityModel::build(&[]).label(), Label::N);
	}

	#[test]
	fn predicts_one_label_per_record() {
		let model = MajorityModel::build(&[record(Label::V)]);
		let unseen = vec![record(Label::N), record(Label::N), record(Label::V)];
		let predictions = model.predict(&unseen);
		assert_eq!(predictions, vec![Label::V; 3]);
		assert!(model.predict(&[]).is_empty());
	}

	#[test]
	fn counts_each_label() {
		let records = vec![record(Label::V), record(Label::N), record(Label::N)];
		assert_eq!(count_attachments(&records, Label::V), 1);
		assert_eq!(count_attachments(&records, Label::N), 2);
	}
}
