use std::collections::HashMap;
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{PpaError, Result};
use crate::record::{Label, Record};

/// Number of context slots that can be wildcarded (verb, noun1, preposition, noun2).
pub const CONTEXT_SLOTS: usize = 4;

/// Number of masked keys produced per record: every subset of the context slots.
pub const KEYS_PER_RECORD: usize = 1 << CONTEXT_SLOTS;

/// A record tuple where any of the four context slots may be a wildcard.
///
/// `None` stands for the wildcard. The label slot is never masked.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MaskedKey {
	context: [Option<String>; CONTEXT_SLOTS],
	label: Label,
}

impl MaskedKey {
	pub fn new(context: [Option<&str>; CONTEXT_SLOTS], label: Label) -> Self {
		Self { context: context.map(|slot| slot.map(str::to_owned)), label }
	}

	/// The key with every context slot wildcarded.
	pub fn label_only(label: Label) -> Self {
		Self::new([None; CONTEXT_SLOTS], label)
	}

	/// Every masking of `record`, enumerated by subset size from 0 (fully
	/// specific) to 4 (label only).
	pub fn powerset(record: &Record) -> Vec<MaskedKey> {
		let context = record.context();
		let mut keys = Vec::with_capacity(KEYS_PER_RECORD);
		for size in 0..=CONTEXT_SLOTS as u32 {
			for mask in (0..KEYS_PER_RECORD).filter(|mask| mask.count_ones() == size) {
				let mut slots = [None; CONTEXT_SLOTS];
				for (index, slot) in slots.iter_mut().enumerate() {
					if mask & (1 << index) == 0 {
						*slot = Some(context[index]);
					}
				}
				keys.push(MaskedKey::new(slots, record.label()));
			}
		}
		keys
	}

	pub fn context(&self) -> &[Option<String>; CONTEXT_SLOTS] {
		&self.context
	}

	pub fn label(&self) -> Label {
		self.label
	}
}

impl fmt::Display for MaskedKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for slot in &self.context {
			write!(f, "{} ", slot.as_deref().unwrap_or("*"))?;
		}
		write!(f, "{}", self.label)
	}
}

/// Powerset n-gram counter over training tuples.
///
/// For each record, every way of wildcarding a subset of the four context
/// slots yields one key; the model counts how often each key occurs.
///
/// # Invariants
/// - The sum of all counts is `record_count * 16`
/// - `count(label_only(l))` equals the number of records labeled `l`
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct NGramModel {
	counts: HashMap<MaskedKey, usize>,
	record_count: usize,
}

impl NGramModel {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn build(records: &[Record]) -> Self {
		let mut model = Self::new();
		for record in records {
			model.add_record(record);
		}
		debug!(
			"N-gram model: {} records, {} distinct keys",
			model.record_count,
			model.counts.len()
		);
		model
	}

	/// Adds the 16 masked keys of a record.
	pub fn add_record(&mut self, record: &Record) {
		for key in MaskedKey::powerset(record) {
			*self.counts.entry(key).or_insert(0) += 1;
		}
		self.record_count += 1;
	}

	/// Occurrence count of a key, 0 if never seen.
	pub fn count(&self, key: &MaskedKey) -> usize {
		self.counts.get(key).copied().unwrap_or(0)
	}

	pub fn label_only_count(&self, label: Label) -> usize {
		self.count(&MaskedKey::label_only(label))
	}

	pub fn distinct_keys(&self) -> usize {
		self.counts.len()
	}

	pub fn total_count(&self) -> usize {
		self.counts.values().sum()
	}

	pub fn record_count(&self) -> usize {
		self.record_count
	}

	/// Checks the count invariants against independently computed label counts.
	///
	/// # Errors
	/// Returns `InvariantViolation` naming the first check that fails.
	pub fn verify(&self, expected_v: usize, expected_n: usize) -> Result<()> {
		let total = self.total_count();
		if total != self.record_count * KEYS_PER_RECORD {
			return Err(PpaError::InvariantViolation {
				message: format!(
					"n-gram total {total} != {} records x {KEYS_PER_RECORD}",
					self.record_count
				),
			});
		}
		for (label, expected) in [(Label::V, expected_v), (Label::N, expected_n)] {
			let found = self.label_only_count(label);
			if found != expected {
				return Err(PpaError::InvariantViolation {
					message: format!("label-only count for {label} is {found}, expected {expected}"),
				});
			}
		}
		Ok(())
	}

	pub fn summary(&self) -> NGramSummary {
		NGramSummary {
			record_count: self.record_count,
			distinct_keys: self.distinct_keys(),
			total_count: self.total_count(),
			label_only_v: self.label_only_count(Label::V),
			label_only_n: self.label_only_count(Label::N),
		}
	}
}

/// Headline numbers of an [`NGramModel`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct NGramSummary {
	pub record_count: usize,
	pub distinct_keys: usize,
	pub total_count: usize,
	pub label_only_v: usize,
	pub label_only_n: usize,
}

impl fmt::Display for NGramSummary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "  Building the N-gram Model ... ")?;
		writeln!(f, "    {} distinct keys from {} records", self.distinct_keys, self.record_count)?;
		writeln!(f, "    total count is {}", self.total_count)?;
		writeln!(f, "    (* * * * V) occurs {} times", self.label_only_v)?;
		write!(f, "    (* * * * N) occurs {} times", self.label_only_n)
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;
	use crate::model::majority::count_attachments;

	fn record(id: &str, verb: &str, noun1: &str, preposition: &str, noun2: &str, label: Label) -> Record {
		Record::new(id, verb, noun1, preposition, noun2, label)
	}

	fn training() -> Vec<Record> {
		vec![
			record("0", "join", "board", "as", "director", Label::V),
			record("1", "is", "chairman", "of", "N.V.", Label::N),
			record("2", "join", "board", "as", "member", Label::V),
			record("3", "named", "director", "of", "conglomerate", Label::N),
			record("4", "is", "chairman", "of", "N.V.", Label::N),
		]
	}

	#[test]
	fn powerset_yields_sixteen_distinct_keys() {
		let r = record("0", "join", "board", "as", "director", Label::V);
		let keys = MaskedKey::powerset(&r);
		assert_eq!(keys.len(), KEYS_PER_RECORD);

		let distinct: HashSet<_> = keys.iter().collect();
		assert_eq!(distinct.len(), KEYS_PER_RECORD);
		assert!(keys.contains(&MaskedKey::label_only(Label::V)));
		assert!(keys.iter().all(|key| key.label() == Label::V));
	}

	#[test]
	fn powerset_is_ordered_by_subset_size() {
		let r = record("0", "join", "board", "as", "director", Label::V);
		let keys = MaskedKey::powerset(&r);
		assert_eq!(
			keys[0],
			MaskedKey::new([Some("join"), Some("board"), Some("as"), Some("director")], Label::V)
		);
		assert_eq!(keys[KEYS_PER_RECORD - 1], MaskedKey::label_only(Label::V));

		let wildcards: Vec<usize> = keys
			.iter()
			.map(|key| key.context().iter().filter(|slot| slot.is_none()).count())
			.collect();
		assert!(wildcards.windows(2).all(|pair| pair[0] <= pair[1]));
	}

	#[test]
	fn total_count_is_sixteen_per_record() {
		let records = training();
		let model = NGramModel::build(&records);
		assert_eq!(model.record_count(), records.len());
		assert_eq!(model.total_count(), records.len() * KEYS_PER_RECORD);
	}

	#[test]
	fn label_only_counts_match_attachment_counts() {
		let records = training();
		let model = NGramModel::build(&records);
		assert_eq!(model.label_only_count(Label::V), count_attachments(&records, Label::V));
		assert_eq!(model.label_only_count(Label::N), count_attachments(&records, Label::N));
		assert!(model.verify(2, 3).is_ok());
	}

	#[test]
	fn shared_prefixes_accumulate() {
		let model = NGramModel::build(&training());
		let join_board = MaskedKey::new([Some("join"), Some("board"), None, None], Label::V);
		assert_eq!(model.count(&join_board), 2);

		let of_n = MaskedKey::new([None, None, Some("of"), None], Label::N);
		assert_eq!(model.count(&of_n), 3);

		let duplicate = MaskedKey::new([Some("is"), Some("chairman"), Some("of"), Some("N.V.")], Label::N);
		assert_eq!(model.count(&duplicate), 2);

		let unseen = MaskedKey::new([Some("join"), None, None, None], Label::N);
		assert_eq!(model.count(&unseen), 0);
	}

	#[test]
	fn verify_reports_count_mismatch() {
		let model = NGramModel::build(&training());
		assert!(matches!(
			model.verify(3, 2),
			Err(PpaError::InvariantViolation { .. })
		));
	}

	#[test]
	fn empty_model_is_consistent() {
		let model = NGramModel::build(&[]);
		assert_eq!(model.distinct_keys(), 0);
		assert_eq!(model.total_count(), 0);
		assert!(model.verify(0, 0).is_ok());
	}

	#[test]
	fn summary_reflects_model() {
		let model = NGramModel::build(&training());
		let summary = model.summary();
		assert_eq!(summary.record_count, 5);
		assert_eq!(summary.total_count, 80);
		assert_eq!(summary.label_only_v, 2);
		assert_eq!(summary.label_only_n, 3);
		assert_eq!(summary.distinct_keys, model.distinct_keys());
		assert!(summary.to_string().contains("(* * * * N) occurs 3 times"));
	}

	#[test]
	fn masked_key_display_uses_star_for_wildcards() {
		let key = MaskedKey::new([Some("join"), None, Some("as"), None], Label::V);
		assert_eq!(key.to_string(), "join * as * V");
	}
}
