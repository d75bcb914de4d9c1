use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of whitespace-separated fields on a record line.
pub const FIELD_COUNT: usize = 6;

/// Attachment site of a prepositional phrase.
///
/// - `V`: the phrase modifies the verb
/// - `N`: the phrase modifies the first noun
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
	V,
	N,
}

impl Label {
	/// Both labels, `V` first.
	pub const ALL: [Label; 2] = [Label::V, Label::N];

	pub fn as_str(&self) -> &'static str {
		match self {
			Label::V => "V",
			Label::N => "N",
		}
	}
}

impl fmt::Display for Label {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Label {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"V" => Ok(Label::V),
			"N" => Ok(Label::N),
			other => Err(other.to_owned()),
		}
	}
}

/// Reasons a single line fails to parse.
///
/// The loader attaches the file path and line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	#[error("expected {} fields, found {found}", FIELD_COUNT)]
	FieldCount { found: usize },

	#[error("invalid label '{0}'")]
	Label(String),
}

/// One labeled attachment instance.
///
/// Fields follow the file layout: `id verb noun1 preposition noun2 label`,
/// for example `1 is chairman of N.V. N`.
///
/// # Invariants
/// - No field contains whitespace
/// - No field is empty when produced by [`Record::parse_line`]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Record {
	id: String,
	verb: String,
	noun1: String,
	preposition: String,
	noun2: String,
	label: Label,
}

impl Record {
	pub fn new(
		id: &str,
		verb: &str,
		noun1: &str,
		preposition: &str,
		noun2: &str,
		label: Label,
	) -> Self {
		Self {
			id: id.to_owned(),
			verb: verb.to_owned(),
			noun1: noun1.to_owned(),
			preposition: preposition.to_owned(),
			noun2: noun2.to_owned(),
			label,
		}
	}

	/// Parses a record line.
	///
	/// # Errors
	/// - `FieldCount` if the line does not split into exactly six fields.
	/// - `Label` if the last field is not `V` or `N`.
	pub fn parse_line(line: &str) -> Result<Self, ParseError> {
		let fields: Vec<&str> = line.split_whitespace().collect();
		let [id, verb, noun1, preposition, noun2, label] = fields.as_slice() else {
			return Err(ParseError::FieldCount { found: fields.len() });
		};
		let label = label.parse::<Label>().map_err(ParseError::Label)?;
		Ok(Self::new(id, verb, noun1, preposition, noun2, label))
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn verb(&self) -> &str {
		&self.verb
	}

	pub fn noun1(&self) -> &str {
		&self.noun1
	}

	pub fn preposition(&self) -> &str {
		&self.preposition
	}

	pub fn noun2(&self) -> &str {
		&self.noun2
	}

	pub fn label(&self) -> Label {
		self.label
	}

	/// The four context fields in file order: verb, noun1, preposition, noun2.
	pub fn context(&self) -> [&str; 4] {
		[&self.verb, &self.noun1, &self.preposition, &self.noun2].map(String::as_str)
	}
}

/// Single-space join of the six fields, the inverse of [`Record::parse_line`].
impl fmt::Display for Record {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} {} {} {} {} {}",
			self.id, self.verb, self.noun1, self.preposition, self.noun2, self.label
		)
	}
}
