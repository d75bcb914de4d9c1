use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Run argument that switches evaluation from the dev set to the test set.
pub const FINAL_RUN_SENTINEL: &str = "yesThisReallyIsTheFinalRun";

/// File name of the training set inside the data directory.
pub const TRAINING_FILE: &str = "training";

/// Held-out set the models are evaluated on.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dataset {
	Dev,
	Test,
}

impl Dataset {
	pub fn file_name(&self) -> &'static str {
		match self {
			Dataset::Dev => "devset",
			Dataset::Test => "test",
		}
	}

	/// Name used in report titles, e.g. `Ratio Model on devData`.
	pub fn display_name(&self) -> &'static str {
		match self {
			Dataset::Dev => "devData",
			Dataset::Test => "testData",
		}
	}
}

impl fmt::Display for Dataset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.display_name())
	}
}

/// Which files a run reads.
///
/// The training set is always `training`; the evaluation set is `devset`
/// unless the final-run sentinel was given.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
	pub data_dir: PathBuf,
	pub dataset: Dataset,
}

impl RunConfig {
	pub fn new<P: AsRef<Path>>(data_dir: P, dataset: Dataset) -> Self {
		Self { data_dir: data_dir.as_ref().to_path_buf(), dataset }
	}

	/// Selects the dataset from the optional positional run argument.
	///
	/// Only the exact sentinel selects `Test`; anything else selects `Dev`.
	pub fn from_run_argument<P: AsRef<Path>>(data_dir: P, argument: Option<&str>) -> Self {
		let dataset = match argument {
			Some(FINAL_RUN_SENTINEL) => Dataset::Test,
			_ => Dataset::Dev,
		};
		Self::new(data_dir, dataset)
	}

	pub fn training_path(&self) -> PathBuf {
		self.data_dir.join(TRAINING_FILE)
	}

	pub fn evaluation_path(&self) -> PathBuf {
		self.data_dir.join(self.dataset.file_name())
	}
}

impl Default for RunConfig {
	fn default() -> Self {
		Self::new(".", Dataset::Dev)
	}
}
