use log::info;
use serde::Serialize;

use crate::config::RunConfig;
use crate::error::Result;
use crate::evaluate::{EvaluationReport, evaluate};
use crate::io::load_records;
use crate::model::{MajorityModel, NGramModel, NGramSummary, RatioModel, count_attachments};
use crate::record::Label;

/// Everything a run produced, in the order it was produced.
#[derive(Serialize, Clone, Debug)]
pub struct RunOutcome {
	pub majority: MajorityModel,
	pub ratio: RatioModel,
	pub ngram: NGramSummary,
	/// Majority report first, ratio report second.
	pub reports: Vec<EvaluationReport>,
}

/// Runs the whole harness once for the given configuration.
///
/// # Behavior
/// - Loads the training set and the selected evaluation set
/// - Builds the majority, ratio and n-gram models from training data
/// - Cross-checks the n-gram label-only counts against the label counts
/// - Evaluates the majority model, then the ratio model
///
/// # Errors
/// Any loader, model or evaluation error aborts the run.
pub fn run(config: &RunConfig) -> Result<RunOutcome> {
	let training = load_records(config.training_path())?;
	info!("Training on {} records from {}", training.len(), config.training_path().display());

	let majority = MajorityModel::build(&training);
	info!("Majority model predicts {}", majority.label());

	let ratio = RatioModel::build(&training)?;
	info!("Ratio model threshold {:.4}", ratio.threshold());

	let ngram = NGramModel::build(&training);
	ngram.verify(
		count_attachments(&training, Label::V),
		count_attachments(&training, Label::N),
	)?;
	info!("N-gram model holds {} distinct keys", ngram.distinct_keys());

	let evaluation = load_records(config.evaluation_path())?;
	info!(
		"Evaluating on {} records from {}",
		evaluation.len(),
		config.evaluation_path().display()
	);

	let dataset = config.dataset.display_name();
	let majority_report = evaluate(
		&format!("Majority Model on {dataset}"),
		&majority.predict(&evaluation),
		&evaluation,
	)?;
	let ratio_report = evaluate(
		&format!("Ratio Model on {dataset}"),
		&ratio.predict(&evaluation)?,
		&evaluation,
	)?;

	Ok(RunOutcome {
		majority,
		ratio,
		ngram: ngram.summary(),
		reports: vec![majority_report, ratio_report],
	})
}
