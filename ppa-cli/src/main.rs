use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use ppa_core::config::RunConfig;
use ppa_core::evaluate::EvaluationReport;
use ppa_core::model::{NGramSummary, RatioModel};
use ppa_core::pipeline::{RunOutcome, run};

/// Baseline prepositional-phrase attachment evaluation.
#[derive(Parser)]
#[command(name = "ppa", about = "Evaluate PP-attachment baselines on devset (or test)")]
struct Cli {
	/// Pass `yesThisReallyIsTheFinalRun` to evaluate on `test` instead of `devset`.
	run: Option<String>,

	/// Directory holding the `training`, `devset` and `test` files.
	#[arg(long, default_value = ".")]
	data_dir: PathBuf,

	/// Print one JSON object per line instead of the text report.
	#[arg(long)]
	json: bool,
}

/// One line of `--json` output.
#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum JsonLine<'a> {
	Ratio(&'a RatioModel),
	Ngram(&'a NGramSummary),
	Evaluation(&'a EvaluationReport),
}

fn print_text(outcome: &RunOutcome) {
	println!("------ ppaStub ------\n");
	println!("{}", outcome.ratio);
	println!("{}", outcome.ngram);
	for report in &outcome.reports {
		print!("{report}");
	}
}

fn print_json(outcome: &RunOutcome) -> Result<(), serde_json::Error> {
	println!("{}", serde_json::to_string(&JsonLine::Ratio(&outcome.ratio))?);
	println!("{}", serde_json::to_string(&JsonLine::Ngram(&outcome.ngram))?);
	for report in &outcome.reports {
		println!("{}", serde_json::to_string(&JsonLine::Evaluation(report))?);
	}
	Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let cli = Cli::parse();
	let config = RunConfig::from_run_argument(&cli.data_dir, cli.run.as_deref());
	log::info!(
		"Evaluating {} from {}",
		config.evaluation_path().display(),
		config.data_dir.display()
	);

	let outcome = run(&config)?;

	if cli.json {
		print_json(&outcome)?;
	} else {
		print_text(&outcome);
	}

	Ok(())
}
