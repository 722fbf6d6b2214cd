mod aggregate;
mod cli;
mod config;
mod criteria;
mod error;
mod evaluate;
mod extract;
mod incongruence;
mod report;
mod telemetry;
mod types;

use crate::criteria::PatternBank;
use crate::error::IciError;
use crate::incongruence::{IncongruenceDetector, NoDetector};
use crate::types::config::IciConfig;
use crate::types::criterion::CriterionId;
use crate::types::scoring::{AggregationSettings, ScoreCard};
use clap::Parser;
use std::path::Path;
use tracing::{info, warn};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

const STDIN_SOURCE: &str = "<stdin>";

fn run() -> Result<i32, IciError> {
    let cli = cli::Cli::parse();
    if let Err(e) = telemetry::init(cli.verbose, cli.quiet) {
        eprintln!("warning: logging disabled: {e}");
    }

    let loaded = match &cli.config {
        Some(path) => Some(config::load_config_file(path)?),
        None => config::load_config(&std::env::current_dir()?)?,
    };
    let settings = loaded
        .as_ref()
        .map(IciConfig::settings)
        .unwrap_or_default();

    match cli.command {
        cli::Commands::Evaluate(cmd) => run_evaluate(&cmd, &settings),
        cli::Commands::Aggregate(cmd) => run_aggregate(&cmd, &settings),
        cli::Commands::Criteria => {
            print_criteria(&settings);
            Ok(exit_code::SUCCESS)
        }
    }
}

struct Inputs {
    documents: Vec<(String, String)>,
    skipped: usize,
}

fn collect_inputs(cmd: &cli::EvaluateCommand) -> Result<Inputs, IciError> {
    if let Some(text) = &cmd.text {
        return Ok(Inputs {
            documents: vec![("--text".to_string(), text.clone())],
            skipped: 0,
        });
    }

    let path = match cmd.path.as_deref() {
        None => None,
        Some(path) if path == Path::new("-") => None,
        Some(path) => Some(path),
    };
    let Some(path) = path else {
        let text = std::io::read_to_string(std::io::stdin())?;
        return Ok(Inputs {
            documents: vec![(STDIN_SOURCE.to_string(), text)],
            skipped: 0,
        });
    };

    if !path.exists() {
        return Err(IciError::PathNotFound(path.display().to_string()));
    }
    if path.is_file() {
        return Ok(Inputs {
            documents: vec![(path.display().to_string(), extract::extract(path)?)],
            skipped: 0,
        });
    }

    let mut inputs = Inputs {
        documents: Vec::new(),
        skipped: 0,
    };
    for file in extract::list_documents(path) {
        match extract::extract(&file) {
            Ok(text) => inputs.documents.push((file.display().to_string(), text)),
            Err(IciError::Extraction(e)) => {
                warn!(path = %file.display(), error = %e, "skipping document");
                inputs.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(inputs)
}

fn run_evaluate(
    cmd: &cli::EvaluateCommand,
    settings: &AggregationSettings,
) -> Result<i32, IciError> {
    let inputs = collect_inputs(cmd)?;
    let mut skipped = inputs.skipped;
    let bank = PatternBank::shared();
    let detector = NoDetector;

    let mut reports = Vec::new();
    let mut last_empty = String::new();
    for (source, raw) in inputs.documents {
        let text = extract::clean_text(&raw);
        if text.is_empty() {
            warn!(source = %source, "document has no text to analyze");
            skipped += 1;
            last_empty = source;
            continue;
        }
        let evaluation = evaluate::evaluate_text(&text, bank, settings);
        let incongruences = detector.detect(&text, &evaluation);
        info!(
            source = %source,
            index_raw = evaluation.index.index_raw,
            index_adjusted = evaluation.index.index_adjusted,
            "document evaluated"
        );
        reports.push(report::AuditReport::new(source, &text, evaluation, incongruences));
    }

    if reports.is_empty() {
        if last_empty.is_empty() {
            last_empty = cmd
                .path
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| STDIN_SOURCE.to_string());
        }
        return Err(IciError::EmptyInput(last_empty));
    }

    let rendered = report::render(&reports, output_format(&cmd.format))?;
    match &cmd.output {
        Some(path) => {
            std::fs::write(path, format!("{rendered}\n"))?;
            println!("report file: {}", path.display());
        }
        None => println!("{rendered}"),
    }

    let breached = cmd.fail_under.is_some_and(|minimum| {
        reports
            .iter()
            .any(|report| report.evaluation.index.index_adjusted < minimum)
    });
    if breached {
        Ok(exit_code::BLOCKING)
    } else if skipped > 0 {
        Ok(exit_code::WARNINGS)
    } else {
        Ok(exit_code::SUCCESS)
    }
}

fn run_aggregate(
    cmd: &cli::AggregateCommand,
    settings: &AggregationSettings,
) -> Result<i32, IciError> {
    let content = if cmd.scores == Path::new("-") {
        std::io::read_to_string(std::io::stdin())?
    } else {
        if !cmd.scores.exists() {
            return Err(IciError::PathNotFound(cmd.scores.display().to_string()));
        }
        std::fs::read_to_string(&cmd.scores)?
    };

    let value: serde_json::Value = serde_json::from_str(&content)?;
    let criteria = ScoreCard::from_json(&value)?;
    let index = aggregate::aggregate(&criteria, settings);
    let summary = report::ScoreSummary { criteria, index };
    println!(
        "{}",
        report::render_summary(&summary, output_format(&cmd.format))?
    );
    Ok(exit_code::SUCCESS)
}

fn print_criteria(settings: &AggregationSettings) {
    println!(
        "scheme: {:?}, penalty: threshold {:.2}, max {:.2}",
        settings.scheme, settings.penalty.threshold, settings.penalty.max
    );
    for id in CriterionId::ALL {
        let (floor, ceiling) = id.bounds();
        println!(
            "{:<4} {:<34} floor {:>2}  ceiling {:>2}  absent {:>2}  weight {:.2}",
            id.as_str(),
            id.title(),
            floor,
            ceiling,
            id.absent_score(),
            settings.weights.get(id)
        );
    }
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
