pub mod json;
pub mod md;

use crate::aggregate::IndexSummary;
use crate::error::IciError;
use crate::evaluate::Evaluation;
use crate::incongruence::IncongruenceReport;
use crate::types::scoring::ScoreCard;
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub version: String,
    pub generated_at: String,
    pub source: String,
    pub text_sha256: String,
    pub text_chars: usize,
    pub evaluation: Evaluation,
    pub incongruences: IncongruenceReport,
}

impl AuditReport {
    pub fn new(
        source: impl Into<String>,
        text: &str,
        evaluation: Evaluation,
        incongruences: IncongruenceReport,
    ) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            source: source.into(),
            text_sha256: sha256_hex(text.as_bytes()),
            text_chars: text.chars().count(),
            evaluation,
            incongruences,
        }
    }
}

/// Aggregation of an externally supplied score map.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreSummary {
    pub criteria: ScoreCard,
    #[serde(flatten)]
    pub index: IndexSummary,
}

pub fn render(reports: &[AuditReport], format: OutputFormat) -> Result<String, IciError> {
    match (format, reports) {
        (OutputFormat::Json, [single]) => json::to_json(single).map_err(IciError::Json),
        (OutputFormat::Json, many) => json::to_json(&many).map_err(IciError::Json),
        (OutputFormat::Md, many) => Ok(many
            .iter()
            .map(md::to_markdown)
            .collect::<Vec<_>>()
            .join("\n---\n\n")),
    }
}

pub fn render_summary(summary: &ScoreSummary, format: OutputFormat) -> Result<String, IciError> {
    match format {
        OutputFormat::Json => json::to_json(summary).map_err(IciError::Json),
        OutputFormat::Md => Ok(md::summary_markdown(summary)),
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::PatternBank;
    use crate::evaluate::evaluate_text;
    use crate::types::scoring::AggregationSettings;

    fn report(source: &str, text: &str) -> AuditReport {
        let evaluation = evaluate_text(text, PatternBank::shared(), &AggregationSettings::default());
        AuditReport::new(source, text, evaluation, IncongruenceReport::default())
    }

    #[test]
    fn report_digest_identifies_the_text() {
        let first = report("a.txt", "duda razonable");
        let second = report("b.txt", "duda razonable");
        assert_eq!(first.text_sha256, second.text_sha256);
        assert_eq!(first.text_sha256.len(), 64);
        assert_ne!(first.text_sha256, report("c.txt", "otro").text_sha256);
    }

    #[test]
    fn json_batch_is_an_array_and_single_is_an_object() {
        let single = render(&[report("a.txt", "x")], OutputFormat::Json).expect("json");
        assert!(single.trim_start().starts_with('{'));

        let batch = render(
            &[report("a.txt", "x"), report("b.txt", "y")],
            OutputFormat::Json,
        )
        .expect("json");
        assert!(batch.trim_start().starts_with('['));
    }

    #[test]
    fn markdown_batch_separates_documents() {
        let rendered = render(
            &[report("a.txt", "x"), report("b.txt", "y")],
            OutputFormat::Md,
        )
        .expect("markdown");
        assert_eq!(rendered.matches("# Informe de Auditoría Indiciaria").count(), 2);
        assert!(rendered.contains("\n---\n"));
    }
}
