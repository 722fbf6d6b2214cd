use crate::report::{AuditReport, ScoreSummary};
use crate::types::criterion::CriterionId;

pub fn to_markdown(report: &AuditReport) -> String {
    let evaluation = &report.evaluation;
    let index = &evaluation.index;

    let mut output = String::new();
    output.push_str("# Informe de Auditoría Indiciaria (ICI)\n\n");
    output.push_str(&format!("- Documento: {}\n", report.source));
    output.push_str(&format!("- SHA-256: `{}`\n", report.text_sha256));
    output.push_str(&format!("- Generado: {}\n\n", report.generated_at));

    output.push_str(&format!("ICI ajustado: {:.2}\n\n", index.index_adjusted));
    output.push_str(&format!(
        "ICI sin penalización: {:.2} (penalización C5: {:.2})\n\n",
        index.index_raw, index.penalty
    ));

    output.push_str("## Resultados por criterio\n\n");
    output.push_str("| Criterio | Descripción | Puntaje | Señales |\n");
    output.push_str("|---|---|---|---|\n");
    for id in CriterionId::ALL {
        let signals = evaluation
            .signals
            .get(&id)
            .map(|signals| {
                signals
                    .iter()
                    .map(|(group, count)| format!("{group}={count}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            id,
            id.title(),
            evaluation.score(id),
            signals
        ));
    }
    output.push('\n');

    output.push_str("## Interpretación\n\n");
    output.push_str(&format!("**{}**\n\n", index.band.label()));
    output.push_str(&index.interpretation);
    output.push_str("\n\n");

    output.push_str("## Incongruencias detectadas\n\n");
    if report.incongruences.is_empty() {
        output.push_str("No se detectaron incongruencias relevantes.\n");
    } else {
        for (position, incongruence) in report.incongruences.iter().enumerate() {
            output.push_str(&format!("### {}. {}\n\n", position + 1, incongruence.kind));
            let paragraphs = incongruence
                .paragraphs
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            output.push_str(&format!("Párrafos: {paragraphs}\n\n"));
            output.push_str(&format!("{}\n\n", incongruence.detail));
            for excerpt in &incongruence.excerpts {
                output.push_str(&format!("> _{excerpt}_\n"));
            }
        }
    }

    output
}

pub fn summary_markdown(summary: &ScoreSummary) -> String {
    let index = &summary.index;
    let mut output = String::new();
    output.push_str("# Índice de Coherencia Indiciaria (ICI)\n\n");
    output.push_str("| Criterio | Puntaje |\n|---|---|\n");
    for id in CriterionId::ALL {
        match summary.criteria.get(id) {
            Some(score) => output.push_str(&format!("| {id} | {score} |\n")),
            None => output.push_str(&format!(
                "| {id} | {} (por defecto) |\n",
                id.absent_score()
            )),
        }
    }
    output.push('\n');
    output.push_str(&format!(
        "ICI sin penalización: {:.2}\n\nICI ajustado: {:.2}\n\n",
        index.index_raw, index.index_adjusted
    ));
    output.push_str(&format!("**{}**\n\n{}\n", index.band.label(), index.interpretation));
    output
}
