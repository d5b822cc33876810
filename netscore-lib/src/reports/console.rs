use crate::Result;
use crate::metrics::{MetricScore, MetricsReport, ReportValue};
use core::fmt::Write;
use owo_colors::OwoColorize;

const GOOD_SCORE: f64 = 0.7;
const FAIR_SCORE: f64 = 0.4;

pub fn generate<W: Write>(report: &MetricsReport, use_colors: bool, writer: &mut W) -> Result<()> {
    let entries = report.entries();

    // Pair each score with the latency entry that follows it
    let rows: Vec<_> = entries
        .chunks(2)
        .filter_map(|pair| match pair {
            [(name, ReportValue::Score(score)), (_, ReportValue::Latency(latency))] => Some((*name, *score, *latency)),
            _ => None,
        })
        .collect();

    let max_name_len = rows.iter().map(|(name, _, _)| name.len()).max().unwrap_or(0);

    if use_colors {
        writeln!(writer, "{}", "Package Scores".bold())?;
    } else {
        writeln!(writer, "Package Scores")?;
    }

    for (name, score, latency) in rows {
        let formatted = format_score(score);
        let colored = if use_colors {
            match score {
                MetricScore::Value(v) if v >= GOOD_SCORE => formatted.green().to_string(),
                MetricScore::Value(v) if v >= FAIR_SCORE => formatted.yellow().to_string(),
                _ => formatted.red().to_string(),
            }
        } else {
            formatted
        };

        writeln!(writer, "  {name:<max_name_len$} : {colored} in {latency:.3}s")?;
    }

    Ok(())
}

fn format_score(score: MetricScore) -> String {
    match score {
        MetricScore::Value(v) => format!("{v:.3}"),
        MetricScore::Failed => "failed (-1)".to_string(),
    }
}
