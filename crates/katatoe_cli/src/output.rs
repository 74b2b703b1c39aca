//! Rendering reports for stdout.

use crate::config::OutputFormat;
use crate::driver::Report;
use tracing::instrument;

/// Renders a report in the requested format.
///
/// With `trace`, text output includes every accepted step; JSON output
/// always carries the whole report.
#[instrument(skip(report))]
pub fn render(report: &Report, format: OutputFormat, trace: bool) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Text => Ok(render_text(report, trace)),
    }
}

fn render_text(report: &Report, trace: bool) -> String {
    let mut out = String::new();

    if trace {
        out.push_str(&format!("start\n{}\n\n", report.initial()));
        for step in report.steps() {
            out.push_str(&format!("#{} {}\n{}\n\n", step.index(), step.action(), step.state()));
        }
    } else {
        out.push_str(&format!("{}\n", report.final_state()));
    }

    for rejection in report.rejections() {
        out.push_str(&format!(
            "rejected #{} {}: {}\n",
            rejection.index(),
            rejection.action(),
            rejection.error()
        ));
    }

    if let Some(line) = report.final_state().winning_indices() {
        out.push_str(&format!("winning line: {:?}\n", line));
    }

    out
}
