//! Cleanup plan display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::maintenance::{CleanMode, CleanReport};

#[derive(Tabled)]
struct PlanRow {
    #[tabled(rename = "Action")]
    name: String,
    #[tabled(rename = "Command")]
    command: String,
    #[tabled(rename = "Mode")]
    mode: String,
}

#[derive(Tabled)]
struct OutcomeRow {
    #[tabled(rename = "Action")]
    name: String,
    #[tabled(rename = "Result")]
    result: String,
    #[tabled(rename = "Output")]
    output: String,
}

pub fn format_clean_report(report: &CleanReport) -> String {
    let plan = report.actions.iter().map(|a| PlanRow {
        name: a.name.to_string(),
        command: a.command_line(),
        mode: report.mode.to_string(),
    });

    let mut output = String::from("Fedora Care - Clean plan\n");
    output.push_str(&Table::new(plan).with(Style::modern()).to_string());
    output.push('\n');

    match (&report.mode, &report.results) {
        (CleanMode::DryRun, _) => {
            output.push_str("\nDry-run: nothing was removed.\n");
            output.push_str("To apply: fedcare clean --apply\n");
        }
        (CleanMode::Apply, Some(results)) => {
            let rows = results.iter().map(|r| OutcomeRow {
                name: r.name.clone(),
                result: if r.success { "OK".into() } else { "FAILED".into() },
                output: if r.output.is_empty() {
                    "-".into()
                } else {
                    r.output.clone()
                },
            });
            output.push('\n');
            output.push_str(&Table::new(rows).with(Style::modern()).to_string());
            output.push('\n');
        }
        (CleanMode::Apply, None) => {}
    }

    output
}
