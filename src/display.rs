//! Table rendering for `jarctl list`. Presentation glue only: no decisions
//! are made here, records are displayed as the engine produced them.

use console::style;
use tabled::settings::object::{Columns, Rows};
use tabled::settings::{Alignment, Color, Modify, Style};
use tabled::{Table, Tabled};

use crate::artifact::{ArtifactRecord, Correlation};

#[derive(Tabled)]
struct ArtifactRow {
    #[tabled(rename = "Artifact")]
    name: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Pid")]
    pid: String,
    #[tabled(rename = "Path")]
    path: String,
}

fn state_cell(record: &ArtifactRecord) -> String {
    let label = record.state_label();
    match record.correlation {
        Correlation::NoMatch => style(label).dim().to_string(),
        Correlation::Unique(_) => style(label).green().to_string(),
        Correlation::Ambiguous(_) => style(label).yellow().to_string(),
    }
}

pub fn render(records: &[ArtifactRecord]) -> String {
    let rows: Vec<ArtifactRow> = records
        .iter()
        .map(|record| ArtifactRow {
            name: record.name.clone(),
            state: state_cell(record),
            pid: record.pid_label().to_string(),
            path: record.path.display().to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .with(Modify::new(Rows::first()).with(Color::BOLD))
        .with(Modify::new(Columns::single(2)).with(Alignment::right()));
    table.to_string()
}
