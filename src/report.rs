#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};
use typed_builder::TypedBuilder;

use crate::{
    record::{GradeBook, GradeEntry},
    stats,
};

/// One row of the class summary: a student and their computed grades.
#[derive(Debug, Clone, Serialize, Tabled, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct StudentSummary {
    /// Student name.
    #[tabled(rename = "Name")]
    pub name:            String,
    /// Average over the general-education group.
    #[tabled(rename = "DN1")]
    pub dn1:             f64,
    /// Average over the vocational group.
    #[tabled(rename = "DN2")]
    pub dn2:             f64,
    /// Weighted final grade.
    #[tabled(rename = "Gesamtnote")]
    pub overall:         f64,
    /// Number of recorded grades.
    #[tabled(skip)]
    pub graded_subjects: usize,
}

/// Computes one summary row per student, in book order.
pub fn summarize(book: &GradeBook) -> Vec<StudentSummary> {
    book.iter()
        .map(|(name, entries)| {
            let grade = stats::overall_score(entries);
            StudentSummary::builder()
                .name(name)
                .dn1(grade.dn1)
                .dn2(grade.dn2)
                .overall(grade.overall)
                .graded_subjects(entries.len())
                .build()
        })
        .collect()
}

/// Renders the class summary as a table.
pub fn summary_table(summaries: &[StudentSummary]) -> String {
    Table::new(summaries)
        .with(Panel::header("Notenübersicht"))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern())
        .to_string()
}

/// Renders the per-student detail block: each graded subject by display
/// name, then the DN1/DN2/final line.
pub fn student_detail(name: &str, entries: &[GradeEntry]) -> String {
    let grade = stats::overall_score(entries);

    let mut lines = vec![format!("{name}:")];
    for entry in entries {
        lines.push(format!("  {}: {}", entry.subject.name, entry.value));
    }
    lines.push(format!(
        "  → DN1: {} | DN2: {} | Gesamtnote: {}",
        grade.dn1, grade.dn2, grade.overall
    ));

    lines.join("\n")
}

/// Writes the summaries as pretty-printed JSON to `path`.
pub fn write_json_report(path: impl AsRef<Path>, summaries: &[StudentSummary]) -> Result<()> {
    let path = path.as_ref();
    let json =
        serde_json::to_string_pretty(summaries).context("Failed to serialize the grade report")?;
    fs::write(path, json)
        .with_context(|| format!("Could not write report file: {}", path.display()))
}
