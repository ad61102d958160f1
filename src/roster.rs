#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result, anyhow};
use csv::ReaderBuilder;

use crate::{
    record::{GradeBook, GradeEntry},
    subject::{self, Subject},
};

/// Header label of the student-name column.
const NAME_COLUMN: &str = "Name";

/// Serializes the whole book as comma-delimited text: a header row with
/// the name column followed by every subject code in canonical order,
/// then one row per student in book order. Subjects a student has no
/// grade for are left as empty cells.
pub fn encode(book: &GradeBook) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec![NAME_COLUMN.to_string()];
    header.extend(subject::codes().map(String::from));
    writer
        .write_record(&header)
        .context("Failed to write the roster header")?;

    for (name, entries) in book.iter() {
        // Keyed by code so a duplicated subject resolves to its last value.
        let by_code: HashMap<&str, u8> = entries
            .iter()
            .map(|entry| (entry.code(), entry.value))
            .collect();

        let mut row = vec![name.to_string()];
        row.extend(subject::codes().map(|code| {
            by_code
                .get(code)
                .map(|value| value.to_string())
                .unwrap_or_default()
        }));
        writer
            .write_record(&row)
            .with_context(|| format!("Failed to write the roster row for {name}"))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow!("Failed to flush the roster writer: {err}"))?;
    String::from_utf8(bytes).context("Encoded roster was not valid UTF-8")
}

/// Parses comma-delimited text into a fresh grade book.
///
/// The name column is located by a header cell reading `Name`, tolerating
/// a leading byte-order mark; without it nothing can be attributed and the
/// result is an empty book. Rows with an empty name cell are skipped. A
/// grade cell becomes an entry only when it is non-empty and parses as a
/// non-negative integer; grade values are taken from the file as-is,
/// without range validation. Columns that are not catalog subject codes
/// are ignored. The book is fully built before it is returned, so callers
/// can swap it in atomically.
pub fn decode(text: &str) -> Result<GradeBook> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .context("Failed to read the roster header")?
        .clone();

    let name_column = headers
        .iter()
        .position(|header| header.trim_start_matches('\u{feff}') == NAME_COLUMN);

    let subject_columns: Vec<(&'static Subject, usize)> = headers
        .iter()
        .enumerate()
        .filter_map(|(index, header)| subject::by_code(header).map(|subject| (subject, index)))
        .collect();

    let mut book = GradeBook::new();
    let Some(name_column) = name_column else {
        return Ok(book);
    };

    for record in reader.records() {
        let record = record.context("Failed to parse a roster row")?;
        let name = record.get(name_column).map(str::trim).unwrap_or_default();
        if name.is_empty() {
            continue;
        }

        let mut entries = Vec::new();
        for &(subject, index) in &subject_columns {
            let Some(cell) = record.get(index) else {
                continue;
            };
            if let Ok(value) = cell.trim().parse::<u8>() {
                entries.push(GradeEntry::new(subject, value));
            }
        }

        book.put(name, entries);
    }

    Ok(book)
}

/// Reads and decodes the roster at `path`. The returned book is complete
/// before this function returns, so a failed load leaves the caller's
/// state untouched.
pub fn load(path: impl AsRef<Path>) -> Result<GradeBook> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read roster file: {}", path.display()))?;
    decode(&text).with_context(|| format!("Could not parse roster file: {}", path.display()))
}

/// Encodes `book` and writes it to `path`.
pub fn save(path: impl AsRef<Path>, book: &GradeBook) -> Result<()> {
    let path = path.as_ref();
    let text = encode(book)?;
    fs::write(path, text)
        .with_context(|| format!("Could not write roster file: {}", path.display()))
}
