#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::ops::RangeInclusive;

use indexmap::IndexMap;
use serde::Serialize;

use crate::subject::{self, Subject};

/// Grade values accepted on the validated entry path. `1` is best.
pub const GRADE_RANGE: RangeInclusive<u8> = 1..=6;

/// A single graded subject for one student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeEntry {
    /// The catalog subject this grade belongs to.
    pub subject: &'static Subject,
    /// The grade value. Interactive entry only ever stores values within
    /// [`GRADE_RANGE`]; imported files are taken at face value (see
    /// [`crate::roster::decode`]).
    pub value:   u8,
}

impl GradeEntry {
    /// Creates an entry for `subject` with `value`.
    pub fn new(subject: &'static Subject, value: u8) -> Self {
        Self { subject, value }
    }

    /// The canonical code of the graded subject.
    pub fn code(&self) -> &'static str {
        self.subject.code
    }
}

/// Why a grade submission was rejected before reaching the book.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum AddError {
    /// The student name was empty after trimming.
    #[error("student name must not be empty")]
    EmptyName,
    /// A field named a subject that is not in the catalog.
    #[error("unknown subject: {0}")]
    UnknownSubject(String),
    /// A grade was non-numeric or outside the accepted range.
    #[error("grade for {subject} must be a whole number from 1 to 6, got `{value}`")]
    InvalidGrade {
        /// Display name of the subject the bad grade was entered for.
        subject: String,
        /// The rejected input, as typed.
        value:   String,
    },
    /// The submission contained no grades at all.
    #[error("at least one grade is required")]
    NoGradesProvided,
}

/// The in-memory grade book: one entry list per student, kept in the order
/// students were first added.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GradeBook {
    /// Per-student entry lists, keyed by student name.
    students: IndexMap<String, Vec<GradeEntry>>,
}

impl GradeBook {
    /// Creates an empty grade book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every student.
    pub fn clear(&mut self) {
        self.students.clear();
    }

    /// Inserts or fully replaces the entry list for `name`. Callers are
    /// expected to hand in a trimmed, non-empty name; re-adding a student
    /// keeps their original position in the book.
    pub fn put(&mut self, name: impl Into<String>, entries: Vec<GradeEntry>) {
        self.students.insert(name.into(), entries);
    }

    /// The entries recorded for `name`, empty when the student is unknown.
    pub fn get(&self, name: &str) -> &[GradeEntry] {
        self.students.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `name` has a record in the book.
    pub fn contains(&self, name: &str) -> bool {
        self.students.contains_key(name)
    }

    /// All student names in insertion order. Each call starts a fresh
    /// iteration over the current contents.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.students.keys().map(String::as_str)
    }

    /// Iterates `(name, entries)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[GradeEntry])> {
        self.students
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    /// Number of students in the book.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the book holds no students at all.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Validates and records one submission for `name`.
    ///
    /// `fields` pairs a subject (display name or code) with the grade text
    /// as typed. Blank grade fields contribute nothing. The whole
    /// submission is rejected, leaving the book untouched, on an empty
    /// name, an unknown subject, a non-numeric or out-of-range grade, or
    /// when no grade at all was given. Within one submission the last
    /// value given for a subject wins.
    ///
    /// Returns the number of grades recorded.
    pub fn add_checked(&mut self, name: &str, fields: &[(&str, &str)]) -> Result<usize, AddError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AddError::EmptyName);
        }

        let mut grades: IndexMap<&'static str, GradeEntry> = IndexMap::new();
        for (subject, raw) in fields {
            let subject = subject::find(subject.trim())
                .ok_or_else(|| AddError::UnknownSubject(subject.trim().to_string()))?;
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            match raw.parse::<u8>() {
                Ok(value) if GRADE_RANGE.contains(&value) => {
                    grades.insert(subject.code, GradeEntry::new(subject, value));
                }
                _ => {
                    return Err(AddError::InvalidGrade {
                        subject: subject.name.to_string(),
                        value:   raw.to_string(),
                    });
                }
            }
        }

        if grades.is_empty() {
            return Err(AddError::NoGradesProvided);
        }

        let count = grades.len();
        self.put(name, grades.into_values().collect());
        Ok(count)
    }
}
