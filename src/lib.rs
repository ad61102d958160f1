//! # notenrechner
//!
//! A grade book and final-report calculator for vocational school classes.
//! Grades are entered per subject, averaged separately over the
//! general-education and vocational subject groups, and combined into the
//! weighted final grade that appears on the leaving certificate.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// The in-memory grade book and the validated grade-entry path
pub mod record;
/// Summary tables, per-student detail blocks, and JSON reports
pub mod report;
/// CSV import and export of the grade book
pub mod roster;
/// The interactive grade-entry session
pub mod shell;
/// Group averages and the weighted final grade
pub mod stats;
/// The fixed subject catalog and its two groups
pub mod subject;
