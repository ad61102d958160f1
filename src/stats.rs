#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::Serialize;

use crate::{record::GradeEntry, subject::SubjectGroup};

/// Rounds to one decimal place, halves away from zero.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Average grade over the entries belonging to `group`, rounded to one
/// decimal place. Exactly `0.0` when no entry belongs to the group; that
/// sentinel means "no grades recorded here", not a failing average.
pub fn group_average(entries: &[GradeEntry], group: SubjectGroup) -> f64 {
    let grades: Vec<f64> = entries
        .iter()
        .filter(|entry| entry.subject.group == group)
        .map(|entry| f64::from(entry.value))
        .collect();

    if grades.is_empty() {
        return 0.0;
    }

    round1(grades.iter().sum::<f64>() / grades.len() as f64)
}

/// The two group averages and the weighted final grade of one student.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinalGrade {
    /// Average over the general-education group.
    pub dn1:     f64,
    /// Average over the vocational group.
    pub dn2:     f64,
    /// `(dn1 + 2 * dn2) / 3`, rounded to one decimal place.
    pub overall: f64,
}

/// Computes both group averages and the weighted final grade. The
/// vocational average counts twice against the general-education average
/// once; that weighting is certificate policy and not configurable. A
/// student without any grades scores `(0, 0, 0)`.
pub fn overall_score(entries: &[GradeEntry]) -> FinalGrade {
    let dn1 = group_average(entries, SubjectGroup::General);
    let dn2 = group_average(entries, SubjectGroup::Vocational);
    let overall = round1((dn1 + 2.0 * dn2) / 3.0);

    FinalGrade { dn1, dn2, overall }
}
