use notenrechner::{
    record::GradeEntry,
    stats::{group_average, overall_score},
    subject::{self, SubjectGroup},
};

fn entry(code: &str, value: u8) -> GradeEntry {
    GradeEntry::new(subject::by_code(code).expect("known subject code"), value)
}

#[test]
fn group_average_covers_only_its_group() {
    let entries = vec![entry("de", 2), entry("sk", 3), entry("LF1", 6)];

    assert_eq!(group_average(&entries, SubjectGroup::General), 2.5);
    assert_eq!(group_average(&entries, SubjectGroup::Vocational), 6.0);
}

#[test]
fn group_average_rounds_half_away_from_zero() {
    // (2 + 2 + 2 + 3) / 4 = 2.25, which rounds up to 2.3.
    let entries = vec![entry("de", 2), entry("et", 2), entry("sk", 2), entry("sp", 3)];

    assert_eq!(group_average(&entries, SubjectGroup::General), 2.3);
}

#[test]
fn group_average_is_zero_without_matching_entries() {
    let entries = vec![entry("LF1", 4), entry("LF2", 5)];

    assert_eq!(group_average(&entries, SubjectGroup::General), 0.0);
    assert_eq!(group_average(&[], SubjectGroup::Vocational), 0.0);
}

#[test]
fn overall_score_applies_the_one_to_two_weighting() {
    // dn1 = 2.0, dn2 = 4.0, so (2.0 + 8.0) / 3 = 3.33.. rounds to 3.3.
    let entries = vec![entry("de", 2), entry("LF1", 4)];
    let grade = overall_score(&entries);

    assert_eq!(grade.dn1, 2.0);
    assert_eq!(grade.dn2, 4.0);
    assert_eq!(grade.overall, 3.3);
}

#[test]
fn overall_score_uses_the_rounded_group_averages() {
    // General: (2 + 3) / 2 = 2.5. Vocational: 3.0.
    // (2.5 + 6.0) / 3 = 2.83.. rounds to 2.8.
    let entries = vec![entry("de", 2), entry("et", 3), entry("LF4", 3)];
    let grade = overall_score(&entries);

    assert_eq!(grade.dn1, 2.5);
    assert_eq!(grade.dn2, 3.0);
    assert_eq!(grade.overall, 2.8);
}

#[test]
fn a_student_without_grades_scores_the_zero_sentinel() {
    let grade = overall_score(&[]);

    assert_eq!(grade.dn1, 0.0);
    assert_eq!(grade.dn2, 0.0);
    assert_eq!(grade.overall, 0.0);
}

#[test]
fn a_single_group_still_feeds_the_weighting() {
    // Only vocational grades: dn1 = 0, dn2 = 3.0, (0 + 6.0) / 3 = 2.0.
    let entries = vec![entry("LF1", 3)];
    let grade = overall_score(&entries);

    assert_eq!(grade.dn1, 0.0);
    assert_eq!(grade.overall, 2.0);
}
