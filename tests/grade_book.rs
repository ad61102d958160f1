use notenrechner::{
    record::{AddError, GradeBook, GradeEntry},
    subject,
};

fn entry(code: &str, value: u8) -> GradeEntry {
    GradeEntry::new(subject::by_code(code).expect("known subject code"), value)
}

#[test]
fn get_on_an_unknown_student_is_empty() {
    let book = GradeBook::new();
    assert!(book.get("Alice").is_empty());
}

#[test]
fn put_replaces_prior_entries_entirely() {
    let mut book = GradeBook::new();
    book.put("Alice", vec![entry("de", 2), entry("LF1", 4)]);
    book.put("Alice", vec![entry("sk", 3)]);

    assert_eq!(book.len(), 1);
    assert_eq!(book.get("Alice"), &[entry("sk", 3)]);
}

#[test]
fn names_preserve_insertion_order() {
    let mut book = GradeBook::new();
    book.put("Bob", vec![entry("de", 1)]);
    book.put("Alice", vec![entry("de", 2)]);
    book.put("Caro", vec![entry("de", 3)]);
    // Overwriting keeps the original position.
    book.put("Bob", vec![entry("sp", 4)]);

    let names: Vec<&str> = book.names().collect();
    assert_eq!(names, vec!["Bob", "Alice", "Caro"]);

    // The iteration is restartable.
    let again: Vec<&str> = book.names().collect();
    assert_eq!(again, names);
}

#[test]
fn clear_empties_the_book() {
    let mut book = GradeBook::new();
    book.put("Alice", vec![entry("de", 2)]);
    book.clear();

    assert!(book.is_empty());
    assert_eq!(book.names().count(), 0);
}

#[test]
fn add_checked_records_a_clean_submission() {
    let mut book = GradeBook::new();
    let count = book
        .add_checked("  Alice ", &[("de", "2"), ("LF1", "4")])
        .expect("clean submission should be accepted");

    assert_eq!(count, 2);
    assert!(book.contains("Alice"));
    assert_eq!(book.get("Alice"), &[entry("de", 2), entry("LF1", 4)]);
}

#[test]
fn add_checked_accepts_display_names() {
    let mut book = GradeBook::new();
    book.add_checked("Alice", &[("Deutsch", "2"), ("Wirtschaftslehre", "3")])
        .expect("display names should resolve");

    assert_eq!(book.get("Alice"), &[entry("de", 2), entry("wl", 3)]);
}

#[test]
fn add_checked_skips_blank_fields() {
    let mut book = GradeBook::new();
    let count = book
        .add_checked("Alice", &[("de", ""), ("sk", "  "), ("LF2", "5")])
        .expect("blank fields are not errors");

    assert_eq!(count, 1);
    assert_eq!(book.get("Alice"), &[entry("LF2", 5)]);
}

#[test]
fn add_checked_last_write_wins_per_subject() {
    let mut book = GradeBook::new();
    let count = book
        .add_checked("Alice", &[("de", "2"), ("de", "3")])
        .expect("duplicate subject resolves to the last value");

    assert_eq!(count, 1);
    assert_eq!(book.get("Alice"), &[entry("de", 3)]);
}

#[test]
fn add_checked_rejects_an_empty_name() {
    let mut book = GradeBook::new();
    let err = book.add_checked("   ", &[("de", "2")]).unwrap_err();

    assert_eq!(err, AddError::EmptyName);
    assert!(book.is_empty());
}

#[test]
fn add_checked_rejects_an_out_of_range_grade() {
    let mut book = GradeBook::new();
    let err = book.add_checked("Carla", &[("de", "7")]).unwrap_err();

    assert_eq!(err, AddError::InvalidGrade {
        subject: "Deutsch".to_string(),
        value:   "7".to_string(),
    });
    assert!(!book.contains("Carla"));
}

#[test]
fn add_checked_rejects_a_non_numeric_grade() {
    let mut book = GradeBook::new();
    let err = book.add_checked("Alice", &[("sp", "gut")]).unwrap_err();

    assert!(matches!(err, AddError::InvalidGrade { .. }));
    assert!(book.is_empty());
}

#[test]
fn add_checked_rejects_an_unknown_subject() {
    let mut book = GradeBook::new();
    let err = book.add_checked("Alice", &[("Mathe", "2")]).unwrap_err();

    assert_eq!(err, AddError::UnknownSubject("Mathe".to_string()));
    assert!(book.is_empty());
}

#[test]
fn add_checked_requires_at_least_one_grade() {
    let mut book = GradeBook::new();

    let err = book.add_checked("Alice", &[]).unwrap_err();
    assert_eq!(err, AddError::NoGradesProvided);

    let err = book.add_checked("Alice", &[("de", ""), ("sk", "")]).unwrap_err();
    assert_eq!(err, AddError::NoGradesProvided);

    assert!(book.is_empty());
}

#[test]
fn a_rejected_submission_keeps_the_prior_record() {
    let mut book = GradeBook::new();
    book.add_checked("Alice", &[("de", "2")])
        .expect("first submission is clean");
    book.add_checked("Alice", &[("de", "9")]).unwrap_err();

    assert_eq!(book.get("Alice"), &[entry("de", 2)]);
}
