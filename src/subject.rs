#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::Serialize;

/// The two halves of the leaving certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectGroup {
    /// General-education subjects (Deutsch, Religion/Ethik, ...).
    General,
    /// Vocational learning fields (LF1 through LF12).
    Vocational,
}

/// A subject in the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Subject {
    /// Display name as it appears on the certificate.
    pub name:  &'static str,
    /// Short canonical code, the stable column key for serialization.
    pub code:  &'static str,
    /// The certificate group this subject counts towards.
    pub group: SubjectGroup,
}

impl Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The full catalog in canonical column order: the five general-education
/// subjects, then the learning fields in numeric order. For the learning
/// fields the display name and the code are the same.
pub static SUBJECTS: [Subject; 17] = [
    Subject {
        name:  "Deutsch",
        code:  "de",
        group: SubjectGroup::General,
    },
    Subject {
        name:  "Religion/Ethik",
        code:  "et",
        group: SubjectGroup::General,
    },
    Subject {
        name:  "Sozialkunde",
        code:  "sk",
        group: SubjectGroup::General,
    },
    Subject {
        name:  "Sport",
        code:  "sp",
        group: SubjectGroup::General,
    },
    Subject {
        name:  "Wirtschaftslehre",
        code:  "wl",
        group: SubjectGroup::General,
    },
    Subject {
        name:  "LF1",
        code:  "LF1",
        group: SubjectGroup::Vocational,
    },
    Subject {
        name:  "LF2",
        code:  "LF2",
        group: SubjectGroup::Vocational,
    },
    Subject {
        name:  "LF3",
        code:  "LF3",
        group: SubjectGroup::Vocational,
    },
    Subject {
        name:  "LF4",
        code:  "LF4",
        group: SubjectGroup::Vocational,
    },
    Subject {
        name:  "LF5",
        code:  "LF5",
        group: SubjectGroup::Vocational,
    },
    Subject {
        name:  "LF6",
        code:  "LF6",
        group: SubjectGroup::Vocational,
    },
    Subject {
        name:  "LF7",
        code:  "LF7",
        group: SubjectGroup::Vocational,
    },
    Subject {
        name:  "LF8",
        code:  "LF8",
        group: SubjectGroup::Vocational,
    },
    Subject {
        name:  "LF9",
        code:  "LF9",
        group: SubjectGroup::Vocational,
    },
    Subject {
        name:  "LF10",
        code:  "LF10",
        group: SubjectGroup::Vocational,
    },
    Subject {
        name:  "LF11",
        code:  "LF11",
        group: SubjectGroup::Vocational,
    },
    Subject {
        name:  "LF12",
        code:  "LF12",
        group: SubjectGroup::Vocational,
    },
];

/// Looks up a subject by its canonical code.
pub fn by_code(code: &str) -> Option<&'static Subject> {
    SUBJECTS.iter().find(|subject| subject.code == code)
}

/// Looks up a subject by display name or canonical code, whichever the
/// caller happens to have.
pub fn find(name_or_code: &str) -> Option<&'static Subject> {
    SUBJECTS
        .iter()
        .find(|subject| subject.name == name_or_code || subject.code == name_or_code)
}

/// All subject codes in canonical column order.
pub fn codes() -> impl Iterator<Item = &'static str> {
    SUBJECTS.iter().map(|subject| subject.code)
}

/// The subjects belonging to `group`, in canonical order.
pub fn in_group(group: SubjectGroup) -> impl Iterator<Item = &'static Subject> {
    SUBJECTS.iter().filter(move |subject| subject.group == group)
}
