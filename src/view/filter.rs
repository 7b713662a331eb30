//! Search filters and sorting.
//!
//! Matching is a case-insensitive substring test; an empty or blank term
//! returns the input unchanged.

use crate::domain::{ClassSubject, GradeBoundary, SchoolClass, Session, Subject};

fn normalise(term: &str) -> Option<String> {
    let term = term.trim();
    (!term.is_empty()).then(|| term.to_lowercase())
}

fn contains(field: &str, needle: &str) -> bool {
    field.to_lowercase().contains(needle)
}

fn filter_by<T: Clone>(items: &[T], term: &str, fields: impl Fn(&T, &str) -> bool) -> Vec<T> {
    match normalise(term) {
        None => items.to_vec(),
        Some(needle) => items
            .iter()
            .filter(|item| fields(item, &needle))
            .cloned()
            .collect(),
    }
}

#[must_use]
pub fn filter_sessions(sessions: &[Session], term: &str) -> Vec<Session> {
    filter_by(sessions, term, |s, needle| contains(&s.session_name, needle))
}

#[must_use]
pub fn filter_subjects(subjects: &[Subject], term: &str) -> Vec<Subject> {
    filter_by(subjects, term, |s, needle| {
        contains(&s.subject_name, needle) || contains(&s.subject_code, needle)
    })
}

#[must_use]
pub fn filter_classes(classes: &[SchoolClass], term: &str) -> Vec<SchoolClass> {
    filter_by(classes, term, |c, needle| {
        contains(&c.display_name, needle)
            || contains(&c.class_name, needle)
            || contains(&c.session_name, needle)
            || c.section.as_deref().is_some_and(|s| contains(s, needle))
    })
}

/// Filter links by search term and, optionally, by class.
#[must_use]
pub fn filter_class_subjects(
    links: &[ClassSubject],
    term: &str,
    class_id: Option<i64>,
) -> Vec<ClassSubject> {
    let scoped: Vec<ClassSubject> = match class_id {
        Some(id) => links.iter().filter(|l| l.class_id == id).cloned().collect(),
        None => links.to_vec(),
    };
    filter_by(&scoped, term, |l, needle| {
        contains(&l.class_name, needle)
            || l.section.as_deref().is_some_and(|s| contains(s, needle))
            || contains(&l.subject_name, needle)
            || contains(&l.subject_code, needle)
    })
}

/// Boundaries ordered by descending minimum percentage.
#[must_use]
pub fn sort_by_min_percentage_desc(boundaries: &[GradeBoundary]) -> Vec<GradeBoundary> {
    let mut sorted = boundaries.to_vec();
    sorted.sort_by(|a, b| b.min_percentage.cmp(&a.min_percentage));
    sorted
}

/// Sorted boundaries matching the grade letter or either percentage.
#[must_use]
pub fn filter_grade_boundaries(boundaries: &[GradeBoundary], term: &str) -> Vec<GradeBoundary> {
    filter_by(&sort_by_min_percentage_desc(boundaries), term, |b, needle| {
        contains(&b.grade, needle)
            || b.min_percentage.normalize().to_string().contains(needle)
            || b.max_percentage.normalize().to_string().contains(needle)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::{class, class_subject, grade_boundary, session, subject};
    use rust_decimal_macros::dec;

    #[test]
    fn test_blank_term_returns_input() {
        let sessions = vec![session(1, "2023-2024"), session(2, "2024-2025")];
        assert_eq!(filter_sessions(&sessions, "   "), sessions);
    }

    #[test]
    fn test_session_match_is_case_insensitive() {
        let sessions = vec![session(1, "Spring Term"), session(2, "Autumn Term")];
        let found = filter_sessions(&sessions, "SPRING");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn test_subject_matches_name_or_code() {
        let subjects = vec![subject(1, "Mathematics", "MATH101"), subject(2, "Physics", "PHY")];
        assert_eq!(filter_subjects(&subjects, "math")[0].id, 1);
        assert_eq!(filter_subjects(&subjects, "phy")[0].id, 2);
        assert!(filter_subjects(&subjects, "chem").is_empty());
    }

    #[test]
    fn test_class_matches_section_and_session() {
        let mut a = class(1, 10, "Grade 5");
        a.section = Some("B".into());
        a.session_name = "2024-2025".into();
        let b = class(2, 10, "Grade 6");

        assert_eq!(filter_classes(&[a.clone(), b.clone()], "2024").len(), 1);
        assert_eq!(filter_classes(&[a, b], "grade 6")[0].id, 2);
    }

    #[test]
    fn test_class_subject_class_filter_applies_before_search() {
        let links = vec![
            class_subject(1, 2, 5),
            class_subject(2, 3, 5),
            class_subject(3, 2, 6),
        ];
        let in_class = filter_class_subjects(&links, "", Some(2));
        assert_eq!(in_class.iter().map(|l| l.id).collect::<Vec<_>>(), vec![1, 3]);

        let searched = filter_class_subjects(&links, "SUBJ-6", Some(2));
        assert_eq!(searched.len(), 1);
        assert_eq!(searched[0].id, 3);
    }

    #[test]
    fn test_grade_boundaries_sorted_descending() {
        let boundaries = vec![
            grade_boundary(1, "C", dec!(50), dec!(64.99), true),
            grade_boundary(2, "A", dec!(80), dec!(100), true),
            grade_boundary(3, "F", dec!(0), dec!(39.99), false),
        ];
        let grades: Vec<String> = sort_by_min_percentage_desc(&boundaries)
            .into_iter()
            .map(|b| b.grade)
            .collect();
        assert_eq!(grades, vec!["A", "C", "F"]);
    }

    #[test]
    fn test_grade_filter_matches_percentage_text() {
        let boundaries = vec![
            grade_boundary(1, "C", dec!(50), dec!(64.99), true),
            grade_boundary(2, "A", dec!(80), dec!(100), true),
        ];
        let found = filter_grade_boundaries(&boundaries, "64.9");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].grade, "C");
        assert_eq!(filter_grade_boundaries(&boundaries, "a")[0].grade, "A");
    }
}
