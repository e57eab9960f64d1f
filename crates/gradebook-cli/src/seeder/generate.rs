//! In-memory generation of seed data. Nothing here touches the database.

use fake::Fake;
use fake::faker::name::en::Name;
use rand::Rng;
use rand::seq::SliceRandom;

const SUBJECT_NAMES: &[&str] = &[
    "Mathematics",
    "English",
    "Physics",
    "Chemistry",
    "Biology",
    "History",
    "Geography",
    "Art",
    "Music",
    "Computer Science",
];

pub const MIN_SCORE: i32 = 40;
pub const MAX_SCORE: i32 = 100;

/// An enrollment by position in the generated student and subject lists,
/// with the score of the mark recorded for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedMark {
    pub student_idx: usize,
    pub subject_idx: usize,
    pub score: i32,
}

pub fn student_names(count: usize) -> Vec<String> {
    (0..count).map(|_| Name().fake()).collect()
}

/// Subject names from a fixed catalogue, numbered once it runs out.
pub fn subject_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let base = SUBJECT_NAMES[i % SUBJECT_NAMES.len()];
            match i / SUBJECT_NAMES.len() {
                0 => base.to_string(),
                round => format!("{} {}", base, round + 1),
            }
        })
        .collect()
}

/// Enrolls every student in at least one subject and gives each enrollment a
/// mark. Each (student, subject) pair appears at most once.
pub fn plan_marks<R: Rng>(students: usize, subjects: usize, rng: &mut R) -> Vec<PlannedMark> {
    if subjects == 0 {
        return Vec::new();
    }

    let subject_indices: Vec<usize> = (0..subjects).collect();
    let mut planned = Vec::new();

    for student_idx in 0..students {
        let take = rng.gen_range(1..=subjects);
        for &subject_idx in subject_indices.choose_multiple(rng, take) {
            planned.push(PlannedMark {
                student_idx,
                subject_idx,
                score: rng.gen_range(MIN_SCORE..=MAX_SCORE),
            });
        }
    }

    planned
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_subject_names_number_repeats() {
        let names = subject_names(SUBJECT_NAMES.len() + 2);
        assert_eq!(names[0], "Mathematics");
        assert_eq!(names[SUBJECT_NAMES.len()], "Mathematics 2");
        assert_eq!(names[SUBJECT_NAMES.len() + 1], "English 2");
    }

    #[test]
    fn test_student_names_count() {
        let names = student_names(5);
        assert_eq!(names.len(), 5);
        assert!(names.iter().all(|n| !n.is_empty()));
    }

    #[test]
    fn test_plan_marks_pairs_are_unique() {
        let mut rng = StdRng::seed_from_u64(7);
        let planned = plan_marks(30, 4, &mut rng);

        let pairs: HashSet<(usize, usize)> = planned
            .iter()
            .map(|m| (m.student_idx, m.subject_idx))
            .collect();
        assert_eq!(pairs.len(), planned.len());

        for student_idx in 0..30 {
            assert!(planned.iter().any(|m| m.student_idx == student_idx));
        }
        assert!(
            planned
                .iter()
                .all(|m| (MIN_SCORE..=MAX_SCORE).contains(&m.score) && m.subject_idx < 4)
        );
    }

    #[test]
    fn test_plan_marks_without_subjects() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(plan_marks(10, 0, &mut rng).is_empty());
    }
}
