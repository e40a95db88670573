use std::sync::RwLock;

use ahash::AHashMap;
use log::debug;

use crate::data_structs::enrollment::{CourseGroup, Enrollment};
use crate::utils::{read_lock, write_lock};

/// Result of removing registrations by key.
#[derive(Debug, PartialEq, Eq)]
#[derive(Clone, Copy)]
pub enum DropOutcome {
    Removed(usize),
    NotFound,
}

/// Insertion-ordered registrations for one kind of record, held in memory.
///
/// Every operation takes the lock once, so a drop's scan and removal cannot
/// interleave with a concurrent registration.
#[derive(Debug)]
pub struct Roster<R> {
    records: RwLock<Vec<R>>,
}

impl<R: Enrollment> Roster<R> {
    pub fn new() -> Self {
        Roster { records: RwLock::new(Vec::new()) }
    }

    /// Appends the record unconditionally and returns the new roster size.
    pub fn register(&self, record: R) -> usize {
        let mut records = write_lock(&self.records);
        records.push(record);
        records.len()
    }

    /// Removes every record whose email and course both match exactly.
    pub fn drop_registration(&self, email: &str, course: &str) -> DropOutcome {
        let mut records = write_lock(&self.records);
        let before = records.len();
        records.retain(|record| !record.matches(email, course));
        let removed = before - records.len();
        debug!("drop email={} course={} removed={}", email, course, removed);
        match removed {
            0 => DropOutcome::NotFound,
            n => DropOutcome::Removed(n),
        }
    }

    pub fn list(&self) -> Vec<R> {
        read_lock(&self.records).clone()
    }

    pub fn len(&self) -> usize {
        read_lock(&self.records).len()
    }

    /// Partitions the roster by course.
    ///
    /// Courses in `seed` always appear, in seed order, even with no
    /// registrants. Any other course follows in order of its first
    /// registration.
    pub fn group_by_course(&self, seed: &[String]) -> Vec<CourseGroup<R>> {
        let mut groups: Vec<CourseGroup<R>> = Vec::with_capacity(seed.len());
        let mut positions: AHashMap<String, usize> = AHashMap::new();
        for course in seed {
            if !positions.contains_key(course) {
                positions.insert(course.clone(), groups.len());
                groups.push(CourseGroup::empty(course.clone()));
            }
        }

        for record in read_lock(&self.records).iter() {
            let index = match positions.get(record.course()).copied() {
                Some(index) => index,
                None => {
                    positions.insert(record.course().to_string(), groups.len());
                    groups.push(CourseGroup::empty(record.course().to_string()));
                    groups.len() - 1
                }
            };
            groups[index].registrants.push(record.clone());
        }
        groups
    }
}

impl<R: Enrollment> Default for Roster<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structs::student::Student;
    use crate::data_structs::teacher::Teacher;

    fn student(name: &str, email: &str, course: &str) -> Student {
        Student::new(name.to_string(), email.to_string(), course.to_string())
    }

    #[test]
    fn register_appends_in_order() {
        let roster = Roster::new();
        assert_eq!(roster.register(student("A", "a@x.com", "Math")), 1);
        assert_eq!(roster.register(student("B", "b@x.com", "Physics")), 2);

        let emails: Vec<String> = roster.list().into_iter().map(|s| s.email).collect();
        assert_eq!(emails, vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn duplicate_registrations_are_kept() {
        let roster = Roster::new();
        roster.register(student("A", "a@x.com", "Math"));
        roster.register(student("A", "a@x.com", "Math"));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn drop_removes_every_exact_match() {
        let roster = Roster::new();
        roster.register(student("A", "a@x.com", "Math"));
        roster.register(student("B", "b@x.com", "Math"));
        roster.register(student("A", "a@x.com", "Math"));
        roster.register(student("A", "a@x.com", "Physics"));

        assert_eq!(roster.drop_registration("a@x.com", "Math"), DropOutcome::Removed(2));

        let remaining: Vec<(String, String)> = roster.list().into_iter()
            .map(|s| (s.email, s.course))
            .collect();
        assert_eq!(remaining, vec![
            ("b@x.com".to_string(), "Math".to_string()),
            ("a@x.com".to_string(), "Physics".to_string()),
        ]);
    }

    #[test]
    fn drop_is_case_sensitive_and_silent_when_nothing_matches() {
        let roster = Roster::new();
        roster.register(student("A", "a@x.com", "Math"));

        assert_eq!(roster.drop_registration("A@x.com", "Math"), DropOutcome::NotFound);
        assert_eq!(roster.drop_registration("a@x.com", "math"), DropOutcome::NotFound);
        assert_eq!(roster.drop_registration("nobody@x.com", "Math"), DropOutcome::NotFound);
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn grouping_with_seed_keeps_empty_courses() {
        let roster = Roster::new();
        roster.register(student("A", "a@x.com", "Physics"));
        roster.register(student("B", "b@x.com", "Art"));
        roster.register(student("C", "c@x.com", "Physics"));

        let seed = vec!["Math".to_string(), "Physics".to_string()];
        let groups = roster.group_by_course(&seed);

        let summary: Vec<(&str, usize)> = groups.iter()
            .map(|group| (group.course.as_str(), group.registrants.len()))
            .collect();
        assert_eq!(summary, vec![("Math", 0), ("Physics", 2), ("Art", 1)]);
        assert_eq!(groups[1].registrants[0].email, "a@x.com");
        assert_eq!(groups[1].registrants[1].email, "c@x.com");
    }

    #[test]
    fn grouping_without_seed_only_lists_registered_courses() {
        let roster: Roster<Student> = Roster::new();
        assert!(roster.group_by_course(&[]).is_empty());

        roster.register(student("A", "a@x.com", "History"));
        let groups = roster.group_by_course(&[]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].course, "History");
    }

    #[test]
    fn teachers_are_keyed_by_subject() {
        let roster = Roster::new();
        roster.register(Teacher::new("T".to_string(), "t@x.com".to_string(), "Chemistry".to_string()));

        assert_eq!(roster.group_by_course(&[])[0].course, "Chemistry");
        assert_eq!(roster.drop_registration("t@x.com", "Chemistry"), DropOutcome::Removed(1));
        assert!(roster.list().is_empty());
    }
}
