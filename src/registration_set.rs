use std::sync::RwLock;

use crate::roster::DropOutcome;
use crate::utils::{read_lock, write_lock};

/// Course names registered by the single anonymous user. No duplicates.
#[derive(Debug, Default)]
pub struct RegistrationSet {
    courses: RwLock<Vec<String>>,
}

impl RegistrationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the course if it is not already registered. Returns true if added.
    pub fn register(&self, course: &str) -> bool {
        let mut courses = write_lock(&self.courses);
        if courses.iter().any(|registered| registered == course) {
            return false;
        }
        courses.push(course.to_string());
        true
    }

    pub fn unregister(&self, course: &str) -> DropOutcome {
        let mut courses = write_lock(&self.courses);
        match courses.iter().position(|registered| registered == course) {
            Some(index) => {
                courses.remove(index);
                DropOutcome::Removed(1)
            }
            None => DropOutcome::NotFound,
        }
    }

    pub fn list(&self) -> Vec<String> {
        read_lock(&self.courses).clone()
    }
}
