use serde::{Deserialize, Serialize};

/// A roster entry that can be matched for a drop and grouped by course.
pub trait Enrollment: Clone {
    fn email(&self) -> &str;
    /// The course (or subject) this record is registered under.
    fn course(&self) -> &str;

    fn matches(&self, email: &str, course: &str) -> bool {
        self.email() == email && self.course() == course
    }
}

#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
#[derive(Clone)]
pub struct CourseGroup<R> {
    pub course: String,
    pub registrants: Vec<R>,
}

impl<R> CourseGroup<R> {
    pub fn empty(course: String) -> Self {
        CourseGroup { course, registrants: Vec::new() }
    }
}
