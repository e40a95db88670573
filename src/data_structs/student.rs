use serde::{Deserialize, Serialize};

use crate::data_structs::enrollment::Enrollment;

#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
#[derive(Clone)]
pub struct Student {
    pub name: String,
    pub email: String,
    pub course: String,
    pub registered_at: i64,
}

impl Student {
    pub fn new(name: String, email: String, course: String) -> Self {
        Student {
            name,
            email,
            course,
            registered_at: chrono::Local::now().timestamp(),
        }
    }
}

impl Enrollment for Student {
    fn email(&self) -> &str {
        &self.email
    }

    fn course(&self) -> &str {
        &self.course
    }
}
