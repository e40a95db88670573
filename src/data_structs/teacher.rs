use serde::{Deserialize, Serialize};

use crate::data_structs::enrollment::Enrollment;

#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
#[derive(Clone)]
pub struct Teacher {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub registered_at: i64,
}

impl Teacher {
    pub fn new(name: String, email: String, subject: String) -> Self {
        Teacher {
            name,
            email,
            subject,
            registered_at: chrono::Local::now().timestamp(),
        }
    }
}

// teachers are grouped and dropped by the subject they teach
impl Enrollment for Teacher {
    fn email(&self) -> &str {
        &self.email
    }

    fn course(&self) -> &str {
        &self.subject
    }
}
