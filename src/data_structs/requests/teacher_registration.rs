use serde::{Deserialize, Serialize};

use crate::data_structs::teacher::Teacher;
use crate::error::AppError;
use crate::utils::required;

#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
pub struct TeacherRegistration {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
}

impl TeacherRegistration {
    pub fn into_teacher(self) -> Result<Teacher, AppError> {
        Ok(Teacher::new(
            required(self.name, "name")?,
            required(self.email, "email")?,
            required(self.subject, "subject")?,
        ))
    }
}
