use serde::{Deserialize, Serialize};

use crate::data_structs::student::Student;
use crate::error::AppError;
use crate::utils::required;

#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
pub struct StudentRegistration {
    pub name: Option<String>,
    pub email: Option<String>,
    pub course: Option<String>,
}

impl StudentRegistration {
    pub fn into_student(self) -> Result<Student, AppError> {
        Ok(Student::new(
            required(self.name, "name")?,
            required(self.email, "email")?,
            required(self.course, "course")?,
        ))
    }
}
