use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::utils::required;

/// Body of `POST /drop`.
#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
pub struct DropRequest {
    pub email: Option<String>,
    pub course: Option<String>,
}

/// Body of `POST /drop/teacher`.
#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
pub struct TeacherDropRequest {
    pub email: Option<String>,
    pub subject: Option<String>,
}

impl DropRequest {
    /// Returns the `(email, course)` key to drop.
    pub fn into_key(self) -> Result<(String, String), AppError> {
        Ok((required(self.email, "email")?, required(self.course, "course")?))
    }
}

impl TeacherDropRequest {
    pub fn into_key(self) -> Result<(String, String), AppError> {
        Ok((required(self.email, "email")?, required(self.subject, "subject")?))
    }
}
