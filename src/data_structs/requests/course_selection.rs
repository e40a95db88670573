use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::utils::required;

/// Body of `POST /register` and `POST /unregister` for the anonymous registration list.
#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
pub struct CourseSelection {
    pub course: Option<String>,
}

impl CourseSelection {
    pub fn into_course(self) -> Result<String, AppError> {
        required(self.course, "course")
    }
}
