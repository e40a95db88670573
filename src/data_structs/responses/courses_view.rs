use serde::{Deserialize, Serialize};

use crate::data_structs::enrollment::CourseGroup;
use crate::data_structs::student::Student;
use crate::data_structs::teacher::Teacher;

#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
pub struct CoursesView {
    pub catalog: Vec<String>,
    pub students_by_course: Vec<CourseGroup<Student>>,
    pub teachers_by_subject: Vec<CourseGroup<Teacher>>,
}
