use serde::{Deserialize, Serialize};

use crate::data_structs::student::Student;
use crate::data_structs::teacher::Teacher;

#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
pub struct StudentsView {
    pub students: Vec<Student>,
}

#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
pub struct TeachersView {
    pub teachers: Vec<Teacher>,
}
