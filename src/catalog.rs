use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::RwLock;

use log::info;

use crate::utils::{read_lock, write_lock};

/// Whether the catalog is fixed at startup or grows with student input.
#[derive(Debug, PartialEq, Eq)]
#[derive(Clone, Copy)]
pub enum CatalogMode {
    Fixed,
    Dynamic,
}

impl CatalogMode {
    pub fn as_str(&self) -> &str {
        match self {
            CatalogMode::Fixed => "fixed",
            CatalogMode::Dynamic => "dynamic",
        }
    }
}

impl Display for CatalogMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(CatalogMode::Fixed),
            "dynamic" => Ok(CatalogMode::Dynamic),
            other => Err(format!("unknown catalog mode `{}`, expected `fixed` or `dynamic`", other)),
        }
    }
}

#[derive(Debug)]
pub struct Catalog {
    mode: CatalogMode,
    courses: RwLock<Vec<String>>,
}

impl Catalog {
    pub fn new(mode: CatalogMode, courses: Vec<String>) -> Self {
        Catalog { mode, courses: RwLock::new(courses) }
    }

    pub fn mode(&self) -> CatalogMode {
        self.mode
    }

    pub fn courses(&self) -> Vec<String> {
        read_lock(&self.courses).clone()
    }

    /// Records a course typed by a student. Returns true if the catalog grew.
    pub fn observe(&self, course: &str) -> bool {
        if self.mode == CatalogMode::Fixed {
            return false;
        }
        let mut courses = write_lock(&self.courses);
        if courses.iter().any(|known| known == course) {
            return false;
        }
        courses.push(course.to_string());
        info!("Catalog grew with new course {}", course);
        true
    }

    /// Courses that must appear when grouping, even with nobody registered.
    pub fn seed(&self) -> Vec<String> {
        match self.mode {
            CatalogMode::Fixed => self.courses(),
            CatalogMode::Dynamic => Vec::new(),
        }
    }
}
