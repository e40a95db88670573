use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
pub struct RegistrationsView {
    pub catalog: Vec<String>,
    pub registered: Vec<String>,
}
