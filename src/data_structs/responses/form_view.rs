use serde::{Deserialize, Serialize};

/// Describes the form a client should submit to `action`.
#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
pub struct FormView {
    pub action: String,
    pub fields: Vec<String>,
    pub catalog: Vec<String>,
}

impl FormView {
    pub fn new(action: &str, fields: &[&str], catalog: Vec<String>) -> Self {
        FormView {
            action: action.to_string(),
            fields: fields.iter().map(|field| field.to_string()).collect(),
            catalog,
        }
    }
}
