//! Project environment data models

use serde::{Deserialize, Serialize};

/// Environment of a project
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Environment {
    pub key: String,
    pub name: Option<String>,
    pub color: Option<String>,
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Environment {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or("")
    }
}
