//! Account member data models

use serde::{Deserialize, Serialize};

/// Account member from the members listing
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Member {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub role: Option<String>,
    /// Custom role IDs (not keys)
    #[serde(rename = "customRoles", default)]
    pub custom_roles: Vec<String>,
}

impl Member {
    pub fn first_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or("")
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_deref().unwrap_or("")
    }

    pub fn role(&self) -> &str {
        self.role.as_deref().unwrap_or("unknown")
    }
}
