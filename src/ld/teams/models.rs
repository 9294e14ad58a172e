//! Team collection data models

use serde::{Deserialize, Serialize};

/// Member summary as listed under a team's maintainers
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MemberSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub role: Option<String>,
}

impl MemberSummary {
    /// "First Last", or whichever part is present
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Built-in role, "unknown" when absent
    pub fn role(&self) -> &str {
        self.role.as_deref().unwrap_or("unknown")
    }
}

/// Custom role assigned to a team
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TeamCustomRole {
    pub key: Option<String>,
    pub name: Option<String>,
}

impl TeamCustomRole {
    pub fn key(&self) -> &str {
        self.key.as_deref().unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_summary_deserialize() {
        let member: MemberSummary = serde_json::from_value(serde_json::json!({
            "_id": "member-1",
            "email": "member1@example.com",
            "firstName": "First1",
            "lastName": "Last1",
            "role": "writer",
            "_links": {}
        }))
        .unwrap();

        assert_eq!(member.id, "member-1");
        assert_eq!(member.email, "member1@example.com");
        assert_eq!(member.display_name(), "First1 Last1");
        assert_eq!(member.role(), "writer");
    }

    #[test]
    fn test_member_summary_minimal() {
        let member: MemberSummary =
            serde_json::from_value(serde_json::json!({"_id": "member-2"})).unwrap();
        assert_eq!(member.email, "");
        assert_eq!(member.display_name(), "");
        assert_eq!(member.role(), "unknown");
    }

    #[test]
    fn test_display_name_single_part() {
        let member: MemberSummary = serde_json::from_value(serde_json::json!({
            "_id": "member-3",
            "lastName": "Only"
        }))
        .unwrap();
        assert_eq!(member.display_name(), "Only");
    }

    #[test]
    fn test_team_custom_role_without_key() {
        let role: TeamCustomRole =
            serde_json::from_value(serde_json::json!({"name": "Nameless"})).unwrap();
        assert!(role.key.is_none());
        assert_eq!(role.key(), "");
        assert_eq!(role.name(), "Nameless");
    }
}
