//! Member and maintainer output formatters

use serde::Serialize;

use super::common::{print_items, Tabular};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::ld::{Member, MemberSummary};

/// Serializable maintainer for structured output
#[derive(Serialize, Debug)]
struct SerializableMaintainer {
    id: String,
    email: String,
    name: String,
    role: String,
}

impl From<&MemberSummary> for SerializableMaintainer {
    fn from(member: &MemberSummary) -> Self {
        Self {
            id: member.id.clone(),
            email: member.email.clone(),
            name: member.display_name(),
            role: member.role().to_string(),
        }
    }
}

impl Tabular for SerializableMaintainer {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "EMAIL", "NAME", "ROLE"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.email.clone(),
            self.name.clone(),
            self.role.clone(),
        ]
    }
}

/// Serializable account member for structured output
#[derive(Serialize, Debug)]
struct SerializableMember {
    id: String,
    email: String,
    first_name: String,
    last_name: String,
    role: String,
    custom_roles: Vec<String>,
}

impl From<&Member> for SerializableMember {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id.clone(),
            email: member.email.clone(),
            first_name: member.first_name().to_string(),
            last_name: member.last_name().to_string(),
            role: member.role().to_string(),
            custom_roles: member.custom_roles.clone(),
        }
    }
}

impl Tabular for SerializableMember {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "EMAIL", "FIRST NAME", "LAST NAME", "ROLE", "CUSTOM ROLES"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.email.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.role.clone(),
            self.custom_roles.join(" "),
        ]
    }
}

/// Output team maintainers in the specified format
pub fn output_maintainers(maintainers: &[MemberSummary], format: OutputFormat) -> Result<()> {
    let rows: Vec<SerializableMaintainer> = maintainers
        .iter()
        .map(SerializableMaintainer::from)
        .collect();
    print_items(&rows, format)
}

/// Output account members in the specified format
pub fn output_members(members: &[Member], format: OutputFormat) -> Result<()> {
    let rows: Vec<SerializableMember> = members.iter().map(SerializableMember::from).collect();
    print_items(&rows, format)
}
