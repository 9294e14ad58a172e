//! Team custom role output formatter

use serde::Serialize;

use super::common::{print_items, Tabular};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::ld::TeamCustomRole;

/// Serializable custom role for structured output
#[derive(Serialize, Debug)]
struct SerializableRole {
    key: String,
    name: String,
}

impl From<&TeamCustomRole> for SerializableRole {
    fn from(role: &TeamCustomRole) -> Self {
        Self {
            key: role.key().to_string(),
            name: role.name().to_string(),
        }
    }
}

impl Tabular for SerializableRole {
    fn headers() -> Vec<&'static str> {
        vec!["KEY", "NAME"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.key.clone(), self.name.clone()]
    }
}

/// Output team custom roles in the specified format
pub fn output_roles(roles: &[TeamCustomRole], format: OutputFormat) -> Result<()> {
    let rows: Vec<SerializableRole> = roles.iter().map(SerializableRole::from).collect();
    print_items(&rows, format)
}

/// Output role keys: one per line, or a JSON array of strings
pub fn output_role_keys(keys: &[String], format: OutputFormat) -> Result<()> {
    println!("{}", render_role_keys(keys, format)?);
    Ok(())
}

fn render_role_keys(keys: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => super::common::render_json(keys),
        OutputFormat::Table | OutputFormat::Csv => Ok(keys.join("\n")),
    }
}
