//! Project environment output formatter

use serde::Serialize;

use super::common::{print_items, Tabular};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::ld::Environment;

#[derive(Serialize, Debug)]
struct SerializableEnvironment {
    key: String,
    name: String,
    color: String,
    tags: Vec<String>,
}

impl From<&Environment> for SerializableEnvironment {
    fn from(env: &Environment) -> Self {
        Self {
            key: env.key.clone(),
            name: env.name().to_string(),
            color: env.color().to_string(),
            tags: env.tags.clone(),
        }
    }
}

impl Tabular for SerializableEnvironment {
    fn headers() -> Vec<&'static str> {
        vec!["KEY", "NAME", "COLOR", "TAGS"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.key.clone(),
            self.name.clone(),
            self.color.clone(),
            self.tags.join(" "),
        ]
    }
}

/// Output project environments in the specified format
pub fn output_environments(environments: &[Environment], format: OutputFormat) -> Result<()> {
    let rows: Vec<SerializableEnvironment> = environments
        .iter()
        .map(SerializableEnvironment::from)
        .collect();
    print_items(&rows, format)
}
