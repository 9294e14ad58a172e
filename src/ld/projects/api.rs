//! Project environment API operations

use crate::config::api;
use crate::error::Result;
use crate::ld::LdClient;

use super::models::Environment;

impl LdClient {
    /// Get all environments of a project (with pagination)
    pub async fn get_all_environments(&self, project_key: &str) -> Result<Vec<Environment>> {
        let path = format!(
            "/{}/{}/{}",
            api::PROJECTS,
            urlencoding::encode(project_key),
            api::ENVIRONMENTS
        );
        let collector = self.collector("environments", "project");

        self.fetch_collection(&collector, project_key, &path).await
    }
}
