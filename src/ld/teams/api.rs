//! Team collection API operations

use crate::config::api;
use crate::error::Result;
use crate::ld::LdClient;

use super::models::{MemberSummary, TeamCustomRole};

impl LdClient {
    /// Get all maintainers of a team (with pagination)
    pub async fn get_all_team_maintainers(&self, team_key: &str) -> Result<Vec<MemberSummary>> {
        let path = format!(
            "/{}/{}/maintainers",
            api::TEAMS,
            urlencoding::encode(team_key)
        );
        let collector = self.collector("maintainers", "team");

        self.fetch_collection(&collector, team_key, &path).await
    }

    /// Get all custom roles assigned to a team (with pagination)
    ///
    /// Expanding roles on the team itself caps out at 20 entries, so the
    /// dedicated roles endpoint is paged instead.
    pub async fn get_all_team_roles(&self, team_key: &str) -> Result<Vec<TeamCustomRole>> {
        let path = format!("/{}/{}/roles", api::TEAMS, urlencoding::encode(team_key));
        let collector = self.collector("custom roles", "team");

        self.fetch_collection(&collector, team_key, &path).await
    }

    /// Get the keys of all custom roles assigned to a team
    ///
    /// Roles without a key are skipped.
    pub async fn get_all_team_role_keys(&self, team_key: &str) -> Result<Vec<String>> {
        let roles = self.get_all_team_roles(team_key).await?;
        Ok(roles.into_iter().filter_map(|r| r.key).collect())
    }
}
