//! Account member API operations

use log::debug;

use crate::config::api;
use crate::error::{LdError, Result};
use crate::ld::LdClient;

use super::models::Member;

/// Collection key used for account-wide listings
const ACCOUNT_KEY: &str = "*";

impl LdClient {
    /// Get all members of the account (with pagination)
    pub async fn get_all_members(&self) -> Result<Vec<Member>> {
        let path = format!("/{}", api::MEMBERS);
        let collector = self.collector("members", "account");

        self.fetch_collection(&collector, ACCOUNT_KEY, &path).await
    }

    /// Get all members belonging to a team (with pagination)
    pub async fn get_all_team_members(&self, team_key: &str) -> Result<Vec<Member>> {
        let path = format!(
            "/{}?filter={}",
            api::MEMBERS,
            urlencoding::encode(&format!("team:{}", team_key))
        );
        let collector = self.collector("members", "team");

        self.fetch_collection(&collector, team_key, &path).await
    }

    /// Find a member by exact email address
    ///
    /// The `query:` filter matches partially, so every page of candidates is
    /// read and the exact (case-sensitive) match picked afterwards.
    pub async fn get_member_by_email(&self, email: &str) -> Result<Member> {
        let path = format!(
            "/{}?filter={}",
            api::MEMBERS,
            urlencoding::encode(&format!("query:{}", email))
        );
        let collector = self.collector("members", "email");

        let candidates: Vec<Member> = self.fetch_collection(&collector, email, &path).await?;
        debug!(
            "Found {} candidate members for email '{}'",
            candidates.len(),
            email
        );

        candidates
            .into_iter()
            .find(|m| m.email == email)
            .ok_or_else(|| {
                LdError::NotFound(format!("failed to find team member with email: {}", email))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn member_json(id: &str, email: &str) -> serde_json::Value {
        serde_json::json!({
            "_id": id,
            "email": email,
            "firstName": "Test",
            "lastName": "User",
            "role": "reader",
            "customRoles": []
        })
    }

    #[tokio::test]
    async fn test_get_all_members_two_pages() {
        let mock_server = MockServer::start().await;

        let first: Vec<serde_json::Value> = (1..=100)
            .map(|i| member_json(&format!("m-{}", i), &format!("user{}@example.com", i)))
            .collect();
        Mock::given(method("GET"))
            .and(path("/members"))
            .and(query_param("offset", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "totalCount": 101,
                "items": first
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/members"))
            .and(query_param("offset", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "totalCount": 101,
                "items": [member_json("m-101", "user101@example.com")]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = LdClient::test_client(&mock_server.uri());
        let members = client.get_all_members().await.unwrap();

        assert_eq!(members.len(), 101);
        assert_eq!(members[100].id, "m-101");
    }

    #[tokio::test]
    async fn test_get_all_team_members_uses_team_filter() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/members"))
            .and(query_param("filter", "team:platform"))
            .and(query_param("limit", "100"))
            .and(query_param("offset", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "totalCount": 2,
                "items": [
                    member_json("m-1", "a@example.com"),
                    member_json("m-2", "b@example.com")
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = LdClient::test_client(&mock_server.uri());
        let members = client.get_all_team_members("platform").await.unwrap();

        assert_eq!(members.len(), 2);
        assert_eq!(members[0].email, "a@example.com");
    }

    #[tokio::test]
    async fn test_get_all_team_members_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/members"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = LdClient::test_client(&mock_server.uri());
        let err = client.get_all_team_members("platform").await.unwrap_err();

        assert!(err
            .to_string()
            .contains("failed to get members for team 'platform'"));
    }

    #[tokio::test]
    async fn test_get_member_by_email_exact_match() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/members"))
            .and(query_param("filter", "query:ada@example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "totalCount": 2,
                "items": [
                    member_json("m-1", "ada@example.com.au"),
                    member_json("m-2", "ada@example.com")
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = LdClient::test_client(&mock_server.uri());
        let member = client.get_member_by_email("ada@example.com").await.unwrap();

        assert_eq!(member.id, "m-2");
    }

    #[tokio::test]
    async fn test_get_member_by_email_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/members"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "totalCount": 0,
                "items": []
            })))
            .mount(&mock_server)
            .await;

        let client = LdClient::test_client(&mock_server.uri());
        let err = client
            .get_member_by_email("nobody@example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, LdError::NotFound(_)));
        assert!(err.to_string().contains("nobody@example.com"));
    }
}
