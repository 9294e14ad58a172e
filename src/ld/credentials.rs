//! API token resolution from multiple sources

use log::debug;

use crate::config::credentials;
use crate::error::{LdError, Result};

/// Credential sent in the `Authorization` header
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Personal or service access token, sent as-is
    AccessToken(String),
    /// OAuth token, sent as a bearer token
    OAuth(String),
}

impl Credential {
    /// Value of the `Authorization` header
    pub fn authorization(&self) -> String {
        match self {
            Credential::AccessToken(token) => token.clone(),
            Credential::OAuth(token) => format!("Bearer {}", token),
        }
    }

    pub fn is_oauth(&self) -> bool {
        matches!(self, Credential::OAuth(_))
    }
}

// Never print the token itself
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credential::AccessToken(_) => write!(f, "AccessToken(***)"),
            Credential::OAuth(_) => write!(f, "OAuth(***)"),
        }
    }
}

/// Token resolution with fallback logic
pub struct TokenResolver;

impl TokenResolver {
    /// Resolve the credential from multiple sources with fallback:
    /// 1. CLI argument (if provided; `oauth` selects the kind)
    /// 2. LAUNCHDARKLY_ACCESS_TOKEN environment variable
    /// 3. LAUNCHDARKLY_OAUTH_TOKEN environment variable
    pub fn resolve(cli_token: Option<&str>, oauth: bool) -> Result<Credential> {
        Self::resolve_with(cli_token, oauth, |name| std::env::var(name).ok())
    }

    /// Same as [`resolve`](Self::resolve) with a custom environment lookup
    pub fn resolve_with<F>(cli_token: Option<&str>, oauth: bool, lookup: F) -> Result<Credential>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = cli_token.filter(|t| !t.is_empty()) {
            debug!("Using token from CLI argument");
            return Ok(if oauth {
                Credential::OAuth(token.to_string())
            } else {
                Credential::AccessToken(token.to_string())
            });
        }

        if let Some(token) = lookup(credentials::ACCESS_TOKEN_ENV_VAR).filter(|t| !t.is_empty()) {
            debug!(
                "Using token from {} environment variable",
                credentials::ACCESS_TOKEN_ENV_VAR
            );
            return Ok(Credential::AccessToken(token));
        }

        if let Some(token) = lookup(credentials::OAUTH_TOKEN_ENV_VAR).filter(|t| !t.is_empty()) {
            debug!(
                "Using token from {} environment variable",
                credentials::OAUTH_TOKEN_ENV_VAR
            );
            return Ok(Credential::OAuth(token));
        }

        Err(LdError::TokenNotFound(Self::token_not_found_message()))
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message() -> String {
        format!(
            "No API token found. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      ldctl --token <TOKEN>  (add --oauth for OAuth tokens)\n\
             2. Environment var:   export {}=<TOKEN>\n\
             3. Environment var:   export {}=<TOKEN>",
            credentials::ACCESS_TOKEN_ENV_VAR,
            credentials::OAUTH_TOKEN_ENV_VAR
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolver_cli_token_takes_precedence() {
        let result = TokenResolver::resolve_with(Some("cli-token-123"), false, |_| {
            Some("env-token".to_string())
        });
        assert_eq!(
            result.unwrap(),
            Credential::AccessToken("cli-token-123".to_string())
        );
    }

    #[test]
    fn test_resolver_cli_oauth_token() {
        let credential = TokenResolver::resolve_with(Some("oauth-123"), true, no_env).unwrap();
        assert!(credential.is_oauth());
        assert_eq!(credential.authorization(), "Bearer oauth-123");
    }

    #[test]
    fn test_resolver_access_token_env() {
        let credential = TokenResolver::resolve_with(None, false, |name| {
            (name == credentials::ACCESS_TOKEN_ENV_VAR).then(|| "api-abc".to_string())
        })
        .unwrap();
        assert_eq!(credential.authorization(), "api-abc");
    }

    #[test]
    fn test_resolver_access_token_env_before_oauth_env() {
        let credential =
            TokenResolver::resolve_with(None, false, |name| Some(format!("{}-value", name)))
                .unwrap();
        assert!(!credential.is_oauth());
    }

    #[test]
    fn test_resolver_oauth_env() {
        let credential = TokenResolver::resolve_with(None, false, |name| {
            (name == credentials::OAUTH_TOKEN_ENV_VAR).then(|| "oauth-xyz".to_string())
        })
        .unwrap();
        assert_eq!(credential, Credential::OAuth("oauth-xyz".to_string()));
    }

    #[test]
    fn test_resolver_ignores_empty_values() {
        let result = TokenResolver::resolve_with(Some(""), false, |_| Some(String::new()));
        assert!(matches!(result, Err(LdError::TokenNotFound(_))));
    }

    #[test]
    fn test_token_not_found_message_format() {
        let err = TokenResolver::resolve_with(None, false, no_env).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("ldctl --token"));
        assert!(msg.contains("LAUNCHDARKLY_ACCESS_TOKEN"));
        assert!(msg.contains("LAUNCHDARKLY_OAUTH_TOKEN"));
    }

    #[test]
    fn test_debug_hides_token() {
        let credential = Credential::AccessToken("secret".to_string());
        assert!(!format!("{:?}", credential).contains("secret"));
    }
}
