use std::fmt;

/// Custom error type for LaunchDarkly API operations
#[derive(Debug)]
pub enum LdError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Token not found in any source
    TokenNotFound(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
    /// Lookup completed but matched nothing
    NotFound(String),
    /// Retrieval of a paginated collection failed
    Collection {
        /// Collected resource, e.g. "maintainers"
        resource: String,
        /// Owner kind of the collection, e.g. "team"
        scope: String,
        /// Collection identifier, e.g. the team key
        key: String,
        source: Box<LdError>,
    },
}

impl LdError {
    /// Wrap a page fetch failure with the collection it belongs to
    pub fn collection(resource: &str, scope: &str, key: &str, source: LdError) -> Self {
        LdError::Collection {
            resource: resource.to_string(),
            scope: scope.to_string(),
            key: key.to_string(),
            source: Box::new(source),
        }
    }

    /// HTTP status of the underlying API failure, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            LdError::Api { status, .. } => Some(*status),
            LdError::Http(e) => e.status().map(|s| s.as_u16()),
            LdError::Collection { source, .. } => source.status(),
            _ => None,
        }
    }
}

impl fmt::Display for LdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LdError::Http(e) => write!(f, "HTTP request failed: {}", e),
            LdError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            LdError::TokenNotFound(msg) => write!(f, "{}", msg),
            LdError::Json(msg) => write!(f, "JSON error: {}", msg),
            LdError::Config(msg) => write!(f, "Configuration error: {}", msg),
            LdError::NotFound(msg) => write!(f, "{}", msg),
            LdError::Collection {
                resource,
                scope,
                key,
                source,
            } => write!(
                f,
                "failed to get {} for {} '{}': {}",
                resource, scope, key, source
            ),
        }
    }
}

impl std::error::Error for LdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LdError::Http(e) => Some(e),
            LdError::Collection { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LdError {
    fn from(err: reqwest::Error) -> Self {
        LdError::Http(err)
    }
}

impl From<serde_json::Error> for LdError {
    fn from(err: serde_json::Error) -> Self {
        LdError::Json(err.to_string())
    }
}

/// Result type alias for LaunchDarkly operations
pub type Result<T> = std::result::Result<T, LdError>;
