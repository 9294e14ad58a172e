/// Configuration constants for the LaunchDarkly REST API
pub mod api {
    /// Base path for API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Value sent in the `LD-API-Version` header
    pub const VERSION: &str = "20240415";

    /// Teams endpoint
    pub const TEAMS: &str = "teams";

    /// Account members endpoint
    pub const MEMBERS: &str = "members";

    /// Projects endpoint
    pub const PROJECTS: &str = "projects";

    /// Environments sub-resource of a project
    pub const ENVIRONMENTS: &str = "environments";

    /// Default page size for collection requests.
    ///
    /// Four times the API's default page size of 25.
    pub const DEFAULT_PAGE_LIMIT: u32 = 100;

    /// Smallest accepted page size
    pub const MIN_PAGE_LIMIT: u32 = 1;

    /// Largest accepted page size (member listing maximum)
    pub const MAX_PAGE_LIMIT: u32 = 1000;

    /// Maximum concurrent page requests for the concurrent collector
    pub const MAX_CONCURRENT_PAGE_REQUESTS: usize = 4;
}

/// Transport retry settings
pub mod retry {
    use std::time::Duration;

    /// Maximum retries per request
    pub const MAX_RETRIES: u32 = 12;

    /// First backoff step
    pub const WAIT_MIN: Duration = Duration::from_millis(200);

    /// Backoff ceiling
    pub const WAIT_MAX: Duration = Duration::from_millis(10_000);

    /// Header carrying the rate limit reset time (epoch milliseconds)
    pub const RATE_LIMIT_RESET_HEADER: &str = "X-RateLimit-Reset";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable holding an API access token
    pub const ACCESS_TOKEN_ENV_VAR: &str = "LAUNCHDARKLY_ACCESS_TOKEN";

    /// Environment variable holding an OAuth token
    pub const OAUTH_TOKEN_ENV_VAR: &str = "LAUNCHDARKLY_OAUTH_TOKEN";
}

/// Configuration constants for host resolution
pub mod host {
    /// Environment variable for the API host
    pub const ENV_VAR: &str = "LAUNCHDARKLY_API_HOST";
}

/// Default values for CLI
pub mod defaults {
    /// Default API host
    pub const HOST: &str = "app.launchdarkly.com";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default HTTP timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 20;

    /// Default number of in-flight requests per client
    pub const MAX_CONCURRENCY: usize = 1;
}
