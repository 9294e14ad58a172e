//! LaunchDarkly HTTP client for API interactions

use log::debug;
use rand::Rng;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::sync::Semaphore;

use crate::config::{api, defaults, retry};
use crate::error::{LdError, Result};
use crate::ld::credentials::Credential;
use crate::pagination::{Page, PageLimit, PageRequest, PaginatedCollector};

/// Tunables for [`LdClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Timeout for a single HTTP request
    pub http_timeout: Duration,
    /// Maximum requests in flight through this client
    pub max_concurrency: usize,
    /// Retries for connection errors, 429 and 5xx responses
    pub max_retries: u32,
    pub retry_wait_min: Duration,
    pub retry_wait_max: Duration,
    /// Page size used by every collection fetched through this client
    pub page_limit: PageLimit,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            http_timeout: Duration::from_secs(defaults::HTTP_TIMEOUT_SECS),
            max_concurrency: defaults::MAX_CONCURRENCY,
            max_retries: retry::MAX_RETRIES,
            retry_wait_min: retry::WAIT_MIN,
            retry_wait_max: retry::WAIT_MAX,
            page_limit: PageLimit::default(),
        }
    }
}

/// LaunchDarkly API client
pub struct LdClient {
    client: Client,
    credential: Credential,
    host: String,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
    /// Gate limiting requests in flight
    semaphore: Semaphore,
    options: ClientOptions,
}

impl LdClient {
    /// Create a new client with connection pooling and the given options
    pub fn new(credential: Credential, host: String, options: ClientOptions) -> Result<Self> {
        if options.max_concurrency == 0 {
            return Err(LdError::Config(
                "max concurrency must be at least 1".to_string(),
            ));
        }

        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(options.http_timeout)
            .user_agent(format!("ldctl/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            client,
            credential,
            host,
            base_url_override: None,
            semaphore: Semaphore::new(options.max_concurrency),
            options,
        })
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(credential: Credential, base_url: String, options: ClientOptions) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            credential,
            host: "mock.launchdarkly.com".to_string(),
            base_url_override: Some(base_url),
            semaphore: Semaphore::new(options.max_concurrency.max(1)),
            options,
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!(
            "https://{}/{}",
            self.host,
            api::BASE_PATH.trim_start_matches('/')
        )
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn page_limit(&self) -> PageLimit {
        self.options.page_limit
    }

    /// Collector for `resource` owned by a `scope`, paged with this client's limit
    pub fn collector(&self, resource: &str, scope: &str) -> PaginatedCollector {
        PaginatedCollector::new(resource, scope, self.options.page_limit)
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", self.credential.authorization())
            .header("LD-API-Version", api::VERSION)
            .header("Content-Type", "application/json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Send a GET request, retrying transient failures
    ///
    /// Holds a concurrency permit for the whole exchange, retries included.
    pub(crate) async fn send_with_retry(&self, url: &str) -> Result<reqwest::Response> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|e| LdError::Config(format!("failed to acquire request slot: {}", e)))?;

        let mut attempt: u32 = 0;
        loop {
            match self.get(url).send().await {
                Ok(response)
                    if is_retryable_status(response.status())
                        && attempt < self.options.max_retries =>
                {
                    let wait = self.backoff(attempt, Some(&response));
                    debug!(
                        "GET {} returned {}, retrying in {:?} (attempt {}/{})",
                        url,
                        response.status(),
                        wait,
                        attempt + 1,
                        self.options.max_retries
                    );
                    tokio::time::sleep(wait).await;
                }
                Ok(response) => return Ok(response),
                Err(e)
                    if (e.is_connect() || e.is_timeout()) && attempt < self.options.max_retries =>
                {
                    let wait = self.backoff(attempt, None);
                    debug!(
                        "GET {} failed: {}, retrying in {:?} (attempt {}/{})",
                        url,
                        e,
                        wait,
                        attempt + 1,
                        self.options.max_retries
                    );
                    tokio::time::sleep(wait).await;
                }
                Err(e) => return Err(e.into()),
            }
            attempt += 1;
        }
    }

    /// Exponential backoff, or the rate limit reset time for 429 responses
    fn backoff(&self, attempt: u32, response: Option<&reqwest::Response>) -> Duration {
        let max = self.options.retry_wait_max;

        if let Some(reset_ms) = response
            .filter(|r| r.status() == StatusCode::TOO_MANY_REQUESTS)
            .and_then(|r| r.headers().get(retry::RATE_LIMIT_RESET_HEADER))
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<i64>().ok())
        {
            let wait = rate_limit_wait(reset_ms, now_millis());
            return (wait + jitter(wait)).min(max);
        }

        exponential_wait(self.options.retry_wait_min, attempt).min(max)
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match api_error_message(&body) {
                Some(detail) => format!("Failed to fetch {}: {}", error_context, detail),
                None => format!("Failed to fetch {}", error_context),
            };
            return Err(LdError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch one page of a listing endpoint
    ///
    /// Issues `GET {path}?limit=L&offset=O`; an existing query string on
    /// `path` is kept.
    pub async fn fetch_page<T>(&self, path: &str, request: PageRequest) -> Result<Page<T>>
    where
        T: DeserializeOwned,
    {
        let separator = if path.contains('?') { "&" } else { "?" };
        let url = format!(
            "{}{}{}{}",
            self.base_url(),
            path,
            separator,
            request.query()
        );

        debug!("Fetching page from: {}", url);

        let response = self.send_with_retry(&url).await?;
        let context = format!("{} ({})", path, request.query());
        self.parse_api_response(response, &context).await
    }

    /// Fetch a complete collection from a listing endpoint
    ///
    /// Pages are requested one by one unless the client allows more than one
    /// request in flight, in which case pages after the first are fetched
    /// concurrently.
    pub async fn fetch_collection<T>(
        &self,
        collector: &PaginatedCollector,
        collection_key: &str,
        path: &str,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let fetcher = |request: PageRequest| self.fetch_page::<T>(path, request);

        if self.options.max_concurrency > 1 {
            let in_flight = self
                .options
                .max_concurrency
                .min(api::MAX_CONCURRENT_PAGE_REQUESTS);
            collector
                .fetch_all_concurrent(collection_key, fetcher, in_flight)
                .await
        } else {
            collector.fetch_all(collection_key, fetcher).await
        }
    }
}

/// 429 and 5xx (except 501 Not Implemented) are worth retrying
fn is_retryable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS
        || (status.is_server_error() && status != StatusCode::NOT_IMPLEMENTED)
}

fn exponential_wait(min: Duration, attempt: u32) -> Duration {
    min.checked_mul(2u32.saturating_pow(attempt))
        .unwrap_or(Duration::MAX)
}

/// Time until the reset instant; a reset already in the past waits as long as it is overdue
fn rate_limit_wait(reset_ms: i64, now_ms: i64) -> Duration {
    Duration::from_millis(reset_ms.saturating_sub(now_ms).unsigned_abs())
}

/// Random extra wait in `0..=wait`, spreading clients that share a reset instant
fn jitter(wait: Duration) -> Duration {
    let max_ms = u64::try_from(wait.as_millis()).unwrap_or(u64::MAX);
    Duration::from_millis(rand::thread_rng().gen_range(0..=max_ms))
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Extract `message` from a JSON error body
fn api_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
impl LdClient {
    /// Create a test client with mock base URL and near-instant retries
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url(
            Credential::AccessToken("test-token".to_string()),
            base_url.to_string(),
            Self::test_options(),
        )
    }

    pub fn test_options() -> ClientOptions {
        ClientOptions {
            max_retries: 3,
            retry_wait_min: Duration::from_millis(1),
            retry_wait_max: Duration::from_millis(5),
            ..ClientOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        let client = LdClient::new(
            Credential::AccessToken("token".to_string()),
            "app.launchdarkly.com".to_string(),
            ClientOptions::default(),
        )
        .unwrap();
        assert_eq!(client.base_url(), "https://app.launchdarkly.com/api/v2");
        assert_eq!(client.host(), "app.launchdarkly.com");
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let options = ClientOptions {
            max_concurrency: 0,
            ..ClientOptions::default()
        };
        let result = LdClient::new(
            Credential::AccessToken("token".to_string()),
            "app.launchdarkly.com".to_string(),
            options,
        );
        assert!(matches!(result, Err(LdError::Config(_))));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LdClient>();
    }

    #[test]
    fn test_collector_uses_client_page_limit() {
        let options = ClientOptions {
            page_limit: PageLimit::new(20).unwrap(),
            ..LdClient::test_options()
        };
        let client = LdClient::with_base_url(
            Credential::AccessToken("t".to_string()),
            "http://localhost".to_string(),
            options,
        );
        assert_eq!(client.page_limit().get(), 20);
        assert_eq!(client.collector("environments", "project").limit().get(), 20);
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(is_retryable_status(StatusCode::BAD_GATEWAY));
        assert!(!is_retryable_status(StatusCode::NOT_IMPLEMENTED));
        assert!(!is_retryable_status(StatusCode::NOT_FOUND));
        assert!(!is_retryable_status(StatusCode::OK));
    }

    #[test]
    fn test_exponential_wait() {
        let min = Duration::from_millis(200);
        assert_eq!(exponential_wait(min, 0), Duration::from_millis(200));
        assert_eq!(exponential_wait(min, 3), Duration::from_millis(1600));
        assert!(exponential_wait(min, 40) > retry::WAIT_MAX);
    }

    #[test]
    fn test_jitter_bounded_by_wait() {
        assert_eq!(jitter(Duration::ZERO), Duration::ZERO);
        let wait = Duration::from_millis(40);
        for _ in 0..100 {
            assert!(jitter(wait) <= wait);
        }
    }

    #[test]
    fn test_rate_limit_wait() {
        assert_eq!(rate_limit_wait(1_500, 1_000), Duration::from_millis(500));
        // Reset already passed: wait the overdue amount instead of zero
        assert_eq!(rate_limit_wait(1_000, 1_250), Duration::from_millis(250));
    }

    #[test]
    fn test_api_error_message() {
        assert_eq!(
            api_error_message(r#"{"code":"internal","message":"Internal server error"}"#),
            Some("Internal server error".to_string())
        );
        assert_eq!(api_error_message("<html>bad gateway</html>"), None);
        assert_eq!(api_error_message(r#"{"code":"x"}"#), None);
    }
}
