//! API host resolution from multiple sources

use log::debug;

use crate::config::{defaults, host as host_config};

/// Host resolution with fallback logic
pub struct HostResolver;

impl HostResolver {
    /// Resolve host from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (LAUNCHDARKLY_API_HOST)
    /// 3. Default host (app.launchdarkly.com)
    ///
    /// The result is a bare host name: scheme and trailing slashes are stripped.
    pub fn resolve(cli_host: Option<&str>) -> String {
        Self::resolve_with(cli_host, |name| std::env::var(name).ok())
    }

    /// Same as [`resolve`](Self::resolve) with a custom environment lookup
    pub fn resolve_with<F>(cli_host: Option<&str>, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = cli_host.filter(|h| !h.is_empty()) {
            debug!("Using host from CLI argument: {}", host);
            return Self::normalize(host);
        }

        if let Some(host) = lookup(host_config::ENV_VAR).filter(|h| !h.is_empty()) {
            debug!(
                "Using host from {} environment variable: {}",
                host_config::ENV_VAR,
                host
            );
            return Self::normalize(&host);
        }

        debug!("Using default host: {}", defaults::HOST);
        defaults::HOST.to_string()
    }

    fn normalize(host: &str) -> String {
        host.trim()
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/')
            .to_string()
    }
}
