//! Page envelope and request types for offset/limit pagination

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

use crate::config::api;
use crate::error::{LdError, Result};

/// Validated page size
///
/// Guaranteed to lie within `MIN_PAGE_LIMIT..=MAX_PAGE_LIMIT`, so the
/// collector never has to re-check it per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimit(u32);

impl PageLimit {
    /// Create a page limit, rejecting values outside the accepted range
    pub fn new(limit: u32) -> Result<Self> {
        if !(api::MIN_PAGE_LIMIT..=api::MAX_PAGE_LIMIT).contains(&limit) {
            return Err(LdError::Config(format!(
                "page limit must be between {} and {}, got {}",
                api::MIN_PAGE_LIMIT,
                api::MAX_PAGE_LIMIT,
                limit
            )));
        }
        Ok(Self(limit))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageLimit {
    fn default() -> Self {
        Self(api::DEFAULT_PAGE_LIMIT)
    }
}

impl fmt::Display for PageLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One page request: which collection, how many items, how many to skip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub collection_key: String,
    pub limit: u32,
    pub offset: u32,
}

impl PageRequest {
    pub fn new(collection_key: &str, limit: u32, offset: u32) -> Self {
        Self {
            collection_key: collection_key.to_string(),
            limit,
            offset,
        }
    }

    /// Query string for this window, e.g. `limit=100&offset=200`
    pub fn query(&self) -> String {
        format!("limit={}&offset={}", self.limit, self.offset)
    }
}

/// Page envelope returned by listing endpoints
///
/// ```json
/// { "totalCount": 250, "items": [ ... ], "_links": { "next": { "href": "..." } } }
/// ```
#[derive(Deserialize, Debug, Clone)]
pub struct Page<T> {
    /// Total items in the collection as reported by the server
    #[serde(rename = "totalCount", default)]
    pub total_count: u32,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Navigation links; tolerated but never followed
    #[serde(rename = "_links", default)]
    pub links: Option<HashMap<String, Link>>,
}

impl<T> Page<T> {
    pub fn new(total_count: u32, items: Vec<T>) -> Self {
        Self {
            total_count,
            items,
            links: None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Navigation link inside `_links`
#[derive(Deserialize, Debug, Clone)]
pub struct Link {
    pub href: Option<String>,
    #[serde(rename = "type")]
    pub link_type: Option<String>,
}
