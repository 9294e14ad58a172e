//! Exhaustive retrieval of offset/limit paginated collections

use futures::stream::{self, StreamExt, TryStreamExt};
use log::{debug, warn};
use std::future::Future;

use crate::error::{LdError, Result};

use super::models::{Page, PageLimit, PageRequest};

/// Pages through a remote collection until it is exhausted
///
/// A collector knows what it fetches (`resource`, e.g. "maintainers"), what
/// owns the collection (`scope`, e.g. "team") and how large each page is.
/// It holds no state between calls: every `fetch_all` owns its own
/// accumulator and offset, so one collector can serve concurrent calls for
/// different collection keys.
///
/// Termination after each page:
/// - the accumulated count reached the server-reported `totalCount`, or
/// - the page came back with fewer items than the limit.
///
/// The second condition assumes a server may report a total that lags the
/// real collection size. Stopping on a short page guarantees termination at
/// the price of a possibly incomplete read, which is logged as a warning.
#[derive(Debug, Clone)]
pub struct PaginatedCollector {
    resource: String,
    scope: String,
    limit: PageLimit,
}

impl PaginatedCollector {
    pub fn new(resource: impl Into<String>, scope: impl Into<String>, limit: PageLimit) -> Self {
        Self {
            resource: resource.into(),
            scope: scope.into(),
            limit,
        }
    }

    pub fn limit(&self) -> PageLimit {
        self.limit
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Fetch every item of the collection, one page at a time
    ///
    /// `fetcher` performs exactly one round trip per call. Pages are requested
    /// strictly in order (offset 0, limit, 2 * limit, ...) and items keep the
    /// order the server returned them in. The first failing page aborts the
    /// whole call; items gathered so far are discarded.
    ///
    /// An empty collection yields `Ok(vec![])`, never an error.
    pub async fn fetch_all<T, F, Fut>(&self, collection_key: &str, fetcher: F) -> Result<Vec<T>>
    where
        F: Fn(PageRequest) -> Fut,
        Fut: Future<Output = Result<Page<T>>>,
    {
        let items = self
            .fetch_from(collection_key, &fetcher, Vec::new(), 0)
            .await?;

        debug!(
            "Fetched {} {} for {} '{}'",
            items.len(),
            self.resource,
            self.scope,
            collection_key
        );
        Ok(items)
    }

    /// Fetch every item, requesting pages after the first one concurrently
    ///
    /// The first page is fetched alone to learn `totalCount`. Later offsets
    /// are requested in windows of at most `max_in_flight` pages, and each
    /// window is reassembled by offset so the result order matches
    /// [`fetch_all`](Self::fetch_all). The termination test runs on every
    /// page in offset order, so an over-reported total costs at most one
    /// window of extra requests. A window always holds the next offset, which
    /// lets a collection that grew past the first reported total be read to
    /// the end.
    pub async fn fetch_all_concurrent<T, F, Fut>(
        &self,
        collection_key: &str,
        fetcher: F,
        max_in_flight: usize,
    ) -> Result<Vec<T>>
    where
        F: Fn(PageRequest) -> Fut,
        Fut: Future<Output = Result<Page<T>>>,
    {
        let max_in_flight = max_in_flight.max(1);

        let first = self.fetch_page(collection_key, &fetcher, 0).await?;
        let mut total = first.total_count;
        let first_len = first.len();
        let mut items = first.items;

        if self.is_complete(collection_key, 0, items.len(), total, first_len) {
            return Ok(items);
        }

        let fetcher_ref = &fetcher;
        let mut offset = self.next_offset(collection_key, 0)?;
        loop {
            let window = self.window(offset, total, max_in_flight);
            let last_offset = window.last().copied().unwrap_or(offset);
            debug!(
                "Fetching {} pages of {} for {} '{}' from offset {}",
                window.len(),
                self.resource,
                self.scope,
                collection_key,
                offset
            );

            let mut pages: Vec<(u32, Page<T>)> = stream::iter(window)
                .map(|page_offset| async move {
                    self.fetch_page(collection_key, fetcher_ref, page_offset)
                        .await
                        .map(|page| (page_offset, page))
                })
                .buffer_unordered(max_in_flight)
                .try_collect()
                .await?;

            pages.sort_by_key(|(page_offset, _)| *page_offset);

            for (page_offset, page) in pages {
                total = page.total_count;
                let page_len = page.len();
                items.extend(page.items);

                if self.is_complete(collection_key, page_offset, items.len(), total, page_len) {
                    debug!(
                        "Fetched {} {} for {} '{}'",
                        items.len(),
                        self.resource,
                        self.scope,
                        collection_key
                    );
                    return Ok(items);
                }
            }

            offset = self.next_offset(collection_key, last_offset)?;
        }
    }

    /// Offsets of the next concurrent window: `start` plus following offsets
    /// below `total`, at most `size` in all
    fn window(&self, start: u32, total: u32, size: usize) -> Vec<u32> {
        let step = self.limit.get();
        let rest = std::iter::successors(start.checked_add(step), |o| o.checked_add(step))
            .take_while(|o| *o < total);
        std::iter::once(start).chain(rest).take(size).collect()
    }

    /// Sequential page loop starting at `offset` with `items` already gathered
    async fn fetch_from<T, F, Fut>(
        &self,
        collection_key: &str,
        fetcher: &F,
        mut items: Vec<T>,
        mut offset: u32,
    ) -> Result<Vec<T>>
    where
        F: Fn(PageRequest) -> Fut,
        Fut: Future<Output = Result<Page<T>>>,
    {
        loop {
            let page = self.fetch_page(collection_key, fetcher, offset).await?;
            let total = page.total_count;
            let page_len = page.len();
            items.extend(page.items);

            if self.is_complete(collection_key, offset, items.len(), total, page_len) {
                return Ok(items);
            }

            offset = self.next_offset(collection_key, offset)?;
        }
    }

    async fn fetch_page<T, F, Fut>(
        &self,
        collection_key: &str,
        fetcher: &F,
        offset: u32,
    ) -> Result<Page<T>>
    where
        F: Fn(PageRequest) -> Fut,
        Fut: Future<Output = Result<Page<T>>>,
    {
        let request = PageRequest::new(collection_key, self.limit.get(), offset);
        debug!(
            "Fetching {} for {} '{}' ({})",
            self.resource,
            self.scope,
            collection_key,
            request.query()
        );

        let page = fetcher(request)
            .await
            .map_err(|e| self.wrap(collection_key, e))?;

        debug!(
            "Page at offset {} returned {} of {} {}",
            offset,
            page.len(),
            page.total_count,
            self.resource
        );
        Ok(page)
    }

    fn is_complete(
        &self,
        collection_key: &str,
        offset: u32,
        fetched: usize,
        total: u32,
        page_len: usize,
    ) -> bool {
        if fetched >= total as usize {
            return true;
        }
        if page_len < self.limit.get() as usize {
            warn!(
                "Server reported {} {} for {} '{}' but the page at offset {} held only {} items; \
                 stopping with {} items",
                total, self.resource, self.scope, collection_key, offset, page_len, fetched
            );
            return true;
        }
        false
    }

    fn next_offset(&self, collection_key: &str, offset: u32) -> Result<u32> {
        offset.checked_add(self.limit.get()).ok_or_else(|| {
            self.wrap(
                collection_key,
                LdError::Config(format!(
                    "page offset overflow after offset {} with limit {}",
                    offset, self.limit
                )),
            )
        })
    }

    fn wrap(&self, collection_key: &str, err: LdError) -> LdError {
        LdError::collection(&self.resource, &self.scope, collection_key, err)
    }
}
