//! Loading/error/data state for pages that show one backend resource.
//!
//! A page issues a fetch keyed by a route parameter (an id, a slug, a page
//! number). Each fetch is tagged with a [`Ticket`] carrying a generation
//! number; only the ticket from the most recent [`DetailPage::navigate`] may
//! change the state. A slow response for a parameter the user has already
//! left is dropped instead of overwriting the newer page.

use std::future::Future;

use parliament_api::types::Page;
use parliament_api::Error;

/// What a page currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    /// A fetch is outstanding. This is also the state on mount.
    Loading,
    /// The fetch succeeded; the value replaces any earlier one wholesale.
    Ready(T),
    /// The fetch failed; the message is fit for display next to a retry
    /// action.
    Failed(String),
    /// The backend has no record for the requested parameter.
    NotFound,
}

impl<T> PageState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            PageState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Failed(message) => Some(message),
            _ => None,
        }
    }

    fn from_result(result: Result<T, Error>) -> Self {
        match result {
            Ok(data) => PageState::Ready(data),
            Err(e) if e.is_not_found() => PageState::NotFound,
            Err(e) => PageState::Failed(e.to_string()),
        }
    }
}

/// Proof that a fetch was started by the current navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket<K> {
    generation: u64,
    key: K,
}

impl<K> Ticket<K> {
    /// The route parameter this fetch is for.
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// State machine for a page showing the resource behind route parameter `K`.
pub struct DetailPage<K, T> {
    key: Option<K>,
    generation: u64,
    state: PageState<T>,
}

impl<K, T> Default for DetailPage<K, T> {
    fn default() -> Self {
        Self {
            key: None,
            generation: 0,
            state: PageState::Loading,
        }
    }
}

impl<K: Clone + std::fmt::Debug, T> DetailPage<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PageState<T> {
        &self.state
    }

    /// The parameter of the latest navigation, if any.
    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    /// Starts a fetch for `key`: resets to `Loading` and invalidates every
    /// ticket issued before.
    pub fn navigate(&mut self, key: K) -> Ticket<K> {
        self.generation += 1;
        self.key = Some(key.clone());
        self.state = PageState::Loading;
        Ticket {
            generation: self.generation,
            key,
        }
    }

    /// Re-issues the identical fetch for the current parameter. `None`
    /// before the first navigation.
    pub fn retry(&mut self) -> Option<Ticket<K>> {
        let key = self.key.clone()?;
        tracing::debug!("Retrying fetch for {:?}", key);
        Some(self.navigate(key))
    }

    /// Applies a fetch result if `ticket` is still current. Returns whether
    /// the state changed; stale results are discarded.
    pub fn resolve(&mut self, ticket: &Ticket<K>, result: Result<T, Error>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                "Discarding stale response for {:?} (generation {} < {})",
                ticket.key,
                ticket.generation,
                self.generation
            );
            return false;
        }
        if let Err(e) = &result {
            tracing::warn!("Fetch for {:?} failed: {}", ticket.key, e);
        }
        self.state = PageState::from_result(result);
        true
    }

    /// Navigates to `key`, awaits `fetch(key)` and resolves the result.
    pub async fn load<F, Fut>(&mut self, key: K, fetch: F) -> &PageState<T>
    where
        F: FnOnce(K) -> Fut,
        Fut: Future<Output = Result<T, Error>>,
    {
        let ticket = self.navigate(key.clone());
        let result = fetch(key).await;
        self.resolve(&ticket, result);
        &self.state
    }
}

/// A list page addressed by page number, with previous/next navigation.
pub struct PagedList<T> {
    page_size: u32,
    inner: DetailPage<u32, Page<T>>,
}

impl<T> PagedList<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            inner: DetailPage::new(),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn state(&self) -> &PageState<Page<T>> {
        self.inner.state()
    }

    /// The page number of the latest navigation.
    pub fn current_page(&self) -> Option<u32> {
        self.inner.key().copied()
    }

    pub fn navigate(&mut self, page: u32) -> Ticket<u32> {
        self.inner.navigate(page.max(1))
    }

    pub fn retry(&mut self) -> Option<Ticket<u32>> {
        self.inner.retry()
    }

    pub fn resolve(&mut self, ticket: &Ticket<u32>, result: Result<Page<T>, Error>) -> bool {
        self.inner.resolve(ticket, result)
    }

    /// Ticket for the following page, if the loaded page links to one.
    pub fn next_page(&mut self) -> Option<Ticket<u32>> {
        let current = self.current_page()?;
        if !self.state().data()?.has_next() {
            return None;
        }
        Some(self.navigate(current + 1))
    }

    /// Ticket for the preceding page, if the loaded page links to one.
    pub fn previous_page(&mut self) -> Option<Ticket<u32>> {
        let current = self.current_page()?;
        if !self.state().data()?.has_previous() || current <= 1 {
            return None;
        }
        Some(self.navigate(current - 1))
    }

    /// Navigates to `page`, awaits `fetch(page, page_size)` and resolves.
    pub async fn load<F, Fut>(&mut self, page: u32, fetch: F) -> &PageState<Page<T>>
    where
        F: FnOnce(u32, u32) -> Fut,
        Fut: Future<Output = Result<Page<T>, Error>>,
    {
        let ticket = self.navigate(page);
        let result = fetch(*ticket.key(), self.page_size).await;
        self.resolve(&ticket, result);
        self.state()
    }
}
