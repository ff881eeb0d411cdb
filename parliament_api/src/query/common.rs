//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] pagination
//! fields, and the filterless [`PageQuery`].

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for pagination.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = page;
        self
    }

    /// Sets the number of results per page.
    fn with_page_size(mut self, page_size: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page_size = Some(page_size);
        self
    }
}

/// Pagination fields shared by all list queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QueryCommon {
    /// Page number (1-indexed). Defaults to 1 and is always sent.
    pub page: u32,
    /// Results per page. `None` leaves the backend default in place.
    pub page_size: Option<u32>,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            page: 1,
            page_size: None,
        }
    }
}

impl QueryCommon {
    /// Appends `page` and, when set, `page_size`.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("page", &self.page.to_string());
        if let Some(page_size) = self.page_size {
            url.query_pairs_mut()
                .append_pair("page_size", &page_size.to_string());
        };
        url
    }
}

/// Stores a filter value only if it has content after trimming, so that
/// blank input never reaches the query string.
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub(crate) fn append_filter(url: &mut Url, key: &str, value: Option<&str>) {
    if let Some(value) = value.and_then(non_blank) {
        url.query_pairs_mut().append_pair(key, &value);
    }
}

/// Pagination-only query for endpoints without filters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageQuery {
    pub common: QueryCommon,
}

impl Query for PageQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        self.common.add_to_url(url)
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::{PageQuery, Query};

    #[test]
    fn test_page_query() {
        let url = Url::parse("https://example.com/news/").unwrap();

        insta::assert_snapshot!(
            PageQuery::default().add_to_url(&url).to_string(),
            @"https://example.com/news/?page=1"
        );

        insta::assert_snapshot!(
            PageQuery::default()
                .with_page(3)
                .with_page_size(25)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/news/?page=3&page_size=25"
        );
    }
}
