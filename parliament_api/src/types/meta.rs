use serde::{Deserialize, Deserializer, Serialize};

use super::Validate;

/// One page of a list endpoint: `{count, next, previous, results}`.
///
/// Some list endpoints are not paginated and return a bare array; those
/// decode into a single page with `count == results.len()` and no links.
#[derive(Serialize, Debug, Clone)]
pub struct Page<T> {
    /// Total number of records across all pages.
    pub count: u64,
    /// Absolute URL of the next page, if any.
    pub next: Option<String>,
    /// Absolute URL of the previous page, if any.
    pub previous: Option<String>,
    /// Records on this page, in backend order.
    pub results: Vec<T>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PageRepr<T> {
    Envelope {
        count: u64,
        next: Option<String>,
        previous: Option<String>,
        results: Vec<T>,
    },
    Bare(Vec<T>),
}

impl<'de, T> Deserialize<'de> for Page<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match PageRepr::deserialize(deserializer)? {
            PageRepr::Envelope {
                count,
                next,
                previous,
                results,
            } => Page {
                count,
                next,
                previous,
                results,
            },
            PageRepr::Bare(results) => Page {
                count: results.len() as u64,
                next: None,
                previous: None,
                results,
            },
        })
    }
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Number of pages for the given page size, at least one.
    pub fn total_pages(&self, page_size: u32) -> u64 {
        if page_size == 0 || self.count == 0 {
            return 1;
        }
        self.count.div_ceil(page_size as u64)
    }
}

impl<T: Validate> Validate for Page<T> {
    fn validate(&self) -> Result<(), String> {
        if self.results.len() as u64 > self.count {
            return Err(format!(
                "page holds {} results but count is {}",
                self.results.len(),
                self.count
            ));
        }
        self.results.validate().map_err(|e| format!("results{}", e))
    }
}
