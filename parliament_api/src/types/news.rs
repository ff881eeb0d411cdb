//! News articles and hot-in-parliament items.
//!
//! `content` is rich text that the frontend renders as HTML. This crate
//! carries it verbatim and does no sanitisation: the backend is expected to
//! sanitise it, and any renderer that emits it as markup must sanitise it
//! again.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_id, require_non_empty, Validate};
use crate::{Error, MediaResolver};

/// A news article, addressed by its slug.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewsArticle {
    pub id: u64,

    /// Stable external key used in detail URLs.
    pub slug: String,

    pub title: String,

    pub author: String,

    pub category: String,

    /// Trusted HTML, see the module docs.
    pub content: String,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub link: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl NewsArticle {
    /// Absolute URL of the lead image, if any.
    pub fn resolve_image(&self, media: &MediaResolver) -> Result<Option<String>, Error> {
        media.resolve_optional(self.image.as_deref())
    }
}

impl Validate for NewsArticle {
    fn validate(&self) -> Result<(), String> {
        require_id("article id", self.id)?;
        require_non_empty("article slug", &self.slug)?;
        require_non_empty("article title", &self.title)
    }
}

/// A short featured entry shown under "Hot in Parliament".
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HotItem {
    pub id: u64,

    pub slug: String,

    pub title: String,

    pub author: String,

    pub category: String,

    /// Trusted HTML, see the module docs.
    pub content: String,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub link: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl HotItem {
    pub fn resolve_image(&self, media: &MediaResolver) -> Result<Option<String>, Error> {
        media.resolve_optional(self.image.as_deref())
    }
}

impl Validate for HotItem {
    fn validate(&self) -> Result<(), String> {
        require_id("item id", self.id)?;
        require_non_empty("item slug", &self.slug)?;
        require_non_empty("item title", &self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media() -> MediaResolver {
        MediaResolver::from_api_base("http://host/api").unwrap()
    }

    #[test]
    fn article_image_resolves() {
        let article: NewsArticle = serde_json::from_str(
            r#"{"id": 9, "slug": "s", "title": "t", "author": "a", "category": "c",
                "content": "<p>x</p>", "image": "/media/news/budget.jpg",
                "created_at": "2024-02-16T08:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(
            article.resolve_image(&media()).unwrap().as_deref(),
            Some("http://host/media/news/budget.jpg")
        );
    }

    #[test]
    fn hot_item_without_image() {
        let item: HotItem = serde_json::from_str(
            r#"{"id": 2, "slug": "s", "title": "t", "author": "a", "category": "c",
                "content": "", "image": null, "created_at": "2024-03-05T15:45:00Z"}"#,
        )
        .unwrap();
        assert_eq!(item.resolve_image(&media()).unwrap(), None);
    }
}
