use url::Url;

use super::{
    common::{append_filter, non_blank, QueryCommon},
    Query,
};

#[derive(Default, Clone, Debug)]
pub struct NewsQuery {
    pub common: QueryCommon,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl Query for NewsQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        append_filter(&mut url, "category", self.category.as_deref());
        append_filter(&mut url, "search", self.search.as_deref());
        url
    }
}

impl NewsQuery {
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = non_blank(category);
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = non_blank(search);
        self
    }
}
