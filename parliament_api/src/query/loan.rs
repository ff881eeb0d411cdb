use url::Url;

use super::{
    common::{append_filter, non_blank, QueryCommon},
    Query,
};

#[derive(Default, Clone, Debug)]
pub struct LoanQuery {
    pub common: QueryCommon,
    pub sector: Option<String>,
    pub search: Option<String>,
}

impl Query for LoanQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        append_filter(&mut url, "sector", self.sector.as_deref());
        append_filter(&mut url, "search", self.search.as_deref());
        url
    }
}

impl LoanQuery {
    pub fn with_sector(mut self, sector: &str) -> Self {
        self.sector = non_blank(sector);
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = non_blank(search);
        self
    }
}
