use url::Url;

use crate::types::BillStatus;

use super::{
    common::{append_filter, non_blank, QueryCommon},
    Query,
};

#[derive(Default, Clone, Debug)]
pub struct BillQuery {
    pub common: QueryCommon,
    pub status: Option<BillStatus>,
    pub search: Option<String>,
}

impl Query for BillQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(status) = self.status {
            url.query_pairs_mut().append_pair("status", status.as_param());
        }
        append_filter(&mut url, "search", self.search.as_deref());
        url
    }
}

impl BillQuery {
    pub fn with_status(mut self, status: BillStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = non_blank(search);
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::{query::Query, types::BillStatus, BillQuery};

    #[test]
    fn test_bill_query() {
        let url = Url::parse("https://example.com/trackers/bills/").unwrap();

        insta::assert_snapshot!(
            BillQuery::default().add_to_url(&url).to_string(),
            @"https://example.com/trackers/bills/?page=1"
        );

        insta::assert_snapshot!(
            BillQuery::default()
                .with_page(2)
                .with_page_size(10)
                .with_status(BillStatus::SecondReading)
                .with_search("finance")
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/trackers/bills/?page=2&page_size=10&status=second_reading&search=finance"
        );

        insta::assert_snapshot!(
            BillQuery::default()
                .with_search("   ")
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/trackers/bills/?page=1"
        );
    }
}
