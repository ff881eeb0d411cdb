use url::Url;

use super::{
    common::{append_filter, non_blank, QueryCommon},
    Query,
};

/// Filters for the MP directory. Each filter is sent only when set.
#[derive(Default, Clone, Debug)]
pub struct MpQuery {
    pub common: QueryCommon,
    pub party: Option<String>,
    pub district: Option<String>,
    pub constituency: Option<String>,
    pub search: Option<String>,
}

impl Query for MpQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        append_filter(&mut url, "party", self.party.as_deref());
        append_filter(&mut url, "district", self.district.as_deref());
        append_filter(&mut url, "constituency", self.constituency.as_deref());
        append_filter(&mut url, "search", self.search.as_deref());
        url
    }
}

impl MpQuery {
    pub fn with_party(mut self, party: &str) -> Self {
        self.party = non_blank(party);
        self
    }

    pub fn with_district(mut self, district: &str) -> Self {
        self.district = non_blank(district);
        self
    }

    pub fn with_constituency(mut self, constituency: &str) -> Self {
        self.constituency = non_blank(constituency);
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

    use crate::{query::Query, MpQuery};

    #[test]
    fn test_mp_query() {
        let url = Url::parse("https://example.com/trackers/mps/").unwrap();

        insta::assert_snapshot!(
            MpQuery::default()
                .with_page(1)
                .with_page_size(12)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/trackers/mps/?page=1&page_size=12"
        );

        insta::assert_snapshot!(
            MpQuery::default()
                .with_party("DPP")
                .with_district("Blantyre")
                .with_constituency("Blantyre City South")
                .with_search("Banda")
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/trackers/mps/?page=1&party=DPP&district=Blantyre&constituency=Blantyre+City+South&search=Banda"
        );

        insta::assert_snapshot!(
            MpQuery::default()
                .with_party("")
                .with_district("Zomba")
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/trackers/mps/?page=1&district=Zomba"
        );
    }
}
