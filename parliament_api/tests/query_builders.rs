use parliament_api::types::BillStatus;
use parliament_api::{BillQuery, LoanQuery, MpQuery, NewsQuery, PageQuery, Query};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/api/items/").unwrap()
}

#[test]
fn page_is_always_sent() {
    let url = PageQuery::default().add_to_url(&base_url());
    assert_eq!(url.query(), Some("page=1"));
}

#[test]
fn page_and_size_are_echoed_exactly() {
    for (page, size) in [(1, 10), (4, 25), (100, 1)] {
        let url = NewsQuery::default()
            .with_page(page)
            .with_page_size(size)
            .add_to_url(&base_url());
        assert_eq!(
            url.query().unwrap(),
            format!("page={}&page_size={}", page, size)
        );
    }
}

#[test]
fn blank_filters_are_not_sent() {
    let url = MpQuery::default()
        .with_party(" ")
        .with_district("")
        .with_constituency("\t")
        .with_search("")
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("page=1"));

    let url = NewsQuery::default()
        .with_category("")
        .with_search("")
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("page=1"));

    let url = LoanQuery::default().with_sector("  ").add_to_url(&base_url());
    assert_eq!(url.query(), Some("page=1"));
}

#[test]
fn filters_are_trimmed() {
    let url = LoanQuery::default()
        .with_sector("  Energy ")
        .with_search("grid")
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("page=1&sector=Energy&search=grid"));
}

#[test]
fn bill_status_uses_backend_value() {
    let url = BillQuery::default()
        .with_status(BillStatus::Assented)
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("page=1&status=assented"));
}

#[test]
fn later_blank_filter_clears_earlier_value() {
    let url = MpQuery::default()
        .with_party("DPP")
        .with_party("")
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("page=1"));
}
