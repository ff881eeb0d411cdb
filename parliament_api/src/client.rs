//! HTTP client for the parliamentary-monitoring backend.

use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    errors::Operation,
    media::MediaResolver,
    query::{BillQuery, LoanQuery, MpQuery, NewsQuery, PageQuery, Query},
    types::{
        Bill, BillID, ChatReply, ChatRequest, Committee, CommitteeID, ContactMessage,
        ContactReceipt, Engagement, HotItem, Loan, LoanID, Mp, MpID, NewsArticle, Page, Validate,
    },
    Error,
};

/// Base URL used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`Client`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// API base, e.g. `https://example.org/api`. Media files are served from
    /// the same host with this path stripped.
    pub base_url: String,
    /// Applied to every request; an expired timeout surfaces as
    /// [`Error::RequestFailed`].
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP client for the backend's REST endpoints.
///
/// Every operation maps a transport failure or non-success status to
/// [`Error::RequestFailed`] carrying the operation name; backend error bodies
/// are logged, never parsed. A 404 on a GET becomes [`Error::NotFound`].
/// Decoded bodies are checked with [`Validate`] before they are returned.
pub struct Client {
    http: reqwest::Client,
    base_api_url: String,
    media: MediaResolver,
}

impl Client {
    /// Creates a client from explicit settings.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::ClientBuild
            })?;
        let base_api_url = config.base_url.trim().trim_end_matches('/').to_string();
        let media = MediaResolver::from_api_base(&base_api_url)?;
        Ok(Self {
            http,
            base_api_url,
            media,
        })
    }

    /// Creates a client with a custom base URL and the default timeout. Used
    /// for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        })
    }

    /// The configured API base without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    /// Resolver for document and image paths found in responses.
    pub fn media(&self) -> &MediaResolver {
        &self.media
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(path.to_string())
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T, Q>(&self, operation: Operation, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned + Validate,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        tracing::debug!("GET {}", url);
        self.execute(operation, self.http.get(url).header("accept", "application/json"))
            .await
    }

    async fn post<T, B>(&self, operation: Operation, path: &str, body: Option<&B>) -> Result<T, Error>
    where
        T: DeserializeOwned + Validate,
        B: Serialize,
    {
        let url = self.get_url(path, None::<&PageQuery>)?;
        tracing::debug!("POST {}", url);
        let mut request = self.http.post(url).header("accept", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(operation, request).await
    }

    async fn execute<T>(&self, operation: Operation, request: reqwest::RequestBuilder) -> Result<T, Error>
    where
        T: DeserializeOwned + Validate,
    {
        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to {}: {}", operation, e);
            Error::RequestFailed(operation)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed(operation)
        })?;

        if status == reqwest::StatusCode::NOT_FOUND && operation_is_lookup(operation) {
            tracing::info!("{} returned 404", operation);
            return Err(Error::NotFound { operation });
        }

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::RequestFailed(operation));
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::InvalidResponse {
                operation,
                reason: e.to_string(),
            }
        })?;

        parsed.validate().map_err(|reason| {
            tracing::error!("Response for {} failed validation: {}", operation, reason);
            Error::InvalidResponse { operation, reason }
        })?;

        Ok(parsed)
    }

    /// Fetches a page of bills matching the given query.
    pub async fn get_bills(&self, query: &BillQuery) -> Result<Page<Bill>, Error> {
        self.get(Operation::FetchBills, "/trackers/bills/", Some(query))
            .await
    }

    /// Fetches a single bill with its readings.
    pub async fn get_bill(&self, bill_id: BillID) -> Result<Bill, Error> {
        self.get(
            Operation::FetchBill,
            format!("/trackers/bills/{}/", bill_id).as_str(),
            None::<&PageQuery>,
        )
        .await
    }

    /// Increments one of a bill's engagement counters and returns its new
    /// value. Every call increments; the request is not idempotent.
    pub async fn engage_bill(&self, bill_id: BillID, engagement: Engagement) -> Result<u64, Error> {
        let operation = match engagement {
            Engagement::Like => Operation::LikeBill,
            Engagement::Comment => Operation::CommentBill,
            Engagement::Share => Operation::ShareBill,
        };
        let body: serde_json::Value = self
            .post(
                operation,
                format!("/trackers/bills/{}/{}/", bill_id, engagement.path_segment()).as_str(),
                None::<&()>,
            )
            .await?;
        body.get(engagement.counter_field())
            .and_then(serde_json::Value::as_u64)
            .ok_or_else(|| {
                tracing::error!(
                    "{} response lacks a '{}' counter: {}",
                    operation,
                    engagement.counter_field(),
                    body
                );
                Error::InvalidResponse {
                    operation,
                    reason: format!("missing '{}' counter", engagement.counter_field()),
                }
            })
    }

    pub async fn like_bill(&self, bill_id: BillID) -> Result<u64, Error> {
        self.engage_bill(bill_id, Engagement::Like).await
    }

    pub async fn comment_bill(&self, bill_id: BillID) -> Result<u64, Error> {
        self.engage_bill(bill_id, Engagement::Comment).await
    }

    pub async fn share_bill(&self, bill_id: BillID) -> Result<u64, Error> {
        self.engage_bill(bill_id, Engagement::Share).await
    }

    /// Fetches a page of news, newest first.
    pub async fn get_news(&self, query: &NewsQuery) -> Result<Page<NewsArticle>, Error> {
        self.get(Operation::FetchNews, "/news/", Some(query)).await
    }

    /// Fetches a single article by slug.
    pub async fn get_news_article(&self, slug: &str) -> Result<NewsArticle, Error> {
        self.get(
            Operation::FetchNewsArticle,
            format!("/news/{}/", encode_segment(slug)).as_str(),
            None::<&PageQuery>,
        )
        .await
    }

    /// Fetches a page of MPs matching the given filters.
    pub async fn get_mps(&self, query: &MpQuery) -> Result<Page<Mp>, Error> {
        self.get(Operation::FetchMps, "/trackers/mps/", Some(query))
            .await
    }

    pub async fn get_mp(&self, mp_id: MpID) -> Result<Mp, Error> {
        self.get(
            Operation::FetchMp,
            format!("/trackers/mps/{}/", mp_id).as_str(),
            None::<&PageQuery>,
        )
        .await
    }

    pub async fn get_committees(&self, query: &PageQuery) -> Result<Page<Committee>, Error> {
        self.get(Operation::FetchCommittees, "/resources/committees/", Some(query))
            .await
    }

    /// Fetches a committee with its members and documents.
    pub async fn get_committee(&self, committee_id: CommitteeID) -> Result<Committee, Error> {
        self.get(
            Operation::FetchCommittee,
            format!("/resources/committees/{}/", committee_id).as_str(),
            None::<&PageQuery>,
        )
        .await
    }

    pub async fn get_loans(&self, query: &LoanQuery) -> Result<Page<Loan>, Error> {
        self.get(Operation::FetchLoans, "/resources/loans/", Some(query))
            .await
    }

    pub async fn get_loan(&self, loan_id: LoanID) -> Result<Loan, Error> {
        self.get(
            Operation::FetchLoan,
            format!("/resources/loans/{}/", loan_id).as_str(),
            None::<&PageQuery>,
        )
        .await
    }

    /// Fetches a page of hot-in-parliament items, newest first.
    pub async fn get_hot_items(&self, query: &PageQuery) -> Result<Page<HotItem>, Error> {
        self.get(Operation::FetchHotItems, "/hot-in-parliament/", Some(query))
            .await
    }

    pub async fn get_hot_item(&self, slug: &str) -> Result<HotItem, Error> {
        self.get(
            Operation::FetchHotItem,
            format!("/hot-in-parliament/{}/", encode_segment(slug)).as_str(),
            None::<&PageQuery>,
        )
        .await
    }

    /// Sends one chatbot query. The caller must adopt the returned
    /// `session_id` for every later request.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, Error> {
        self.post(Operation::SendChat, "/chatbot/", Some(request))
            .await
    }

    /// Submits the contact form and returns the backend's confirmation text.
    pub async fn submit_contact(&self, message: &ContactMessage) -> Result<String, Error> {
        let receipt: ContactReceipt = self
            .post(Operation::SendContact, "/contact/", Some(message))
            .await?;
        Ok(receipt.message)
    }
}

/// Only GETs of a single record report 404 as "not found"; list and POST
/// endpoints treat it like any other failure.
fn operation_is_lookup(operation: Operation) -> bool {
    matches!(
        operation,
        Operation::FetchBill
            | Operation::FetchNewsArticle
            | Operation::FetchMp
            | Operation::FetchCommittee
            | Operation::FetchLoan
            | Operation::FetchHotItem
    )
}

/// Percent-encodes a slug for use as a single path segment.
fn encode_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.trim().as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_from_base() {
        let client = Client::with_base_url("http://host/api/").unwrap();
        assert_eq!(client.base_url(), "http://host/api");
        assert_eq!(client.media().base(), "http://host/");
    }

    #[test]
    fn slug_segments_are_encoded() {
        assert_eq!(encode_segment("budget-2024"), "budget-2024");
        assert_eq!(encode_segment("a b/c"), "a%20b%2Fc");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
    }
}
