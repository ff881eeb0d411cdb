//! Typed HTTP client for the Parliament Watch backend: bills, news, MPs,
//! committees, loans, hot-in-parliament items, the chatbot and the contact
//! form.

mod client;
mod errors;
mod media;
mod query;
pub mod types;
pub use self::client::{Client, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::{Error, Operation};
pub use self::media::MediaResolver;
pub use self::query::{BillQuery, LoanQuery, MpQuery, NewsQuery, PageQuery, Query, QueryCommon};
