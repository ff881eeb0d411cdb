//! Library layer for Parliament Watch: the client-side controllers that sit
//! between the typed API client and whatever renders the pages.
//!
//! Wraps the `parliament_api` crate with loading/error/data page state,
//! the chatbot session controller and its session store, the contact form,
//! input validation, display formatting and settings.

pub mod chat;
pub mod config;
pub mod contact;
pub mod error;
pub mod formatting;
pub mod page;
pub mod session;
pub mod validation;

pub use parliament_api;
pub use parliament_api::types;
pub use parliament_api::{
    BillQuery, Client, ClientConfig, LoanQuery, MediaResolver, MpQuery, NewsQuery, Operation,
    PageQuery, Query,
};

pub use chat::{ChatExchange, ChatHistory, ChatSession, HISTORY_LIMIT};
pub use config::Settings;
pub use contact::{ContactForm, FormStatus};
pub use error::ParliamentError;
pub use page::{DetailPage, PageState, PagedList, Ticket};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
