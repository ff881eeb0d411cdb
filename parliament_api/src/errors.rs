//! Error types for the API client.

use std::fmt;

/// Backend operation a request belongs to. Its `Display` form is the
/// human-readable phrase used in failure messages ("fetch bills").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    FetchBills,
    FetchBill,
    LikeBill,
    CommentBill,
    ShareBill,
    FetchNews,
    FetchNewsArticle,
    FetchMps,
    FetchMp,
    FetchCommittees,
    FetchCommittee,
    FetchLoans,
    FetchLoan,
    FetchHotItems,
    FetchHotItem,
    SendChat,
    SendContact,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Operation::FetchBills => "fetch bills",
                Operation::FetchBill => "fetch bill",
                Operation::LikeBill => "like bill",
                Operation::CommentBill => "comment on bill",
                Operation::ShareBill => "share bill",
                Operation::FetchNews => "fetch news",
                Operation::FetchNewsArticle => "fetch news article",
                Operation::FetchMps => "fetch MPs",
                Operation::FetchMp => "fetch MP",
                Operation::FetchCommittees => "fetch committees",
                Operation::FetchCommittee => "fetch committee",
                Operation::FetchLoans => "fetch loans",
                Operation::FetchLoan => "fetch loan",
                Operation::FetchHotItems => "fetch hot in parliament",
                Operation::FetchHotItem => "fetch hot in parliament item",
                Operation::SendChat => "get a response from the chatbot",
                Operation::SendContact => "send message",
            }
        )
    }
}

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Network failure, timeout, or a non-success status. The backend's
    /// error body is never surfaced, only the operation that failed.
    #[error("Failed to {0}")]
    RequestFailed(Operation),
    /// The backend answered 404 for a detail lookup.
    #[error("Failed to {operation}: not found")]
    NotFound { operation: Operation },
    /// The body decoded but did not match the expected shape.
    #[error("Failed to {operation}: unexpected response")]
    InvalidResponse { operation: Operation, reason: String },
    /// A request URL could not be constructed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client")]
    ClientBuild,
}

impl Error {
    /// The operation this error belongs to, if it came from a request.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Error::RequestFailed(operation) => Some(*operation),
            Error::NotFound { operation } | Error::InvalidResponse { operation, .. } => {
                Some(*operation)
            }
            Error::InvalidUrl(_) | Error::ClientBuild => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_names_the_operation() {
        let err = Error::RequestFailed(Operation::FetchBills);
        assert_eq!(err.to_string(), "Failed to fetch bills");
        assert_eq!(err.operation(), Some(Operation::FetchBills));
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_is_flagged() {
        let err = Error::NotFound {
            operation: Operation::FetchMp,
        };
        assert!(err.is_not_found());
        assert!(err.to_string().contains("fetch MP"));
    }

    #[test]
    fn url_errors_have_no_operation() {
        assert_eq!(Error::InvalidUrl("x".into()).operation(), None);
        assert_eq!(Error::ClientBuild.operation(), None);
    }
}
