//! Input validation for user-supplied text: search boxes, chat queries and
//! the contact form.

use crate::error::ParliamentError;

pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_QUERY_LENGTH: usize = 1000;
pub const MAX_NAME_LENGTH: usize = 120;
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_SUBJECT_LENGTH: usize = 200;
pub const MAX_MESSAGE_LENGTH: usize = 5000;

/// Strip ASCII control characters (except space, tab and newline), trim
/// whitespace, and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, ParliamentError> {
    if input.len() > max_len {
        return Err(ParliamentError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || matches!(c, ' ' | '\t' | '\n'))
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(ParliamentError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a search/name filter: enforce length, strip control chars, trim.
pub fn validate_search(input: &str) -> Result<String, ParliamentError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate a chatbot query.
pub fn validate_query(input: &str) -> Result<String, ParliamentError> {
    sanitize_text(input, MAX_QUERY_LENGTH)
        .map_err(|_| ParliamentError::InvalidInput("please enter a question".to_string()))
}

/// Validate a required form field, naming the field in the error.
pub fn validate_field(field: &str, input: &str, max_len: usize) -> Result<String, ParliamentError> {
    sanitize_text(input, max_len).map_err(|e| match e {
        ParliamentError::InvalidInput(msg) if msg.contains("empty") => {
            ParliamentError::InvalidInput(format!("{} is required", field))
        }
        ParliamentError::InvalidInput(_) => ParliamentError::InvalidInput(format!(
            "{} must be at most {} characters",
            field, max_len
        )),
        other => other,
    })
}

/// Shape check for an email address: one `@`, non-empty local part, and a
/// dotted domain without spaces.
pub fn validate_email(input: &str) -> Result<String, ParliamentError> {
    let email = validate_field("email", input, MAX_EMAIL_LENGTH)?;
    let invalid = || ParliamentError::InvalidInput(format!("'{}' is not a valid email address", email));
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty()
        || domain.contains('@')
        || email.contains(char::is_whitespace)
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
    {
        return Err(invalid());
    }
    Ok(email)
}

/// Page numbers are 1-indexed.
pub fn validate_page(page: u32) -> Result<u32, ParliamentError> {
    if page == 0 {
        return Err(ParliamentError::InvalidInput(
            "page numbers start at 1".to_string(),
        ));
    }
    Ok(page)
}

/// Page sizes are capped to keep responses small.
pub fn validate_page_size(page_size: u32) -> Result<u32, ParliamentError> {
    if !(1..=100).contains(&page_size) {
        return Err(ParliamentError::InvalidInput(format!(
            "page size {} is outside 1-100",
            page_size
        )));
    }
    Ok(page_size)
}
