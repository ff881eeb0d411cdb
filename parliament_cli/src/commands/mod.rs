pub mod bills;
pub mod chat;
pub mod committees;
pub mod contact;
pub mod hot;
pub mod loans;
pub mod mps;
pub mod news;

use anyhow::{bail, Result};
use clap::Args;
use parliament_lib::validation;
use parliament_lib::PageState;

/// Pagination flags shared by every list command.
#[derive(Args)]
pub struct PageArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub page_size: u32,
}

impl PageArgs {
    pub fn validated(&self) -> Result<(u32, u32)> {
        Ok((
            validation::validate_page(self.page)?,
            validation::validate_page_size(self.page_size)?,
        ))
    }
}

/// Unwraps a settled page state. `NotFound` and `Failed` become errors so
/// the process exits non-zero.
pub fn settled<'a, T>(state: &'a PageState<T>, what: &str) -> Result<&'a T> {
    match state {
        PageState::Ready(data) => Ok(data),
        PageState::NotFound => bail!("{} not found", what),
        PageState::Failed(message) => {
            bail!("{}. Run the command again to retry.", message)
        }
        PageState::Loading => bail!("{} did not finish loading", what),
    }
}

/// Validated search term, or `None` when the flag is absent.
pub fn search_term(search: &Option<String>) -> Result<Option<String>> {
    search
        .as_deref()
        .map(validation::validate_search)
        .transpose()
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_maps_each_state() {
        let ready = PageState::Ready(5);
        assert_eq!(*settled(&ready, "Bill 5").unwrap(), 5);

        let missing: PageState<u8> = PageState::NotFound;
        assert_eq!(
            settled(&missing, "Bill 5").unwrap_err().to_string(),
            "Bill 5 not found"
        );

        let failed: PageState<u8> = PageState::Failed("Failed to fetch bill".into());
        assert_eq!(
            settled(&failed, "Bill 5").unwrap_err().to_string(),
            "Failed to fetch bill. Run the command again to retry."
        );
    }
}
