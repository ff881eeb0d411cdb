//! Resolution of document and image paths returned by the backend.
//!
//! Files are served from the API host's root, not from under the API path:
//! with an API base of `http://host/api`, the path `/media/doc.pdf` lives at
//! `http://host/media/doc.pdf`.

use url::Url;

use crate::Error;

/// Resolves backend file references against the media base.
#[derive(Clone, Debug)]
pub struct MediaResolver {
    base: Url,
}

impl MediaResolver {
    /// Derives the media base from the API base by dropping its path,
    /// query and fragment.
    pub fn from_api_base(api_base: &str) -> Result<Self, Error> {
        let mut base = Url::parse(&fix_doubled_scheme(api_base.trim())).map_err(|e| {
            tracing::error!("Invalid API base URL '{}': {}", api_base, e);
            Error::InvalidUrl(api_base.to_string())
        })?;
        if base.cannot_be_a_base() {
            return Err(Error::InvalidUrl(api_base.to_string()));
        }
        base.set_path("/");
        base.set_query(None);
        base.set_fragment(None);
        Ok(Self { base })
    }

    /// The media base, always ending in `/`.
    pub fn base(&self) -> &str {
        self.base.as_str()
    }

    /// Absolute URLs pass through unchanged (after repairing a doubled
    /// scheme); anything else is joined onto the media base.
    pub fn resolve(&self, file: &str) -> Result<String, Error> {
        let file = fix_doubled_scheme(file.trim());
        if is_absolute(&file) {
            return Ok(file);
        }
        self.base
            .join(&file)
            .map(String::from)
            .map_err(|e| {
                tracing::warn!("Could not resolve media path '{}': {}", file, e);
                Error::InvalidUrl(file.clone())
            })
    }
}

impl MediaResolver {
    /// Like [`Self::resolve`] for fields the backend may leave out; a missing
    /// or blank value resolves to `None`.
    pub fn resolve_optional(&self, file: Option<&str>) -> Result<Option<String>, Error> {
        match file.map(str::trim).filter(|f| !f.is_empty()) {
            Some(file) => self.resolve(file).map(Some),
            None => Ok(None),
        }
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Repairs `https//host` and `http//host` (colon dropped somewhere upstream).
fn fix_doubled_scheme(url: &str) -> String {
    for scheme in ["https", "http"] {
        if let Some(rest) = url.strip_prefix(scheme).and_then(|r| r.strip_prefix("//")) {
            return format!("{}://{}", scheme, rest);
        }
    }
    url.to_string()
}
