//! Member of Parliament types.

use serde::{Deserialize, Serialize};

use super::{require_id, Validate};
use crate::{Error, MediaResolver};

/// Backend-assigned MP identifier.
pub type MpID = u64;

/// A Member of Parliament.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Mp {
    pub id: MpID,

    pub first_name: String,

    pub last_name: String,

    #[serde(default)]
    pub other_names: Option<String>,

    pub party: String,

    pub constituency: String,

    pub district: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    /// Relative media path or absolute URL of the portrait.
    #[serde(default)]
    pub photo: Option<String>,
}

impl Mp {
    /// Absolute URL of the portrait, if the backend has one.
    pub fn resolve_photo(&self, media: &MediaResolver) -> Result<Option<String>, Error> {
        media.resolve_optional(self.photo.as_deref())
    }

    /// First, middle and last names joined with single spaces.
    pub fn full_name(&self) -> String {
        [
            Some(self.first_name.as_str()),
            self.other_names.as_deref(),
            Some(self.last_name.as_str()),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

impl Validate for Mp {
    fn validate(&self) -> Result<(), String> {
        require_id("mp id", self.id)?;
        if self.first_name.trim().is_empty() && self.last_name.trim().is_empty() {
            return Err("mp has no name".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mp(other_names: Option<&str>) -> Mp {
        Mp {
            id: 1,
            first_name: "Grace".into(),
            last_name: "Banda".into(),
            other_names: other_names.map(String::from),
            party: "UTM".into(),
            constituency: "Lilongwe City Centre".into(),
            district: "Lilongwe".into(),
            email: None,
            phone: None,
            photo: None,
        }
    }

    #[test]
    fn full_name_skips_missing_parts() {
        assert_eq!(mp(None).full_name(), "Grace Banda");
        assert_eq!(mp(Some("  ")).full_name(), "Grace Banda");
        assert_eq!(mp(Some("Chimwemwe")).full_name(), "Grace Chimwemwe Banda");
    }

    #[test]
    fn validate_requires_a_name() {
        let mut nameless = mp(None);
        nameless.first_name.clear();
        nameless.last_name.clear();
        assert!(nameless.validate().is_err());
        assert!(mp(None).validate().is_ok());
    }

    #[test]
    fn independent_without_party_is_valid() {
        let mut independent = mp(None);
        independent.party.clear();
        assert!(independent.validate().is_ok());
    }

    #[test]
    fn photo_resolves_against_media_base() {
        let media = MediaResolver::from_api_base("http://host/api").unwrap();
        let mut with_photo = mp(None);
        assert_eq!(with_photo.resolve_photo(&media).unwrap(), None);

        with_photo.photo = Some("/media/mps/banda.jpg".into());
        assert_eq!(
            with_photo.resolve_photo(&media).unwrap().as_deref(),
            Some("http://host/media/mps/banda.jpg")
        );
    }
}
