//! Parliamentary committees and their documents.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{require_id, require_non_empty, Mp, Validate};
use crate::{Error, MediaResolver};

pub type CommitteeID = u64;

/// A committee for one term, with its leadership, members and documents.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Committee {
    pub id: CommitteeID,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Start of the term. Older records may not carry one.
    #[serde(default)]
    pub begin_date: Option<NaiveDate>,

    /// End of the term. Absent while the committee sits.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub chairperson: Option<Mp>,

    #[serde(default)]
    pub deputy_chairperson: Option<Mp>,

    #[serde(default)]
    pub members: Vec<Mp>,

    #[serde(default)]
    pub documents: Vec<Document>,
}

impl Validate for Committee {
    fn validate(&self) -> Result<(), String> {
        require_id("committee id", self.id)?;
        require_non_empty("committee name", &self.name)?;
        if let (Some(begin), Some(end)) = (self.begin_date, self.end_date) {
            if begin > end {
                return Err(format!("term begins {} after it ends {}", begin, end));
            }
        }
        self.chairperson
            .validate()
            .map_err(|e| format!("chairperson: {}", e))?;
        self.deputy_chairperson
            .validate()
            .map_err(|e| format!("deputy chairperson: {}", e))?;
        self.members.validate().map_err(|e| format!("members{}", e))?;
        self.documents
            .validate()
            .map_err(|e| format!("documents{}", e))
    }
}

/// A file attached to a committee or loan.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Document {
    pub id: u64,

    pub name: String,

    /// Media path relative to the host root, or an absolute URL.
    pub file: String,
}

impl Document {
    pub fn resolve_file(&self, media: &MediaResolver) -> Result<String, Error> {
        media.resolve(&self.file)
    }
}

impl Validate for Document {
    fn validate(&self) -> Result<(), String> {
        require_id("document id", self.id)?;
        require_non_empty("document file", &self.file)
    }
}
