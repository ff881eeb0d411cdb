//! Bill tracker types.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::de::normalize_label;
use super::{require_id, require_non_empty, Validate};
use crate::{Error, MediaResolver};

/// Backend-assigned bill identifier.
pub type BillID = u64;

/// A bill tracked through the legislature, with its readings.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Bill {
    pub id: BillID,

    pub title: String,

    /// Free-form category, e.g. "Government Bill" or "Private Member's Bill".
    pub bill_type: String,

    pub status: BillStatus,

    /// Minister or MP who moved the bill.
    pub mover: String,

    pub year: i32,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub likes: u64,

    #[serde(default)]
    pub comments: u64,

    #[serde(default)]
    pub shares: u64,

    /// Readings in the order the backend lists them.
    #[serde(default)]
    pub readings: Vec<BillReading>,
}

impl Bill {
    /// The furthest reading reached so far.
    pub fn latest_reading(&self) -> Option<&BillReading> {
        self.readings.iter().max_by_key(|r| r.stage)
    }

    /// Current value of the counter an engagement action increments.
    pub fn counter(&self, engagement: Engagement) -> u64 {
        match engagement {
            Engagement::Like => self.likes,
            Engagement::Comment => self.comments,
            Engagement::Share => self.shares,
        }
    }
}

impl Validate for Bill {
    fn validate(&self) -> Result<(), String> {
        require_id("bill id", self.id)?;
        require_non_empty("bill title", &self.title)?;
        for (idx, reading) in self.readings.iter().enumerate() {
            reading
                .validate()
                .map_err(|e| format!("readings[{}]: {}", idx, e))?;
        }
        Ok(())
    }
}

/// A formal reading of a bill, with optional documents.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BillReading {
    pub id: u64,

    pub stage: ReadingStage,

    /// Path or URL of the bill text tabled at this reading.
    #[serde(default)]
    pub document: Option<String>,

    #[serde(default)]
    pub supporting_document: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl BillReading {
    pub fn resolve_document(&self, media: &MediaResolver) -> Result<Option<String>, Error> {
        media.resolve_optional(self.document.as_deref())
    }

    pub fn resolve_supporting_document(
        &self,
        media: &MediaResolver,
    ) -> Result<Option<String>, Error> {
        media.resolve_optional(self.supporting_document.as_deref())
    }
}

impl Validate for BillReading {
    fn validate(&self) -> Result<(), String> {
        require_id("reading id", self.id)?;
        if self.updated_at < self.created_at {
            return Err("reading updated before it was created".to_string());
        }
        Ok(())
    }
}

/// Where a bill stands, in legislative order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BillStatus {
    Introduced,
    Committee,
    FirstReading,
    SecondReading,
    ThirdReading,
    Assented,
}

impl BillStatus {
    /// The value the backend expects in the `status` filter.
    pub fn as_param(&self) -> &'static str {
        match self {
            BillStatus::Introduced => "introduced",
            BillStatus::Committee => "committee",
            BillStatus::FirstReading => "first_reading",
            BillStatus::SecondReading => "second_reading",
            BillStatus::ThirdReading => "third_reading",
            BillStatus::Assented => "assented",
        }
    }
}

impl std::fmt::Display for BillStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BillStatus::Introduced => "Introduced",
                BillStatus::Committee => "Committee Stage",
                BillStatus::FirstReading => "1st Reading",
                BillStatus::SecondReading => "2nd Reading",
                BillStatus::ThirdReading => "3rd Reading",
                BillStatus::Assented => "Assented",
            }
        )
    }
}

impl FromStr for BillStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "introduced" | "tabled" => Ok(BillStatus::Introduced),
            "committee" | "committee stage" | "in committee" => Ok(BillStatus::Committee),
            "1st reading" | "first reading" => Ok(BillStatus::FirstReading),
            "2nd reading" | "second reading" => Ok(BillStatus::SecondReading),
            "3rd reading" | "third reading" => Ok(BillStatus::ThirdReading),
            "assented" | "assented to" | "assent" | "presidential assent" => {
                Ok(BillStatus::Assented)
            }
            _ => Err(format!("unknown bill status '{}'", s)),
        }
    }
}

impl Serialize for BillStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_param())
    }
}

impl<'de> Deserialize<'de> for BillStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Reading stage, ordered first to third.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReadingStage {
    First,
    Second,
    Third,
}

impl std::fmt::Display for ReadingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ReadingStage::First => "1st Reading",
                ReadingStage::Second => "2nd Reading",
                ReadingStage::Third => "3rd Reading",
            }
        )
    }
}

impl FromStr for ReadingStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "1" | "1st" | "first" | "1st reading" | "first reading" => Ok(ReadingStage::First),
            "2" | "2nd" | "second" | "2nd reading" | "second reading" => Ok(ReadingStage::Second),
            "3" | "3rd" | "third" | "3rd reading" | "third reading" => Ok(ReadingStage::Third),
            _ => Err(format!("unknown reading stage '{}'", s)),
        }
    }
}

impl Serialize for ReadingStage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(match self {
            ReadingStage::First => "first_reading",
            ReadingStage::Second => "second_reading",
            ReadingStage::Third => "third_reading",
        })
    }
}

impl<'de> Deserialize<'de> for ReadingStage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Counter-increment actions on a bill. Each POST bumps the counter by one
/// and the backend answers with only the new value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Engagement {
    Like,
    Comment,
    Share,
}

impl Engagement {
    /// Trailing path segment of the action endpoint.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Engagement::Like => "like",
            Engagement::Comment => "comment",
            Engagement::Share => "share",
        }
    }

    /// Field of the response body carrying the updated counter.
    pub fn counter_field(&self) -> &'static str {
        match self {
            Engagement::Like => "likes",
            Engagement::Comment => "comments",
            Engagement::Share => "shares",
        }
    }
}

impl FromStr for Engagement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "like" | "likes" => Ok(Engagement::Like),
            "comment" | "comments" => Ok(Engagement::Comment),
            "share" | "shares" => Ok(Engagement::Share),
            _ => Err(format!("unknown engagement '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_documents_resolve() {
        let media = MediaResolver::from_api_base("http://host/api").unwrap();
        let reading: BillReading = serde_json::from_str(
            r#"{
                "id": 1,
                "stage": "1st Reading",
                "document": "https//host/media/bill.pdf",
                "supporting_document": " ",
                "created_at": "2024-02-10T09:00:00Z",
                "updated_at": "2024-02-10T09:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(
            reading.resolve_document(&media).unwrap().as_deref(),
            Some("https://host/media/bill.pdf")
        );
        assert_eq!(reading.resolve_supporting_document(&media).unwrap(), None);
    }

    #[test]
    fn status_accepts_backend_spellings() {
        assert_eq!("1st Reading".parse::<BillStatus>(), Ok(BillStatus::FirstReading));
        assert_eq!("SECOND_READING".parse::<BillStatus>(), Ok(BillStatus::SecondReading));
        assert_eq!("Assented to".parse::<BillStatus>(), Ok(BillStatus::Assented));
        assert_eq!("committee stage".parse::<BillStatus>(), Ok(BillStatus::Committee));
        assert!("withdrawn".parse::<BillStatus>().is_err());
    }

    #[test]
    fn status_order_follows_the_legislative_process() {
        assert!(BillStatus::Introduced < BillStatus::Committee);
        assert!(BillStatus::Committee < BillStatus::FirstReading);
        assert!(BillStatus::ThirdReading < BillStatus::Assented);
    }

    #[test]
    fn reading_stage_accepts_ordinals() {
        assert_eq!("3rd".parse::<ReadingStage>(), Ok(ReadingStage::Third));
        assert_eq!("first_reading".parse::<ReadingStage>(), Ok(ReadingStage::First));
        assert!("fourth".parse::<ReadingStage>().is_err());
    }

    #[test]
    fn engagement_segments_and_fields() {
        assert_eq!(Engagement::Like.path_segment(), "like");
        assert_eq!(Engagement::Comment.counter_field(), "comments");
        assert_eq!("Share".parse::<Engagement>(), Ok(Engagement::Share));
    }
}
