//! backend/src/domain/models/timeline.rs

use chrono::{DateTime, FixedOffset};
use shared::RecordType;
use std::str::FromStr;

/// One entry of the unified medical history feed.
/// Built fresh from the source collections on every request, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineRecord {
    pub id: String,
    pub date: DateTime<FixedOffset>,
    pub record_type: RecordType,
    pub title: String,
    pub detail: String,
    pub attachment_url: Option<String>,
    pub additional_info: Option<String>,
}

impl TimelineRecord {
    /// Timeline ids are namespaced by source kind so ids from different APIs never collide
    pub fn generate_id(record_type: RecordType, source_id: &str) -> String {
        format!("{}::{}", record_type.as_str(), source_id)
    }

    pub fn has_attachment(&self) -> bool {
        self.attachment_url.is_some()
    }
}

/// Records sharing a calendar month (in their own offsets), newest first
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineMonth {
    pub year: i32,
    pub month: u32,
    pub records: Vec<TimelineRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimelineFilter {
    #[default]
    All,
    Only(RecordType),
}

impl TimelineFilter {
    pub fn matches(&self, record: &TimelineRecord) -> bool {
        match self {
            TimelineFilter::All => true,
            TimelineFilter::Only(record_type) => record.record_type == *record_type,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineFilter::All => "all",
            TimelineFilter::Only(record_type) => record_type.as_str(),
        }
    }
}

impl FromStr for TimelineFilter {
    type Err = TimelineFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = s.trim().to_ascii_lowercase();
        if kind == "all" {
            return Ok(TimelineFilter::All);
        }
        RecordType::ALL
            .into_iter()
            .find(|record_type| record_type.as_str() == kind)
            .map(TimelineFilter::Only)
            .ok_or_else(|| TimelineFilterError::UnknownKind(s.to_string()))
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TimelineFilterError {
    #[error("Unknown timeline filter: {0}")]
    UnknownKind(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert_eq!("all".parse::<TimelineFilter>(), Ok(TimelineFilter::All));
        assert_eq!(
            "vaccine".parse::<TimelineFilter>(),
            Ok(TimelineFilter::Only(RecordType::Vaccine))
        );
        assert_eq!(
            " Report ".parse::<TimelineFilter>(),
            Ok(TimelineFilter::Only(RecordType::Report))
        );
        assert_eq!(
            "photos".parse::<TimelineFilter>(),
            Err(TimelineFilterError::UnknownKind("photos".to_string()))
        );
    }

    #[test]
    fn test_generate_id() {
        assert_eq!(TimelineRecord::generate_id(RecordType::Growth, "g-17"), "growth::g-17");
    }
}
