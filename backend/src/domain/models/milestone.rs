//! backend/src/domain/models/milestone.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::TimingStatus;

/// Catalog entry for one developmental milestone.
///
/// Thresholds are ages in weeks and must satisfy
/// `typical_week <= late_start_week <= red_flag_week`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub typical_week: u32,
    pub late_start_week: u32,
    pub red_flag_week: u32,
    #[serde(default)]
    pub early_badge_name: Option<String>,
    #[serde(default)]
    pub early_badge_copy: Option<String>,
    #[serde(default)]
    pub normal_badge_name: Option<String>,
    #[serde(default)]
    pub normal_badge_copy: Option<String>,
    pub late_parent_copy: String,
    #[serde(default)]
    pub red_flag_title: Option<String>,
    pub red_flag_copy: String,
}

impl MilestoneDefinition {
    pub fn validate(&self) -> Result<(), MilestoneDefinitionError> {
        if self.name.trim().is_empty() {
            return Err(MilestoneDefinitionError::EmptyName(self.id.clone()));
        }
        if self.typical_week > self.late_start_week || self.late_start_week > self.red_flag_week {
            return Err(MilestoneDefinitionError::ThresholdsOutOfOrder {
                id: self.id.clone(),
                typical_week: self.typical_week,
                late_start_week: self.late_start_week,
                red_flag_week: self.red_flag_week,
            });
        }
        Ok(())
    }
}

/// A badge awarded for an early or on-time milestone
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeAward {
    pub name: String,
    pub copy: Option<String>,
}

/// Per-baby achievement record for one milestone definition
#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneProgress {
    pub milestone_id: String,
    pub completed: bool,
    pub completed_week: Option<u32>,
    pub timing_status: Option<TimingStatus>,
    pub badge_awarded: bool,
    pub badge_name: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Copy for a milestone that has not been observed yet
#[derive(Debug, Clone, PartialEq)]
pub struct Guidance {
    pub title: String,
    pub message: String,
    pub show_doctor_cta: bool,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MilestoneDefinitionError {
    #[error("Milestone {0} has an empty name")]
    EmptyName(String),
    #[error(
        "Milestone {id} thresholds out of order: typical {typical_week}, late {late_start_week}, red flag {red_flag_week}"
    )]
    ThresholdsOutOfOrder {
        id: String,
        typical_week: u32,
        late_start_week: u32,
        red_flag_week: u32,
    },
    #[error("Milestone {0} is defined more than once")]
    DuplicateId(String),
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RecordMilestoneError {
    #[error("Unknown milestone: {0}")]
    UnknownMilestone(String),
    #[error("Milestone {0} is already completed")]
    AlreadyCompleted(String),
}
