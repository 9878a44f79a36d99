//! Milestone timing domain logic.
//!
//! Classifies when a milestone was observed relative to its catalog
//! thresholds, picks the badge for the observation, sorts the catalog into
//! urgency buckets for the milestone board, and produces the guidance copy
//! shown for milestones that have not been seen yet.
//!
//! ## Business Rules
//!
//! - Observed before `typical_week` is early, before `late_start_week` is normal, otherwise late
//! - Late observations never earn a badge
//! - Completed milestones always land in the "done" bucket
//! - A pending milestone is late once the baby reaches `late_start_week`, whatever its window
//! - Each milestone is recorded at most once per baby

use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::domain::age_service::AgeService;
use crate::domain::models::milestone::{
    BadgeAward, Guidance, MilestoneDefinition, MilestoneProgress, RecordMilestoneError,
};
use shared::TimingStatus;

/// Default width of the "now" window, in weeks past the current age
pub const DEFAULT_NOW_WINDOW_WEEKS: u32 = 2;

/// Catalog definitions sorted into urgency buckets, each ordered by typical week
#[derive(Debug, Default, PartialEq)]
pub struct UrgencyBuckets<'a> {
    pub now: Vec<&'a MilestoneDefinition>,
    pub soon: Vec<&'a MilestoneDefinition>,
    /// Typical week has passed but the late threshold has not been reached
    pub watching: Vec<&'a MilestoneDefinition>,
    pub late: Vec<&'a MilestoneDefinition>,
    pub done: Vec<&'a MilestoneDefinition>,
}

/// Input for recording an observed milestone
#[derive(Debug, Clone)]
pub struct RecordObservation<'a> {
    pub definition: &'a MilestoneDefinition,
    pub existing: Option<&'a MilestoneProgress>,
    pub dob: NaiveDate,
    pub observed_on: NaiveDate,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct MilestoneService {
    age_service: AgeService,
    now_window_weeks: u32,
}

impl MilestoneService {
    pub fn new(age_service: AgeService, now_window_weeks: u32) -> Self {
        Self {
            age_service,
            now_window_weeks,
        }
    }

    pub fn classify_timing(
        &self,
        observed_week: u32,
        definition: &MilestoneDefinition,
    ) -> TimingStatus {
        if observed_week < definition.typical_week {
            TimingStatus::Early
        } else if observed_week < definition.late_start_week {
            TimingStatus::Normal
        } else {
            TimingStatus::Late
        }
    }

    /// Badge earned for an observation with the given timing, if the definition has one
    pub fn badge_for(
        &self,
        status: TimingStatus,
        definition: &MilestoneDefinition,
    ) -> Option<BadgeAward> {
        let (name, copy) = match status {
            TimingStatus::Early => (&definition.early_badge_name, &definition.early_badge_copy),
            TimingStatus::Normal => (&definition.normal_badge_name, &definition.normal_badge_copy),
            TimingStatus::Late => return None,
        };

        name.as_ref().map(|name| BadgeAward {
            name: name.clone(),
            copy: copy.clone(),
        })
    }

    /// Sort definitions into now / soon / watching / late / done for the given age
    pub fn bucket_by_urgency<'a>(
        &self,
        definitions: &'a [MilestoneDefinition],
        progress_by_id: &HashMap<String, MilestoneProgress>,
        current_age_weeks: u32,
    ) -> UrgencyBuckets<'a> {
        let mut buckets = UrgencyBuckets::default();
        let window_end = current_age_weeks.saturating_add(self.now_window_weeks);

        for definition in definitions {
            let completed = progress_by_id
                .get(&definition.id)
                .map(|p| p.completed)
                .unwrap_or(false);

            if completed {
                buckets.done.push(definition);
            } else if current_age_weeks >= definition.late_start_week {
                buckets.late.push(definition);
            } else if (current_age_weeks..=window_end).contains(&definition.typical_week) {
                buckets.now.push(definition);
            } else if definition.typical_week > window_end {
                buckets.soon.push(definition);
            } else {
                buckets.watching.push(definition);
            }
        }

        for bucket in [
            &mut buckets.now,
            &mut buckets.soon,
            &mut buckets.watching,
            &mut buckets.late,
            &mut buckets.done,
        ] {
            bucket.sort_by_key(|d| d.typical_week);
        }

        debug!(
            "Bucketed {} milestones at week {}: now={}, soon={}, watching={}, late={}, done={}",
            definitions.len(),
            current_age_weeks,
            buckets.now.len(),
            buckets.soon.len(),
            buckets.watching.len(),
            buckets.late.len(),
            buckets.done.len()
        );

        buckets
    }

    /// Guidance for a milestone the caregiver has not seen yet
    pub fn not_seen_guidance(
        &self,
        current_age_weeks: u32,
        definition: &MilestoneDefinition,
    ) -> Guidance {
        if current_age_weeks >= definition.red_flag_week {
            Guidance {
                title: definition
                    .red_flag_title
                    .clone()
                    .unwrap_or_else(|| "Talk to your doctor".to_string()),
                message: definition.red_flag_copy.clone(),
                show_doctor_cta: true,
            }
        } else if current_age_weeks >= definition.late_start_week {
            Guidance {
                title: "Worth keeping an eye on".to_string(),
                message: definition.late_parent_copy.clone(),
                show_doctor_cta: true,
            }
        } else {
            Guidance {
                title: "Still on track".to_string(),
                message: format!(
                    "Most babies reach this around week {}. Your baby is {} weeks old, so there is still time.",
                    definition.typical_week, current_age_weeks
                ),
                show_doctor_cta: false,
            }
        }
    }

    /// Build the progress record for a newly observed milestone
    pub fn record_observation(
        &self,
        observation: RecordObservation<'_>,
    ) -> Result<(MilestoneProgress, Option<BadgeAward>), RecordMilestoneError> {
        let definition = observation.definition;
        if observation.existing.map(|p| p.completed).unwrap_or(false) {
            return Err(RecordMilestoneError::AlreadyCompleted(definition.id.clone()));
        }

        let completed_week = self
            .age_service
            .compute_age_weeks(observation.dob, observation.observed_on);
        let timing_status = self.classify_timing(completed_week, definition);
        let badge = self.badge_for(timing_status, definition);

        info!(
            "Recorded milestone {} at week {} ({})",
            definition.id, completed_week, timing_status
        );

        let progress = MilestoneProgress {
            milestone_id: definition.id.clone(),
            completed: true,
            completed_week: Some(completed_week),
            timing_status: Some(timing_status),
            badge_awarded: badge.is_some(),
            badge_name: badge.as_ref().map(|b| b.name.clone()),
            completed_at: Some(observation.recorded_at),
        };

        Ok((progress, badge))
    }
}
