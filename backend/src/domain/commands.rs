// backend/src/domain/commands.rs

//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The io layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod timeline {
    use crate::domain::models::timeline::{TimelineFilter, TimelineMonth, TimelineRecord};
    use shared::TimelineStats;

    /// Query for the medical history view.
    #[derive(Debug, Clone, Default)]
    pub struct TimelineQuery {
        pub filter: TimelineFilter,
    }

    /// Result of a timeline query.
    #[derive(Debug, Clone)]
    pub struct TimelineResult {
        pub filter: TimelineFilter,
        /// Filtered records, newest first
        pub records: Vec<TimelineRecord>,
        /// The filtered records grouped by month
        pub months: Vec<TimelineMonth>,
        /// Counts over the unfiltered timeline
        pub stats: TimelineStats,
    }
}

pub mod milestones {
    use chrono::{DateTime, NaiveDate, Utc};

    /// Command for recording an observed milestone.
    #[derive(Debug, Clone)]
    pub struct RecordMilestoneCommand {
        pub milestone_id: String,
        pub observed_on: NaiveDate,
        pub recorded_at: DateTime<Utc>,
    }
}
