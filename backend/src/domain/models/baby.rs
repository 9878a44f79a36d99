//! backend/src/domain/models/baby.rs

use chrono::NaiveDate;
use shared::Gender;

/// Domain model of the baby being tracked.
/// Read-only for the lifetime of a request; owned by the remote profile API.
#[derive(Debug, Clone, PartialEq)]
pub struct Baby {
    pub id: String,
    pub name: String,
    pub dob: NaiveDate,
    pub gender: Option<Gender>,
}
