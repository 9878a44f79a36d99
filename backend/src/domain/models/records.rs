//! backend/src/domain/models/records.rs
//!
//! Parsed forms of the five record kinds that feed the medical history
//! timeline. Timestamps keep the offset they were entered with, so they
//! compare as instants and still show the caregiver's wall clock.

use chrono::{DateTime, FixedOffset, NaiveDate};
use shared::{GrowthType, ReportType, VaccineStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct Vaccine {
    pub id: String,
    pub name: String,
    pub age_group: String,
    pub status: VaccineStatus,
    pub due_date: Option<NaiveDate>,
    pub completed_date: Option<DateTime<FixedOffset>>,
    pub proof_url: Option<String>,
}

impl Vaccine {
    pub fn is_completed(&self) -> bool {
        self.status == VaccineStatus::Completed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrowthEntry {
    pub id: String,
    pub measurement: GrowthType,
    pub value: f64,
    pub percentile: Option<f64>,
    pub recorded_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub age_group: String,
    pub completed: bool,
    pub completed_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoctorVisit {
    pub id: String,
    pub visit_date: DateTime<FixedOffset>,
    pub reason: String,
    pub doctor_name: Option<String>,
    pub clinic_name: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MedicalReport {
    pub id: String,
    pub report_date: DateTime<FixedOffset>,
    pub title: String,
    pub report_type: ReportType,
    pub notes: Option<String>,
    pub file_url: Option<String>,
}

/// The five source collections for one baby, already parsed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MedicalHistory {
    pub vaccines: Vec<Vaccine>,
    pub growth_entries: Vec<GrowthEntry>,
    pub milestones: Vec<Milestone>,
    pub doctor_visits: Vec<DoctorVisit>,
    pub medical_reports: Vec<MedicalReport>,
}
