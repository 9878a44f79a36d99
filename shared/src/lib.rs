use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Source records, as served by the remote REST APIs
// ---------------------------------------------------------------------------

/// A child being tracked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BabyProfile {
    pub id: String,
    pub name: String,
    pub dob: String, // ISO 8601 date format (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Vaccination status as reported by the vaccine API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VaccineStatus {
    Pending,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vaccine {
    pub id: String,
    pub name: String,
    /// Schedule bucket, e.g. "6 weeks" or "9 months"
    pub age_group: String,
    pub status: VaccineStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_url: Option<String>,
}

/// Kind of growth measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GrowthType {
    Weight,
    Height,
    HeadCircumference,
}

impl GrowthType {
    /// All measurement kinds, in dashboard order
    pub const ALL: [GrowthType; 3] = [
        GrowthType::Weight,
        GrowthType::Height,
        GrowthType::HeadCircumference,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GrowthType::Weight => "Weight",
            GrowthType::Height => "Height",
            GrowthType::HeadCircumference => "Head Circumference",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            GrowthType::Weight => "kg",
            GrowthType::Height | GrowthType::HeadCircumference => "cm",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub entry_type: GrowthType,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentile: Option<f64>,
    pub recorded_at: String, // RFC 3339 timestamp or ISO date
}

/// Simple milestone shape used by the medical records timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub age_group: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorVisit {
    pub id: String,
    pub visit_date: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinic_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Category of an uploaded medical document.
/// Unrecognized categories deserialize as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    Prescription,
    LabResult,
    Scan,
    VaccinationRecord,
    DischargeSummary,
    BirthCertificate,
    #[serde(other)]
    Other,
}

impl ReportType {
    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Prescription => "Prescription",
            ReportType::LabResult => "Lab Result",
            ReportType::Scan => "Scan / Imaging",
            ReportType::VaccinationRecord => "Vaccination Record",
            ReportType::DischargeSummary => "Discharge Summary",
            ReportType::BirthCertificate => "Birth Certificate",
            ReportType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalReport {
    pub id: String,
    pub report_date: String,
    pub title: String,
    pub report_type: ReportType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Milestone tracker
// ---------------------------------------------------------------------------

/// Catalog entry describing one developmental milestone and its timing thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub typical_week: u32,
    pub late_start_week: u32,
    pub red_flag_week: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub early_badge_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub early_badge_copy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal_badge_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal_badge_copy: Option<String>,
    pub late_parent_copy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red_flag_title: Option<String>,
    pub red_flag_copy: String,
}

/// When a milestone was observed relative to its typical week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimingStatus {
    Early,
    Normal,
    Late,
}

impl TimingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimingStatus::Early => "early",
            TimingStatus::Normal => "normal",
            TimingStatus::Late => "late",
        }
    }
}

impl fmt::Display for TimingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-baby achievement record for one milestone definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneProgress {
    pub milestone_id: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_week: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing_status: Option<TimingStatus>,
    #[serde(default)]
    pub badge_awarded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>, // RFC 3339 timestamp
}

/// Copy shown when a milestone has not been observed yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneGuidance {
    pub title: String,
    pub message: String,
    pub show_doctor_cta: bool,
}

/// One card on the milestone board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneBoardEntry {
    pub definition: MilestoneDefinition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<MilestoneProgress>,
    /// Present for milestones that are not completed yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance: Option<MilestoneGuidance>,
}

/// Request for the milestone board
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneBoardRequest {
    /// Optional date override (YYYY-MM-DD) - uses today if not provided
    #[serde(default)]
    pub as_of: Option<String>,
}

/// The baby's milestone schedule, bucketed by urgency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneBoardResponse {
    pub baby_id: String,
    pub current_age_weeks: u32,
    pub now: Vec<MilestoneBoardEntry>,
    pub soon: Vec<MilestoneBoardEntry>,
    /// Typical week has passed but the milestone is not late yet
    pub watching: Vec<MilestoneBoardEntry>,
    pub late: Vec<MilestoneBoardEntry>,
    pub done: Vec<MilestoneBoardEntry>,
}

/// Request to record that a milestone was observed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMilestoneRequest {
    pub milestone_id: String,
    /// Optional observation date (YYYY-MM-DD) - uses today if not provided
    #[serde(default)]
    pub observed_on: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMilestoneResponse {
    pub progress: MilestoneProgress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_copy: Option<String>,
    pub success_message: String,
}

// ---------------------------------------------------------------------------
// Age
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeRequest {
    /// Optional date override (YYYY-MM-DD) - uses today if not provided
    #[serde(default)]
    pub as_of: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeResponse {
    pub baby_id: String,
    pub display: String, // e.g. "3 months 4 days" or "1y 2m"
    pub months: u32,
    pub days: u32,
    pub weeks: u32,
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

/// Source kind of a timeline record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Vaccine,
    Growth,
    Milestone,
    Visit,
    Report,
}

impl RecordType {
    pub const ALL: [RecordType; 5] = [
        RecordType::Vaccine,
        RecordType::Growth,
        RecordType::Milestone,
        RecordType::Visit,
        RecordType::Report,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Vaccine => "vaccine",
            RecordType::Growth => "growth",
            RecordType::Milestone => "milestone",
            RecordType::Visit => "visit",
            RecordType::Report => "report",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized entry of the unified medical history feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRecord {
    /// "<type>::<source id>"
    pub id: String,
    pub date: String, // ISO 8601 local date-time
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub title: String,
    pub detail: String,
    pub has_attachment: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

/// Timeline records that fall in one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineMonthGroup {
    pub year: i32,
    pub month: u32,
    pub label: String, // e.g. "March 2024"
    pub records: Vec<TimelineRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStats {
    pub vaccines: usize,
    pub growth: usize,
    pub milestones: usize,
    pub visits: usize,
    pub reports: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRequest {
    /// "all" or one of the record types; defaults to "all"
    #[serde(default)]
    pub filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineResponse {
    pub filter: String,
    pub records: Vec<TimelineRecord>,
    pub groups: Vec<TimelineMonthGroup>,
    /// Always computed over the unfiltered timeline
    pub stats: TimelineStats,
}

// ---------------------------------------------------------------------------
// Vaccine schedule and growth summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VaccineDueStatus {
    Overdue,
    DueSoon,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccineDue {
    pub vaccine_id: String,
    pub name: String,
    pub age_group: String,
    pub due_date: String, // YYYY-MM-DD
    /// Negative when overdue
    pub days_until_due: i64,
    pub status: VaccineDueStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccineScheduleRequest {
    /// Optional date override (YYYY-MM-DD) - uses today if not provided
    #[serde(default)]
    pub as_of: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccineScheduleResponse {
    pub pending: Vec<VaccineDue>,
    pub completed_count: usize,
    pub total_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthSummaryResponse {
    /// Most recent entry for each measurement type that has one
    pub latest: Vec<GrowthEntry>,
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Everything the data-fetching layer has loaded for one baby
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BabyCareSnapshot {
    pub baby: BabyProfile,
    #[serde(default)]
    pub vaccines: Vec<Vaccine>,
    #[serde(default)]
    pub growth_entries: Vec<GrowthEntry>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub doctor_visits: Vec<DoctorVisit>,
    #[serde(default)]
    pub medical_reports: Vec<MedicalReport>,
    #[serde(default)]
    pub milestone_progress: Vec<MilestoneProgress>,
}

impl BabyCareSnapshot {
    /// Snapshot with a profile and no records
    pub fn empty(baby: BabyProfile) -> Self {
        Self {
            baby,
            vaccines: Vec::new(),
            growth_entries: Vec::new(),
            milestones: Vec::new(),
            doctor_visits: Vec::new(),
            medical_reports: Vec::new(),
            milestone_progress: Vec::new(),
        }
    }
}
