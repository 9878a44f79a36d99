//! Medical history timeline.
//!
//! Merges vaccines, growth entries, milestones, doctor visits and medical
//! reports into one feed of [`TimelineRecord`]s sorted newest first, and
//! organizes that feed by calendar month for display. Each source kind has
//! its own projection function; the feed is their concatenation, sorted.

use chrono::{DateTime, Datelike, FixedOffset, Month};
use tracing::{debug, info};

use crate::domain::commands::timeline::{TimelineQuery, TimelineResult};
use crate::domain::models::records::{
    DoctorVisit, GrowthEntry, MedicalHistory, MedicalReport, Milestone, Vaccine,
};
use crate::domain::models::timeline::{TimelineFilter, TimelineMonth, TimelineRecord};
use shared::{RecordType, TimelineStats};

#[derive(Clone, Default)]
pub struct TimelineService;

impl TimelineService {
    pub fn new() -> Self {
        Self
    }

    /// Build the unified feed, most recent record first.
    /// Records compare as instants, so offsets are taken into account.
    /// Records at the same instant keep source order: vaccines, growth,
    /// milestones, visits, reports.
    pub fn build_timeline(&self, history: &MedicalHistory) -> Vec<TimelineRecord> {
        let mut records: Vec<TimelineRecord> = vaccine_records(&history.vaccines)
            .chain(growth_records(&history.growth_entries))
            .chain(milestone_records(&history.milestones))
            .chain(visit_records(&history.doctor_visits))
            .chain(report_records(&history.medical_reports))
            .collect();

        // sort_by is stable
        records.sort_by(|a, b| b.date.cmp(&a.date));

        debug!("Built timeline with {} records", records.len());
        records
    }

    /// Filtered, month-grouped view of the timeline with stats over everything
    pub fn query(&self, history: &MedicalHistory, query: TimelineQuery) -> TimelineResult {
        let all_records = self.build_timeline(history);
        let records = self.filter_timeline(&all_records, query.filter);
        let months = self.group_by_month(&records);
        let stats = self.stats_for(history, all_records.len());

        info!(
            "Timeline query filter={} returned {} of {} records in {} months",
            query.filter.as_str(),
            records.len(),
            all_records.len(),
            months.len()
        );

        TimelineResult {
            filter: query.filter,
            records,
            months,
            stats,
        }
    }

    /// Keep only records matching the filter, preserving order
    pub fn filter_timeline(
        &self,
        records: &[TimelineRecord],
        filter: TimelineFilter,
    ) -> Vec<TimelineRecord> {
        records.iter().filter(|r| filter.matches(r)).cloned().collect()
    }

    /// Partition an already sorted feed into calendar months, keeping its order.
    ///
    /// The month is the one on the record's own wall clock, so a visit at
    /// 00:30+02:00 on March 1 stays in March even when it sorts below a
    /// February record from another offset. Each month appears once, most
    /// recent month first.
    pub fn group_by_month(&self, records: &[TimelineRecord]) -> Vec<TimelineMonth> {
        let mut months: Vec<TimelineMonth> = Vec::new();

        for record in records {
            let (year, month) = (record.date.year(), record.date.month());
            match months
                .iter_mut()
                .find(|m| m.year == year && m.month == month)
            {
                Some(existing) => existing.records.push(record.clone()),
                None => months.push(TimelineMonth {
                    year,
                    month,
                    records: vec![record.clone()],
                }),
            }
        }

        months.sort_by(|a, b| (b.year, b.month).cmp(&(a.year, a.month)));
        months
    }

    /// Per-kind counts. `total` is the number of records the feed contains,
    /// which excludes vaccines and milestones that have no completion date.
    pub fn compute_stats(&self, history: &MedicalHistory) -> TimelineStats {
        self.stats_for(history, self.build_timeline(history).len())
    }

    fn stats_for(&self, history: &MedicalHistory, timeline_len: usize) -> TimelineStats {
        TimelineStats {
            vaccines: history.vaccines.iter().filter(|v| v.is_completed()).count(),
            growth: history.growth_entries.len(),
            milestones: history.milestones.iter().filter(|m| m.completed).count(),
            visits: history.doctor_visits.len(),
            reports: history.medical_reports.len(),
            total: timeline_len,
        }
    }

    /// Display label for a month group, e.g. "March 2024"
    pub fn month_label(&self, year: i32, month: u32) -> String {
        let name = u8::try_from(month)
            .ok()
            .and_then(|m| Month::try_from(m).ok());
        match name {
            Some(name) => format!("{} {}", name.name(), year),
            None => format!("{}-{:02}", year, month),
        }
    }
}

fn record(
    record_type: RecordType,
    source_id: &str,
    date: DateTime<FixedOffset>,
    title: String,
    detail: String,
) -> TimelineRecord {
    TimelineRecord {
        id: TimelineRecord::generate_id(record_type, source_id),
        date,
        record_type,
        title,
        detail,
        attachment_url: None,
        additional_info: None,
    }
}

fn vaccine_records(vaccines: &[Vaccine]) -> impl Iterator<Item = TimelineRecord> + '_ {
    vaccines
        .iter()
        .filter(|v| v.is_completed())
        .filter_map(|v| {
            let completed_date = v.completed_date?;
            Some(TimelineRecord {
                attachment_url: v.proof_url.clone(),
                ..record(
                    RecordType::Vaccine,
                    &v.id,
                    completed_date,
                    v.name.clone(),
                    format!("{} vaccination completed", v.age_group),
                )
            })
        })
}

fn growth_records(entries: &[GrowthEntry]) -> impl Iterator<Item = TimelineRecord> + '_ {
    entries.iter().map(|entry| {
        let title = format!(
            "{}: {} {}",
            entry.measurement.label(),
            entry.value,
            entry.measurement.unit()
        );
        let detail = match entry.percentile {
            Some(percentile) => format!("{}th percentile", percentile),
            None => "Measurement recorded".to_string(),
        };
        record(RecordType::Growth, &entry.id, entry.recorded_at, title, detail)
    })
}

fn milestone_records(milestones: &[Milestone]) -> impl Iterator<Item = TimelineRecord> + '_ {
    milestones
        .iter()
        .filter(|m| m.completed)
        .filter_map(|m| {
            let completed_at = m.completed_at?;
            let detail = m
                .description
                .clone()
                .unwrap_or_else(|| format!("{} milestone achieved", m.age_group));
            Some(record(RecordType::Milestone, &m.id, completed_at, m.title.clone(), detail))
        })
}

fn visit_records(visits: &[DoctorVisit]) -> impl Iterator<Item = TimelineRecord> + '_ {
    visits.iter().map(|visit| {
        let detail = match &visit.doctor_name {
            Some(name) => format!("Dr. {}", name),
            None => "Doctor visit".to_string(),
        };
        TimelineRecord {
            additional_info: visit.clinic_name.clone(),
            ..record(RecordType::Visit, &visit.id, visit.visit_date, visit.reason.clone(), detail)
        }
    })
}

fn report_records(reports: &[MedicalReport]) -> impl Iterator<Item = TimelineRecord> + '_ {
    reports.iter().map(|report| TimelineRecord {
        attachment_url: report.file_url.clone(),
        additional_info: report.notes.clone(),
        ..record(
            RecordType::Report,
            &report.id,
            report.report_date,
            report.title.clone(),
            report.report_type.label().to_string(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{GrowthType, ReportType, VaccineStatus};

    fn at(date: &str) -> DateTime<FixedOffset> {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
            .fixed_offset()
    }

    fn at_rfc3339(timestamp: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(timestamp).unwrap()
    }

    fn create_test_vaccine(id: &str, status: VaccineStatus, completed: Option<&str>) -> Vaccine {
        Vaccine {
            id: id.to_string(),
            name: "DTaP".to_string(),
            age_group: "2 months".to_string(),
            status,
            due_date: None,
            completed_date: completed.map(at),
            proof_url: None,
        }
    }

    fn create_test_growth(
        id: &str,
        measurement: GrowthType,
        value: f64,
        date: &str,
    ) -> GrowthEntry {
        GrowthEntry {
            id: id.to_string(),
            measurement,
            value,
            percentile: None,
            recorded_at: at(date),
        }
    }

    fn create_test_visit(id: &str, date: &str) -> DoctorVisit {
        DoctorVisit {
            id: id.to_string(),
            visit_date: at(date),
            reason: "Well-baby checkup".to_string(),
            doctor_name: None,
            clinic_name: None,
            notes: None,
        }
    }

    fn create_test_report(id: &str, report_type: ReportType, date: &str) -> MedicalReport {
        MedicalReport {
            id: id.to_string(),
            report_date: at(date),
            title: "Blood work".to_string(),
            report_type,
            notes: None,
            file_url: None,
        }
    }

    fn create_test_milestone(id: &str, completed_at: Option<&str>) -> Milestone {
        Milestone {
            id: id.to_string(),
            title: "First smile".to_string(),
            description: None,
            age_group: "0-3 months".to_string(),
            completed: completed_at.is_some(),
            completed_at: completed_at.map(at),
        }
    }

    fn sample_history() -> MedicalHistory {
        MedicalHistory {
            vaccines: vec![
                create_test_vaccine("v1", VaccineStatus::Completed, Some("2024-01-10")),
                create_test_vaccine("v2", VaccineStatus::Pending, None),
            ],
            growth_entries: vec![create_test_growth("g1", GrowthType::Weight, 5.4, "2024-03-01")],
            milestones: vec![create_test_milestone("m1", Some("2024-02-20"))],
            doctor_visits: vec![create_test_visit("d1", "2024-02-15")],
            medical_reports: vec![create_test_report("r1", ReportType::LabResult, "2024-01-10")],
        }
    }

    #[test]
    fn test_timeline_sorted_newest_first() {
        let service = TimelineService::new();
        let history = MedicalHistory {
            vaccines: vec![create_test_vaccine("v1", VaccineStatus::Completed, Some("2024-01-10"))],
            growth_entries: vec![create_test_growth("g1", GrowthType::Weight, 5.4, "2024-03-01")],
            doctor_visits: vec![create_test_visit("d1", "2024-02-15")],
            ..Default::default()
        };

        let timeline = service.build_timeline(&history);

        let ids: Vec<&str> = timeline.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["growth::g1", "visit::d1", "vaccine::v1"]);
    }

    #[test]
    fn test_ties_keep_source_order() {
        let service = TimelineService::new();

        let timeline = service.build_timeline(&sample_history());

        // vaccine v1 and report r1 share 2024-01-10
        let tail: Vec<&str> = timeline[3..].iter().map(|r| r.id.as_str()).collect();
        assert_eq!(tail, vec!["vaccine::v1", "report::r1"]);
    }

    #[test]
    fn test_vaccines_need_completion_date() {
        let service = TimelineService::new();
        let history = MedicalHistory {
            vaccines: vec![
                create_test_vaccine("done", VaccineStatus::Completed, Some("2024-01-10")),
                create_test_vaccine("no_date", VaccineStatus::Completed, None),
                create_test_vaccine(
                    "pending_with_date",
                    VaccineStatus::Pending,
                    Some("2024-01-12"),
                ),
            ],
            ..Default::default()
        };

        let timeline = service.build_timeline(&history);

        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].title, "DTaP");
        assert_eq!(timeline[0].detail, "2 months vaccination completed");
        assert!(!timeline[0].has_attachment());
    }

    #[test]
    fn test_vaccine_proof_is_attachment() {
        let service = TimelineService::new();
        let mut vaccine = create_test_vaccine("v1", VaccineStatus::Completed, Some("2024-01-10"));
        vaccine.proof_url = Some("https://files.example/proof.jpg".to_string());
        let history = MedicalHistory {
            vaccines: vec![vaccine],
            ..Default::default()
        };

        let timeline = service.build_timeline(&history);

        assert!(timeline[0].has_attachment());
        assert_eq!(
            timeline[0].attachment_url.as_deref(),
            Some("https://files.example/proof.jpg")
        );
    }

    #[test]
    fn test_growth_titles() {
        let service = TimelineService::new();
        let mut with_percentile = create_test_growth("g2", GrowthType::Height, 61.0, "2024-02-01");
        with_percentile.percentile = Some(75.0);
        let history = MedicalHistory {
            growth_entries: vec![
                create_test_growth("g1", GrowthType::Weight, 5.4, "2024-03-01"),
                with_percentile,
                create_test_growth("g3", GrowthType::HeadCircumference, 40.25, "2024-01-01"),
            ],
            ..Default::default()
        };

        let timeline = service.build_timeline(&history);

        assert_eq!(timeline[0].title, "Weight: 5.4 kg");
        assert_eq!(timeline[0].detail, "Measurement recorded");
        assert_eq!(timeline[1].title, "Height: 61 cm");
        assert_eq!(timeline[1].detail, "75th percentile");
        assert_eq!(timeline[2].title, "Head Circumference: 40.25 cm");
    }

    #[test]
    fn test_milestone_detail_falls_back_to_age_group() {
        let service = TimelineService::new();
        let mut described = create_test_milestone("m2", Some("2024-02-01"));
        described.description = Some("Smiled at grandma".to_string());
        let mut completed_without_date = create_test_milestone("m3", None);
        completed_without_date.completed = true;
        let history = MedicalHistory {
            milestones: vec![
                create_test_milestone("m1", Some("2024-03-01")),
                described,
                completed_without_date,
                create_test_milestone("m4", None),
            ],
            ..Default::default()
        };

        let timeline = service.build_timeline(&history);

        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].detail, "0-3 months milestone achieved");
        assert_eq!(timeline[1].detail, "Smiled at grandma");
    }

    #[test]
    fn test_visit_detail_and_clinic() {
        let service = TimelineService::new();
        let mut visit = create_test_visit("d2", "2024-02-01");
        visit.doctor_name = Some("Patel".to_string());
        visit.clinic_name = Some("Sunrise Pediatrics".to_string());
        let history = MedicalHistory {
            doctor_visits: vec![visit, create_test_visit("d1", "2024-01-01")],
            ..Default::default()
        };

        let timeline = service.build_timeline(&history);

        assert_eq!(timeline[0].title, "Well-baby checkup");
        assert_eq!(timeline[0].detail, "Dr. Patel");
        assert_eq!(timeline[0].additional_info.as_deref(), Some("Sunrise Pediatrics"));
        assert_eq!(timeline[1].detail, "Doctor visit");
        assert_eq!(timeline[1].additional_info, None);
    }

    #[test]
    fn test_report_label_attachment_and_notes() {
        let service = TimelineService::new();
        let mut report = create_test_report("r1", ReportType::DischargeSummary, "2024-01-03");
        report.file_url = Some("https://files.example/discharge.pdf".to_string());
        report.notes = Some("Healthy delivery".to_string());
        let history = MedicalHistory {
            medical_reports: vec![
                report,
                create_test_report("r2", ReportType::Other, "2024-01-02"),
            ],
            ..Default::default()
        };

        let timeline = service.build_timeline(&history);

        assert_eq!(timeline[0].detail, "Discharge Summary");
        assert!(timeline[0].has_attachment());
        assert_eq!(timeline[0].additional_info.as_deref(), Some("Healthy delivery"));
        assert_eq!(timeline[1].detail, "Other");
        assert!(!timeline[1].has_attachment());
    }

    #[test]
    fn test_filter_timeline() {
        let service = TimelineService::new();
        let mut history = sample_history();
        history
            .vaccines
            .push(create_test_vaccine("v3", VaccineStatus::Completed, Some("2024-02-28")));
        let timeline = service.build_timeline(&history);

        let vaccines =
            service.filter_timeline(&timeline, TimelineFilter::Only(RecordType::Vaccine));
        let ids: Vec<&str> = vaccines.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["vaccine::v3", "vaccine::v1"]);

        assert_eq!(service.filter_timeline(&timeline, TimelineFilter::All), timeline);
        assert!(service
            .filter_timeline(&timeline, TimelineFilter::Only(RecordType::Report))
            .iter()
            .all(|r| r.record_type == RecordType::Report));
    }

    #[test]
    fn test_group_by_month() {
        let service = TimelineService::new();
        let timeline = service.build_timeline(&sample_history());

        let months = service.group_by_month(&timeline);

        let keys: Vec<(i32, u32, usize)> = months
            .iter()
            .map(|m| (m.year, m.month, m.records.len()))
            .collect();
        assert_eq!(keys, vec![(2024, 3, 1), (2024, 2, 2), (2024, 1, 2)]);
        assert_eq!(months[1].records[0].id, "milestone::m1");
        assert_eq!(months[1].records[1].id, "visit::d1");
    }

    #[test]
    fn test_group_by_month_separates_years() {
        let service = TimelineService::new();
        let history = MedicalHistory {
            doctor_visits: vec![
                create_test_visit("a", "2024-01-05"),
                create_test_visit("b", "2023-01-20"),
            ],
            ..Default::default()
        };

        let months = service.group_by_month(&service.build_timeline(&history));

        assert_eq!(months.len(), 2);
        assert_eq!(service.month_label(months[0].year, months[0].month), "January 2024");
        assert_eq!(service.month_label(months[1].year, months[1].month), "January 2023");
    }

    #[test]
    fn test_empty_inputs() {
        let service = TimelineService::new();
        let history = MedicalHistory::default();

        assert!(service.build_timeline(&history).is_empty());
        assert!(service.group_by_month(&[]).is_empty());
        assert_eq!(service.compute_stats(&history), TimelineStats::default());
    }

    #[test]
    fn test_stats_total_matches_timeline() {
        let service = TimelineService::new();
        let mut history = sample_history();
        history
            .vaccines
            .push(create_test_vaccine("undated", VaccineStatus::Completed, None));

        let stats = service.compute_stats(&history);

        assert_eq!(stats.vaccines, 2);
        assert_eq!(stats.growth, 1);
        assert_eq!(stats.milestones, 1);
        assert_eq!(stats.visits, 1);
        assert_eq!(stats.reports, 1);
        assert_eq!(stats.total, service.build_timeline(&history).len());
        assert_eq!(stats.total, 5);
    }

    #[test]
    fn test_query_filters_records_but_not_stats() {
        let service = TimelineService::new();

        let result = service.query(
            &sample_history(),
            TimelineQuery {
                filter: TimelineFilter::Only(RecordType::Visit),
            },
        );

        assert_eq!(result.records.len(), 1);
        assert_eq!(result.months.len(), 1);
        assert_eq!(result.months[0].month, 2);
        assert_eq!(result.stats.total, 5);
    }

    #[test]
    fn test_month_label() {
        let service = TimelineService::new();

        assert_eq!(service.month_label(2024, 1), "January 2024");
        assert_eq!(service.month_label(2023, 12), "December 2023");
        assert_eq!(service.month_label(2024, 13), "2024-13");
    }

    #[test]
    fn test_mixed_offsets_sort_by_instant() {
        let service = TimelineService::new();
        let mut visit = create_test_visit("v", "2024-03-01");
        // 2024-02-29 22:30 UTC
        visit.visit_date = at_rfc3339("2024-03-01T00:30:00+02:00");
        let mut growth = create_test_growth("g", GrowthType::Weight, 5.0, "2024-02-29");
        growth.recorded_at = at_rfc3339("2024-02-29T23:00:00Z");
        let history = MedicalHistory {
            growth_entries: vec![growth],
            doctor_visits: vec![visit],
            ..Default::default()
        };

        let timeline = service.build_timeline(&history);

        let ids: Vec<&str> = timeline.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["growth::g", "visit::v"]);
    }

    #[test]
    fn test_group_by_month_uses_local_month_once() {
        let service = TimelineService::new();
        let mut late_feb = create_test_growth("g", GrowthType::Weight, 5.0, "2024-02-29");
        late_feb.recorded_at = at_rfc3339("2024-02-29T23:00:00Z");
        let mut early_march = create_test_visit("v", "2024-03-01");
        early_march.visit_date = at_rfc3339("2024-03-01T00:30:00+02:00");
        let history = MedicalHistory {
            growth_entries: vec![
                late_feb,
                create_test_growth("g2", GrowthType::Height, 60.0, "2024-02-10"),
            ],
            doctor_visits: vec![early_march, create_test_visit("v2", "2024-03-05")],
            ..Default::default()
        };

        let months = service.group_by_month(&service.build_timeline(&history));

        let keys: Vec<(u32, Vec<&str>)> = months
            .iter()
            .map(|m| (m.month, m.records.iter().map(|r| r.id.as_str()).collect()))
            .collect();
        assert_eq!(
            keys,
            vec![
                (3, vec!["visit::v2", "visit::v"]),
                (2, vec!["growth::g", "growth::g2"]),
            ]
        );
    }
}
