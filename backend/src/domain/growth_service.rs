//! Growth summary for the dashboard.

use crate::domain::models::records::GrowthEntry;
use shared::GrowthType;

#[derive(Clone, Default)]
pub struct GrowthService;

impl GrowthService {
    pub fn new() -> Self {
        Self
    }

    /// Most recent entry of each measurement type, in weight/height/head order.
    /// Types with no entries are skipped.
    pub fn latest_by_type<'a>(&self, entries: &'a [GrowthEntry]) -> Vec<&'a GrowthEntry> {
        GrowthType::ALL
            .iter()
            .filter_map(|measurement| {
                entries
                    .iter()
                    .filter(|e| e.measurement == *measurement)
                    .max_by_key(|e| e.recorded_at)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn create_test_entry(id: &str, measurement: GrowthType, date: &str) -> GrowthEntry {
        GrowthEntry {
            id: id.to_string(),
            measurement,
            value: 1.0,
            percentile: None,
            recorded_at: NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap()
                .and_utc()
                .fixed_offset(),
        }
    }

    #[test]
    fn test_latest_by_type() {
        let service = GrowthService::new();
        let entries = vec![
            create_test_entry("h1", GrowthType::Height, "2024-01-01"),
            create_test_entry("w1", GrowthType::Weight, "2024-01-01"),
            create_test_entry("w2", GrowthType::Weight, "2024-03-01"),
            create_test_entry("w0", GrowthType::Weight, "2023-12-01"),
        ];

        let latest = service.latest_by_type(&entries);

        let ids: Vec<&str> = latest.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["w2", "h1"]);
    }

    #[test]
    fn test_latest_by_type_empty() {
        assert!(GrowthService::new().latest_by_type(&[]).is_empty());
    }
}
