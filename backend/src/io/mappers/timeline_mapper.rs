//! backend/src/io/mappers/timeline_mapper.rs

use shared::{TimelineMonthGroup, TimelineResponse};

use super::format_timestamp;
use crate::domain::commands::timeline::TimelineResult;
use crate::domain::models::timeline::{TimelineMonth, TimelineRecord};
use crate::domain::timeline_service::TimelineService;

/// Mapper from timeline domain results to the shared response DTOs.
pub struct TimelineMapper;

impl TimelineMapper {
    pub fn record_to_dto(domain: TimelineRecord) -> shared::TimelineRecord {
        shared::TimelineRecord {
            has_attachment: domain.has_attachment(),
            id: domain.id,
            date: format_timestamp(domain.date),
            record_type: domain.record_type,
            title: domain.title,
            detail: domain.detail,
            attachment_url: domain.attachment_url,
            additional_info: domain.additional_info,
        }
    }

    pub fn month_to_dto(service: &TimelineService, domain: TimelineMonth) -> TimelineMonthGroup {
        TimelineMonthGroup {
            year: domain.year,
            month: domain.month,
            label: service.month_label(domain.year, domain.month),
            records: domain.records.into_iter().map(Self::record_to_dto).collect(),
        }
    }

    pub fn to_response_dto(service: &TimelineService, result: TimelineResult) -> TimelineResponse {
        TimelineResponse {
            filter: result.filter.as_str().to_string(),
            records: result.records.into_iter().map(Self::record_to_dto).collect(),
            groups: result
                .months
                .into_iter()
                .map(|month| Self::month_to_dto(service, month))
                .collect(),
            stats: result.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::mappers::parse_timestamp;
    use shared::RecordType;

    #[test]
    fn test_record_to_dto() {
        let record = TimelineRecord {
            id: "report::r1".to_string(),
            date: parse_timestamp("2024-03-05T10:00:00").unwrap(),
            record_type: RecordType::Report,
            title: "Ultrasound".to_string(),
            detail: "Scan / Imaging".to_string(),
            attachment_url: Some("https://files.example/scan.png".to_string()),
            additional_info: None,
        };

        let dto = TimelineMapper::record_to_dto(record);

        assert_eq!(dto.date, "2024-03-05T10:00:00");
        assert!(dto.has_attachment);
        assert_eq!(dto.record_type, RecordType::Report);
    }

    #[test]
    fn test_month_label() {
        let service = TimelineService::new();
        let month = TimelineMonth {
            year: 2024,
            month: 3,
            records: Vec::new(),
        };

        let dto = TimelineMapper::month_to_dto(&service, month);
        assert_eq!(dto.label, "March 2024");
    }
}
