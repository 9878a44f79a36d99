//! backend/src/io/mappers/record_mapper.rs

use anyhow::{Context, Result};
use shared::BabyCareSnapshot;

use super::{format_timestamp, parse_date, parse_timestamp};
use crate::domain::models::records::{
    DoctorVisit, GrowthEntry, MedicalHistory, MedicalReport, Milestone, Vaccine,
};

/// Mapper from the record DTOs served by the REST APIs to domain records.
/// Any unparsable date fails the whole mapping, naming the record and field.
/// Blank optional text is treated as absent.
pub struct RecordMapper;

impl RecordMapper {
    pub fn history_to_domain(snapshot: &BabyCareSnapshot) -> Result<MedicalHistory> {
        Ok(MedicalHistory {
            vaccines: collect(&snapshot.vaccines, Self::vaccine_to_domain)?,
            growth_entries: collect(&snapshot.growth_entries, Self::growth_to_domain)?,
            milestones: collect(&snapshot.milestones, Self::milestone_to_domain)?,
            doctor_visits: collect(&snapshot.doctor_visits, Self::visit_to_domain)?,
            medical_reports: collect(&snapshot.medical_reports, Self::report_to_domain)?,
        })
    }

    pub fn vaccine_to_domain(dto: &shared::Vaccine) -> Result<Vaccine> {
        let due_date = dto
            .due_date
            .as_deref()
            .map(parse_date)
            .transpose()
            .with_context(|| format!("Failed to parse dueDate of vaccine {}", dto.id))?;
        let completed_date = dto
            .completed_date
            .as_deref()
            .map(parse_timestamp)
            .transpose()
            .with_context(|| format!("Failed to parse completedDate of vaccine {}", dto.id))?;

        Ok(Vaccine {
            id: dto.id.clone(),
            name: dto.name.clone(),
            age_group: dto.age_group.clone(),
            status: dto.status,
            due_date,
            completed_date,
            proof_url: present(&dto.proof_url),
        })
    }

    pub fn growth_to_domain(dto: &shared::GrowthEntry) -> Result<GrowthEntry> {
        let recorded_at = parse_timestamp(&dto.recorded_at)
            .with_context(|| format!("Failed to parse recordedAt of growth entry {}", dto.id))?;

        Ok(GrowthEntry {
            id: dto.id.clone(),
            measurement: dto.entry_type,
            value: dto.value,
            percentile: dto.percentile,
            recorded_at,
        })
    }

    pub fn growth_to_dto(domain: &GrowthEntry) -> shared::GrowthEntry {
        shared::GrowthEntry {
            id: domain.id.clone(),
            entry_type: domain.measurement,
            value: domain.value,
            percentile: domain.percentile,
            recorded_at: format_timestamp(domain.recorded_at),
        }
    }

    pub fn milestone_to_domain(dto: &shared::Milestone) -> Result<Milestone> {
        let completed_at = dto
            .completed_at
            .as_deref()
            .map(parse_timestamp)
            .transpose()
            .with_context(|| format!("Failed to parse completedAt of milestone {}", dto.id))?;

        Ok(Milestone {
            id: dto.id.clone(),
            title: dto.title.clone(),
            description: present(&dto.description),
            age_group: dto.age_group.clone(),
            completed: dto.completed,
            completed_at,
        })
    }

    pub fn visit_to_domain(dto: &shared::DoctorVisit) -> Result<DoctorVisit> {
        let visit_date = parse_timestamp(&dto.visit_date)
            .with_context(|| format!("Failed to parse visitDate of doctor visit {}", dto.id))?;

        Ok(DoctorVisit {
            id: dto.id.clone(),
            visit_date,
            reason: dto.reason.clone(),
            doctor_name: present(&dto.doctor_name),
            clinic_name: present(&dto.clinic_name),
            notes: present(&dto.notes),
        })
    }

    pub fn report_to_domain(dto: &shared::MedicalReport) -> Result<MedicalReport> {
        let report_date = parse_timestamp(&dto.report_date)
            .with_context(|| format!("Failed to parse reportDate of medical report {}", dto.id))?;

        Ok(MedicalReport {
            id: dto.id.clone(),
            report_date,
            title: dto.title.clone(),
            report_type: dto.report_type,
            notes: present(&dto.notes),
            file_url: present(&dto.file_url),
        })
    }
}

fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn collect<D, T>(dtos: &[D], map: fn(&D) -> Result<T>) -> Result<Vec<T>> {
    dtos.iter().map(map).collect()
}
