//! backend/src/io/mappers/milestone_mapper.rs

use anyhow::{Context, Result};
use std::collections::HashMap;

use super::parse_instant;
use crate::domain::models::milestone::{Guidance, MilestoneDefinition, MilestoneProgress};

/// Mapper between milestone DTOs and domain models.
pub struct MilestoneMapper;

impl MilestoneMapper {
    pub fn definition_to_dto(domain: &MilestoneDefinition) -> shared::MilestoneDefinition {
        shared::MilestoneDefinition {
            id: domain.id.clone(),
            name: domain.name.clone(),
            description: domain.description.clone(),
            typical_week: domain.typical_week,
            late_start_week: domain.late_start_week,
            red_flag_week: domain.red_flag_week,
            early_badge_name: domain.early_badge_name.clone(),
            early_badge_copy: domain.early_badge_copy.clone(),
            normal_badge_name: domain.normal_badge_name.clone(),
            normal_badge_copy: domain.normal_badge_copy.clone(),
            late_parent_copy: domain.late_parent_copy.clone(),
            red_flag_title: domain.red_flag_title.clone(),
            red_flag_copy: domain.red_flag_copy.clone(),
        }
    }

    pub fn progress_to_domain(dto: &shared::MilestoneProgress) -> Result<MilestoneProgress> {
        let completed_at = dto
            .completed_at
            .as_deref()
            .map(parse_instant)
            .transpose()
            .with_context(|| {
                format!("Failed to parse completedAt of milestone progress {}", dto.milestone_id)
            })?;

        Ok(MilestoneProgress {
            milestone_id: dto.milestone_id.clone(),
            completed: dto.completed,
            completed_week: dto.completed_week,
            timing_status: dto.timing_status,
            badge_awarded: dto.badge_awarded,
            badge_name: dto.badge_name.clone(),
            completed_at,
        })
    }

    pub fn progress_to_dto(domain: &MilestoneProgress) -> shared::MilestoneProgress {
        shared::MilestoneProgress {
            milestone_id: domain.milestone_id.clone(),
            completed: domain.completed,
            completed_week: domain.completed_week,
            timing_status: domain.timing_status,
            badge_awarded: domain.badge_awarded,
            badge_name: domain.badge_name.clone(),
            completed_at: domain.completed_at.map(|at| at.to_rfc3339()),
        }
    }

    /// Index progress records by milestone id. Later records win on duplicates.
    pub fn progress_by_id(
        dtos: &[shared::MilestoneProgress],
    ) -> Result<HashMap<String, MilestoneProgress>> {
        dtos.iter()
            .map(|dto| Self::progress_to_domain(dto).map(|p| (p.milestone_id.clone(), p)))
            .collect()
    }

    pub fn guidance_to_dto(domain: Guidance) -> shared::MilestoneGuidance {
        shared::MilestoneGuidance {
            title: domain.title,
            message: domain.message,
            show_doctor_cta: domain.show_doctor_cta,
        }
    }
}
