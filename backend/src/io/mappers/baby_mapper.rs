//! backend/src/io/mappers/baby_mapper.rs

use anyhow::{Context, Result};
use shared::{AgeResponse, BabyProfile};

use super::parse_date;
use crate::domain::age_service::AgeBreakdown;
use crate::domain::models::baby::Baby;

/// Mapper to convert between the shared BabyProfile DTO and the domain Baby model.
pub struct BabyMapper;

impl BabyMapper {
    pub fn to_domain(dto: &BabyProfile) -> Result<Baby> {
        let dob = parse_date(&dto.dob)
            .with_context(|| format!("Failed to parse dob of baby {}", dto.id))?;

        Ok(Baby {
            id: dto.id.clone(),
            name: dto.name.clone(),
            dob,
            gender: dto.gender,
        })
    }

    pub fn to_age_response(baby: &Baby, age: AgeBreakdown) -> AgeResponse {
        AgeResponse {
            baby_id: baby.id.clone(),
            display: age.display,
            months: age.months,
            days: age.days,
            weeks: age.weeks,
        }
    }
}
