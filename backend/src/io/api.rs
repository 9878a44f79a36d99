//! Request handlers exposed to the UI.
//!
//! Each handler takes the already-loaded [`BabyCareSnapshot`] plus a request
//! DTO, maps them to domain types, calls the domain services, and maps the
//! result back. Errors are flattened to a display string at this edge.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, Utc};
use tracing::{info, warn};

use crate::domain::commands::milestones::RecordMilestoneCommand;
use crate::domain::commands::timeline::TimelineQuery;
use crate::domain::milestone_service::RecordObservation;
use crate::domain::models::milestone::{MilestoneDefinition, RecordMilestoneError};
use crate::domain::models::timeline::TimelineFilter;
use crate::io::mappers::baby_mapper::BabyMapper;
use crate::io::mappers::milestone_mapper::MilestoneMapper;
use crate::io::mappers::record_mapper::RecordMapper;
use crate::io::mappers::timeline_mapper::TimelineMapper;
use crate::io::mappers::{format_date, parse_date};
use crate::AppState;
use shared::{
    AgeRequest, AgeResponse, BabyCareSnapshot, GrowthSummaryResponse, MilestoneBoardEntry,
    MilestoneBoardRequest, MilestoneBoardResponse, RecordMilestoneRequest,
    RecordMilestoneResponse, TimelineRequest, TimelineResponse, VaccineDue,
    VaccineScheduleRequest, VaccineScheduleResponse,
};

pub fn get_age(
    app_state: &AppState,
    snapshot: &BabyCareSnapshot,
    request: &AgeRequest,
) -> Result<AgeResponse, String> {
    let baby = BabyMapper::to_domain(&snapshot.baby).map_err(to_message)?;
    let today = resolve_day(request.as_of.as_deref()).map_err(to_message)?;

    let age = app_state.age_service.compute_age(baby.dob, today);
    info!("Baby {} is {} on {}", baby.id, age.display, today);

    Ok(BabyMapper::to_age_response(&baby, age))
}

pub fn get_timeline(
    app_state: &AppState,
    snapshot: &BabyCareSnapshot,
    request: &TimelineRequest,
) -> Result<TimelineResponse, String> {
    let filter = match request.filter.as_deref() {
        Some(kind) => kind.parse::<TimelineFilter>().map_err(|e| e.to_string())?,
        None => TimelineFilter::All,
    };
    let history = RecordMapper::history_to_domain(snapshot)
        .context("Failed to load medical history")
        .map_err(to_message)?;

    let result = app_state.timeline_service.query(&history, TimelineQuery { filter });

    Ok(TimelineMapper::to_response_dto(&app_state.timeline_service, result))
}

pub fn get_milestone_board(
    app_state: &AppState,
    snapshot: &BabyCareSnapshot,
    request: &MilestoneBoardRequest,
) -> Result<MilestoneBoardResponse, String> {
    build_milestone_board(app_state, snapshot, request).map_err(to_message)
}

pub fn record_milestone(
    app_state: &AppState,
    snapshot: &BabyCareSnapshot,
    request: &RecordMilestoneRequest,
) -> Result<RecordMilestoneResponse, String> {
    let command = RecordMilestoneCommand {
        milestone_id: request.milestone_id.clone(),
        observed_on: resolve_day(request.observed_on.as_deref()).map_err(to_message)?,
        recorded_at: Utc::now(),
    };
    apply_record_milestone(app_state, snapshot, command).map_err(to_message)
}

pub fn get_vaccine_schedule(
    app_state: &AppState,
    snapshot: &BabyCareSnapshot,
    request: &VaccineScheduleRequest,
) -> Result<VaccineScheduleResponse, String> {
    let today = resolve_day(request.as_of.as_deref()).map_err(to_message)?;
    let vaccines = snapshot
        .vaccines
        .iter()
        .map(RecordMapper::vaccine_to_domain)
        .collect::<Result<Vec<_>>>()
        .map_err(to_message)?;

    let pending = app_state
        .vaccine_service
        .pending_schedule(&vaccines, today)
        .into_iter()
        .map(|due| VaccineDue {
            vaccine_id: due.vaccine.id,
            name: due.vaccine.name,
            age_group: due.vaccine.age_group,
            due_date: format_date(due.due_date),
            days_until_due: due.days_until_due,
            status: due.status,
        })
        .collect();
    let (completed_count, total_count) = app_state.vaccine_service.completion_counts(&vaccines);

    Ok(VaccineScheduleResponse {
        pending,
        completed_count,
        total_count,
    })
}

pub fn get_growth_summary(
    app_state: &AppState,
    snapshot: &BabyCareSnapshot,
) -> Result<GrowthSummaryResponse, String> {
    let entries = snapshot
        .growth_entries
        .iter()
        .map(RecordMapper::growth_to_domain)
        .collect::<Result<Vec<_>>>()
        .map_err(to_message)?;

    let latest = app_state
        .growth_service
        .latest_by_type(&entries)
        .into_iter()
        .map(RecordMapper::growth_to_dto)
        .collect();

    Ok(GrowthSummaryResponse { latest })
}

fn build_milestone_board(
    app_state: &AppState,
    snapshot: &BabyCareSnapshot,
    request: &MilestoneBoardRequest,
) -> Result<MilestoneBoardResponse> {
    let baby = BabyMapper::to_domain(&snapshot.baby)?;
    let today = resolve_day(request.as_of.as_deref())?;
    let progress_by_id = MilestoneMapper::progress_by_id(&snapshot.milestone_progress)?;

    let current_age_weeks = app_state.age_service.compute_age_weeks(baby.dob, today);
    let buckets = app_state.milestone_service.bucket_by_urgency(
        app_state.milestone_catalog.definitions(),
        &progress_by_id,
        current_age_weeks,
    );

    let entry = |definition: &MilestoneDefinition| {
        let progress = progress_by_id.get(&definition.id);
        let completed = progress.map(|p| p.completed).unwrap_or(false);
        MilestoneBoardEntry {
            definition: MilestoneMapper::definition_to_dto(definition),
            progress: progress.map(MilestoneMapper::progress_to_dto),
            guidance: (!completed).then(|| {
                MilestoneMapper::guidance_to_dto(
                    app_state
                        .milestone_service
                        .not_seen_guidance(current_age_weeks, definition),
                )
            }),
        }
    };
    let entries = |bucket: &[&MilestoneDefinition]| {
        bucket.iter().map(|d| entry(*d)).collect::<Vec<_>>()
    };

    info!(
        "Milestone board for baby {} at week {}: {} late",
        baby.id,
        current_age_weeks,
        buckets.late.len()
    );

    Ok(MilestoneBoardResponse {
        baby_id: baby.id,
        current_age_weeks,
        now: entries(buckets.now.as_slice()),
        soon: entries(buckets.soon.as_slice()),
        watching: entries(buckets.watching.as_slice()),
        late: entries(buckets.late.as_slice()),
        done: entries(buckets.done.as_slice()),
    })
}

fn apply_record_milestone(
    app_state: &AppState,
    snapshot: &BabyCareSnapshot,
    command: RecordMilestoneCommand,
) -> Result<RecordMilestoneResponse> {
    let baby = BabyMapper::to_domain(&snapshot.baby)?;
    let definition = app_state
        .milestone_catalog
        .get(&command.milestone_id)
        .ok_or_else(|| RecordMilestoneError::UnknownMilestone(command.milestone_id.clone()))?;
    let progress_by_id = MilestoneMapper::progress_by_id(&snapshot.milestone_progress)?;

    if command.observed_on < baby.dob {
        warn!(
            "Milestone {} observed on {} before dob {}",
            definition.id, command.observed_on, baby.dob
        );
    }

    let (progress, badge) = app_state.milestone_service.record_observation(RecordObservation {
        definition,
        existing: progress_by_id.get(&definition.id),
        dob: baby.dob,
        observed_on: command.observed_on,
        recorded_at: command.recorded_at,
    })?;

    let success_message = match &badge {
        Some(badge) => format!("{} recorded. Badge earned: {}", definition.name, badge.name),
        None => format!("{} recorded", definition.name),
    };

    Ok(RecordMilestoneResponse {
        progress: MilestoneMapper::progress_to_dto(&progress),
        badge_copy: badge.and_then(|b| b.copy),
        success_message,
    })
}

/// The requested day, or the local calendar day when none is given
fn resolve_day(as_of: Option<&str>) -> Result<NaiveDate> {
    match as_of {
        Some(value) => parse_date(value).context("Failed to parse requested date"),
        None => Ok(Local::now().date_naive()),
    }
}

fn to_message(error: anyhow::Error) -> String {
    format!("{:#}", error)
}
