//! # BabyCare Backend
//!
//! Derived-data core of the BabyCare tracker.
//!
//! This crate serves as the orchestration layer that brings together:
//! - **Domain**: age, milestone timing and medical history timeline logic
//! - **IO**: request handlers and DTO mappers that expose the domain to a UI
//! - **Config**: YAML configuration and logging setup
//!
//! Fetching records from the remote APIs is the caller's job; handlers take
//! a [`shared::BabyCareSnapshot`] that has already been loaded.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (web app)
//!     ↓
//! IO Layer (handlers, mappers)
//!     ↓
//! Domain Layer (pure services)
//! ```

pub mod config;
pub mod domain;
pub mod io;

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::BackendConfig;
use crate::domain::{
    AgeService, GrowthService, MilestoneCatalog, MilestoneService, TimelineService, VaccineService,
};

pub use io::api::*;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub age_service: AgeService,
    pub milestone_service: MilestoneService,
    pub timeline_service: TimelineService,
    pub vaccine_service: VaccineService,
    pub growth_service: GrowthService,
    pub milestone_catalog: Arc<MilestoneCatalog>,
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &BackendConfig) -> Result<AppState> {
    info!("Loading milestone catalog");
    let milestone_catalog = Arc::new(config.milestone_catalog()?);

    info!("Setting up domain services");
    let age_service = AgeService::new();
    let milestone_service = MilestoneService::new(age_service.clone(), config.now_window_weeks);
    let timeline_service = TimelineService::new();
    let vaccine_service = VaccineService::new(config.vaccine_due_soon_days);
    let growth_service = GrowthService::new();

    info!(
        "Backend ready with {} milestone definitions",
        milestone_catalog.len()
    );

    Ok(AppState {
        age_service,
        milestone_service,
        timeline_service,
        vaccine_service,
        growth_service,
        milestone_catalog,
    })
}

/// Install the global tracing subscriber. `RUST_LOG` overrides `default_level`.
/// Calling this more than once is harmless.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
