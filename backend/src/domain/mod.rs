//! # Domain Module
//!
//! Contains the derived-data logic of the BabyCare tracker.
//!
//! Everything here is pure: services take already-fetched, already-parsed
//! records and a reference date, and return new values. Fetching, caching
//! and persistence belong to the callers.
//!
//! ## Module Organization
//!
//! - **age_service**: Age display string, elapsed months/days and age in weeks
//! - **milestone_service**: Timing classification, badges, urgency buckets and guidance
//! - **milestone_catalog**: Built-in and file-loaded milestone definitions
//! - **timeline_service**: Unified medical history feed, filtering and month grouping
//! - **vaccine_service**: Pending vaccine schedule for the dashboard
//! - **growth_service**: Latest growth measurements for the dashboard
//!
//! ## Business Rules
//!
//! - Age in weeks is the canonical unit for milestone timing
//! - A date of birth in the future is treated as age zero
//! - The timeline is always sorted newest first; month groups keep that order
//! - Timeline stats are computed over the unfiltered feed

pub mod age_service;
pub mod commands;
pub mod growth_service;
pub mod milestone_catalog;
pub mod milestone_service;
pub mod models;
pub mod timeline_service;
pub mod vaccine_service;

pub use age_service::*;
pub use growth_service::*;
pub use milestone_catalog::*;
pub use milestone_service::*;
pub use timeline_service::*;
pub use vaccine_service::*;
