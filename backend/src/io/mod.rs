//! # IO Module
//!
//! Interface layer between the UI and the domain: request handlers in
//! [`api`] and DTO conversions in [`mappers`].

pub mod api;
pub mod mappers;
