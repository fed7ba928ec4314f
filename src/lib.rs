// src/lib.rs
// DOCUMENTATION: Client library for the trip-planning backend
// PURPOSE: Live location, recommendations, group chat and PDF export wrappers

pub mod config;
pub mod errors;
pub mod models;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{AuthContext, Config};
pub use errors::{ClientError, ErrorObserver};
pub use services::{
    ApiClient, ChatClient, ChatSettings, DocumentExporter, LocationTracker, RecommendationClient,
    TrackerSettings,
};
