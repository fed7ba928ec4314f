// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod api_client;
pub mod background;
pub mod chat_client;
pub mod document_exporter;
pub mod location_tracker;
pub mod marker_set;
pub mod recommendation_client;

pub use api_client::*;
pub use background::*;
pub use chat_client::*;
pub use document_exporter::*;
pub use location_tracker::*;
pub use marker_set::*;
pub use recommendation_client::*;
