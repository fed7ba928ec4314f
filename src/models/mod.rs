// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod chat;
pub mod document;
pub mod location;
pub mod recommendation;

pub use chat::*;
pub use document::*;
pub use location::*;
pub use recommendation::*;
