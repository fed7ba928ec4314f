// src/config/mod.rs
// DOCUMENTATION: Configuration module organization
// PURPOSE: Re-export configuration components

pub mod auth;
pub mod env;

pub use auth::AuthContext;
pub use env::{resolve_api_base, Config, LOCAL_API_BASE, PRODUCTION_API_BASE};
