// src/models/document.rs
// DOCUMENTATION: Data structures for trip document export

use serde::{Deserialize, Serialize};

/// Response of POST /trips/{id}/generate-pdf
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratedDocument {
    /// Server-side name to pass to the download endpoint
    pub filename: String,
    #[serde(default)]
    pub message: Option<String>,
}
