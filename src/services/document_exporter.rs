// src/services/document_exporter.rs
// DOCUMENTATION: Trip itinerary PDF export
// PURPOSE: Ask the backend to render a PDF, then download it into a file sink

use crate::errors::ClientError;
use crate::models::GeneratedDocument;
use crate::ports::FileSink;
use crate::services::ApiClient;
use reqwest::Method;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

/// PDF exporter for one trip
/// DOCUMENTATION: No retry; every failure reaches the caller
pub struct DocumentExporter {
    trip_id: i64,
    api: ApiClient,
    sink: Arc<dyn FileSink>,
}

impl DocumentExporter {
    pub fn new(trip_id: i64, api: ApiClient, sink: Arc<dyn FileSink>) -> Self {
        Self { trip_id, api, sink }
    }

    /// Render the itinerary server-side
    /// DOCUMENTATION: Returns the filename to pass to download_pdf
    pub async fn generate_pdf(&self) -> Result<String, ClientError> {
        let path = format!("/api/trips/{}/generate-pdf", self.trip_id);
        let generated: GeneratedDocument = self
            .api
            .send_json::<Value, _>(Method::POST, &path, None, "Failed to generate PDF")
            .await?;

        log::info!("Trip {}: generated {}", self.trip_id, generated.filename);
        Ok(generated.filename)
    }

    /// Fetch a generated document and save it under `filename`
    /// DOCUMENTATION: The name travels as one percent-encoded path segment
    pub async fn download_pdf(&self, filename: &str) -> Result<PathBuf, ClientError> {
        let path = format!(
            "/api/trips/{}/download-pdf/{}",
            self.trip_id,
            urlencoding::encode(filename)
        );
        let bytes = self.api.get_bytes(&path, "Failed to download PDF").await?;

        log::debug!("Trip {}: downloaded {} bytes", self.trip_id, bytes.len());
        self.sink.save(filename, &bytes).await
    }

    /// Generate then download in one go
    pub async fn export_pdf(&self) -> Result<PathBuf, ClientError> {
        let filename = self.generate_pdf().await?;
        self.download_pdf(&filename).await
    }
}
