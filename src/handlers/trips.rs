// src/handlers/trips.rs
// DOCUMENTATION: Trip-level commands

use super::{BOLD, GREEN, RESET};
use std::sync::Arc;
use tripbox_client::ports::DirectorySink;
use tripbox_client::{ApiClient, Config, DocumentExporter};

/// `tripbox export-pdf <trip_id>`
pub async fn export_pdf(config: &Config, trip_id: i64) -> anyhow::Result<()> {
    let api = ApiClient::from_config(config)?;
    let sink = Arc::new(DirectorySink::new(config.download_dir.clone()));
    let exporter = DocumentExporter::new(trip_id, api, sink);

    println!("{}Generating itinerary for trip {}...{}", BOLD, trip_id, RESET);
    let filename = exporter.generate_pdf().await?;
    let saved = exporter.download_pdf(&filename).await?;

    println!("{}✓ Saved {}{}", GREEN, saved.display(), RESET);
    Ok(())
}
