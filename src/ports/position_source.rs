// src/ports/position_source.rs
// DOCUMENTATION: Device location seam

use crate::models::{Position, WatchOptions};
use thiserror::Error;
use tokio::sync::mpsc;

/// Failure reported by the device for a single fix
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PositionError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Position unavailable")]
    Unavailable,

    #[error("Timed out waiting for a position")]
    Timeout,
}

pub type PositionUpdate = Result<Position, PositionError>;

/// Continuous position provider
/// DOCUMENTATION: A watch lives as long as its receiver; dropping the
/// receiver clears the watch and the source should stop sending.
pub trait PositionSource: Send + Sync {
    /// Whether this device can provide positions at all
    fn is_supported(&self) -> bool;

    fn watch(&self, options: WatchOptions) -> mpsc::UnboundedReceiver<PositionUpdate>;
}

/// Source for devices without a location capability
pub struct NoPositionSource;

impl PositionSource for NoPositionSource {
    fn is_supported(&self) -> bool {
        false
    }

    fn watch(&self, _options: WatchOptions) -> mpsc::UnboundedReceiver<PositionUpdate> {
        let (_tx, rx) = mpsc::unbounded_channel();
        rx
    }
}
