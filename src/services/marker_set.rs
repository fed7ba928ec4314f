// src/services/marker_set.rs
// DOCUMENTATION: Member-to-pin bookkeeping for the location tracker

use crate::errors::ClientError;
use crate::models::{MarkerKey, Position};
use crate::ports::{MapView, MarkerHandle, MarkerIcon, MarkerOptions, PEER_MARKER_ICON};
use std::collections::HashMap;

/// Pins currently shown, one per member
/// DOCUMENTATION: Entries are created on first sighting and moved in place
/// afterwards; nothing is ever removed.
#[derive(Debug, Default)]
pub struct MarkerSet {
    markers: HashMap<MarkerKey, MarkerHandle>,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or move the pin for `key`
    /// DOCUMENTATION: The self pin uses the default icon and recentres the
    /// map; peer pins use the blue dot and leave the camera alone.
    pub fn upsert(
        &mut self,
        map: &dyn MapView,
        key: MarkerKey,
        position: &Position,
    ) -> Result<MarkerHandle, ClientError> {
        let point = position.to_point();

        let handle = match self.markers.get(&key) {
            Some(handle) => {
                map.move_marker(*handle, point)?;
                *handle
            }
            None => {
                let icon = if key.is_self() {
                    MarkerIcon::Default
                } else {
                    MarkerIcon::Url(PEER_MARKER_ICON.to_string())
                };
                let handle = map.add_marker(MarkerOptions {
                    position: point,
                    title: key.title(),
                    icon,
                })?;
                log::debug!("Created marker for {} ({:?})", key, handle);
                self.markers.insert(key, handle);
                handle
            }
        };

        if key.is_self() {
            map.set_center(point)?;
        }

        Ok(handle)
    }

    pub fn get(&self, key: &MarkerKey) -> Option<MarkerHandle> {
        self.markers.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
