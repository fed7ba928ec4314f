// src/ports/map_view.rs
// DOCUMENTATION: Map SDK seam used by the location tracker

use crate::errors::ClientError;
use geo_types::Point;
use std::collections::HashMap;
use std::sync::Mutex;

/// Pin icon used for every peer marker
pub const PEER_MARKER_ICON: &str = "http://maps.google.com/mapfiles/ms/icons/blue-dot.png";

/// Zoom level of a freshly mounted map
pub const DEFAULT_MAP_ZOOM: u8 = 12;

/// Opaque reference to one pin owned by the map view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

/// How a pin is drawn
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerIcon {
    /// The SDK's standard pin
    Default,
    Url(String),
}

/// Everything needed to place a new pin
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerOptions {
    pub position: Point<f64>,
    pub title: String,
    pub icon: MarkerIcon,
}

/// Initial camera of a mounted map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapOptions {
    pub zoom: u8,
    pub center: Point<f64>,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_MAP_ZOOM,
            center: Point::new(0.0, 0.0),
        }
    }
}

/// A map view able to host markers
/// DOCUMENTATION: Calls are synchronous and expected to be cheap
pub trait MapView: Send + Sync {
    /// Bind the view to a container. Called once per tracker.
    fn mount(&self, container_id: &str, options: &MapOptions) -> Result<(), ClientError>;

    fn add_marker(&self, options: MarkerOptions) -> Result<MarkerHandle, ClientError>;

    fn move_marker(&self, handle: MarkerHandle, position: Point<f64>) -> Result<(), ClientError>;

    fn set_center(&self, center: Point<f64>) -> Result<(), ClientError>;
}

/// Map view with no display, for terminal use
/// DOCUMENTATION: Keeps pin state in memory and logs every change
#[derive(Default)]
pub struct HeadlessMapView {
    state: Mutex<HeadlessState>,
}

#[derive(Default)]
struct HeadlessState {
    next_handle: u64,
    pins: HashMap<MarkerHandle, MarkerOptions>,
    center: Option<Point<f64>>,
}

impl HeadlessMapView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pins as (title, position), sorted by title
    pub fn pins(&self) -> Vec<(String, Point<f64>)> {
        let state = match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut pins: Vec<_> = state
            .pins
            .values()
            .map(|pin| (pin.title.clone(), pin.position))
            .collect();
        pins.sort_by(|a, b| a.0.cmp(&b.0));
        pins
    }

    pub fn center(&self) -> Option<Point<f64>> {
        self.state.lock().ok().and_then(|state| state.center)
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut HeadlessState) -> T) -> Result<T, ClientError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| ClientError::Map("headless map state poisoned".to_string()))?;
        Ok(f(&mut state))
    }
}

impl MapView for HeadlessMapView {
    fn mount(&self, container_id: &str, options: &MapOptions) -> Result<(), ClientError> {
        log::info!(
            "Map mounted in '{}' (zoom {}, center {:.5},{:.5})",
            container_id,
            options.zoom,
            options.center.y(),
            options.center.x()
        );
        self.with_state(|state| state.center = Some(options.center))
    }

    fn add_marker(&self, options: MarkerOptions) -> Result<MarkerHandle, ClientError> {
        log::info!(
            "{} at {:.5},{:.5}",
            options.title,
            options.position.y(),
            options.position.x()
        );
        self.with_state(|state| {
            state.next_handle += 1;
            let handle = MarkerHandle(state.next_handle);
            state.pins.insert(handle, options);
            handle
        })
    }

    fn move_marker(&self, handle: MarkerHandle, position: Point<f64>) -> Result<(), ClientError> {
        self.with_state(|state| match state.pins.get_mut(&handle) {
            Some(pin) => {
                log::info!("{} moved to {:.5},{:.5}", pin.title, position.y(), position.x());
                pin.position = position;
                Ok(())
            }
            None => Err(ClientError::Map(format!("unknown marker {:?}", handle))),
        })?
    }

    fn set_center(&self, center: Point<f64>) -> Result<(), ClientError> {
        self.with_state(|state| state.center = Some(center))
    }
}
