// src/models/location.rs
// DOCUMENTATION: Data structures for live location sharing
// PURPOSE: Serialization models for the live-location endpoints and marker bookkeeping

use chrono::NaiveDateTime;
use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use validator::{Validate, ValidationError};

/// A device position, from the local device or a peer report
/// DOCUMENTATION: Body of POST /live-location/update
/// Latitude/longitude ranges are not checked here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    /// Accuracy radius in meters
    #[serde(default)]
    pub accuracy: Option<f64>,
    /// Ground speed in m/s
    #[serde(default)]
    pub speed: Option<f64>,
    /// Degrees clockwise from true north
    #[serde(default)]
    pub heading: Option<f64>,
    /// Meters above the WGS84 ellipsoid
    #[serde(default)]
    pub altitude: Option<f64>,
}

impl Position {
    /// Position with only coordinates known
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy: None,
            speed: None,
            heading: None,
            altitude: None,
        }
    }

    /// Map coordinate (x = longitude, y = latitude)
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

/// Options for a continuous position subscription
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchOptions {
    pub enable_high_accuracy: bool,
    /// Oldest cached fix the source may deliver
    pub maximum_age: Duration,
    /// Longest the source may take to produce a fix
    pub timeout: Duration,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            maximum_age: Duration::from_secs(30),
            timeout: Duration::from_secs(27),
        }
    }
}

/// Key into the marker set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKey {
    /// The local user
    SelfMarker,
    /// A peer, by backend user id
    Member(i64),
}

impl MarkerKey {
    pub fn is_self(&self) -> bool {
        matches!(self, MarkerKey::SelfMarker)
    }

    /// Hover title shown on the pin
    pub fn title(&self) -> String {
        match self {
            MarkerKey::SelfMarker => "You".to_string(),
            MarkerKey::Member(id) => format!("Member {}", id),
        }
    }
}

impl fmt::Display for MarkerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerKey::SelfMarker => write!(f, "self"),
            MarkerKey::Member(id) => write!(f, "{}", id),
        }
    }
}

/// Response of POST /live-location/update
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationUpdateResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub location_id: Option<i64>,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}

/// Latest known location of one group member
/// DOCUMENTATION: Entry of GET /live-location/members
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MemberLocation {
    pub user_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub heading: Option<f64>,
    #[serde(default)]
    pub altitude: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
    /// Battery percentage reported by the member's device
    #[serde(default)]
    pub battery_level: Option<f64>,
    #[serde(default)]
    pub location_name: Option<String>,
    /// Human-readable age, e.g. "5 minutes ago"
    #[serde(default)]
    pub time_ago: Option<String>,
}

impl MemberLocation {
    pub fn position(&self) -> Position {
        Position {
            latitude: self.latitude,
            longitude: self.longitude,
            accuracy: self.accuracy,
            speed: self.speed,
            heading: self.heading,
            altitude: self.altitude,
        }
    }
}

/// Envelope of GET /live-location/members
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MemberLocationsResponse {
    pub locations: Vec<MemberLocation>,
    #[serde(default)]
    pub total_members: usize,
    #[serde(default)]
    pub group_id: Option<i64>,
}

/// One historical fix
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryPoint {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub accuracy: Option<f64>,
}

/// Envelope of GET /live-location/history
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationHistoryResponse {
    pub history: Vec<HistoryPoint>,
    pub user_id: i64,
    #[serde(default)]
    pub hours_covered: u32,
    #[serde(default)]
    pub total_points: usize,
}

/// Body of POST /live-location/emergency
#[derive(Debug, Clone, Serialize)]
pub struct EmergencyAlertRequest {
    pub message: String,
}

/// Response of POST /live-location/emergency
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmergencyAlertResponse {
    #[serde(default)]
    pub message: Option<String>,
    /// Alert as broadcast to the group
    #[serde(default)]
    pub alert_data: serde_json::Value,
}

/// Body of POST /live-location/geofence
#[derive(Debug, Clone, Serialize, Validate)]
pub struct GeofenceRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Radius in meters, strictly positive
    #[validate(custom = "validate_radius")]
    pub radius: f64,
}

fn validate_radius(radius: f64) -> Result<(), ValidationError> {
    if radius > 0.0 && radius.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("radius_not_positive"))
    }
}

/// Default geofence radius in meters
pub const DEFAULT_GEOFENCE_RADIUS_M: f64 = 100.0;

/// Geofence as stored by the backend
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Geofence {
    #[serde(default)]
    pub name: Option<String>,
    pub center_lat: f64,
    pub center_lng: f64,
    pub radius: f64,
    #[serde(default)]
    pub created_by: Option<i64>,
    #[serde(default)]
    pub group_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Response of POST /live-location/geofence
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeofenceResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub geofence: Geofence,
}

/// Distance between two members
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MemberDistance {
    pub user1_id: i64,
    pub user2_id: i64,
    pub distance_km: f64,
    pub distance_miles: f64,
}

/// Envelope of GET /live-location/distance
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MemberDistancesResponse {
    pub distances: Vec<MemberDistance>,
    #[serde(default)]
    pub total_members: usize,
}
