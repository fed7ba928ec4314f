// src/models/recommendation.rs
// DOCUMENTATION: Request bodies for AI recommendation endpoints
// PURPOSE: Typed wrappers around pass-through recommendation inputs

use serde::Serialize;
use serde_json::Value;

/// Opaque recommendation payload
pub type Recommendation = Value;

/// Opaque weather payload
pub type WeatherReport = Value;

/// Place types asked for when the caller does not specify any
pub const DEFAULT_RECOMMENDATION_TYPES: [&str; 3] = ["restaurant", "tourist_attraction", "lodging"];

/// Body of POST /ai-recommendations
#[derive(Debug, Clone, Serialize)]
pub struct NearbyRecommendationsRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub types: Vec<String>,
}

impl NearbyRecommendationsRequest {
    /// Falls back to the default place types when `types` is None
    pub fn new(latitude: f64, longitude: f64, types: Option<Vec<String>>) -> Self {
        Self {
            latitude,
            longitude,
            types: types.unwrap_or_else(|| {
                DEFAULT_RECOMMENDATION_TYPES
                    .iter()
                    .map(|t| t.to_string())
                    .collect()
            }),
        }
    }
}

/// Body of POST /ai-recommendations/personalized
/// DOCUMENTATION: Free-form values are forwarded verbatim
#[derive(Debug, Clone, Serialize)]
pub struct PersonalizedRecommendationsRequest {
    pub preferences: Value,
    pub budget: Value,
    pub duration: Value,
    pub location: Value,
}
