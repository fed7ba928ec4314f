// src/services/recommendation_client.rs
// DOCUMENTATION: AI recommendation and weather client
// PURPOSE: Stateless request/response wrappers; payloads pass through untouched

use crate::errors::ClientError;
use crate::models::{
    NearbyRecommendationsRequest, PersonalizedRecommendationsRequest, Recommendation,
    WeatherReport,
};
use crate::services::ApiClient;
use reqwest::Method;
use serde_json::Value;

/// Recommendation client for one group
/// DOCUMENTATION: No retries, no caching
pub struct RecommendationClient {
    group_id: i64,
    api: ApiClient,
}

impl RecommendationClient {
    pub fn new(group_id: i64, api: ApiClient) -> Self {
        Self { group_id, api }
    }

    fn path(&self, suffix: &str) -> String {
        format!("/api/groups/{}/{}", self.group_id, suffix)
    }

    /// Places near a point, grouped by type
    /// DOCUMENTATION: `types` defaults to restaurant, tourist_attraction, lodging
    pub async fn get_nearby_recommendations(
        &self,
        latitude: f64,
        longitude: f64,
        types: Option<Vec<String>>,
    ) -> Result<Recommendation, ClientError> {
        let request = NearbyRecommendationsRequest::new(latitude, longitude, types);
        log::debug!(
            "Group {}: nearby recommendations at {},{} for {:?}",
            self.group_id,
            latitude,
            longitude,
            request.types
        );

        self.api
            .send_json(
                Method::POST,
                &self.path("ai-recommendations"),
                Some(&request),
                "Failed to get recommendations",
            )
            .await
    }

    /// Suggestions shaped by preferences, budget, trip length and destination
    pub async fn get_personalized_recommendations(
        &self,
        preferences: Value,
        budget: Value,
        duration: Value,
        location: Value,
    ) -> Result<Recommendation, ClientError> {
        let request = PersonalizedRecommendationsRequest {
            preferences,
            budget,
            duration,
            location,
        };

        self.api
            .send_json(
                Method::POST,
                &self.path("ai-recommendations/personalized"),
                Some(&request),
                "Failed to get personalized recommendations",
            )
            .await
    }

    /// Persist a recommendation to the group's shared list
    pub async fn save_recommendation(&self, recommendation: &Recommendation) -> Result<Value, ClientError> {
        self.api
            .send_json(
                Method::POST,
                &self.path("ai-recommendations/save"),
                Some(recommendation),
                "Failed to save recommendation",
            )
            .await
    }

    pub async fn get_weather(&self, latitude: f64, longitude: f64) -> Result<WeatherReport, ClientError> {
        self.api
            .get_json(
                &self.path("weather"),
                &[("lat", latitude.to_string()), ("lng", longitude.to_string())],
                "Failed to get weather information",
            )
            .await
    }
}
