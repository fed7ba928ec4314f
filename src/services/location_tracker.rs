// src/services/location_tracker.rs
// DOCUMENTATION: Live location sharing for a trip group
// PURPOSE: Mirror own and peer positions onto a map and keep the backend informed

use crate::config::Config;
use crate::errors::{ClientError, ErrorObserver};
use crate::models::{
    EmergencyAlertRequest, EmergencyAlertResponse, GeofenceRequest, GeofenceResponse,
    LocationHistoryResponse, LocationUpdateResponse, MarkerKey, MemberDistancesResponse,
    MemberLocation, MemberLocationsResponse, Position, WatchOptions, DEFAULT_GEOFENCE_RADIUS_M,
};
use crate::ports::{
    MapOptions, MapView, MarkerHandle, MessageLevel, PositionSource, PositionUpdate, UserNotifier,
};
use crate::services::{spawn_interval, ApiClient, BackgroundTask, MarkerSet, TaskSlot};
use reqwest::Method;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use validator::Validate;

const UNSUPPORTED_MESSAGE: &str = "Location tracking not supported on this device";
const POSITION_ERROR_MESSAGE: &str = "Error getting location. Please enable location services.";
const DEFAULT_EMERGENCY_MESSAGE: &str = "Emergency! I need help!";

/// Tunables for a tracker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerSettings {
    /// Time between peer location polls (default 30 s)
    pub poll_interval: Duration,
    pub watch_options: WatchOptions,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(30),
            watch_options: WatchOptions::default(),
        }
    }
}

impl TrackerSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            poll_interval: config.location_poll_interval(),
            ..Self::default()
        }
    }
}

/// State reachable from the background tasks
struct Shared {
    group_id: i64,
    api: ApiClient,
    map: Arc<dyn MapView>,
    notifier: Arc<dyn UserNotifier>,
    on_error: Option<ErrorObserver>,
    markers: Mutex<MarkerSet>,
}

impl Shared {
    fn path(&self, suffix: &str) -> String {
        format!("/api/groups/{}/live-location/{}", self.group_id, suffix)
    }

    fn report(&self, context: &str, error: &ClientError) {
        log::error!("{}: {}", context, error);
        if let Some(observer) = &self.on_error {
            observer(error);
        }
    }

    async fn push_position(&self, position: &Position) -> Result<LocationUpdateResponse, ClientError> {
        self.api
            .send_json(
                Method::POST,
                &self.path("update"),
                Some(position),
                "Failed to update location",
            )
            .await
    }

    /// Local marker first, then the backend
    async fn handle_own_position(&self, position: Position) {
        {
            let mut markers = self.markers.lock().await;
            if let Err(e) = markers.upsert(self.map.as_ref(), MarkerKey::SelfMarker, &position) {
                self.report("Error updating own marker", &e);
            }
        }

        if let Err(e) = self.push_position(&position).await {
            self.report("Error updating location", &e);
        }
    }

    async fn handle_update(&self, update: PositionUpdate) {
        match update {
            Ok(position) => self.handle_own_position(position).await,
            Err(e) => {
                log::warn!("Location error: {}", e);
                self.notifier
                    .show_message(POSITION_ERROR_MESSAGE, MessageLevel::Error);
            }
        }
    }

    async fn refresh_members(&self) -> Result<Vec<MemberLocation>, ClientError> {
        let response: MemberLocationsResponse = self
            .api
            .get_json(&self.path("members"), &[], "Failed to fetch member locations")
            .await?;

        let own_id = self.api.auth().user_id();
        let peers: Vec<MemberLocation> = response
            .locations
            .into_iter()
            .filter(|location| location.user_id != own_id)
            .collect();

        let mut markers = self.markers.lock().await;
        for peer in &peers {
            if let Err(e) = markers.upsert(
                self.map.as_ref(),
                MarkerKey::Member(peer.user_id),
                &peer.position(),
            ) {
                self.report("Error updating member marker", &e);
            }
        }

        log::debug!(
            "Group {}: refreshed {} member locations",
            self.group_id,
            peers.len()
        );
        Ok(peers)
    }
}

/// Live location tracker for one group
/// DOCUMENTATION: Owns the map markers, the device subscription and the
/// member poll. Both loops stop when the tracker is dropped.
pub struct LocationTracker {
    shared: Arc<Shared>,
    source: Arc<dyn PositionSource>,
    settings: TrackerSettings,
    watch: TaskSlot,
    poll: TaskSlot,
}

impl LocationTracker {
    pub fn new(
        group_id: i64,
        api: ApiClient,
        map: Arc<dyn MapView>,
        source: Arc<dyn PositionSource>,
        notifier: Arc<dyn UserNotifier>,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                group_id,
                api,
                map,
                notifier,
                on_error: None,
                markers: Mutex::new(MarkerSet::new()),
            }),
            source,
            settings: TrackerSettings::default(),
            watch: TaskSlot::default(),
            poll: TaskSlot::default(),
        }
    }

    pub fn with_settings(mut self, settings: TrackerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Receive failures that the background loops swallow
    /// DOCUMENTATION: Must be set before any loop is started
    pub fn with_error_observer(mut self, observer: ErrorObserver) -> Self {
        match Arc::get_mut(&mut self.shared) {
            Some(shared) => shared.on_error = Some(observer),
            None => log::warn!("Error observer ignored: tracker already running"),
        }
        self
    }

    pub fn group_id(&self) -> i64 {
        self.shared.group_id
    }

    /// Mount the map, then start the device subscription and the member poll
    /// DOCUMENTATION: A device without location support still gets peer updates
    pub async fn initialize_map(&self, container_id: &str) -> Result<(), ClientError> {
        if self.settings.poll_interval.is_zero() {
            return Err(ClientError::InvalidInput(
                "member-locations: poll interval must be greater than zero".to_string(),
            ));
        }

        self.shared
            .map
            .mount(container_id, &MapOptions::default())?;
        log::info!(
            "Group {}: map initialized in '{}'",
            self.shared.group_id,
            container_id
        );

        if let Err(e) = self.start_tracking() {
            log::warn!("Group {}: own location unavailable: {}", self.shared.group_id, e);
        }

        self.start_polling()
    }

    /// Subscribe to device positions
    /// DOCUMENTATION: Replaces any previous subscription. Fails with
    /// LocationUnavailable (after telling the user) when the device has no
    /// location capability.
    pub fn start_tracking(&self) -> Result<(), ClientError> {
        if !self.source.is_supported() {
            self.shared
                .notifier
                .show_message(UNSUPPORTED_MESSAGE, MessageLevel::Error);
            return Err(ClientError::LocationUnavailable);
        }

        let updates = self.source.watch(self.settings.watch_options);
        let shared = self.shared.clone();
        self.watch.replace(BackgroundTask::spawn(
            "location-watch",
            watch_loop(shared, updates),
        ));

        log::info!("Group {}: tracking own location", self.shared.group_id);
        Ok(())
    }

    /// Cancel the device subscription. Safe to call repeatedly.
    pub fn stop_tracking(&self) {
        if self.watch.clear() {
            log::info!("Group {}: stopped tracking own location", self.shared.group_id);
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.watch.is_active()
    }

    /// Start the periodic member poll, replacing any running one
    /// DOCUMENTATION: Fails with InvalidInput for a zero poll interval and
    /// leaves a running poll untouched
    pub fn start_polling(&self) -> Result<(), ClientError> {
        let shared = self.shared.clone();
        let task = spawn_interval(
            "member-locations",
            self.settings.poll_interval,
            move || {
                let shared = shared.clone();
                async move {
                    if let Err(e) = shared.refresh_members().await {
                        shared.report("Error fetching member locations", &e);
                    }
                }
            },
        )?;
        self.poll.replace(task);
        Ok(())
    }

    /// Cancel the member poll. Safe to call repeatedly.
    pub fn stop_polling(&self) {
        self.poll.clear();
    }

    pub fn is_polling(&self) -> bool {
        self.poll.is_active()
    }

    /// Send one position to the backend
    pub async fn update_location(&self, position: &Position) -> Result<LocationUpdateResponse, ClientError> {
        self.shared.push_position(position).await
    }

    /// Fetch peer locations once and apply them to the markers
    /// DOCUMENTATION: Returns the peers that were applied (own entry excluded)
    pub async fn refresh_member_locations(&self) -> Result<Vec<MemberLocation>, ClientError> {
        self.shared.refresh_members().await
    }

    pub async fn marker(&self, key: MarkerKey) -> Option<MarkerHandle> {
        self.shared.markers.lock().await.get(&key)
    }

    pub async fn marker_count(&self) -> usize {
        self.shared.markers.lock().await.len()
    }

    /// Past fixes of a member (defaults: self, last 24 hours)
    pub async fn location_history(
        &self,
        user_id: Option<i64>,
        hours: Option<u32>,
    ) -> Result<LocationHistoryResponse, ClientError> {
        let mut query = Vec::new();
        if let Some(user_id) = user_id {
            query.push(("user_id", user_id.to_string()));
        }
        if let Some(hours) = hours {
            query.push(("hours", hours.to_string()));
        }

        self.shared
            .api
            .get_json(
                &self.shared.path("history"),
                &query,
                "Failed to fetch location history",
            )
            .await
    }

    /// Broadcast an emergency alert with the last known own position
    pub async fn send_emergency_alert(
        &self,
        message: Option<&str>,
    ) -> Result<EmergencyAlertResponse, ClientError> {
        let request = EmergencyAlertRequest {
            message: message.unwrap_or(DEFAULT_EMERGENCY_MESSAGE).to_string(),
        };

        log::warn!("Group {}: sending emergency alert", self.shared.group_id);
        self.shared
            .api
            .send_json(
                Method::POST,
                &self.shared.path("emergency"),
                Some(&request),
                "Failed to send emergency alert",
            )
            .await
    }

    /// Register a circular geofence (radius in meters, default 100)
    pub async fn create_geofence(
        &self,
        name: &str,
        latitude: f64,
        longitude: f64,
        radius: Option<f64>,
    ) -> Result<GeofenceResponse, ClientError> {
        let request = GeofenceRequest {
            name: name.to_string(),
            latitude,
            longitude,
            radius: radius.unwrap_or(DEFAULT_GEOFENCE_RADIUS_M),
        };
        request.validate()?;

        self.shared
            .api
            .send_json(
                Method::POST,
                &self.shared.path("geofence"),
                Some(&request),
                "Failed to create geofence",
            )
            .await
    }

    /// Pairwise distances between members with a current location
    pub async fn member_distances(&self) -> Result<MemberDistancesResponse, ClientError> {
        self.shared
            .api
            .get_json(
                &self.shared.path("distance"),
                &[],
                "Failed to fetch member distances",
            )
            .await
    }
}

async fn watch_loop(shared: Arc<Shared>, mut updates: mpsc::UnboundedReceiver<PositionUpdate>) {
    while let Some(update) = updates.recv().await {
        shared.handle_update(update).await;
    }
    log::debug!("Group {}: position source closed", shared.group_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthContext;
    use crate::testing::{
        error_collector, ChannelPositionSource, FakeMap, RecordingNotifier, RecordingTransport,
    };
    use geo_types::Point;
    use serde_json::json;

    const GROUP: i64 = 9;
    const ME: i64 = 1;

    struct Harness {
        transport: Arc<RecordingTransport>,
        map: Arc<FakeMap>,
        source: Arc<ChannelPositionSource>,
        notifier: Arc<RecordingNotifier>,
        errors: Arc<std::sync::Mutex<Vec<ClientError>>>,
        tracker: LocationTracker,
    }

    fn harness(supported: bool) -> Harness {
        let transport = Arc::new(RecordingTransport::new());
        transport.respond(
            Method::POST,
            "/api/groups/9/live-location/update",
            201,
            json!({"message": "Location updated successfully", "location_id": 1}),
        );

        let map = Arc::new(FakeMap::new());
        let source = Arc::new(ChannelPositionSource::new(supported));
        let notifier = Arc::new(RecordingNotifier::default());
        let (errors, observer) = error_collector();

        let tracker = LocationTracker::new(
            GROUP,
            ApiClient::new(transport.clone(), AuthContext::new("tok", ME)),
            map.clone(),
            source.clone(),
            notifier.clone(),
        )
        .with_error_observer(observer);

        Harness {
            transport,
            map,
            source,
            notifier,
            errors,
            tracker,
        }
    }

    fn members_body(entries: &[(i64, f64, f64)]) -> serde_json::Value {
        let locations: Vec<_> = entries
            .iter()
            .map(|(id, lat, lng)| json!({"user_id": id, "latitude": lat, "longitude": lng}))
            .collect();
        json!({"locations": locations, "total_members": entries.len(), "group_id": GROUP})
    }

    async fn settle() {
        for _ in 0..50 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_own_position_moves_marker_and_centre() {
        let h = harness(true);
        h.tracker.start_tracking().unwrap();

        h.source.emit(Position::new(48.85, 2.35));
        h.source.emit(Position::new(48.86, 2.36));
        settle().await;

        let handle = h.tracker.marker(MarkerKey::SelfMarker).await.unwrap();
        assert_eq!(h.map.position_of(handle), Some(Point::new(2.36, 48.86)));
        assert_eq!(h.map.center(), Some(Point::new(2.36, 48.86)));
        assert_eq!(h.map.marker_count(), 1);

        let pushes = h
            .transport
            .count(Method::POST, "/api/groups/9/live-location/update");
        assert_eq!(pushes, 2);
        let last = h.transport.requests().pop().unwrap();
        assert_eq!(last.body.unwrap()["latitude"], 48.86);
    }

    #[tokio::test]
    async fn test_push_failure_is_swallowed_and_observed() {
        let h = harness(true);
        h.transport.respond(
            Method::POST,
            "/api/groups/9/live-location/update",
            500,
            json!({"error": "boom"}),
        );
        h.tracker.start_tracking().unwrap();

        h.source.emit(Position::new(1.0, 2.0));
        settle().await;

        // marker still updated even though the push failed
        assert!(h.tracker.marker(MarkerKey::SelfMarker).await.is_some());
        assert!(h.tracker.is_tracking());
        let errors = h.errors.lock().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "Failed to update location");
    }

    #[tokio::test]
    async fn test_unsupported_device_notifies_and_does_not_subscribe() {
        let h = harness(false);

        let err = h.tracker.start_tracking().unwrap_err();

        assert_eq!(err, ClientError::LocationUnavailable);
        assert_eq!(h.source.watch_count(), 0);
        assert!(!h.tracker.is_tracking());
        assert_eq!(
            h.notifier.messages(),
            vec![(UNSUPPORTED_MESSAGE.to_string(), MessageLevel::Error)]
        );
    }

    #[tokio::test]
    async fn test_position_error_notifies_user_and_keeps_watching() {
        let h = harness(true);
        h.tracker.start_tracking().unwrap();

        h.source
            .emit_error(crate::ports::PositionError::PermissionDenied);
        settle().await;
        h.source.emit(Position::new(3.0, 4.0));
        settle().await;

        assert_eq!(
            h.notifier.messages(),
            vec![(POSITION_ERROR_MESSAGE.to_string(), MessageLevel::Error)]
        );
        assert!(h.tracker.marker(MarkerKey::SelfMarker).await.is_some());
    }

    #[tokio::test]
    async fn test_stop_tracking_ignores_later_events() {
        let h = harness(true);
        h.tracker.start_tracking().unwrap();
        h.source.emit(Position::new(1.0, 1.0));
        settle().await;

        h.tracker.stop_tracking();
        h.tracker.stop_tracking();
        settle().await;

        h.source.emit(Position::new(5.0, 5.0));
        settle().await;

        let handle = h.tracker.marker(MarkerKey::SelfMarker).await.unwrap();
        assert_eq!(h.map.position_of(handle), Some(Point::new(1.0, 1.0)));
        assert!(!h.tracker.is_tracking());
        assert_eq!(
            h.transport
                .count(Method::POST, "/api/groups/9/live-location/update"),
            1
        );
    }

    #[tokio::test]
    async fn test_refresh_skips_own_entry_and_keeps_self_marker() {
        let h = harness(true);
        h.tracker.start_tracking().unwrap();
        h.source.emit(Position::new(10.0, 10.0));
        settle().await;

        h.transport.respond(
            Method::GET,
            "/api/groups/9/live-location/members",
            200,
            members_body(&[(ME, 50.0, 50.0), (2, 20.0, 21.0), (3, 30.0, 31.0)]),
        );
        let peers = h.tracker.refresh_member_locations().await.unwrap();
        assert_eq!(peers.len(), 2);

        h.transport.respond(
            Method::GET,
            "/api/groups/9/live-location/members",
            200,
            members_body(&[(2, 22.0, 23.0)]),
        );
        h.tracker.refresh_member_locations().await.unwrap();

        let own = h.tracker.marker(MarkerKey::SelfMarker).await.unwrap();
        let peer = h.tracker.marker(MarkerKey::Member(2)).await.unwrap();
        assert_eq!(h.map.position_of(own), Some(Point::new(10.0, 10.0)));
        assert_eq!(h.map.position_of(peer), Some(Point::new(23.0, 22.0)));
        assert!(h.tracker.marker(MarkerKey::Member(ME)).await.is_none());
        assert_eq!(h.tracker.marker_count().await, 3);
        assert_eq!(h.map.center(), Some(Point::new(10.0, 10.0)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_initialize_map_polls_every_interval_through_failures() {
        let h = harness(true);
        h.transport.respond(
            Method::GET,
            "/api/groups/9/live-location/members",
            503,
            json!({}),
        );

        h.tracker.initialize_map("map").await.unwrap();
        assert_eq!(h.map.mounted(), Some("map".to_string()));
        assert!(h.tracker.is_tracking());
        assert!(h.tracker.is_polling());

        tokio::time::sleep(Duration::from_secs(29)).await;
        assert_eq!(
            h.transport.count(Method::GET, "/api/groups/9/live-location/members"),
            0
        );

        tokio::time::sleep(Duration::from_secs(62)).await;
        assert_eq!(
            h.transport.count(Method::GET, "/api/groups/9/live-location/members"),
            3
        );
        assert_eq!(h.errors.lock().unwrap().len(), 3);

        h.transport.respond(
            Method::GET,
            "/api/groups/9/live-location/members",
            200,
            members_body(&[(4, 1.0, 2.0)]),
        );
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(h.tracker.marker(MarkerKey::Member(4)).await.is_some());

        h.tracker.stop_polling();
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(
            h.transport.count(Method::GET, "/api/groups/9/live-location/members"),
            4
        );
    }

    #[tokio::test]
    async fn test_initialize_map_without_location_support_still_polls() {
        let h = harness(false);
        h.tracker.initialize_map("map").await.unwrap();

        assert!(!h.tracker.is_tracking());
        assert!(h.tracker.is_polling());
    }

    #[tokio::test]
    async fn test_history_query_and_geofence_validation() {
        let h = harness(true);
        h.transport.respond(
            Method::GET,
            "/api/groups/9/live-location/history",
            200,
            json!({"history": [], "user_id": 2, "hours_covered": 6, "total_points": 0}),
        );

        let history = h.tracker.location_history(Some(2), Some(6)).await.unwrap();
        assert_eq!(history.user_id, 2);
        let request = h.transport.requests().pop().unwrap();
        assert_eq!(
            request.query,
            vec![
                ("user_id".to_string(), "2".to_string()),
                ("hours".to_string(), "6".to_string())
            ]
        );

        let err = h
            .tracker
            .create_geofence("Camp", 1.0, 2.0, Some(-5.0))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidInput(_)));
        assert_eq!(
            h.transport.count(Method::POST, "/api/groups/9/live-location/geofence"),
            0
        );
    }

    #[tokio::test]
    async fn test_emergency_alert_default_message() {
        let h = harness(true);
        h.transport.respond(
            Method::POST,
            "/api/groups/9/live-location/emergency",
            200,
            json!({"message": "Emergency alert sent to all group members", "alert_data": {}}),
        );

        h.tracker.send_emergency_alert(None).await.unwrap();

        let request = h.transport.requests().pop().unwrap();
        assert_eq!(
            request.body,
            Some(json!({"message": "Emergency! I need help!"}))
        );
    }

    #[tokio::test]
    async fn test_failed_refresh_leaves_markers_untouched() {
        let h = harness(true);
        h.tracker.start_tracking().unwrap();
        h.source.emit(Position::new(10.0, 10.0));
        settle().await;
        h.transport.respond(
            Method::GET,
            "/api/groups/9/live-location/members",
            200,
            members_body(&[(2, 20.0, 21.0)]),
        );
        h.tracker.refresh_member_locations().await.unwrap();

        let own = h.tracker.marker(MarkerKey::SelfMarker).await.unwrap();
        let peer = h.tracker.marker(MarkerKey::Member(2)).await.unwrap();

        h.transport.respond(
            Method::GET,
            "/api/groups/9/live-location/members",
            500,
            members_body(&[(2, 60.0, 61.0), (3, 70.0, 71.0)]),
        );
        let err = h.tracker.refresh_member_locations().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch member locations");

        h.transport.respond_bytes(
            Method::GET,
            "/api/groups/9/live-location/members",
            200,
            b"<html>gateway</html>".to_vec(),
        );
        let err = h.tracker.refresh_member_locations().await.unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));

        assert_eq!(h.map.position_of(own), Some(Point::new(10.0, 10.0)));
        assert_eq!(h.map.position_of(peer), Some(Point::new(21.0, 20.0)));
        assert_eq!(h.map.center(), Some(Point::new(10.0, 10.0)));
        assert_eq!(h.tracker.marker_count().await, 2);
        assert_eq!(h.map.marker_count(), 2);
    }

    #[tokio::test]
    async fn test_failed_update_location_leaves_markers_untouched() {
        let h = harness(true);
        h.tracker.start_tracking().unwrap();
        h.source.emit(Position::new(1.0, 2.0));
        settle().await;
        h.transport.respond(
            Method::POST,
            "/api/groups/9/live-location/update",
            400,
            json!({"error": "Latitude and longitude are required"}),
        );

        let err = h
            .tracker
            .update_location(&Position::new(8.0, 9.0))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to update location");
        let own = h.tracker.marker(MarkerKey::SelfMarker).await.unwrap();
        assert_eq!(h.map.position_of(own), Some(Point::new(2.0, 1.0)));
        assert_eq!(h.map.center(), Some(Point::new(2.0, 1.0)));
        assert_eq!(h.tracker.marker_count().await, 1);
        assert!(h.tracker.is_tracking());
    }

    #[tokio::test]
    async fn test_zero_poll_interval_is_rejected() {
        let h = harness(true);
        let tracker = h.tracker.with_settings(TrackerSettings {
            poll_interval: Duration::ZERO,
            ..TrackerSettings::default()
        });

        let err = tracker.initialize_map("map").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidInput(_)));
        assert_eq!(h.map.mounted(), None);
        assert!(!tracker.is_tracking());

        assert!(matches!(
            tracker.start_polling(),
            Err(ClientError::InvalidInput(_))
        ));
        assert!(!tracker.is_polling());
    }

    #[tokio::test]
    async fn test_sub_meter_geofence_is_sent() {
        let h = harness(true);
        h.transport.respond(
            Method::POST,
            "/api/groups/9/live-location/geofence",
            201,
            json!({"message": "Geofence created successfully", "geofence": {
                "name": "Tent", "center_lat": 1.0, "center_lng": 2.0, "radius": 0.5
            }}),
        );

        h.tracker
            .create_geofence("Tent", 1.0, 2.0, Some(0.5))
            .await
            .unwrap();

        let request = h.transport.requests().pop().unwrap();
        assert_eq!(request.body.unwrap()["radius"], 0.5);
    }
}
