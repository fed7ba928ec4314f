// src/testing.rs
// DOCUMENTATION: In-memory fakes for unit tests
// PURPOSE: Stand-ins for the network, map SDK, device location, notifier and file sink

use crate::errors::{ClientError, ErrorObserver};
use crate::models::{Position, WatchOptions};
use crate::ports::{
    FileSink, MapOptions, MapView, MarkerHandle, MarkerIcon, MarkerOptions, MessageLevel,
    PositionError, PositionSource, PositionUpdate, UserNotifier,
};
use crate::services::{ApiRequest, ApiResponse, HttpTransport};
use async_trait::async_trait;
use geo_types::Point;
use reqwest::Method;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Transport answering from a route table and recording every request
/// DOCUMENTATION: Unknown routes answer 404 with an empty JSON object
#[derive(Default)]
pub struct RecordingTransport {
    routes: Mutex<HashMap<(Method, String), Result<ApiResponse, ClientError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) {
        self.respond_bytes(method, path, status, body.to_string().into_bytes());
    }

    pub fn respond_bytes(&self, method: Method, path: &str, status: u16, body: Vec<u8>) {
        self.routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), Ok(ApiResponse { status, body }));
    }

    pub fn fail(&self, method: Method, path: &str, reason: &str) {
        self.routes.lock().unwrap().insert(
            (method, path.to_string()),
            Err(ClientError::Transport(reason.to_string())),
        );
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let key = (request.method.clone(), request.path.clone());
        self.requests.lock().unwrap().push(request);

        self.routes
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| {
                Ok(ApiResponse {
                    status: 404,
                    body: b"{}".to_vec(),
                })
            })
    }
}

#[derive(Default)]
struct MapState {
    next_handle: u64,
    markers: HashMap<MarkerHandle, MarkerOptions>,
    center: Option<Point<f64>>,
    mounted: Option<String>,
}

/// Map view recording pins and camera
#[derive(Default)]
pub struct FakeMap {
    state: Mutex<MapState>,
}

impl FakeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position_of(&self, handle: MarkerHandle) -> Option<Point<f64>> {
        self.state.lock().unwrap().markers.get(&handle).map(|m| m.position)
    }

    pub fn icon_of(&self, handle: MarkerHandle) -> Option<MarkerIcon> {
        self.state
            .lock()
            .unwrap()
            .markers
            .get(&handle)
            .map(|m| m.icon.clone())
    }

    pub fn title_of(&self, handle: MarkerHandle) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .markers
            .get(&handle)
            .map(|m| m.title.clone())
    }

    pub fn marker_count(&self) -> usize {
        self.state.lock().unwrap().markers.len()
    }

    pub fn center(&self) -> Option<Point<f64>> {
        self.state.lock().unwrap().center
    }

    pub fn mounted(&self) -> Option<String> {
        self.state.lock().unwrap().mounted.clone()
    }
}

impl MapView for FakeMap {
    fn mount(&self, container_id: &str, _options: &MapOptions) -> Result<(), ClientError> {
        self.state.lock().unwrap().mounted = Some(container_id.to_string());
        Ok(())
    }

    fn add_marker(&self, options: MarkerOptions) -> Result<MarkerHandle, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.next_handle += 1;
        let handle = MarkerHandle(state.next_handle);
        state.markers.insert(handle, options);
        Ok(handle)
    }

    fn move_marker(&self, handle: MarkerHandle, position: Point<f64>) -> Result<(), ClientError> {
        let mut state = self.state.lock().unwrap();
        let marker = state
            .markers
            .get_mut(&handle)
            .ok_or_else(|| ClientError::Map(format!("unknown marker {:?}", handle)))?;
        marker.position = position;
        Ok(())
    }

    fn set_center(&self, center: Point<f64>) -> Result<(), ClientError> {
        self.state.lock().unwrap().center = Some(center);
        Ok(())
    }
}

/// Position source driven by the test
pub struct ChannelPositionSource {
    supported: bool,
    senders: Mutex<Vec<mpsc::UnboundedSender<PositionUpdate>>>,
}

impl ChannelPositionSource {
    pub fn new(supported: bool) -> Self {
        Self {
            supported,
            senders: Mutex::new(Vec::new()),
        }
    }

    /// Deliver a fix to every open watch
    pub fn emit(&self, position: Position) {
        self.send(Ok(position));
    }

    pub fn emit_error(&self, error: PositionError) {
        self.send(Err(error));
    }

    pub fn watch_count(&self) -> usize {
        self.senders.lock().unwrap().len()
    }

    fn send(&self, update: PositionUpdate) {
        for sender in self.senders.lock().unwrap().iter() {
            // closed watches are expected after stop_tracking
            let _ = sender.send(update.clone());
        }
    }
}

impl PositionSource for ChannelPositionSource {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn watch(&self, _options: WatchOptions) -> mpsc::UnboundedReceiver<PositionUpdate> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders.lock().unwrap().push(tx);
        rx
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(String, MessageLevel)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(String, MessageLevel)> {
        self.messages.lock().unwrap().clone()
    }
}

impl UserNotifier for RecordingNotifier {
    fn show_message(&self, message: &str, level: MessageLevel) {
        self.messages
            .lock()
            .unwrap()
            .push((message.to_string(), level));
    }
}

/// File sink keeping saved files in memory
#[derive(Default)]
pub struct MemorySink {
    saved: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySink {
    pub fn saved(&self) -> Vec<(String, Vec<u8>)> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl FileSink for MemorySink {
    async fn save(&self, filename: &str, contents: &[u8]) -> Result<PathBuf, ClientError> {
        self.saved
            .lock()
            .unwrap()
            .push((filename.to_string(), contents.to_vec()));
        Ok(PathBuf::from(filename))
    }
}

/// Observer that stores every error it sees
pub fn error_collector() -> (Arc<Mutex<Vec<ClientError>>>, ErrorObserver) {
    let errors = Arc::new(Mutex::new(Vec::new()));
    let sink = errors.clone();
    let observer: ErrorObserver = Arc::new(move |e: &ClientError| sink.lock().unwrap().push(e.clone()));
    (errors, observer)
}
