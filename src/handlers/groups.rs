// src/handlers/groups.rs
// DOCUMENTATION: Group-level commands (chat, weather, live location)

use super::{BOLD, CYAN, RED, RESET};
use std::sync::Arc;
use tripbox_client::models::ChatMessage;
use tripbox_client::ports::{HeadlessMapView, LogNotifier, NoPositionSource};
use tripbox_client::{
    ApiClient, ChatClient, ChatSettings, ClientError, Config, ErrorObserver, LocationTracker,
    RecommendationClient, TrackerSettings,
};

fn print_errors() -> ErrorObserver {
    Arc::new(|e: &ClientError| eprintln!("{}✗ {}{}", RED, e, RESET))
}

/// `tripbox chat-tail <group_id>`
/// DOCUMENTATION: Prints the newest messages on every poll until Ctrl-C
pub async fn chat_tail(config: &Config, group_id: i64) -> anyhow::Result<()> {
    let api = ApiClient::from_config(config)?;

    let renderer = |messages: &[ChatMessage]| {
        println!("{}--- {} messages ---{}", BOLD, messages.len(), RESET);
        for message in messages.iter().rev().take(10).rev() {
            let sender = message
                .get("username")
                .and_then(|v| v.as_str())
                .unwrap_or("?");
            let text = message.get("message").and_then(|v| v.as_str()).unwrap_or("");
            println!("{}{}{}: {}", CYAN, sender, RESET, text);
        }
    };

    let chat = ChatClient::new(group_id, api, Arc::new(renderer))
        .with_settings(ChatSettings::from_config(config))
        .with_error_observer(print_errors());

    chat.start_message_updates()?;
    tokio::signal::ctrl_c().await?;
    chat.stop_message_updates();
    Ok(())
}

/// `tripbox weather <group_id> <lat> <lng>`
pub async fn weather(config: &Config, group_id: i64, latitude: f64, longitude: f64) -> anyhow::Result<()> {
    let client = RecommendationClient::new(group_id, ApiClient::from_config(config)?);
    let report = client.get_weather(latitude, longitude).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn headless_tracker(config: &Config, group_id: i64, map: Arc<HeadlessMapView>) -> anyhow::Result<LocationTracker> {
    let tracker = LocationTracker::new(
        group_id,
        ApiClient::from_config(config)?,
        map,
        Arc::new(NoPositionSource),
        Arc::new(LogNotifier),
    )
    .with_settings(TrackerSettings::from_config(config))
    .with_error_observer(print_errors());
    Ok(tracker)
}

/// `tripbox members <group_id>`
pub async fn members(config: &Config, group_id: i64) -> anyhow::Result<()> {
    let tracker = headless_tracker(config, group_id, Arc::new(HeadlessMapView::new()))?;

    let peers = tracker.refresh_member_locations().await?;
    println!("{}{} members sharing location{}", BOLD, peers.len(), RESET);
    for peer in peers {
        println!(
            "  {}Member {}{}  {:.5},{:.5}  {}",
            CYAN,
            peer.user_id,
            RESET,
            peer.latitude,
            peer.longitude,
            peer.time_ago.unwrap_or_default()
        );
    }
    Ok(())
}

/// `tripbox track <group_id>`
/// DOCUMENTATION: Follows peer positions on a headless map until Ctrl-C
pub async fn track(config: &Config, group_id: i64) -> anyhow::Result<()> {
    let map = Arc::new(HeadlessMapView::new());
    let tracker = headless_tracker(config, group_id, map.clone())?;

    tracker.initialize_map("terminal").await?;
    tracker.refresh_member_locations().await?;
    tokio::signal::ctrl_c().await?;

    tracker.stop_tracking();
    tracker.stop_polling();
    for (title, point) in map.pins() {
        println!("{}  {:.5},{:.5}", title, point.y(), point.x());
    }
    Ok(())
}
