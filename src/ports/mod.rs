// src/ports/mod.rs
// DOCUMENTATION: Seams to the caller's environment
// PURPOSE: Map SDK, device location, user messaging, rendering and file storage
// are owned by the caller; the clients only talk to these traits.

pub mod file_sink;
pub mod map_view;
pub mod notifier;
pub mod position_source;
pub mod renderer;

pub use file_sink::*;
pub use map_view::*;
pub use notifier::*;
pub use position_source::*;
pub use renderer::*;
