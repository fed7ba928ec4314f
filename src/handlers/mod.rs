// src/handlers/mod.rs
// DOCUMENTATION: Command-line handlers
// PURPOSE: One async function per `tripbox` subcommand

pub mod groups;
pub mod trips;

pub use groups::{chat_tail, members, track, weather};
pub use trips::export_pdf;

// --- ANSI colors for terminal output ---
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";
