// src/ports/notifier.rs
// DOCUMENTATION: User-visible messaging seam

/// Severity of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Error,
}

/// Shows short messages to the person using the app
pub trait UserNotifier: Send + Sync {
    fn show_message(&self, message: &str, level: MessageLevel);
}

/// Notifier that writes to the log
pub struct LogNotifier;

impl UserNotifier for LogNotifier {
    fn show_message(&self, message: &str, level: MessageLevel) {
        match level {
            MessageLevel::Info => log::info!("{}", message),
            MessageLevel::Error => log::error!("{}", message),
        }
    }
}
