// src/ports/renderer.rs
// DOCUMENTATION: Chat rendering seam

use crate::models::ChatMessage;

/// Receives the full message list on every chat poll
pub trait MessageRenderer: Send + Sync {
    fn render(&self, messages: &[ChatMessage]);
}

impl<F> MessageRenderer for F
where
    F: Fn(&[ChatMessage]) + Send + Sync,
{
    fn render(&self, messages: &[ChatMessage]) {
        self(messages)
    }
}
