use crate::domain::Notifier;
use std::sync::{Arc, Mutex};

/// Prints failures to stderr, the terminal's stand-in for a toast.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify_error(&self, message: &str) {
        eprintln!("❌ {}", message);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_error(&self, message: &str) {
        tracing::warn!(notification = %message, "User notification");
    }
}

/// Keeps every message so a host UI can drain and render them.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    pub fn drain(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|mut messages| std::mem::take(&mut *messages))
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_error(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_drain_empties() {
        let notifier = RecordingNotifier::new();
        let shared = notifier.clone();
        notifier.notify_error("Erro na remoção do produto");

        assert_eq!(shared.drain(), vec!["Erro na remoção do produto".to_string()]);
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn test_sinks_accept_messages_without_subscriber() {
        TracingNotifier.notify_error("Quantidade solicitada fora de estoque");
        ConsoleNotifier.notify_error("Quantidade solicitada fora de estoque");
    }
}
