//! Recording doubles for the UI collaborators.

use sweet_slac_core::Severity;

use super::{Notifier, Renderer, View};

/// Keeps every notification it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    pub messages: Vec<(String, Severity)>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent notification.
    #[must_use]
    pub fn last(&self) -> Option<(&str, Severity)> {
        self.messages
            .last()
            .map(|(message, severity)| (message.as_str(), *severity))
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str, severity: Severity) {
        self.messages.push((message.to_owned(), severity));
    }
}

/// Keeps every refresh request and counts badge effects.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub refreshed: Vec<View>,
    pub pulses: usize,
    pub shakes: usize,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn saw(&self, view: View) -> bool {
        self.refreshed.contains(&view)
    }

    /// Forget everything recorded so far.
    pub fn reset(&mut self) {
        self.refreshed.clear();
        self.pulses = 0;
        self.shakes = 0;
    }
}

impl Renderer for RecordingRenderer {
    fn refresh(&mut self, view: View) {
        self.refreshed.push(view);
    }

    fn pulse_cart_badge(&mut self) {
        self.pulses += 1;
    }

    fn shake_cart_badge(&mut self) {
        self.shakes += 1;
    }
}
