//! User-facing notifications.

use std::time::Duration;

use sweet_slac_core::Severity;

/// How long a notification stays on screen. Dismissal is the front-end's job.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

/// Receives short messages for the user.
///
/// Fire-and-forget: there is no return value and no delivery guarantee.
pub trait Notifier {
    fn notify(&mut self, message: &str, severity: Severity);
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&mut self, message: &str, severity: Severity) {
        (**self).notify(message, severity);
    }
}

/// Sends notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => tracing::warn!(%severity, "{message}"),
            Severity::Info | Severity::Success => tracing::info!(%severity, "{message}"),
        }
    }
}
