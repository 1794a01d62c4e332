//! Transient notification surfaces.

use super::error::NotifyError;

/// Shows a short-lived message, such as a snackbar or toast.
///
/// Calls are best effort: an error means this one message was not shown
/// and says nothing about later ones.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str) -> Result<(), NotifyError>;
}

/// Notifier that writes each message to the `tracing` log at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) -> Result<(), NotifyError> {
        tracing::info!(target: "lifelog::notification", "{}", message);
        Ok(())
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&self, message: &str) -> Result<(), NotifyError> {
        (**self).notify(message)
    }
}
