//! Side-effecting capabilities the portal calls as black boxes
//!
//! Screens are written against these traits only. The CLI implements them by
//! printing to the terminal; tests implement them by recording calls.

use thiserror::Error;

use crate::core::models::Route;

/// A capability refused or failed to perform the request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    /// The device could not open the URL
    #[error("Could not open {0}")]
    OpenUrl(String),

    /// The share sheet failed or was unavailable
    #[error("Sharing failed: {0}")]
    Share(String),
}

/// Screen navigation
pub trait Navigator {
    /// Push `route` on top of the current screen
    fn navigate(&self, route: Route);

    /// Return to the previous screen
    fn back(&self);

    /// Replace the current screen with `route`
    fn replace(&self, route: Route);
}

/// Alerts and confirmations
pub trait Notifier {
    /// Show an informational notice
    fn alert(&self, title: &str, message: &str);

    /// Ask the user to accept `accept_label`; `false` means cancelled
    fn confirm(&self, title: &str, message: &str, accept_label: &str) -> bool;
}

/// Opens `tel:`, `mailto:`, web and maps URLs
pub trait UrlOpener {
    /// Hand `url` to the device
    ///
    /// # Errors
    /// Returns [`CapabilityError::OpenUrl`] when the URL cannot be opened
    fn open_url(&self, url: &str) -> Result<(), CapabilityError>;
}

/// System share sheet
pub trait ShareSheet {
    /// Offer `message` for sharing under `title`
    ///
    /// # Errors
    /// Returns [`CapabilityError::Share`] when sharing fails
    fn share(&self, title: &str, message: &str) -> Result<(), CapabilityError>;
}
