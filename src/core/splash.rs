//! Welcome-screen splash timer
//!
//! The welcome screen holds for a short delay, then moves a logged-in user to
//! the home tab. The wait is tied to a [`CancellationToken`]: tearing the
//! screen down cancels it and no navigation happens afterwards.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::core::capabilities::Navigator;
use crate::core::models::Route;
use crate::debug;

/// Default splash delay in milliseconds
pub const DEFAULT_SPLASH_DELAY_MS: u64 = 2000;

/// How the splash wait ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashOutcome {
    /// A session exists; the route was replaced with home
    Home,
    /// No session; the welcome choices stay on screen
    Welcome,
    /// The screen was torn down before the delay elapsed
    Cancelled,
}

/// Cancellable splash timer owned by the welcome screen
#[derive(Debug)]
pub struct SplashTimer {
    delay: Duration,
    token: CancellationToken,
}

impl SplashTimer {
    /// Create a timer that waits `delay`
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            token: CancellationToken::new(),
        }
    }

    /// Handle that cancels this timer when triggered
    #[must_use]
    pub fn cancel_handle(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Cancel the pending wait
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Wait out the delay, then route according to `has_session`
    ///
    /// `has_session` is read before waiting, as the screen does on mount.
    pub async fn run(&self, has_session: bool, navigator: &dyn Navigator) -> SplashOutcome {
        tokio::select! {
            () = self.token.cancelled() => {
                debug!("Splash timer cancelled before {:?} elapsed", self.delay);
                SplashOutcome::Cancelled
            }
            () = tokio::time::sleep(self.delay) => {
                if has_session {
                    navigator.replace(Route::Home);
                    SplashOutcome::Home
                } else {
                    SplashOutcome::Welcome
                }
            }
        }
    }
}

impl Drop for SplashTimer {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
