//! Welcome screen with the cancellable splash wait

use std::time::Duration;

use crate::commands::session::Sessions;
use crate::console::Console;
use campus_portal::catalog;
use campus_portal::splash::{SplashOutcome, SplashTimer};
use campus_portal::{debug, verbose};

/// Handle `welcome`
///
/// The session is read before the wait starts. Ctrl-C cancels the wait and
/// leaves the route unchanged.
pub async fn run(sessions: &Sessions, delay_ms: u64, console: &Console) -> SplashOutcome {
    let has_session = sessions.is_logged_in();
    println!("\n{}", catalog::INSTITUTION_NAME);
    println!("Loading...");

    let timer = SplashTimer::new(Duration::from_millis(delay_ms));
    let cancel = timer.cancel_handle();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let outcome = timer.run(has_session, console).await;
    interrupt.abort();
    debug!("Splash finished: {outcome:?}");

    match outcome {
        SplashOutcome::Home => verbose!("Session found, opened home"),
        SplashOutcome::Welcome => {
            println!("\n  login      Log in with your student ID");
            println!("  home       Browse as guest");
            println!("  register   Create an account");
        }
        SplashOutcome::Cancelled => println!("✗ Cancelled"),
    }
    outcome
}
