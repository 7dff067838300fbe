//! Home screen: greeting, quick actions and headlines

use crate::commands::session::Sessions;
use crate::console::Console;
use campus_portal::actions::run_quick_action;
use campus_portal::catalog;

/// Headlines shown on the home screen
const HOME_HEADLINES: usize = 3;

/// Handle `home`
pub fn show(sessions: &Sessions) {
    match sessions.load() {
        Some(record) => println!("\nWelcome back, {}", record.profile.name),
        None => println!("\nWelcome to {}", catalog::INSTITUTION_NAME),
    }

    println!("\n--- Quick Actions ---");
    for action in catalog::quick_actions() {
        println!("  [{}] {:<15} {}", action.id, action.title, action.route);
    }

    println!("\n--- Latest News ---");
    for article in catalog::latest_news(HOME_HEADLINES) {
        println!("  {} · {}", article.date, article.title);
    }
}

/// Handle `go`
pub fn go(id: &str, console: &Console) -> Result<(), String> {
    let action = catalog::quick_actions()
        .into_iter()
        .find(|a| a.id == id)
        .ok_or_else(|| format!("No quick action with id '{id}'"))?;
    run_quick_action(&action, console);
    Ok(())
}
