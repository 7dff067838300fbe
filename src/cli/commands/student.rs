//! Student screen: service tiles gated by the session

use crate::commands::session::{print_profile, Sessions};
use crate::console::Console;
use campus_portal::actions::{open_service, ServiceOutcome};
use campus_portal::catalog;
use campus_portal::filter::{count_label, FilterState};
use campus_portal::warn;

fn is_known_category(id: &str) -> bool {
    catalog::service_categories().iter().any(|c| c.id == id)
}

/// Handle `services`
pub fn list(state: &FilterState, sessions: &Sessions) {
    if !is_known_category(&state.category) {
        warn!("Unknown service category '{}'", state.category);
    }

    let session = sessions.load();

    println!("\n=== Student Portal ===\n");
    match &session {
        Some(record) => print_profile(record),
        None => println!("  Guest mode: services marked 🔒 require login"),
    }

    let services = catalog::services();
    let visible = state.apply(&services);

    println!("\n{}\n", count_label(visible.len(), "service", ""));
    for service in visible {
        let lock = if service.requires_auth && session.is_none() {
            " 🔒"
        } else {
            ""
        };
        println!("[{}] {}{lock}", service.id, service.title);
        println!("    {}", service.description);
    }
}

/// Handle `service`
pub fn open(id: &str, sessions: &Sessions, console: &Console) -> Result<(), String> {
    let service = catalog::services()
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| format!("No service with id '{id}'"))?;

    let session = sessions.load();
    match open_service(&service, session.as_ref(), console, console) {
        ServiceOutcome::Opened => Ok(()),
        ServiceOutcome::LoginRequired { login_offered } => {
            if login_offered {
                println!("Run `campusportal login --student-id <ID>`");
            }
            Err(format!("'{}' requires login", service.title))
        }
    }
}
