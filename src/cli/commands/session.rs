//! Login, registration and logout handlers

use crate::console::Console;
use campus_portal::actions::confirm_logout;
use campus_portal::auth::DemoVerifier;
use campus_portal::config::Config;
use campus_portal::models::{Credentials, Registration, Route, SessionRecord};
use campus_portal::session::SessionStore;
use campus_portal::storage::FileStore;
use campus_portal::{capabilities::Navigator, info, verbose};

/// Session store used by every command
pub type Sessions = SessionStore<FileStore, DemoVerifier>;

/// Open the session store configured in `config`
pub fn open(config: &Config) -> Sessions {
    let path = config.session_file_path();
    info!("Session storage: {}", path.display());
    SessionStore::new(FileStore::new(path), DemoVerifier::new())
        .with_min_password_length(config.portal.min_password_length)
}

/// Print a profile card
pub fn print_profile(record: &SessionRecord) {
    let profile = &record.profile;
    println!("  Name:       {}", profile.name);
    println!("  Student ID: {}", profile.student_id);
    println!("  Course:     {}", profile.course);
    println!("  Year:       {}", profile.year);
    println!("  Email:      {}", profile.email);
}

/// Handle `login`
pub fn login(sessions: &Sessions, credentials: &Credentials, console: &Console) -> Result<(), String> {
    let record = sessions.login(credentials).map_err(|e| e.to_string())?;
    println!("✓ Login successful!");
    verbose!("Token stored for {}", record.student_id());
    print_profile(&record);
    console.replace(Route::Student);
    Ok(())
}

/// Handle `register`
pub fn register(
    sessions: &Sessions,
    registration: &Registration,
    console: &Console,
) -> Result<(), String> {
    let record = sessions.register(registration).map_err(|e| e.to_string())?;
    println!("✓ Registration successful. Your account has been created.");
    print_profile(&record);
    console.replace(Route::Home);
    Ok(())
}

/// Handle `logout`
pub fn logout(sessions: &Sessions, console: &Console) -> Result<(), String> {
    if !sessions.is_logged_in() {
        // Still clear any partial or unreadable record
        sessions.logout().map_err(|e| e.to_string())?;
        println!("✓ No active session");
        return Ok(());
    }
    if confirm_logout(sessions, console) {
        println!("✓ Logged out");
    } else {
        println!("✗ Logout cancelled");
    }
    Ok(())
}

/// Handle `whoami`
pub fn whoami(sessions: &Sessions) {
    match sessions.load() {
        Some(record) => {
            println!("\n=== Student Profile ===\n");
            print_profile(&record);
        }
        None => println!("Browsing as guest. Run `campusportal login` to sign in."),
    }
}
