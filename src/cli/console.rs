//! Terminal implementations of the portal capabilities

use campus_portal::capabilities::{CapabilityError, Navigator, Notifier, ShareSheet, UrlOpener};
use campus_portal::models::Route;
use std::io::{self, BufRead, Write};

/// Prints navigation, notices and shares; confirmations read stdin
#[derive(Debug, Default)]
pub struct Console {
    /// Answer every confirmation with "yes" without prompting
    pub assume_yes: bool,
}

impl Console {
    /// Console that prompts on stdin for confirmations
    pub const fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }

    /// Ask for a value on stdin, keeping it out of argv and shell history
    pub fn prompt(&self, label: &str) -> String {
        print!("{label}: ");
        io::stdout().flush().ok();
        read_answer(&mut io::stdin().lock())
    }
}

/// One line of input without its line ending
fn read_answer(reader: &mut impl BufRead) -> String {
    let mut line = String::new();
    reader.read_line(&mut line).ok();
    line.trim_end_matches(|c| c == '\n' || c == '\r').to_string()
}

impl Navigator for Console {
    fn navigate(&self, route: Route) {
        println!("→ {route}");
    }

    fn back(&self) {
        println!("← back");
    }

    fn replace(&self, route: Route) {
        println!("↪ {route}");
    }
}

impl Notifier for Console {
    fn alert(&self, title: &str, message: &str) {
        println!("\n=== {title} ===\n");
        println!("{message}");
    }

    fn confirm(&self, title: &str, message: &str, accept_label: &str) -> bool {
        self.alert(title, message);
        if self.assume_yes {
            return true;
        }

        print!("\n{accept_label}? (y/n): ");
        io::stdout().flush().ok();

        let response = read_answer(&mut io::stdin().lock());
        let response = response.trim();
        response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
    }
}

impl UrlOpener for Console {
    fn open_url(&self, url: &str) -> Result<(), CapabilityError> {
        if url.trim().is_empty() {
            return Err(CapabilityError::OpenUrl(url.to_string()));
        }
        println!("✓ Opening {url}");
        Ok(())
    }
}

impl ShareSheet for Console {
    fn share(&self, title: &str, message: &str) -> Result<(), CapabilityError> {
        println!("\n=== Share: {title} ===\n");
        println!("{message}");
        Ok(())
    }
}
