//! Institution contact entries

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of contact channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    /// Telephone number, opened with `tel:`
    Phone,
    /// Email address, opened with `mailto:`
    Email,
    /// Website, opened in the browser
    Website,
    /// Physical location, opened in maps
    Location,
}

impl ContactKind {
    /// Parse a kind name (case-insensitive)
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "phone" | "call" | "tel" => Some(Self::Phone),
            "email" | "mail" => Some(Self::Email),
            "website" | "web" => Some(Self::Website),
            "location" | "map" | "maps" => Some(Self::Location),
            _ => None,
        }
    }
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Website => "Website",
            Self::Location => "Location",
        };
        f.write_str(label)
    }
}

/// A contact line on the "More" screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Channel kind
    pub kind: ContactKind,
    /// Human-readable value (e.g., "+254 700 123 456")
    pub value: String,
    /// URL handed to the device when the contact is opened
    pub url: String,
}

impl Contact {
    /// Create a contact entry
    #[must_use]
    pub fn new(kind: ContactKind, value: &str, url: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            url: url.to_string(),
        }
    }
}
