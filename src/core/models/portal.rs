//! Screen routes, quick actions and menu entries

use serde::{Deserialize, Serialize};
use std::fmt;

/// Screens the portal can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Splash / welcome screen
    Welcome,
    /// Home tab
    Home,
    /// Academics tab (courses)
    Academics,
    /// Student tab (services, login)
    Student,
    /// News tab
    News,
    /// More tab (contacts, menu)
    More,
    /// Login form
    Login,
    /// Registration form
    Register,
}

impl Route {
    /// Path form of the route (e.g., `/academics`)
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Welcome => "/",
            Self::Home => "/home",
            Self::Academics => "/academics",
            Self::Student => "/student",
            Self::News => "/news",
            Self::More => "/more",
            Self::Login => "/auth/login",
            Self::Register => "/auth/register",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Home-screen shortcut that jumps to another tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    /// Stable identifier
    pub id: String,
    /// Tile title
    pub title: String,
    /// Destination
    pub route: Route,
}

impl QuickAction {
    /// Create a quick action
    #[must_use]
    pub fn new(id: &str, title: &str, route: Route) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            route,
        }
    }
}

/// What a "More" menu entry does when opened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuAction {
    /// Show a notice with the given message
    Notice(String),
    /// Open an external URL
    OpenUrl(String),
    /// Show the institution description
    About,
    /// Show emergency numbers and offer to call security
    EmergencyContacts,
}

/// An entry in the "More" menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Stable identifier
    pub id: String,
    /// Entry title
    pub title: String,
    /// Behavior when opened
    pub action: MenuAction,
}

impl MenuItem {
    /// Create a menu entry
    #[must_use]
    pub fn new(id: &str, title: &str, action: MenuAction) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            action,
        }
    }
}
