//! CLI command handlers for `CampusPortal`.
//!
//! Each screen of the portal is driven by its own submodule. Handlers return
//! a user-facing message on failure; `main` prints it and sets the exit code.

pub mod academics;
pub mod config;
pub mod home;
pub mod more;
pub mod news;
pub mod session;
pub mod student;
pub mod welcome;
