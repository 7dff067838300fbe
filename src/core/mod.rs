//! Core module for the portal's session, catalog and filtering logic

pub mod actions;
pub mod auth;
pub mod capabilities;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod models;
pub mod session;
pub mod splash;
pub mod storage;

/// Returns the current version of the `CampusPortal` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
