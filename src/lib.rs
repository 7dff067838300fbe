//! Shared library for `CampusPortal`
//! Session, authentication, catalog and filtering logic used by the CLI

pub mod core;
pub mod logger;

pub use crate::core::*;
