//! Data models for `CampusPortal`

pub mod contact;
pub mod course;
pub mod news;
pub mod portal;
pub mod profile;
pub mod service;

pub use contact::{Contact, ContactKind};
pub use course::{Course, Department};
pub use news::{NewsArticle, NewsCategory};
pub use portal::{MenuAction, MenuItem, QuickAction, Route};
pub use profile::{AuthGrant, Credentials, Registration, SessionRecord, UserProfile};
pub use service::{Service, ServiceCategory};
