//! Student profile and session models

use serde::{Deserialize, Serialize};

/// Snapshot of the student captured at login time
///
/// Stored as JSON under the `userData` key; field names are camelCase on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Full name (e.g., "John Doe")
    pub name: String,

    /// Student identifier used to log in
    pub student_id: String,

    /// Enrolled course title
    pub course: String,

    /// Year of study (e.g., "Year 2")
    pub year: String,

    /// Student email address
    pub email: String,
}

/// An active session: the issued token together with the cached profile
///
/// There is never a token without a profile or a profile without a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Opaque session token
    pub token: String,

    /// Cached profile
    pub profile: UserProfile,
}

impl SessionRecord {
    /// Create a session record
    #[must_use]
    pub const fn new(token: String, profile: UserProfile) -> Self {
        Self { token, profile }
    }

    /// Student identifier of the logged-in user
    #[must_use]
    pub fn student_id(&self) -> &str {
        &self.profile.student_id
    }
}

/// What a credential verifier hands back on success
pub type AuthGrant = SessionRecord;

/// Login form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Student identifier
    pub student_id: String,

    /// Password as typed
    pub password: String,
}

impl Credentials {
    /// Build credentials from borrowed strings
    #[must_use]
    pub fn new(student_id: &str, password: &str) -> Self {
        Self {
            student_id: student_id.to_string(),
            password: password.to_string(),
        }
    }

    /// Both fields carry a value
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.student_id.is_empty() && !self.password.is_empty()
    }
}

/// Registration form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    /// Full name
    pub full_name: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Student identifier
    pub student_id: String,
    /// Course the student is enrolling in
    pub course: String,
    /// Chosen password
    pub password: String,
    /// Password typed a second time
    pub confirm_password: String,
}

impl Registration {
    /// Every form field, in display order
    #[must_use]
    pub fn fields(&self) -> [&str; 7] {
        [
            &self.full_name,
            &self.email,
            &self.phone,
            &self.student_id,
            &self.course,
            &self.password,
            &self.confirm_password,
        ]
    }

    /// No field is empty or whitespace-only
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(|field| !field.trim().is_empty())
    }
}
