//! Credential verification
//!
//! Screens never decide whether credentials are good. They hand them to a
//! [`CredentialVerifier`], which returns the grant (token + profile) or an
//! [`AuthError`]. Form validation runs first and never touches a verifier.

use thiserror::Error;

use crate::core::models::{AuthGrant, Credentials, Registration, UserProfile};

/// Default minimum password length for new accounts
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// Authentication and form validation failures
///
/// The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// A required form field is empty
    #[error("Please fill in all fields")]
    MissingFields,

    /// Password and confirmation differ
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Password shorter than the configured minimum
    #[error("Password must be at least {min} characters long")]
    PasswordTooShort {
        /// Required minimum length
        min: usize,
    },

    /// The verifier refused the credentials
    #[error("Login failed: {0}")]
    Rejected(String),

    /// The verifier could not be reached or failed internally
    #[error("Login failed. Please try again.")]
    Unavailable,
}

/// Turns credentials into a session grant
pub trait CredentialVerifier {
    /// Check login credentials
    ///
    /// # Errors
    /// Returns [`AuthError::Rejected`] when the credentials are not accepted
    fn verify(&self, credentials: &Credentials) -> Result<AuthGrant, AuthError>;

    /// Create an account from a validated registration form
    ///
    /// # Errors
    /// Returns an error when the account cannot be created
    fn enroll(&self, registration: &Registration) -> Result<AuthGrant, AuthError>;
}

/// Reject a login form with an empty field
///
/// # Errors
/// Returns [`AuthError::MissingFields`] when either field is empty
pub fn validate_credentials(credentials: &Credentials) -> Result<(), AuthError> {
    if credentials.is_complete() {
        Ok(())
    } else {
        Err(AuthError::MissingFields)
    }
}

/// Validate a registration form
///
/// Checks run in order: every field filled, passwords equal, password long
/// enough. Length is counted in characters.
///
/// # Errors
/// Returns the first failing check
pub fn validate_registration(
    registration: &Registration,
    min_password_length: usize,
) -> Result<(), AuthError> {
    if !registration.is_complete() {
        return Err(AuthError::MissingFields);
    }
    if registration.password != registration.confirm_password {
        return Err(AuthError::PasswordMismatch);
    }
    if registration.password.chars().count() < min_password_length {
        return Err(AuthError::PasswordTooShort {
            min: min_password_length,
        });
    }
    Ok(())
}

/// Demo verifier shipped with the portal
///
/// Accepts any complete credentials and issues a fixed token with a profile
/// built from demo data and the submitted student id. Swap in a real
/// [`CredentialVerifier`] to check credentials against an identity system.
#[derive(Debug, Clone)]
pub struct DemoVerifier {
    token: String,
    template: UserProfile,
}

impl Default for DemoVerifier {
    fn default() -> Self {
        Self {
            token: "mock-token-123".to_string(),
            template: UserProfile {
                name: "John Doe".to_string(),
                student_id: String::new(),
                course: "Diploma in Computer Science".to_string(),
                year: "Year 2".to_string(),
                email: "john.doe@student.kisiipoly.ac.ke".to_string(),
            },
        }
    }
}

impl DemoVerifier {
    /// Demo verifier with the stock profile
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Token this verifier issues
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl CredentialVerifier for DemoVerifier {
    fn verify(&self, credentials: &Credentials) -> Result<AuthGrant, AuthError> {
        validate_credentials(credentials)?;
        let profile = UserProfile {
            student_id: credentials.student_id.clone(),
            ..self.template.clone()
        };
        Ok(AuthGrant::new(self.token.clone(), profile))
    }

    fn enroll(&self, registration: &Registration) -> Result<AuthGrant, AuthError> {
        let profile = UserProfile {
            name: registration.full_name.trim().to_string(),
            student_id: registration.student_id.trim().to_string(),
            course: registration.course.trim().to_string(),
            year: "Year 1".to_string(),
            email: registration.email.trim().to_string(),
        };
        Ok(AuthGrant::new(self.token.clone(), profile))
    }
}
