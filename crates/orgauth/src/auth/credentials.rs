//! Login credentials type.

use std::fmt;

/// Login credentials for an organization token request.
///
/// Holds the username, password and the organization the token should be
/// scoped to.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use orgauth::Credentials;
///
/// let creds = Credentials::new("alice", "hunter2", "sliderule");
/// assert_eq!(creds.organization(), "sliderule");
/// ```
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
    organization: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        organization: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            organization: organization.into(),
        }
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the organization name.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when constructing authentication requests.
    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("organization", &self.organization)
            .finish()
    }
}
