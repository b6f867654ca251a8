//! Endpoint paths and request bodies.

use serde::Serialize;
use std::fmt;

use crate::auth::Credentials;
use crate::error::{Error, InvalidInputError};

/// `/api/org_token/`
pub const ORG_TOKEN: &[&str] = &["api", "org_token"];

/// `/api/membership_status/<organization>/`
///
/// URL path handling drops `.` and `..` segments, so those names (and the
/// empty name) would address a different endpoint and are refused.
pub fn membership_status(organization: &str) -> Result<[&str; 3], Error> {
    if matches!(organization, "" | "." | "..") {
        return Err(InvalidInputError::Organization {
            value: organization.to_string(),
            reason: "not usable as a path segment".to_string(),
        }
        .into());
    }
    Ok(["api", "membership_status", organization])
}

/// Request body for the organization token endpoint.
#[derive(Serialize)]
pub struct AuthRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub org_name: &'a str,
}

impl<'a> From<&'a Credentials> for AuthRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            username: credentials.username(),
            password: credentials.password(),
            org_name: credentials.organization(),
        }
    }
}

impl fmt::Debug for AuthRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("org_name", &self.org_name)
            .finish()
    }
}
