//! Response types.
//!
//! The service's response schemas are not fixed, so both responses keep the
//! raw JSON and expose only what the flow needs from it.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::auth::{AccessToken, RefreshToken, TokenPair};
use crate::error::Error;

/// Response from the organization token endpoint.
///
/// `Debug` lists the top-level keys only, since the body carries tokens.
#[derive(Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LoginResponse(Value);

impl LoginResponse {
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// Returns the raw JSON body.
    pub fn as_json(&self) -> &Value {
        &self.0
    }

    /// Extract the `refresh` and `access` tokens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingToken`] if either key is absent or not a string.
    pub fn token_pair(&self) -> Result<TokenPair, Error> {
        let refresh = self.token("refresh")?;
        let access = self.token("access")?;
        Ok(TokenPair::new(
            RefreshToken::new(refresh),
            AccessToken::new(access),
        ))
    }

    fn token(&self, field: &'static str) -> Result<&str, Error> {
        self.0
            .get(field)
            .and_then(Value::as_str)
            .ok_or(Error::MissingToken { field })
    }
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = match &self.0 {
            Value::Object(map) => map.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        };
        f.debug_struct("LoginResponse").field("keys", &keys).finish()
    }
}

/// Response from the membership status endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MembershipStatus(Value);

impl MembershipStatus {
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// Returns the raw JSON body.
    pub fn as_json(&self) -> &Value {
        &self.0
    }

    /// Look up a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// Both responses of a complete login-then-verify run.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub login: LoginResponse,
    pub membership: MembershipStatus,
}
