//! Bearer token types.

use std::fmt;

/// An access token for the membership check.
///
/// Access tokens are short-lived JWTs issued by the organization token
/// endpoint.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap an access token obtained elsewhere.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers.
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// A refresh token returned alongside the access token.
///
/// This crate does not refresh sessions; the token is handed back so callers
/// can keep it if they want to.
#[derive(Clone, PartialEq, Eq)]
pub struct RefreshToken(String);

impl RefreshToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefreshToken").field(&"[REDACTED]").finish()
    }
}

/// The `refresh`/`access` pair from a login response.
#[derive(Debug, Clone)]
pub struct TokenPair {
    refresh: RefreshToken,
    access: AccessToken,
}

impl TokenPair {
    pub fn new(refresh: RefreshToken, access: AccessToken) -> Self {
        Self { refresh, access }
    }

    pub fn access(&self) -> &AccessToken {
        &self.access
    }

    pub fn refresh(&self) -> &RefreshToken {
        &self.refresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_hides_value_in_debug() {
        let token = AccessToken::new("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("eyJ"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn token_pair_hides_both_values_in_debug() {
        let pair = TokenPair::new(
            RefreshToken::new("refresh_value_here"),
            AccessToken::new("access_value_here"),
        );
        let debug = format!("{:?}", pair);
        assert!(!debug.contains("refresh_value_here"));
        assert!(!debug.contains("access_value_here"));
    }

    #[test]
    fn token_pair_accessors() {
        let pair = TokenPair::new(RefreshToken::new("r"), AccessToken::new("a"));
        assert_eq!(pair.refresh().expose(), "r");
        assert_eq!(pair.access().as_str(), "a");
    }
}
