//! Provisioning service HTTP client implementation.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, instrument, trace};

use crate::auth::{AccessToken, Credentials};
use crate::error::{DecodeError, Error, InvalidInputError, ProtocolError, TransportError};
use crate::types::ServiceUrl;

use super::endpoints::{self, AuthRequest};
use super::responses::{AuthOutcome, LoginResponse, MembershipStatus};

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Connect and read timeouts applied to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: Duration,
    pub read: Duration,
}

impl Timeouts {
    pub fn new(connect: Duration, read: Duration) -> Self {
        Self { connect, read }
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Self::new(DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT)
    }
}

/// HTTP client for the organization token and membership endpoints.
///
/// Requests are never retried; every failure is returned to the caller.
///
/// # Example
///
/// ```no_run
/// use orgauth::{Credentials, OrgClient, ServiceUrl};
///
/// # async fn example() -> Result<(), orgauth::Error> {
/// let client = OrgClient::new(ServiceUrl::from_host("testsliderule.org")?)?;
/// let creds = Credentials::new("alice", "hunter2", "sliderule");
///
/// let login = client.login(&creds).await?;
/// let tokens = login.token_pair()?;
/// let status = client.membership_status(tokens.access(), "sliderule").await?;
/// println!("{}", status.as_json());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OrgClient {
    client: reqwest::Client,
    base: ServiceUrl,
}

impl OrgClient {
    /// Create a client with the default timeouts.
    pub fn new(base: ServiceUrl) -> Result<Self, Error> {
        Self::with_timeouts(base, Timeouts::default())
    }

    pub fn with_timeouts(base: ServiceUrl, timeouts: Timeouts) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("orgauth/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(timeouts.connect)
            .read_timeout(timeouts.read)
            .build()
            .map_err(TransportError::from)?;

        Ok(Self { client, base })
    }

    /// Returns the service URL this client is configured for.
    pub fn base(&self) -> &ServiceUrl {
        &self.base
    }

    /// Exchange credentials for an organization token pair.
    ///
    /// The returned response may still lack tokens; see
    /// [`LoginResponse::token_pair`].
    #[instrument(skip(self, credentials), fields(base = %self.base, username = %credentials.username(), organization = %credentials.organization()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, Error> {
        let url = self.base.endpoint(endpoints::ORG_TOKEN);
        info!("Requesting organization token");
        debug!(%url, "POST");

        let request = AuthRequest::from(credentials);
        trace!(?request, "request body");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(&request)
            .send()
            .await?;

        let body = self.read_json(response).await?;
        debug!("Organization token response received");

        Ok(LoginResponse::new(body))
    }

    /// Check the membership status of `organization` using a bearer token.
    #[instrument(skip(self, access), fields(base = %self.base))]
    pub async fn membership_status(
        &self,
        access: &AccessToken,
        organization: &str,
    ) -> Result<MembershipStatus, Error> {
        let url = self
            .base
            .endpoint(&endpoints::membership_status(organization)?);
        info!("Requesting membership status");
        debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, bearer(access)?)
            .send()
            .await?;

        let body = self.read_json(response).await?;
        debug!("Membership status received");

        Ok(MembershipStatus::new(body))
    }

    /// Run the login and the membership check back to back.
    #[instrument(skip(self, credentials), fields(organization = %credentials.organization()))]
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<AuthOutcome, Error> {
        let login = self.login(credentials).await?;
        let tokens = login.token_pair()?;
        let membership = self
            .membership_status(tokens.access(), credentials.organization())
            .await?;

        Ok(AuthOutcome { login, membership })
    }

    /// Read a response body as JSON, mapping non-success statuses to errors.
    async fn read_json(&self, response: reqwest::Response) -> Result<Value, Error> {
        let status = response.status();
        trace!(status = %status, "service response");

        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ProtocolError::from_body(status.as_u16(), &body).into());
        }

        serde_json::from_slice(&body).map_err(|e| DecodeError::new(e, &body).into())
    }
}

/// Build a sensitive `Authorization: Bearer` header value.
fn bearer(token: &AccessToken) -> Result<HeaderValue, Error> {
    let mut value =
        HeaderValue::from_str(&format!("Bearer {}", token.as_str())).map_err(|_| {
            InvalidInputError::Token {
                reason: "contains characters not allowed in an HTTP header".to_string(),
            }
        })?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeouts() {
        let timeouts = Timeouts::default();
        assert_eq!(timeouts.connect, Duration::from_secs(60));
        assert_eq!(timeouts.read, Duration::from_secs(10));
    }

    #[test]
    fn client_creation() {
        let base = ServiceUrl::from_host("testsliderule.org").unwrap();
        let client = OrgClient::new(base.clone()).unwrap();
        assert_eq!(client.base(), &base);
    }

    #[test]
    fn bearer_header_value() {
        let value = bearer(&AccessToken::new("abc.def")).unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer abc.def");
        assert!(value.is_sensitive());
    }

    #[test]
    fn bearer_rejects_newlines() {
        let err = bearer(&AccessToken::new("abc\r\nX-Evil: 1")).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(InvalidInputError::Token { .. })));
    }
}
