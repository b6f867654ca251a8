//! Provisioning service URL type.

use std::fmt;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// Host used when none is given.
pub const DEFAULT_HOST: &str = "testsliderule.org";

/// A validated base URL of the provisioning service.
///
/// The service lives on the `ps.` subdomain of a deployment host, so
/// [`ServiceUrl::from_host`] turns `example.org` into `https://ps.example.org`.
/// A full base URL can be given instead through [`ServiceUrl::new`]; it must
/// use HTTPS, or plain HTTP on a loopback host.
///
/// # Example
///
/// ```
/// use orgauth::ServiceUrl;
///
/// let base = ServiceUrl::from_host("testsliderule.org").unwrap();
/// assert_eq!(
///     base.endpoint(&["api", "org_token"]).as_str(),
///     "https://ps.testsliderule.org/api/org_token/"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServiceUrl(Url);

impl ServiceUrl {
    /// Create a service URL from a full base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| invalid(s, e.to_string()))?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Create a service URL for the `ps.` subdomain of a deployment host.
    ///
    /// The host may carry a port (`example.org:8443`) but nothing else.
    pub fn from_host(host: impl AsRef<str>) -> Result<Self, Error> {
        let host = host.as_ref();
        // Only a hostname and optional port may go after the `ps.` prefix
        if host.is_empty() {
            return Err(invalid(host, "host is empty"));
        }
        if let Some(c) = host
            .chars()
            .find(|&c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '@' | '\\'))
        {
            return Err(invalid(host, format!("host must not contain '{}'", c)));
        }

        Self::new(format!("https://ps.{}", host))
    }

    /// Interpret user input as either a full base URL or a bare host.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, Error> {
        let input = input.as_ref();
        if input.contains("://") {
            Self::new(input)
        } else {
            Self::from_host(input)
        }
    }

    /// Returns the URL of an API endpoint below this base.
    ///
    /// Each segment is percent-encoded on its own, so a segment containing
    /// `/` stays a single path component. The result always ends in `/`.
    /// Segments equal to `.` or `..` are dropped, so callers must refuse them.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.0.clone();
        // validate() rejects cannot-be-a-base URLs, so this always succeeds
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments).push("");
        }
        url
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        // Must be absolute
        if url.cannot_be_a_base() {
            return Err(invalid(original, "must be an absolute URL"));
        }

        // Must be HTTPS (or HTTP for loopback)
        let scheme = url.scheme();
        let is_loopback = match url.host() {
            Some(url::Host::Domain(d)) => d == "localhost",
            Some(url::Host::Ipv4(ip)) => ip.is_loopback(),
            Some(url::Host::Ipv6(ip)) => ip.is_loopback(),
            None => false,
        };

        if scheme != "https" && !(scheme == "http" && is_loopback) {
            return Err(invalid(
                original,
                "must use HTTPS (HTTP allowed only for loopback hosts)",
            ));
        }

        // Must have a host
        if url.host_str().is_none() {
            return Err(invalid(original, "must have a host"));
        }

        // Endpoints are appended to the path, nothing may follow it
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid(original, "must not have a query or fragment"));
        }

        Ok(())
    }
}

fn invalid(value: &str, reason: impl Into<String>) -> Error {
    InvalidInputError::ServiceUrl {
        value: value.to_string(),
        reason: reason.into(),
    }
    .into()
}

impl fmt::Display for ServiceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ServiceUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
