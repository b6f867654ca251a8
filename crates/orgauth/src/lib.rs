//! orgauth - organization login and membership checks
//!
//! Talks to the provisioning service of a deployment (`ps.<host>`) in two
//! steps: exchange a username, password and organization for a token pair,
//! then present the access token to confirm membership in that organization.
//!
//! # Example
//!
//! ```no_run
//! use orgauth::{Credentials, OrgClient, ServiceUrl};
//!
//! # async fn example() -> Result<(), orgauth::Error> {
//! let client = OrgClient::new(ServiceUrl::parse("testsliderule.org")?)?;
//! let creds = Credentials::new("alice", "hunter2", "sliderule");
//!
//! let outcome = client.authenticate(&creds).await?;
//! println!("{}", outcome.membership.as_json());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::{AccessToken, Credentials, RefreshToken, TokenPair};
pub use client::{AuthOutcome, LoginResponse, MembershipStatus, OrgClient, Timeouts};
pub use error::Error;
pub use types::{DEFAULT_HOST, ServiceUrl};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
