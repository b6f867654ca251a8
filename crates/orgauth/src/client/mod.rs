//! HTTP client for the provisioning service.

mod endpoints;
mod http;
mod responses;

pub use http::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT, OrgClient, Timeouts};
pub use responses::{AuthOutcome, LoginResponse, MembershipStatus};
