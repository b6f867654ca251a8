//! Credentials and token types.
//!
//! Secrets held by these types never show up in `Debug` output, so they can
//! pass through `tracing` fields and error reports safely.

mod credentials;
mod tokens;

pub use credentials::Credentials;
pub use tokens::{AccessToken, RefreshToken, TokenPair};
