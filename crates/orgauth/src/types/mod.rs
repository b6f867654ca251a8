//! Validated value types.

mod service_url;

pub use service_url::{DEFAULT_HOST, ServiceUrl};
