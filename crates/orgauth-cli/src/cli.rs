//! CLI argument definitions.

use clap::{Args, Parser};

use orgauth::DEFAULT_HOST;
use orgauth::client::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT};

/// Log in to an organization and verify membership status.
#[derive(Parser, Debug)]
#[command(name = "orgauth")]
#[command(author, version = env!("ORGAUTH_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub check: CheckArgs,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Account username
    pub username: String,

    /// Account password
    pub password: String,

    /// Organization to log in to and check membership of
    pub organization: String,

    /// Deployment host (the service is reached at ps.<HOST>), or a full base URL
    #[arg(default_value = DEFAULT_HOST)]
    pub host: String,

    /// Pretty-print response JSON
    #[arg(long)]
    pub pretty: bool,

    /// Connect timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_CONNECT_TIMEOUT.as_secs())]
    pub connect_timeout: u64,

    /// Read timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_READ_TIMEOUT.as_secs())]
    pub read_timeout: u64,
}
