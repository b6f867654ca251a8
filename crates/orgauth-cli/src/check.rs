//! Login and membership check.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use orgauth::error::{Error, ProtocolError};
use orgauth::{Credentials, OrgClient, ServiceUrl, Timeouts};

use crate::cli::CheckArgs;
use crate::output;

const LOGIN_LABEL: &str = "Login Response";
const VALIDATION_LABEL: &str = "Validation Response";

pub async fn run(args: &CheckArgs) -> Result<()> {
    let base = ServiceUrl::parse(&args.host).context("Invalid host")?;
    let credentials = Credentials::new(&args.username, &args.password, &args.organization);
    let timeouts = Timeouts::new(
        Duration::from_secs(args.connect_timeout),
        Duration::from_secs(args.read_timeout),
    );

    let client = OrgClient::with_timeouts(base, timeouts).context("Failed to build HTTP client")?;
    info!(base = %client.base(), "Using provisioning service");

    let login = match client.login(&credentials).await {
        Ok(login) => login,
        Err(err) => {
            print_rejected_body(LOGIN_LABEL, &err, args.pretty)?;
            return Err(err).context("Authentication request failed");
        }
    };

    // Printed before token extraction so a partial response is still visible
    output::labeled_json(LOGIN_LABEL, login.as_json(), args.pretty)?;

    let tokens = login
        .token_pair()
        .context("Login response did not contain a token pair")?;

    let membership = match client
        .membership_status(tokens.access(), credentials.organization())
        .await
    {
        Ok(membership) => membership,
        Err(err) => {
            print_rejected_body(VALIDATION_LABEL, &err, args.pretty)?;
            return Err(err).context("Membership status request failed");
        }
    };

    output::labeled_json(VALIDATION_LABEL, membership.as_json(), args.pretty)?;

    Ok(())
}

/// Print the JSON body of a non-success response, if it had one.
fn print_rejected_body(label: &str, err: &Error, pretty: bool) -> Result<()> {
    if let Error::Protocol(ProtocolError {
        body: Some(body), ..
    }) = err
    {
        output::labeled_json(label, body, pretty)?;
    }
    Ok(())
}
