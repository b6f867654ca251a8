//! Tests that run the `orgauth` binary against a mock provisioning service.

use std::process::Output;

use serde_json::json;
use tokio::process::Command;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the CLI binary with arguments, colors disabled.
async fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_orgauth"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .await
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Parse the JSON that follows `label: ` on one of the output lines.
fn labeled(out: &str, label: &str) -> Option<serde_json::Value> {
    let prefix = format!("{}: ", label);
    out.lines()
        .find_map(|line| line.strip_prefix(&prefix))
        .and_then(|json| serde_json::from_str(json).ok())
}

#[tokio::test]
async fn test_prints_both_responses() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/org_token/"))
        .and(body_json(json!({
            "username": "alice",
            "password": "secret123",
            "org_name": "sliderule"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "refresh": "cli-refresh",
            "access": "cli-access"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/membership_status/sliderule/"))
        .and(header("authorization", "Bearer cli-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"active": true})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(&["alice", "secret123", "sliderule", &server.uri()]).await;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert_eq!(
        labeled(&out, "Login Response"),
        Some(json!({"refresh": "cli-refresh", "access": "cli-access"}))
    );
    assert_eq!(
        labeled(&out, "Validation Response"),
        Some(json!({"active": true}))
    );
}

#[tokio::test]
async fn test_missing_token_skips_membership_check() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/org_token/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"detail": "something odd"})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_cli(&["alice", "secret123", "sliderule", &server.uri()]).await;
    assert!(!output.status.success());

    // The login response is still shown before failing
    assert_eq!(
        labeled(&stdout(&output), "Login Response"),
        Some(json!({"detail": "something odd"}))
    );
    assert!(stderr(&output).contains("refresh"));
}

#[tokio::test]
async fn test_rejected_login_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/org_token/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "No active account found with the given credentials"
        })))
        .mount(&server)
        .await;

    let output = run_cli(&["alice", "wrong", "sliderule", &server.uri()]).await;
    assert!(!output.status.success());

    let out = stdout(&output);
    assert_eq!(
        labeled(&out, "Login Response"),
        Some(json!({"detail": "No active account found with the given credentials"}))
    );
    assert!(labeled(&out, "Validation Response").is_none());

    let err = stderr(&output);
    assert!(err.contains("Authentication request failed"));
    assert!(err.contains("401"));
}

#[tokio::test]
async fn test_non_member_response_is_printed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/org_token/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "refresh": "cli-refresh",
            "access": "cli-access"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/membership_status/sliderule/"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "status": false,
            "error_msg": "not a member"
        })))
        .mount(&server)
        .await;

    let output = run_cli(&["alice", "secret123", "sliderule", &server.uri()]).await;
    assert!(!output.status.success());

    assert_eq!(
        labeled(&stdout(&output), "Validation Response"),
        Some(json!({"status": false, "error_msg": "not a member"}))
    );
    let err = stderr(&output);
    assert!(err.contains("Membership status request failed"));
    assert!(err.contains("403"));
}

#[tokio::test]
async fn test_unreachable_host_fails() {
    let output = run_cli(&["alice", "secret123", "sliderule", "http://127.0.0.1:1"]).await;
    assert!(!output.status.success());
    assert!(stderr(&output).contains("transport error"));
}

#[tokio::test]
async fn test_invalid_host_rejected() {
    let output = run_cli(&["alice", "secret123", "sliderule", "example.org/path"]).await;
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid host"));
}

#[tokio::test]
async fn test_missing_arguments() {
    let output = run_cli(&["alice"]).await;
    assert!(!output.status.success());
    assert!(stderr(&output).contains("<PASSWORD>"));
}
