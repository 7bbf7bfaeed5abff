//! Integration tests for the `doorlog` binary.
//!
//! Argument parsing, configuration precedence and end-to-end output are
//! checked against a wiremock stand-in for the door controller.
#![allow(clippy::unwrap_used)]

use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GRANTED_LINE: &str = "       1, 2021-01-01T09:00:00, Front Lobby                     , 'Alice                           ', Card                    , AccessGranted , Normal             \n";

const CHALLENGE: &str =
    r#"Digest realm="AXIS_ACCC8E000000", nonce="00a1b2c3d4e5f6", algorithm=MD5, qop="auth""#;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `doorlog` binary with env isolation.
///
/// Clears the device and doorlog env vars and points config directories
/// at a nonexistent path so tests never read the user's real settings.
fn doorlog_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("doorlog");
    cmd.env("HOME", "/tmp/doorlog-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/doorlog-test-nonexistent")
        .env_remove("AxisAddress")
        .env_remove("AxisUser")
        .env_remove("AxisPassword")
        .env_remove("axisHttpMethod")
        .env_remove("DOORLOG_CONFIG")
        .env_remove("DOORLOG_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

/// An address nothing listens on.
fn dead_address() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().to_string()
}

async fn mount_list(server: &MockServer, endpoint: &str, action: &str, reply: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .and(body_json(json!({ action: {} })))
        .respond_with(reply)
        .mount(server)
        .await;
}

/// Reference lists for one door, one access point and one user.
async fn mount_reference(server: &MockServer) {
    mount_list(
        server,
        "/vapix/pacs",
        "axudb:GetUserList",
        ResponseTemplate::new(200).set_body_json(json!({
            "User": [{ "token": "U1", "Name": "Alice" }]
        })),
    )
    .await;
    mount_list(
        server,
        "/vapix/doorcontrol",
        "axtdc:GetDoorList",
        ResponseTemplate::new(200).set_body_json(json!({
            "Door": [{ "token": "DOOR-ENTITY-1", "Name": "Front Lobby" }]
        })),
    )
    .await;
    mount_list(
        server,
        "/vapix/pacs",
        "pacsaxis:GetAccessPointList",
        ResponseTemplate::new(200).set_body_json(json!({
            "AccessPoint": [{ "token": "AP1", "Entity": "DOOR-ENTITY-1" }]
        })),
    )
    .await;
}

async fn mount_events(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/vapix/eventlogger"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Event": [{
                "rowid": 1,
                "HumanReadableTime": "2021-01-01T09:00:00",
                "KeyValues": [
                    { "Key": "AccessPointToken", "Value": "AP1" },
                    { "Key": "topic1", "Value": "AccessGranted" },
                    { "Key": "topic2", "Value": "Normal" },
                    { "Key": "CredentialHolderName", "Value": "U1" },
                    { "Key": "CredentialType", "Value": "Card" }
                ]
            }]
        })))
        .mount(server)
        .await;
}

async fn mount_device(server: &MockServer) {
    mount_reference(server).await;
    mount_events(server).await;
}

/// Body of the event logger request, if one was made.
async fn events_request_body(server: &MockServer) -> Option<serde_json::Value> {
    server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .find(|r| r.url.path() == "/vapix/eventlogger")
        .map(|r| serde_json::from_slice(&r.body).unwrap())
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_help_lists_report_flags() {
    doorlog_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("--ipAddress")
            .and(predicate::str::contains("--fromDate"))
            .and(predicate::str::contains("--httpmethod"))
            .and(predicate::str::contains("completions")),
    );
}

#[test]
fn test_version_flag() {
    doorlog_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("doorlog"));
}

#[test]
fn test_completions_bash() {
    doorlog_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("doorlog"));
}

#[test]
fn test_completions_zsh() {
    doorlog_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef doorlog"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    doorlog_cmd().arg("--bogus").assert().code(2);
}

// ── Configuration ───────────────────────────────────────────────────

#[test]
fn test_missing_config_names_what_to_set() {
    doorlog_cmd()
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("AxisAddress")
                .and(predicate::str::contains("AxisUser"))
                .and(predicate::str::contains("AxisPassword")),
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_password_makes_no_requests() {
    let server = MockServer::start().await;
    mount_device(&server).await;

    doorlog_cmd()
        .env("AxisAddress", server.address().to_string())
        .env("AxisUser", "root")
        .env("axisHttpMethod", "HTTP")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("AxisPassword"));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_from_date_makes_no_requests() {
    let server = MockServer::start().await;
    mount_device(&server).await;

    doorlog_cmd()
        .args(["--ipAddress", &server.address().to_string()])
        .args(["--user", "root", "--password", "pass", "--httpmethod", "HTTP"])
        .args(["--fromDate", "last tuesday"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("fromDate"));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_environment_only() {
    let server = MockServer::start().await;
    mount_device(&server).await;

    let output = doorlog_cmd()
        .env("AxisAddress", server.address().to_string())
        .env("AxisUser", "root")
        .env("AxisPassword", "pass")
        .env("axisHttpMethod", "HTTP")
        .args(["--fromDate", "2021-01-01T00:00:00"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), GRANTED_LINE);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_flags_beat_environment() {
    let server = MockServer::start().await;

    // Digest-protected device so the username reaches the wire.
    Mock::given(method("POST"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).insert_header("WWW-Authenticate", CHALLENGE))
        .with_priority(2)
        .mount(&server)
        .await;

    doorlog_cmd()
        .env("AxisAddress", dead_address())
        .env("AxisUser", "env-user")
        .env("AxisPassword", "env-pass")
        .env("axisHttpMethod", "HTTPS")
        .args(["--ipAddress", &server.address().to_string()])
        .args(["--user", "flag-user", "--httpmethod", "HTTP"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let requests = server.received_requests().await.unwrap();
    let usernames: Vec<String> = requests
        .iter()
        .filter_map(|r| r.headers.get("authorization"))
        .map(|v| v.to_str().unwrap().to_owned())
        .collect();
    assert_eq!(usernames.len(), 4, "three reference lists and the event fetch");
    assert!(
        usernames.iter().all(|a| a.contains(r#"username="flag-user""#)),
        "got: {usernames:?}"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_config_file_supplies_settings() {
    let server = MockServer::start().await;
    mount_device(&server).await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "address = \"{}\"\nuser = \"root\"\npassword = \"pass\"\nhttpmethod = \"HTTP\"\nfrom_date = \"2021-01-01\"",
        server.address()
    )
    .unwrap();

    let output = doorlog_cmd()
        .arg("--config")
        .arg(file.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), GRANTED_LINE);

    let body = events_request_body(&server).await.unwrap();
    assert_eq!(
        body["axlog:FetchEvents3"]["FilterSets"][0]["Start"],
        "2021-01-01T00:00:00"
    );
}

#[test]
fn test_explicit_missing_config_file() {
    doorlog_cmd()
        .args(["--config", "/tmp/doorlog-test-nonexistent/config.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_default_from_date_is_midnight_today() {
    let server = MockServer::start().await;
    mount_device(&server).await;

    doorlog_cmd()
        .args(["--ipAddress", &server.address().to_string()])
        .args(["--user", "root", "--password", "pass", "--httpmethod", "HTTP"])
        .assert()
        .success();

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let body = events_request_body(&server).await.unwrap();
    let start = body["axlog:FetchEvents3"]["FilterSets"][1]["Start"]
        .as_str()
        .unwrap()
        .to_owned();
    assert_eq!(start, format!("{today}T00:00:00"));
}

// ── Device failures ─────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_event_fetch_exits_zero() {
    let server = MockServer::start().await;
    mount_reference(&server).await;
    Mock::given(method("POST"))
        .and(path("/vapix/eventlogger"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad Start"))
        .mount(&server)
        .await;

    doorlog_cmd()
        .args(["--ipAddress", &server.address().to_string()])
        .args(["--user", "root", "--password", "pass", "--httpmethod", "HTTP"])
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("HTTP 400"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_reference_list_prints_placeholders() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        "/vapix/pacs",
        "axudb:GetUserList",
        ResponseTemplate::new(200).set_body_json(json!({
            "User": [{ "token": "U1", "Name": "Alice" }]
        })),
    )
    .await;
    mount_list(
        &server,
        "/vapix/doorcontrol",
        "axtdc:GetDoorList",
        ResponseTemplate::new(500),
    )
    .await;
    mount_list(
        &server,
        "/vapix/pacs",
        "pacsaxis:GetAccessPointList",
        ResponseTemplate::new(200).set_body_json(json!({
            "AccessPoint": [{ "token": "AP1", "Entity": "DOOR-ENTITY-1" }]
        })),
    )
    .await;
    mount_events(&server).await;

    let output = doorlog_cmd()
        .args(["--ipAddress", &server.address().to_string()])
        .args(["--user", "root", "--password", "pass", "--httpmethod", "HTTP"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("?key?"), "got: {stdout}");
    assert!(stdout.contains("'Alice"), "got: {stdout}");
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("door list unavailable"),
        "expected a warning on stderr"
    );
}

#[test]
fn test_unreachable_device_is_connection_error() {
    doorlog_cmd()
        .args(["--ipAddress", &dead_address()])
        .args(["--user", "root", "--password", "pass", "--httpmethod", "HTTP"])
        .assert()
        .code(7);
}
