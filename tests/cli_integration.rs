use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex};
use std::thread;

use serde_json::json;

type Requests = Arc<Mutex<Vec<String>>>;

/// Minimal HTTP/1.1 responder: one request per connection, then close.
fn spawn_api<F>(route: F) -> (String, Requests)
where
    F: Fn(&str, Option<&str>) -> (u16, String) + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub api");
    let addr = listener.local_addr().expect("local addr");
    let requests: Requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { continue };
            let (target, auth) = read_request(&stream);
            seen.lock().expect("lock").push(target.clone());
            let (status, body) = route(&target, auth.as_deref());
            write_response(stream, status, &body);
        }
    });

    (format!("http://{addr}/v3"), requests)
}

fn read_request(stream: &TcpStream) -> (String, Option<String>) {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line).expect("request line");
    let target = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or_default()
        .to_string();

    let mut auth = None;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
            break;
        }
        if let Some((name, value)) = line.split_once(':')
            && name.eq_ignore_ascii_case("authorization")
        {
            auth = Some(value.trim().to_string());
        }
    }
    (target, auth)
}

fn write_response(mut stream: TcpStream, status: u16, body: &str) {
    let reason = if status == 200 { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// Two pages of QR codes; the second code has no optional fields
fn qr_api(target: &str, auth: Option<&str>) -> (u16, String) {
    if auth != Some("Key test-key") {
        return (401, json!({"message": "Unauthorized"}).to_string());
    }
    let body = if target.starts_with("/v3/qrcodes?") {
        if target.contains("cursor=page2") {
            json!({
                "data": [{"id": "qr-3", "title": "Poster, A3", "type": "url", "status": "paused", "createdAt": "2024-03-01"}],
                "pagination": {"hasMore": false, "nextCursor": null}
            })
        } else {
            json!({
                "data": [
                    {"id": "qr-1", "title": "Menu", "type": "url", "status": "active", "createdAt": "2024-01-01"},
                    {"id": "qr-2"}
                ],
                "pagination": {"hasMore": true, "nextCursor": "page2"}
            })
        }
    } else if target.contains("/scans/totals?") {
        json!({"scans": [
            {"time": "2024-01-01", "total": 0, "unique": 0},
            {"time": "2024-01-02", "total": 3, "unique": 0},
            {"time": "2024-01-03", "total": 0, "unique": 5}
        ]})
    } else if target.ends_with("/scans/total") {
        json!({"total": 10, "unique": 7})
    } else {
        return (404, json!({"message": "Not found"}).to_string());
    };
    (200, body.to_string())
}

fn run_qrstats(dir: &Path, args: &[&str]) -> (bool, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_qrstats"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env_remove("QRSTATS_API_KEY")
        .env("RUST_LOG", "info")
        .stdin(Stdio::null())
        .output()
        .expect("run qrstats");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn all_time_export_writes_one_row_per_code() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (base_url, requests) = spawn_api(qr_api);

    let (ok, stdout, stderr) = run_qrstats(
        dir.path(),
        &["--api-key", "test-key", "--mode", "all-time", "--base-url", &base_url, "--delay-ms", "0"],
    );
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("Found 3 QR Codes."));
    assert!(stderr.contains("Fetched page 2 | Total codes so far: 3"));

    let csv = fs::read_to_string(dir.path().join("qr_code_statistics.csv")).expect("csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        [
            "QR ID,Title,Type,Status,Created At,Total Scans,Unique Scans",
            "qr-1,Menu,url,active,2024-01-01,10,7",
            "qr-2,,,,,10,7",
            "qr-3,\"Poster, A3\",url,paused,2024-03-01,10,7",
        ]
    );

    let requests = requests.lock().expect("lock");
    assert_eq!(requests[0], "/v3/qrcodes?perPage=50");
    assert_eq!(requests[1], "/v3/qrcodes?perPage=50&cursor=page2");
    assert_eq!(requests.len(), 5);
}

#[test]
fn range_export_skips_idle_days() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (base_url, requests) = spawn_api(qr_api);

    let (ok, _stdout, stderr) = run_qrstats(
        dir.path(),
        &[
            "--api-key",
            "test-key",
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-03",
            "--base-url",
            &base_url,
            "--delay-ms",
            "0",
            "-o",
            "range.csv",
        ],
    );
    assert!(ok, "stderr: {stderr}");

    let csv = fs::read_to_string(dir.path().join("range.csv")).expect("csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "QR ID,Title,Type,Status,Created At,Date,Total Scans,Unique Scans"
    );
    // Three codes, two active days each
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[1], "qr-1,Menu,url,active,2024-01-01,2024-01-02,3,0");
    assert_eq!(lines[2], "qr-1,Menu,url,active,2024-01-01,2024-01-03,0,5");
    assert!(lines.iter().all(|l| !l.contains(",2024-01-01,0,0")));

    let requests = requests.lock().expect("lock");
    assert!(
        requests
            .iter()
            .any(|r| r == "/v3/qrcodes/qr-1/scans/totals?startDate=2024-01-01&endDate=2024-01-03&interval=day")
    );
}

#[test]
fn invalid_date_aborts_without_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (base_url, requests) = spawn_api(qr_api);

    let (ok, _stdout, stderr) = run_qrstats(
        dir.path(),
        &[
            "--api-key",
            "test-key",
            "--mode",
            "range",
            "--start",
            "2024/01/01",
            "--end",
            "2024-01-31",
            "--base-url",
            &base_url,
        ],
    );
    assert!(!ok);
    assert!(stderr.contains(r#"Invalid date "2024/01/01""#), "stderr: {stderr}");
    assert!(!dir.path().join("qr_code_statistics.csv").exists());
    assert!(requests.lock().expect("lock").is_empty());
}

#[test]
fn http_error_fails_run() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (base_url, _requests) = spawn_api(qr_api);

    let (ok, _stdout, stderr) = run_qrstats(
        dir.path(),
        &["--api-key", "wrong-key", "--mode", "all-time", "--base-url", &base_url, "--delay-ms", "0"],
    );
    assert!(!ok);
    assert!(stderr.contains("HTTP 401"), "stderr: {stderr}");
    assert!(!dir.path().join("qr_code_statistics.csv").exists());
}

#[test]
fn config_file_supplies_api_key_and_base_url() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (base_url, _requests) = spawn_api(qr_api);
    fs::write(
        dir.path().join(".qrstats.toml"),
        format!("api_key = \"test-key\"\nbase_url = \"{base_url}\"\ndelay_ms = 0\noutput = \"from-config.csv\"\n"),
    )
    .expect("write config");

    let (ok, _stdout, stderr) = run_qrstats(dir.path(), &["--mode", "all-time"]);
    assert!(ok, "stderr: {stderr}");

    let csv = fs::read_to_string(dir.path().join("from-config.csv")).expect("csv");
    assert_eq!(csv.lines().count(), 4);
}
