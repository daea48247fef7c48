use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

fn spawn_sidecar() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_rollcalld");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn rollcalld");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn request(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    assert!(!line.trim().is_empty(), "empty response for {}", method);
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    value
}

fn request_ok(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let value = request(stdin, reader, id, method, params);
    assert!(
        value.get("ok").and_then(|v| v.as_bool()).unwrap_or(false),
        "{} failed: {}",
        method,
        value
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|v| v.as_str())
            .unwrap_or("unknown error")
    );
    value.get("result").cloned().unwrap_or_else(|| json!({}))
}

fn error_code(value: &serde_json::Value) -> Option<&str> {
    value
        .get("error")
        .and_then(|e| e.get("code"))
        .and_then(|v| v.as_str())
}

#[test]
fn ipc_router_smoke_covers_all_methods() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let health = request_ok(&mut stdin, &mut reader, "1", "health", json!({}));
    assert_eq!(health["version"], json!(env!("CARGO_PKG_VERSION")));

    let info = request_ok(&mut stdin, &mut reader, "2", "session.info", json!({}));
    assert_eq!(info["title"], json!("Student Attendance System"));
    let display = info["displayDate"].as_str().expect("displayDate").to_string();
    assert!(display.contains(", "), "unexpected display date: {}", display);
    assert!(info["openedAt"].as_str().is_some());

    for (id, method, params) in [
        ("3", "roster.view", json!({})),
        ("4", "roster.setFilter", json!({ "text": "a" })),
        ("5", "attendance.toggle", json!({ "id": 1 })),
        ("6", "attendance.markAllPresent", json!({})),
        ("7", "attendance.resetAll", json!({})),
    ] {
        let view = request_ok(&mut stdin, &mut reader, id, method, params);
        assert!(view.get("visible").is_some(), "{} returned no view", method);
        assert!(view.get("counts").is_some(), "{} returned no counts", method);
    }

    // The header date is captured once per session.
    let again = request_ok(&mut stdin, &mut reader, "8", "session.info", json!({}));
    assert_eq!(again, info);

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn unknown_method_and_bad_params_are_reported() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let resp = request(&mut stdin, &mut reader, "1", "roster.delete", json!({}));
    assert_eq!(resp["ok"], json!(false));
    assert_eq!(error_code(&resp), Some("not_implemented"));

    let resp = request(&mut stdin, &mut reader, "2", "attendance.toggle", json!({}));
    assert_eq!(error_code(&resp), Some("bad_params"));

    let resp = request(
        &mut stdin,
        &mut reader,
        "3",
        "attendance.toggle",
        json!({ "id": "S003" }),
    );
    assert_eq!(error_code(&resp), Some("bad_params"));

    let resp = request(
        &mut stdin,
        &mut reader,
        "3b",
        "attendance.toggle",
        json!({ "id": 3.5 }),
    );
    assert_eq!(error_code(&resp), Some("bad_params"));

    let resp = request(&mut stdin, &mut reader, "4", "roster.setFilter", json!({ "text": 7 }));
    assert_eq!(error_code(&resp), Some("bad_params"));

    // Rejected commands leave state alone.
    let view = request_ok(&mut stdin, &mut reader, "5", "roster.view", json!({}));
    assert_eq!(view["counts"]["presentCount"], json!(0));
    assert_eq!(view["filter"], json!(""));

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn malformed_line_gets_bad_json_and_session_continues() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    writeln!(stdin, "{{not json").expect("write garbage");
    stdin.flush().expect("flush garbage");
    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value["ok"], json!(false));
    assert_eq!(error_code(&value), Some("bad_json"));
    assert!(value.get("id").is_none());

    let health = request_ok(&mut stdin, &mut reader, "1", "health", json!({}));
    assert!(health.get("version").is_some());

    drop(stdin);
    let _ = child.wait();
}
