mod ipc;
mod logging;
mod projection;
mod roster;
mod session;

use anyhow::Context;
use serde_json::json;
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("{e:#}");
    }

    let mut state = ipc::AppState {
        session: session::Session::open(),
    };
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        students = state.session.store.records().len(),
        date = %state.session.display_date(),
        "session opened"
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "stdin read failed; closing session");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let resp = match serde_json::from_str::<ipc::Request>(&line) {
            Ok(req) => ipc::handle_request(&mut state, req),
            Err(e) => {
                // Can't reply without id.
                tracing::warn!(error = %e, "malformed request line");
                json!({
                    "ok": false,
                    "error": { "code": "bad_json", "message": e.to_string() }
                })
            }
        };
        writeln!(stdout, "{}", resp).context("write response")?;
        stdout.flush().context("flush response")?;
    }

    tracing::info!(
        present = state.session.store.counts().present_count,
        "session closed"
    );
    Ok(())
}
