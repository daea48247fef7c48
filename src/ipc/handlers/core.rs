use crate::ipc::error::ok;
use crate::ipc::types::{AppState, Request};
use crate::session::TITLE;
use serde_json::json;

fn handle_health(_state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
        }),
    )
}

fn handle_session_info(state: &mut AppState, req: &Request) -> serde_json::Value {
    let session = &state.session;
    ok(
        &req.id,
        json!({
            "title": TITLE,
            "openedAt": session.opened_at().to_rfc3339(),
            "displayDate": session.display_date(),
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "session.info" => Some(handle_session_info(state, req)),
        _ => None,
    }
}
