use crate::ipc::helpers::{get_required_str, respond, view_json, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::roster::RosterStore;

fn roster_set_filter(
    store: &mut RosterStore,
    params: &serde_json::Value,
) -> Result<serde_json::Value, HandlerErr> {
    // Stored verbatim; whitespace is significant for matching.
    let text = get_required_str(params, "text")?;
    store.set_filter(text);
    tracing::debug!(filter = %store.filter(), "filter set");
    Ok(view_json(store))
}

fn handle_roster_view(state: &mut AppState, req: &Request) -> serde_json::Value {
    respond(&req.id, Ok(view_json(&state.session.store)))
}

fn handle_roster_set_filter(state: &mut AppState, req: &Request) -> serde_json::Value {
    respond(&req.id, roster_set_filter(&mut state.session.store, &req.params))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "roster.view" => Some(handle_roster_view(state, req)),
        "roster.setFilter" => Some(handle_roster_set_filter(state, req)),
        _ => None,
    }
}
