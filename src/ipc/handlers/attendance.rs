use crate::ipc::helpers::{get_required_id, respond, view_json, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::roster::RosterStore;

fn attendance_toggle(
    store: &mut RosterStore,
    params: &serde_json::Value,
) -> Result<serde_json::Value, HandlerErr> {
    let changed = match get_required_id(params, "id")? {
        Some(id) => {
            let changed = store.toggle(id);
            if changed {
                tracing::debug!(id, present = store.counts().present_count, "toggled");
            } else {
                tracing::debug!(id, "toggle ignored: unknown student");
            }
            changed
        }
        None => {
            tracing::debug!(id = %params["id"], "toggle ignored: id out of range");
            false
        }
    };
    let mut view = view_json(store);
    view["changed"] = serde_json::Value::Bool(changed);
    Ok(view)
}

fn handle_attendance_toggle(state: &mut AppState, req: &Request) -> serde_json::Value {
    respond(&req.id, attendance_toggle(&mut state.session.store, &req.params))
}

fn handle_attendance_mark_all_present(state: &mut AppState, req: &Request) -> serde_json::Value {
    let store = &mut state.session.store;
    store.mark_all_present();
    tracing::debug!(total = store.counts().total_count, "marked all present");
    respond(&req.id, Ok(view_json(store)))
}

fn handle_attendance_reset_all(state: &mut AppState, req: &Request) -> serde_json::Value {
    let store = &mut state.session.store;
    store.reset_all();
    tracing::debug!(total = store.counts().total_count, "reset all");
    respond(&req.id, Ok(view_json(store)))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "attendance.toggle" => Some(handle_attendance_toggle(state, req)),
        "attendance.markAllPresent" => Some(handle_attendance_mark_all_present(state, req)),
        "attendance.resetAll" => Some(handle_attendance_reset_all(state, req)),
        _ => None,
    }
}
