use crate::ipc::error::{err, ok};
use crate::projection::Projection;
use crate::roster::{RosterStore, StudentRecord};
use serde::Serialize;
use serde_json::json;

pub struct HandlerErr {
    pub code: &'static str,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl HandlerErr {
    pub fn bad_params(message: impl Into<String>) -> Self {
        HandlerErr {
            code: "bad_params",
            message: message.into(),
            details: None,
        }
    }

    pub fn response(self, id: &str) -> serde_json::Value {
        err(id, self.code, self.message, self.details)
    }
}

pub fn respond(id: &str, result: Result<serde_json::Value, HandlerErr>) -> serde_json::Value {
    match result {
        Ok(result) => ok(id, result),
        Err(error) => error.response(id),
    }
}

pub fn get_required_str(params: &serde_json::Value, key: &str) -> Result<String, HandlerErr> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| HandlerErr::bad_params(format!("missing {}", key)))
}

/// Integer param that may not fit `u32`. Out-of-range integers give `None`
/// so callers can treat them as ids that match nothing.
pub fn get_required_id(
    params: &serde_json::Value,
    key: &str,
) -> Result<Option<u32>, HandlerErr> {
    let Some(v) = params.get(key) else {
        return Err(HandlerErr::bad_params(format!("missing {}", key)));
    };
    if let Some(n) = v.as_i64() {
        return Ok(u32::try_from(n).ok());
    }
    if let Some(n) = v.as_u64() {
        return Ok(u32::try_from(n).ok());
    }
    Err(HandlerErr {
        code: "bad_params",
        message: format!("{} must be an integer", key),
        details: Some(json!({ "got": v })),
    })
}

#[derive(Serialize)]
struct VisibleRow<'a> {
    #[serde(flatten)]
    record: &'a StudentRecord,
    status: &'static str,
}

fn projection_json(filter: &str, view: &Projection) -> serde_json::Value {
    let visible: Vec<VisibleRow<'_>> = view
        .visible
        .iter()
        .map(|record| VisibleRow {
            record,
            status: record.status_label(),
        })
        .collect();
    json!({
        "filter": filter,
        "visible": visible,
        "counts": view.counts,
        "hasAnyMatches": view.has_any_matches,
        "emptyReason": view.empty_reason,
        "emptyMessage": view.empty_reason.and_then(|r| r.message()),
    })
}

/// Current projection of the store, as sent after every command.
pub fn view_json(store: &RosterStore) -> serde_json::Value {
    projection_json(store.filter(), &store.project())
}
