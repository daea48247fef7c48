use crate::roster::StudentRecord;
use serde::Serialize;

/// Half-up rounding used for the attendance rate:
/// `floor(x + 0.5)`, computed as `(present / total) * 100`.
pub fn attendance_rate(present: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let pct = (present as f64 / total as f64) * 100.0;
    (pct + 0.5).floor() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceCounts {
    pub total_count: usize,
    pub present_count: usize,
    pub absent_count: usize,
    pub attendance_rate: u32,
}

impl AttendanceCounts {
    pub fn tally(records: &[StudentRecord]) -> Self {
        let total_count = records.len();
        let present_count = records.iter().filter(|r| r.present).count();
        AttendanceCounts {
            total_count,
            present_count,
            absent_count: total_count - present_count,
            attendance_rate: attendance_rate(present_count, total_count),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EmptyReason {
    NoMatches,
    EmptyRoster,
}

impl EmptyReason {
    /// Shell-facing text. An empty roster only arises from
    /// `RosterStore::initialize` with an empty seed and carries no message.
    pub fn message(self) -> Option<&'static str> {
        match self {
            EmptyReason::NoMatches => Some("No students found matching your search"),
            EmptyReason::EmptyRoster => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub visible: Vec<StudentRecord>,
    pub counts: AttendanceCounts,
    pub has_any_matches: bool,
    pub empty_reason: Option<EmptyReason>,
}

/// Case-insensitive substring match on name or student id. No trimming.
pub fn matches_filter(record: &StudentRecord, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    let needle = filter.to_lowercase();
    record.name.to_lowercase().contains(&needle)
        || record.student_id.to_lowercase().contains(&needle)
}

/// Filtered view in roster order. Counts always cover the whole roster.
pub fn project(records: &[StudentRecord], filter: &str) -> Projection {
    let visible: Vec<StudentRecord> = records
        .iter()
        .filter(|r| matches_filter(r, filter))
        .cloned()
        .collect();
    let has_any_matches = !visible.is_empty();
    let empty_reason = if has_any_matches {
        None
    } else if records.is_empty() {
        Some(EmptyReason::EmptyRoster)
    } else {
        Some(EmptyReason::NoMatches)
    };

    Projection {
        visible,
        counts: AttendanceCounts::tally(records),
        has_any_matches,
        empty_reason,
    }
}
