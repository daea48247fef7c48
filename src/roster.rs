use crate::projection::{project, AttendanceCounts, Projection};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: u32,
    pub student_id: String,
    pub name: String,
    pub present: bool,
}

impl StudentRecord {
    fn new(id: u32, student_id: &str, name: &str) -> Self {
        StudentRecord {
            id,
            student_id: student_id.to_string(),
            name: name.to_string(),
            present: false,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.present {
            "Present"
        } else {
            "Absent"
        }
    }
}

/// The fixed class list every session starts from.
pub fn default_seed() -> Vec<StudentRecord> {
    [
        (1, "S001", "Emma Johnson"),
        (2, "S002", "Noah Smith"),
        (3, "S003", "Olivia Davis"),
        (4, "S004", "Liam Brown"),
        (5, "S005", "Ava Wilson"),
        (6, "S006", "William Taylor"),
        (7, "S007", "Sophia Martinez"),
        (8, "S008", "Mason Anderson"),
        (9, "S009", "Isabella Thomas"),
        (10, "S010", "James Jackson"),
    ]
    .into_iter()
    .map(|(id, student_id, name)| StudentRecord::new(id, student_id, name))
    .collect()
}

/// Owns the roster and the search filter for one session.
///
/// Membership is fixed after `initialize`; only `present` flags change.
/// Counters are recomputed at the end of every mutating command.
#[derive(Debug, Clone)]
pub struct RosterStore {
    records: Vec<StudentRecord>,
    filter: String,
    counts: AttendanceCounts,
}

impl RosterStore {
    /// `seed` must carry unique `id` and unique `student_id` values.
    pub fn initialize(seed: Vec<StudentRecord>) -> Self {
        let records: Vec<StudentRecord> = seed
            .into_iter()
            .map(|r| StudentRecord {
                present: false,
                ..r
            })
            .collect();
        let counts = AttendanceCounts::tally(&records);
        RosterStore {
            records,
            filter: String::new(),
            counts,
        }
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn counts(&self) -> AttendanceCounts {
        self.counts
    }

    pub fn project(&self) -> Projection {
        project(&self.records, &self.filter)
    }

    /// Flips presence for `id`. Unknown ids leave the roster untouched and
    /// return `false`.
    pub fn toggle(&mut self, id: u32) -> bool {
        if !self.records.iter().any(|r| r.id == id) {
            return false;
        }
        self.replace_with(|r| {
            if r.id == id {
                !r.present
            } else {
                r.present
            }
        });
        true
    }

    pub fn mark_all_present(&mut self) {
        self.replace_with(|_| true);
    }

    pub fn reset_all(&mut self) {
        self.replace_with(|_| false);
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    fn replace_with(&mut self, present: impl Fn(&StudentRecord) -> bool) {
        self.records = self
            .records
            .iter()
            .map(|r| StudentRecord {
                present: present(r),
                ..r.clone()
            })
            .collect();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.counts = AttendanceCounts::tally(&self.records);
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        RosterStore::initialize(default_seed())
    }
}
