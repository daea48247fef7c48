use crate::roster::{default_seed, RosterStore};
use chrono::{DateTime, Local, TimeZone};

pub const TITLE: &str = "Student Attendance System";

/// One attendance session: created at startup, dropped at exit.
///
/// `opened_at` is captured once and never refreshed, even if the session
/// runs past midnight.
pub struct Session {
    pub store: RosterStore,
    opened_at: DateTime<Local>,
}

impl Session {
    pub fn open() -> Self {
        Session::with_clock(RosterStore::initialize(default_seed()), Local::now())
    }

    pub fn with_clock(store: RosterStore, opened_at: DateTime<Local>) -> Self {
        Session { store, opened_at }
    }

    pub fn opened_at(&self) -> DateTime<Local> {
        self.opened_at
    }

    pub fn display_date(&self) -> String {
        format_display_date(&self.opened_at)
    }
}

/// Long US-style date, e.g. `Saturday, October 17, 2026`.
pub fn format_display_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%A, %B %-d, %Y").to_string()
}
