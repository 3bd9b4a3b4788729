//! Source of "today" for opening-hours emphasis.

use chrono::{Datelike, Local, Weekday};

/// Supplies the current weekday.
pub trait Clock: Send + Sync {
    fn today(&self) -> Weekday;
}

/// Reads the process-local date. No timezone is configured; the host's
/// local zone decides what "today" means.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Weekday {
        Local::now().weekday()
    }
}

/// Always reports the same weekday.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Weekday);

impl Clock for FixedClock {
    fn today(&self) -> Weekday {
        self.0
    }
}
