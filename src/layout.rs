//! Vertical placement of event markers within a day column.

use crate::model::Event;
use chrono::Timelike;

pub const MINUTES_PER_HOUR: u32 = 60;
pub const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

/// Hours that get a labelled reference line on the day columns.
const REFERENCE_HOURS: [u32; 4] = [0, 6, 12, 18];

/// Fraction of the day elapsed at `hour:minute`, in `[0, 1)` for valid times.
pub fn position_of(hour: u32, minute: u32) -> f64 {
    f64::from(hour * MINUTES_PER_HOUR + minute) / f64::from(MINUTES_PER_DAY)
}

/// Labelled reference lines (`00:00`, `06:00`, ...) and where they sit.
pub fn time_references() -> impl Iterator<Item = (String, f64)> {
    REFERENCE_HOURS
        .into_iter()
        .map(|hour| (format!("{hour:02}:00"), position_of(hour, 0)))
}

/// Text of an event marker, e.g. `09:30 meeting`.
pub fn marker_label(event: &Event) -> String {
    format!("{} {}", event.time.format("%H:%M"), event.description)
}

impl Event {
    pub fn position(&self) -> f64 {
        position_of(self.time.hour(), self.time.minute())
    }
}
