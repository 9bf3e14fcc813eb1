//! Dose records and the shared timeline coordinate.

use serde::{Deserialize, Serialize};

/// One ingestion event.
///
/// Identity is the dose's position in the session's list; doses are never
/// edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dose {
    /// Day index, 0-based (displayed as `day + 1`)
    pub day: u32,
    /// Time of day in hours, `[0, 24)`
    pub time_of_day: f64,
    /// Amount in milligrams
    pub amount_mg: f64,
}

impl Dose {
    pub fn new(day: u32, time_of_day: f64, amount_mg: f64) -> Self {
        Self {
            day,
            time_of_day,
            amount_mg,
        }
    }

    /// Position on the common axis: `day * 24 + time_of_day`.
    pub fn total_hours(&self) -> f64 {
        f64::from(self.day) * 24.0 + self.time_of_day
    }
}

/// Earliest and latest dose on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoseBounds {
    pub first: f64,
    pub last: f64,
}

impl DoseBounds {
    /// Hours of tail shown after the last dose.
    pub const TAIL_HOURS: f64 = 24.0;

    /// Bounds over a dose list, `None` when it is empty.
    pub fn of(doses: &[Dose]) -> Option<Self> {
        let mut iter = doses.iter().map(Dose::total_hours);
        let first_value = iter.next()?;
        let (first, last) = iter.fold((first_value, first_value), |(lo, hi), t| {
            (lo.min(t), hi.max(t))
        });
        Some(Self { first, last })
    }

    /// Upper end of the selectable range.
    pub fn end(&self) -> f64 {
        self.last + Self::TAIL_HOURS
    }

    /// Width of the charted axis.
    pub fn span(&self) -> f64 {
        self.end() - self.first
    }

    pub fn clamp(&self, hours: f64) -> f64 {
        hours.clamp(self.first, self.end())
    }
}
