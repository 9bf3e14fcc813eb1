//! Session state for the dose entry form.
//!
//! The session owns the dose list, the pending stepper inputs and the
//! selected evaluation time. Every mutation is a small clamping or carrying
//! transform; the selected time is re-clamped whenever the dose list changes
//! so it never leaves `[first dose, last dose + 24h]`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dose::{Dose, DoseBounds};
use crate::error::SessionError;

/// Slider resolution for the selected time, in hours.
pub const SLIDER_STEP_HOURS: f64 = 0.25;

const MINUTES_PER_HOUR: i64 = 60;
const HOURS_PER_DAY: i64 = 24;

/// Stepper fields with only a lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundedField {
    DoseAmount,
    Day,
}

/// Values shown in the entry steppers, not yet committed as a dose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingInputs {
    /// Dose amount in mg (>= 0)
    pub dose_mg: u32,
    /// 1-based day (>= 1)
    pub day: u32,
    /// Hour of day (0-23)
    pub hour: u32,
    /// Minute (0-59)
    pub minute: u32,
}

impl Default for PendingInputs {
    fn default() -> Self {
        Self {
            dose_mg: 100,
            day: 1,
            hour: 8,
            minute: 0,
        }
    }
}

impl PendingInputs {
    /// Bring out-of-range values (e.g. from a hand-edited config) back into
    /// stepper range.
    pub fn normalized(self) -> Self {
        Self {
            dose_mg: self.dose_mg,
            day: self.day.max(1),
            hour: self.hour.min(23),
            minute: self.minute.min(59),
        }
    }
}

/// One user's interactive session.
///
/// Serialize-only: the selected time is only valid when produced by the
/// clamping mutators below.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    doses: Vec<Dose>,
    inputs: PendingInputs,
    selected_hours: f64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PendingInputs::default())
    }
}

impl Session {
    /// Empty session with the given starting inputs.
    pub fn new(inputs: PendingInputs) -> Self {
        Self {
            doses: Vec::new(),
            inputs: inputs.normalized(),
            selected_hours: 0.0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn doses(&self) -> &[Dose] {
        &self.doses
    }

    pub fn inputs(&self) -> PendingInputs {
        self.inputs
    }

    pub fn selected_hours(&self) -> f64 {
        self.selected_hours
    }

    pub fn bounds(&self) -> Option<DoseBounds> {
        DoseBounds::of(&self.doses)
    }

    pub fn is_empty(&self) -> bool {
        self.doses.is_empty()
    }

    // ── Stepper inputs ───────────────────────────────────────────────

    /// Direct entry into the stepper fields, clamped to their ranges.
    pub fn set_inputs(&mut self, inputs: PendingInputs) {
        self.inputs = inputs.normalized();
        debug!(inputs = ?self.inputs, "set inputs");
    }

    /// `field = max(min_value, field + delta)`.
    pub fn adjust_bounded(&mut self, field: BoundedField, delta: i64, min_value: u32) {
        let slot = match field {
            BoundedField::DoseAmount => &mut self.inputs.dose_mg,
            BoundedField::Day => &mut self.inputs.day,
        };
        let next = i64::from(*slot)
            .saturating_add(delta)
            .clamp(i64::from(min_value), i64::from(u32::MAX));
        *slot = next as u32;
        debug!(?field, delta, value = *slot, "adjusted input");
    }

    /// Roll minutes, carrying whole hours (floor division) into the hour.
    pub fn adjust_minute(&mut self, delta: i64) {
        let total = i64::from(self.inputs.minute) + delta;
        self.inputs.minute = total.rem_euclid(MINUTES_PER_HOUR) as u32;
        debug!(delta, minute = self.inputs.minute, "adjusted minute");
        self.adjust_hour(total.div_euclid(MINUTES_PER_HOUR));
    }

    /// Roll hours, carrying whole days into the day (never below day 1).
    pub fn adjust_hour(&mut self, delta: i64) {
        let total = i64::from(self.inputs.hour) + delta;
        self.inputs.hour = total.rem_euclid(HOURS_PER_DAY) as u32;
        debug!(delta, hour = self.inputs.hour, "adjusted hour");
        self.adjust_bounded(BoundedField::Day, total.div_euclid(HOURS_PER_DAY), 1);
    }

    // ── Dose list ────────────────────────────────────────────────────

    /// Commit the pending inputs as a new dose at the end of the list.
    pub fn add_dose(&mut self) -> Dose {
        let PendingInputs {
            dose_mg,
            day,
            hour,
            minute,
        } = self.inputs;
        let dose = Dose::new(
            day.saturating_sub(1),
            f64::from(hour) + f64::from(minute) / 60.0,
            f64::from(dose_mg),
        );
        self.doses.push(dose);
        debug!(
            day = dose.day,
            time_of_day = dose.time_of_day,
            amount_mg = dose.amount_mg,
            count = self.doses.len(),
            "added dose"
        );
        self.reclamp_selected();
        dose
    }

    /// Drop every dose and reset the selected time.
    pub fn clear_doses(&mut self) {
        debug!(count = self.doses.len(), "cleared doses");
        self.doses.clear();
        self.selected_hours = 0.0;
    }

    /// Remove the dose at `index` (0-based); later doses shift down.
    pub fn delete_dose(&mut self, index: usize) -> Result<Dose, SessionError> {
        if index >= self.doses.len() {
            return Err(SessionError::OutOfBounds {
                index,
                len: self.doses.len(),
            });
        }
        let removed = self.doses.remove(index);
        debug!(index, remaining = self.doses.len(), "deleted dose");
        self.reclamp_selected();
        Ok(removed)
    }

    // ── Selected time ────────────────────────────────────────────────

    /// Move the selected time by `hours`, staying within the dose bounds.
    pub fn nudge_selected(&mut self, hours: f64) {
        if let Some(bounds) = self.bounds() {
            self.selected_hours = bounds.clamp(self.selected_hours + hours);
            debug!(hours, selected = self.selected_hours, "nudged selected time");
        }
    }

    /// Slider set: snap to the quarter-hour grid anchored at the first dose,
    /// then clamp.
    pub fn set_selected(&mut self, hours: f64) {
        if let Some(bounds) = self.bounds() {
            let steps = ((hours - bounds.first) / SLIDER_STEP_HOURS).round();
            self.selected_hours = bounds.clamp(bounds.first + steps * SLIDER_STEP_HOURS);
            debug!(hours, selected = self.selected_hours, "set selected time");
        }
    }

    fn reclamp_selected(&mut self) {
        self.selected_hours = match self.bounds() {
            Some(bounds) => bounds.clamp(self.selected_hours),
            None => 0.0,
        };
    }
}
