//! Everything the form displays, recomputed from a [`Session`].

use serde::{Deserialize, Serialize};

use super::state::{PendingInputs, Session};
use crate::chart::{build_chart, ChartSpec};
use crate::decay::{cumulative_at, HalfLifePreset};
use crate::dose::DoseBounds;
use crate::time_fmt::{format_time_of_day, format_total_hours};

/// Shown in place of the chart and table while no dose has been entered.
pub const EMPTY_MESSAGE: &str = "Add one or more doses to see the chart and table.";

/// Remaining caffeine at the selected time for one preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readout {
    pub preset: HalfLifePreset,
    pub label: String,
    pub mg: f64,
    /// e.g. `"76 mg"`
    pub text: String,
}

/// One row of the dose table; `index` and `day` are 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoseRow {
    pub index: usize,
    pub amount_mg: f64,
    pub day: u32,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub inputs: PendingInputs,
    pub selected_hours: f64,
    pub selected_label: String,
    pub bounds: Option<DoseBounds>,
    pub chart: Option<ChartSpec>,
    pub readouts: Vec<Readout>,
    pub doses: Vec<DoseRow>,
    /// Informational text for the empty state
    pub message: Option<String>,
}

impl View {
    pub fn from_session(session: &Session) -> Self {
        let selected = session.selected_hours();
        let doses = session.doses();

        let readouts = if doses.is_empty() {
            Vec::new()
        } else {
            HalfLifePreset::ALL
                .iter()
                .map(|&preset| {
                    let mg = cumulative_at(doses, selected, preset.hours());
                    Readout {
                        preset,
                        label: preset.label().to_string(),
                        mg,
                        text: format!("{mg:.0} mg"),
                    }
                })
                .collect()
        };

        let rows = doses
            .iter()
            .enumerate()
            .map(|(idx, dose)| DoseRow {
                index: idx + 1,
                amount_mg: dose.amount_mg,
                day: dose.day + 1,
                time: format_time_of_day(dose.time_of_day),
            })
            .collect();

        Self {
            inputs: session.inputs(),
            selected_hours: selected,
            selected_label: format_total_hours(selected),
            bounds: session.bounds(),
            chart: build_chart(doses, selected),
            readouts,
            doses: rows,
            message: doses.is_empty().then(|| EMPTY_MESSAGE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Action;

    #[test]
    fn test_empty_session_view() {
        let view = View::from_session(&Session::default());
        assert!(view.chart.is_none());
        assert!(view.readouts.is_empty());
        assert!(view.doses.is_empty());
        assert!(view.bounds.is_none());
        assert_eq!(view.message.as_deref(), Some(EMPTY_MESSAGE));
        assert_eq!(view.selected_label, "Day 1 00:00");
    }

    #[test]
    fn test_view_readouts_and_rows() {
        let mut session = Session::default();
        for line in ["add", "hour +1", "hour +1", "add", "day +1", "minute +10", "add"] {
            session.apply(line.parse::<Action>().unwrap()).unwrap();
        }
        session.apply(Action::Select(20.0)).unwrap();
        let view = View::from_session(&session);

        assert!(view.message.is_none());
        assert!(view.chart.is_some());
        assert_eq!(view.readouts.len(), 3);
        assert_eq!(view.readouts[0].label, "Min (3h)");
        // dose taken on day 2 still counts in full before it is taken
        assert!(view.readouts.iter().all(|r| r.mg > 100.0));

        assert_eq!(view.doses.len(), 3);
        assert_eq!(view.doses[0].index, 1);
        assert_eq!(view.doses[0].time, "08:00");
        assert_eq!(view.doses[1].time, "10:00");
        assert_eq!(view.doses[2].day, 2);
        assert_eq!(view.doses[2].time, "10:10");
        assert_eq!(view.selected_label, "Day 1 20:00");
    }

    #[test]
    fn test_selected_label_floors_while_table_rounds() {
        let mut session = Session::default();
        session.apply("minute +10".parse::<Action>().unwrap()).unwrap();
        session.apply(Action::Add).unwrap();
        let view = View::from_session(&session);
        // 8 + 10/60 lands just under 490 minutes in f64
        assert_eq!(view.doses[0].time, "08:10");
        assert_eq!(view.selected_label, "Day 1 08:09");
    }

    #[test]
    fn test_view_is_idempotent() {
        let mut session = Session::default();
        session.add_dose();
        session.nudge_selected(5.0);
        assert_eq!(View::from_session(&session), View::from_session(&session));
    }

    #[test]
    fn test_view_serializes() {
        let mut session = Session::default();
        session.add_dose();
        let json = serde_json::to_value(View::from_session(&session)).unwrap();
        assert_eq!(json["readouts"][1]["text"], "100 mg");
        assert_eq!(json["chart"]["title"], "Cumulative Caffeine");
    }
}
