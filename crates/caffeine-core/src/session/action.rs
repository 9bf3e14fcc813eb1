//! User actions offered by the entry form, and their text syntax.
//!
//! ```text
//! dose +100 | dose -10 | day +1 | hour -10 | minute +1
//! set dose 150 | set minute 45
//! add | clear | delete 2
//! nudge -15m | nudge +1h | nudge +10h
//! select 30.5
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::state::{BoundedField, PendingInputs, Session};
use crate::error::SessionError;

const DOSE_STEPS: &[i64] = &[1, 10, 100];
const TIME_STEPS: &[i64] = &[1, 10];

/// Selected-time nudge buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeNudge {
    Back10h,
    Back1h,
    Back15m,
    Forward15m,
    Forward1h,
    Forward10h,
}

impl TimeNudge {
    pub fn hours(self) -> f64 {
        match self {
            Self::Back10h => -10.0,
            Self::Back1h => -1.0,
            Self::Back15m => -0.25,
            Self::Forward15m => 0.25,
            Self::Forward1h => 1.0,
            Self::Forward10h => 10.0,
        }
    }

    fn parse(token: &str) -> Option<Self> {
        match token {
            "-10h" => Some(Self::Back10h),
            "-1h" => Some(Self::Back1h),
            "-15m" => Some(Self::Back15m),
            "+15m" => Some(Self::Forward15m),
            "+1h" => Some(Self::Forward1h),
            "+10h" => Some(Self::Forward10h),
            _ => None,
        }
    }
}

/// Stepper fields that accept a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    Dose,
    Day,
    Hour,
    Minute,
}

impl InputField {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "dose" => Some(Self::Dose),
            "day" => Some(Self::Day),
            "hour" => Some(Self::Hour),
            "minute" => Some(Self::Minute),
            _ => None,
        }
    }

    /// `inputs` with this field replaced by `value`, before range clamping.
    fn replace(self, inputs: PendingInputs, value: u32) -> PendingInputs {
        match self {
            Self::Dose => PendingInputs {
                dose_mg: value,
                ..inputs
            },
            Self::Day => PendingInputs { day: value, ..inputs },
            Self::Hour => PendingInputs {
                hour: value,
                ..inputs
            },
            Self::Minute => PendingInputs {
                minute: value,
                ..inputs
            },
        }
    }
}

/// A single form interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum Action {
    Dose(i64),
    Day(i64),
    Hour(i64),
    Minute(i64),
    /// Typed entry into a stepper field; out-of-range values are clamped
    Set(InputField, u32),
    Add,
    Clear,
    /// 0-based row to remove
    Delete(usize),
    Nudge(TimeNudge),
    /// Slider position in total hours
    Select(f64),
}

fn parse_step(action: &str, arg: Option<&str>, allowed: &[i64]) -> Result<i64, SessionError> {
    let raw = arg.ok_or_else(|| SessionError::InvalidArgument {
        action: action.to_string(),
        message: "missing step, e.g. +1 or -10".to_string(),
    })?;
    let delta: i64 = raw
        .trim_start_matches('+')
        .parse()
        .map_err(|_| SessionError::InvalidArgument {
            action: action.to_string(),
            message: format!("'{raw}' is not a whole number"),
        })?;
    if !allowed.contains(&delta.abs()) {
        let allowed = allowed
            .iter()
            .map(|s| format!("±{s}"))
            .collect::<Vec<_>>()
            .join("/");
        return Err(SessionError::DisallowedStep {
            action: action.to_string(),
            delta: raw.to_string(),
            allowed,
        });
    }
    Ok(delta)
}

fn require<'a>(action: &str, arg: Option<&'a str>, hint: &str) -> Result<&'a str, SessionError> {
    arg.ok_or_else(|| SessionError::InvalidArgument {
        action: action.to_string(),
        message: format!("missing argument, e.g. {hint}"),
    })
}

fn parse_set(
    field: Option<&str>,
    value: Option<&str>,
    extra: Option<&str>,
) -> Result<Action, SessionError> {
    let invalid = |message: String| SessionError::InvalidArgument {
        action: "set".to_string(),
        message,
    };
    if let Some(extra) = extra {
        return Err(invalid(format!("unexpected '{extra}'")));
    }
    let raw_field = require("set", field, "set dose 150")?;
    let field = InputField::parse(&raw_field.to_lowercase())
        .ok_or_else(|| invalid(format!("'{raw_field}' is not one of dose/day/hour/minute")))?;
    let raw_value = require("set", value, "set dose 150")?;
    let value: u32 = raw_value
        .parse()
        .map_err(|_| invalid(format!("'{raw_value}' is not a whole number >= 0")))?;
    Ok(Action::Set(field, value))
}

impl FromStr for Action {
    type Err = SessionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(SessionError::UnknownAction(String::new()));
        };
        let verb = verb.to_lowercase();
        let arg = words.next();
        if verb == "set" {
            return parse_set(arg, words.next(), words.next());
        }
        if let Some(extra) = words.next() {
            return Err(SessionError::InvalidArgument {
                action: verb,
                message: format!("unexpected '{extra}'"),
            });
        }

        let action = match verb.as_str() {
            "dose" => Self::Dose(parse_step(&verb, arg, DOSE_STEPS)?),
            "day" => Self::Day(parse_step(&verb, arg, TIME_STEPS)?),
            "hour" => Self::Hour(parse_step(&verb, arg, TIME_STEPS)?),
            "minute" => Self::Minute(parse_step(&verb, arg, TIME_STEPS)?),
            "add" | "clear" => {
                if let Some(extra) = arg {
                    return Err(SessionError::InvalidArgument {
                        action: verb.clone(),
                        message: format!("takes no argument, got '{extra}'"),
                    });
                }
                if verb == "add" {
                    Self::Add
                } else {
                    Self::Clear
                }
            }
            "delete" => {
                let raw = require(&verb, arg, "delete 1")?;
                let row: usize = raw.parse().map_err(|_| SessionError::InvalidArgument {
                    action: verb.clone(),
                    message: format!("'{raw}' is not a row number"),
                })?;
                if row == 0 {
                    return Err(SessionError::InvalidArgument {
                        action: verb.clone(),
                        message: "rows are numbered from 1".to_string(),
                    });
                }
                Self::Delete(row - 1)
            }
            "nudge" => {
                let raw = require(&verb, arg, "nudge +15m")?;
                let nudge = TimeNudge::parse(raw).ok_or_else(|| SessionError::DisallowedStep {
                    action: verb.clone(),
                    delta: raw.to_string(),
                    allowed: "±15m/±1h/±10h".to_string(),
                })?;
                Self::Nudge(nudge)
            }
            "select" => {
                let raw = require(&verb, arg, "select 30.5")?;
                let hours: f64 = raw
                    .parse()
                    .ok()
                    .filter(|h: &f64| h.is_finite())
                    .ok_or_else(|| SessionError::InvalidArgument {
                        action: verb.clone(),
                        message: format!("'{raw}' is not a number of hours"),
                    })?;
                Self::Select(hours)
            }
            _ => return Err(SessionError::UnknownAction(verb.clone())),
        };
        Ok(action)
    }
}

impl Session {
    /// Dispatch one form interaction.
    pub fn apply(&mut self, action: Action) -> Result<(), SessionError> {
        match action {
            Action::Dose(delta) => self.adjust_bounded(BoundedField::DoseAmount, delta, 0),
            Action::Day(delta) => self.adjust_bounded(BoundedField::Day, delta, 1),
            Action::Hour(delta) => self.adjust_hour(delta),
            Action::Minute(delta) => self.adjust_minute(delta),
            Action::Set(field, value) => self.set_inputs(field.replace(self.inputs(), value)),
            Action::Add => {
                self.add_dose();
            }
            Action::Clear => self.clear_doses(),
            Action::Delete(index) => {
                self.delete_dose(index)?;
            }
            Action::Nudge(nudge) => self.nudge_selected(nudge.hours()),
            Action::Select(hours) => self.set_selected(hours),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steppers() {
        assert_eq!("dose +100".parse::<Action>().unwrap(), Action::Dose(100));
        assert_eq!("dose -1".parse::<Action>().unwrap(), Action::Dose(-1));
        assert_eq!("Day 10".parse::<Action>().unwrap(), Action::Day(10));
        assert_eq!("hour -10".parse::<Action>().unwrap(), Action::Hour(-10));
        assert_eq!("  minute +1 ".parse::<Action>().unwrap(), Action::Minute(1));
    }

    #[test]
    fn test_parse_rejects_unoffered_steps() {
        let err = "hour +100".parse::<Action>().unwrap_err();
        assert!(matches!(err, SessionError::DisallowedStep { .. }));
        assert!(err.to_string().contains("±1/±10"));
        assert!("dose +5".parse::<Action>().is_err());
        assert!("minute".parse::<Action>().is_err());
        assert!("minute ten".parse::<Action>().is_err());
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("add".parse::<Action>().unwrap(), Action::Add);
        assert_eq!("clear".parse::<Action>().unwrap(), Action::Clear);
        assert_eq!("delete 2".parse::<Action>().unwrap(), Action::Delete(1));
        assert_eq!(
            "nudge -15m".parse::<Action>().unwrap(),
            Action::Nudge(TimeNudge::Back15m)
        );
        assert_eq!("select 30.5".parse::<Action>().unwrap(), Action::Select(30.5));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "brew".parse::<Action>().unwrap_err(),
            SessionError::UnknownAction("brew".to_string())
        );
        assert!("delete 0".parse::<Action>().is_err());
        assert!("delete".parse::<Action>().is_err());
        assert!("nudge +2h".parse::<Action>().is_err());
        assert!("select NaN".parse::<Action>().is_err());
        assert!("add now".parse::<Action>().is_err());
        assert!("".parse::<Action>().is_err());
    }

    #[test]
    fn test_apply_sequence() {
        let mut session = Session::default();
        for line in ["dose +10", "minute +10", "minute +10", "add", "hour +10", "add"] {
            session.apply(line.parse().unwrap()).unwrap();
        }
        let doses = session.doses();
        assert_eq!(doses.len(), 2);
        assert_eq!(doses[0].amount_mg, 110.0);
        assert!((doses[0].time_of_day - (8.0 + 20.0 / 60.0)).abs() < 1e-12);
        assert!((doses[1].time_of_day - (18.0 + 20.0 / 60.0)).abs() < 1e-12);
    }

    #[test]
    fn test_apply_delete_out_of_range_propagates() {
        let mut session = Session::default();
        assert!(session.apply(Action::Delete(0)).is_err());
    }

    #[test]
    fn test_parse_rejects_arguments_on_bare_commands() {
        let err = "add now".parse::<Action>().unwrap_err();
        assert!(matches!(err, SessionError::InvalidArgument { .. }));
        assert!(err.to_string().contains("'now'"));
        assert!("clear 3".parse::<Action>().is_err());
    }

    #[test]
    fn test_parse_set() {
        assert_eq!(
            "set dose 150".parse::<Action>().unwrap(),
            Action::Set(InputField::Dose, 150)
        );
        assert_eq!(
            "SET Minute 45".parse::<Action>().unwrap(),
            Action::Set(InputField::Minute, 45)
        );
        assert!("set".parse::<Action>().is_err());
        assert!("set dose".parse::<Action>().is_err());
        assert!("set mood 3".parse::<Action>().is_err());
        assert!("set day -1".parse::<Action>().is_err());
        assert!("set hour 9 now".parse::<Action>().is_err());
    }

    #[test]
    fn test_apply_set_clamps_to_field_range() {
        let mut session = Session::default();
        for line in ["set dose 150", "set day 3", "set hour 30", "set minute 45"] {
            session.apply(line.parse().unwrap()).unwrap();
        }
        assert_eq!(
            session.inputs(),
            PendingInputs {
                dose_mg: 150,
                day: 3,
                hour: 23,
                minute: 45
            }
        );
        session.apply("set day 0".parse().unwrap()).unwrap();
        assert_eq!(session.inputs().day, 1);

        session.apply(Action::Add).unwrap();
        let dose = session.doses()[0];
        assert_eq!(dose.amount_mg, 150.0);
        assert_eq!(dose.day, 0);
        assert_eq!(dose.time_of_day, 23.75);
    }
}
