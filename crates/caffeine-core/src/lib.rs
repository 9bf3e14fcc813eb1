//! # Caffeine Tracker Core Library
//!
//! This library models caffeine remaining in the bloodstream from a list of
//! user-entered doses. The CLI binary is a thin interactive layer over the
//! same library.
//!
//! ## Architecture
//!
//! - **Decay**: closed-form exponential elimination per dose, summed over the
//!   dose list for each of three half-life presets
//! - **Chart**: samples the curves over the dose span and assembles a
//!   data-only chart specification, with a plain-text renderer
//! - **Session**: entry-form state with carrying steppers and a clamped
//!   selected time, plus a pure view recomputed after every action
//! - **Storage**: TOML-based preferences (doses are never persisted)
//!
//! ## Key Components
//!
//! - [`Session`]: Form state and its mutations
//! - [`View`]: Everything shown for a session
//! - [`build_chart`]: Chart specification for a dose list
//! - [`Config`]: Application configuration management

pub mod chart;
pub mod decay;
pub mod dose;
pub mod error;
pub mod session;
pub mod storage;
pub mod time_fmt;

pub use chart::{build_chart, render_ascii, ChartSpec};
pub use decay::{cumulative, cumulative_at, remaining, HalfLifePreset};
pub use dose::{Dose, DoseBounds};
pub use error::{ConfigError, CoreError, SessionError};
pub use session::{Action, PendingInputs, Session, View};
pub use storage::Config;
pub use time_fmt::{format_time_of_day, format_total_hours};
