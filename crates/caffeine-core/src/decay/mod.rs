//! Caffeine elimination model.
//!
//! A single dose decays exponentially with a fixed half-life; a dose list is
//! the pointwise sum of its doses. Three presets bracket typical adult
//! variability.

mod aggregate;
mod model;

pub use aggregate::{cumulative, cumulative_at};
pub use model::{remaining, HalfLifePreset};
