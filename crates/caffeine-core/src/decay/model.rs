//! First-order elimination of a single dose.

use serde::{Deserialize, Serialize};

/// Fixed half-life presets modelling individual variability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HalfLifePreset {
    Min,
    Average,
    Max,
}

impl HalfLifePreset {
    /// Presets in display order.
    pub const ALL: [HalfLifePreset; 3] = [Self::Min, Self::Average, Self::Max];

    pub fn hours(self) -> f64 {
        match self {
            Self::Min => 3.0,
            Self::Average => 5.0,
            Self::Max => 7.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Min => "Min (3h)",
            Self::Average => "Average (5h)",
            Self::Max => "Max (7h)",
        }
    }

    /// Marker color used by chart renderers.
    pub fn color(self) -> &'static str {
        match self {
            Self::Min => "red",
            Self::Average => "blue",
            Self::Max => "green",
        }
    }
}

/// Milligrams left of `dose_mg` after `elapsed_hr` hours.
///
/// Callers clamp `elapsed_hr` to zero first; `half_life_hr` must be positive.
pub fn remaining(dose_mg: f64, elapsed_hr: f64, half_life_hr: f64) -> f64 {
    dose_mg * 0.5_f64.powf(elapsed_hr / half_life_hr)
}
