//! Interactive session: state, actions, and the derived view.
//!
//! Each user action mutates the [`Session`] and the caller rebuilds a
//! [`View`] from scratch. There is no incremental update path.

mod action;
mod state;
mod view;

pub use action::{Action, InputField, TimeNudge};
pub use state::{BoundedField, PendingInputs, Session, SLIDER_STEP_HOURS};
pub use view::{DoseRow, Readout, View, EMPTY_MESSAGE};
