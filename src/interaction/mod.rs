//! Scene-independent interaction rules: selection toggling, heading to a
//! waypoint, the arrival gate and the squeeze toggle.

mod heading;
mod proximity;
mod selection;
mod squeeze;

pub use heading::{compute_heading, indicator_yaw};
pub use proximity::{check_arrival, GuidanceState, Waypoint};
pub use selection::SelectionTracker;
pub use squeeze::{SqueezeToggle, ToggleState};
