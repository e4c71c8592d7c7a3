//! Moore-neighborhood contour tracing over binary grids.
//!
//! The tracer finds the bottom-most, then left-most foreground pixel and walks
//! the outer boundary of its 8-connected region, rotating clockwise through
//! the Moore neighborhood of the current boundary pixel:
//! - a foreground candidate becomes the new boundary pixel and the search
//!   restarts after the pixel it was entered from;
//! - a background or off-grid candidate only advances the rotation.
//!
//! The walk stops when it re-enters the start pixel the way it was entered
//! before (Jacob's criterion), either from the scan entry cell or from the
//! first real step into the start pixel. An isolated start pixel stops after
//! one fruitless rotation.
//!
//! Only the first region is traced; holes are not followed.

mod error;
mod neighborhood;
mod outline;
mod tracer;

pub use error::TraceError;
pub use neighborhood::{clockwise_neighbor, direction_index, direction_offset, next_clockwise};
pub use outline::{Outline, StopReason, TraceStats};
pub use tracer::{StartPixel, find_start, trace, trace_with_stats};
