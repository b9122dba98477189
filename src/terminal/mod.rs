//! Shared terminal utilities.
//!
//! Box drawing, entropy readout, and full-screen management.

mod output;
mod screen;

pub use output::*;
pub use screen::ScreenGuard;
