//! Navigation over a finished trace.
//!
//! The cursor holds only an index and a total; playback scheduling and
//! input wiring belong to the presentation shell consuming it.

pub mod cursor;

pub use cursor::{CursorState, StepCursor};
