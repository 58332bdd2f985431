//! Derived structural facts about a list model and a finished trace.
//!
//! Everything here is a pure function over the same inputs the trace
//! generator consumes; display collaborators re-invoke these on every
//! data change rather than caching.

pub mod distance;
pub mod structure;
pub mod visits;

pub use distance::{cycle_aware_distance, linear_distance, CycleDistance};
pub use structure::{analyze, CycleInfo};
pub use visits::{trail_intensity, TrailConfig, VisitCounter};
