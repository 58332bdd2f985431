//! Step-trace generation for two-pointer cycle detection.
//!
//! Given a [`hare_model::ListModel`], [`generate`] produces the complete
//! ordered sequence of micro-steps a trace debugger would show while
//! stepping through the reference algorithm, one record per executed
//! line. The trace is produced eagerly in a single pass and is immutable
//! afterwards; consumers regenerate it wholesale when the input changes.

pub mod code;
pub mod generate;
pub mod step;

pub use code::{CodeLine, JAVA_CODE};
pub use generate::generate;
pub use step::{Step, Trace, VarBinding, Verdict};
