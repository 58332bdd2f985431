//! Linked-sequence data model for the cycle-detection trace engine.
//!
//! A list is represented as an array of node values plus an optional
//! cycle-entry index ("the next of the last node is index k"). The
//! successor function on `ListModel` is the only place that topology
//! is interpreted; everything downstream treats the sequence as flat.

pub mod list;
pub mod parse;
pub mod preset;
pub mod random;

pub use list::{ListModel, ModelError};
