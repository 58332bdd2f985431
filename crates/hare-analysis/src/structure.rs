use serde::{Deserialize, Serialize};

use hare_model::ListModel;

/// Structural facts about a list's cycle, for downstream display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleInfo {
    pub has_cycle: bool,
    pub cycle_length: usize,
    pub tail_length: usize,
    /// Node indices inside the cycle, in order.
    pub cycle_nodes: Vec<usize>,
    /// Node indices on the acyclic tail, in order.
    pub tail_nodes: Vec<usize>,
}

/// Compute cycle structure from the model.
///
/// With entry `k` over `n` nodes the cycle is `[k, n)` and the tail is
/// `[0, k)`; without an entry the whole list is tail.
pub fn analyze(model: &ListModel) -> CycleInfo {
    let n = model.len();

    match model.cycle_entry() {
        None => CycleInfo {
            has_cycle: false,
            cycle_length: 0,
            tail_length: n,
            cycle_nodes: Vec::new(),
            tail_nodes: (0..n).collect(),
        },
        Some(entry) => CycleInfo {
            has_cycle: true,
            cycle_length: n - entry,
            tail_length: entry,
            cycle_nodes: (entry..n).collect(),
            tail_nodes: (0..entry).collect(),
        },
    }
}
