use serde::{Deserialize, Serialize};

use hare_model::ListModel;

/// Pointer separation, cycle-aware when both pointers sit in the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleDistance {
    /// Steps from slow to fast following successor direction.
    pub forward_distance: usize,
    /// Shortest separation around the cycle; 0 outside the cycle.
    pub cycle_distance: usize,
    pub is_in_cycle: bool,
}

/// Flat distance between two pointer positions.
///
/// `None` when either pointer has not been placed yet.
pub fn linear_distance(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    let (a, b) = (a?, b?);
    Some(a.abs_diff(b))
}

/// Distance between two placed pointers, taking the cycle into account.
///
/// Both pointers must lie at or past the cycle entry to count as "in the
/// cycle"; otherwise the flat distance is reported and the cycle distance
/// is zero.
pub fn cycle_aware_distance(slow: usize, fast: usize, model: &ListModel) -> CycleDistance {
    let flat = slow.abs_diff(fast);

    let entry = match model.cycle_entry() {
        Some(entry) if slow >= entry && fast >= entry => entry,
        _ => {
            return CycleDistance {
                forward_distance: flat,
                cycle_distance: 0,
                is_in_cycle: false,
            }
        }
    };

    let cycle_length = model.len() - entry;
    let slow_in = slow - entry;
    let fast_in = fast - entry;

    let forward = (fast_in + cycle_length - slow_in) % cycle_length;
    let backward = (slow_in + cycle_length - fast_in) % cycle_length;

    CycleDistance {
        forward_distance: forward,
        cycle_distance: forward.min(backward),
        is_in_cycle: true,
    }
}
