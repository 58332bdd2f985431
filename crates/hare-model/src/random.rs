//! Seeded random example generation.
//!
//! Uses ChaCha8 seeded from a caller-supplied `u64` so the same seed
//! always produces the same list. The generated list is always cyclic.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::list::ListModel;

/// Node-count bounds for random generation.
const MIN_NODES: usize = 2;
const MAX_NODES: usize = 10;

/// Generate a random cyclic list with `node_count` nodes (clamped to
/// `[2, 10]`), values in `[-10, 10)` and a cycle entry anywhere in range.
pub fn random_cyclic(seed: u64, node_count: usize) -> ListModel {
    let count = node_count.clamp(MIN_NODES, MAX_NODES);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let values: Vec<i64> = (0..count).map(|_| rng.gen_range(-10..10)).collect();
    let entry = rng.gen_range(0..count);

    // entry < count, so construction cannot fail
    ListModel::new(values, Some(entry)).unwrap_or_else(|_| ListModel::acyclic(Vec::new()))
}
