use serde::{Deserialize, Serialize};

use crate::list::ListModel;

/// A named example input for the visualizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub values: Vec<i64>,
    pub cycle_entry: Option<usize>,
    /// One-line description shown next to the example button.
    pub summary: String,
}

impl Preset {
    fn new(name: &str, values: &[i64], cycle_entry: Option<usize>, summary: &str) -> Self {
        Self {
            name: name.to_string(),
            values: values.to_vec(),
            cycle_entry,
            summary: summary.to_string(),
        }
    }

    /// Build the model for this preset. Presets are constructed with
    /// in-range entries, so this cannot fail.
    pub fn model(&self) -> ListModel {
        ListModel::new(self.values.clone(), self.cycle_entry)
            .unwrap_or_else(|_| ListModel::acyclic(self.values.clone()))
    }
}

/// The built-in example set.
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset::new("Example 1", &[3, 2, 0, -4], Some(1), "4 nodes, cycle at index 1"),
        Preset::new("Example 2", &[1, 2], Some(0), "2 nodes, cycle at index 0"),
        Preset::new("Example 3", &[1], None, "single node, no cycle"),
        Preset::new("Example 4", &[1, 2, 3, 4, 5], Some(2), "5 nodes, cycle at index 2"),
        Preset::new("Example 5", &[1, 2, 3, 4, 5, 6], Some(0), "6 nodes, cycle at head"),
    ]
}
