use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Cycle entry {entry} is out of range for a list of {len} nodes")]
    EntryOutOfRange { entry: usize, len: usize },
}

/// A singly linked sequence modeled as an index array.
///
/// `cycle_entry = Some(k)` means the last node's successor is index `k`,
/// forming a cycle of length `len - k` with an acyclic tail of `k` nodes.
/// `None` means the sequence terminates after the last node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListModel {
    values: Vec<i64>,
    cycle_entry: Option<usize>,
}

impl ListModel {
    /// Build a model, rejecting a cycle entry at or past the end.
    ///
    /// Validation happens here, at the boundary, so the trace generator
    /// never has to defend against an out-of-range entry.
    pub fn new(values: Vec<i64>, cycle_entry: Option<usize>) -> Result<Self, ModelError> {
        if let Some(entry) = cycle_entry {
            if entry >= values.len() {
                return Err(ModelError::EntryOutOfRange {
                    entry,
                    len: values.len(),
                });
            }
        }
        Ok(Self {
            values,
            cycle_entry,
        })
    }

    /// A model with no cycle.
    pub fn acyclic(values: Vec<i64>) -> Self {
        Self {
            values,
            cycle_entry: None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Value at a node index, if the index is in range.
    pub fn value(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    pub fn cycle_entry(&self) -> Option<usize> {
        self.cycle_entry
    }

    /// The index-successor function.
    ///
    /// Returns the next index to visit under the array-with-wraparound
    /// model, or `None` when the node has no successor. For the last
    /// valid index this is the cycle entry (if any); out-of-range input
    /// has no successor.
    pub fn next_index(&self, index: usize) -> Option<usize> {
        if index >= self.values.len() {
            return None;
        }
        if index == self.values.len() - 1 {
            return self.cycle_entry;
        }
        Some(index + 1)
    }
}
