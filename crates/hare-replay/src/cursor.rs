use serde::{Deserialize, Serialize};

use hare_trace::Trace;

/// Snapshot of cursor state for the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorState {
    pub current: usize,
    pub total: usize,
    pub can_go_prev: bool,
    pub can_go_next: bool,
}

/// Position within a trace's step sequence.
///
/// Navigation methods return whether the move happened; a rejected move
/// leaves the cursor where it was.
#[derive(Debug, Clone)]
pub struct StepCursor {
    current: usize,
    total: usize,
}

impl StepCursor {
    pub fn new(total_steps: usize) -> Self {
        Self {
            current: 0,
            total: total_steps,
        }
    }

    pub fn for_trace(trace: &Trace) -> Self {
        Self::new(trace.len())
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Replace the step count and rewind, as happens when the input data
    /// changes and the trace is regenerated.
    pub fn set_total(&mut self, total_steps: usize) {
        self.total = total_steps;
        self.current = 0;
    }

    pub fn can_go_next(&self) -> bool {
        self.current + 1 < self.total
    }

    pub fn can_go_prev(&self) -> bool {
        self.current > 0
    }

    /// Jump to a step. Out-of-range targets are rejected.
    pub fn go_to(&mut self, step: usize) -> bool {
        if step >= self.total {
            return false;
        }
        self.current = step;
        true
    }

    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current += 1;
        true
    }

    pub fn prev(&mut self) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    pub fn state(&self) -> CursorState {
        CursorState {
            current: self.current,
            total: self.total,
            can_go_prev: self.can_go_prev(),
            can_go_next: self.can_go_next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hare_model::ListModel;
    use hare_trace::generate;

    #[test]
    fn test_walks_forward_and_back() {
        let mut cursor = StepCursor::new(3);
        assert_eq!(cursor.current(), 0);
        assert!(!cursor.can_go_prev());

        assert!(cursor.next());
        assert!(cursor.next());
        assert_eq!(cursor.current(), 2);
        assert!(!cursor.next());

        assert!(cursor.prev());
        assert_eq!(cursor.current(), 1);
    }

    #[test]
    fn test_go_to_rejects_out_of_range() {
        let mut cursor = StepCursor::new(5);
        assert!(cursor.go_to(4));
        assert!(!cursor.go_to(5));
        assert_eq!(cursor.current(), 4);
    }

    #[test]
    fn test_empty_trace_cannot_move() {
        let mut cursor = StepCursor::new(0);
        assert!(!cursor.can_go_next());
        assert!(!cursor.can_go_prev());
        assert!(!cursor.next());
        assert!(!cursor.go_to(0));
    }

    #[test]
    fn test_set_total_rewinds() {
        let mut cursor = StepCursor::new(10);
        cursor.go_to(7);
        cursor.set_total(4);
        assert_eq!(cursor.current(), 0);
        assert_eq!(cursor.total(), 4);
    }

    #[test]
    fn test_cursor_covers_a_generated_trace() {
        let trace = generate(&ListModel::new(vec![3, 2, 0, -4], Some(1)).unwrap());
        let mut cursor = StepCursor::for_trace(&trace);

        let mut seen = 0;
        loop {
            assert!(trace.get(cursor.current()).is_some());
            seen += 1;
            if !cursor.next() {
                break;
            }
        }
        assert_eq!(seen, trace.len());
        assert!(!cursor.state().can_go_next);
    }

    #[test]
    fn test_state_snapshot_serializes() {
        let cursor = StepCursor::new(6);
        let json = serde_json::to_string(&cursor.state()).unwrap();
        let back: CursorState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cursor.state());
    }
}
