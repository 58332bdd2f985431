use std::collections::HashMap;

use hare_trace::{CodeLine, Trace};

/// Per-pointer visit counts, keyed by node index.
///
/// A node is "visited" each time a pointer is placed on it, including
/// the initial placement.
#[derive(Debug, Clone, Default)]
pub struct VisitCounter {
    slow: HashMap<usize, u32>,
    fast: HashMap<usize, u32>,
}

impl VisitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every pointer placement in a finished trace.
    pub fn from_trace(trace: &Trace) -> Self {
        let mut counter = Self::new();
        for step in trace.steps() {
            match step.code_line {
                CodeLine::InitSlow | CodeLine::SlowNext => {
                    if let Some(pos) = step.slow_pos {
                        counter.record_slow(pos);
                    }
                }
                CodeLine::InitFast | CodeLine::FastNext => {
                    if let Some(pos) = step.fast_pos {
                        counter.record_fast(pos);
                    }
                }
                _ => {}
            }
        }
        counter
    }

    pub fn record_slow(&mut self, node: usize) {
        *self.slow.entry(node).or_insert(0) += 1;
    }

    pub fn record_fast(&mut self, node: usize) {
        *self.fast.entry(node).or_insert(0) += 1;
    }

    pub fn slow_visits(&self, node: usize) -> u32 {
        self.slow.get(&node).copied().unwrap_or(0)
    }

    pub fn fast_visits(&self, node: usize) -> u32 {
        self.fast.get(&node).copied().unwrap_or(0)
    }

    /// Whether either pointer has landed on this node more than once.
    pub fn is_revisited(&self, node: usize) -> bool {
        self.slow_visits(node) > 1 || self.fast_visits(node) > 1
    }

    pub fn reset(&mut self) {
        self.slow.clear();
        self.fast.clear();
    }
}

/// Opacity parameters for pointer trails.
#[derive(Debug, Clone, Copy)]
pub struct TrailConfig {
    pub base_opacity: f64,
    pub intensity_step: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            base_opacity: 0.3,
            intensity_step: 0.15,
        }
    }
}

/// Trail opacity for a visit count: base plus a step per revisit,
/// clamped to 1.0. Zero visits leave no trail.
pub fn trail_intensity(visits: u32, config: &TrailConfig) -> f64 {
    if visits == 0 {
        return 0.0;
    }
    let intensity = config.base_opacity + f64::from(visits - 1) * config.intensity_step;
    intensity.min(1.0)
}
