use serde::{Deserialize, Serialize};

use crate::code::CodeLine;

/// Outcome of the algorithm as known at a given step.
///
/// Every step before the final one carries `Undetermined`; exactly the
/// final record of a trace carries a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Undetermined,
    CycleFound,
    NoCycle,
}

impl Verdict {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Verdict::Undetermined)
    }

    /// The verdict as a boolean, once determined.
    pub fn has_cycle(self) -> Option<bool> {
        match self {
            Verdict::Undetermined => None,
            Verdict::CycleFound => Some(true),
            Verdict::NoCycle => Some(false),
        }
    }
}

/// An inline variable annotation: `name = display_value`, attached to a
/// display line of the reference code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarBinding {
    pub name: String,
    pub display_value: String,
    pub line: u32,
}

impl VarBinding {
    pub fn new(name: &str, display_value: impl Into<String>, line: CodeLine) -> Self {
        Self {
            name: name.to_string(),
            display_value: display_value.into(),
            line: line.line_number(),
        }
    }
}

/// One immutable snapshot of algorithm state at a micro-instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Zero-based position of this record within the trace.
    pub step_number: usize,
    pub code_line: CodeLine,
    /// Slow-pointer node index, `None` until positioned.
    pub slow_pos: Option<usize>,
    /// Fast-pointer node index, `None` until positioned.
    pub fast_pos: Option<usize>,
    pub variables: Vec<VarBinding>,
    /// Human-readable narration of this micro-step. Never empty.
    pub description: String,
    pub verdict: Verdict,
}

/// The full ordered step sequence for one input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub(crate) fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a record, assigning its step number from its position.
    pub(crate) fn record(
        &mut self,
        code_line: CodeLine,
        slow_pos: Option<usize>,
        fast_pos: Option<usize>,
        variables: Vec<VarBinding>,
        description: String,
        verdict: Verdict,
    ) {
        let step_number = self.steps.len();
        self.steps.push(Step {
            step_number,
            code_line,
            slow_pos,
            fast_pos,
            variables,
            description,
            verdict,
        });
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// The final verdict of the trace.
    pub fn verdict(&self) -> Verdict {
        self.steps
            .last()
            .map(|step| step.verdict)
            .unwrap_or(Verdict::Undetermined)
    }
}
