use hare_model::ListModel;

use crate::code::CodeLine;
use crate::step::{Trace, VarBinding, Verdict};

/// Generate the full step trace for a model.
///
/// Walks the reference algorithm's control flow, emitting one record per
/// executed line: method entry, the null/size checks, pointer
/// initialization, then the meet/end checks and pointer moves of each
/// loop iteration. One synchronous pass; the loop is bounded because the
/// fast pointer either runs off the end within `n` iterations or meets
/// the slow pointer within `n` iterations of entering the cycle.
pub fn generate(model: &ListModel) -> Trace {
    let mut trace = Trace::new();

    trace.record(
        CodeLine::MethodStart,
        None,
        None,
        Vec::new(),
        "Entering hasCycle".to_string(),
        Verdict::Undetermined,
    );

    if model.is_empty() {
        trace.record(
            CodeLine::NullCheck,
            None,
            None,
            vec![VarBinding::new("head", "null", CodeLine::NullCheck)],
            "Checking whether head is null".to_string(),
            Verdict::Undetermined,
        );
        trace.record(
            CodeLine::ReturnFalseEmpty,
            None,
            None,
            Vec::new(),
            "List is empty, returning false".to_string(),
            Verdict::NoCycle,
        );
        return trace;
    }

    if model.len() == 1 && model.cycle_entry().is_none() {
        trace.record(
            CodeLine::NullCheck,
            Some(0),
            None,
            vec![
                VarBinding::new("head", node_display(model, 0), CodeLine::NullCheck),
                VarBinding::new("head.next", "null", CodeLine::NullCheck),
            ],
            "Checking whether head.next is null".to_string(),
            Verdict::Undetermined,
        );
        trace.record(
            CodeLine::ReturnFalseEmpty,
            Some(0),
            None,
            Vec::new(),
            "Single node without a cycle, returning false".to_string(),
            Verdict::NoCycle,
        );
        return trace;
    }

    trace.record(
        CodeLine::NullCheck,
        Some(0),
        None,
        vec![VarBinding::new("head", node_display(model, 0), CodeLine::NullCheck)],
        "Checking whether the list is empty or has a single node".to_string(),
        Verdict::Undetermined,
    );

    let mut slow = 0usize;
    trace.record(
        CodeLine::InitSlow,
        Some(slow),
        None,
        vec![VarBinding::new("slow", indexed_display(model, slow), CodeLine::InitSlow)],
        "Initializing slow = head".to_string(),
        Verdict::Undetermined,
    );

    // fast = head.next goes through the successor function, not a literal
    // index 1: for a single self-looping node the successor of 0 is 0, and
    // both pointers start on the same node. The single acyclic node was
    // handled above, so index 0 always has a successor here.
    let mut fast = model.next_index(0).unwrap_or(0);
    trace.record(
        CodeLine::InitFast,
        Some(slow),
        Some(fast),
        vec![
            VarBinding::new("slow", indexed_display(model, slow), CodeLine::InitSlow),
            VarBinding::new("fast", indexed_display(model, fast), CodeLine::InitFast),
        ],
        "Initializing fast = head.next".to_string(),
        Verdict::Undetermined,
    );

    loop {
        trace.record(
            CodeLine::WhileCheck,
            Some(slow),
            Some(fast),
            vec![
                VarBinding::new("slow", indexed_display(model, slow), CodeLine::InitSlow),
                VarBinding::new("fast", indexed_display(model, fast), CodeLine::InitFast),
            ],
            format!("Checking slow != fast: {slow} vs {fast}"),
            Verdict::Undetermined,
        );

        if slow == fast {
            trace.record(
                CodeLine::ReturnTrue,
                Some(slow),
                Some(fast),
                Vec::new(),
                "Pointers met, cycle detected, returning true".to_string(),
                Verdict::CycleFound,
            );
            return trace;
        }

        // Both end-of-structure checks emit a record whether they pass or
        // fail, so a cyclic trace always carries two of them per advance.
        let fast_next = model.next_index(fast);
        trace.record(
            CodeLine::FastNullCheck,
            Some(slow),
            Some(fast),
            vec![
                VarBinding::new("fast", node_display(model, fast), CodeLine::FastNullCheck),
                VarBinding::new("fast.next", successor_display(model, fast_next), CodeLine::FastNullCheck),
            ],
            match fast_next {
                Some(_) => "Checking fast.next: not null, continuing".to_string(),
                None => "fast.next is null, no cycle".to_string(),
            },
            Verdict::Undetermined,
        );
        let Some(fast_next) = fast_next else {
            trace.record(
                CodeLine::ReturnFalseNoCycle,
                Some(slow),
                Some(fast),
                Vec::new(),
                "Fast pointer reached the end, returning false".to_string(),
                Verdict::NoCycle,
            );
            return trace;
        };

        let fast_next_next = model.next_index(fast_next);
        trace.record(
            CodeLine::FastNullCheck,
            Some(slow),
            Some(fast),
            vec![
                VarBinding::new(
                    "fast.next",
                    node_display(model, fast_next),
                    CodeLine::FastNullCheck,
                ),
                VarBinding::new(
                    "fast.next.next",
                    successor_display(model, fast_next_next),
                    CodeLine::FastNullCheck,
                ),
            ],
            match fast_next_next {
                Some(_) => "Checking fast.next.next: not null, continuing".to_string(),
                None => "fast.next.next is null, no cycle".to_string(),
            },
            Verdict::Undetermined,
        );
        let Some(fast_next_next) = fast_next_next else {
            trace.record(
                CodeLine::ReturnFalseNoCycle,
                Some(slow),
                Some(fast),
                Vec::new(),
                "Fast pointer reached the end, returning false".to_string(),
                Verdict::NoCycle,
            );
            return trace;
        };

        // The fast pointer is ahead of slow and its two successor checks
        // passed, so slow's successor exists on this path.
        let new_slow = model.next_index(slow).unwrap_or(slow);
        trace.record(
            CodeLine::SlowNext,
            Some(new_slow),
            Some(fast),
            vec![VarBinding::new("slow", indexed_display(model, new_slow), CodeLine::SlowNext)],
            format!("Slow pointer moves: {slow} -> {new_slow}"),
            Verdict::Undetermined,
        );
        slow = new_slow;

        trace.record(
            CodeLine::FastNext,
            Some(slow),
            Some(fast_next_next),
            vec![VarBinding::new(
                "fast",
                indexed_display(model, fast_next_next),
                CodeLine::FastNext,
            )],
            format!("Fast pointer moves: {fast} -> {fast_next_next}"),
            Verdict::Undetermined,
        );
        fast = fast_next_next;
    }
}

/// `node(v)` display form for a node's value.
fn node_display(model: &ListModel, index: usize) -> String {
    match model.value(index) {
        Some(value) => format!("node({value})"),
        None => "null".to_string(),
    }
}

/// Display form for a successor that may not exist.
fn successor_display(model: &ListModel, index: Option<usize>) -> String {
    match index {
        Some(i) => node_display(model, i),
        None => "null".to_string(),
    }
}

/// `node(v) [idx:i]` display form used for pointer bindings.
fn indexed_display(model: &ListModel, index: usize) -> String {
    match model.value(index) {
        Some(value) => format!("node({value}) [idx:{index}]"),
        None => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hare_model::ListModel;

    #[test]
    fn test_display_forms() {
        let model = ListModel::acyclic(vec![-4, 7]);
        assert_eq!(node_display(&model, 0), "node(-4)");
        assert_eq!(indexed_display(&model, 1), "node(7) [idx:1]");
        assert_eq!(node_display(&model, 9), "null");
    }

    #[test]
    fn test_start_record_shape() {
        let trace = generate(&ListModel::acyclic(vec![1, 2, 3]));
        let first = trace.get(0).unwrap();
        assert_eq!(first.code_line, CodeLine::MethodStart);
        assert_eq!(first.slow_pos, None);
        assert_eq!(first.fast_pos, None);
        assert_eq!(first.verdict, Verdict::Undetermined);
    }
}
