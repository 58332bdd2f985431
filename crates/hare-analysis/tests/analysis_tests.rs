use hare_analysis::{analyze, cycle_aware_distance, VisitCounter};
use hare_model::ListModel;
use hare_trace::generate;

fn cyclic(values: &[i64], entry: usize) -> ListModel {
    ListModel::new(values.to_vec(), Some(entry)).unwrap()
}

#[test]
fn test_visit_counts_from_known_cyclic_trace() {
    // slow walks 0 -> 1 -> 2, fast walks 1 -> 3 -> 2, then they meet.
    let trace = generate(&cyclic(&[3, 2, 0, -4], 1));
    let counter = VisitCounter::from_trace(&trace);

    for node in [0, 1, 2] {
        assert_eq!(counter.slow_visits(node), 1);
    }
    assert_eq!(counter.slow_visits(3), 0);
    for node in [1, 2, 3] {
        assert_eq!(counter.fast_visits(node), 1);
    }
    assert_eq!(counter.fast_visits(0), 0);
}

#[test]
fn test_fast_pointer_revisit_shows_up() {
    // Two-node cycle at the head: fast starts on node 1 and returns to it.
    let trace = generate(&cyclic(&[1, 2], 0));
    let counter = VisitCounter::from_trace(&trace);

    assert_eq!(counter.fast_visits(1), 2);
    assert!(counter.is_revisited(1));
    assert!(!counter.is_revisited(0));
}

#[test]
fn test_empty_trace_counts_nothing() {
    let trace = generate(&ListModel::acyclic(vec![]));
    let counter = VisitCounter::from_trace(&trace);
    assert_eq!(counter.slow_visits(0), 0);
    assert_eq!(counter.fast_visits(0), 0);
}

#[test]
fn test_structure_and_distance_agree_on_cycle_membership() {
    let model = cyclic(&[1, 2, 3, 4, 5], 2);
    let info = analyze(&model);

    for &node in &info.cycle_nodes {
        assert!(cycle_aware_distance(node, node, &model).is_in_cycle);
    }
    for &node in &info.tail_nodes {
        assert!(!cycle_aware_distance(node, node, &model).is_in_cycle);
    }
}

#[test]
fn test_cycle_info_serializes_for_display() {
    let info = analyze(&cyclic(&[3, 2, 0, -4], 1));
    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["has_cycle"], true);
    assert_eq!(json["cycle_length"], 3);
    assert_eq!(json["tail_nodes"].as_array().unwrap().len(), 1);
}
