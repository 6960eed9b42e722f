use planar::{EmptyMst, GreedyProjectiveMst, MstProvider, REJECT_THRESHOLD, from_fn, index};

fn scenario_b_score(l: &char, r: &char, _: usize) -> f64 {
    match (*l, *r) {
        ('a', 'c') => 10.0,
        ('b', 'd') => 9.0,
        _ => 1.0,
    }
}

#[test]
fn greedy_mst_spans_the_sequence_without_crossings() {
    let items = ['a', 'b', 'c', 'd'];
    let n = index(&items);
    let tree = GreedyProjectiveMst.mst_parse(&n, &from_fn(scenario_b_score));
    assert_eq!(tree.spans().collect::<Vec<_>>(), vec![(0, 2), (0, 1), (0, 3)]);
    assert!(tree.is_planar());
}

#[test]
fn greedy_mst_prefers_heavier_attachments() {
    let items = ['a', 'b', 'c'];
    let n = index(&items);
    let scorer = from_fn(|l: &char, r: &char, _: usize| match (*l, *r) {
        ('a', 'b') => 5.0,
        ('b', 'c') => 3.0,
        _ => 1.0,
    });
    let tree = GreedyProjectiveMst.mst_parse(&n, &scorer);
    assert_eq!(tree.spans().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
}

#[test]
fn greedy_mst_leaves_unreachable_items_out() {
    let items = ['a', 'b', 'c', 'd'];
    let n = index(&items);
    let scorer = from_fn(|l: &char, r: &char, _: usize| match (*l, *r) {
        ('a', 'b') => 2.0,
        ('c', 'd') => 3.0,
        _ => REJECT_THRESHOLD,
    });
    let tree = GreedyProjectiveMst.mst_parse(&n, &scorer);
    assert_eq!(tree.spans().collect::<Vec<_>>(), vec![(2, 3)]);
}

#[test]
fn mst_of_short_or_rejected_sequences_is_empty() {
    let scorer = from_fn(|_: &char, _: &char, _: usize| REJECT_THRESHOLD);
    let items = ['a', 'b', 'c'];
    assert!(GreedyProjectiveMst.mst_parse(&index(&items), &scorer).is_empty());

    let one = ['a'];
    let ok = from_fn(|_: &char, _: &char, _: usize| 1.0);
    assert!(GreedyProjectiveMst.mst_parse(&index(&one), &ok).is_empty());
    assert!(EmptyMst.mst_parse(&index(&items), &ok).is_empty());
}
