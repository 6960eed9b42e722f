use planar::candidates::{CandidateStats, generate, generate_with_stats};
use planar::rank::rank;
use planar::{Graph, REJECT_THRESHOLD, Wedge, from_fn, index};

fn spans(ws: &[Wedge<'_, char>]) -> Vec<(usize, usize)> {
    ws.iter().map(|w| w.span()).collect()
}

#[test]
fn generate_enumerates_all_pairs_left_then_right() {
    let items = ['a', 'b', 'c', 'd'];
    let n = index(&items);
    let scorer = from_fn(|_: &char, _: &char, d: usize| d as f64);
    let c = generate(&n, &Graph::new(), &scorer);
    assert_eq!(
        spans(&c),
        vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
    );
    let weights: Vec<f64> = c.iter().map(|w| w.weight()).collect();
    assert_eq!(weights, vec![1.0, 2.0, 3.0, 1.0, 2.0, 1.0]);
}

#[test]
fn generate_passes_items_and_distance_to_scorer() {
    let items = ['x', 'y', 'z'];
    let n = index(&items);
    let scorer = from_fn(|l: &char, r: &char, d: usize| {
        assert!(l < r);
        assert_eq!((*r as usize) - (*l as usize), d);
        1.0
    });
    assert_eq!(generate(&n, &Graph::new(), &scorer).len(), 3);
}

#[test]
fn generate_drops_threshold_and_crossing_pairs() {
    let items = ['a', 'b', 'c', 'd'];
    let n = index(&items);
    let base = Graph::from_wedges([Wedge::new(n[0], n[2], 5.0).unwrap()]);
    let scorer = from_fn(|l: &char, r: &char, _: usize| match (*l, *r) {
        ('a', 'b') => REJECT_THRESHOLD,
        ('c', 'd') => f64::NAN,
        _ => 1.0,
    });
    let (c, stats) = generate_with_stats(&n, &base, &scorer);
    // (1,3) crosses (0,2); the base edge itself is still produced.
    assert_eq!(spans(&c), vec![(0, 2), (0, 3), (1, 2)]);
    assert_eq!(
        stats,
        CandidateStats {
            scored: 6,
            below_threshold: 2,
            crossing_base: 1,
        }
    );
}

#[test]
fn generate_on_short_sequences_is_empty() {
    let scorer = from_fn(|_: &char, _: &char, _: usize| 1.0);
    let none: [char; 0] = [];
    assert!(generate(&index(&none), &Graph::new(), &scorer).is_empty());
    let one = ['a'];
    assert!(generate(&index(&one), &Graph::new(), &scorer).is_empty());
}

#[test]
fn rank_is_descending_and_stable_on_ties() {
    let items = ['a', 'b', 'c'];
    let n = index(&items);
    let scorer = from_fn(|_: &char, _: &char, d: usize| d as f64);
    let ranked = rank(generate(&n, &Graph::new(), &scorer));
    assert_eq!(spans(&ranked), vec![(0, 2), (0, 1), (1, 2)]);
}

#[test]
fn rank_keeps_generation_order_for_all_equal_weights() {
    let items = ['a', 'b', 'c', 'd', 'e'];
    let n = index(&items);
    let scorer = from_fn(|_: &char, _: &char, _: usize| 0.5);
    let generated = generate(&n, &Graph::new(), &scorer);
    let ranked = rank(generated.clone());
    assert_eq!(spans(&ranked), spans(&generated));
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_generation_matches_sequential() {
    use planar::candidates::generate_parallel;

    let items: Vec<u32> = (0..40).collect();
    let n = index(&items);
    let scorer = from_fn(|l: &u32, r: &u32, d: usize| {
        if (l + r) % 7 == 0 {
            REJECT_THRESHOLD
        } else {
            f64::from((l * 31 + r * 17) % 11) - d as f64 * 0.1
        }
    });
    let base = Graph::from_wedges([Wedge::new(n[3], n[20], 1.0).unwrap()]);
    let seq = generate(&n, &base, &scorer);
    let par = generate_parallel(&n, &base, &scorer);
    assert_eq!(seq, par);
}
