use proptest::prelude::*;

use seqmatch::{OpcodeTag, SequenceMatcher};

fn small_seq() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0u8..6, 0..60)
}

fn long_seq() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0u8..4, 190..260)
}

fn check_blocks(a: &[u8], b: &[u8], autojunk: bool) -> Result<(), TestCaseError> {
    let mut m = SequenceMatcher::configure().autojunk(autojunk).matcher(a, b);
    let blocks = m.matching_blocks().to_vec();

    let sentinel = blocks[blocks.len() - 1];
    prop_assert_eq!((sentinel.a, sentinel.b, sentinel.size), (a.len(), b.len(), 0));

    let total: usize = blocks.iter().map(|m| m.size).sum();
    prop_assert!(total <= a.len().min(b.len()));

    for block in &blocks[..blocks.len() - 1] {
        prop_assert!(block.size > 0);
        prop_assert_eq!(&a[block.a_range()], &b[block.b_range()]);
    }
    for pair in blocks.windows(2) {
        let (x, y) = (pair[0], pair[1]);
        prop_assert!(x.a + x.size <= y.a);
        prop_assert!(x.b + x.size <= y.b);
        if y.size > 0 {
            prop_assert!(x.a + x.size != y.a || x.b + x.size != y.b);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn matching_blocks_are_ordered_and_disjoint(a in small_seq(), b in small_seq()) {
        check_blocks(&a, &b, true)?;
    }

    #[test]
    fn matching_blocks_with_autojunk_in_effect(a in long_seq(), b in long_seq(), autojunk in any::<bool>()) {
        check_blocks(&a, &b, autojunk)?;
    }

    #[test]
    fn ratios_are_ordered(a in small_seq(), b in small_seq()) {
        let mut m = SequenceMatcher::new(&a, &b);
        let ratio = m.ratio();
        let quick = m.quick_ratio();
        let real_quick = m.real_quick_ratio();
        prop_assert!((0.0..=1.0).contains(&ratio));
        prop_assert!(quick >= ratio);
        prop_assert!(real_quick >= quick);
        prop_assert!(real_quick <= 1.0);
    }

    #[test]
    fn opcodes_rebuild_b(a in small_seq(), b in small_seq()) {
        let mut m = SequenceMatcher::new(&a, &b);
        let mut rebuilt = Vec::new();
        let mut pos = (0, 0);
        for op in m.opcodes() {
            prop_assert_eq!((op.a_start, op.b_start), pos);
            match op.tag {
                OpcodeTag::Equal => {
                    prop_assert_eq!(&a[op.a_range()], &b[op.b_range()]);
                    rebuilt.extend_from_slice(&a[op.a_range()]);
                }
                OpcodeTag::Delete => prop_assert_eq!(op.b_start, op.b_end),
                OpcodeTag::Insert => {
                    prop_assert_eq!(op.a_start, op.a_end);
                    rebuilt.extend_from_slice(&b[op.b_range()]);
                }
                OpcodeTag::Replace => rebuilt.extend_from_slice(&b[op.b_range()]),
            }
            pos = (op.a_end, op.b_end);
        }
        prop_assert_eq!(pos, (a.len(), b.len()));
        prop_assert_eq!(rebuilt, b.clone());
    }

    #[test]
    fn results_are_cached(a in small_seq(), b in small_seq()) {
        let mut m = SequenceMatcher::new(&a, &b);
        let blocks = m.matching_blocks().to_vec();
        let opcodes = m.opcodes().to_vec();
        prop_assert_eq!(m.matching_blocks(), &blocks[..]);
        prop_assert_eq!(m.opcodes(), &opcodes[..]);
    }

    #[test]
    fn reassignment_matches_fresh_matcher(a in small_seq(), b in small_seq(), c in small_seq()) {
        let mut m = SequenceMatcher::new(&a, &b);
        m.ratio();
        m.set_seq1(&c);
        let mut fresh = SequenceMatcher::new(&c, &b);
        prop_assert_eq!(m.matching_blocks(), fresh.matching_blocks());
        prop_assert_eq!(m.quick_ratio(), fresh.quick_ratio());

        m.set_seq2(&a);
        let mut fresh = SequenceMatcher::new(&c, &a);
        prop_assert_eq!(m.opcodes(), fresh.opcodes());
        prop_assert_eq!(m.quick_ratio(), fresh.quick_ratio());
    }

    #[test]
    fn longest_match_is_longest(a in small_seq(), b in small_seq()) {
        let mut m = SequenceMatcher::configure().autojunk(false).matcher(&a, &b);
        let best = m.find_longest_match(0..a.len(), 0..b.len());
        prop_assert_eq!(&a[best.a_range()], &b[best.b_range()]);
        let longer = best.size + 1;
        if longer <= b.len() {
            for window in b.windows(longer) {
                prop_assert!(!a.windows(longer).any(|x| x == window));
            }
        }
    }
}

#[test]
fn one_insert_at_front() {
    let a = vec![b'b'; 100];
    let mut b = vec![b'a'];
    b.extend_from_slice(&a);
    let mut m = SequenceMatcher::new(&a, &b);
    assert!((m.ratio() - 0.995).abs() < 0.001);
    let ops = m
        .opcodes()
        .iter()
        .map(|op| op.as_tag_tuple())
        .collect::<Vec<_>>();
    assert_eq!(
        ops,
        vec![
            (OpcodeTag::Insert, 0..0, 0..1),
            (OpcodeTag::Equal, 0..100, 1..101),
        ]
    );
}

#[test]
fn deep_decomposition_stays_iterative() {
    // every other element matches, which forces one work item per match
    let a = (0..3_000u32).collect::<Vec<_>>();
    let b = (0..3_000u32)
        .flat_map(|x| [x, u32::MAX - x])
        .collect::<Vec<_>>();
    let mut m = SequenceMatcher::configure().autojunk(false).matcher(&a, &b);
    assert_eq!(m.matching_blocks().len(), 3_001);
    assert!((m.ratio() - 2.0 * 3_000.0 / 9_000.0).abs() < 1e-9);
}
