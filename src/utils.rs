//! Helpers shared by the matcher and the close match finder.

use crate::types::{Opcode, OpcodeTag};

/// Turns a number of matched elements into a ratio in `0.0..=1.0`.
///
/// `len` is the combined length of both sequences.  Two empty sequences
/// are considered identical.
pub fn calculate_ratio(matches: usize, len: usize) -> f64 {
    if len == 0 {
        1.0
    } else {
        2.0 * matches as f64 / len as f64
    }
}

/// Isolate change clusters by eliminating ranges with no changes.
///
/// This will leave holes behind in long periods of equal ranges so that
/// every group carries at most `n` equal elements of context around its
/// changes.
pub fn group_opcodes(mut ops: Vec<Opcode>, n: usize) -> Vec<Vec<Opcode>> {
    if ops.is_empty() {
        return vec![];
    }

    let mut pending_group = Vec::new();
    let mut rv = Vec::new();

    if let Some(op) = ops.first_mut() {
        if op.tag == OpcodeTag::Equal {
            let offset = op.a_range().len().saturating_sub(n);
            op.a_start += offset;
            op.b_start += offset;
        }
    }

    if let Some(op) = ops.last_mut() {
        if op.tag == OpcodeTag::Equal {
            let len = op.a_range().len().min(n);
            op.a_end = op.a_start + len;
            op.b_end = op.b_start + len;
        }
    }

    for op in ops.into_iter() {
        let len = op.a_range().len();
        // End the current group and start a new one whenever
        // there is a large range with no changes.
        if op.tag == OpcodeTag::Equal && len > n * 2 {
            pending_group.push(Opcode::new(
                OpcodeTag::Equal,
                op.a_start,
                op.a_start + n,
                op.b_start,
                op.b_start + n,
            ));
            rv.push(pending_group);
            pending_group = vec![Opcode::new(
                OpcodeTag::Equal,
                op.a_end - n,
                op.a_end,
                op.b_end - n,
                op.b_end,
            )];
            continue;
        }
        pending_group.push(op);
    }

    match &pending_group[..] {
        [] => {}
        [op] if op.tag == OpcodeTag::Equal => {}
        _ => rv.push(pending_group),
    }

    rv
}

#[test]
fn test_calculate_ratio() {
    assert_eq!(calculate_ratio(0, 0), 1.0);
    assert_eq!(calculate_ratio(0, 10), 0.0);
    assert_eq!(calculate_ratio(5, 10), 1.0);
    assert_eq!(calculate_ratio(3, 8), 0.75);
}

#[test]
fn test_group_opcodes_empty() {
    assert!(group_opcodes(vec![], 3).is_empty());
}

#[test]
fn test_group_opcodes_no_changes() {
    let ops = vec![Opcode::new(OpcodeTag::Equal, 0, 50, 0, 50)];
    assert!(group_opcodes(ops, 3).is_empty());
}

#[test]
fn test_group_opcodes_zero_context() {
    let ops = vec![
        Opcode::new(OpcodeTag::Equal, 0, 10, 0, 10),
        Opcode::new(OpcodeTag::Delete, 10, 12, 10, 10),
        Opcode::new(OpcodeTag::Equal, 12, 20, 10, 18),
        Opcode::new(OpcodeTag::Insert, 20, 20, 18, 19),
    ];
    insta::assert_debug_snapshot!(
        group_opcodes(ops, 0)
            .iter()
            .map(|group| group.iter().map(|op| op.as_tag_tuple()).collect::<Vec<_>>())
            .collect::<Vec<_>>(),
        @r###"
    [
        [
            (
                Equal,
                10..10,
                10..10,
            ),
            (
                Delete,
                10..12,
                10..10,
            ),
            (
                Equal,
                12..12,
                10..10,
            ),
        ],
        [
            (
                Equal,
                20..20,
                18..18,
            ),
            (
                Insert,
                20..20,
                18..19,
            ),
        ],
    ]
    "###
    );
}
