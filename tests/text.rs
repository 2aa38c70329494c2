#![cfg(feature = "text")]

use seqmatch::{text, OpcodeTag};

#[test]
fn ratio_of_strings() {
    assert_eq!(text::ratio("abcd", "bcde"), 0.75);
    assert_eq!(text::ratio("", ""), 1.0);
}

#[test]
fn opcodes_of_strings() {
    let ops = text::opcodes("qabxcd", "abycdf");
    assert_eq!(
        ops.iter().map(|op| op.as_tag_tuple()).collect::<Vec<_>>(),
        vec![
            (OpcodeTag::Delete, 0..1, 0..0),
            (OpcodeTag::Equal, 1..3, 0..2),
            (OpcodeTag::Replace, 3..4, 2..3),
            (OpcodeTag::Equal, 4..6, 3..5),
            (OpcodeTag::Insert, 6..6, 5..6),
        ]
    );
}

#[test]
fn close_matches_of_strings() {
    let rv = text::get_close_matches("appel", &["ape", "apple", "peach", "puppy"], 3, 0.6).unwrap();
    assert_eq!(rv, vec!["apple", "ape"]);
}
