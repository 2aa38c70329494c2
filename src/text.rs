//! Character level helpers for strings.
//!
//! A [`SequenceMatcher`] works on slices, so comparing two strings means
//! collecting their characters first.  The functions in this module do that
//! for the common one-shot cases.
//!
//! ```rust
//! # use seqmatch::text;
//! assert_eq!(text::ratio("abcd", "bcde"), 0.75);
//! let rv = text::get_close_matches("wheel", &["peel", "whale", "while"], 3, 0.6).unwrap();
//! assert_eq!(rv, vec!["peel", "whale", "while"]);
//! ```
//!
//! This is available by default through the `text` feature.
#![cfg(feature = "text")]

use crate::close::rank_close_matches;
use crate::error::Error;
use crate::matcher::SequenceMatcher;
use crate::types::Opcode;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Returns the similarity of two strings compared character by character.
///
/// See [`SequenceMatcher::ratio`].
pub fn ratio(a: &str, b: &str) -> f64 {
    let (a, b) = (chars(a), chars(b));
    let mut m = SequenceMatcher::new(&a, &b);
    m.ratio()
}

/// Returns the opcodes turning `a` into `b` character by character.
///
/// The ranges in the opcodes are character positions, not byte offsets.
pub fn opcodes(a: &str, b: &str) -> Vec<Opcode> {
    let (a, b) = (chars(a), chars(b));
    let mut m = SequenceMatcher::new(&a, &b);
    let rv = m.opcodes().to_vec();
    rv
}

/// Returns the best "good enough" matches for `word` among `possibilities`.
///
/// This is [`get_close_matches`](crate::get_close_matches) for strings.
pub fn get_close_matches<'c>(
    word: &str,
    possibilities: &[&'c str],
    n: usize,
    cutoff: f64,
) -> Result<Vec<&'c str>, Error> {
    let word = chars(word);
    let candidates = possibilities.iter().map(|x| chars(x)).collect::<Vec<_>>();
    Ok(
        rank_close_matches(&word, candidates.iter().map(|x| x.as_slice()), n, cutoff)?
            .into_iter()
            .map(|(idx, _)| possibilities[idx])
            .collect(),
    )
}

#[test]
fn test_ratio() {
    assert_eq!(ratio("", ""), 1.0);
    assert_eq!(ratio("abc", ""), 0.0);
    assert_eq!(ratio("hello", "hello"), 1.0);
    assert!((ratio("hello world", "hello java") - 0.5714).abs() < 0.0001);
}

#[test]
fn test_opcodes_count_chars() {
    insta::assert_debug_snapshot!(opcodes("añb", "ab"), @r###"
    [
        Opcode {
            tag: Equal,
            a_start: 0,
            a_end: 1,
            b_start: 0,
            b_end: 1,
        },
        Opcode {
            tag: Delete,
            a_start: 1,
            a_end: 2,
            b_start: 1,
            b_end: 1,
        },
        Opcode {
            tag: Equal,
            a_start: 2,
            a_end: 3,
            b_start: 1,
            b_end: 2,
        },
    ]
    "###);
}

#[test]
fn test_get_close_matches() {
    let possibilities = ["apple", "peach", "orange", "grape", "apricot", "pineapple"];
    let rv = get_close_matches("apple", &possibilities, 3, 0.6).unwrap();
    assert_eq!(rv, vec!["apple", "pineapple", "grape"]);
    assert_eq!(
        get_close_matches("apple", &possibilities, 0, 0.6),
        Err(Error::InvalidMaxResults)
    );
}
