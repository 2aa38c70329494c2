use std::fmt;
use std::ops::Range;

/// A matching block between the two compared sequences.
///
/// A match `(a, b, size)` means that `a[a..a + size]` equals `b[b..b + size]`
/// element by element.  The list returned by
/// [`SequenceMatcher::matching_blocks`](crate::SequenceMatcher::matching_blocks)
/// always ends in a zero sized match at `(a.len(), b.len())`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Ord, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    /// Start of the match in the first sequence.
    pub a: usize,
    /// Start of the match in the second sequence.
    pub b: usize,
    /// Number of matching elements.
    pub size: usize,
}

impl Match {
    /// Creates a new match.
    pub fn new(a: usize, b: usize, size: usize) -> Match {
        Match { a, b, size }
    }

    /// The matched range in the first sequence.
    pub fn a_range(&self) -> Range<usize> {
        self.a..self.a + self.size
    }

    /// The matched range in the second sequence.
    pub fn b_range(&self) -> Range<usize> {
        self.b..self.b + self.size
    }

    /// Returns `true` for zero sized matches.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

/// The kind of an [`Opcode`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Ord, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum OpcodeTag {
    /// `a[a_start..a_end] == b[b_start..b_end]`
    Equal,
    /// `a[a_start..a_end]` should be replaced by `b[b_start..b_end]`
    Replace,
    /// `a[a_start..a_end]` should be deleted.  `b_start == b_end` in that case.
    Delete,
    /// `b[b_start..b_end]` should be inserted at `a[a_start..a_start]`.
    Insert,
}

impl fmt::Display for OpcodeTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            OpcodeTag::Equal => "equal",
            OpcodeTag::Replace => "replace",
            OpcodeTag::Delete => "delete",
            OpcodeTag::Insert => "insert",
        })
    }
}

/// One instruction of an edit script that turns `a` into `b`.
///
/// Opcodes produced by a matcher are contiguous: every opcode starts where
/// the previous one ended in both sequences, the first one starts at
/// `(0, 0)` and the last one ends at `(a.len(), b.len())`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Opcode {
    /// What the opcode does.
    pub tag: OpcodeTag,
    /// Start of the affected range in `a`.
    pub a_start: usize,
    /// End of the affected range in `a` (exclusive).
    pub a_end: usize,
    /// Start of the affected range in `b`.
    pub b_start: usize,
    /// End of the affected range in `b` (exclusive).
    pub b_end: usize,
}

impl Opcode {
    /// Creates a new opcode.
    pub fn new(tag: OpcodeTag, a_start: usize, a_end: usize, b_start: usize, b_end: usize) -> Opcode {
        Opcode {
            tag,
            a_start,
            a_end,
            b_start,
            b_end,
        }
    }

    /// Returns the range covered in the first sequence.
    pub fn a_range(&self) -> Range<usize> {
        self.a_start..self.a_end
    }

    /// Returns the range covered in the second sequence.
    pub fn b_range(&self) -> Range<usize> {
        self.b_start..self.b_end
    }

    /// Returns the opcode as a tag with both ranges.
    pub fn as_tag_tuple(&self) -> (OpcodeTag, Range<usize>, Range<usize>) {
        (self.tag, self.a_range(), self.b_range())
    }
}

#[test]
fn test_opcode_ranges() {
    let op = Opcode::new(OpcodeTag::Replace, 2, 5, 3, 4);
    assert_eq!(op.a_range(), 2..5);
    assert_eq!(op.b_range(), 3..4);
    assert_eq!(op.as_tag_tuple(), (OpcodeTag::Replace, 2..5, 3..4));
    assert_eq!(op.tag.to_string(), "replace");
}

#[test]
fn test_match_ranges() {
    let m = Match::new(3, 7, 4);
    assert_eq!(m.a_range(), 3..7);
    assert_eq!(m.b_range(), 7..11);
    assert!(!m.is_empty());
    assert!(Match::new(5, 5, 0).is_empty());
}

#[test]
#[cfg(feature = "serde")]
fn test_serde() {
    let op = Opcode::new(OpcodeTag::Insert, 0, 0, 0, 1);
    let json = serde_json::to_string(&op).unwrap();
    assert_eq!(
        json,
        r#"{"tag":"insert","a_start":0,"a_end":0,"b_start":0,"b_end":1}"#
    );
    let back: Opcode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, op);

    let m: Match = serde_json::from_str(r#"{"a":1,"b":2,"size":3}"#).unwrap();
    assert_eq!(m, Match::new(1, 2, 3));
}
