//! The edit script seam: matching blocks replayed as callbacks.
//!
//! A matcher only knows where `a` and `b` agree.  [`replay_blocks`] walks
//! those matching blocks in order and reports the stretch before each block
//! as a replace, delete or insert and the block itself as equal.  Opcodes
//! are nothing but what [`Capture`] records from that walk.
use std::convert::Infallible;

use crate::types::{Match, Opcode, OpcodeTag};

/// Receives the edit script replayed from a list of matching blocks.
///
/// [`replay_blocks`] calls the methods in ascending position order, once per
/// matching block and once per gap in front of a block, then calls
/// [`finish`](Self::finish).  A hook only implements what it cares about;
/// the other methods do nothing by default.  Hooks see indexes only.
pub trait DiffHook: Sized {
    /// The error produced from the hook methods.
    type Error;

    /// Called for a non-empty matching block: `a[a_index..a_index + len]`
    /// equals `b[b_index..b_index + len]`.
    fn equal(&mut self, a_index: usize, b_index: usize, len: usize) -> Result<(), Self::Error> {
        let _ = a_index;
        let _ = b_index;
        let _ = len;
        Ok(())
    }

    /// Called for a gap that only exists in `a`.  `b_index` is where the
    /// next matching block starts in `b`.
    fn delete(&mut self, a_index: usize, a_len: usize, b_index: usize) -> Result<(), Self::Error> {
        let _ = a_index;
        let _ = a_len;
        let _ = b_index;
        Ok(())
    }

    /// Called for a gap that only exists in `b`.  `a_index` is where the
    /// next matching block starts in `a`.
    fn insert(&mut self, a_index: usize, b_index: usize, b_len: usize) -> Result<(), Self::Error> {
        let _ = a_index;
        let _ = b_index;
        let _ = b_len;
        Ok(())
    }

    /// Called for a gap that is open in both sequences.
    ///
    /// Falls back to [`delete`](Self::delete) followed by
    /// [`insert`](Self::insert).
    fn replace(
        &mut self,
        a_index: usize,
        a_len: usize,
        b_index: usize,
        b_len: usize,
    ) -> Result<(), Self::Error> {
        self.delete(a_index, a_len, b_index)?;
        self.insert(a_index, b_index, b_len)
    }

    /// Called once after the sentinel block.
    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<'a, D: DiffHook + 'a> DiffHook for &'a mut D {
    type Error = D::Error;

    fn equal(&mut self, a_index: usize, b_index: usize, len: usize) -> Result<(), Self::Error> {
        (*self).equal(a_index, b_index, len)
    }

    fn delete(&mut self, a_index: usize, a_len: usize, b_index: usize) -> Result<(), Self::Error> {
        (*self).delete(a_index, a_len, b_index)
    }

    fn insert(&mut self, a_index: usize, b_index: usize, b_len: usize) -> Result<(), Self::Error> {
        (*self).insert(a_index, b_index, b_len)
    }

    fn replace(
        &mut self,
        a_index: usize,
        a_len: usize,
        b_index: usize,
        b_len: usize,
    ) -> Result<(), Self::Error> {
        (*self).replace(a_index, a_len, b_index, b_len)
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        (*self).finish()
    }
}

/// A [`DiffHook`] that captures all operations as [`Opcode`]s.
#[derive(Default, Clone, Debug)]
pub struct Capture(Vec<Opcode>);

impl Capture {
    /// Creates a new capture hook.
    pub fn new() -> Capture {
        Capture::default()
    }

    /// Converts the capture hook into a vector of opcodes.
    pub fn into_opcodes(self) -> Vec<Opcode> {
        self.0
    }

    /// Accesses the captured opcodes.
    pub fn opcodes(&self) -> &[Opcode] {
        &self.0
    }
}

impl DiffHook for Capture {
    type Error = Infallible;

    fn equal(&mut self, a_index: usize, b_index: usize, len: usize) -> Result<(), Self::Error> {
        self.0.push(Opcode::new(
            OpcodeTag::Equal,
            a_index,
            a_index + len,
            b_index,
            b_index + len,
        ));
        Ok(())
    }

    fn delete(&mut self, a_index: usize, a_len: usize, b_index: usize) -> Result<(), Self::Error> {
        self.0.push(Opcode::new(
            OpcodeTag::Delete,
            a_index,
            a_index + a_len,
            b_index,
            b_index,
        ));
        Ok(())
    }

    fn insert(&mut self, a_index: usize, b_index: usize, b_len: usize) -> Result<(), Self::Error> {
        self.0.push(Opcode::new(
            OpcodeTag::Insert,
            a_index,
            a_index,
            b_index,
            b_index + b_len,
        ));
        Ok(())
    }

    fn replace(
        &mut self,
        a_index: usize,
        a_len: usize,
        b_index: usize,
        b_len: usize,
    ) -> Result<(), Self::Error> {
        self.0.push(Opcode::new(
            OpcodeTag::Replace,
            a_index,
            a_index + a_len,
            b_index,
            b_index + b_len,
        ));
        Ok(())
    }
}

/// Walks a list of matching blocks and reports the edit script to a hook.
///
/// Gaps open in both sequences become replacements, gaps in only one of
/// them become deletions or insertions.  `blocks` must be sorted and
/// non-overlapping, as returned by
/// [`SequenceMatcher::matching_blocks`](crate::SequenceMatcher::matching_blocks).
pub fn replay_blocks<D: DiffHook>(d: &mut D, blocks: &[Match]) -> Result<(), D::Error> {
    let mut i = 0;
    let mut j = 0;
    for block in blocks {
        if i < block.a && j < block.b {
            d.replace(i, block.a - i, j, block.b - j)?;
        } else if i < block.a {
            d.delete(i, block.a - i, j)?;
        } else if j < block.b {
            d.insert(i, j, block.b - j)?;
        }
        if block.size > 0 {
            d.equal(block.a, block.b, block.size)?;
        }
        i = block.a + block.size;
        j = block.b + block.size;
    }
    d.finish()
}

#[test]
fn test_replay_blocks() {
    let blocks = [Match::new(0, 0, 2), Match::new(3, 2, 2), Match::new(5, 4, 0)];
    let mut d = Capture::new();
    replay_blocks(&mut d, &blocks).unwrap();
    insta::assert_debug_snapshot!(d.opcodes(), @r###"
    [
        Opcode {
            tag: Equal,
            a_start: 0,
            a_end: 2,
            b_start: 0,
            b_end: 2,
        },
        Opcode {
            tag: Delete,
            a_start: 2,
            a_end: 3,
            b_start: 2,
            b_end: 2,
        },
        Opcode {
            tag: Equal,
            a_start: 3,
            a_end: 5,
            b_start: 2,
            b_end: 4,
        },
    ]
    "###);
}

#[test]
fn test_replay_default_replace() {
    struct D(Vec<String>);
    impl DiffHook for D {
        type Error = ();
        fn equal(&mut self, a: usize, b: usize, len: usize) -> Result<(), ()> {
            self.0.push(format!("equal {:?} {:?} {:?}", a, b, len));
            Ok(())
        }
        fn delete(&mut self, a: usize, len: usize, b: usize) -> Result<(), ()> {
            self.0.push(format!("delete {:?} {:?} {:?}", a, len, b));
            Ok(())
        }
        fn insert(&mut self, a: usize, b: usize, len: usize) -> Result<(), ()> {
            self.0.push(format!("insert {:?} {:?} {:?}", a, b, len));
            Ok(())
        }
    }

    let blocks = [Match::new(2, 3, 1), Match::new(4, 4, 0)];
    let mut d = D(Vec::new());
    replay_blocks(&mut d, &blocks).unwrap();
    assert_eq!(
        d.0,
        vec![
            "delete 0 2 0",
            "insert 0 0 3",
            "equal 2 3 1",
            "delete 3 1 4",
        ]
    );
}

#[test]
fn test_replay_empty() {
    let mut d = Capture::new();
    replay_blocks(&mut d, &[Match::new(0, 0, 0)]).unwrap();
    assert!(d.opcodes().is_empty());
}

#[test]
fn test_replay_through_borrowed_hook() {
    let blocks = [Match::new(1, 0, 1), Match::new(2, 2, 0)];
    let mut capture = Capture::new();
    let mut borrowed = &mut capture;
    replay_blocks(&mut borrowed, &blocks).unwrap();
    assert_eq!(
        capture
            .opcodes()
            .iter()
            .map(|op| op.as_tag_tuple())
            .collect::<Vec<_>>(),
        vec![
            (OpcodeTag::Delete, 0..1, 0..0),
            (OpcodeTag::Equal, 1..2, 0..1),
            (OpcodeTag::Insert, 2..2, 1..2),
        ]
    );
}
