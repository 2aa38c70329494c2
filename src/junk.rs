//! The element index over `b` and the junk model that filters it.
//!
//! The index maps every element of `b` to the ascending positions where it
//! occurs.  Elements missing from the index never start a match.  Two kinds
//! of elements are left out:
//!
//! * junk: every element a [`JunkFilter`] flags.  These are remembered in the
//!   junk set so that matches can still be extended over them.
//! * popular: with the auto-junk heuristic enabled and `b` holding at least
//!   200 elements, every element occurring more than `len / 100 + 1` times.
//!   Popular elements are dropped from the index but are not junk.
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::trace::trace_index;

/// Minimum length of `b` before the auto-junk heuristic kicks in.
pub const AUTOJUNK_MIN_LEN: usize = 200;

/// Decides whether an element of `b` is junk.
///
/// Implemented for every `Fn(&T) -> bool`, so a closure is usually all
/// that is needed:
///
/// ```rust
/// # use seqmatch::MatcherConfig;
/// let a: Vec<char> = "private Thread currentThread;".chars().collect();
/// let b: Vec<char> = "private volatile Thread currentThread;".chars().collect();
/// let mut m = MatcherConfig::default()
///     .junk_filter(|c: &char| *c == ' ')
///     .matcher(&a, &b);
/// assert!(m.ratio() > 0.85);
/// ```
///
/// The filter is consulted once per distinct element of `b` each time `b`
/// changes and should give the same answer for the same element.
pub trait JunkFilter<T: ?Sized> {
    /// Returns `true` if `item` is junk.
    fn is_junk(&self, item: &T) -> bool;
}

impl<T: ?Sized, F> JunkFilter<T> for F
where
    F: Fn(&T) -> bool,
{
    fn is_junk(&self, item: &T) -> bool {
        self(item)
    }
}

/// Element positions of `b` with junk and popular elements removed.
#[derive(Debug, Clone)]
pub struct ElementIndex<'s, T> {
    b2j: HashMap<&'s T, Vec<usize>>,
    junk: HashSet<&'s T>,
}

impl<'s, T: Hash + Eq> Default for ElementIndex<'s, T> {
    fn default() -> Self {
        ElementIndex {
            b2j: HashMap::new(),
            junk: HashSet::new(),
        }
    }
}

impl<'s, T: Hash + Eq> ElementIndex<'s, T> {
    /// Builds the index over `b`.
    pub fn build(b: &'s [T], junk_filter: Option<&dyn JunkFilter<T>>, autojunk: bool) -> Self {
        let mut b2j: HashMap<&'s T, Vec<usize>> = HashMap::new();
        for (j, elt) in b.iter().enumerate() {
            b2j.entry(elt).or_default().push(j);
        }
        let distinct = b2j.len();

        let mut junk = HashSet::new();
        if let Some(filter) = junk_filter {
            b2j.retain(|elt, _| {
                if filter.is_junk(elt) {
                    junk.insert(*elt);
                    false
                } else {
                    true
                }
            });
        }

        let mut popular = 0;
        if autojunk && b.len() >= AUTOJUNK_MIN_LEN {
            let ntest = b.len() / 100 + 1;
            b2j.retain(|_, indices| {
                let keep = indices.len() <= ntest;
                if !keep {
                    popular += 1;
                }
                keep
            });
        }

        trace_index(b.len(), distinct, junk.len(), popular);
        ElementIndex { b2j, junk }
    }

    /// Returns the ascending positions of `elt` in `b`.
    ///
    /// Junk, popular and absent elements yield an empty slice.
    pub fn positions(&self, elt: &T) -> &[usize] {
        self.b2j.get(elt).map_or(&[][..], Vec::as_slice)
    }

    /// Returns `true` if `elt` was flagged by the junk filter.
    pub fn is_junk(&self, elt: &T) -> bool {
        self.junk.contains(elt)
    }

    /// The elements of `b` flagged by the junk filter.
    pub fn junk(&self) -> &HashSet<&'s T> {
        &self.junk
    }
}

#[test]
fn test_build_plain() {
    let b: Vec<char> = "abcab".chars().collect();
    let index = ElementIndex::build(&b, None, true);
    assert_eq!(index.positions(&'a'), &[0, 3]);
    assert_eq!(index.positions(&'b'), &[1, 4]);
    assert_eq!(index.positions(&'c'), &[2]);
    assert_eq!(index.positions(&'z'), &[] as &[usize]);
    assert!(index.junk().is_empty());
}

#[test]
fn test_build_junk() {
    let b: Vec<char> = "a b c".chars().collect();
    let filter = |c: &char| *c == ' ';
    let index = ElementIndex::build(&b, Some(&filter), true);
    assert!(index.positions(&' ').is_empty());
    assert!(index.is_junk(&' '));
    assert_eq!(index.positions(&'a'), &[0]);
    assert!(!index.is_junk(&'a'));
    assert_eq!(index.junk().len(), 1);
}

#[test]
fn test_filter_called_once_per_value() {
    use std::cell::Cell;

    let b: Vec<char> = "aaaabbbbcccc".chars().collect();
    let calls = Cell::new(0);
    let filter = |_: &char| {
        calls.set(calls.get() + 1);
        false
    };
    ElementIndex::build(&b, Some(&filter), true);
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_popular() {
    // 200 elements: ntest = 3, so `x` (4 times) is popular and `y` (3 times) is not
    let mut b = vec!['x'; 4];
    b.extend(std::iter::repeat('y').take(3));
    b.extend((0..193).map(|i| char::from_u32(0x100 + i).unwrap()));
    assert_eq!(b.len(), 200);

    let index = ElementIndex::build(&b, None, true);
    assert!(index.positions(&'x').is_empty());
    assert!(!index.is_junk(&'x'));
    assert_eq!(index.positions(&'y'), &[4, 5, 6]);

    let index = ElementIndex::build(&b, None, false);
    assert_eq!(index.positions(&'x'), &[0, 1, 2, 3]);
}

#[test]
fn test_popular_needs_min_len() {
    let b = vec!['x'; 199];
    let index = ElementIndex::build(&b, None, true);
    assert_eq!(index.positions(&'x').len(), 199);
}
