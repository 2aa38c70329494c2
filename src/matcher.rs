use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::ops::Range;
use std::sync::Arc;

use crate::hook::{replay_blocks, Capture, DiffHook};
use crate::junk::{ElementIndex, JunkFilter};
use crate::trace::trace_blocks;
use crate::types::{Match, Opcode};
use crate::utils::{calculate_ratio, group_opcodes};

/// A builder type config for a [`SequenceMatcher`].
///
/// By default no junk filter is installed and the auto-junk heuristic is
/// enabled.
pub struct MatcherConfig<'s, T> {
    junk_filter: Option<Arc<dyn JunkFilter<T> + 's>>,
    autojunk: bool,
}

impl<'s, T> Default for MatcherConfig<'s, T> {
    fn default() -> Self {
        MatcherConfig {
            junk_filter: None,
            autojunk: true,
        }
    }
}

impl<'s, T> Clone for MatcherConfig<'s, T> {
    fn clone(&self) -> Self {
        MatcherConfig {
            junk_filter: self.junk_filter.clone(),
            autojunk: self.autojunk,
        }
    }
}

impl<'s, T> fmt::Debug for MatcherConfig<'s, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatcherConfig")
            .field("junk_filter", &self.junk_filter.is_some())
            .field("autojunk", &self.autojunk)
            .finish()
    }
}

impl<'s, T: Hash + Eq> MatcherConfig<'s, T> {
    /// Installs a junk filter.
    ///
    /// Elements of `b` for which the filter returns `true` never start or
    /// end a match on their own; they only become part of a match when
    /// they are adjacent to an interesting one.
    pub fn junk_filter<F: JunkFilter<T> + 's>(&mut self, filter: F) -> &mut Self {
        self.junk_filter = Some(Arc::new(filter));
        self
    }

    /// Enables or disables the auto-junk heuristic.
    ///
    /// When enabled and `b` holds at least 200 elements, every element
    /// that makes up more than 1% of `b` (plus one) is ignored when looking
    /// for matches.  The default is `true`.
    pub fn autojunk(&mut self, yes: bool) -> &mut Self {
        self.autojunk = yes;
        self
    }

    /// Creates a matcher comparing `a` against `b`.
    pub fn matcher(&self, a: &'s [T], b: &'s [T]) -> SequenceMatcher<'s, T> {
        let mut rv = SequenceMatcher {
            a,
            b,
            junk_filter: self.junk_filter.clone(),
            autojunk: self.autojunk,
            index: ElementIndex::default(),
            matching_blocks: None,
            opcodes: None,
            full_b_count: None,
            j2len: HashMap::new(),
            new_j2len: HashMap::new(),
            queue: Vec::new(),
        };
        rv.chain_b();
        rv
    }
}

/// Compares two sequences of hashable elements.
///
/// The algorithm looks for the longest contiguous matching subsequence that
/// contains no junk, then applies the same idea to the pieces left and right
/// of it.  This does not yield minimal edit scripts but tends to produce
/// matches that look right to people.
///
/// The index over `b` is built when `b` is assigned, so when comparing one
/// sequence against many others it is cheapest to keep it as `b` and to
/// reassign `a` through [`set_seq1`](Self::set_seq1).
///
/// ```rust
/// # use seqmatch::SequenceMatcher;
/// let a: Vec<char> = "hello world".chars().collect();
/// let b: Vec<char> = "hello java".chars().collect();
/// let mut m = SequenceMatcher::new(&a, &b);
/// assert!((m.ratio() - 0.5714).abs() < 0.0001);
/// ```
///
/// Matching blocks, opcodes and the element counts used by
/// [`quick_ratio`](Self::quick_ratio) are computed on first use and cached
/// until one of the sequences changes.
pub struct SequenceMatcher<'s, T> {
    a: &'s [T],
    b: &'s [T],
    junk_filter: Option<Arc<dyn JunkFilter<T> + 's>>,
    autojunk: bool,
    index: ElementIndex<'s, T>,
    matching_blocks: Option<Vec<Match>>,
    opcodes: Option<Vec<Opcode>>,
    full_b_count: Option<HashMap<&'s T, usize>>,
    // scratch space reused between calls, reset whenever `b` changes
    j2len: HashMap<usize, usize>,
    new_j2len: HashMap<usize, usize>,
    queue: Vec<(Range<usize>, Range<usize>)>,
}

impl<'s, T: fmt::Debug> fmt::Debug for SequenceMatcher<'s, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceMatcher")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("autojunk", &self.autojunk)
            .field("matching_blocks", &self.matching_blocks)
            .finish()
    }
}

impl<'s, T: Hash + Eq> SequenceMatcher<'s, T> {
    /// Creates a matcher with no junk filter and auto-junk enabled.
    ///
    /// Equivalent to `MatcherConfig::default().matcher(a, b)`.
    pub fn new(a: &'s [T], b: &'s [T]) -> SequenceMatcher<'s, T> {
        MatcherConfig::default().matcher(a, b)
    }

    /// Configures a matcher before creating it.
    pub fn configure() -> MatcherConfig<'s, T> {
        MatcherConfig::default()
    }

    /// Returns the first sequence.
    pub fn a(&self) -> &'s [T] {
        self.a
    }

    /// Returns the second sequence.
    pub fn b(&self) -> &'s [T] {
        self.b
    }

    /// Returns `true` if the auto-junk heuristic is enabled.
    pub fn autojunk(&self) -> bool {
        self.autojunk
    }

    /// Replaces both sequences.
    pub fn set_seqs(&mut self, a: &'s [T], b: &'s [T]) {
        self.set_seq1(a);
        self.set_seq2(b);
    }

    /// Replaces the first sequence.
    ///
    /// Assigning a sequence equal to the current one keeps all cached state.
    pub fn set_seq1(&mut self, a: &'s [T]) {
        if self.a == a {
            return;
        }
        self.a = a;
        self.matching_blocks = None;
        self.opcodes = None;
    }

    /// Replaces the second sequence and rebuilds the element index.
    ///
    /// Assigning a sequence equal to the current one keeps all cached state.
    pub fn set_seq2(&mut self, b: &'s [T]) {
        if self.b == b {
            return;
        }
        self.b = b;
        self.matching_blocks = None;
        self.opcodes = None;
        self.full_b_count = None;
        self.j2len.clear();
        self.new_j2len.clear();
        self.queue.clear();
        self.chain_b();
    }

    fn chain_b(&mut self) {
        self.index = ElementIndex::build(self.b, self.junk_filter.as_deref(), self.autojunk);
    }

    /// The elements of `b` that the junk filter flagged.
    ///
    /// Popular elements dropped by the auto-junk heuristic are not junk and
    /// are not part of this set.
    pub fn bjunk(&self) -> impl Iterator<Item = &'s T> + '_ {
        self.index.junk().iter().copied()
    }

    /// Finds the longest matching block in `a[a_range]` and `b[b_range]`.
    ///
    /// Of all longest junk-free blocks this returns the one that starts
    /// earliest in `a`, and of those the one that starts earliest in `b`.
    /// The block is then extended as far as possible over equal non-junk
    /// elements and after that over equal junk elements on both sides.
    ///
    /// If nothing matches a zero sized match at the start of both ranges
    /// is returned.
    ///
    /// ```rust
    /// # use seqmatch::SequenceMatcher;
    /// let a: Vec<char> = "foo bar".chars().collect();
    /// let b: Vec<char> = "foo baz bar".chars().collect();
    /// let mut m = SequenceMatcher::new(&a, &b);
    /// let rv = m.find_longest_match(0..a.len(), 0..b.len());
    /// assert_eq!((rv.a, rv.b, rv.size), (0, 0, 6));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if a range is inverted or extends past the end of its
    /// sequence.
    pub fn find_longest_match(&mut self, a_range: Range<usize>, b_range: Range<usize>) -> Match {
        assert!(
            a_range.start <= a_range.end && a_range.end <= self.a.len(),
            "range {:?} out of bounds for first sequence of length {}",
            a_range,
            self.a.len()
        );
        assert!(
            b_range.start <= b_range.end && b_range.end <= self.b.len(),
            "range {:?} out of bounds for second sequence of length {}",
            b_range,
            self.b.len()
        );
        self.longest_match(a_range, b_range)
    }

    fn longest_match(&mut self, a_range: Range<usize>, b_range: Range<usize>) -> Match {
        let (a, b) = (self.a, self.b);
        let (alo, ahi) = (a_range.start, a_range.end);
        let (blo, bhi) = (b_range.start, b_range.end);
        let mut besti = alo;
        let mut bestj = blo;
        let mut bestsize = 0;

        // j2len[j] is the length of the longest junk-free match ending
        // with a[i - 1] and b[j]
        self.j2len.clear();
        for i in alo..ahi {
            self.new_j2len.clear();
            for &j in self.index.positions(&a[i]) {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = j
                    .checked_sub(1)
                    .and_then(|prev| self.j2len.get(&prev))
                    .map_or(0, |&k| k)
                    + 1;
                self.new_j2len.insert(j, k);
                if k > bestsize {
                    besti = i + 1 - k;
                    bestj = j + 1 - k;
                    bestsize = k;
                }
            }
            std::mem::swap(&mut self.j2len, &mut self.new_j2len);
        }

        // Extend over equal non-junk elements first and only then over
        // junk, so junk only ends up at the edges of a block when it sits
        // next to an interesting match.
        for junk in [false, true] {
            while besti > alo
                && bestj > blo
                && self.index.is_junk(&b[bestj - 1]) == junk
                && a[besti - 1] == b[bestj - 1]
            {
                besti -= 1;
                bestj -= 1;
                bestsize += 1;
            }
            while besti + bestsize < ahi
                && bestj + bestsize < bhi
                && self.index.is_junk(&b[bestj + bestsize]) == junk
                && a[besti + bestsize] == b[bestj + bestsize]
            {
                bestsize += 1;
            }
        }

        Match::new(besti, bestj, bestsize)
    }

    /// Returns the list of matching blocks.
    ///
    /// The blocks are strictly ascending and non-overlapping in both
    /// sequences and no two neighbouring blocks are adjacent in both
    /// sequences at once.  The last block is always the zero sized
    /// `(a.len(), b.len(), 0)` and it is the only block of size zero.
    ///
    /// ```rust
    /// # use seqmatch::{Match, SequenceMatcher};
    /// let a: Vec<char> = "abxcd".chars().collect();
    /// let b: Vec<char> = "abcd".chars().collect();
    /// let mut m = SequenceMatcher::new(&a, &b);
    /// assert_eq!(
    ///     m.matching_blocks(),
    ///     &[Match::new(0, 0, 2), Match::new(3, 2, 2), Match::new(5, 4, 0)]
    /// );
    /// ```
    pub fn matching_blocks(&mut self) -> &[Match] {
        let blocks = match self.matching_blocks.take() {
            Some(blocks) => blocks,
            None => self.compute_matching_blocks(),
        };
        self.matching_blocks.insert(blocks)
    }

    fn compute_matching_blocks(&mut self) -> Vec<Match> {
        let la = self.a.len();
        let lb = self.b.len();

        // The natural formulation recurses into both remainders.  An
        // explicit work list keeps the stack flat on inputs that only ever
        // leave a remainder on one side.
        let mut queue = std::mem::take(&mut self.queue);
        queue.clear();
        queue.push((0..la, 0..lb));
        let mut rounds = 0;
        let mut blocks = Vec::new();
        while let Some((a_range, b_range)) = queue.pop() {
            rounds += 1;
            let m = self.longest_match(a_range.clone(), b_range.clone());
            if m.size == 0 {
                continue;
            }
            blocks.push(m);
            if a_range.start < m.a && b_range.start < m.b {
                queue.push((a_range.start..m.a, b_range.start..m.b));
            }
            if m.a + m.size < a_range.end && m.b + m.size < b_range.end {
                queue.push((m.a + m.size..a_range.end, m.b + m.size..b_range.end));
            }
        }
        self.queue = queue;
        blocks.sort_unstable();

        // Blocks found in different rounds can touch; collapse those.
        let mut rv: Vec<Match> = Vec::with_capacity(blocks.len() + 1);
        for m in blocks {
            match rv.last_mut() {
                Some(last) if last.a + last.size == m.a && last.b + last.size == m.b => {
                    last.size += m.size;
                }
                _ => rv.push(m),
            }
        }
        rv.push(Match::new(la, lb, 0));
        trace_blocks(rounds, rv.len());
        rv
    }

    /// Reports the edit script that turns `a` into `b` to a [`DiffHook`].
    pub fn diff<D: DiffHook>(&mut self, d: &mut D) -> Result<(), D::Error> {
        replay_blocks(d, self.matching_blocks())
    }

    /// Returns the opcodes describing how to turn `a` into `b`.
    ///
    /// The first opcode starts at `(0, 0)`, every following opcode starts
    /// where the previous one ended and the last one ends at
    /// `(a.len(), b.len())`.
    ///
    /// ```rust
    /// # use seqmatch::{Opcode, OpcodeTag, SequenceMatcher};
    /// let a: Vec<char> = "qabxcd".chars().collect();
    /// let b: Vec<char> = "abycdf".chars().collect();
    /// let mut m = SequenceMatcher::new(&a, &b);
    /// let tags: Vec<_> = m.opcodes().iter().map(|op| op.tag).collect();
    /// assert_eq!(
    ///     tags,
    ///     vec![
    ///         OpcodeTag::Delete,
    ///         OpcodeTag::Equal,
    ///         OpcodeTag::Replace,
    ///         OpcodeTag::Equal,
    ///         OpcodeTag::Insert,
    ///     ]
    /// );
    /// ```
    pub fn opcodes(&mut self) -> &[Opcode] {
        let opcodes = match self.opcodes.take() {
            Some(opcodes) => opcodes,
            None => {
                let mut d = Capture::new();
                match self.diff(&mut d) {
                    Ok(()) => {}
                    Err(never) => match never {},
                }
                d.into_opcodes()
            }
        };
        self.opcodes.insert(opcodes)
    }

    /// Isolates clusters of changes with up to `n` elements of context.
    ///
    /// Long equal stretches are split so that every group carries at most
    /// `n` equal elements on either side of its changes.  Groups that
    /// contain no change are left out.
    pub fn grouped_opcodes(&mut self, n: usize) -> Vec<Vec<Opcode>> {
        group_opcodes(self.opcodes().to_vec(), n)
    }

    /// Returns a measure of the similarity of the sequences in `0.0..=1.0`.
    ///
    /// With `T` being the total number of elements in both sequences and
    /// `M` the number of matched elements this is `2.0 * M / T`.  It is
    /// `1.0` for identical sequences (including two empty ones) and `0.0`
    /// when they have nothing in common.
    ///
    /// This needs the full set of matching blocks; see
    /// [`quick_ratio`](Self::quick_ratio) and
    /// [`real_quick_ratio`](Self::real_quick_ratio) for cheaper upper bounds.
    pub fn ratio(&mut self) -> f64 {
        let len = self.a.len() + self.b.len();
        let matches = self.matching_blocks().iter().map(|m| m.size).sum();
        calculate_ratio(matches, len)
    }

    /// Returns an upper bound on [`ratio`](Self::ratio) relatively quickly.
    ///
    /// This only compares how often each element occurs in both sequences
    /// and ignores where it occurs.
    pub fn quick_ratio(&mut self) -> f64 {
        let b = self.b;
        let full_b_count = self.full_b_count.get_or_insert_with(|| {
            let mut counts = HashMap::new();
            for elt in b {
                *counts.entry(elt).or_insert(0) += 1;
            }
            counts
        });

        // avail[x] is the number of times x appears in b less the number
        // of times it has been seen in a so far
        let mut avail: HashMap<&T, isize> = HashMap::new();
        let mut matches = 0;
        for elt in self.a {
            let numb = avail
                .entry(elt)
                .or_insert_with(|| full_b_count.get(elt).map_or(0, |&n| n as isize));
            if *numb > 0 {
                matches += 1;
            }
            *numb -= 1;
        }
        calculate_ratio(matches, self.a.len() + self.b.len())
    }

    /// Returns an upper bound on [`ratio`](Self::ratio) very quickly.
    ///
    /// Only the lengths of the sequences are taken into account.
    pub fn real_quick_ratio(&self) -> f64 {
        let la = self.a.len();
        let lb = self.b.len();
        calculate_ratio(la.min(lb), la + lb)
    }
}

#[cfg(test)]
fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn test_one_insert() {
    let a = chars(&"b".repeat(100));
    let b = chars(&format!("a{}", "b".repeat(100)));
    let mut m = SequenceMatcher::new(&a, &b);
    assert!((m.ratio() - 0.995).abs() < 0.001);
    assert_eq!(
        m.opcodes()
            .iter()
            .map(|op| op.as_tag_tuple())
            .collect::<Vec<_>>(),
        vec![
            (crate::OpcodeTag::Insert, 0..0, 0..1),
            (crate::OpcodeTag::Equal, 0..100, 1..101),
        ]
    );

    let b = chars(&format!("{}a{}", "b".repeat(50), "b".repeat(50)));
    let mut m = SequenceMatcher::new(&a, &b);
    assert!((m.ratio() - 0.995).abs() < 0.001);
    assert_eq!(
        m.opcodes()
            .iter()
            .map(|op| op.as_tag_tuple())
            .collect::<Vec<_>>(),
        vec![
            (crate::OpcodeTag::Equal, 0..50, 0..50),
            (crate::OpcodeTag::Insert, 50..50, 50..51),
            (crate::OpcodeTag::Equal, 50..100, 51..101),
        ]
    );
}

#[test]
fn test_one_delete() {
    let a = chars(&format!("{}c{}", "a".repeat(40), "b".repeat(40)));
    let b = chars(&format!("{}{}", "a".repeat(40), "b".repeat(40)));
    let mut m = SequenceMatcher::new(&a, &b);
    assert!((m.ratio() - 0.994).abs() < 0.001);
    assert_eq!(
        m.opcodes()
            .iter()
            .map(|op| op.as_tag_tuple())
            .collect::<Vec<_>>(),
        vec![
            (crate::OpcodeTag::Equal, 0..40, 0..40),
            (crate::OpcodeTag::Delete, 40..41, 40..40),
            (crate::OpcodeTag::Equal, 41..81, 40..80),
        ]
    );
}

#[test]
fn test_bjunk() {
    let a = chars(&format!("{}{}", "a".repeat(40), "b".repeat(40)));
    let b = chars(&format!("{}{}", "a".repeat(44), "b".repeat(40)));
    let m = SequenceMatcher::configure()
        .junk_filter(|c: &char| *c == ' ')
        .matcher(&a, &b);
    assert_eq!(m.bjunk().count(), 0);

    let b = chars(&format!("{}{}{}", "a".repeat(44), "b".repeat(40), " ".repeat(20)));
    let m = SequenceMatcher::configure()
        .junk_filter(|c: &char| *c == ' ')
        .matcher(&a, &b);
    assert_eq!(m.bjunk().collect::<Vec<_>>(), vec![&' ']);

    let m = SequenceMatcher::configure()
        .junk_filter(|c: &char| *c == ' ' || *c == 'b')
        .matcher(&a, &b);
    let mut junk = m.bjunk().copied().collect::<Vec<_>>();
    junk.sort_unstable();
    assert_eq!(junk, vec![' ', 'b']);
}

#[test]
fn test_autojunk_homogenous() {
    let a = chars(&"b".repeat(200));
    let b = chars(&format!("a{}", "b".repeat(200)));

    let mut m = SequenceMatcher::new(&a, &b);
    assert_eq!(m.ratio(), 0.0);

    let mut m = SequenceMatcher::configure().autojunk(false).matcher(&a, &b);
    assert!((m.ratio() - 0.9975).abs() < 0.001);
}

#[test]
fn test_empty_sequences() {
    let mut m = SequenceMatcher::<char>::new(&[], &[]);
    assert_eq!(m.ratio(), 1.0);
    assert_eq!(m.quick_ratio(), 1.0);
    assert_eq!(m.real_quick_ratio(), 1.0);
    assert_eq!(m.matching_blocks(), &[Match::new(0, 0, 0)]);
    assert!(m.opcodes().is_empty());
}

#[test]
fn test_matching_blocks_cache() {
    let a = chars("abxcd");
    let b = chars("abcd");
    let mut m = SequenceMatcher::new(&a, &b);
    let first = m.matching_blocks().to_vec();
    let second = m.matching_blocks();
    assert_eq!(first, second);
    assert_eq!(
        second.iter().map(|m| m.size).collect::<Vec<_>>(),
        vec![2, 2, 0]
    );
}

#[test]
fn test_find_longest_default_args() {
    let a = chars("foo bar");
    let b = chars("foo baz bar");
    let mut m = SequenceMatcher::new(&a, &b);
    assert_eq!(m.find_longest_match(0..7, 0..11), Match::new(0, 0, 6));
    assert_eq!(m.find_longest_match(2..7, 4..11), Match::new(3, 7, 4));
    assert_eq!(m.find_longest_match(0..7, 1..5), Match::new(1, 1, 4));
}

#[test]
fn test_find_longest_popular() {
    let a = chars("dabcd");
    let b = chars(&format!("{}abc{}", "d".repeat(100), "d".repeat(100)));
    let mut m = SequenceMatcher::new(&a, &b);
    assert_eq!(m.find_longest_match(0..5, 0..203), Match::new(0, 99, 5));
}

#[test]
fn test_find_longest_junk_extension() {
    // the blank is junk so " abcd" can't match the tail of b directly and
    // the leftmost "abcd" wins instead
    let a = chars(" abcd");
    let b = chars("abcd abcd");
    let mut m = SequenceMatcher::configure()
        .junk_filter(|c: &char| *c == ' ')
        .matcher(&a, &b);
    assert_eq!(m.find_longest_match(0..5, 0..9), Match::new(1, 0, 4));

    let mut m = SequenceMatcher::new(&a, &b);
    assert_eq!(m.find_longest_match(0..5, 0..9), Match::new(0, 4, 5));
}

#[test]
fn test_find_longest_empty_ranges() {
    let a = chars("abc");
    let b = chars("abc");
    let c = chars("xyz");
    let mut m = SequenceMatcher::new(&a, &b);
    assert_eq!(m.find_longest_match(1..1, 0..3), Match::new(1, 0, 0));
    assert_eq!(m.find_longest_match(0..3, 2..2), Match::new(0, 2, 0));

    m.set_seq1(&c);
    assert_eq!(m.find_longest_match(0..3, 0..3), Match::new(0, 0, 0));
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_find_longest_out_of_bounds() {
    let a = chars("abc");
    let b = chars("abc");
    let mut m = SequenceMatcher::new(&a, &b);
    m.find_longest_match(0..4, 0..3);
}

#[test]
#[should_panic(expected = "out of bounds")]
#[allow(clippy::reversed_empty_ranges)]
fn test_find_longest_inverted_range() {
    let a = chars("abc");
    let b = chars("abc");
    let mut m = SequenceMatcher::new(&a, &b);
    m.find_longest_match(2..1, 0..3);
}

#[test]
fn test_basic_compare() {
    let a = chars("hello world");
    let b = chars("hello java");
    let mut m = SequenceMatcher::new(&a, &b);
    assert!((m.ratio() - 0.5714).abs() < 0.0001);
    insta::assert_debug_snapshot!(m.matching_blocks(), @r###"
    [
        Match {
            a: 0,
            b: 0,
            size: 6,
        },
        Match {
            a: 11,
            b: 10,
            size: 0,
        },
    ]
    "###);
    assert_eq!(
        m.opcodes(),
        &[
            Opcode::new(crate::OpcodeTag::Equal, 0, 6, 0, 6),
            Opcode::new(crate::OpcodeTag::Replace, 6, 11, 6, 10),
        ]
    );
}

#[test]
fn test_custom_junk_filter() {
    let a = chars("hello, world!");
    let b = chars("hello world");
    let mut m = SequenceMatcher::configure()
        .junk_filter(|c: &char| matches!(*c, ' ' | '\t' | '.'))
        .matcher(&a, &b);
    assert!((m.ratio() - 0.916).abs() < 0.01);
}

#[test]
fn test_reassignment() {
    let abc = chars("abc");
    let def = chars("def");
    let hello = chars("hello");
    let world = chars("world");

    let mut m = SequenceMatcher::new(&abc, &def);
    assert_eq!(m.ratio(), 0.0);

    m.set_seqs(&hello, &world);
    assert_ne!(m.ratio(), 1.0);

    m.set_seq1(&world);
    assert_eq!(m.ratio(), 1.0);
    assert_eq!(m.opcodes().len(), 1);

    m.set_seq2(&hello);
    assert_ne!(m.ratio(), 1.0);
    assert_ne!(m.quick_ratio(), 1.0);
    assert_eq!(m.a(), &world[..]);
    assert_eq!(m.b(), &hello[..]);
}

#[test]
fn test_equal_reassignment_keeps_state() {
    use std::cell::Cell;

    let calls = Cell::new(0);
    let a = chars("abxcd");
    let b = chars("abcd");
    let a2 = a.clone();
    let b2 = b.clone();
    let c = chars("abce");
    let mut m = SequenceMatcher::configure()
        .junk_filter(|_: &char| {
            calls.set(calls.get() + 1);
            false
        })
        .matcher(&a, &b);
    assert_eq!(calls.get(), 4);
    let blocks = m.matching_blocks().as_ptr();

    m.set_seq2(&b2);
    m.set_seq1(&a2);
    m.set_seqs(&a2, &b2);
    assert_eq!(calls.get(), 4);
    assert_eq!(m.matching_blocks().as_ptr(), blocks);

    m.set_seq2(&c);
    assert_eq!(calls.get(), 8);
    assert_eq!(m.b(), &c[..]);
}

#[test]
fn test_quick_ratio_cache_follows_b() {
    let a = chars("abc");
    let b1 = chars("abc");
    let b2 = chars("xyz");
    let mut m = SequenceMatcher::new(&a, &b1);
    assert_eq!(m.quick_ratio(), 1.0);
    m.set_seq2(&b2);
    assert_eq!(m.quick_ratio(), 0.0);
}

#[test]
fn test_ratio_bounds() {
    let a = chars("abcd");
    let b = chars("bcda");
    let mut m = SequenceMatcher::new(&a, &b);
    let ratio = m.ratio();
    let quick = m.quick_ratio();
    let real_quick = m.real_quick_ratio();
    assert_eq!(ratio, 0.75);
    assert_eq!(quick, 1.0);
    assert_eq!(real_quick, 1.0);
}

#[test]
fn test_grouped_opcodes() {
    let a = (0..40).collect::<Vec<u32>>();
    let mut b = a.clone();
    b[8] = 100;
    b.insert(20, 101);
    b.remove(31);
    let mut m = SequenceMatcher::new(&a, &b);
    insta::assert_debug_snapshot!(
        m.grouped_opcodes(3)
            .iter()
            .map(|group| group.iter().map(|op| op.as_tag_tuple()).collect::<Vec<_>>())
            .collect::<Vec<_>>(),
        @r###"
    [
        [
            (
                Equal,
                5..8,
                5..8,
            ),
            (
                Replace,
                8..9,
                8..9,
            ),
            (
                Equal,
                9..12,
                9..12,
            ),
        ],
        [
            (
                Equal,
                17..20,
                17..20,
            ),
            (
                Insert,
                20..20,
                20..21,
            ),
            (
                Equal,
                20..23,
                21..24,
            ),
        ],
        [
            (
                Equal,
                27..30,
                28..31,
            ),
            (
                Delete,
                30..31,
                31..31,
            ),
            (
                Equal,
                31..34,
                31..34,
            ),
        ],
    ]
    "###
    );
}
