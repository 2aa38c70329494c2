//! Ranking of candidate sequences by similarity to a query.
use std::hash::Hash;

use crate::error::Error;
use crate::matcher::SequenceMatcher;
use crate::trace::trace_close;

/// Returns the best "good enough" matches for `word` among `possibilities`.
///
/// At most `n` candidates are returned, most similar first.  Candidates
/// whose [`ratio`](SequenceMatcher::ratio) against `word` falls below
/// `cutoff` are dropped.  Candidates with equal scores keep their relative
/// order from `possibilities`.
///
/// Fails if `n` is zero or `cutoff` is not within `0.0..=1.0`.
///
/// ```rust
/// # use seqmatch::get_close_matches;
/// let word = b"appel";
/// let possibilities: [&[u8]; 4] = [b"ape", b"apple", b"peach", b"puppy"];
/// let rv = get_close_matches(word, &possibilities, 3, 0.6).unwrap();
/// assert_eq!(rv, vec![&b"apple"[..], &b"ape"[..]]);
/// ```
pub fn get_close_matches<'c, T: Hash + Eq>(
    word: &[T],
    possibilities: &[&'c [T]],
    n: usize,
    cutoff: f64,
) -> Result<Vec<&'c [T]>, Error> {
    Ok(rank_close_matches(word, possibilities.iter().copied(), n, cutoff)?
        .into_iter()
        .map(|(idx, _)| possibilities[idx])
        .collect())
}

/// Scores candidates against `word` and returns the positions and ratios
/// of the best ones, best first.
pub(crate) fn rank_close_matches<'x, T, I>(
    word: &'x [T],
    possibilities: I,
    n: usize,
    cutoff: f64,
) -> Result<Vec<(usize, f64)>, Error>
where
    T: Hash + Eq,
    I: IntoIterator<Item = &'x [T]>,
{
    if n == 0 {
        return Err(Error::InvalidMaxResults);
    }
    if !(0.0..=1.0).contains(&cutoff) {
        return Err(Error::InvalidCutoff(cutoff));
    }

    let mut rv = Vec::new();
    let mut candidates = 0;
    let mut s = SequenceMatcher::new(&[], word);
    for (idx, x) in possibilities.into_iter().enumerate() {
        candidates += 1;
        s.set_seq1(x);
        if s.real_quick_ratio() < cutoff || s.quick_ratio() < cutoff {
            continue;
        }
        let ratio = s.ratio();
        if ratio >= cutoff {
            rv.push((idx, ratio));
        }
    }
    trace_close(candidates, rv.len(), cutoff);

    // stable, so ties keep their input order
    rv.sort_by(|a, b| b.1.total_cmp(&a.1));
    rv.truncate(n);
    Ok(rv)
}

#[cfg(test)]
fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn test_get_close_matches() {
    let fruit = ["apple", "peach", "orange", "grape", "apricot", "pineapple"]
        .iter()
        .map(|x| chars(x))
        .collect::<Vec<_>>();
    let possibilities = fruit.iter().map(|x| x.as_slice()).collect::<Vec<_>>();
    let found = |word: &str, n, cutoff| {
        get_close_matches(&chars(word), &possibilities, n, cutoff)
            .unwrap()
            .into_iter()
            .map(|x| x.iter().collect::<String>())
            .collect::<Vec<_>>()
    };

    let rv = found("apple", 3, 0.6);
    assert_eq!(rv.len(), 3);
    assert_eq!(rv[0], "apple");

    let rv = found("apple", 6, 0.1);
    assert!(rv.contains(&"apple".to_string()));
    assert!(rv.contains(&"pineapple".to_string()));

    let rv = found("app", 3, 0.1);
    assert!(rv.contains(&"apple".to_string()));

    assert_eq!(found("apple", 1, 0.6), vec!["apple"]);
}

#[test]
fn test_get_close_matches_order() {
    let words = ["ape", "apple", "peach", "puppy"]
        .iter()
        .map(|x| chars(x))
        .collect::<Vec<_>>();
    let possibilities = words.iter().map(|x| x.as_slice()).collect::<Vec<_>>();
    let rv = rank_close_matches(&chars("appel"), possibilities.iter().copied(), 3, 0.6).unwrap();
    assert_eq!(rv.iter().map(|x| x.0).collect::<Vec<_>>(), vec![1, 0]);
    assert_eq!(rv[0].1, 0.8);
    assert!((rv[1].1 - 0.75).abs() < 1e-9);
}

#[test]
fn test_get_close_matches_ties_keep_input_order() {
    let words = ["abx", "aby", "abz"]
        .iter()
        .map(|x| chars(x))
        .collect::<Vec<_>>();
    let possibilities = words.iter().map(|x| x.as_slice()).collect::<Vec<_>>();
    let rv = rank_close_matches(&chars("ab"), possibilities.iter().copied(), 2, 0.5).unwrap();
    assert_eq!(rv.iter().map(|x| x.0).collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn test_get_close_matches_invalid() {
    let apple = chars("apple");
    let peach = chars("peach");
    let possibilities = [&apple[..], &peach[..]];
    assert_eq!(
        get_close_matches(&apple, &possibilities, 0, 0.6),
        Err(Error::InvalidMaxResults)
    );
    assert_eq!(
        get_close_matches(&apple, &possibilities, 3, -0.1),
        Err(Error::InvalidCutoff(-0.1))
    );
    assert_eq!(
        get_close_matches(&apple, &possibilities, 3, 1.1),
        Err(Error::InvalidCutoff(1.1))
    );
    assert!(get_close_matches(&apple, &possibilities, 3, f64::NAN).is_err());
}
