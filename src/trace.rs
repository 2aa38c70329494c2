//! Structured diagnostics, compiled out unless the `tracing` feature is on.

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

/// Reports the outcome of rebuilding the element index of `b`.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_index(b_len: usize, distinct: usize, junk: usize, popular: usize) {
    debug!(
        target: "seqmatch::index",
        b_len = b_len,
        distinct = distinct,
        junk = junk,
        popular = popular,
        "rebuilt index of {} elements ({} junk, {} popular)",
        b_len,
        junk,
        popular
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_index(_b_len: usize, _distinct: usize, _junk: usize, _popular: usize) {}

/// Reports the number of decomposition rounds it took to find all blocks.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_blocks(rounds: usize, blocks: usize) {
    trace!(
        target: "seqmatch::blocks",
        rounds = rounds,
        blocks = blocks,
        "decomposed into {} blocks",
        blocks
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_blocks(_rounds: usize, _blocks: usize) {}

/// Reports how many candidates survived close match ranking.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_close(candidates: usize, survivors: usize, cutoff: f64) {
    debug!(
        target: "seqmatch::close",
        candidates = candidates,
        survivors = survivors,
        cutoff = cutoff,
        "{} of {} candidates reached cutoff",
        survivors,
        candidates
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_close(_candidates: usize, _survivors: usize, _cutoff: f64) {}
