//! This crate finds human-friendly matches and differences between two
//! sequences of hashable elements.
//!
//! The approach is "gestalt pattern matching" as popularized by Python's
//! `difflib`: find the longest contiguous run of elements both sequences
//! share, ignoring elements that were declared junk, and repeat on the
//! pieces to the left and to the right of it.  The result does not have to
//! be a minimal edit script but tends to line up the way a person would
//! line things up.
//!
//! The main type is [`SequenceMatcher`]:
//!
//! ```rust
//! use seqmatch::{OpcodeTag, SequenceMatcher};
//!
//! let a: Vec<char> = "private Thread currentThread;".chars().collect();
//! let b: Vec<char> = "private volatile Thread currentThread;".chars().collect();
//! let mut m = SequenceMatcher::new(&a, &b);
//!
//! for op in m.opcodes() {
//!     if op.tag != OpcodeTag::Equal {
//!         let inserted: String = b[op.b_range()].iter().collect();
//!         println!("{} {:?}", op.tag, inserted);
//!     }
//! }
//! assert!(m.ratio() > 0.8);
//! ```
//!
//! The crate exposes these pieces:
//!
//! * [`SequenceMatcher`] with [`MatcherConfig`]: the matcher itself, with
//!   the longest match search, matching blocks, opcodes and the three
//!   similarity ratios.
//! * [`JunkFilter`]: decides which elements of the second sequence are junk.
//! * [`DiffHook`]: receives the edit script; [`Capture`] collects it.
//! * [`get_close_matches`]: ranks candidates by similarity to a query.
//! * [`text`]: the same operations for strings, character by character.
//!
//! # Features
//!
//! * `text`: string helpers in the [`text`] module (on by default).
//! * `serde`: `Serialize` and `Deserialize` for [`Match`], [`Opcode`] and
//!   [`OpcodeTag`].
//! * `tracing`: emits debug events while building the element index and
//!   ranking close matches.
mod close;
mod error;
mod hook;
mod junk;
mod matcher;
pub mod text;
mod trace;
mod types;
mod utils;

pub use self::close::get_close_matches;
pub use self::error::Error;
pub use self::hook::{replay_blocks, Capture, DiffHook};
pub use self::junk::{ElementIndex, JunkFilter, AUTOJUNK_MIN_LEN};
pub use self::matcher::{MatcherConfig, SequenceMatcher};
pub use self::types::{Match, Opcode, OpcodeTag};
pub use self::utils::group_opcodes;
