//! Heuristic password checks
//!
//! Each check inspects one aspect of the password and contributes a
//! named point delta plus a match count. Checks are pure functions of
//! the password bytes and the scoring configuration; they cannot fail
//! and have no dependency on each other.

mod classes;
mod composition;
mod consecutive;
mod length;
mod repetition;
mod sequence;

pub use classes::{count_digits, count_lowercase, count_special_chars, count_uppercase};
pub use composition::{letters_only, numbers_only};
pub use consecutive::{consecutive_digits, consecutive_lowercase, consecutive_uppercase};
pub use length::length;
pub use repetition::{repeating_chars, reusing_chars};
pub use sequence::{sequential_digits, sequential_letters};

use crate::config::ScoringConfig;
use crate::types::CheckScore;

/// Signature shared by every check.
pub type CheckFn = fn(&[u8], &ScoringConfig) -> CheckScore;

/// Yields `(previous, current)` byte pairs for every position from 0
/// through `len` inclusive.
///
/// Positional checks look one byte back while scanning one position
/// past the end, so both boundary reads land out of range. Out-of-range
/// positions read as `None`, which matches no byte class and never
/// equals a real byte.
pub(crate) fn pairs(bytes: &[u8]) -> impl Iterator<Item = (Option<u8>, Option<u8>)> + '_ {
    (0..=bytes.len()).map(|index| {
        let prev = index.checked_sub(1).and_then(|p| bytes.get(p)).copied();
        (prev, bytes.get(index).copied())
    })
}

pub(crate) fn is_uppercase(byte: u8) -> bool {
    byte.is_ascii_uppercase()
}

pub(crate) fn is_lowercase(byte: u8) -> bool {
    byte.is_ascii_lowercase()
}

pub(crate) fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Symbol bytes rewarded as special: `!`..`/`, `[`..`` ` `` and `{`..`~`.
///
/// `:`..`@` (bytes 58-64) is not part of the rewarded set.
pub(crate) fn is_special(byte: u8) -> bool {
    matches!(byte, 33..=47 | 91..=96 | 123..=126)
}
