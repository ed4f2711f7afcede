//! Composition checks - flat docks based on gross password makeup.

use super::is_digit;
use crate::config::ScoringConfig;
use crate::types::{CheckScore, Matches};

/// Docks passwords made up entirely of digits.
///
/// The empty password is not "all digits"; it reports `no`.
pub fn numbers_only(bytes: &[u8], config: &ScoringConfig) -> CheckScore {
    if !bytes.is_empty() && bytes.iter().all(|&byte| is_digit(byte)) {
        CheckScore {
            delta: -config.numbers_only_dock,
            matches: Matches::Flag(true),
        }
    } else {
        CheckScore {
            delta: 0,
            matches: Matches::Flag(false),
        }
    }
}

/// Docks passwords containing no digit at all.
///
/// Assumes letters-only up front and bails out at the first digit.
/// With no bytes to scan, the empty password keeps the dock.
pub fn letters_only(bytes: &[u8], config: &ScoringConfig) -> CheckScore {
    for &byte in bytes {
        if is_digit(byte) {
            return CheckScore {
                delta: 0,
                matches: Matches::Flag(false),
            };
        }
    }
    CheckScore {
        delta: -config.letters_only_dock,
        matches: Matches::Flag(true),
    }
}
