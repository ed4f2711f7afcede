//! Consecutive-run detectors - dock adjacent same-class byte pairs.

use super::{is_digit, is_lowercase, is_uppercase, pairs};
use crate::config::ScoringConfig;
use crate::types::{CheckScore, Matches};

/// Docks each position where the current *or* previous byte is in the
/// class.
///
/// NOTE: the inclusive-or means an isolated in-class byte is docked
/// twice (once as current, once as previous), and the one-past-the-end
/// position still fires when the final byte is in class. Keep the rule
/// as is; tightening it to both-sides shifts every existing total.
fn consecutive_class(bytes: &[u8], dock: i64, in_class: fn(u8) -> bool) -> CheckScore {
    let mut delta = 0;
    let mut found = 0u32;
    for (prev, cur) in pairs(bytes) {
        if cur.is_some_and(in_class) || prev.is_some_and(in_class) {
            delta -= dock;
            found += 1;
        }
    }
    CheckScore {
        delta,
        matches: Matches::Count(found),
    }
}

pub fn consecutive_uppercase(bytes: &[u8], config: &ScoringConfig) -> CheckScore {
    consecutive_class(bytes, config.consecutive_dock, is_uppercase)
}

pub fn consecutive_lowercase(bytes: &[u8], config: &ScoringConfig) -> CheckScore {
    consecutive_class(bytes, config.consecutive_dock, is_lowercase)
}

/// Docks each adjacent pair where both bytes are digits.
///
/// Unlike the case checks this one requires both sides of the pair.
pub fn consecutive_digits(bytes: &[u8], config: &ScoringConfig) -> CheckScore {
    let mut delta = 0;
    let mut found = 0u32;
    for (prev, cur) in pairs(bytes) {
        if cur.is_some_and(is_digit) && prev.is_some_and(is_digit) {
            delta -= config.consecutive_dock;
            found += 1;
        }
    }
    CheckScore {
        delta,
        matches: Matches::Count(found),
    }
}
