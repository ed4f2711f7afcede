//! Character-class counters - reward the presence of each byte class
//! with geometrically diminishing returns.

use super::{is_digit, is_lowercase, is_special, is_uppercase};
use crate::config::{ClassReward, ScoringConfig};
use crate::types::{CheckScore, Matches};

/// Scans every byte in order, awarding `reward(k)` points for the
/// k-th byte matching the class.
///
/// Early occurrences of a class are worth far more than long runs of
/// it, which rewards mixing classes over padding with one.
fn count_class(bytes: &[u8], reward: &ClassReward, in_class: fn(u8) -> bool) -> CheckScore {
    let mut delta = 0;
    let mut found = 0u32;
    for &byte in bytes {
        if in_class(byte) {
            delta += reward.reward(found);
            found += 1;
        }
    }
    CheckScore {
        delta,
        matches: Matches::Count(found),
    }
}

pub fn count_uppercase(bytes: &[u8], config: &ScoringConfig) -> CheckScore {
    count_class(bytes, &config.uppercase, is_uppercase)
}

pub fn count_lowercase(bytes: &[u8], config: &ScoringConfig) -> CheckScore {
    count_class(bytes, &config.lowercase, is_lowercase)
}

pub fn count_digits(bytes: &[u8], config: &ScoringConfig) -> CheckScore {
    count_class(bytes, &config.digits, is_digit)
}

pub fn count_special_chars(bytes: &[u8], config: &ScoringConfig) -> CheckScore {
    count_class(bytes, &config.special, is_special)
}
