//! Repetition detectors - adjacent repeats and whole-password reuse.

use super::pairs;
use crate::config::ScoringConfig;
use crate::types::{CheckScore, Matches};

/// Docks each byte equal to its immediate predecessor with a
/// quadratically growing penalty.
///
/// `iterations` counts repeats across the whole password, not per run,
/// so a later repeated pair pays for every earlier one.
pub fn repeating_chars(bytes: &[u8], config: &ScoringConfig) -> CheckScore {
    let mut delta = 0;
    let mut found = 0u32;
    let mut iterations: i64 = 0;
    for (prev, cur) in pairs(bytes) {
        if cur.is_some() && cur == prev {
            delta -= ((iterations * iterations) as u64).div_ceil(config.repeat_divisor as u64)
                as i64
                + 1;
            found += 1;
            iterations += 1;
        }
    }
    CheckScore {
        delta,
        matches: Matches::Count(found),
    }
}

/// Docks every distinct byte value used more than once by its total
/// occurrence count, wherever in the password the copies sit.
pub fn reusing_chars(bytes: &[u8], _config: &ScoringConfig) -> CheckScore {
    let mut freq = [0u32; 256];
    for &byte in bytes {
        freq[byte as usize] += 1;
    }

    let mut delta = 0;
    let mut found = 0u32;
    for count in freq {
        if count > 1 {
            delta -= i64::from(count);
            found += 1;
        }
    }
    CheckScore {
        delta,
        matches: Matches::Count(found),
    }
}
