//! Score result types - tiers, per-check records and the full breakdown.

use std::collections::BTreeMap;
use std::fmt;

use crate::config::TierThresholds;

/// One of the six ordered strength classifications.
///
/// Tiers are totally ordered from `VeryPoor` to `Excellent` and their
/// threshold ranges partition the whole score line with no gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    VeryPoor = 0,
    Poor = 1,
    Fair = 2,
    Strong = 3,
    VeryStrong = 4,
    Excellent = 5,
}

impl Tier {
    /// Maps a total score to a tier, highest threshold first.
    pub fn classify(total: i64, thresholds: &TierThresholds) -> Self {
        if total >= thresholds.excellent {
            Tier::Excellent
        } else if total >= thresholds.very_strong {
            Tier::VeryStrong
        } else if total >= thresholds.strong {
            Tier::Strong
        } else if total >= thresholds.fair {
            Tier::Fair
        } else if total >= thresholds.poor {
            Tier::Poor
        } else {
            Tier::VeryPoor
        }
    }

    /// Fixed display label for the tier.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::VeryPoor => "Very Poor",
            Tier::Poor => "Poor",
            Tier::Fair => "Fair",
            Tier::Strong => "Strong",
            Tier::VeryStrong => "Very Strong",
            Tier::Excellent => "Excellent",
        }
    }

    /// Numeric rank, `0` for `VeryPoor` through `5` for `Excellent`.
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifies one of the fourteen heuristic checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckKind {
    Length,
    UppercaseLetters,
    LowercaseLetters,
    Digits,
    SpecialChars,
    NumbersOnly,
    LettersOnly,
    RepeatingChars,
    ReusingChars,
    ConsecutiveUppercase,
    ConsecutiveLowercase,
    ConsecutiveDigits,
    SequentialLetters,
    SequentialDigits,
}

impl CheckKind {
    /// Every check, in the order the aggregator runs them.
    pub const ALL: [CheckKind; 14] = [
        CheckKind::Length,
        CheckKind::UppercaseLetters,
        CheckKind::LowercaseLetters,
        CheckKind::Digits,
        CheckKind::SpecialChars,
        CheckKind::NumbersOnly,
        CheckKind::LettersOnly,
        CheckKind::RepeatingChars,
        CheckKind::ReusingChars,
        CheckKind::ConsecutiveUppercase,
        CheckKind::ConsecutiveLowercase,
        CheckKind::ConsecutiveDigits,
        CheckKind::SequentialLetters,
        CheckKind::SequentialDigits,
    ];

    /// Stable machine-readable key for the check.
    pub fn key(&self) -> &'static str {
        match self {
            CheckKind::Length => "length",
            CheckKind::UppercaseLetters => "uppercase_letters",
            CheckKind::LowercaseLetters => "lowercase_letters",
            CheckKind::Digits => "digits",
            CheckKind::SpecialChars => "special_chars",
            CheckKind::NumbersOnly => "numbers_only",
            CheckKind::LettersOnly => "letters_only",
            CheckKind::RepeatingChars => "repeating_chars",
            CheckKind::ReusingChars => "reusing_chars",
            CheckKind::ConsecutiveUppercase => "consecutive_uppercase",
            CheckKind::ConsecutiveLowercase => "consecutive_lowercase",
            CheckKind::ConsecutiveDigits => "consecutive_digits",
            CheckKind::SequentialLetters => "sequential_letters",
            CheckKind::SequentialDigits => "sequential_digits",
        }
    }

    /// Human-readable label, suitable for a breakdown table.
    pub fn display_name(&self) -> &'static str {
        match self {
            CheckKind::Length => "Length",
            CheckKind::UppercaseLetters => "Uppercase Letters",
            CheckKind::LowercaseLetters => "Lowercase Letters",
            CheckKind::Digits => "Numbers",
            CheckKind::SpecialChars => "Special Characters",
            CheckKind::NumbersOnly => "Numbers Only",
            CheckKind::LettersOnly => "Letters Only",
            CheckKind::RepeatingChars => "Repeating Characters",
            CheckKind::ReusingChars => "Reusing Characters",
            CheckKind::ConsecutiveUppercase => "Consecutive Upper Case",
            CheckKind::ConsecutiveLowercase => "Consecutive Lower Case",
            CheckKind::ConsecutiveDigits => "Consecutive Numbers",
            CheckKind::SequentialLetters => "Sequential Letters",
            CheckKind::SequentialDigits => "Sequential Numbers",
        }
    }
}

/// Match counter reported by a check.
///
/// Counting checks report how many times they fired; the two
/// whole-password composition checks report a yes/no flag instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matches {
    Count(u32),
    Flag(bool),
}

impl fmt::Display for Matches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matches::Count(n) => write!(f, "{}", n),
            Matches::Flag(true) => f.write_str("yes"),
            Matches::Flag(false) => f.write_str("no"),
        }
    }
}

/// The contribution of a single check: a signed point delta and how
/// many times the check matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckScore {
    pub delta: i64,
    pub matches: Matches,
}

/// Per-check results for one scoring run.
///
/// Populated once by the aggregator and immutable afterwards. Keys are
/// fixed and known in advance, one per check.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    entries: BTreeMap<CheckKind, CheckScore>,
}

impl ScoreBreakdown {
    pub(crate) fn insert(&mut self, kind: CheckKind, score: CheckScore) {
        self.entries.insert(kind, score);
    }

    /// Looks up the record for one check.
    pub fn get(&self, kind: CheckKind) -> Option<&CheckScore> {
        self.entries.get(&kind)
    }

    /// Iterates over all check records.
    pub fn iter(&self) -> impl Iterator<Item = (CheckKind, &CheckScore)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all check deltas, without the bias contribution.
    pub fn delta_sum(&self) -> i64 {
        self.entries.values().map(|s| s.delta).sum()
    }
}

/// The outcome of one scoring run.
///
/// A plain value: never mutated after construction and safe to share
/// or send across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    breakdown: ScoreBreakdown,
    total: i64,
    tier: Tier,
}

impl ScoreResult {
    pub(crate) fn new(breakdown: ScoreBreakdown, total: i64, tier: Tier) -> Self {
        Self {
            breakdown,
            total,
            tier,
        }
    }

    /// The aggregate score, bias included.
    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// One of the six tier names, "Very Poor" through "Excellent".
    pub fn label(&self) -> &'static str {
        self.tier.label()
    }

    /// Tier rank in `0..=5`.
    pub fn tier_rank(&self) -> u8 {
        self.tier.rank()
    }

    /// Per-check contributions, for introspection or UI display.
    pub fn breakdown(&self) -> &ScoreBreakdown {
        &self.breakdown
    }

    pub fn is_excellent(&self) -> bool {
        self.tier == Tier::Excellent
    }

    pub fn is_very_strong(&self) -> bool {
        self.tier == Tier::VeryStrong
    }

    pub fn is_strong(&self) -> bool {
        self.tier == Tier::Strong
    }

    pub fn is_fair(&self) -> bool {
        self.tier == Tier::Fair
    }

    pub fn is_poor(&self) -> bool {
        self.tier == Tier::Poor
    }

    pub fn is_very_poor(&self) -> bool {
        self.tier == Tier::VeryPoor
    }
}
