//! Password scorer - bias validation, check aggregation and tier
//! classification.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::checks::{self, CheckFn};
use crate::config::ScoringConfig;
use crate::types::{CheckKind, ScoreBreakdown, ScoreResult, Tier};

/// Smallest accepted bias.
pub const BIAS_MIN: i32 = -5;
/// Largest accepted bias.
pub const BIAS_MAX: i32 = 5;

/// Caller-input errors. Scoring either fully succeeds or fails here
/// before any check has run; there is no partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("bias must be between {BIAS_MIN} and {BIAS_MAX}, got {0}")]
    InvalidBias(i32),
    #[error("no password supplied")]
    MissingPassword,
}

/// Every check, in the order the aggregator runs them. The order is
/// immaterial to the outcome; checks share nothing but the input.
const CHECKS: [(CheckKind, CheckFn); 14] = [
    (CheckKind::Length, checks::length),
    (CheckKind::UppercaseLetters, checks::count_uppercase),
    (CheckKind::LowercaseLetters, checks::count_lowercase),
    (CheckKind::Digits, checks::count_digits),
    (CheckKind::SpecialChars, checks::count_special_chars),
    (CheckKind::NumbersOnly, checks::numbers_only),
    (CheckKind::LettersOnly, checks::letters_only),
    (CheckKind::RepeatingChars, checks::repeating_chars),
    (CheckKind::ReusingChars, checks::reusing_chars),
    (CheckKind::ConsecutiveUppercase, checks::consecutive_uppercase),
    (CheckKind::ConsecutiveLowercase, checks::consecutive_lowercase),
    (CheckKind::ConsecutiveDigits, checks::consecutive_digits),
    (CheckKind::SequentialLetters, checks::sequential_letters),
    (CheckKind::SequentialDigits, checks::sequential_digits),
];

/// Validates the bias and amplifies it along a cubic curve.
///
/// `round(bias^3 / 3)`: a bias of 0 or ±1 contributes nothing, ±5
/// contributes ±42.
fn bias_contribution(bias: i32, config: &ScoringConfig) -> Result<i64, ScoreError> {
    if !(BIAS_MIN..=BIAS_MAX).contains(&bias) {
        return Err(ScoreError::InvalidBias(bias));
    }
    Ok((f64::from(bias.pow(3)) / config.bias_divisor).round() as i64)
}

/// Scores a password with the default configuration.
///
/// # Arguments
/// * `password` - The candidate password
/// * `bias` - Caller-supplied skew in `[-5, 5]`
///
/// # Errors
/// Fails with [`ScoreError::InvalidBias`] when `bias` is out of range.
///
/// # Example
/// ```rust
/// use pwd_scorer::score;
///
/// let result = score("0}UVsHlMwWF^21.Q", 0)?;
/// assert!(result.is_strong());
/// # Ok::<(), pwd_scorer::ScoreError>(())
/// ```
pub fn score(password: &str, bias: i32) -> Result<ScoreResult, ScoreError> {
    score_opt(Some(password), bias)
}

/// Scores an optional password with the default configuration.
///
/// An absent password fails with [`ScoreError::MissingPassword`]; the
/// empty string is a valid password and scores normally. The bias is
/// validated first, before the password is even looked at.
pub fn score_opt(password: Option<&str>, bias: i32) -> Result<ScoreResult, ScoreError> {
    score_with_config(password, bias, &ScoringConfig::default())
}

/// Scores a secret-wrapped password, exposing it only for the duration
/// of the call.
pub fn score_secret(password: &SecretString, bias: i32) -> Result<ScoreResult, ScoreError> {
    score_opt(Some(password.expose_secret()), bias)
}

/// Scores with a caller-supplied configuration.
///
/// Runs every check once against the password bytes, collects the
/// per-check records into the breakdown, adds the bias contribution
/// and classifies the total.
pub fn score_with_config(
    password: Option<&str>,
    bias: i32,
    config: &ScoringConfig,
) -> Result<ScoreResult, ScoreError> {
    let contribution = bias_contribution(bias, config)?;
    let password = password.ok_or(ScoreError::MissingPassword)?;
    let bytes = password.as_bytes();

    #[cfg(feature = "tracing")]
    tracing::debug!("scoring {} byte password with bias {}", bytes.len(), bias);

    let mut breakdown = ScoreBreakdown::default();
    for (kind, check) in CHECKS {
        breakdown.insert(kind, check(bytes, config));
    }

    let total = contribution + breakdown.delta_sum();
    let tier = Tier::classify(total, &config.thresholds);

    #[cfg(feature = "tracing")]
    tracing::debug!("password scored: total {}, tier {}", total, tier);

    Ok(ScoreResult::new(breakdown, total, tier))
}

/// Delay before a queued evaluation actually runs, so rapid
/// re-requests can cancel stale work before it happens.
#[cfg(feature = "async")]
const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Async version that sends the scoring outcome via channel.
///
/// Intended for interactive consumers: debounces briefly, then drops
/// the work silently if the token was cancelled in the meantime.
/// Nothing is sent for a cancelled request.
#[cfg(feature = "async")]
pub async fn score_tx(
    password: &SecretString,
    bias: i32,
    token: CancellationToken,
    tx: mpsc::Sender<Result<ScoreResult, ScoreError>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("scoring is about to start...");

    tokio::time::sleep(DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("scoring cancelled during debounce");
        return;
    }

    if tx.send(score_secret(password, bias)).await.is_err() {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password score result: channel closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Matches;

    /// Asserts the tier, and that its predicate is the only true one.
    fn assert_tier(result: &ScoreResult, tier: Tier) {
        assert_eq!(
            result.tier(),
            tier,
            "total {} classified as {}",
            result.total(),
            result.label()
        );
        let predicates = [
            result.is_very_poor(),
            result.is_poor(),
            result.is_fair(),
            result.is_strong(),
            result.is_very_strong(),
            result.is_excellent(),
        ];
        assert_eq!(predicates.iter().filter(|&&p| p).count(), 1);
        assert!(predicates[tier.rank() as usize]);
    }

    #[test]
    fn test_invalid_bias_positive() {
        assert_eq!(score("APassword", 6), Err(ScoreError::InvalidBias(6)));
    }

    #[test]
    fn test_invalid_bias_negative() {
        assert_eq!(score("APassword", -6), Err(ScoreError::InvalidBias(-6)));
    }

    #[test]
    fn test_missing_password() {
        assert_eq!(score_opt(None, 0), Err(ScoreError::MissingPassword));
    }

    #[test]
    fn test_invalid_bias_wins_over_missing_password() {
        assert_eq!(score_opt(None, 7), Err(ScoreError::InvalidBias(7)));
    }

    #[test]
    fn test_empty_password_is_valid() {
        // Only the letters-only dock applies to the empty string.
        let result = score("", 0).unwrap();
        assert_eq!(result.total(), -10);
        assert_tier(&result, Tier::VeryPoor);
    }

    #[test]
    fn test_very_poor_common_passwords() {
        let very_poor = [
            "aaaaaaaaaaaaaabbbbbcccccddddeeeeeeeeeeeeeffffffffffffggggggggg",
            "asdfgzxcv",
            "P@ssword",
            "111111111111222222222223333333333444455556666777888899999",
        ];
        for pwd in very_poor {
            let result = score(pwd, 0).unwrap();
            assert_tier(&result, Tier::VeryPoor);
        }
    }

    #[test]
    fn test_poor_passwords() {
        for pwd in ["P@ssword!", "qwerasdfzxcv", "1qaz2wsx3edc"] {
            let result = score(pwd, 0).unwrap();
            assert_tier(&result, Tier::Poor);
        }
    }

    #[test]
    fn test_fair_passwords() {
        for pwd in ["p2vNGcbnjq79", "N2GLVE8TwMh3", "W4JR5Y21eDgS"] {
            let result = score(pwd, 0).unwrap();
            assert_tier(&result, Tier::Fair);
        }
    }

    #[test]
    fn test_strong_passwords() {
        let strong = [
            "0}UVsHlMwWF^21.Q",
            "9]y.GqzxsoaX8142",
            "~Va.^i(,\\FLt=eurHzg@W",
        ];
        for pwd in strong {
            let result = score(pwd, 0).unwrap();
            assert_tier(&result, Tier::Strong);
        }
    }

    #[test]
    fn test_very_strong_passwords() {
        let very_strong = [
            "3+gk~X7m!aUe6JG=chzI",
            ",=45Dxv#M)n(\\}uLpsF.",
            "y7eJ5dDIH$N)#3}KMsT%",
        ];
        for pwd in very_strong {
            let result = score(pwd, 0).unwrap();
            assert_tier(&result, Tier::VeryStrong);
        }
    }

    #[test]
    fn test_excellent_passwords() {
        let excellent = [
            "8B^2IFjN[n&ryOETRA4#1!tHe0=",
            "cxbt0[YQsaw%!k#+)2LUgu?drBD",
            "{9eOSN$JB!`\\K3sH7*8m]rRU&xf",
        ];
        for pwd in excellent {
            let result = score(pwd, 0).unwrap();
            assert_tier(&result, Tier::Excellent);
        }
    }

    #[test]
    fn test_bias_up() {
        let fair = ["p2vNGacbfnjq79", "N2GLVwE8TwMdh3", "W4dJR5Y21eaDgS"];
        for pwd in fair {
            assert_tier(&score(pwd, 0).unwrap(), Tier::Fair);
        }
        for pwd in fair {
            assert_tier(&score(pwd, 4).unwrap(), Tier::Strong);
        }
        for pwd in fair {
            assert_tier(&score(pwd, 5).unwrap(), Tier::VeryStrong);
        }
    }

    #[test]
    fn test_bias_down() {
        let fair = ["p2vNGacbfnjq79", "N2GLVwE8TwMdh3", "W4dJR5Y21eaDgS"];
        for pwd in fair {
            assert_tier(&score(pwd, 0).unwrap(), Tier::Fair);
        }
        for pwd in fair {
            assert_tier(&score(pwd, -4).unwrap(), Tier::Poor);
        }
        for pwd in fair {
            assert_tier(&score(pwd, -5).unwrap(), Tier::VeryPoor);
        }
    }

    #[test]
    fn test_exact_totals() {
        let expected = [
            ("asdfgzxcv", 19),
            ("P@ssword", 21),
            ("P@ssword!", 38),
            ("qwerasdfzxcv", 30),
            ("1qaz2wsx3edc", 49),
            ("p2vNGcbnjq79", 58),
            ("N2GLVE8TwMh3", 60),
            ("W4JR5Y21eDgS", 56),
            ("0}UVsHlMwWF^21.Q", 90),
            ("9]y.GqzxsoaX8142", 94),
            ("~Va.^i(,\\FLt=eurHzg@W", 92),
            ("3+gk~X7m!aUe6JG=chzI", 108),
            (",=45Dxv#M)n(\\}uLpsF.", 111),
            ("y7eJ5dDIH$N)#3}KMsT%", 110),
            ("8B^2IFjN[n&ryOETRA4#1!tHe0=", 136),
            ("cxbt0[YQsaw%!k#+)2LUgu?drBD", 135),
            ("{9eOSN$JB!`\\K3sH7*8m]rRU&xf", 139),
        ];
        for (pwd, total) in expected {
            assert_eq!(score(pwd, 0).unwrap().total(), total, "password {:?}", pwd);
        }
    }

    #[test]
    fn test_exact_totals_degenerate_passwords() {
        // Dominated by the quadratic repeating penalty.
        let pwd = "aaaaaaaaaaaaaabbbbbcccccddddeeeeeeeeeeeeeffffffffffffggggggggg";
        assert_eq!(score(pwd, 0).unwrap().total(), -10762);

        let pwd = "111111111111222222222223333333333444455556666777888899999";
        assert_eq!(score(pwd, 0).unwrap().total(), -7110);
    }

    #[test]
    fn test_bias_contribution_curve() {
        let config = ScoringConfig::default();
        let expected = [
            (-5, -42),
            (-4, -21),
            (-3, -9),
            (-2, -3),
            (-1, 0),
            (0, 0),
            (1, 0),
            (2, 3),
            (3, 9),
            (4, 21),
            (5, 42),
        ];
        for (bias, contribution) in expected {
            assert_eq!(bias_contribution(bias, &config), Ok(contribution));
        }
        assert!(bias_contribution(6, &config).is_err());
        assert!(bias_contribution(i32::MIN, &config).is_err());
    }

    #[test]
    fn test_bias_shifts_total_by_contribution() {
        let base = score("p2vNGcbnjq79", 0).unwrap().total();
        assert_eq!(score("p2vNGcbnjq79", 5).unwrap().total(), base + 42);
        assert_eq!(score("p2vNGcbnjq79", -3).unwrap().total(), base - 9);
    }

    #[test]
    fn test_total_is_monotonic_in_bias() {
        for pwd in ["", "P@ssword!", "3+gk~X7m!aUe6JG=chzI", "12345678"] {
            let mut last = i64::MIN;
            for bias in BIAS_MIN..=BIAS_MAX {
                let total = score(pwd, bias).unwrap().total();
                assert!(total >= last, "total regressed at bias {}", bias);
                last = total;
            }
        }
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let first = score("0}UVsHlMwWF^21.Q", 2).unwrap();
        let second = score("0}UVsHlMwWF^21.Q", 2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_breakdown_has_one_record_per_check() {
        let result = score("P@ssword!", 0).unwrap();
        let breakdown = result.breakdown();
        assert_eq!(breakdown.len(), CheckKind::ALL.len());
        for kind in CheckKind::ALL {
            assert!(breakdown.get(kind).is_some(), "missing {:?}", kind);
        }
    }

    #[test]
    fn test_breakdown_records_for_known_password() {
        let result = score("P@ssword!", 0).unwrap();
        let breakdown = result.breakdown();

        let length = breakdown.get(CheckKind::Length).unwrap();
        assert_eq!(length.delta, 36);
        assert_eq!(length.matches, Matches::Count(9));

        let upper = breakdown.get(CheckKind::UppercaseLetters).unwrap();
        assert_eq!(upper.delta, 8);
        assert_eq!(upper.matches, Matches::Count(1));

        let lower = breakdown.get(CheckKind::LowercaseLetters).unwrap();
        assert_eq!(lower.delta, 12);
        assert_eq!(lower.matches, Matches::Count(6));

        let special = breakdown.get(CheckKind::SpecialChars).unwrap();
        assert_eq!(special.delta, 13);
        assert_eq!(special.matches, Matches::Count(1));

        let letters_only = breakdown.get(CheckKind::LettersOnly).unwrap();
        assert_eq!(letters_only.delta, -10);
        assert_eq!(letters_only.matches, Matches::Flag(true));

        let repeating = breakdown.get(CheckKind::RepeatingChars).unwrap();
        assert_eq!(repeating.delta, -1);
        assert_eq!(repeating.matches, Matches::Count(1));

        let reusing = breakdown.get(CheckKind::ReusingChars).unwrap();
        assert_eq!(reusing.delta, -2);
        assert_eq!(reusing.matches, Matches::Count(1));

        assert_eq!(result.total(), 38);
        assert_tier(&result, Tier::Poor);
    }

    #[test]
    fn test_score_secret_matches_plain_scoring() {
        let secret = SecretString::new("p2vNGcbnjq79".to_string().into());
        assert_eq!(score_secret(&secret, 0), score("p2vNGcbnjq79", 0));
    }

    #[test]
    fn test_multibyte_input_is_scored_per_byte() {
        // Two UTF-8 bytes, neither in any rewarded class: only the
        // length bonus and the letters-only dock apply.
        let result = score("é", 0).unwrap();
        assert_eq!(result.total(), -6);
        assert_tier(&result, Tier::VeryPoor);
    }

    #[test]
    fn test_custom_config_shifts_thresholds() {
        let mut config = ScoringConfig::default();
        config.thresholds.poor = 0;
        let result = score_with_config(Some("asdfgzxcv"), 0, &config).unwrap();
        assert_tier(&result, Tier::Poor);
    }
}
