//! Heuristic password strength scoring library
//!
//! This library computes a numeric strength score for a candidate
//! password from a set of independent heuristic checks and classifies
//! it into one of six ordered tiers, from `Very Poor` to `Excellent`.
//! Scoring is a pure, bounded computation over the password bytes:
//! no storage, no hashing, no blacklist lookups.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async scoring with
//!   cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_scorer::{score, Tier};
//!
//! let result = score("3+gk~X7m!aUe6JG=chzI", 0)?;
//!
//! assert_eq!(result.tier(), Tier::VeryStrong);
//! println!("{} -> {}", result.total(), result.label());
//!
//! // Per-check contributions are available for display.
//! for (kind, check) in result.breakdown().iter() {
//!     println!("{}: {} ({})", kind.display_name(), check.delta, check.matches);
//! }
//! # Ok::<(), pwd_scorer::ScoreError>(())
//! ```
//!
//! A caller-supplied bias in `[-5, 5]` skews the total along a cubic
//! curve before classification; anything outside that range is
//! rejected before any scoring work begins.

// Internal modules
mod checks;
mod config;
mod scorer;
mod types;

// Public API
pub use config::{ClassReward, ScoringConfig, TierThresholds};
pub use scorer::{
    BIAS_MAX, BIAS_MIN, ScoreError, score, score_opt, score_secret, score_with_config,
};
pub use types::{CheckKind, CheckScore, Matches, ScoreBreakdown, ScoreResult, Tier};

#[cfg(feature = "async")]
pub use scorer::score_tx;
