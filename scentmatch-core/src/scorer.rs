//! Score perfumes for a set of preferences.
//!
//! The `Scorer` trait evaluates a [`Perfume`](crate::Perfume) against a
//! visitor's [`Preferences`](crate::Preferences), returning an explained
//! [`MatchScore`](crate::MatchScore).

use crate::{MatchScore, Perfume, Preferences};

/// Evaluate how well a perfume suits a visitor.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one scorer can
/// serve concurrent sessions. Scoring is infallible: preferences without
/// usable answers produce [`MatchScore::empty`], never an error.
///
/// Returning `None` excludes the perfume from ranking altogether. Scorers
/// that only penalise must always return `Some`.
///
/// Implementations must:
/// - Keep `match_percentage` within `0..=100`.
/// - Produce finite, non-negative `score` and `max_score` values.
/// - Be deterministic for identical inputs.
///
/// Use [`Scorer::sanitise`] to guard per-dimension ratios.
///
/// # Examples
///
/// ```rust
/// use scentmatch_core::{Intensity, MatchScore, Perfume, Preferences, Scorer};
///
/// struct NeutralScorer;
///
/// impl Scorer for NeutralScorer {
///     fn score(&self, _perfume: &Perfume, _preferences: &Preferences) -> Option<MatchScore> {
///         Some(MatchScore::empty(Intensity::Medium))
///     }
/// }
///
/// let scored = NeutralScorer.score(&Perfume::new(1), &Preferences::new());
/// assert_eq!(scored.map(|s| s.match_percentage), Some(0));
/// ```
pub trait Scorer: Send + Sync {
    /// Evaluate `perfume` for `preferences`, or `None` to exclude it.
    fn score(&self, perfume: &Perfume, preferences: &Preferences) -> Option<MatchScore>;

    /// Clamp and validate an achievement ratio.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    #[must_use]
    fn sanitise(ratio: f32) -> f32
    where
        Self: Sized,
    {
        if !ratio.is_finite() {
            return 0.0;
        }
        ratio.clamp(0.0, 1.0)
    }
}
