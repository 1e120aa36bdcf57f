//! Tunable weights, thresholds and policy for preference scoring.
#![forbid(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use scentmatch_core::{Dimension, ParseChoiceError};
use serde::{Deserialize, Serialize};

use crate::ScoringConfigError;

/// Weight of each dimension's component.
///
/// The defaults keep mood the strongest signal, notes and moment close
/// behind, then intensity, with style, time and the synergy bonus as modest
/// contributions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DimensionWeights {
    /// Requested moods.
    pub mood: f32,
    /// Requested moments.
    pub moment: f32,
    /// Requested time of day.
    pub time: f32,
    /// Requested intensity.
    pub intensity: f32,
    /// Requested style.
    pub style: f32,
    /// Liked note families.
    pub notes: f32,
    /// Bonus for broad core coverage.
    pub synergy: f32,
}

impl DimensionWeights {
    /// Weight applied to `dimension`.
    #[must_use]
    pub const fn weight(&self, dimension: Dimension) -> f32 {
        match dimension {
            Dimension::Mood => self.mood,
            Dimension::Moment => self.moment,
            Dimension::Time => self.time,
            Dimension::Intensity => self.intensity,
            Dimension::Style => self.style,
            Dimension::Notes => self.notes,
            Dimension::Synergy => self.synergy,
        }
    }

    const fn named(&self) -> [(&'static str, f32); 7] {
        [
            ("mood", self.mood),
            ("moment", self.moment),
            ("time", self.time),
            ("intensity", self.intensity),
            ("style", self.style),
            ("notes", self.notes),
            ("synergy", self.synergy),
        ]
    }
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            mood: 28.0_f32,
            moment: 18.0_f32,
            time: 10.0_f32,
            intensity: 12.0_f32,
            style: 8.0_f32,
            notes: 18.0_f32,
            synergy: 8.0_f32,
        }
    }
}

/// Maximum points deducted by each penalty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PenaltyWeights {
    /// Deduction at full dislike severity.
    pub dislikes: f32,
    /// Deduction when no core component matched strongly.
    pub weak_coverage: f32,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            dislikes: 14.0_f32,
            weak_coverage: 10.0_f32,
        }
    }
}

/// Ratio thresholds steering reasons, coverage and the synergy bonus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchThresholds {
    /// Strongest single mood ratio needed to name a mood reason.
    pub mood_reason: f32,
    /// Strongest single moment ratio needed to name a moment reason.
    pub moment_reason: f32,
    /// Time ratio needed for a time reason.
    pub time_reason: f32,
    /// Intensity ratio needed for an intensity reason.
    pub intensity_reason: f32,
    /// Style ratio needed for a style reason.
    pub style_reason: f32,
    /// Component ratio below which positive reasons are withheld.
    pub reason_floor: f32,
    /// Core component ratio that counts towards coverage.
    pub strong_match: f32,
    /// Coverage that earns the synergy bonus.
    pub synergy_coverage: f32,
    /// Core components required before synergy applies.
    pub synergy_min_core: usize,
    /// Coverage below which the weak-coverage penalty applies.
    pub weak_coverage: f32,
    /// Disliked keyword hits at which the dislike penalty saturates.
    pub dislike_saturation: u16,
}

impl MatchThresholds {
    const fn named_ratios(&self) -> [(&'static str, f32); 9] {
        [
            ("moodReason", self.mood_reason),
            ("momentReason", self.moment_reason),
            ("timeReason", self.time_reason),
            ("intensityReason", self.intensity_reason),
            ("styleReason", self.style_reason),
            ("reasonFloor", self.reason_floor),
            ("strongMatch", self.strong_match),
            ("synergyCoverage", self.synergy_coverage),
            ("weakCoverage", self.weak_coverage),
        ]
    }
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            mood_reason: 0.55_f32,
            moment_reason: 0.5_f32,
            time_reason: 0.55_f32,
            intensity_reason: 0.6_f32,
            style_reason: 0.7_f32,
            reason_floor: 0.55_f32,
            strong_match: 0.55_f32,
            synergy_coverage: 0.66_f32,
            synergy_min_core: 3,
            weak_coverage: 0.4_f32,
            dislike_saturation: 3,
        }
    }
}

/// How disliked notes affect a perfume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DislikePolicy {
    /// Deduct points in proportion to the disliked keyword hits.
    #[default]
    Penalise,
    /// Drop any perfume with a disliked keyword hit from the ranking.
    Exclude,
}

impl DislikePolicy {
    /// Return the policy as its lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Penalise => "penalise",
            Self::Exclude => "exclude",
        }
    }
}

impl fmt::Display for DislikePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DislikePolicy {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        [Self::Penalise, Self::Exclude]
            .into_iter()
            .find(|policy| policy.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseChoiceError {
                kind: "dislike policy",
                value: s.to_owned(),
            })
    }
}

/// Every tunable used by [`PreferenceScorer`](crate::PreferenceScorer).
///
/// # Examples
/// ```
/// use scentmatch_scorer::{DislikePolicy, ScoringConfig};
///
/// let config = ScoringConfig::default().with_dislike_policy(DislikePolicy::Exclude);
/// assert!(config.validate().is_ok());
///
/// let mut broken = ScoringConfig::default();
/// broken.weights.mood = f32::NAN;
/// assert!(broken.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringConfig {
    /// Component weights.
    pub weights: DimensionWeights,
    /// Penalty weights.
    pub penalties: PenaltyWeights,
    /// Ratio thresholds.
    pub thresholds: MatchThresholds,
    /// Treatment of disliked notes.
    pub dislike_policy: DislikePolicy,
}

impl ScoringConfig {
    /// Replace the dislike policy while returning `self` for chaining.
    #[must_use]
    pub const fn with_dislike_policy(mut self, policy: DislikePolicy) -> Self {
        self.dislike_policy = policy;
        self
    }

    /// Validate the configuration and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError::InvalidWeight`] for a negative or
    /// non-finite weight, [`ScoringConfigError::InvalidThreshold`] for a ratio
    /// threshold outside `0.0..=1.0` and
    /// [`ScoringConfigError::ZeroDislikeSaturation`] when the dislike
    /// saturation is zero.
    pub fn validate(self) -> Result<Self, ScoringConfigError> {
        let penalties = [
            ("dislikes", self.penalties.dislikes),
            ("weakCoverage", self.penalties.weak_coverage),
        ];
        for (name, value) in self.weights.named().into_iter().chain(penalties) {
            if !value.is_finite() || value < 0.0_f32 {
                return Err(ScoringConfigError::InvalidWeight { name, value });
            }
        }
        for (name, value) in self.thresholds.named_ratios() {
            if !(0.0_f32..=1.0_f32).contains(&value) {
                return Err(ScoringConfigError::InvalidThreshold { name, value });
            }
        }
        if self.thresholds.dislike_saturation == 0 {
            return Err(ScoringConfigError::ZeroDislikeSaturation);
        }
        Ok(self)
    }
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floats within a tolerance"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_are_valid() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[rstest]
    #[case(f32::NAN)]
    #[case(f32::INFINITY)]
    #[case(-1.0)]
    fn rejects_bad_weights(#[case] value: f32) {
        let mut config = ScoringConfig::default();
        config.penalties.weak_coverage = value;
        let err = config.validate().expect_err("invalid weight");
        assert!(matches!(
            err,
            ScoringConfigError::InvalidWeight {
                name: "weakCoverage",
                ..
            }
        ));
    }

    #[rstest]
    #[case(1.5)]
    #[case(-0.1)]
    #[case(f32::NAN)]
    fn rejects_thresholds_outside_unit_range(#[case] value: f32) {
        let mut config = ScoringConfig::default();
        config.thresholds.synergy_coverage = value;
        let err = config.validate().expect_err("invalid threshold");
        assert!(matches!(
            err,
            ScoringConfigError::InvalidThreshold {
                name: "synergyCoverage",
                ..
            }
        ));
    }

    #[rstest]
    fn rejects_zero_dislike_saturation() {
        let mut config = ScoringConfig::default();
        config.thresholds.dislike_saturation = 0;
        assert_eq!(
            config.validate(),
            Err(ScoringConfigError::ZeroDislikeSaturation)
        );
    }

    #[rstest]
    #[case("penalise", DislikePolicy::Penalise)]
    #[case(" EXCLUDE ", DislikePolicy::Exclude)]
    fn parses_dislike_policy(#[case] input: &str, #[case] expected: DislikePolicy) {
        assert_eq!(input.parse::<DislikePolicy>(), Ok(expected));
    }

    #[rstest]
    fn partial_json_keeps_defaults() {
        let config: ScoringConfig =
            serde_json::from_str(r#"{"weights":{"mood":40},"dislikePolicy":"exclude"}"#)
                .expect("valid config json");
        assert!((config.weights.mood - 40.0).abs() <= f32::EPSILON);
        assert!((config.weights.notes - 18.0).abs() <= f32::EPSILON);
        assert_eq!(config.dislike_policy, DislikePolicy::Exclude);
    }
}
