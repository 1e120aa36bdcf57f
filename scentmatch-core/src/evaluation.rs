//! Explained match results produced by a [`Scorer`](crate::Scorer).
//!
//! A [`MatchScore`] carries the raw weighted score, the best achievable score
//! for the visitor's answers, the rounded match percentage and the reasons a
//! presentation layer can translate into display text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Intensity, Perfume};

/// Machine-readable identifier of a match reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReasonCode {
    /// A requested mood matched strongly.
    Mood,
    /// A requested moment matched strongly.
    Moment,
    /// The requested time of day matched strongly.
    Time,
    /// The requested intensity matched strongly.
    Intensity,
    /// The requested style matched.
    Style,
    /// A liked note family appears in the notes.
    Note,
    /// Several core dimensions matched at once.
    Synergy,
    /// Disliked notes were found.
    DislikePenalty,
    /// Too few core dimensions matched.
    CoveragePenalty,
}

impl ReasonCode {
    /// Return the code as its wire identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mood => "mood",
            Self::Moment => "moment",
            Self::Time => "time",
            Self::Intensity => "intensity",
            Self::Style => "style",
            Self::Note => "note",
            Self::Synergy => "synergy",
            Self::DislikePenalty => "dislikePenalty",
            Self::CoveragePenalty => "coveragePenalty",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Polarity of a reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// The reason supports the recommendation.
    Positive,
    /// The reason counts against the recommendation.
    Warning,
}

/// Structured justification attached to a match.
///
/// # Examples
/// ```
/// use scentmatch_core::{MatchReason, ReasonCode, Tone};
///
/// let reason = MatchReason::positive(ReasonCode::Mood, Some("fresh"));
/// assert_eq!(reason.tone, Tone::Positive);
/// assert_eq!(reason.value.as_deref(), Some("fresh"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchReason {
    /// What the reason is about.
    pub code: ReasonCode,
    /// The matched option identifier, when the reason names one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Whether the reason supports or counts against the match.
    pub tone: Tone,
}

impl MatchReason {
    /// Build a supporting reason.
    #[must_use]
    pub fn positive(code: ReasonCode, value: Option<&str>) -> Self {
        Self {
            code,
            value: value.map(str::to_owned),
            tone: Tone::Positive,
        }
    }

    /// Build a warning reason.
    #[must_use]
    pub fn warning(code: ReasonCode, value: Option<&str>) -> Self {
        Self {
            code,
            value: value.map(str::to_owned),
            tone: Tone::Warning,
        }
    }
}

/// Preference axis contributing a scoring component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Requested moods.
    Mood,
    /// Requested moments.
    Moment,
    /// Requested time of day.
    Time,
    /// Requested intensity.
    Intensity,
    /// Requested style.
    Style,
    /// Liked note families.
    Notes,
    /// Bonus for broad core coverage.
    Synergy,
}

impl Dimension {
    /// Report whether the dimension counts towards core coverage.
    #[must_use]
    pub const fn is_core(self) -> bool {
        matches!(
            self,
            Self::Mood | Self::Moment | Self::Time | Self::Intensity | Self::Style
        )
    }
}

/// Weighted contribution of one dimension to a perfume's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    /// Dimension the component scores.
    pub dimension: Dimension,
    /// Fixed weight of the dimension.
    pub weight: f32,
    /// Achieved ratio in `0.0..=1.0`.
    pub achieved: f32,
    /// Reason attributed when the match cleared its threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<MatchReason>,
}

impl ScoreComponent {
    /// Weighted points earned by the component.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "weighting a ratio requires multiplication"
    )]
    pub fn points(&self) -> f32 {
        self.weight * self.achieved
    }
}

/// Evaluation of one perfume against one set of preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    /// Weighted score after penalties, never negative.
    pub score: f32,
    /// Sum of the weights of every component present.
    pub max_score: f32,
    /// Rounded share of the maximum, in `0..=100`.
    pub match_percentage: u8,
    /// Deduplicated reasons in first-seen order.
    pub reasons: Vec<MatchReason>,
    /// Derived projection strength of the perfume.
    pub intensity_level: Intensity,
    /// Share of core components that matched strongly.
    pub coverage: f32,
}

impl MatchScore {
    /// Result for preferences that carry no usable signal.
    #[must_use]
    pub const fn empty(intensity_level: Intensity) -> Self {
        Self {
            score: 0.0,
            max_score: 0.0,
            match_percentage: 0,
            reasons: Vec::new(),
            intensity_level,
            coverage: 0.0,
        }
    }

    /// Report whether a reason with `code` is attached.
    #[must_use]
    pub fn has_reason(&self, code: ReasonCode) -> bool {
        self.reasons.iter().any(|reason| reason.code == code)
    }
}

/// A perfume paired with its evaluation.
///
/// Serialises flat: the perfume's fields followed by `score`, `maxScore`,
/// `matchPercentage`, `reasons`, `intensityLevel` and `coverage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPerfume {
    /// The recommended perfume.
    #[serde(flatten)]
    pub perfume: Perfume,
    /// How well the perfume matched.
    #[serde(flatten)]
    pub evaluation: MatchScore,
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
    #[case(Dimension::Mood, true)]
    #[case(Dimension::Style, true)]
    #[case(Dimension::Notes, false)]
    #[case(Dimension::Synergy, false)]
    fn core_dimensions(#[case] dimension: Dimension, #[case] expected: bool) {
        assert_eq!(dimension.is_core(), expected);
    }

    #[rstest]
    fn reason_codes_use_camel_case() {
        let json = serde_json::to_string(&ReasonCode::DislikePenalty).expect("serialise code");
        assert_eq!(json, "\"dislikePenalty\"");
        assert_eq!(ReasonCode::CoveragePenalty.to_string(), "coveragePenalty");
    }

    #[rstest]
    fn ranked_perfume_serialises_flat() {
        let ranked = RankedPerfume {
            perfume: Perfume::new(4).with_name_en("Amber Hour"),
            evaluation: MatchScore {
                reasons: vec![MatchReason::warning(ReasonCode::DislikePenalty, Some("woody"))],
                ..MatchScore::empty(Intensity::Strong)
            },
        };
        let json = serde_json::to_value(&ranked).expect("serialise ranked perfume");
        assert_eq!(json["id"], 4);
        assert_eq!(json["nameEn"], "Amber Hour");
        assert_eq!(json["matchPercentage"], 0);
        assert_eq!(json["intensityLevel"], "strong");
        assert_eq!(json["reasons"][0]["code"], "dislikePenalty");
        assert_eq!(json["reasons"][0]["tone"], "warning");
    }

    #[rstest]
    fn component_points_weight_the_ratio() {
        let component = ScoreComponent {
            dimension: Dimension::Time,
            weight: 10.0,
            achieved: 0.6,
            reason: None,
        };
        assert!((component.points() - 6.0).abs() <= 1e-6);
    }
}
