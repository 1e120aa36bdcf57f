//! Questionnaire preference scoring.
//!
//! [`PreferenceScorer`] turns per-dimension ratios into weighted components,
//! deducts dislike and weak-coverage penalties, awards a synergy bonus when
//! most core dimensions match strongly, and reports the reasons behind the
//! result through the [`Scorer`] trait.

#![forbid(unsafe_code)]

use scentmatch_core::{
    Dimension, Intensity, MatchReason, MatchScore, NoteFamily, Perfume, Preferences, ReasonCode,
    ScoreComponent, Scorer, Tone,
};

use crate::dimensions::{
    Candidate, DislikeMatch, count_as_f32, dislike_hits, intensity_ratio, moment_ratio,
    mood_ratio, note_preference, score_many, style_ratio, time_ratio,
};
use crate::{DislikePolicy, ScoringConfig, ScoringConfigError};

/// Scorer matching perfumes against sanitised questionnaire answers.
///
/// # Examples
/// ```
/// use scentmatch_core::{Mood, Perfume, Preferences, ReasonCode, Scorer};
/// use scentmatch_scorer::PreferenceScorer;
///
/// let perfume = Perfume::new(1)
///     .with_family("citrus")
///     .with_character("fresh, clean")
///     .with_notes(["bergamot", "lemon"]);
/// let preferences = Preferences::new().with_mood(Mood::Fresh);
///
/// let scored = PreferenceScorer::new()
///     .score(&perfume, &preferences)
///     .expect("penalising scorers never exclude");
/// assert_eq!(scored.match_percentage, 100);
/// assert!(scored.has_reason(ReasonCode::Mood));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PreferenceScorer {
    config: ScoringConfig,
}

impl PreferenceScorer {
    /// Construct a scorer with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a scorer from a custom configuration.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError`] when the configuration fails
    /// [`ScoringConfig::validate`].
    pub fn with_config(config: ScoringConfig) -> Result<Self, ScoringConfigError> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Weighted components for every answered dimension, in questionnaire
    /// order. The synergy bonus is not included.
    ///
    /// Each component carries a reason when its strongest match cleared the
    /// dimension's reason threshold.
    #[must_use]
    pub fn components(&self, perfume: &Perfume, preferences: &Preferences) -> Vec<ScoreComponent> {
        self.base_components(&Candidate::new(perfume), preferences)
    }

    fn base_components(
        &self,
        candidate: &Candidate,
        preferences: &Preferences,
    ) -> Vec<ScoreComponent> {
        let thresholds = &self.config.thresholds;
        let mut components = Vec::with_capacity(6);

        if !preferences.moods().is_empty() {
            let matched = score_many(preferences.moods(), |mood| mood_ratio(candidate, mood));
            let reason = matched
                .strongest
                .filter(|(_, ratio)| *ratio >= thresholds.mood_reason)
                .map(|(mood, _)| MatchReason::positive(ReasonCode::Mood, Some(mood.as_str())));
            components.push(self.component(Dimension::Mood, matched.average, reason));
        }

        if !preferences.moments().is_empty() {
            let matched = score_many(preferences.moments(), |moment| {
                moment_ratio(candidate, moment)
            });
            let reason = matched
                .strongest
                .filter(|(_, ratio)| *ratio >= thresholds.moment_reason)
                .map(|(moment, _)| {
                    MatchReason::positive(ReasonCode::Moment, Some(moment.as_str()))
                });
            components.push(self.component(Dimension::Moment, matched.average, reason));
        }

        if let Some(time) = preferences.time() {
            let ratio = time_ratio(candidate, time);
            let reason = (ratio >= thresholds.time_reason)
                .then(|| MatchReason::positive(ReasonCode::Time, Some(time.as_str())));
            components.push(self.component(Dimension::Time, ratio, reason));
        }

        if let Some(wanted) = preferences.intensity() {
            let ratio = intensity_ratio(candidate.intensity(), wanted);
            let reason = (ratio >= thresholds.intensity_reason)
                .then(|| MatchReason::positive(ReasonCode::Intensity, Some(wanted.as_str())));
            components.push(self.component(Dimension::Intensity, ratio, reason));
        }

        if let Some(style) = preferences.style() {
            let ratio = style_ratio(candidate, style);
            let reason = (ratio >= thresholds.style_reason)
                .then(|| MatchReason::positive(ReasonCode::Style, Some(style.as_str())));
            components.push(self.component(Dimension::Style, ratio, reason));
        }

        if !preferences.note_likes().is_empty() {
            let matched = note_preference(candidate, preferences.note_likes());
            let reason = matched
                .best
                .map(|family| MatchReason::positive(ReasonCode::Note, Some(family.as_str())));
            components.push(self.component(Dimension::Notes, matched.ratio, reason));
        }

        components
    }

    fn component(
        &self,
        dimension: Dimension,
        achieved: f32,
        reason: Option<MatchReason>,
    ) -> ScoreComponent {
        ScoreComponent {
            dimension,
            weight: self.config.weights.weight(dimension),
            achieved: <Self as Scorer>::sanitise(achieved),
            reason,
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "severity and coverage are ratios of counts"
    )]
    fn evaluate(
        &self,
        candidate: &Candidate,
        preferences: &Preferences,
        dislikes: DislikeMatch,
    ) -> MatchScore {
        let thresholds = &self.config.thresholds;
        let penalties = &self.config.penalties;
        let mut tally = Tally::new(thresholds.reason_floor);

        for component in self.base_components(candidate, preferences) {
            tally.add_component(component);
        }

        if dislikes.hits > 0 {
            let severity =
                count_as_f32(dislikes.hits) / f32::from(thresholds.dislike_saturation);
            let value = dislikes.first.map(NoteFamily::as_str);
            tally.add_penalty(
                penalties.dislikes,
                severity,
                MatchReason::warning(ReasonCode::DislikePenalty, value),
            );
        }

        if tally.max_score() <= 0.0_f32 {
            return MatchScore::empty(candidate.intensity());
        }

        let core = tally.core_components();
        let strong = tally.strong_core_components(thresholds.strong_match);
        let coverage = if core == 0 {
            0.0_f32
        } else {
            count_as_f32(strong) / count_as_f32(core)
        };

        if core >= thresholds.synergy_min_core && coverage >= thresholds.synergy_coverage {
            let synergy = MatchReason::positive(ReasonCode::Synergy, None);
            tally.add_component(self.component(Dimension::Synergy, 1.0_f32, Some(synergy)));
        }

        if core > 0 && coverage < thresholds.weak_coverage {
            tally.add_penalty(
                penalties.weak_coverage,
                1.0_f32 - coverage,
                MatchReason::warning(ReasonCode::CoveragePenalty, None),
            );
        }

        tally.finish(candidate.intensity(), coverage)
    }
}

impl Scorer for PreferenceScorer {
    fn score(&self, perfume: &Perfume, preferences: &Preferences) -> Option<MatchScore> {
        let candidate = Candidate::new(perfume);
        let dislikes = dislike_hits(&candidate, preferences.note_dislikes());
        if self.config.dislike_policy == DislikePolicy::Exclude && dislikes.hits > 0 {
            log::trace!(
                "excluding perfume {} with {} disliked keyword hits",
                perfume.id,
                dislikes.hits
            );
            return None;
        }
        let evaluation = self.evaluate(&candidate, preferences, dislikes);
        log::trace!(
            "perfume {} scored {:.2}/{:.2} ({}%)",
            perfume.id,
            evaluation.score,
            evaluation.max_score,
            evaluation.match_percentage
        );
        Some(evaluation)
    }
}

/// Running totals for one evaluation.
struct Tally {
    components: Vec<ScoreComponent>,
    penalty: f32,
    reasons: Vec<MatchReason>,
    reason_floor: f32,
}

impl Tally {
    const fn new(reason_floor: f32) -> Self {
        Self {
            components: Vec::new(),
            penalty: 0.0_f32,
            reasons: Vec::new(),
            reason_floor,
        }
    }

    fn add_component(&mut self, component: ScoreComponent) {
        if let Some(reason) = &component.reason {
            let withheld = reason.tone == Tone::Positive && component.achieved < self.reason_floor;
            if !withheld {
                self.push_reason(reason.clone());
            }
        }
        self.components.push(component);
    }

    #[expect(clippy::float_arithmetic, reason = "penalties accumulate")]
    fn add_penalty(&mut self, weight: f32, severity: f32, reason: MatchReason) {
        self.penalty += weight * severity.clamp(0.0_f32, 1.0_f32);
        self.push_reason(reason);
    }

    fn push_reason(&mut self, reason: MatchReason) {
        let seen = self
            .reasons
            .iter()
            .any(|existing| existing.code == reason.code && existing.value == reason.value);
        if !seen {
            self.reasons.push(reason);
        }
    }

    fn max_score(&self) -> f32 {
        self.components.iter().map(|component| component.weight).sum()
    }

    fn core_components(&self) -> usize {
        self.components
            .iter()
            .filter(|component| component.dimension.is_core())
            .count()
    }

    fn strong_core_components(&self, strong_match: f32) -> usize {
        self.components
            .iter()
            .filter(|component| component.dimension.is_core() && component.achieved >= strong_match)
            .count()
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the percentage scales the score by the maximum"
    )]
    fn finish(self, intensity_level: Intensity, coverage: f32) -> MatchScore {
        let max_score = self.max_score();
        let earned: f32 = self.components.iter().map(ScoreComponent::points).sum();
        let score = (earned - self.penalty).max(0.0_f32);
        MatchScore {
            score,
            max_score,
            match_percentage: percentage(score, max_score),
            reasons: self.reasons,
            intensity_level,
            coverage,
        }
    }
}

/// Round `score / max_score` to a whole percentage within `0..=100`.
#[expect(
    clippy::float_arithmetic,
    reason = "the percentage scales the score by the maximum"
)]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is rounded and clamped to 0..=100 before casting"
)]
fn percentage(score: f32, max_score: f32) -> u8 {
    if max_score <= 0.0_f32 {
        return 0;
    }
    let scaled = (score / max_score * 100.0_f32).round();
    if !scaled.is_finite() {
        return 0;
    }
    scaled.clamp(0.0_f32, 100.0_f32) as u8
}
