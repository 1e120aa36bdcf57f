//! Facade crate for the scentmatch recommendation engine.
//!
//! This crate re-exports the core domain types and the default preference
//! scorer so callers can rank a perfume catalogue against questionnaire
//! answers with a single dependency.

#![forbid(unsafe_code)]

pub use scentmatch_core::{
    DEFAULT_LIMIT, Dimension, Intensity, MatchReason, MatchScore, Moment, Mood, NoteFamily,
    ParseChoiceError, Perfume, Preferences, Question, RankedPerfume, ReasonCode, Recommender,
    ScoreComponent, Scorer, Selection, Style, TimeOfDay, Tone, sanitize_answers,
};

pub use scentmatch_scorer::{
    CatalogRanker, DimensionWeights, DislikePolicy, MatchQuality, MatchThresholds, PenaltyWeights,
    PreferenceScorer, ScoringConfig, ScoringConfigError, classify_intensity,
    describe_match_quality, rank, rank_perfumes,
};

#[cfg(feature = "test-support")]
pub use scentmatch_core::test_support;
