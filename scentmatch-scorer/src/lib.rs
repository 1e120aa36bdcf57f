//! Preference matching and ranking for scentmatch perfumes.
//!
//! The crate scores each candidate [`Perfume`](scentmatch_core::Perfume)
//! against sanitised [`Preferences`](scentmatch_core::Preferences):
//! - **Keyword tables** ([`keywords`]) map moods, moments, times, styles and
//!   note families to lowercase fragments matched by substring against the
//!   perfume's free-text attributes.
//! - **Dimension scorers** ([`dimensions`]) award partial credit per answered
//!   dimension, using the derived intensity from [`classify_intensity`].
//! - **Aggregation** ([`PreferenceScorer`]) weighs the dimensions, deducts
//!   dislike and weak-coverage penalties, adds a synergy bonus and explains
//!   the result. It implements the [`Scorer`](scentmatch_core::Scorer) trait.
//! - **Ranking** ([`rank`], [`CatalogRanker`]) orders a catalogue
//!   deterministically and keeps the top entries.
//!
//! Every tunable lives in [`ScoringConfig`]. Scoring is pure and holds no
//! mutable state, so one scorer can serve concurrent sessions.
//!
//! # Examples
//!
//! ```
//! use scentmatch_core::{Intensity, Mood, Perfume, Preferences, TimeOfDay};
//! use scentmatch_scorer::{MatchQuality, describe_match_quality, rank_perfumes};
//!
//! let catalog = vec![
//!     Perfume::new(1).with_family("Oriental").with_character("warm, sensual"),
//!     Perfume::new(2).with_family("Citrus").with_character("fresh"),
//! ];
//! let preferences = Preferences::new()
//!     .with_mood(Mood::Warm)
//!     .with_time(TimeOfDay::Night)
//!     .with_intensity(Intensity::Strong);
//!
//! let ranked = rank_perfumes(&catalog, &preferences, 6);
//! let best = ranked.first().expect("catalog is not empty");
//! assert_eq!(best.perfume.id, 1);
//! assert_eq!(describe_match_quality(best.evaluation.match_percentage), MatchQuality::Great);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
pub mod dimensions;
mod error;
mod intensity;
pub mod keywords;
mod preference;
mod quality;
mod rank;

pub use config::{DimensionWeights, DislikePolicy, MatchThresholds, PenaltyWeights, ScoringConfig};
pub use error::ScoringConfigError;
pub use intensity::{LIGHT_NOTE_COUNT, STRONG_NOTE_COUNT, classify_intensity};
pub use preference::PreferenceScorer;
pub use quality::{
    FAIR_THRESHOLD, GOOD_THRESHOLD, GREAT_THRESHOLD, MatchQuality, describe_match_quality,
};
pub use rank::{CatalogRanker, rank, rank_perfumes};

#[cfg(test)]
mod tests;
