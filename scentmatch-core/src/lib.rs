//! Core domain types for the scentmatch engine.
//!
//! The crate models the three inputs and outputs of a recommendation pass:
//! candidate [`Perfume`] records supplied by a catalogue provider, the
//! canonical [`Preferences`] produced from questionnaire answers, and the
//! [`RankedPerfume`] results with their explained [`MatchScore`].
//!
//! Scoring and ranking live behind the [`Scorer`] and [`Recommender`] traits so
//! alternative engines can be swapped in without touching callers.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod choice;
pub mod evaluation;
pub mod perfume;
pub mod preferences;
pub mod questionnaire;
pub mod recommender;
pub mod scorer;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use choice::{Intensity, Moment, Mood, NoteFamily, ParseChoiceError, Style, TimeOfDay};
pub use evaluation::{
    Dimension, MatchReason, MatchScore, RankedPerfume, ReasonCode, ScoreComponent, Tone,
};
pub use perfume::Perfume;
pub use preferences::Preferences;
pub use questionnaire::{Question, Selection, sanitize_answers};
pub use recommender::{DEFAULT_LIMIT, Recommender};
pub use scorer::Scorer;
