//! Questionnaire definition and answer sanitisation.
//!
//! Raw answers arrive as loosely typed JSON from the kiosk front-end (often
//! via a URL query parameter). [`sanitize_answers`] turns any JSON value into
//! canonical [`Preferences`]; it never fails.

use std::str::FromStr;

use serde_json::Value;

use crate::preferences::{MAX_MOMENTS, MAX_MOODS, MAX_NOTE_DISLIKES, MAX_NOTE_LIKES};
use crate::{Intensity, Moment, Mood, NoteFamily, Preferences, Style, TimeOfDay};

/// Whether a question accepts one or several answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    /// Exactly one option may be chosen.
    Single,
    /// Several options may be chosen, up to the question's maximum.
    Multiple,
}

/// Steps of the questionnaire, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Question {
    /// Preferred moods.
    Moods,
    /// Occasions the perfume is for.
    Moments,
    /// Time of day.
    Times,
    /// Projection strength.
    Intensity,
    /// Target style.
    Styles,
    /// Liked note families.
    NoteLikes,
    /// Disliked note families.
    NoteDislikes,
}

impl Question {
    /// Every question in presentation order.
    pub const ALL: [Self; 7] = [
        Self::Moods,
        Self::Moments,
        Self::Times,
        Self::Intensity,
        Self::Styles,
        Self::NoteLikes,
        Self::NoteDislikes,
    ];

    /// Key under which the answer sheet stores this question's values.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Moods => "moods",
            Self::Moments => "moments",
            Self::Times => "times",
            Self::Intensity => "intensity",
            Self::Styles => "styles",
            Self::NoteLikes => "noteLikes",
            Self::NoteDislikes => "noteDislikes",
        }
    }

    /// Selection mode of the question.
    #[must_use]
    pub const fn selection(self) -> Selection {
        match self {
            Self::Times | Self::Intensity | Self::Styles => Selection::Single,
            Self::Moods | Self::Moments | Self::NoteLikes | Self::NoteDislikes => {
                Selection::Multiple
            }
        }
    }

    /// Maximum number of answers kept for the question.
    #[must_use]
    pub const fn max_selections(self) -> usize {
        match self {
            Self::Moods => MAX_MOODS,
            Self::Moments => MAX_MOMENTS,
            Self::NoteLikes => MAX_NOTE_LIKES,
            Self::NoteDislikes => MAX_NOTE_DISLIKES,
            Self::Times | Self::Intensity | Self::Styles => 1,
        }
    }

    /// Report whether the visitor may skip the question.
    #[must_use]
    pub const fn is_optional(self) -> bool {
        matches!(self, Self::NoteLikes | Self::NoteDislikes)
    }
}

impl Preferences {
    /// Number of answers recorded for a question.
    #[must_use]
    pub fn answer_count(&self, question: Question) -> usize {
        match question {
            Question::Moods => self.moods.len(),
            Question::Moments => self.moments.len(),
            Question::Times => usize::from(self.time.is_some()),
            Question::Intensity => usize::from(self.intensity.is_some()),
            Question::Styles => usize::from(self.style.is_some()),
            Question::NoteLikes => self.note_likes.len(),
            Question::NoteDislikes => self.note_dislikes.len(),
        }
    }

    /// First required question without an answer.
    ///
    /// Returns the opening question when every required step is answered, so
    /// a front-end resuming a completed sheet starts from the top.
    #[must_use]
    pub fn first_incomplete_question(&self) -> Question {
        Question::ALL
            .into_iter()
            .find(|question| !question.is_optional() && self.answer_count(*question) == 0)
            .unwrap_or(Question::Moods)
    }
}

/// Convert untrusted answers into canonical [`Preferences`].
///
/// Non-object input yields empty preferences. For each question, a missing or
/// non-array value is skipped; entries that are not strings, are blank after
/// trimming, or do not name an option of that question are dropped. Option
/// names are compared ignoring ASCII case, so `"Fresh"` and `"FRESH"` both
/// select [`Mood::Fresh`](crate::Mood::Fresh). Surviving
/// values are deduplicated in first-seen order and truncated to the question's
/// maximum. A note family listed as both liked and disliked stays liked.
///
/// # Examples
/// ```
/// use scentmatch_core::{Mood, sanitize_answers};
///
/// let raw = serde_json::json!({
///     "moods": [" fresh ", "fresh", "gothic", 3, "warm", "sweet"],
///     "times": "day",
/// });
/// let preferences = sanitize_answers(&raw);
///
/// assert_eq!(preferences.moods(), &[Mood::Fresh, Mood::Warm]);
/// assert!(preferences.time().is_none());
/// ```
#[must_use]
pub fn sanitize_answers(input: &Value) -> Preferences {
    let mut preferences = Preferences::new();
    let Some(object) = input.as_object() else {
        return preferences;
    };

    for question in Question::ALL {
        let Some(raw) = object.get(question.key()).and_then(Value::as_array) else {
            continue;
        };
        let max = question.max_selections();
        match question {
            Question::Moods => preferences.moods = parse_options::<Mood>(raw, max),
            Question::Moments => preferences.moments = parse_options::<Moment>(raw, max),
            Question::Times => preferences.time = first_option::<TimeOfDay>(raw),
            Question::Intensity => preferences.intensity = first_option::<Intensity>(raw),
            Question::Styles => preferences.style = first_option::<Style>(raw),
            Question::NoteLikes => {
                preferences.note_likes = parse_options::<NoteFamily>(raw, max);
            }
            Question::NoteDislikes => {
                preferences.note_dislikes = parse_options::<NoteFamily>(raw, max);
            }
        }
    }

    let likes = preferences.note_likes.clone();
    preferences
        .note_dislikes
        .retain(|disliked| !likes.contains(disliked));
    preferences
}

fn parse_options<T>(raw: &[Value], max: usize) -> Vec<T>
where
    T: FromStr + PartialEq,
{
    let mut options = Vec::new();
    let candidates = raw
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .filter_map(|value| value.parse::<T>().ok());
    for option in candidates {
        if !options.contains(&option) {
            options.push(option);
        }
    }
    options.truncate(max);
    options
}

fn first_option<T>(raw: &[Value]) -> Option<T>
where
    T: FromStr + PartialEq,
{
    parse_options(raw, 1).into_iter().next()
}
