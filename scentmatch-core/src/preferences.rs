//! Canonical questionnaire answers.
//!
//! [`Preferences`] holds one field per questionnaire dimension. The builder
//! methods keep the record canonical: values are deduplicated in first-seen
//! order, multi-select lists never exceed their maximum, single-select
//! dimensions hold at most one value, and a note family is never both liked
//! and disliked.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Intensity, Moment, Mood, NoteFamily, Style, TimeOfDay, sanitize_answers};

/// Maximum number of moods a visitor may pick.
pub const MAX_MOODS: usize = 2;
/// Maximum number of moments a visitor may pick.
pub const MAX_MOMENTS: usize = 3;
/// Maximum number of liked note families.
pub const MAX_NOTE_LIKES: usize = 3;
/// Maximum number of disliked note families.
pub const MAX_NOTE_DISLIKES: usize = 3;

/// Sanitised answers to the questionnaire.
///
/// Serialises to the answers sheet understood by the questionnaire front-end
/// (`moods`, `moments`, `times`, `intensity`, `styles`, `noteLikes`,
/// `noteDislikes`, each an array of option identifiers). Deserialising runs
/// the input through [`sanitize_answers`], so untrusted payloads always
/// produce a canonical record.
///
/// # Examples
/// ```
/// use scentmatch_core::{Mood, NoteFamily, Preferences, TimeOfDay};
///
/// let preferences = Preferences::new()
///     .with_mood(Mood::Fresh)
///     .with_mood(Mood::Fresh)
///     .with_time(TimeOfDay::Day)
///     .with_note_like(NoteFamily::Citrus);
///
/// assert_eq!(preferences.moods(), &[Mood::Fresh]);
/// assert_eq!(preferences.time(), Some(TimeOfDay::Day));
/// assert!(!preferences.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Preferences {
    pub(crate) moods: Vec<Mood>,
    pub(crate) moments: Vec<Moment>,
    pub(crate) time: Option<TimeOfDay>,
    pub(crate) intensity: Option<Intensity>,
    pub(crate) style: Option<Style>,
    pub(crate) note_likes: Vec<NoteFamily>,
    pub(crate) note_dislikes: Vec<NoteFamily>,
}

impl Preferences {
    /// Construct preferences with no answers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requested moods, at most [`MAX_MOODS`].
    #[must_use]
    pub fn moods(&self) -> &[Mood] {
        &self.moods
    }

    /// Requested moments, at most [`MAX_MOMENTS`].
    #[must_use]
    pub fn moments(&self) -> &[Moment] {
        &self.moments
    }

    /// Requested time of day.
    #[must_use]
    pub const fn time(&self) -> Option<TimeOfDay> {
        self.time
    }

    /// Requested intensity.
    #[must_use]
    pub const fn intensity(&self) -> Option<Intensity> {
        self.intensity
    }

    /// Requested style.
    #[must_use]
    pub const fn style(&self) -> Option<Style> {
        self.style
    }

    /// Liked note families, at most [`MAX_NOTE_LIKES`].
    #[must_use]
    pub fn note_likes(&self) -> &[NoteFamily] {
        &self.note_likes
    }

    /// Disliked note families, at most [`MAX_NOTE_DISLIKES`].
    #[must_use]
    pub fn note_dislikes(&self) -> &[NoteFamily] {
        &self.note_dislikes
    }

    /// Report whether no dimension carries an answer.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.moods.is_empty()
            && self.moments.is_empty()
            && self.time.is_none()
            && self.intensity.is_none()
            && self.style.is_none()
            && self.note_likes.is_empty()
            && self.note_dislikes.is_empty()
    }

    /// Add a mood. Returns `false` when the list is already full.
    pub fn add_mood(&mut self, mood: Mood) -> bool {
        push_bounded(&mut self.moods, mood, MAX_MOODS)
    }

    /// Add a mood while returning `self` for chaining.
    #[must_use]
    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.add_mood(mood);
        self
    }

    /// Add a moment. Returns `false` when the list is already full.
    pub fn add_moment(&mut self, moment: Moment) -> bool {
        push_bounded(&mut self.moments, moment, MAX_MOMENTS)
    }

    /// Add a moment while returning `self` for chaining.
    #[must_use]
    pub fn with_moment(mut self, moment: Moment) -> Self {
        self.add_moment(moment);
        self
    }

    /// Replace the time-of-day answer.
    pub const fn set_time(&mut self, time: Option<TimeOfDay>) {
        self.time = time;
    }

    /// Set the time of day while returning `self` for chaining.
    #[must_use]
    pub const fn with_time(mut self, time: TimeOfDay) -> Self {
        self.time = Some(time);
        self
    }

    /// Replace the intensity answer.
    pub const fn set_intensity(&mut self, intensity: Option<Intensity>) {
        self.intensity = intensity;
    }

    /// Set the intensity while returning `self` for chaining.
    #[must_use]
    pub const fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = Some(intensity);
        self
    }

    /// Replace the style answer.
    pub const fn set_style(&mut self, style: Option<Style>) {
        self.style = style;
    }

    /// Set the style while returning `self` for chaining.
    #[must_use]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Mark a note family as liked.
    ///
    /// A family that was disliked moves to the liked list when there is room.
    /// Returns `false` when the liked list is already full.
    pub fn add_note_like(&mut self, note: NoteFamily) -> bool {
        let accepted = push_bounded(&mut self.note_likes, note, MAX_NOTE_LIKES);
        if accepted {
            self.note_dislikes.retain(|disliked| *disliked != note);
        }
        accepted
    }

    /// Like a note family while returning `self` for chaining.
    #[must_use]
    pub fn with_note_like(mut self, note: NoteFamily) -> Self {
        self.add_note_like(note);
        self
    }

    /// Mark a note family as disliked.
    ///
    /// A family that was liked moves to the disliked list when there is room.
    /// Returns `false` when the disliked list is already full.
    pub fn add_note_dislike(&mut self, note: NoteFamily) -> bool {
        let accepted = push_bounded(&mut self.note_dislikes, note, MAX_NOTE_DISLIKES);
        if accepted {
            self.note_likes.retain(|liked| *liked != note);
        }
        accepted
    }

    /// Dislike a note family while returning `self` for chaining.
    #[must_use]
    pub fn with_note_dislike(mut self, note: NoteFamily) -> Self {
        self.add_note_dislike(note);
        self
    }
}

fn push_bounded<T: PartialEq>(values: &mut Vec<T>, value: T, max: usize) -> bool {
    if values.contains(&value) {
        return true;
    }
    if values.len() >= max {
        return false;
    }
    values.push(value);
    true
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnswerSheet<'a> {
    moods: &'a [Mood],
    moments: &'a [Moment],
    times: &'a [TimeOfDay],
    intensity: &'a [Intensity],
    styles: &'a [Style],
    note_likes: &'a [NoteFamily],
    note_dislikes: &'a [NoteFamily],
}

impl Serialize for Preferences {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        AnswerSheet {
            moods: &self.moods,
            moments: &self.moments,
            times: self.time.as_slice(),
            intensity: self.intensity.as_slice(),
            styles: self.style.as_slice(),
            note_likes: &self.note_likes,
            note_dislikes: &self.note_dislikes,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Preferences {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(sanitize_answers(&raw))
    }
}
