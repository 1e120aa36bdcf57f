//! Per-dimension achievement ratios.
//!
//! Each function scores one requested value against a [`Candidate`] and
//! returns a ratio in `0.0..=1.0`. Partial credit is deliberate: a perfume
//! that satisfies some signals of a profile still earns part of the weight.

use scentmatch_core::{Intensity, Moment, Mood, NoteFamily, Perfume, Style, TimeOfDay};

use crate::classify_intensity;
use crate::keywords::{
    SeasonBucket, count_keyword_hits, includes_any, moment_profile, mood_profile, note_keywords,
    notes_match, style_genders, time_profile,
};

/// A perfume prepared for matching: lowercased text and derived intensity.
#[derive(Debug, Clone)]
pub struct Candidate {
    family: String,
    character: String,
    gender: String,
    season: SeasonBucket,
    notes: Vec<String>,
    intensity: Intensity,
}

impl Candidate {
    /// Prepare `perfume` for matching.
    #[must_use]
    pub fn new(perfume: &Perfume) -> Self {
        Self {
            family: lowercase(perfume.family.as_deref()),
            character: lowercase(perfume.character.as_deref()),
            gender: lowercase(perfume.gender.as_deref()),
            season: SeasonBucket::from_descriptor(perfume.season.as_deref()),
            notes: perfume.lowercase_notes(),
            intensity: classify_intensity(perfume),
        }
    }

    /// Derived intensity of the perfume.
    #[must_use]
    pub const fn intensity(&self) -> Intensity {
        self.intensity
    }
}

fn lowercase(value: Option<&str>) -> String {
    value.map(str::to_lowercase).unwrap_or_default()
}

/// Average ratio across several requested values, with the strongest one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiMatch<T> {
    /// Mean ratio across every requested value.
    pub average: f32,
    /// First value reaching the highest positive ratio, with that ratio.
    pub strongest: Option<(T, f32)>,
}

/// Score each value and combine the ratios into a [`MultiMatch`].
///
/// Averaging rewards perfumes that partly satisfy every requested value over
/// ones that perfectly satisfy a single value. An empty slice averages to
/// zero.
#[expect(
    clippy::float_arithmetic,
    reason = "averaging ratios requires a sum and a division"
)]
pub fn score_many<T, F>(values: &[T], ratio: F) -> MultiMatch<T>
where
    T: Copy,
    F: Fn(T) -> f32,
{
    let mut total = 0.0_f32;
    let mut strongest: Option<(T, f32)> = None;
    for &value in values {
        let current = ratio(value);
        total += current;
        let best = strongest.map_or(0.0_f32, |(_, best)| best);
        if current > best {
            strongest = Some((value, current));
        }
    }
    let average = if values.is_empty() {
        0.0_f32
    } else {
        total / count_as_f32(values.len())
    };
    MultiMatch { average, strongest }
}

/// Convert a small count to `f32`, saturating at `u16::MAX`.
pub(crate) fn count_as_f32(count: usize) -> f32 {
    f32::from(u16::try_from(count).unwrap_or(u16::MAX))
}

/// Mood ratio: 0.4 family, 0.4 character and 0.2 notes.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "partial credits are summed")]
pub fn mood_ratio(candidate: &Candidate, mood: Mood) -> f32 {
    let profile = mood_profile(mood);
    let mut ratio = 0.0_f32;
    if includes_any(&candidate.family, profile.families) {
        ratio += 0.4_f32;
    }
    if includes_any(&candidate.character, profile.characters) {
        ratio += 0.4_f32;
    }
    if notes_match(&candidate.notes, profile.notes) {
        ratio += 0.2_f32;
    }
    ratio
}

/// Moment ratio: 0.4 season, 0.3 intensity, 0.2 character and 0.1 notes.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "partial credits are summed")]
pub fn moment_ratio(candidate: &Candidate, moment: Moment) -> f32 {
    let profile = moment_profile(moment);
    let mut ratio = 0.0_f32;
    if profile.seasons.contains(&candidate.season) {
        ratio += 0.4_f32;
    }
    if profile.intensities.contains(&candidate.intensity) {
        ratio += 0.3_f32;
    }
    if includes_any(&candidate.character, profile.characters) {
        ratio += 0.2_f32;
    }
    if notes_match(&candidate.notes, profile.notes) {
        ratio += 0.1_f32;
    }
    ratio
}

/// Time-of-day ratio: 0.6 character and 0.4 intensity.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "partial credits are summed")]
pub fn time_ratio(candidate: &Candidate, time: TimeOfDay) -> f32 {
    let profile = time_profile(time);
    let mut ratio = 0.0_f32;
    if includes_any(&candidate.character, profile.characters) {
        ratio += 0.6_f32;
    }
    if profile.intensities.contains(&candidate.intensity) {
        ratio += 0.4_f32;
    }
    ratio
}

/// Intensity ratio: 1.0 on an exact match, 0.6 when either side is medium,
/// otherwise 0.2.
#[must_use]
pub const fn intensity_ratio(actual: Intensity, wanted: Intensity) -> f32 {
    match (actual, wanted) {
        (Intensity::Light, Intensity::Light)
        | (Intensity::Medium, Intensity::Medium)
        | (Intensity::Strong, Intensity::Strong) => 1.0_f32,
        (Intensity::Medium, _) | (_, Intensity::Medium) => 0.6_f32,
        _ => 0.2_f32,
    }
}

/// Style ratio: 1.0 when the gender tag is accepted, otherwise 0.3.
///
/// The tag must equal an accepted tag after lowercasing; a missing tag never
/// matches.
#[must_use]
pub fn style_ratio(candidate: &Candidate, style: Style) -> f32 {
    if style_genders(style).contains(&candidate.gender.as_str()) {
        1.0_f32
    } else {
        0.3_f32
    }
}

/// Overlap between liked note families and a perfume's notes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteMatch {
    /// Matched families divided by requested families.
    pub ratio: f32,
    /// Matched family with the most keyword hits, first wins ties.
    pub best: Option<NoteFamily>,
}

/// Score liked note families against the notes.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the ratio divides matched by requested families"
)]
pub fn note_preference(candidate: &Candidate, likes: &[NoteFamily]) -> NoteMatch {
    if likes.is_empty() {
        return NoteMatch {
            ratio: 0.0_f32,
            best: None,
        };
    }
    let mut matched = 0_usize;
    let mut best: Option<(NoteFamily, usize)> = None;
    for &family in likes {
        let hits = count_keyword_hits(&candidate.notes, note_keywords(family));
        if hits == 0 {
            continue;
        }
        matched = matched.saturating_add(1);
        if best.is_none_or(|(_, best_hits)| hits > best_hits) {
            best = Some((family, hits));
        }
    }
    NoteMatch {
        ratio: count_as_f32(matched) / count_as_f32(likes.len()),
        best: best.map(|(family, _)| family),
    }
}

/// Disliked keywords present in a perfume's notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DislikeMatch {
    /// Total keyword hits across every disliked family.
    pub hits: usize,
    /// First disliked family with at least one hit.
    pub first: Option<NoteFamily>,
}

/// Count disliked keyword hits in the notes.
#[must_use]
pub fn dislike_hits(candidate: &Candidate, dislikes: &[NoteFamily]) -> DislikeMatch {
    dislikes
        .iter()
        .fold(DislikeMatch::default(), |mut found, &family| {
            let hits = count_keyword_hits(&candidate.notes, note_keywords(family));
            if hits > 0 && found.first.is_none() {
                found.first = Some(family);
            }
            found.hits = found.hits.saturating_add(hits);
            found
        })
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floats within a tolerance"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE: f32 = 1e-6;

    fn citrus_fresh() -> Perfume {
        Perfume::new(1)
            .with_family("citrus")
            .with_character("fresh, clean")
            .with_notes(["bergamot", "lemon"])
    }

    #[rstest]
    fn candidate_matches_descriptors_case_insensitively() {
        let perfume = Perfume::new(3)
            .with_family("CITRUS")
            .with_character("Fresh")
            .with_gender("UniSex")
            .with_notes(["Bergamot"]);
        let candidate = Candidate::new(&perfume);
        assert_eq!(candidate.intensity(), Intensity::Light);
        assert!((style_ratio(&candidate, Style::Unisex) - 1.0).abs() <= TOLERANCE);
        assert!((mood_ratio(&candidate, Mood::Fresh) - 1.0).abs() <= TOLERANCE);
    }

    #[rstest]
    fn fresh_mood_earns_every_credit() {
        let perfume = citrus_fresh();
        let candidate = Candidate::new(&perfume);
        assert!((mood_ratio(&candidate, Mood::Fresh) - 1.0).abs() <= TOLERANCE);
        assert!(mood_ratio(&candidate, Mood::Sweet).abs() <= TOLERANCE);
    }

    #[rstest]
    fn averaging_rewards_partial_matches() {
        let perfume = citrus_fresh();
        let candidate = Candidate::new(&perfume);
        let result = score_many(&[Mood::Sweet, Mood::Fresh], |mood| {
            mood_ratio(&candidate, mood)
        });
        assert!((result.average - 0.5).abs() <= TOLERANCE);
        assert_eq!(result.strongest.map(|(mood, _)| mood), Some(Mood::Fresh));
    }

    #[rstest]
    fn strongest_is_none_when_nothing_matches() {
        let result = score_many(&[Mood::Woody], |_| 0.0);
        assert!(result.strongest.is_none());
        let empty = score_many::<Mood, _>(&[], |_| 1.0);
        assert!(empty.average.abs() <= TOLERANCE);
    }

    #[rstest]
    fn moment_combines_season_intensity_character_and_notes() {
        let perfume = citrus_fresh().with_season("warm");
        let candidate = Candidate::new(&perfume);
        // Light intensity, warm season, fresh character, citrus notes.
        assert!((moment_ratio(&candidate, Moment::Outdoor) - 1.0).abs() <= TOLERANCE);
        // Gift only accepts year-round perfumes and has no matching character.
        assert!((moment_ratio(&candidate, Moment::Gift) - 0.3).abs() <= TOLERANCE);
    }

    #[rstest]
    fn anytime_ignores_intensity() {
        let perfume = Perfume::new(2).with_character("Balanced");
        let candidate = Candidate::new(&perfume);
        assert!((time_ratio(&candidate, TimeOfDay::Anytime) - 0.6).abs() <= TOLERANCE);
        assert!((time_ratio(&candidate, TimeOfDay::Day) - 0.4).abs() <= TOLERANCE);
    }

    #[rstest]
    #[case(Intensity::Light, Intensity::Light, 1.0)]
    #[case(Intensity::Strong, Intensity::Medium, 0.6)]
    #[case(Intensity::Medium, Intensity::Light, 0.6)]
    #[case(Intensity::Light, Intensity::Strong, 0.2)]
    fn intensity_adjacency(
        #[case] actual: Intensity,
        #[case] wanted: Intensity,
        #[case] expected: f32,
    ) {
        assert!((intensity_ratio(actual, wanted) - expected).abs() <= TOLERANCE);
    }

    #[rstest]
    #[case(Some("Female"), Style::Feminine, 1.0)]
    #[case(Some("male"), Style::Feminine, 0.3)]
    #[case(Some("unisex"), Style::Any, 1.0)]
    #[case(None, Style::Any, 0.3)]
    fn style_matches_gender_tags(
        #[case] gender: Option<&str>,
        #[case] style: Style,
        #[case] expected: f32,
    ) {
        let perfume = Perfume {
            gender: gender.map(str::to_owned),
            ..Perfume::new(3)
        };
        let candidate = Candidate::new(&perfume);
        assert!((style_ratio(&candidate, style) - expected).abs() <= TOLERANCE);
    }

    #[rstest]
    fn note_preference_picks_family_with_most_hits() {
        let perfume = Perfume::new(4).with_notes(["Rose", "Jasmine", "Lemon"]);
        let candidate = Candidate::new(&perfume);
        let result = note_preference(
            &candidate,
            &[NoteFamily::Citrus, NoteFamily::Floral, NoteFamily::Woody],
        );
        assert!((result.ratio - 2.0 / 3.0).abs() <= TOLERANCE);
        assert_eq!(result.best, Some(NoteFamily::Floral));
    }

    #[rstest]
    fn dislikes_sum_hits_and_remember_first_family() {
        let perfume = Perfume::new(5).with_notes(["Patchouli", "Cedarwood", "Pink Pepper"]);
        let candidate = Candidate::new(&perfume);
        let found = dislike_hits(
            &candidate,
            &[NoteFamily::Citrus, NoteFamily::Woody, NoteFamily::Spicy],
        );
        // "wood", "cedar" and "patchouli" plus "pepper".
        assert_eq!(found.hits, 4);
        assert_eq!(found.first, Some(NoteFamily::Woody));
    }
}
