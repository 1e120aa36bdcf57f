//! Proptest strategies for ranking property tests.
//!
//! Perfumes are assembled from small vocabularies of catalogue-style text so
//! that generated entries hit the keyword tables often enough to exercise
//! every scoring dimension.

use proptest::prelude::*;
use proptest::sample::{select, subsequence};
use scentmatch_core::{
    Intensity, Moment, Mood, NoteFamily, Perfume, Preferences, Style, TimeOfDay,
};

const FAMILIES: &[&str] = &[
    "Citrus Aromatic",
    "Oriental Woody",
    "Floral Powdery",
    "Gourmand",
    "Woody Chypre",
    "Aquatic",
    "Spicy",
    "Green",
    "Musky",
];

const CHARACTERS: &[&str] = &[
    "fresh, clean",
    "intense, warm",
    "soft, romantic",
    "sweet, creamy",
    "earthy, classic",
    "marine, cool, energetic",
    "spicy, sensual",
    "crisp, airy",
    "smooth, balanced",
];

const SEASONS: &[&str] = &["warm", "cold", "cool", "all seasons", "spring", "winter"];

const GENDERS: &[&str] = &["male", "female", "unisex"];

const NOTES: &[&str] = &[
    "Bergamot",
    "Lemon",
    "Oud",
    "Saffron",
    "Amber",
    "Patchouli",
    "Rose",
    "Iris",
    "Vanilla",
    "Tonka Bean",
    "Vetiver",
    "Cedar",
    "Sea Salt",
    "Cinnamon",
    "Galbanum",
    "Jasmine",
    "Musk",
    "Leather",
];

/// Strategy for a single perfume with a placeholder identifier.
fn perfume_strategy() -> impl Strategy<Value = Perfume> {
    (
        select(FAMILIES),
        select(CHARACTERS),
        select(SEASONS),
        select(GENDERS),
        subsequence(NOTES, 0..=10),
    )
        .prop_map(|(family, character, season, gender, notes)| {
            Perfume::new(0)
                .with_family(family)
                .with_character(character)
                .with_season(season)
                .with_gender(gender)
                .with_notes(notes)
        })
}

/// Strategy for a catalogue of `min_count..=max_count` perfumes with unique
/// identifiers assigned by position.
pub fn catalogue_strategy(
    min_count: usize,
    max_count: usize,
) -> impl Strategy<Value = Vec<Perfume>> {
    proptest::collection::vec(perfume_strategy(), min_count..=max_count).prop_map(|perfumes| {
        perfumes
            .into_iter()
            .zip(1_u64..)
            .map(|(perfume, id)| Perfume { id, ..perfume })
            .collect()
    })
}

/// Strategy for questionnaire answers, possibly empty.
pub fn preferences_strategy() -> impl Strategy<Value = Preferences> {
    (
        subsequence(Mood::ALL, 0..=2),
        subsequence(Moment::ALL, 0..=3),
        proptest::option::of(select(TimeOfDay::ALL)),
        proptest::option::of(select(Intensity::ALL)),
        proptest::option::of(select(Style::ALL)),
        subsequence(NoteFamily::ALL, 0..=3),
        subsequence(NoteFamily::ALL, 0..=3),
    )
        .prop_map(|(moods, moments, time, intensity, style, likes, dislikes)| {
            let mut preferences = Preferences::new();
            for mood in moods {
                preferences.add_mood(mood);
            }
            for moment in moments {
                preferences.add_moment(moment);
            }
            preferences.set_time(time);
            preferences.set_intensity(intensity);
            preferences.set_style(style);
            for note in likes {
                preferences.add_note_like(note);
            }
            for note in dislikes {
                if !preferences.note_likes().contains(&note) {
                    preferences.add_note_dislike(note);
                }
            }
            preferences
        })
}
