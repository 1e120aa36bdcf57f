//! Keyword tables and profiles used for fuzzy attribute matching.
//!
//! Every keyword is a lowercase fragment matched by substring against the
//! lowercased free text of a perfume. Profile note sets are composed from the
//! note family tables, so extending a family list extends every profile that
//! refers to it.

use scentmatch_core::{Intensity, Moment, Mood, NoteFamily, Style, TimeOfDay};

/// Descriptors that mark a perfume as strong.
pub const STRONG_KEYWORDS: &[&str] = &[
    "intense", "rich", "deep", "oud", "oriental", "amber", "noir", "night", "warm",
];

/// Descriptors that mark a perfume as light.
pub const LIGHT_KEYWORDS: &[&str] = &[
    "light", "soft", "fresh", "clean", "citrus", "airy", "green", "bright",
];

const CITRUS: &[&str] = &[
    "citrus",
    "lemon",
    "bergamot",
    "orange",
    "grapefruit",
    "mandarin",
    "lime",
    "yuzu",
];
const GREEN: &[&str] = &[
    "green", "grass", "leaf", "leaves", "fig", "galbanum", "tea", "basil", "mint",
];
const FLORAL: &[&str] = &[
    "rose",
    "jasmine",
    "floral",
    "lily",
    "iris",
    "violet",
    "tuberose",
    "peony",
    "orange blossom",
    "neroli",
    "magnolia",
    "ylang",
];
const SWEET: &[&str] = &[
    "vanilla",
    "caramel",
    "honey",
    "tonka",
    "praline",
    "sugar",
    "chocolate",
    "almond",
    "sweet",
];
const SPICY: &[&str] = &[
    "pepper", "cinnamon", "cardamom", "clove", "saffron", "ginger", "nutmeg", "spice", "spicy",
];
const ORIENTAL: &[&str] = &[
    "amber",
    "oud",
    "incense",
    "resin",
    "labdanum",
    "benzoin",
    "myrrh",
    "frankincense",
];
const WOODY: &[&str] = &[
    "wood",
    "cedar",
    "sandal",
    "vetiver",
    "patchouli",
    "oak",
    "guaiac",
    "cashmeran",
];
const MUSKY: &[&str] = &["musk", "ambrette", "powder", "aldehyde"];

/// Keyword fragments identifying a note family.
///
/// # Examples
/// ```
/// use scentmatch_core::NoteFamily;
/// use scentmatch_scorer::keywords::note_keywords;
///
/// assert!(note_keywords(NoteFamily::Woody).contains(&"patchouli"));
/// ```
#[must_use]
pub const fn note_keywords(family: NoteFamily) -> &'static [&'static str] {
    match family {
        NoteFamily::Citrus => CITRUS,
        NoteFamily::Green => GREEN,
        NoteFamily::Floral => FLORAL,
        NoteFamily::Sweet => SWEET,
        NoteFamily::Spicy => SPICY,
        NoteFamily::Oriental => ORIENTAL,
        NoteFamily::Woody => WOODY,
        NoteFamily::Musky => MUSKY,
    }
}

/// Coarse season bucket derived from a free-text season descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeasonBucket {
    /// Spring and summer wear.
    Warm,
    /// Winter wear.
    Cold,
    /// Autumn wear.
    Cool,
    /// Suitable year-round, or unspecified.
    All,
}

impl SeasonBucket {
    /// Bucket a season descriptor.
    ///
    /// "warm" takes precedence over "cold", which takes precedence over
    /// "cool"; anything else, including a missing descriptor, is `All`.
    #[must_use]
    pub fn from_descriptor(season: Option<&str>) -> Self {
        let text = season.map(str::to_lowercase).unwrap_or_default();
        if text.contains("warm") {
            Self::Warm
        } else if text.contains("cold") {
            Self::Cold
        } else if text.contains("cool") {
            Self::Cool
        } else {
            Self::All
        }
    }
}

/// Attributes that satisfy a mood.
#[derive(Debug)]
pub struct MoodProfile {
    /// Family keywords.
    pub families: &'static [&'static str],
    /// Character keywords.
    pub characters: &'static [&'static str],
    /// Note keyword sets.
    pub notes: &'static [&'static [&'static str]],
}

/// Attributes that satisfy a moment.
#[derive(Debug)]
pub struct MomentProfile {
    /// Qualifying season buckets.
    pub seasons: &'static [SeasonBucket],
    /// Qualifying derived intensities.
    pub intensities: &'static [Intensity],
    /// Character keywords.
    pub characters: &'static [&'static str],
    /// Note keyword sets; empty when notes earn no credit.
    pub notes: &'static [&'static [&'static str]],
}

/// Attributes that satisfy a time of day.
#[derive(Debug)]
pub struct TimeProfile {
    /// Character keywords.
    pub characters: &'static [&'static str],
    /// Qualifying derived intensities; empty when intensity earns no credit.
    pub intensities: &'static [Intensity],
}

const FRESH_MOOD: MoodProfile = MoodProfile {
    families: &["fresh", "citrus", "aquatic", "green", "aromatic"],
    characters: &["fresh", "cool", "clean", "energetic", "marine", "crisp"],
    notes: &[CITRUS, GREEN],
};
const SWEET_MOOD: MoodProfile = MoodProfile {
    families: &["gourmand", "sweet", "oriental"],
    characters: &["sweet", "gourmand", "creamy", "dessert"],
    notes: &[SWEET],
};
const WARM_MOOD: MoodProfile = MoodProfile {
    families: &["spicy", "oriental", "amber"],
    characters: &["warm", "spicy", "amber", "sensual"],
    notes: &[SPICY, ORIENTAL],
};
const FLORAL_MOOD: MoodProfile = MoodProfile {
    families: &["floral", "powdery"],
    characters: &["floral", "soft", "romantic", "powdery"],
    notes: &[FLORAL, MUSKY],
};
const WOODY_MOOD: MoodProfile = MoodProfile {
    families: &["woody", "chypre", "mossy"],
    characters: &["wood", "earthy", "classic", "smoky"],
    notes: &[WOODY, &["patchouli", "leather"]],
};

/// Profile for a mood.
#[must_use]
pub const fn mood_profile(mood: Mood) -> &'static MoodProfile {
    match mood {
        Mood::Fresh => &FRESH_MOOD,
        Mood::Sweet => &SWEET_MOOD,
        Mood::Warm => &WARM_MOOD,
        Mood::Floral => &FLORAL_MOOD,
        Mood::Woody => &WOODY_MOOD,
    }
}

const LIGHT_OR_MEDIUM: &[Intensity] = &[Intensity::Light, Intensity::Medium];
const MEDIUM_OR_STRONG: &[Intensity] = &[Intensity::Medium, Intensity::Strong];

const DAILY_MOMENT: MomentProfile = MomentProfile {
    seasons: &[SeasonBucket::All, SeasonBucket::Cool, SeasonBucket::Warm],
    intensities: LIGHT_OR_MEDIUM,
    characters: &["fresh", "clean", "soft", "balanced"],
    notes: &[],
};
const EVENING_MOMENT: MomentProfile = MomentProfile {
    seasons: &[SeasonBucket::Cool, SeasonBucket::Cold],
    intensities: MEDIUM_OR_STRONG,
    characters: &["warm", "sweet", "intense", "sensual"],
    notes: &[],
};
const OUTDOOR_MOMENT: MomentProfile = MomentProfile {
    seasons: &[SeasonBucket::Warm, SeasonBucket::All],
    intensities: LIGHT_OR_MEDIUM,
    characters: &["fresh", "green", "citrus", "airy"],
    notes: &[CITRUS, GREEN],
};
const GIFT_MOMENT: MomentProfile = MomentProfile {
    seasons: &[SeasonBucket::All],
    intensities: LIGHT_OR_MEDIUM,
    characters: &["soft", "smooth", "elegant"],
    notes: &[FLORAL, SWEET],
};

/// Profile for a moment.
#[must_use]
pub const fn moment_profile(moment: Moment) -> &'static MomentProfile {
    match moment {
        Moment::Daily => &DAILY_MOMENT,
        Moment::Evening => &EVENING_MOMENT,
        Moment::Outdoor => &OUTDOOR_MOMENT,
        Moment::Gift => &GIFT_MOMENT,
    }
}

const DAY_TIME: TimeProfile = TimeProfile {
    characters: &["fresh", "clean", "bright", "light"],
    intensities: LIGHT_OR_MEDIUM,
};
const NIGHT_TIME: TimeProfile = TimeProfile {
    characters: &["warm", "intense", "sensual", "deep"],
    intensities: MEDIUM_OR_STRONG,
};
const ANYTIME_TIME: TimeProfile = TimeProfile {
    characters: &["versatile", "balanced"],
    intensities: &[],
};

/// Profile for a time of day.
#[must_use]
pub const fn time_profile(time: TimeOfDay) -> &'static TimeProfile {
    match time {
        TimeOfDay::Day => &DAY_TIME,
        TimeOfDay::Night => &NIGHT_TIME,
        TimeOfDay::Anytime => &ANYTIME_TIME,
    }
}

/// Gender tags accepted for a style.
#[must_use]
pub const fn style_genders(style: Style) -> &'static [&'static str] {
    match style {
        Style::Feminine => &["female"],
        Style::Masculine => &["male"],
        Style::Unisex => &["unisex"],
        Style::Any => &["female", "male", "unisex"],
    }
}

/// Report whether `text` contains any of `keywords`.
#[must_use]
pub fn includes_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Report whether any note contains a keyword from any of `keyword_sets`.
#[must_use]
pub fn notes_match(notes: &[String], keyword_sets: &[&[&str]]) -> bool {
    keyword_sets
        .iter()
        .any(|keywords| count_keyword_hits(notes, keywords) > 0)
}

/// Count the keywords found in at least one note.
///
/// Each keyword counts once however many notes contain it.
#[must_use]
pub fn count_keyword_hits(notes: &[String], keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|keyword| notes.iter().any(|note| note.contains(*keyword)))
        .count()
}
