//! Closed option sets offered by the questionnaire.
//!
//! Each enum mirrors one question's answer options. Values render as the
//! lowercase identifiers used on the wire and parse case-insensitively.
//!
//! # Examples
//! ```
//! use scentmatch_core::{Mood, NoteFamily};
//!
//! assert_eq!(Mood::Fresh.as_str(), "fresh");
//! assert_eq!("Woody".parse::<NoteFamily>(), Ok(NoteFamily::Woody));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not name a known option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseChoiceError {
    /// Name of the option set that rejected the value.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $( $(#[$variant_meta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $( $(#[$variant_meta])* $variant ),+
        }

        impl $name {
            /// Every option, in the order the questionnaire presents them.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Return the option as its lowercase wire identifier.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseChoiceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.as_str().eq_ignore_ascii_case(needle))
                    .ok_or_else(|| ParseChoiceError {
                        kind: $kind,
                        value: s.to_owned(),
                    })
            }
        }
    };
}

choice_enum! {
    /// Overall character the visitor is in the mood for.
    Mood ("mood") {
        /// Fresh, clean and energetic.
        Fresh => "fresh",
        /// Gourmand and dessert-like.
        Sweet => "sweet",
        /// Spicy, amber and sensual.
        Warm => "warm",
        /// Soft, romantic florals.
        Floral => "floral",
        /// Earthy woods and chypres.
        Woody => "woody",
    }
}

choice_enum! {
    /// Occasion the perfume is meant for.
    Moment ("moment") {
        /// Everyday wear.
        Daily => "daily",
        /// Evenings out.
        Evening => "evening",
        /// Outdoor activities.
        Outdoor => "outdoor",
        /// A present for someone else.
        Gift => "gift",
    }
}

choice_enum! {
    /// Preferred time of day.
    TimeOfDay ("time of day") {
        /// Daytime wear.
        Day => "day",
        /// Night-time wear.
        Night => "night",
        /// No particular time.
        Anytime => "anytime",
    }
}

choice_enum! {
    /// Projection strength, both requested and derived from a perfume.
    Intensity ("intensity") {
        /// Subtle, close to the skin.
        Light => "light",
        /// Moderate projection.
        Medium => "medium",
        /// Rich, long-lasting projection.
        Strong => "strong",
    }
}

choice_enum! {
    /// Target style of the perfume.
    Style ("style") {
        /// Marketed for women.
        Feminine => "feminine",
        /// Marketed for men.
        Masculine => "masculine",
        /// Marketed for everyone.
        Unisex => "unisex",
        /// No preference.
        Any => "any",
    }
}

choice_enum! {
    /// Coarse family of scent notes used for likes and dislikes.
    NoteFamily ("note family") {
        /// Lemon, bergamot and other citrus.
        Citrus => "citrus",
        /// Leaves, grass and herbs.
        Green => "green",
        /// Rose, jasmine and other flowers.
        Floral => "floral",
        /// Vanilla, caramel and other gourmand notes.
        Sweet => "sweet",
        /// Pepper, cinnamon and other spices.
        Spicy => "spicy",
        /// Amber, oud and resins.
        Oriental => "oriental",
        /// Cedar, sandalwood and other woods.
        Woody => "woody",
        /// Musks and powdery notes.
        Musky => "musky",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("fresh", Mood::Fresh)]
    #[case("  WOODY ", Mood::Woody)]
    #[case("Floral", Mood::Floral)]
    fn mood_parses_case_insensitively(#[case] input: &str, #[case] expected: Mood) {
        assert_eq!(input.parse::<Mood>(), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = "sci-fi".parse::<Moment>().expect_err("unknown moment");
        assert_eq!(err.kind, "moment");
        assert!(err.to_string().contains("unknown moment 'sci-fi'"));
    }

    #[rstest]
    fn display_matches_as_str() {
        for option in NoteFamily::ALL {
            assert_eq!(option.to_string(), option.as_str());
        }
    }

    #[rstest]
    fn serde_uses_wire_identifiers() {
        let json = serde_json::to_string(&TimeOfDay::Anytime).expect("serialise");
        assert_eq!(json, "\"anytime\"");
        let parsed: Style = serde_json::from_str("\"unisex\"").expect("deserialise");
        assert_eq!(parsed, Style::Unisex);
    }
}
