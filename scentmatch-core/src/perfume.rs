//! Candidate perfumes supplied by the catalogue provider.

use serde::{Deserialize, Serialize};

/// A perfume that may be recommended.
///
/// Categorical attributes are free text maintained by the catalogue editors.
/// Any of them may be missing; scorers treat an absent attribute as giving no
/// credit for the signal it would have carried.
///
/// # Examples
/// ```
/// use scentmatch_core::Perfume;
///
/// let perfume = Perfume::new(7)
///     .with_name_en("Neroli Breeze")
///     .with_family("Citrus")
///     .with_notes(["Bergamot", "Lemon"]);
///
/// assert_eq!(perfume.display_name(), Some("Neroli Breeze"));
/// assert_eq!(perfume.lowercase_notes(), vec!["bergamot", "lemon"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perfume {
    /// Catalogue identifier.
    pub id: u64,
    /// English display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    /// Persian display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_fa: Option<String>,
    /// Brand name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Collection within the brand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    /// Olfactory family, e.g. "citrus aromatic".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Character descriptor, e.g. "fresh, clean".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    /// Season descriptor, e.g. "warm" or "all seasons".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    /// Target gender tag: "female", "male" or "unisex".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Flattened top, heart and base notes.
    #[serde(default)]
    pub all_notes: Vec<String>,
    /// Imagery reference for presentation; never scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Perfume {
    /// Construct a perfume with only an identifier.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Set the English name while returning `self` for chaining.
    #[must_use]
    pub fn with_name_en(mut self, name: impl Into<String>) -> Self {
        self.name_en = Some(name.into());
        self
    }

    /// Set the Persian name while returning `self` for chaining.
    #[must_use]
    pub fn with_name_fa(mut self, name: impl Into<String>) -> Self {
        self.name_fa = Some(name.into());
        self
    }

    /// Set the brand while returning `self` for chaining.
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Set the family while returning `self` for chaining.
    #[must_use]
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    /// Set the character descriptor while returning `self` for chaining.
    #[must_use]
    pub fn with_character(mut self, character: impl Into<String>) -> Self {
        self.character = Some(character.into());
        self
    }

    /// Set the season descriptor while returning `self` for chaining.
    #[must_use]
    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = Some(season.into());
        self
    }

    /// Set the gender tag while returning `self` for chaining.
    #[must_use]
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Replace the notes while returning `self` for chaining.
    #[must_use]
    pub fn with_notes<I, S>(mut self, notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.all_notes = notes.into_iter().map(Into::into).collect();
        self
    }

    /// Name to show the visitor: the Persian name when present and not blank,
    /// otherwise the English name.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        non_blank(self.name_fa.as_deref()).or_else(|| non_blank(self.name_en.as_deref()))
    }

    /// Notes lowercased for keyword matching, in catalogue order.
    #[must_use]
    pub fn lowercase_notes(&self) -> Vec<String> {
        self.all_notes.iter().map(|note| note.to_lowercase()).collect()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}
