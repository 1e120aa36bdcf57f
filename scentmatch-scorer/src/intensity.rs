//! Derive a perfume's projection strength from its descriptors.

use scentmatch_core::{Intensity, Perfume};

use crate::keywords::{LIGHT_KEYWORDS, STRONG_KEYWORDS, includes_any};

/// Note count at or above which an undescribed perfume is strong.
pub const STRONG_NOTE_COUNT: usize = 9;
/// Note count at or below which an undescribed perfume is light.
pub const LIGHT_NOTE_COUNT: usize = 4;

/// Classify a perfume as light, medium or strong.
///
/// Character and family text are checked for strong keywords first, then
/// light keywords. Without a keyword match the note count decides.
///
/// # Examples
/// ```
/// use scentmatch_core::{Intensity, Perfume};
/// use scentmatch_scorer::classify_intensity;
///
/// let oud = Perfume::new(1).with_family("Oriental").with_character("fresh");
/// assert_eq!(classify_intensity(&oud), Intensity::Strong);
///
/// let bare = Perfume::new(2).with_notes(["a", "b", "c", "d", "e"]);
/// assert_eq!(classify_intensity(&bare), Intensity::Medium);
/// ```
#[must_use]
pub fn classify_intensity(perfume: &Perfume) -> Intensity {
    let descriptor = format!(
        "{} {}",
        perfume.character.as_deref().unwrap_or_default(),
        perfume.family.as_deref().unwrap_or_default()
    )
    .to_lowercase();
    if includes_any(&descriptor, STRONG_KEYWORDS) {
        return Intensity::Strong;
    }
    if includes_any(&descriptor, LIGHT_KEYWORDS) {
        return Intensity::Light;
    }
    match perfume.all_notes.len() {
        count if count >= STRONG_NOTE_COUNT => Intensity::Strong,
        count if count <= LIGHT_NOTE_COUNT => Intensity::Light,
        _ => Intensity::Medium,
    }
}
