//! Test-only fixtures: a small deterministic catalogue and a `Scorer` with
//! scripted results, used by unit, behaviour and property tests.

use std::collections::HashMap;

use crate::{Intensity, MatchScore, Perfume, Preferences, Scorer};

/// Ten perfumes spanning every mood, season and gender tag.
///
/// Identifiers run from 1 to 10 in catalogue order.
#[must_use]
pub fn sample_catalogue() -> Vec<Perfume> {
    vec![
        Perfume::new(1)
            .with_name_en("Citrus Dawn")
            .with_name_fa("سپیده مرکبات")
            .with_brand("Atelier Nur")
            .with_family("Citrus Aromatic")
            .with_character("fresh, clean")
            .with_season("warm")
            .with_gender("unisex")
            .with_notes(["Bergamot", "Lemon", "Neroli", "White Musk"]),
        Perfume::new(2)
            .with_name_en("Oud Nocturne")
            .with_brand("Maison Kavir")
            .with_family("Oriental Woody")
            .with_character("intense, warm")
            .with_season("cold")
            .with_gender("male")
            .with_notes([
                "Oud", "Saffron", "Amber", "Patchouli", "Leather", "Incense", "Cedar", "Vanilla",
                "Labdanum",
            ]),
        Perfume::new(3)
            .with_name_en("Rose Whisper")
            .with_brand("Atelier Nur")
            .with_family("Floral Powdery")
            .with_character("soft, romantic")
            .with_season("all seasons")
            .with_gender("female")
            .with_notes(["Rose", "Iris", "Violet", "Musk"]),
        Perfume::new(4)
            .with_name_en("Vanilla Cloud")
            .with_brand("Sucre Noir")
            .with_family("Gourmand")
            .with_character("sweet, creamy")
            .with_season("cool")
            .with_gender("female")
            .with_notes(["Vanilla", "Caramel", "Tonka Bean", "Praline", "Sandalwood"]),
        Perfume::new(5)
            .with_name_en("Vetiver Trail")
            .with_brand("Maison Kavir")
            .with_family("Woody Chypre")
            .with_character("earthy, classic")
            .with_season("all")
            .with_gender("male")
            .with_notes(["Vetiver", "Oakmoss", "Patchouli", "Cedar", "Pepper"]),
        Perfume::new(6)
            .with_name_en("Marine Drift")
            .with_brand("Blue Coast")
            .with_family("Aquatic")
            .with_character("marine, cool, energetic")
            .with_season("warm")
            .with_gender("male")
            .with_notes(["Sea Salt", "Grapefruit", "Mint", "Driftwood"]),
        Perfume::new(7)
            .with_name_en("Spice Route")
            .with_brand("Sucre Noir")
            .with_family("Spicy")
            .with_character("spicy, sensual")
            .with_season("cold")
            .with_gender("unisex")
            .with_notes(["Cinnamon", "Cardamom", "Clove", "Benzoin", "Tobacco", "Tonka"]),
        Perfume::new(8)
            .with_name_en("Green Atelier")
            .with_brand("Atelier Nur")
            .with_family("Green")
            .with_character("crisp, airy")
            .with_season("warm")
            .with_gender("unisex")
            .with_notes(["Galbanum", "Fig Leaf", "Green Tea", "Basil"]),
        Perfume::new(9)
            .with_name_en("Jasmine Evening")
            .with_brand("Blue Coast")
            .with_family("Floral")
            .with_character("sensual, elegant")
            .with_season("cool")
            .with_gender("female")
            .with_notes([
                "Jasmine",
                "Tuberose",
                "Ylang",
                "Amber",
                "Musk",
                "Vanilla",
                "Sandalwood",
            ]),
        Perfume::new(10)
            .with_name_en("Quiet Musk")
            .with_brand("Sucre Noir")
            .with_family("Musky")
            .with_character("smooth, balanced")
            .with_season("all seasons")
            .with_gender("unisex")
            .with_notes(["Musk", "Ambrette", "Cashmeran"]),
    ]
}

/// Test `Scorer` returning scripted percentages and scores by perfume id.
///
/// Unknown identifiers score zero.
#[derive(Debug, Clone, Default)]
pub struct FixedScorer {
    results: HashMap<u64, (u8, f32)>,
}

impl FixedScorer {
    /// Create a scorer with no scripted results.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the percentage and raw score for `id`.
    #[must_use]
    pub fn with_result(mut self, id: u64, match_percentage: u8, score: f32) -> Self {
        self.results.insert(id, (match_percentage, score));
        self
    }
}

impl Scorer for FixedScorer {
    fn score(&self, perfume: &Perfume, _preferences: &Preferences) -> Option<MatchScore> {
        let Some(&(match_percentage, score)) = self.results.get(&perfume.id) else {
            return Some(MatchScore::empty(Intensity::Medium));
        };
        Some(MatchScore {
            score,
            max_score: 100.0,
            match_percentage,
            ..MatchScore::empty(Intensity::Medium)
        })
    }
}
