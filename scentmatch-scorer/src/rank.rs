//! Rank a catalogue with a [`Scorer`].

use std::cmp::Ordering;

use scentmatch_core::{Perfume, Preferences, RankedPerfume, Recommender, Scorer};

use crate::PreferenceScorer;

/// Score every perfume and keep the best `limit`.
///
/// Results are ordered by descending match percentage, then descending raw
/// score, then ascending perfume identifier, so the output never depends on
/// catalogue order. Perfumes the scorer excludes are dropped; zero scores are
/// kept. A `limit` of zero yields an empty list.
///
/// # Examples
/// ```
/// use scentmatch_core::{Mood, Perfume, Preferences};
/// use scentmatch_scorer::{PreferenceScorer, rank};
///
/// let catalog = [
///     Perfume::new(1).with_family("woody"),
///     Perfume::new(2).with_family("citrus").with_character("fresh"),
/// ];
/// let preferences = Preferences::new().with_mood(Mood::Fresh);
///
/// let ranked = rank(&PreferenceScorer::new(), &catalog, &preferences, 1);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked.first().map(|r| r.perfume.id), Some(2));
/// ```
#[must_use]
pub fn rank<S>(
    scorer: &S,
    catalog: &[Perfume],
    preferences: &Preferences,
    limit: usize,
) -> Vec<RankedPerfume>
where
    S: Scorer + ?Sized,
{
    if preferences.is_empty() {
        log::debug!("no preferences supplied; every perfume scores zero");
    }
    let mut ranked: Vec<RankedPerfume> = catalog
        .iter()
        .filter_map(|perfume| {
            scorer
                .score(perfume, preferences)
                .map(|evaluation| RankedPerfume {
                    perfume: perfume.clone(),
                    evaluation,
                })
        })
        .collect();
    let excluded = catalog.len().saturating_sub(ranked.len());
    ranked.sort_by(compare_ranked);
    ranked.truncate(limit);
    log::debug!(
        "ranked {} perfumes ({} excluded), returning {}",
        catalog.len(),
        excluded,
        ranked.len()
    );
    ranked
}

/// Rank with a default [`PreferenceScorer`].
#[must_use]
pub fn rank_perfumes(
    catalog: &[Perfume],
    preferences: &Preferences,
    limit: usize,
) -> Vec<RankedPerfume> {
    rank(&PreferenceScorer::new(), catalog, preferences, limit)
}

fn compare_ranked(left: &RankedPerfume, right: &RankedPerfume) -> Ordering {
    right
        .evaluation
        .match_percentage
        .cmp(&left.evaluation.match_percentage)
        .then_with(|| right.evaluation.score.total_cmp(&left.evaluation.score))
        .then_with(|| left.perfume.id.cmp(&right.perfume.id))
}

/// [`Recommender`] backed by a [`Scorer`].
///
/// # Examples
/// ```
/// use scentmatch_core::{DEFAULT_LIMIT, Perfume, Preferences, Recommender};
/// use scentmatch_scorer::CatalogRanker;
///
/// let catalog: Vec<Perfume> = (1..=10).map(Perfume::new).collect();
/// let ranked = CatalogRanker::with_defaults().recommend(&catalog, &Preferences::new(), DEFAULT_LIMIT);
/// assert_eq!(ranked.len(), DEFAULT_LIMIT);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogRanker<S = PreferenceScorer> {
    scorer: S,
}

impl<S: Scorer> CatalogRanker<S> {
    /// Wrap `scorer`.
    #[must_use]
    pub const fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// The scorer used for ranking.
    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }
}

impl CatalogRanker<PreferenceScorer> {
    /// Rank with a [`PreferenceScorer`] using the default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(PreferenceScorer::new())
    }
}

impl<S: Scorer> Recommender for CatalogRanker<S> {
    fn recommend(
        &self,
        catalog: &[Perfume],
        preferences: &Preferences,
        limit: usize,
    ) -> Vec<RankedPerfume> {
        rank(&self.scorer, catalog, preferences, limit)
    }
}
