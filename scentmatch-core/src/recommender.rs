//! Turn a catalogue into a ranked shortlist.

use crate::{Perfume, Preferences, RankedPerfume};

/// Number of results returned when the caller does not choose a limit.
pub const DEFAULT_LIMIT: usize = 6;

/// Produce an ordered shortlist of perfumes for a visitor.
///
/// Implementations must be pure and deterministic: identical inputs yield
/// identical output, regardless of catalogue order. At most `limit` results
/// are returned; a limit of zero yields an empty list.
/// Recommenders must be `Send + Sync` to serve concurrent sessions.
pub trait Recommender: Send + Sync {
    /// Rank `catalog` for `preferences`, keeping the best `limit` entries.
    fn recommend(
        &self,
        catalog: &[Perfume],
        preferences: &Preferences,
        limit: usize,
    ) -> Vec<RankedPerfume>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Intensity, MatchScore};
    use rstest::rstest;

    struct CatalogueOrder;

    impl Recommender for CatalogueOrder {
        fn recommend(
            &self,
            catalog: &[Perfume],
            _preferences: &Preferences,
            limit: usize,
        ) -> Vec<RankedPerfume> {
            catalog
                .iter()
                .take(limit)
                .cloned()
                .map(|perfume| RankedPerfume {
                    perfume,
                    evaluation: MatchScore::empty(Intensity::Medium),
                })
                .collect()
        }
    }

    #[rstest]
    #[case(0, 0)]
    #[case(2, 2)]
    #[case(DEFAULT_LIMIT, 3)]
    fn honours_limit(#[case] limit: usize, #[case] expected: usize) {
        let catalog = [Perfume::new(1), Perfume::new(2), Perfume::new(3)];
        let ranked = CatalogueOrder.recommend(&catalog, &Preferences::new(), limit);
        assert_eq!(ranked.len(), expected);
    }
}
