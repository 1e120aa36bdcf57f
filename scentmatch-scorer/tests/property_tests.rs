//! Property-based tests for preference scoring and ranking.
//!
//! # Invariants tested
//!
//! - **Bounded percentages:** every match percentage lies in `0..=100` and
//!   every score is finite.
//! - **No signal, no match:** empty answers score every perfume at zero.
//! - **Order independence:** shuffling the catalogue never changes the ranking.
//! - **Dislike monotonicity:** adding a disliked family never raises a match.
//! - **Limit and ordering:** results never exceed the limit and stay sorted by
//!   percentage, then score, then identifier.
//! - **Idempotence:** ranking the same input twice yields the same output.

mod proptest_support;

use proptest::prelude::*;
use scentmatch_core::test_support::{FixedScorer, sample_catalogue};
use scentmatch_core::{NoteFamily, Preferences, RankedPerfume, Scorer};
use scentmatch_scorer::{PreferenceScorer, rank, rank_perfumes};

use proptest_support::{catalogue_strategy, preferences_strategy};

fn is_ranked_order(results: &[RankedPerfume]) -> bool {
    results.windows(2).all(|pair| match pair {
        [first, second] => {
            let (a, b) = (&first.evaluation, &second.evaluation);
            let by_score = a.score.total_cmp(&b.score);
            a.match_percentage > b.match_percentage
                || (a.match_percentage == b.match_percentage
                    && (by_score.is_gt()
                        || (by_score.is_eq() && first.perfume.id < second.perfume.id)))
        }
        _ => true,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: percentages stay within bounds and scores stay finite.
    #[test]
    fn percentages_are_bounded(
        catalog in catalogue_strategy(1, 20),
        preferences in preferences_strategy(),
    ) {
        let scorer = PreferenceScorer::new();
        for perfume in &catalog {
            let Some(scored) = scorer.score(perfume, &preferences) else {
                continue;
            };
            prop_assert!(scored.match_percentage <= 100);
            prop_assert!(scored.score.is_finite());
            prop_assert!(scored.max_score.is_finite() && scored.max_score >= 0.0);
            prop_assert!((0.0..=1.0).contains(&scored.coverage));
        }
    }

    /// Property: with no answers every perfume scores zero without reasons.
    #[test]
    fn empty_preferences_score_zero(catalog in catalogue_strategy(0, 20)) {
        let ranked = rank_perfumes(&catalog, &Preferences::new(), catalog.len());
        prop_assert_eq!(ranked.len(), catalog.len());
        for item in &ranked {
            prop_assert_eq!(item.evaluation.match_percentage, 0);
            prop_assert!(item.evaluation.reasons.is_empty());
        }
    }

    /// Property: ranking does not depend on catalogue order.
    #[test]
    fn ranking_ignores_catalogue_order(
        (catalog, shuffled) in catalogue_strategy(1, 20)
            .prop_flat_map(|catalog| (Just(catalog.clone()), Just(catalog).prop_shuffle())),
        preferences in preferences_strategy(),
        limit in 0_usize..=25,
    ) {
        let original = rank_perfumes(&catalog, &preferences, limit);
        let reordered = rank_perfumes(&shuffled, &preferences, limit);
        prop_assert_eq!(original, reordered);
    }

    /// Property: an extra disliked family never raises a perfume's match.
    #[test]
    fn dislikes_never_raise_a_match(
        catalog in catalogue_strategy(1, 10),
        preferences in preferences_strategy(),
        extra in proptest::sample::select(NoteFamily::ALL),
    ) {
        prop_assume!(!preferences.note_likes().contains(&extra));
        let stricter = preferences.clone().with_note_dislike(extra);
        let scorer = PreferenceScorer::new();
        for perfume in &catalog {
            let (Some(before), Some(after)) = (
                scorer.score(perfume, &preferences),
                scorer.score(perfume, &stricter),
            ) else {
                continue;
            };
            prop_assert!(
                after.match_percentage <= before.match_percentage,
                "perfume {} rose from {} to {}",
                perfume.id,
                before.match_percentage,
                after.match_percentage
            );
        }
    }

    /// Property: results respect the limit and the documented ordering.
    #[test]
    fn results_respect_limit_and_order(
        catalog in catalogue_strategy(0, 30),
        preferences in preferences_strategy(),
        limit in 0_usize..=40,
    ) {
        let ranked = rank_perfumes(&catalog, &preferences, limit);
        prop_assert_eq!(ranked.len(), limit.min(catalog.len()));
        prop_assert!(is_ranked_order(&ranked));
    }

    /// Property: ranking the same input twice yields identical output.
    #[test]
    fn ranking_is_idempotent(
        catalog in catalogue_strategy(1, 20),
        preferences in preferences_strategy(),
    ) {
        let first = rank_perfumes(&catalog, &preferences, 6);
        let second = rank_perfumes(&catalog, &preferences, 6);
        prop_assert_eq!(first, second);
    }

    /// Property: equal percentages fall back to score, then identifier.
    #[test]
    fn ties_break_on_score_then_identifier(
        results in proptest::collection::vec((0_u8..=3, 0_u8..=3), 10),
    ) {
        let scorer = results
            .iter()
            .zip(1_u64..)
            .fold(FixedScorer::new(), |scorer, (&(bucket, points), id)| {
                scorer.with_result(id, bucket.saturating_mul(25), f32::from(points))
            });
        let ranked = rank(&scorer, &sample_catalogue(), &Preferences::new(), 10);
        prop_assert_eq!(ranked.len(), 10);
        prop_assert!(is_ranked_order(&ranked));
    }
}
