//! Unit coverage for preference scoring and ranking.
#![forbid(unsafe_code)]
#![expect(
    clippy::float_arithmetic,
    reason = "assertions compare floats within a tolerance"
)]

use rstest::{fixture, rstest};
use scentmatch_core::test_support::{FixedScorer, sample_catalogue};
use scentmatch_core::{
    Dimension, Intensity, MatchScore, Moment, Mood, NoteFamily, Perfume, Preferences, ReasonCode,
    Recommender, Scorer, Style, TimeOfDay, Tone,
};

use crate::{
    CatalogRanker, DislikePolicy, PreferenceScorer, ScoringConfig, ScoringConfigError, rank,
    rank_perfumes,
};

const TOLERANCE: f32 = 1e-4;

#[fixture]
fn fresh_citrus() -> Perfume {
    Perfume::new(1)
        .with_family("citrus")
        .with_character("fresh, clean")
        .with_season("warm")
        .with_gender("unisex")
        .with_notes(["bergamot", "lemon"])
}

fn evaluate(scorer: &PreferenceScorer, perfume: &Perfume, preferences: &Preferences) -> MatchScore {
    scorer
        .score(perfume, preferences)
        .expect("penalising scorer keeps every perfume")
}

#[rstest]
fn fresh_mood_earns_full_mood_credit(fresh_citrus: Perfume) {
    let preferences = Preferences::new().with_mood(Mood::Fresh);
    let components = PreferenceScorer::new().components(&fresh_citrus, &preferences);

    let mood = components.first().expect("mood component");
    assert_eq!(mood.dimension, Dimension::Mood);
    assert!((mood.achieved - 1.0).abs() <= TOLERANCE);
    let reason = mood.reason.as_ref().expect("mood reason");
    assert_eq!(reason.code, ReasonCode::Mood);
    assert_eq!(reason.value.as_deref(), Some("fresh"));

    let scored = evaluate(&PreferenceScorer::new(), &fresh_citrus, &preferences);
    assert_eq!(scored.match_percentage, 100);
    assert!(scored.has_reason(ReasonCode::Mood));
}

#[rstest]
fn disliked_woody_note_applies_penalty(fresh_citrus: Perfume) {
    let perfume = fresh_citrus.with_notes(["bergamot", "patchouli"]);
    let liked = Preferences::new().with_mood(Mood::Fresh);
    let disliked = liked.clone().with_note_dislike(NoteFamily::Woody);
    let scorer = PreferenceScorer::new();

    let without = evaluate(&scorer, &perfume, &liked);
    let with = evaluate(&scorer, &perfume, &disliked);

    assert!(with.match_percentage < without.match_percentage);
    let warning = with
        .reasons
        .iter()
        .find(|reason| reason.code == ReasonCode::DislikePenalty)
        .expect("dislike warning");
    assert_eq!(warning.tone, Tone::Warning);
    assert_eq!(warning.value.as_deref(), Some("woody"));
    // One hit out of a saturation of three deducts a third of the weight.
    assert!((with.score - (28.0 - 14.0 / 3.0)).abs() <= TOLERANCE);
}

#[rstest]
fn empty_preferences_rank_by_identifier() {
    let mut catalog = sample_catalogue();
    catalog.reverse();

    let ranked = rank_perfumes(&catalog, &Preferences::new(), 6);

    let ids: Vec<u64> = ranked.iter().map(|item| item.perfume.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    for item in &ranked {
        assert_eq!(item.evaluation.match_percentage, 0);
        assert!(item.evaluation.reasons.is_empty());
        assert!(item.evaluation.coverage.abs() <= TOLERANCE);
    }
}

#[rstest]
fn broad_core_match_earns_synergy(fresh_citrus: Perfume) {
    let preferences = Preferences::new()
        .with_mood(Mood::Fresh)
        .with_moment(Moment::Outdoor)
        .with_time(TimeOfDay::Day)
        .with_style(Style::Unisex);

    let scored = evaluate(&PreferenceScorer::new(), &fresh_citrus, &preferences);

    assert!(scored.has_reason(ReasonCode::Synergy));
    assert!((scored.max_score - 72.0).abs() <= TOLERANCE);
    assert!((scored.coverage - 1.0).abs() <= TOLERANCE);
    assert_eq!(scored.match_percentage, 100);
}

#[rstest]
fn limit_keeps_best_sorted_by_percentage_then_score() {
    let scorer = FixedScorer::new()
        .with_result(1, 40, 10.0)
        .with_result(2, 80, 20.0)
        .with_result(3, 80, 25.0)
        .with_result(4, 80, 25.0)
        .with_result(5, 90, 1.0)
        .with_result(6, 10, 90.0);
    let catalog = sample_catalogue();

    let ranked = rank(&scorer, &catalog, &Preferences::new(), 3);

    let ids: Vec<u64> = ranked.iter().map(|item| item.perfume.id).collect();
    assert_eq!(ids, vec![5, 3, 4]);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(10)]
#[case(25)]
fn limit_bounds_result_count(#[case] limit: usize) {
    let catalog = sample_catalogue();
    let ranked = rank_perfumes(&catalog, &Preferences::new().with_mood(Mood::Woody), limit);
    assert_eq!(ranked.len(), limit.min(catalog.len()));
}

#[rstest]
#[case(Style::Unisex, 1.0)]
#[case(Style::Feminine, 0.3)]
fn changing_one_weight_changes_only_its_contribution(
    fresh_citrus: Perfume,
    #[case] style: Style,
    #[case] achieved: f32,
) {
    let preferences = Preferences::new().with_mood(Mood::Fresh).with_style(style);
    let mut config = ScoringConfig::default();
    config.weights.style = 20.0;
    let heavier = PreferenceScorer::with_config(config).expect("valid config");

    let base = evaluate(&PreferenceScorer::new(), &fresh_citrus, &preferences);
    let changed = evaluate(&heavier, &fresh_citrus, &preferences);

    assert!((changed.max_score - base.max_score - 12.0).abs() <= TOLERANCE);
    assert!((changed.score - base.score - 12.0 * achieved).abs() <= TOLERANCE);
    assert_eq!(changed.reasons, base.reasons);
    assert!((changed.coverage - base.coverage).abs() <= TOLERANCE);
}

#[rstest]
fn exclusion_policy_drops_perfumes_with_disliked_notes() {
    let config = ScoringConfig::default().with_dislike_policy(DislikePolicy::Exclude);
    let ranker = CatalogRanker::new(PreferenceScorer::with_config(config).expect("valid config"));
    let preferences = Preferences::new()
        .with_mood(Mood::Fresh)
        .with_note_dislike(NoteFamily::Woody);

    let ranked = ranker.recommend(&sample_catalogue(), &preferences, 10);

    let mut ids: Vec<u64> = ranked.iter().map(|item| item.perfume.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 3, 7, 8]);
}

#[rstest]
fn penalty_policy_keeps_every_perfume() {
    let preferences = Preferences::new()
        .with_mood(Mood::Fresh)
        .with_note_dislike(NoteFamily::Woody);
    let ranked = CatalogRanker::with_defaults().recommend(&sample_catalogue(), &preferences, 10);
    assert_eq!(ranked.len(), 10);
}

#[rstest]
fn default_ranker_matches_free_function() {
    let preferences = Preferences::new()
        .with_mood(Mood::Warm)
        .with_note_dislike(NoteFamily::Citrus);
    let catalog = sample_catalogue();

    let ranked = CatalogRanker::with_defaults().recommend(&catalog, &preferences, 4);

    assert_eq!(ranked, rank_perfumes(&catalog, &preferences, 4));
    assert_eq!(
        CatalogRanker::with_defaults().scorer().config(),
        &ScoringConfig::default()
    );
}

#[rstest]
fn dislikes_alone_carry_no_signal(fresh_citrus: Perfume) {
    let preferences = Preferences::new().with_note_dislike(NoteFamily::Citrus);
    let scored = evaluate(&PreferenceScorer::new(), &fresh_citrus, &preferences);
    assert_eq!(scored.match_percentage, 0);
    assert!(scored.reasons.is_empty());
    assert!(scored.max_score.abs() <= TOLERANCE);
    assert_eq!(scored.intensity_level, Intensity::Light);
}

#[rstest]
fn weak_coverage_is_penalised(fresh_citrus: Perfume) {
    let preferences = Preferences::new().with_time(TimeOfDay::Night);
    let scored = evaluate(&PreferenceScorer::new(), &fresh_citrus, &preferences);
    assert_eq!(scored.match_percentage, 0);
    assert!(scored.score.abs() <= TOLERANCE);
    assert!(scored.has_reason(ReasonCode::CoveragePenalty));
    assert!(!scored.has_reason(ReasonCode::Time));
}

#[rstest]
fn averaged_moods_withhold_reason_below_floor(fresh_citrus: Perfume) {
    // Fresh matches fully, woody not at all: the average of 0.5 sits below
    // the reason floor even though fresh alone clears the mood threshold.
    let preferences = Preferences::new()
        .with_mood(Mood::Woody)
        .with_mood(Mood::Fresh);
    let scorer = PreferenceScorer::new();

    let components = scorer.components(&fresh_citrus, &preferences);
    let mood = components.first().expect("mood component");
    assert!((mood.achieved - 0.5).abs() <= TOLERANCE);
    assert!(mood.reason.is_some());

    // The only core component is weak, so coverage is zero and the full
    // weak-coverage penalty applies: (14 - 10) / 28.
    let scored = evaluate(&scorer, &fresh_citrus, &preferences);
    assert!(!scored.has_reason(ReasonCode::Mood));
    assert!(scored.has_reason(ReasonCode::CoveragePenalty));
    assert_eq!(scored.match_percentage, 14);
}

#[rstest]
fn liked_notes_name_best_family(fresh_citrus: Perfume) {
    let preferences = Preferences::new()
        .with_note_like(NoteFamily::Floral)
        .with_note_like(NoteFamily::Citrus);
    let scored = evaluate(&PreferenceScorer::new(), &fresh_citrus, &preferences);
    let note = scored
        .reasons
        .iter()
        .find(|reason| reason.code == ReasonCode::Note);
    assert!(note.is_none(), "half the liked families is below the floor");

    let single = Preferences::new().with_note_like(NoteFamily::Citrus);
    let scored_single = evaluate(&PreferenceScorer::new(), &fresh_citrus, &single);
    assert!(scored_single.has_reason(ReasonCode::Note));
    assert_eq!(scored_single.match_percentage, 100);
}

#[rstest]
fn invalid_config_is_rejected() {
    let mut config = ScoringConfig::default();
    config.weights.notes = -2.0;
    let err = PreferenceScorer::with_config(config).expect_err("negative weight");
    assert!(matches!(
        err,
        ScoringConfigError::InvalidWeight { name: "notes", .. }
    ));
}

#[rstest]
fn ranking_is_repeatable() {
    let preferences = Preferences::new()
        .with_mood(Mood::Warm)
        .with_moment(Moment::Evening)
        .with_time(TimeOfDay::Night)
        .with_note_like(NoteFamily::Oriental)
        .with_note_dislike(NoteFamily::Citrus);
    let catalog = sample_catalogue();

    let first = rank_perfumes(&catalog, &preferences, 6);
    let second = rank_perfumes(&catalog, &preferences, 6);

    assert_eq!(first, second);
    assert_eq!(first.first().map(|item| item.perfume.id), Some(2));
}
