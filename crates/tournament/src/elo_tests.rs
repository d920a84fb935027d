use super::*;

#[test]
fn test_equal_ratings_expect_even_score() {
    let tracker = EloTracker::new();
    let expected = tracker.expected_score("minimax:4", "random");
    assert!((expected - 0.5).abs() < 1e-9);
}

#[test]
fn test_update_moves_points_to_winner() {
    let mut tracker = EloTracker::new();
    let result = MatchResult {
        wins: 10,
        losses: 0,
        draws: 0,
    };
    let change = tracker.update_ratings("minimax:4", "random", &result);

    assert!(change > 0.0);
    assert!(tracker.rating("minimax:4") > DEFAULT_ELO);
    assert!(tracker.rating("random") < DEFAULT_ELO);
    let total = tracker.rating("minimax:4") + tracker.rating("random");
    assert!((total - 2.0 * DEFAULT_ELO).abs() < 1e-9);
    assert_eq!(tracker.players["random"].games, 10);
    assert_eq!(tracker.history.len(), 1);
}

#[test]
fn test_leaderboard_is_sorted() {
    let mut tracker = EloTracker::new();
    tracker.update_ratings(
        "a",
        "b",
        &MatchResult {
            wins: 0,
            losses: 4,
            draws: 0,
        },
    );
    let names: Vec<_> = tracker.leaderboard().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, ["b", "a"]);
    assert!(tracker.format_leaderboard().contains("=== Leaderboard ==="));
}

#[test]
fn test_match_result_score_and_flip() {
    let mut result = MatchResult::new();
    assert_eq!(result.score(), 0.5);

    result.record(GameResult::Win);
    result.record(GameResult::Draw);
    result.record(GameResult::Win.flip());
    assert_eq!(result.total_games(), 3);
    assert!((result.score() - 0.5).abs() < 1e-9);

    let flipped = result.flipped();
    assert_eq!((flipped.wins, flipped.losses, flipped.draws), (1, 1, 1));
}

#[test]
fn test_save_and_load_ledger() {
    let path = std::env::temp_dir().join(format!("ataxx_elo_{}.json", std::process::id()));
    let mut tracker = EloTracker::new();
    tracker.update_ratings("x", "y", &MatchResult { wins: 1, losses: 0, draws: 1 });
    tracker.save(&path).unwrap();

    let loaded = EloTracker::load(&path).unwrap();
    assert_eq!(loaded.players, tracker.players);
    assert_eq!(loaded.history.len(), 1);
    std::fs::remove_file(&path).unwrap();

    assert!(EloTracker::load_or_default(&path).unwrap().players.is_empty());
}
