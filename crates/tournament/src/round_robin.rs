//! Every participant against every other

use log::info;

use crate::config::TournamentConfig;
use crate::elo::EloTracker;
use crate::error::{Result, TournamentError};
use crate::match_runner::MatchRunner;
use crate::results::TournamentResults;

/// Plays one match per unordered pair of participants, rating each match
/// in `tracker` as it finishes.
pub fn run_round_robin(
    config: &TournamentConfig,
    tracker: &mut EloTracker,
) -> Result<TournamentResults> {
    if config.participants.len() < 2 {
        return Err(TournamentError::TooFewParticipants(config.participants.len()));
    }

    let labels: Vec<String> = config.participants.iter().map(|p| p.to_string()).collect();
    let mut results = TournamentResults::new(&config.name, labels.clone(), config.clone());
    let runner = MatchRunner::new(config.match_config());
    // Fail before any game if the start position is unusable
    runner.start_position()?;

    for i in 0..config.participants.len() {
        for j in (i + 1)..config.participants.len() {
            info!("{} vs {}", labels[i], labels[j]);
            let result = runner.run_specs(config.participants[i], config.participants[j])?;
            tracker.update_ratings(&labels[i], &labels[j], &result);
            results.add_match(&labels[i], &labels[j], result);
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::PlayerSpec;

    #[test]
    fn test_round_robin_plays_every_pair() {
        let config = TournamentConfig {
            participants: vec![
                PlayerSpec::Minimax { depth: Some(1) },
                PlayerSpec::Random { seed: Some(1) },
                PlayerSpec::Random { seed: Some(2) },
            ],
            games_per_match: 2,
            max_moves_per_game: 60,
            ..Default::default()
        };
        let mut tracker = EloTracker::new();
        let results = run_round_robin(&config, &mut tracker).unwrap();

        assert_eq!(results.matches.len(), 3);
        assert!(results.matches.iter().all(|m| m.result.total_games() == 2));
        assert_eq!(tracker.history.len(), 3);

        let standings = results.standings();
        assert_eq!(standings.len(), 3);
        assert!(standings.iter().all(|s| s.games == 4));
        let total: f64 = standings.iter().map(|s| s.points).sum();
        assert!((total - 6.0).abs() < 1e-9);

        let report = results.generate_report();
        assert!(report.contains("minimax:1"));
        assert!(report.contains("Standings:"));
    }

    #[test]
    fn test_round_robin_rejects_bad_start() {
        let config = TournamentConfig {
            participants: vec![
                PlayerSpec::Random { seed: Some(1) },
                PlayerSpec::Random { seed: Some(2) },
            ],
            blocks: vec!["z9".to_string()],
            ..Default::default()
        };
        assert!(run_round_robin(&config, &mut EloTracker::new()).is_err());
    }
}
