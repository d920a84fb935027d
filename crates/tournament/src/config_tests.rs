use super::*;

#[test]
fn test_full_config() {
    let config = TournamentConfig::from_toml_str(
        r#"
        name = "ladder"
        participants = ["minimax:1", "minimax", "random:7"]
        games_per_match = 4
        search_depth = 2
        blocks = ["c5"]
        seed = 9
        results_file = "out.json"
        "#,
    )
    .unwrap();

    assert_eq!(config.name, "ladder");
    assert_eq!(
        config.participants,
        [
            PlayerSpec::Minimax { depth: Some(1) },
            PlayerSpec::Minimax { depth: None },
            PlayerSpec::Random { seed: Some(7) },
        ]
    );
    assert_eq!(config.max_moves_per_game, 200);
    assert_eq!(config.results_file, Some(PathBuf::from("out.json")));

    let mc = config.match_config();
    assert_eq!(mc.num_games, 4);
    assert_eq!(mc.depth, 2);
    assert_eq!(mc.blocks, ["c5"]);
    assert_eq!(mc.seed, 9);
}

#[test]
fn test_rejects_bad_configs() {
    assert!(matches!(
        TournamentConfig::from_toml_str(r#"participants = ["random"]"#),
        Err(TournamentError::TooFewParticipants(1))
    ));
    assert!(matches!(
        TournamentConfig::from_toml_str(r#"participants = ["random", "stockfish"]"#),
        Err(TournamentError::Config(_))
    ));
    assert!(matches!(
        TournamentConfig::from_toml_str("participants = [\"random\", \"random\"]\ndepth = 3"),
        Err(TournamentError::Config(_))
    ));
}

#[test]
fn test_serializes_back_to_toml() {
    let config = TournamentConfig {
        participants: vec![
            PlayerSpec::Minimax { depth: Some(2) },
            PlayerSpec::Random { seed: None },
        ],
        ..Default::default()
    };
    let text = toml::to_string(&config).unwrap();
    assert_eq!(TournamentConfig::from_toml_str(&text).unwrap(), config);
}
