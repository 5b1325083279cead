use plwordle_server::db::seed::{parse, ALL_POSITIONS};

#[test]
fn bundled_seed_file_parses() {
    let data = parse(include_str!("../data/pl_data.json")).expect("bundled data is valid");
    assert!(!data.teams.is_empty());
    assert!(!data.players.is_empty());

    // Every player references seeded teams and known position codes.
    for player in &data.players {
        assert!(
            player.teams.iter().any(|t| t == &player.current_team),
            "{} is not affiliated with its current team",
            player.name
        );
        for code in &player.positions {
            assert!(
                ALL_POSITIONS.contains(&code.as_str()),
                "unknown position code {code}"
            );
        }
    }
}

#[test]
fn malformed_seed_file_is_rejected() {
    assert!(parse("{\"teams\": []}").is_err()); // players missing
    assert!(parse("not json").is_err());
}
