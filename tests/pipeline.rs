use poker_matchups::core::{Card, EvaluatedHand, HandEvaluator, HandType, RankEvaluator};
use poker_matchups::matchup::{
    CategoryKey, Deal, MAX_PER_CATEGORY, Manifest, MatchupStore, ShowdownSimulator,
    SimulationConfig, clear_output_dir, normalize_winner_first, refine_same_rank_category,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn classify(board: &str, p1: &str, p2: &str) -> (CategoryKey, Deal) {
    let board = Card::parse_many(board).unwrap();
    let p1 = Card::parse_many(p1).unwrap();
    let p2 = Card::parse_many(p2).unwrap();
    let hand1: EvaluatedHand = RankEvaluator.evaluate(&board, &p1).unwrap();
    let hand2 = RankEvaluator.evaluate(&board, &p2).unwrap();
    let norm = normalize_winner_first(&RankEvaluator, &hand1, &hand2, [p1[0], p1[1]], [p2[0], p2[1]]);
    let refined =
        refine_same_rank_category(norm.key, &norm.winner, &norm.loser, norm.is_tie, &board);
    let deal = Deal {
        board: [board[0], board[1], board[2], board[3], board[4]],
        p1: norm.p1,
        p2: norm.p2,
    };
    (refined.key, deal)
}

#[test]
fn known_showdowns() {
    let cases = [
        ("2c7d9hJsKd", "3c4d", "Kc5d", "pairVsHighCard"),
        ("Kd5c5h9s2c", "QcQd", "KcTd", "twoPairVsLowerTwoPair"),
        ("AhKd9c6s2d", "3h4h", "3c8c", "highCardVsHighCardKickerDecides"),
        ("AhQd8c5s2h", "Kc3d", "Kd4c", "highCardVsHighCardChop"),
        ("9h8c7d6s5h", "2c2d", "3c3d", "onBoardStraightChop"),
        ("Ah7h7c4d2s", "AsKd", "AcQd", "twoPairVsTwoPairKickerDecides"),
        ("KhKdKc4s2h", "KsTc", "AhAd", "fourOfAKindVsFullHouse"),
    ];
    for (board, p1, p2, expected) in cases {
        let (key, _) = classify(board, p1, p2);
        assert_eq!(expected, key.to_string(), "{board} {p1} {p2}");
    }
}

#[test]
fn winner_cards_go_first() {
    let (_, deal) = classify("Kd5c5h9s2c", "QcQd", "KcTd");
    assert_eq!(Card::parse_many("KcTd").unwrap(), deal.p1.to_vec());
    assert_eq!(Card::parse_many("QcQd").unwrap(), deal.p2.to_vec());
}

#[test]
fn batch_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config = SimulationConfig {
        runs: 2_000,
        output_dir: dir.path().join("output"),
        seed: Some(2024),
        ..SimulationConfig::default()
    };

    let mut store = MatchupStore::load(&config.store_path()).unwrap();
    assert!(store.is_empty());

    let mut sim = ShowdownSimulator::new(StdRng::seed_from_u64(config.seed.unwrap()));
    let summary = sim.run(&mut store, config.runs, config.cap).unwrap();
    assert_eq!(config.runs, summary.showdowns);
    assert_eq!(0, summary.anomalies);
    assert!(store.iter().all(|(_, deals)| deals.len() <= MAX_PER_CATEGORY));

    store.save(&config.store_path()).unwrap();
    let manifest = Manifest::from_store(&store);
    manifest.write(&config.manifest_path()).unwrap();

    let loaded = MatchupStore::load(&config.store_path()).unwrap();
    assert_eq!(store, loaded);
    assert_eq!(manifest.total_hands(), loaded.total_deals());

    let ts = std::fs::read_to_string(config.manifest_path()).unwrap();
    assert!(ts.contains(&format!("TOTAL_CATEGORIES = {};", loaded.len())));

    // A second batch only tops up categories that still have room.
    let before = loaded.total_deals();
    let mut store = loaded;
    let summary = sim.run(&mut store, 500, config.cap).unwrap();
    assert_eq!(before + summary.inserted, store.total_deals());

    assert_eq!(2, clear_output_dir(&config.output_dir).unwrap());
    assert!(MatchupStore::load(&config.store_path()).unwrap().is_empty());
}

#[test]
fn every_same_type_key_is_refined() {
    let mut store = MatchupStore::new();
    ShowdownSimulator::new(StdRng::seed_from_u64(77))
        .run(&mut store, 3_000, MAX_PER_CATEGORY)
        .unwrap();
    for (key, _) in &store {
        assert!(!key.is_same_type(), "{key} was left unrefined");
    }
    assert!(store.get(&CategoryKey::versus(HandType::Pair, HandType::HighCard)).is_some());
}
