use pontoon::{Engine, RoundStatus};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_fresh_round_deals_two_cards_to_each_side() {
    let mut engine = Engine::with_rng(ChaCha8Rng::seed_from_u64(42));
    engine.start_round();

    let state = engine.state();
    assert_eq!(state.player().len(), 2);
    assert_eq!(state.house().len(), 2);
    assert_eq!(state.cards_remaining(), 48);
}

#[test]
fn test_same_seed_plays_the_same_round() {
    let mut a = Engine::with_rng(ChaCha8Rng::seed_from_u64(7));
    let mut b = Engine::with_rng(ChaCha8Rng::seed_from_u64(7));
    a.start_round();
    b.start_round();
    assert_eq!(a.state(), b.state());

    a.hit();
    b.hit();
    assert_eq!(a.state(), b.state());
}

#[test]
fn test_standing_always_leaves_the_house_on_seventeen_or_bust() {
    for seed in 0..200 {
        let mut engine = Engine::with_rng(ChaCha8Rng::seed_from_u64(seed));
        engine.start_round();
        if engine.state().is_over() {
            // A natural settled the round before the player could act.
            continue;
        }
        engine.stand();

        let state = engine.state();
        assert!(state.is_over());
        // The house reached its target or busted trying; a bust is >= 17
        // too, since the house stops drawing the moment it gets there.
        assert!(state.house().value() >= 17, "seed {seed}");
    }
}

#[test]
fn test_resolved_rounds_report_a_winner() {
    for seed in 0..200 {
        let mut engine = Engine::with_rng(ChaCha8Rng::seed_from_u64(seed));
        engine.start_round();

        // Hit to 17, then stand; crude but always terminates.
        while !engine.state().is_over() && engine.state().player().value() < 17 {
            engine.hit();
        }
        engine.stand();

        let state = engine.state();
        assert!(state.is_over());
        match state.status() {
            RoundStatus::PlayerWins => assert!(state.player_won()),
            RoundStatus::HouseWins => assert!(!state.player_won()),
            RoundStatus::InProgress => panic!("round not resolved for seed {seed}"),
        }
        // A legal round never runs the deck dry.
        assert!(state.cards_remaining() > 0);
    }
}

#[test]
fn test_hands_only_grow_within_a_round() {
    let mut engine = Engine::with_rng(ChaCha8Rng::seed_from_u64(3));
    engine.start_round();

    let mut last_player = engine.state().player().len();
    let mut last_house = engine.state().house().len();
    while !engine.state().is_over() {
        engine.hit();
        let state = engine.state();
        assert!(state.player().len() >= last_player);
        assert!(state.house().len() >= last_house);
        last_player = state.player().len();
        last_house = state.house().len();
    }
}
