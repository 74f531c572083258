use noughts::board::{Mark, Outcome, Position};
use noughts::selfplay::{generate_games, summarize, Opponent, SelfPlayParams};
use pretty_assertions::assert_eq;

fn params(engine: Mark, opponent: Opponent, games: usize, seed: u64) -> SelfPlayParams {
    SelfPlayParams { games, engine, depth: 9, opponent, opponent_depth: 2, seed, threads: 1 }
}

#[test]
fn selfplay_generates_games_deterministically() {
    let p = params(Mark::O, Opponent::Random, 4, 7);
    let g1 = generate_games(&p).unwrap();
    let g2 = generate_games(&p).unwrap();
    assert_eq!(g1.len(), 4);
    assert_eq!(g1, g2);
}

#[test]
fn selfplay_seeds_change_random_games() {
    let g1 = generate_games(&params(Mark::O, Opponent::Random, 8, 1)).unwrap();
    let g2 = generate_games(&params(Mark::O, Opponent::Random, 8, 2)).unwrap();
    assert_ne!(g1, g2, "different seeds produced identical games");
}

#[test]
fn full_depth_engine_never_loses_to_random() {
    for engine in [Mark::X, Mark::O] {
        let games = generate_games(&params(engine, Opponent::Random, 30, 99)).unwrap();
        assert_eq!(summarize(&games).opponent_wins, 0, "engine {engine}");
    }
}

#[test]
fn full_depth_engine_beats_first_available() {
    // X takes 0, 1, 2 in order unless blocked; O at full depth must win or tie
    let games = generate_games(&params(Mark::O, Opponent::FirstAvailable, 1, 0)).unwrap();
    assert_ne!(games[0].winner, Some(Mark::X));
}

#[test]
fn perfect_play_on_both_sides_ties() {
    let mut p = params(Mark::X, Opponent::Engine, 2, 5);
    p.opponent_depth = 9;
    let games = generate_games(&p).unwrap();
    let t = summarize(&games);
    assert_eq!((t.engine_wins, t.opponent_wins, t.ties), (0, 0, 2));
    assert_eq!(games[0].moves.len(), 9);
}

#[test]
fn records_replay_to_their_result() {
    for g in generate_games(&params(Mark::O, Opponent::Random, 10, 3)).unwrap() {
        let pos = Position::from_moves(&g.moves).expect("recorded moves are legal");
        let expected = match g.winner { Some(m) => Outcome::Win(m), None => Outcome::Tie };
        assert_eq!(pos.winner(), expected, "{:?}", g.moves);
    }
}

#[test]
fn threaded_generation_matches_serial() {
    let serial = generate_games(&params(Mark::O, Opponent::Random, 6, 11)).unwrap();
    let mut p = params(Mark::O, Opponent::Random, 6, 11);
    p.threads = 3;
    let threaded = generate_games(&p).unwrap();
    assert_eq!(serial, threaded);
}

#[test]
fn invalid_depth_is_an_error() {
    let mut p = params(Mark::O, Opponent::Random, 1, 0);
    p.depth = 0;
    assert!(generate_games(&p).is_err());
}
