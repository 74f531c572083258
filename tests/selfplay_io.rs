use noughts::board::Mark;
use noughts::selfplay::{generate_games, read_games, write_games, Opponent, SelfPlayParams};
use std::fs::remove_file;

#[test]
fn write_and_read_games() {
    let params = SelfPlayParams {
        games: 5, engine: Mark::O, depth: 4, opponent: Opponent::Random, opponent_depth: 2, seed: 123, threads: 1,
    };
    let games = generate_games(&params).unwrap();
    let path = std::path::Path::new("target/selfplay_test/games.jsonl");
    let _ = remove_file(path);
    write_games(path, &games).unwrap();
    let back = read_games(path).unwrap();
    assert_eq!(back, games);
}

#[test]
fn read_reports_bad_lines() {
    let path = std::path::Path::new("target/selfplay_test/bad.jsonl");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, "{\"moves\": [0]}\n").unwrap();
    let err = read_games(path).unwrap_err();
    assert!(format!("{err:#}").contains("bad.jsonl:1"), "{err:#}");
}
