use noughts::board::Mark;
use noughts::protocol::Engine;

fn run(script: &str) -> String {
    let mut e = Engine::new();
    let mut out = Vec::new();
    e.run_loop(script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn isready_answers_readyok() {
    assert_eq!(run("isready\n"), "readyok\n");
}

#[test]
fn go_from_moves_finds_the_win() {
    // X: 1, 4; O: 2, 5 (1-based). X completes the left column at 7.
    let out = run("position startpos moves 1 2 4 5\ngo\n");
    assert!(out.starts_with("bestmove 7 score 99 nodes "), "{out}");
}

#[test]
fn go_from_cells_blocks() {
    let out = run("position cells XX..O....\ngo\n");
    assert!(out.starts_with("bestmove 3 "), "{out}");
}

#[test]
fn cells_may_contain_spaces() {
    let out = run("position cells XX  O    \ngo\n");
    assert!(out.starts_with("bestmove 3 "), "{out}");
}

#[test]
fn bad_commands_report_errors_and_keep_going() {
    let out = run("depth 0\ndifficulty expert\nposition startpos moves 1 1\nfly\nisready\n");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5, "{out}");
    assert!(lines[..4].iter().all(|l| l.starts_with("error ")), "{out}");
    assert_eq!(lines[4], "readyok");
}

#[test]
fn difficulty_and_depth_are_accepted() {
    let out = run("difficulty easy\ndepth 3\nposition cells OO.XX.X..\ngo\n");
    assert!(out.starts_with("bestmove 3 score 99"), "{out}");
}

#[test]
fn go_on_finished_game_has_no_move() {
    assert_eq!(run("position cells XOXOXXOXO\ngo\n"), "bestmove none\n");
    assert_eq!(run("position startpos moves 1 4 2 5 3\ngo\n"), "bestmove none\n");
}

#[test]
fn quit_stops_the_loop() {
    assert_eq!(run("isready\nquit\nisready\n"), "readyok\n");
}

#[test]
fn newgame_resets_and_show_draws_board() {
    let mut e = Engine::new();
    let mut out = Vec::new();
    assert!(e.handle("position startpos moves 5", &mut out).unwrap());
    assert_eq!(e.position().side_to_move(), Mark::O);
    assert!(e.handle("show", &mut out).unwrap());
    assert!(String::from_utf8(out).unwrap().contains(" | X | "));
    let mut sink = Vec::new();
    assert!(e.handle("newgame", &mut sink).unwrap());
    assert!(e.position().legal_moves().len() == 9);
    assert!(!e.handle("quit", &mut sink).unwrap());
}
