//! Tests for the `analyze` report.

use tallytoe::{run_analysis, GameConfig};
use tallytoe_core::{Board, Player, ScoringPolicy};

fn report(config: &GameConfig, board: &str, to_move: Player, json: bool) -> String {
    let board: Board = board.parse().expect("valid board");
    let mut out = Vec::new();
    run_analysis(config, &board, to_move, json, &mut out).expect("analysis succeeds");
    String::from_utf8(out).expect("report is UTF-8")
}

#[test]
fn test_text_report_names_best_square() {
    let text = report(&GameConfig::default(), "OX./.O./...", Player::Computer, false);
    assert!(text.starts_with("Board:    OX./.O./...\n"));
    assert!(text.contains("To move:  computer"));
    for title in ["Wins", "Losses", "Combined"] {
        assert!(text.lines().any(|line| line == title), "missing {} grid", title);
    }
    assert!(text.contains("Best:     X3 Y3"));
}

#[test]
fn test_empty_board_counts_every_game() {
    let text = report(&GameConfig::default(), ".........", Player::Computer, false);
    assert!(text.contains("255168 leaves (131184 wins, 77904 losses, 46080 ties)"));
    assert!(text.contains("Best:     X2 Y2 (score 18048)"));
}

#[test]
fn test_finished_board_has_no_best() {
    let text = report(&GameConfig::default(), "XXX/OO./...", Player::Human, false);
    assert!(text.contains("0 leaves"));
    assert!(text.contains("Best:     none"));
}

#[test]
fn test_json_report_parses() {
    let config = GameConfig::default().with_scoring(ScoringPolicy::legacy());
    let json = report(&config, "XX./OO./...", Player::Computer, true);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["to_move"], "computer");
    assert_eq!(value["stats"]["leaves"].as_u64().map(|n| n > 0), Some(true));
    assert_eq!(value["combined"]["markers"][0][0], "Unusable");
    assert_eq!(value["combined"]["markers"][0][2]["Score"], 200);
}
