//! Move selection scenarios.

use tallytoe_core::{
    analyze, choose_move, Board, Marker, Player, Position, ScoringPolicy, SelectError, TieBreak,
};

fn pick(board: &str) -> Position {
    let board: Board = board.parse().expect("valid board");
    *choose_move(&board, Player::Computer, &ScoringPolicy::default())
        .expect("move available")
        .position()
}

#[test]
fn test_blocks_diagonal_threat() {
    // Human at top-left and center, computer at top-center.
    assert_eq!(pick("OX./.O./..."), Position::BottomRight);
}

#[test]
fn test_legacy_policy_also_blocks_diagonal_threat() {
    let board: Board = "OX./.O./...".parse().unwrap();
    let choice = choose_move(&board, Player::Computer, &ScoringPolicy::legacy()).unwrap();
    assert_eq!(*choice.position(), Position::BottomRight);
}

#[test]
fn test_blocks_row_threat() {
    assert_eq!(pick("X../OO./..X"), Position::MiddleRight);
}

#[test]
fn test_takes_immediate_win_over_block() {
    let board: Board = "XX./OO./...".parse().unwrap();
    let choice = choose_move(&board, Player::Computer, &ScoringPolicy::default()).unwrap();
    assert_eq!(*choice.position(), Position::TopRight);
    assert_eq!(*choice.score(), ScoringPolicy::DOMINANT_WEIGHT);
}

#[test]
fn test_center_scores_best_on_empty_board() {
    let analysis = analyze(&Board::new(), Player::Computer, &ScoringPolicy::default());
    let center = analysis.combined().get(Position::Center).score().unwrap();
    for (pos, marker) in analysis.combined().iter() {
        assert!(center >= marker.score().unwrap(), "{} beats center", pos);
    }
}

#[test]
fn test_empty_board_scores_are_symmetric() {
    let analysis = analyze(&Board::new(), Player::Computer, &ScoringPolicy::default());
    let score = |pos: Position| analysis.combined().get(pos).score().unwrap();

    let corners = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];
    let edges = [
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
    ];
    assert!(corners.iter().all(|&pos| score(pos) == score(Position::TopLeft)));
    assert!(edges.iter().all(|&pos| score(pos) == score(Position::TopCenter)));
}

#[test]
fn test_only_empty_square_is_chosen() {
    let board: Board = "XOX/OOX/XX.".parse().unwrap();
    let choice = choose_move(&board, Player::Human, &ScoringPolicy::default()).unwrap();
    assert_eq!(*choice.position(), Position::BottomRight);
    assert_eq!(choice.analysis().stats().nodes, 1);
}

#[test]
fn test_occupied_squares_are_unusable() {
    let board: Board = "OX./.O./...".parse().unwrap();
    let analysis = analyze(&board, Player::Computer, &ScoringPolicy::default());
    for (pos, marker) in analysis.combined().iter() {
        assert_eq!(marker == Marker::Unusable, !board.is_empty(pos), "{}", pos);
    }
}

#[test]
fn test_combined_is_wins_minus_losses() {
    let board: Board = "X../.O./...".parse().unwrap();
    let analysis = analyze(&board, Player::Computer, &ScoringPolicy::legacy());
    for pos in board.empty_positions() {
        let wins = analysis.wins().get(pos).score().unwrap();
        let losses = analysis.losses().get(pos).score().unwrap();
        assert_eq!(analysis.combined().get(pos), Marker::Score(wins - losses));
    }
}

#[test]
fn test_tie_break_follows_policy() {
    // Scores are symmetric about the descending diagonal here, so the two
    // best squares tie and the tie-break decides.
    let board: Board = "X../.O./...".parse().unwrap();
    let first = ScoringPolicy::default();
    let last = ScoringPolicy::default().with_tie_break(TieBreak::LastInScanOrder);

    let a = *choose_move(&board, Player::Computer, &first).unwrap().position();
    let b = *choose_move(&board, Player::Computer, &last).unwrap().position();
    assert_ne!(a, b);
    assert!(a < b);

    let analysis = analyze(&board, Player::Computer, &first);
    assert_eq!(analysis.combined().get(a), analysis.combined().get(b));
}

#[test]
fn test_no_move_on_finished_boards() {
    let won: Board = "XXX/OO./...".parse().unwrap();
    assert_eq!(
        choose_move(&won, Player::Human, &ScoringPolicy::default()).unwrap_err(),
        SelectError::AlreadyWon(Player::Computer)
    );

    let full: Board = "XOX/OXX/OXO".parse().unwrap();
    assert_eq!(
        choose_move(&full, Player::Computer, &ScoringPolicy::default()).unwrap_err(),
        SelectError::BoardFull
    );
}

#[test]
fn test_choice_serializes_to_json() {
    let board: Board = "OX./.O./...".parse().unwrap();
    let choice = choose_move(&board, Player::Computer, &ScoringPolicy::default()).unwrap();
    let json = serde_json::to_value(&choice).unwrap();
    assert_eq!(json["position"], "BottomRight");
    assert_eq!(json["analysis"]["to_move"], "computer");
    assert!(json["analysis"]["stats"]["leaves"].as_u64().unwrap() > 0);
}
