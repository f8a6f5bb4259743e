//! Property tests over every 3x3 board.

use tallytoe_core::rules::{self, LINES};
use tallytoe_core::{Board, Player, Position, Square};

/// All 3^9 assignments of squares, legal or not.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(|mut code| {
        let mut board = Board::new();
        for pos in Position::ALL {
            let square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Player::Human),
                _ => Square::Occupied(Player::Computer),
            };
            board.set(pos, square);
            code /= 3;
        }
        board
    })
}

/// Owners of fully occupied lines, found without the rules module.
fn line_owners(board: &Board) -> Vec<Player> {
    LINES
        .iter()
        .filter_map(|line| {
            let owner = board.get(line[0]).occupant()?;
            line.iter()
                .all(|&pos| board.get(pos) == Square::Occupied(owner))
                .then_some(owner)
        })
        .collect()
}

#[test]
fn test_winner_matches_line_ownership() {
    for board in all_boards() {
        if board.is_full() {
            continue;
        }
        let owners = line_owners(&board);
        match owners.first() {
            None => assert_eq!(board.winner(), None, "{}", board),
            Some(&first) if owners.iter().all(|&p| p == first) => {
                assert_eq!(board.winner(), Some(first), "{}", board)
            }
            // Both players own a line: unreachable in play, not specified.
            Some(_) => {}
        }
    }
}

#[test]
fn test_terminal_iff_winner_or_full() {
    for board in all_boards() {
        let every_cell_taken = Position::ALL.iter().all(|&pos| !board.is_empty(pos));
        assert_eq!(
            rules::is_terminal(&board),
            board.winner().is_some() || every_cell_taken,
            "{}",
            board
        );
        assert_eq!(board.is_full(), every_cell_taken, "{}", board);
    }
}

#[test]
fn test_place_remove_round_trip_on_every_empty_square() {
    for board in all_boards().step_by(7) {
        for pos in board.empty_positions().collect::<Vec<_>>() {
            for player in [Player::Human, Player::Computer] {
                let mut scratch = board;
                scratch.place(pos, player);
                scratch.remove(pos);
                assert_eq!(scratch, board);
            }
        }
    }
}

#[test]
fn test_remove_always_empties() {
    let mut board: Board = "XO./.../...".parse().unwrap();
    board.remove(Position::TopLeft);
    board.remove(Position::BottomRight);
    assert!(board.is_empty(Position::TopLeft));
    assert!(board.is_empty(Position::BottomRight));
    assert_eq!(board.get(Position::TopCenter), Square::Occupied(Player::Human));
}

#[test]
fn test_outcome_of_boards() {
    let won: Board = "OOO/XX./...".parse().unwrap();
    assert_eq!(
        rules::outcome(&won),
        Some(tallytoe_core::Outcome::Winner(Player::Human))
    );

    let drawn: Board = "XOX/OXX/OXO".parse().unwrap();
    assert_eq!(rules::outcome(&drawn), Some(tallytoe_core::Outcome::Draw));

    let open: Board = "XO./.../...".parse().unwrap();
    assert_eq!(rules::outcome(&open), None);
}

#[test]
fn test_board_serializes() {
    let board: Board = "XO./.X./..O".parse().unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}
