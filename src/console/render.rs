//! Plain-text rendering of boards and score grids.

use std::io::{self, Write};
use tallytoe_core::{rules, Analysis, Board, Marker, Player, Position, ScoreGrid, TieBreak};

const RULE: &str = "    ###################";
const PADDING: &str = "    #     #     #     #";

/// Human-facing coordinates, e.g. `X3 Y1` for the top-right square.
pub fn coords_label(position: Position) -> String {
    format!("X{} Y{}", position.col() + 1, position.row() + 1)
}

/// Draws the legend and the bordered 3x3 grid.
pub fn render_board(board: &Board, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Player:   {}", Player::Human.glyph())?;
    writeln!(out, "Machine:  {}", Player::Computer.glyph())?;
    writeln!(out)?;

    writeln!(out, "      X1     X2    X3  ")?;
    writeln!(out, "{}", RULE)?;
    for row in 0..Board::SIDE {
        let glyph = |col| {
            board
                .cell(row, col)
                .map(|square| square.glyph())
                .unwrap_or(' ')
        };
        writeln!(out, "{}", PADDING)?;
        writeln!(
            out,
            " Y{} #  {}  #  {}  #  {}  #",
            row + 1,
            glyph(0),
            glyph(1),
            glyph(2)
        )?;
        writeln!(out, "{}", PADDING)?;
        writeln!(out, "{}", RULE)?;
    }
    Ok(())
}

fn render_grid(title: &str, grid: &ScoreGrid, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "    {:>10}{:>10}{:>10}", "X1", "X2", "X3")?;
    for row in 0..Board::SIDE {
        write!(out, " Y{} ", row + 1)?;
        for col in 0..Board::SIDE {
            let cell = Position::from_coords(row, col)
                .map(|pos| grid.get(pos))
                .unwrap_or(Marker::Unusable);
            match cell {
                Marker::Unusable => write!(out, "{:>10}", "-")?,
                Marker::Score(score) => write!(out, "{:>10}", score)?,
            }
        }
        writeln!(out)?;
    }
    writeln!(out)
}

/// Prints the win, loss and combined grids with the search counters.
pub fn render_analysis(
    analysis: &Analysis,
    tie_break: TieBreak,
    out: &mut dyn Write,
) -> io::Result<()> {
    let stats = analysis.stats();
    writeln!(out, "Board:    {}", analysis.board())?;
    writeln!(out, "To move:  {}", analysis.to_move())?;
    writeln!(
        out,
        "Searched: {} nodes, {} leaves ({} wins, {} losses, {} ties)",
        stats.nodes, stats.leaves, stats.wins, stats.losses, stats.ties
    )?;
    writeln!(out)?;

    render_grid("Wins", analysis.wins(), out)?;
    render_grid("Losses", analysis.losses(), out)?;
    render_grid("Combined", analysis.combined(), out)?;

    let best = if rules::is_terminal(analysis.board()) {
        None
    } else {
        analysis.best(tie_break)
    };
    match best {
        Some((position, score)) => {
            writeln!(out, "Best:     {} (score {})", coords_label(position), score)
        }
        None => writeln!(out, "Best:     none, the game is over"),
    }
}
