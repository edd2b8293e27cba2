use std::io::{self, Write};

use itertools::Itertools;
use libgame::{
    board::{GameBoard, TileState},
    pos::Position,
    variant::Variant,
};

/// Cursor home, then clear to the end of the screen.
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[J";

pub const ALIVE_CHAR: char = '*';
pub const BORDER_CHAR: char = '#';
pub const DEAD_CHAR: char = ' ';

/// Writes one full frame: screen clear, the board, and the turn line.
pub fn write_frame<W>(out: &mut W, board: &GameBoard, current: u32) -> io::Result<()>
where
    W: Write,
{
    out.write_all(CLEAR_SCREEN.as_bytes())?;

    for row in board.rows() {
        let line = row.map(|(pos, tile)| tile_char(board, pos, tile)).join(" ");
        writeln!(out, "{line}")?;
    }

    writeln!(out, "Turn: {current}/{}", board.turns())
}

fn tile_char(board: &GameBoard, pos: Position, tile: TileState) -> char {
    let border = board.is_border(pos);

    // The fixed border is drawn as a wall whatever it holds.
    if border && board.variant() == Variant::FixedBorder {
        return BORDER_CHAR;
    }

    match (tile, border) {
        (TileState::Alive, _) => ALIVE_CHAR,
        (TileState::Dead, true) => BORDER_CHAR,
        (TileState::Dead, false) => DEAD_CHAR,
    }
}
