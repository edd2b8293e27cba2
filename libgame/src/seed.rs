//! Seed pattern files: plain text, one row per line, one cell per byte.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{
    board::{GameBoard, TileState},
    pos::Position,
    variant::Variant,
};

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Couldn't open file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads a seed file into a fresh `size`×`size` board.
pub fn load_file<P>(path: P, size: usize, variant: Variant) -> Result<GameBoard, SeedError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let text = fs::read(path).map_err(|source| SeedError::Open {
        path: path.to_owned(),
        source,
    })?;

    log::info!("Loading seed pattern from {}", path.display());
    Ok(parse(&text, size, variant))
}

/// Builds a board from seed text.
///
/// The byte at column `x` of line `y` becomes cell `(x, y)`; a trailing `\r`
/// on a line is ignored. The text need not be UTF-8, and a multi-byte
/// character takes one column per byte. The first byte of a line is column 0,
/// and the newline itself never marks a cell alive. Bytes that fall
/// outside the board are dropped. On a full-grid board only interior positions
/// are taken from the text, so any live border bytes are dropped as well.
pub fn parse(text: &[u8], size: usize, variant: Variant) -> GameBoard {
    let mut board = GameBoard::new(size, variant);
    let mut clamped = 0usize;
    let mut border_dropped = 0usize;

    let mut lines = text.split(|&b| b == b'\n').collect::<Vec<_>>();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    for (y, line) in lines.into_iter().enumerate() {
        let line = line.strip_suffix(b"\r").unwrap_or(line);

        for (x, &c) in line.iter().enumerate() {
            let pos = Position { x, y };
            let state = TileState::from(variant.is_alive_char(c));

            if x >= size || y >= size {
                clamped += 1;
                continue;
            }

            if variant == Variant::FullGrid && board.is_border(pos) {
                if state.is_alive() {
                    border_dropped += 1;
                }
                continue;
            }

            board.seed(pos, state);
        }
    }

    if clamped > 0 {
        log::warn!("Seed pattern exceeds the {size}x{size} board, ignored {clamped} bytes");
    }

    if border_dropped > 0 {
        log::debug!("Dropped {border_dropped} live border cells from seed pattern");
    }

    board
}
