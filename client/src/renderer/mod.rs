mod frame;
mod sleeper;

use std::{io::Write, time::Duration};

use anyhow::Context;
use libgame::Game;
use sleeper::Sleeper;

pub struct Renderer<W: Write> {
    out: W,
    sleeper: Sleeper,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, delay: Duration) -> Self {
        Self {
            out,
            sleeper: Sleeper::new(delay),
        }
    }

    /// Draws the committed board, then waits out the frame delay.
    pub fn draw(&mut self, game: &Game, current: u32) -> anyhow::Result<()> {
        frame::write_frame(&mut self.out, &game.board, current)
            .and_then(|()| self.out.flush())
            .context("Writing frame to the terminal")?;

        self.sleeper.pause();
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use libgame::{
        board::{GameBoard, TileState},
        rule::PendingPolicy,
        variant::Variant,
    };

    use super::*;

    #[test]
    fn zero_turns_draws_one_frame() {
        let mut board = GameBoard::new(5, Variant::FullGrid);
        board.seed((2, 2), TileState::Alive);
        board.set_turns(0);
        let mut game = Game::new(board, PendingPolicy::default());

        let mut renderer = Renderer::new(Vec::new(), Duration::ZERO);
        game.run(|game, current| renderer.draw(game, current)).unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(1, output.matches(frame::CLEAR_SCREEN).count());
        assert!(output.contains("#   *   #\n"));
        assert!(output.ends_with("Turn: 0/0\n"));
        assert_eq!(0, game.board.alive_count());
    }

    #[test]
    fn frames_count_up_to_total() {
        let mut board = GameBoard::new(6, Variant::FixedBorder);
        board.set_turns(2);
        let mut game = Game::new(board, PendingPolicy::default());

        let mut renderer = Renderer::new(Vec::new(), Duration::ZERO);
        game.run(|game, current| renderer.draw(game, current)).unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        let turn_lines: Vec<_> = output.lines().filter(|line| line.starts_with("Turn:")).collect();
        assert_eq!(vec!["Turn: 0/2", "Turn: 1/2", "Turn: 2/2"], turn_lines);
    }
}
