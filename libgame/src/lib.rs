use board::{GameBoard, TileState};
use itertools::Either;
use pos::Position;
use rule::{PendingPolicy, Rule};

pub mod board;
pub mod pos;
pub mod rule;
pub mod seed;
pub mod variant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub board: GameBoard,
    pub pending_policy: PendingPolicy,
    generation: u64,
}

impl Game {
    pub fn new(board: GameBoard, pending_policy: PendingPolicy) -> Self {
        Self {
            board,
            pending_policy,
            generation: 0,
        }
    }

    /// Number of generations computed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Computes one generation. Every eligible cell stages its next state from
    /// the committed states around it, then the whole board commits at once.
    pub fn tick(&mut self) {
        let variant = self.board.variant();
        let rule = variant.rule();

        let positions = if variant.evaluates_border() {
            Either::Left(self.board.positions())
        } else {
            Either::Right(self.board.interior_positions())
        };

        for tile_pos in positions {
            self.tick_tile(tile_pos, rule);
        }

        self.board.commit_generation();
        self.generation += 1;

        log::trace!(
            "Committed generation {} with {} alive cells",
            self.generation,
            self.board.alive_count()
        );
    }

    /// Runs turns `0..=turns`. Each turn hands the committed board to
    /// `on_frame` and then computes the next generation.
    pub fn run<F, E>(&mut self, mut on_frame: F) -> Result<(), E>
    where
        F: FnMut(&Self, u32) -> Result<(), E>,
    {
        let turns = self.board.turns();
        log::debug!("Running {} turns", u64::from(turns) + 1);

        for current in 0..=turns {
            on_frame(self, current)?;
            self.tick();
        }

        Ok(())
    }

    fn tick_tile(&mut self, tile_pos: Position, rule: Rule) {
        let alive_neighbor_count = self.board.count_live_neighbors(tile_pos);
        let tile = self.board.get_current(tile_pos).unwrap_or_default();

        let next = match (rule.next_state(tile, alive_neighbor_count), self.pending_policy) {
            (Some(next), _) => next,
            (None, PendingPolicy::Preserve) => return,
            (None, PendingPolicy::Clear) => TileState::Dead,
        };

        self.board.set_pending(tile_pos, next);
    }
}
