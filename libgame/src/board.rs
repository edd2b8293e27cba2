use itertools::Itertools;
use rand::Rng;

use super::{pos::Position, variant::Variant};

/// Largest board side accepted by [`GameBoard::new`].
pub const MAX_SIZE: usize = 4096;

/// Odds out of 16 that the random initializer makes a cell alive.
const RANDOM_ALIVE_SIXTEENTHS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    size: usize,
    variant: Variant,
    cells: Vec<Cell>,
    turns: u32,
}

impl GameBoard {
    /// An all-dead `size`×`size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is smaller than 3, since such a board has no interior,
    /// or larger than [`MAX_SIZE`].
    pub fn new(size: usize, variant: Variant) -> Self {
        assert!(
            (3..=MAX_SIZE).contains(&size),
            "board size must be between 3 and {MAX_SIZE}, got {size}"
        );

        let cell_count = size
            .checked_mul(size)
            .unwrap_or_else(|| panic!("{size}x{size} board overflows"));

        Self {
            size,
            variant,
            cells: vec![Cell::default(); cell_count],
            turns: 0,
        }
    }

    /// Seeds every interior cell alive with probability 2/16. The border stays
    /// dead for both variants.
    pub fn new_random<R>(size: usize, variant: Variant, rng: &mut R) -> Self
    where
        R: Rng,
    {
        let mut board = Self::new(size, variant);

        for pos in board.interior_positions().collect_vec() {
            let alive = rng.random_range(0..16) < RANDOM_ALIVE_SIXTEENTHS;
            board.seed(pos, TileState::from(alive));
        }

        log::debug!(
            "Seeded random {size}x{size} board with {} alive cells",
            board.alive_count()
        );

        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn set_turns(&mut self, turns: u32) {
        self.turns = turns;
    }

    /// Committed state of a cell, `None` outside the board.
    pub fn get_current<P>(&self, pos: P) -> Option<TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        Some(self.cells[index].current)
    }

    /// Staged state of a cell, `None` outside the board.
    pub fn get_pending<P>(&self, pos: P) -> Option<TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        Some(self.cells[index].pending)
    }

    /// Stages the next state of a cell. Returns whether the write was accepted:
    /// positions off the board never are, and on a full-grid board neither
    /// are border positions.
    pub fn set_pending<P>(&mut self, pos: P, state: TileState) -> bool
    where
        P: Into<Position>,
    {
        let pos = pos.into();

        if self.variant == Variant::FullGrid && self.is_border(pos) {
            return false;
        }

        match self.pos_to_index(pos) {
            Some(index) => {
                self.cells[index].pending = state;
                true
            }
            None => false,
        }
    }

    /// Initializer write: sets both the committed and the staged slot.
    pub fn seed<P>(&mut self, pos: P, state: TileState) -> bool
    where
        P: Into<Position>,
    {
        match self.pos_to_index(pos) {
            Some(index) => {
                self.cells[index] = Cell {
                    current: state,
                    pending: state,
                };
                true
            }
            None => false,
        }
    }

    /// Moves every staged state into the committed slot and clears the staged
    /// slot.
    pub fn commit_generation(&mut self) {
        for cell in &mut self.cells {
            cell.current = std::mem::take(&mut cell.pending);
        }
    }

    /// Live cells around `pos` in this board's neighborhood. Reads committed
    /// states only, positions off the board count as dead.
    pub fn count_live_neighbors<P>(&self, pos: P) -> usize
    where
        P: Into<Position>,
    {
        let pos = pos.into();

        self.variant
            .neighbor_offsets()
            .iter()
            .filter_map(|&offset| self.get_current(pos.offset(offset)?))
            .filter(|tile| tile.is_alive())
            .count()
    }

    pub fn is_border<P>(&self, pos: P) -> bool
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();
        x == 0 || y == 0 || x == self.size - 1 || y == self.size - 1
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.current.is_alive()).count()
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, TileState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.index_to_pos(index), cell.current))
    }

    /// Committed states row by row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = (Position, TileState)>> {
        (0..self.size).map(move |y| {
            (0..self.size).map(move |x| {
                let pos = Position { x, y };
                (pos, self.cells[x + y * self.size].current)
            })
        })
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        (0..self.size)
            .cartesian_product(0..self.size)
            .map(|(y, x)| Position { x, y })
    }

    pub fn interior_positions(&self) -> impl Iterator<Item = Position> + use<> {
        let last = self.size - 1;
        (1..last)
            .cartesian_product(1..last)
            .map(|(y, x)| Position { x, y })
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();

        if x >= self.size {
            return None;
        }

        if y >= self.size {
            return None;
        }

        Some(x + (y * self.size))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let y = index / self.size;
        let x = index % self.size;
        Position { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Cell {
    current: TileState,
    pending: TileState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}

impl TileState {
    pub fn is_alive(self) -> bool {
        self == TileState::Alive
    }
}

impl From<bool> for TileState {
    fn from(alive: bool) -> Self {
        if alive { TileState::Alive } else { TileState::Dead }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn get_current_is_bounds_checked() {
        let board = GameBoard::new(5, Variant::FullGrid);
        assert_eq!(Some(TileState::Dead), board.get_current((4, 4)));
        assert_eq!(None, board.get_current((5, 0)));
        assert_eq!(None, board.get_current((0, 5)));
    }

    #[test]
    #[should_panic(expected = "board size must be between 3 and 4096")]
    fn oversized_board_panics_before_allocating() {
        GameBoard::new(usize::MAX, Variant::FullGrid);
    }

    #[test]
    fn largest_board_is_allowed() {
        let board = GameBoard::new(MAX_SIZE, Variant::FixedBorder);
        assert_eq!(Some(TileState::Dead), board.get_current((MAX_SIZE - 1, MAX_SIZE - 1)));
    }

    #[test]
    fn full_grid_refuses_border_writes() {
        let mut board = GameBoard::new(5, Variant::FullGrid);

        assert!(!board.set_pending((0, 2), TileState::Alive));
        assert!(!board.set_pending((4, 2), TileState::Alive));
        assert!(!board.set_pending((2, 0), TileState::Alive));
        assert!(!board.set_pending((2, 4), TileState::Alive));
        assert!(!board.set_pending((7, 7), TileState::Alive));
        assert!(board.set_pending((2, 2), TileState::Alive));

        board.commit_generation();
        assert_eq!(1, board.alive_count());
        assert_eq!(Some(TileState::Alive), board.get_current((2, 2)));
    }

    #[test]
    fn fixed_border_accepts_border_writes() {
        let mut board = GameBoard::new(5, Variant::FixedBorder);
        assert!(board.set_pending((0, 0), TileState::Alive));
        assert!(!board.set_pending((5, 0), TileState::Alive));
    }

    #[test]
    fn pending_is_invisible_until_commit() {
        let mut board = GameBoard::new(5, Variant::FullGrid);
        board.set_pending((1, 2), TileState::Alive);
        board.set_pending((3, 2), TileState::Alive);

        assert_eq!(Some(TileState::Dead), board.get_current((1, 2)));
        assert_eq!(0, board.count_live_neighbors((2, 2)));

        board.commit_generation();
        assert_eq!(2, board.count_live_neighbors((2, 2)));
        assert_eq!(Some(TileState::Dead), board.get_pending((1, 2)));
    }

    #[test]
    fn seed_sets_both_slots() {
        let mut board = GameBoard::new(4, Variant::FixedBorder);
        board.seed((1, 1), TileState::Alive);

        assert_eq!(Some(TileState::Alive), board.get_current((1, 1)));
        assert_eq!(Some(TileState::Alive), board.get_pending((1, 1)));

        board.commit_generation();
        assert_eq!(Some(TileState::Alive), board.get_current((1, 1)));

        board.commit_generation();
        assert_eq!(Some(TileState::Dead), board.get_current((1, 1)));
    }

    #[test]
    fn orthogonal_neighbors_skip_diagonals() {
        let mut board = GameBoard::new(5, Variant::FixedBorder);
        for pos in board.positions().collect_vec() {
            board.seed(pos, TileState::Alive);
        }

        assert_eq!(4, board.count_live_neighbors((2, 2)));
        assert_eq!(2, board.count_live_neighbors((0, 0)));
    }

    #[test]
    fn moore_neighbors_clip_at_edges() {
        let mut board = GameBoard::new(5, Variant::FullGrid);
        for pos in board.positions().collect_vec() {
            board.seed(pos, TileState::Alive);
        }

        assert_eq!(8, board.count_live_neighbors((2, 2)));
        assert_eq!(5, board.count_live_neighbors((2, 0)));
        assert_eq!(3, board.count_live_neighbors((4, 4)));
    }

    #[test]
    fn random_board_keeps_border_dead() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = GameBoard::new_random(16, Variant::FixedBorder, &mut rng);

        let border_alive = board
            .enumerate_tiles()
            .any(|(pos, tile)| board.is_border(pos) && tile.is_alive());
        assert!(!border_alive);

        // 196 interior cells at 1/8 odds; anything outside this range means the
        // odds are wrong rather than unlucky.
        let alive = board.alive_count();
        assert!((5..=60).contains(&alive), "{alive} alive cells");
    }

    #[test]
    fn random_board_is_reproducible() {
        let a = GameBoard::new_random(32, Variant::FullGrid, &mut StdRng::seed_from_u64(42));
        let b = GameBoard::new_random(32, Variant::FullGrid, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn rows_are_row_major() {
        let mut board = GameBoard::new(3, Variant::FullGrid);
        board.seed((2, 0), TileState::Alive);

        let first_row = board.rows().next().unwrap().map(|(_, tile)| tile).collect_vec();
        assert_eq!(vec![TileState::Dead, TileState::Dead, TileState::Alive], first_row);
        assert_eq!(3, board.rows().count());
    }

    proptest! {
        /// Whatever was staged last is what a commit exposes; anything not
        /// staged this pass reads back dead.
        #[test]
        fn commit_exposes_last_pending_write(
            writes in prop::collection::vec((0..6usize, 0..6usize, any::<bool>()), 0..64)
        ) {
            let mut board = GameBoard::new(6, Variant::FixedBorder);
            let mut expected = vec![TileState::Dead; 36];

            for (x, y, alive) in writes {
                board.set_pending((x, y), TileState::from(alive));
                expected[x + y * 6] = TileState::from(alive);
            }
            board.commit_generation();

            for (pos, tile) in board.enumerate_tiles() {
                prop_assert_eq!(expected[pos.x + pos.y * 6], tile);
            }
        }
    }
}
