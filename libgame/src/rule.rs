use crate::board::TileState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// 4-neighbor rule: 0 or 4 kills, 2 or 3 gives life, 1 writes nothing.
    Simplified,

    /// B3/S23.
    Conway,
}

impl Rule {
    /// Next state for a cell, or `None` when the rule leaves the pending slot
    /// alone.
    pub fn next_state(self, tile: TileState, alive_neighbor_count: usize) -> Option<TileState> {
        match self {
            Rule::Simplified => match alive_neighbor_count {
                0 | 4 => Some(TileState::Dead),
                2 | 3 => Some(TileState::Alive),
                _ => None,
            },
            Rule::Conway => {
                let alive = match tile {
                    TileState::Alive => matches!(alive_neighbor_count, 2 | 3),
                    TileState::Dead => alive_neighbor_count == 3,
                };

                Some(TileState::from(alive))
            }
        }
    }
}

/// What the engine does when the rule declines to write a pending value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingPolicy {
    /// Leave the slot as is. On the first pass it still holds the seeded
    /// value, so an initially alive cell with one neighbor survives once.
    #[default]
    Preserve,

    /// Write dead.
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conway_rule() {
        for n in 0..=8 {
            let survives = Rule::Conway.next_state(TileState::Alive, n);
            let born = Rule::Conway.next_state(TileState::Dead, n);

            assert_eq!(Some(TileState::from(n == 2 || n == 3)), survives, "alive, n = {n}");
            assert_eq!(Some(TileState::from(n == 3)), born, "dead, n = {n}");
        }
    }

    #[test]
    fn simplified_rule_ignores_current_state() {
        for tile in [TileState::Alive, TileState::Dead] {
            assert_eq!(Some(TileState::Dead), Rule::Simplified.next_state(tile, 0));
            assert_eq!(None, Rule::Simplified.next_state(tile, 1));
            assert_eq!(Some(TileState::Alive), Rule::Simplified.next_state(tile, 2));
            assert_eq!(Some(TileState::Alive), Rule::Simplified.next_state(tile, 3));
            assert_eq!(Some(TileState::Dead), Rule::Simplified.next_state(tile, 4));
        }
    }
}
