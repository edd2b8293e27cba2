use crate::{
    pos::{MOORE_OFFSETS, ORTHOGONAL_OFFSETS},
    rule::Rule,
};

/// Border treatment, neighborhood and rule of a simulation, picked together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// The outer ring never changes; 4-neighborhood; simplified rule.
    #[default]
    FixedBorder,

    /// Every cell is evaluated; 8-neighborhood; Conway's rule. Border cells
    /// still refuse pending writes.
    FullGrid,
}

impl Variant {
    pub fn default_size(self) -> usize {
        match self {
            Variant::FixedBorder => 16,
            Variant::FullGrid => 32,
        }
    }

    pub fn neighbor_offsets(self) -> &'static [[isize; 2]] {
        match self {
            Variant::FixedBorder => ORTHOGONAL_OFFSETS,
            Variant::FullGrid => MOORE_OFFSETS,
        }
    }

    pub fn rule(self) -> Rule {
        match self {
            Variant::FixedBorder => Rule::Simplified,
            Variant::FullGrid => Rule::Conway,
        }
    }

    /// Whether the engine evaluates border cells at all.
    pub fn evaluates_border(self) -> bool {
        matches!(self, Variant::FullGrid)
    }

    /// Seed file alphabet.
    pub fn is_alive_char(self, c: u8) -> bool {
        match self {
            Variant::FixedBorder => c != b'#' && c != b' ',
            Variant::FullGrid => c == b'*',
        }
    }
}
