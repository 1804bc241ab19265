//! Piece catalog: the 7 falling-block kinds and their rotation states
//!
//! Each kind carries a fixed table of rotation states; a state is 4 offsets
//! from the piece's anchor. Kinds with rotational symmetry carry fewer
//! states (the O piece has one, the bar pieces two).

use crate::geometry::Point;

/// The 7 piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I, // long bar
    J,
    T,
    Z,
    S,
    L,
    O, // square
}

/// Block colors, assigned at spawn independently of the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Red,
    Green,
    Yellow,
    Blue,
    Orange,
}

const fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

const I_STATES: [[Point; 4]; 2] = [
    [p(0, 0), p(0, 1), p(0, 2), p(0, 3)],
    [p(-1, 1), p(0, 1), p(1, 1), p(2, 1)],
];

const J_STATES: [[Point; 4]; 4] = [
    [p(0, 0), p(0, 1), p(0, 2), p(-1, 2)],
    [p(-1, 0), p(-1, 1), p(0, 1), p(1, 1)],
    [p(0, 0), p(1, 0), p(0, 1), p(0, 2)],
    [p(-1, 1), p(0, 1), p(1, 1), p(1, 2)],
];

const T_STATES: [[Point; 4]; 4] = [
    [p(-1, 0), p(0, 0), p(1, 0), p(0, 1)],
    [p(0, 0), p(0, 1), p(-1, 1), p(0, 2)],
    [p(0, 0), p(-1, 1), p(0, 1), p(1, 1)],
    [p(0, 0), p(0, 1), p(1, 1), p(0, 2)],
];

// Z piece:  ZZ.    .Z
//           .ZZ    ZZ
//                  Z.
const Z_STATES: [[Point; 4]; 2] = [
    [p(-1, 0), p(0, 0), p(0, 1), p(1, 1)],
    [p(0, 0), p(0, 1), p(-1, 1), p(-1, 2)],
];

// S piece:  .SS    S.
//           SS.    SS
//                  .S
const S_STATES: [[Point; 4]; 2] = [
    [p(0, 0), p(1, 0), p(0, 1), p(-1, 1)],
    [p(0, 0), p(0, 1), p(1, 1), p(1, 2)],
];

const L_STATES: [[Point; 4]; 4] = [
    [p(0, 0), p(0, 1), p(0, 2), p(1, 2)],
    [p(-1, 1), p(-1, 0), p(0, 0), p(1, 0)],
    [p(-1, 0), p(0, 0), p(0, 1), p(0, 2)],
    [p(-1, 1), p(0, 1), p(1, 1), p(1, 0)],
];

const O_STATES: [[Point; 4]; 1] = [[p(0, 0), p(1, 0), p(0, 1), p(1, 1)]];

impl PieceKind {
    /// Get all piece kinds, for random selection
    pub fn all() -> [PieceKind; 7] {
        [
            PieceKind::I,
            PieceKind::J,
            PieceKind::T,
            PieceKind::Z,
            PieceKind::S,
            PieceKind::L,
            PieceKind::O,
        ]
    }

    /// Rotation states for this kind; each state is 4 anchor-relative offsets.
    /// Adjacent states are one rotation step apart, wrapping at the ends.
    pub fn states(&self) -> &'static [[Point; 4]] {
        match self {
            PieceKind::I => &I_STATES,
            PieceKind::J => &J_STATES,
            PieceKind::T => &T_STATES,
            PieceKind::Z => &Z_STATES,
            PieceKind::S => &S_STATES,
            PieceKind::L => &L_STATES,
            PieceKind::O => &O_STATES,
        }
    }
}

impl BlockColor {
    /// Get all block colors, for random selection
    pub fn all() -> [BlockColor; 5] {
        [
            BlockColor::Red,
            BlockColor::Green,
            BlockColor::Yellow,
            BlockColor::Blue,
            BlockColor::Orange,
        ]
    }
}
