//! Active falling piece logic
//!
//! Movement and rotation are speculative: the piece mutates itself, asks the
//! board whether the new cells fit, and restores the previous state if they
//! do not. Callers only ever observe the old state or the new one.

use crate::board::{BOARD_WIDTH, Board};
use crate::geometry::Point;
use crate::tetromino::{BlockColor, PieceKind};

/// Rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Clockwise,
    #[allow(dead_code)]
    CounterClockwise,
}

/// Translation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Down,
    Left,
    Right,
}

impl Dir {
    fn delta(self) -> Point {
        match self {
            Dir::Down => Point::new(0, 1),
            Dir::Left => Point::new(-1, 0),
            Dir::Right => Point::new(1, 0),
        }
    }
}

/// An active falling piece
#[derive(Debug, Clone)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: BlockColor,
    /// Index into the kind's rotation-state table
    rotation: usize,
    /// Board position the state offsets are relative to
    anchor: Point,
}

impl Piece {
    /// Create a new piece at the spawn anchor: horizontal center, top row
    pub fn spawn(kind: PieceKind, color: BlockColor) -> Self {
        Self {
            kind,
            color,
            rotation: 0,
            anchor: Point::new(BOARD_WIDTH as i32 / 2, 0),
        }
    }

    /// Get the absolute positions of all 4 blocks
    pub fn cells(&self) -> [Point; 4] {
        self.kind.states()[self.rotation].map(|offset| self.anchor + offset)
    }

    /// Try to rotate one step, returns true if the piece moved
    ///
    /// The rotation index wraps in both directions; a counter-clockwise step
    /// from state 0 lands on the last state.
    pub fn rotate(&mut self, spin: Spin, board: &Board) -> bool {
        let from = self.rotation;
        let count = self.kind.states().len();
        self.rotation = match spin {
            Spin::Clockwise => (from + 1) % count,
            Spin::CounterClockwise => (from + count - 1) % count,
        };
        if board.collides(&self.cells()) {
            self.rotation = from;
            return false;
        }
        true
    }

    /// Try to move one cell in a direction, returns true if the piece moved
    pub fn shift(&mut self, dir: Dir, board: &Board) -> bool {
        let from = self.anchor;
        self.anchor = from + dir.delta();
        if board.collides(&self.cells()) {
            self.anchor = from;
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_HEIGHT;

    #[test]
    fn test_spawn_anchor() {
        let piece = Piece::spawn(PieceKind::T, BlockColor::Red);
        assert_eq!(piece.anchor, Point::new(10, 0));
        assert_eq!(piece.rotation, 0);
    }

    #[test]
    fn test_cells_offset_from_anchor() {
        let piece = Piece::spawn(PieceKind::O, BlockColor::Blue);
        assert_eq!(
            piece.cells(),
            [
                Point::new(10, 0),
                Point::new(11, 0),
                Point::new(10, 1),
                Point::new(11, 1),
            ]
        );
    }

    #[test]
    fn test_rotation_wraps_clockwise() {
        let board = Board::new();
        // Keep clear of the top edge so every state fits
        let mut piece = Piece::spawn(PieceKind::J, BlockColor::Green);
        for _ in 0..5 {
            piece.shift(Dir::Down, &board);
        }
        let states = piece.kind.states().len();
        for _ in 0..states {
            assert!(piece.rotate(Spin::Clockwise, &board));
        }
        assert_eq!(piece.rotation, 0);
    }

    #[test]
    fn test_rotation_wraps_counter_clockwise_from_zero() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::J, BlockColor::Green);
        for _ in 0..5 {
            piece.shift(Dir::Down, &board);
        }
        assert!(piece.rotate(Spin::CounterClockwise, &board));
        assert_eq!(piece.rotation, piece.kind.states().len() - 1);
    }

    #[test]
    fn test_blocked_rotation_reverts() {
        let mut board = Board::new();
        // Vertical bar at the spawn column; its horizontal state needs (9, 1)
        board.lock(&[Point::new(9, 1)], BlockColor::Red);
        let mut piece = Piece::spawn(PieceKind::I, BlockColor::Blue);
        let cells_before = piece.cells();

        assert!(!piece.rotate(Spin::Clockwise, &board));
        assert_eq!(piece.rotation, 0);
        assert_eq!(piece.cells(), cells_before);
    }

    #[test]
    fn test_shift_stops_at_left_wall() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::I, BlockColor::Red);
        let mut moved = 0;
        while piece.shift(Dir::Left, &board) {
            moved += 1;
        }
        assert_eq!(moved, 10);
        assert_eq!(piece.anchor.x, 0);
        // The failed shift left the anchor where it was
        assert!(!piece.shift(Dir::Left, &board));
        assert_eq!(piece.anchor.x, 0);
    }

    #[test]
    fn test_shift_blocked_by_settled_cell() {
        let mut board = Board::new();
        // Directly under the square's lower-left cell
        board.lock(&[Point::new(10, 2)], BlockColor::Green);
        let mut piece = Piece::spawn(PieceKind::O, BlockColor::Red);
        let cells_before = piece.cells();

        assert!(!piece.shift(Dir::Down, &board));
        assert_eq!(piece.cells(), cells_before);
    }

    #[test]
    fn test_shift_down_stops_on_bottom_row() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::O, BlockColor::Yellow);
        let mut moved = 0;
        while piece.shift(Dir::Down, &board) {
            moved += 1;
        }
        // The square occupies rows y and y+1 from anchor (10, 0), so it
        // comes to rest with the anchor at 18 and its lowest cells on 19
        assert_eq!(moved, 18);
        assert_eq!(piece.anchor, Point::new(10, 18));
        let lowest = piece.cells().iter().map(|p| p.y).max().unwrap();
        assert_eq!(lowest, BOARD_HEIGHT as i32 - 1);
        assert!(!piece.shift(Dir::Down, &board));
        assert_eq!(piece.anchor, Point::new(10, 18));
    }

    #[test]
    fn test_spawn_collision_when_top_is_full() {
        let mut board = Board::new();
        for y in 0..4 {
            for x in 0..BOARD_WIDTH {
                board.lock(&[Point::new(x as i32, y)], BlockColor::Green);
            }
        }
        for kind in PieceKind::all() {
            let piece = Piece::spawn(kind, BlockColor::Red);
            assert!(board.collides(&piece.cells()), "{:?} should not fit", kind);
        }
    }
}
