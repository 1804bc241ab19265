//! Game loop and timing
//!
//! One piece is live at a time. The fall loop interleaves non-blocking
//! input polling with a fixed gravity cadence; a piece that can no longer
//! move down is handed back to the board for locking and line clearing.
//! The outer loop spawns pieces until one no longer fits.

use crate::board::{BOARD_HEIGHT, BOARD_WIDTH, Board, Cell};
use crate::geometry::Point;
use crate::piece::{Dir, Piece, Spin};
use crate::spawner::Spawner;
use std::io;
use std::thread;
use std::time::{Duration, Instant};

/// Time between gravity steps
const GRAVITY_INTERVAL: Duration = Duration::from_millis(500);
/// Sleep per loop iteration; bounds CPU without hurting input latency
const POLL_SLEEP: Duration = Duration::from_millis(4);

/// A player command, as reported by the input side of a [`Screen`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Rotate,
    Down,
    Left,
    Right,
    Quit,
}

/// Render/input boundary the game loop drives
///
/// `draw_cell` must be idempotent (redundant calls are harmless) and
/// `poll_command` must never wait for input.
pub trait Screen {
    /// Render one board cell, filled or empty
    fn draw_cell(&mut self, p: Point, cell: Cell) -> io::Result<()>;
    /// Return a pending command if one is available, without blocking
    fn poll_command(&mut self) -> io::Result<Option<Command>>;
}

/// Why the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// A fresh piece could not be placed at the spawn anchor
    ToppedOut,
    /// The player asked to leave
    Quit,
}

/// What ended one piece's fall
enum FallOutcome {
    Landed,
    Quit,
}

/// The game: the settled board plus the randomizer feeding new pieces
pub struct Game {
    board: Board,
    spawner: Spawner,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            spawner: Spawner::new(),
        }
    }

    /// Create a game with a fixed piece sequence
    #[allow(dead_code)]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            board: Board::new(),
            spawner: Spawner::with_seed(seed),
        }
    }

    /// Run pieces until the board tops out or the player quits
    pub fn run<S: Screen>(&mut self, screen: &mut S) -> io::Result<GameEnd> {
        self.draw_board(screen)?;
        loop {
            let mut piece = Piece::spawn(self.spawner.next_kind(), self.spawner.next_color());
            if self.board.collides(&piece.cells()) {
                tracing::info!("no room to spawn {:?}, game over", piece.kind);
                return Ok(GameEnd::ToppedOut);
            }
            tracing::debug!("spawned {:?} in {:?}", piece.kind, piece.color);

            if let FallOutcome::Quit = self.fall(screen, &mut piece)? {
                tracing::info!("player quit");
                return Ok(GameEnd::Quit);
            }

            self.board.lock(&piece.cells(), piece.color);
            if self.board.clean_full_lines() {
                tracing::info!("cleared full lines");
                self.draw_board(screen)?;
            }
        }
    }

    /// Drive one piece from spawn until it lands
    fn fall<S: Screen>(&mut self, screen: &mut S, piece: &mut Piece) -> io::Result<FallOutcome> {
        let mut last_drop = Instant::now();
        draw_piece(screen, piece)?;
        loop {
            if let Some(command) = screen.poll_command()? {
                let before = piece.clone();
                let moved = match command {
                    Command::Rotate => piece.rotate(Spin::Clockwise, &self.board),
                    Command::Down => piece.shift(Dir::Down, &self.board),
                    Command::Left => piece.shift(Dir::Left, &self.board),
                    Command::Right => piece.shift(Dir::Right, &self.board),
                    Command::Quit => return Ok(FallOutcome::Quit),
                };
                if moved {
                    erase_piece(screen, &before)?;
                    draw_piece(screen, piece)?;
                }
            }

            if last_drop.elapsed() >= GRAVITY_INTERVAL {
                let before = piece.clone();
                if !piece.shift(Dir::Down, &self.board) {
                    return Ok(FallOutcome::Landed);
                }
                erase_piece(screen, &before)?;
                draw_piece(screen, piece)?;
                last_drop = Instant::now();
            }

            thread::sleep(POLL_SLEEP);
        }
    }

    /// Redraw the whole grid of settled cells
    fn draw_board<S: Screen>(&self, screen: &mut S) -> io::Result<()> {
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                screen.draw_cell(Point::new(x as i32, y as i32), self.board.cell(x, y))?;
            }
        }
        Ok(())
    }
}

fn draw_piece<S: Screen>(screen: &mut S, piece: &Piece) -> io::Result<()> {
    for p in piece.cells() {
        screen.draw_cell(p, Cell::Filled(piece.color))?;
    }
    Ok(())
}

fn erase_piece<S: Screen>(screen: &mut S, piece: &Piece) -> io::Result<()> {
    for p in piece.cells() {
        screen.draw_cell(p, Cell::Empty)?;
    }
    Ok(())
}
