//! Terminal rendering and input with crossterm
//!
//! Implements the game's [`Screen`] boundary: raw mode on the alternate
//! screen, cursor-addressed per-cell drawing, and non-blocking key polling.

use crate::board::{BOARD_HEIGHT, BOARD_WIDTH, Cell};
use crate::game::{Command, Screen};
use crate::geometry::Point;
use crate::tetromino::BlockColor;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// Solid block glyph for filled cells and the frame
const BLOCK: char = '█';

/// Top-left of the playfield; one column and row are left for the frame
const ORIGIN_X: u16 = 1;
const ORIGIN_Y: u16 = 1;

/// Crossterm-backed implementation of [`Screen`]
pub struct Tui {
    out: Stdout,
}

impl Tui {
    /// Take over the terminal: raw mode, alternate screen, hidden cursor
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(Self { out })
    }

    /// Give the terminal back; the inverse of [`Tui::new`]
    pub fn restore(&mut self) -> io::Result<()> {
        execute!(self.out, Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }

    /// Draw the white border around the playfield
    pub fn draw_frame(&mut self) -> io::Result<()> {
        let right = ORIGIN_X + BOARD_WIDTH as u16;
        let bottom = ORIGIN_Y + BOARD_HEIGHT as u16;
        queue!(self.out, SetForegroundColor(Color::White))?;
        for y in 0..=bottom {
            queue!(self.out, MoveTo(ORIGIN_X - 1, y), Print(BLOCK))?;
            queue!(self.out, MoveTo(right, y), Print(BLOCK))?;
        }
        for x in 0..=right {
            queue!(self.out, MoveTo(x, ORIGIN_Y - 1), Print(BLOCK))?;
            queue!(self.out, MoveTo(x, bottom), Print(BLOCK))?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }
}

fn color_of(block: BlockColor) -> Color {
    match block {
        BlockColor::Red => Color::Red,
        BlockColor::Green => Color::Green,
        BlockColor::Yellow => Color::Yellow,
        BlockColor::Blue => Color::Blue,
        BlockColor::Orange => Color::Rgb { r: 255, g: 165, b: 0 },
    }
}

impl Screen for Tui {
    fn draw_cell(&mut self, p: Point, cell: Cell) -> io::Result<()> {
        queue!(self.out, MoveTo(ORIGIN_X + p.x as u16, ORIGIN_Y + p.y as u16))?;
        match cell {
            Cell::Empty => queue!(self.out, Print(' '))?,
            Cell::Filled(color) => queue!(
                self.out,
                SetForegroundColor(color_of(color)),
                Print(BLOCK),
                ResetColor
            )?,
        }
        self.out.flush()
    }

    fn poll_command(&mut self) -> io::Result<Option<Command>> {
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Command::Quit));
            }
            let command = match key.code {
                KeyCode::Up | KeyCode::Enter => Some(Command::Rotate),
                KeyCode::Down => Some(Command::Down),
                KeyCode::Left => Some(Command::Left),
                KeyCode::Right => Some(Command::Right),
                KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
                _ => None,
            };
            if command.is_some() {
                return Ok(command);
            }
        }
        Ok(None)
    }
}
