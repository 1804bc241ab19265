//! blockfall - a falling-block puzzle for the terminal

mod board;
mod game;
mod geometry;
mod piece;
mod spawner;
mod tetromino;
mod ui;

use game::{Game, GameEnd};
use std::io;
use ui::Tui;

fn main() -> io::Result<()> {
    // Log to a session file; the terminal belongs to the game while it runs
    let session_id: u32 = rand::random();
    let log_dir = std::env::temp_dir().join("blockfall");
    let _ = std::fs::create_dir_all(&log_dir);
    let log_file = format!("{:08x}.log", session_id);

    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("blockfall=debug".parse().unwrap()),
        )
        .with_ansi(false)
        .init();

    tracing::info!(
        "blockfall starting up, session={:08x}, log={}",
        session_id,
        log_dir.join(&log_file).display()
    );

    let mut screen = Tui::new()?;
    screen.draw_frame()?;

    let mut game = Game::new();
    let result = game.run(&mut screen);

    // Restore the terminal before reporting anything
    screen.restore()?;

    match result? {
        GameEnd::ToppedOut => println!("Game over! The stack reached the top."),
        GameEnd::Quit => println!("Thanks for playing!"),
    }
    Ok(())
}
