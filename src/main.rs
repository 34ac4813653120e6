use std::io;

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;

use nibble_maze::{logging, term, Config};

fn main() -> Result<()> {
    let config = Config::from_env();
    let _guard = logging::init(&config.log_dir)?;
    tracing::info!(fps = config.fps, "starting");

    let mut stdout = io::stdout();
    terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    stdout
        .execute(EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;
    stdout.execute(Hide)?;

    let result = term::run(&mut stdout, &config);

    // Always try to restore terminal state.
    let _ = stdout.execute(Show);
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        tracing::error!("{:#}", err);
    }
    result
}
