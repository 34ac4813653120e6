use std::io::{Stdout, Write};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use tracing::info;

use crate::config::Config;
use crate::game::{Game, GameState, END_MESSAGE};
use crate::input::{map_key, InputSampler, KeyAction};
use crate::term::renderer::Renderer;

/// Drives the game at `config.fps` until it is won or the player quits.
pub fn run(stdout: &mut Stdout, config: &Config) -> Result<()> {
    let mut rng = rand::thread_rng();
    let mut game = Game::new(&mut rng, config.frames_per_move()).context("Failed to build maze")?;
    let mut renderer = Renderer::new(game.grid());
    let mut sampler = InputSampler::new();
    let frame_time = Duration::from_micros(1_000_000 / config.fps.max(1));

    loop {
        let frame_start = Instant::now();
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                    match map_key(key) {
                        Some(KeyAction::Quit) => {
                            info!("quit before finishing");
                            return Ok(());
                        }
                        Some(KeyAction::Move(dir)) => sampler.record(dir),
                        None => {}
                    }
                }
                Event::Resize(_, _) => renderer.invalidate(),
                _ => {}
            }
        }

        let state = game.frame(sampler.take());
        let size = terminal::size()?;
        renderer.render(stdout, &game, size)?;

        if state == GameState::Ended {
            renderer.render_end(stdout, &game, size, END_MESSAGE)?;
            return wait_for_quit(stdout);
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

fn wait_for_quit(stdout: &mut Stdout) -> Result<()> {
    stdout.flush()?;
    loop {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && map_key(key) == Some(KeyAction::Quit) {
                    return Ok(());
                }
            }
        }
    }
}
