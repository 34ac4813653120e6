use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use tracing::warn;
use unicode_width::UnicodeWidthStr;

use crate::entity::{Nibble, Wall};
use crate::game::Game;
use crate::grid::Grid;
use crate::player::Player;

/// Terminal columns per grid cell.
pub const CELL_W: usize = 2;

pub fn glyph_for(tile: char) -> (&'static str, Color) {
    match tile {
        Wall::MARKER => ("██", Color::Blue),
        Nibble::MARKER => ("· ", Color::White),
        Player::MARKER => ("😃", Color::Yellow),
        _ => ("  ", Color::Reset),
    }
}

pub struct Renderer {
    last: Vec<char>,
    last_hud: String,
    needs_full: bool,
    too_small: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    pub fn new(grid: &Grid) -> Self {
        Self {
            last: vec![' '; grid.tiles().len()],
            last_hud: String::new(),
            needs_full: true,
            too_small: false,
            origin_x: 0,
            origin_y: 1,
        }
    }

    /// Forces a full redraw on the next frame.
    pub fn invalidate(&mut self) {
        self.needs_full = true;
    }

    fn needed(grid: &Grid) -> (u16, u16) {
        let w = (grid.width() as usize * CELL_W) as u16;
        let h = (grid.height() + 2) as u16;
        (w, h)
    }

    pub fn render<W: Write>(&mut self, out: &mut W, game: &Game, term: (u16, u16)) -> io::Result<()> {
        let grid = game.grid();
        let (needed_w, needed_h) = Self::needed(grid);
        let (term_w, term_h) = term;

        out.queue(MoveTo(0, 0))?;

        if term_w < needed_w || term_h < needed_h {
            if !self.too_small {
                warn!(term_w, term_h, needed_w, needed_h, "terminal too small");
                self.too_small = true;
            }
            out.queue(Clear(ClearType::All))?;
            out.queue(Print(format!(
                "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
                needed_w, needed_h, term_w, term_h
            )))?;
            out.flush()?;
            self.needs_full = true;
            return Ok(());
        }
        if self.too_small {
            self.too_small = false;
            out.queue(Clear(ClearType::All))?;
        }

        let origin_x = (term_w - needed_w) / 2;
        let origin_y = (term_h - needed_h) / 2 + 1;
        if origin_x != self.origin_x || origin_y != self.origin_y {
            self.origin_x = origin_x;
            self.origin_y = origin_y;
            out.queue(Clear(ClearType::All))?;
            self.needs_full = true;
        }

        let hud = format!("Nibbles: {}  (q to quit)", game.remaining());
        if self.needs_full || hud != self.last_hud {
            out.queue(MoveTo(self.origin_x, self.origin_y - 1))?;
            out.queue(SetForegroundColor(Color::White))?;
            out.queue(Clear(ClearType::CurrentLine))?;
            out.queue(Print(&hud))?;
            out.queue(ResetColor)?;
            self.last_hud = hud;
        }

        let width = grid.width() as usize;
        for (idx, &tile) in grid.tiles().iter().enumerate() {
            if self.needs_full || tile != self.last[idx] {
                self.last[idx] = tile;
                self.draw_cell(out, idx % width, idx / width, tile)?;
            }
        }
        self.needs_full = false;

        out.flush()
    }

    fn draw_cell<W: Write>(&self, out: &mut W, x: usize, y: usize, tile: char) -> io::Result<()> {
        let (text, color) = glyph_for(tile);
        let x_pos = self.origin_x + (x * CELL_W) as u16;
        let y_pos = self.origin_y + y as u16;
        out.queue(MoveTo(x_pos, y_pos))?;
        out.queue(SetForegroundColor(color))?;
        out.queue(Print(text))?;
        let w = UnicodeWidthStr::width(text);
        for _ in w..CELL_W {
            out.queue(Print(' '))?;
        }
        out.queue(ResetColor)?;
        Ok(())
    }

    /// Prints `message` on the line under the board.
    pub fn render_end<W: Write>(
        &self,
        out: &mut W,
        game: &Game,
        term: (u16, u16),
        message: &str,
    ) -> io::Result<()> {
        let (needed_w, needed_h) = Self::needed(game.grid());
        let (term_w, term_h) = term;
        if term_w < needed_w || term_h < needed_h {
            out.queue(MoveTo(0, needed_h))?;
        } else {
            out.queue(MoveTo(self.origin_x, self.origin_y + game.grid().height() as u16))?;
        }
        out.queue(Print(format!("{} (press q to quit)", message)))?;
        out.flush()
    }
}
