//! Fixed-size character grid that every entity renders onto.

use thiserror::Error;

pub const EMPTY: char = ' ';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid of {width}x{height} is too small, need at least 3x3")]
    TooSmall { width: i32, height: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<char>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width < 3 || height < 3 {
            return Err(GridError::TooSmall { width, height });
        }
        Ok(Self {
            width,
            height,
            tiles: vec![EMPTY; (width * height) as usize],
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn mid_width(&self) -> i32 {
        self.width / 2
    }

    pub fn mid_height(&self) -> i32 {
        self.height / 2
    }

    /// Row-major view of every tile.
    pub fn tiles(&self) -> &[char] {
        &self.tiles
    }

    fn idx(&self, pos: Pos) -> Option<usize> {
        if self.is_out_of_bounds(pos) {
            return None;
        }
        Some((pos.y * self.width + pos.x) as usize)
    }

    pub fn is_out_of_bounds(&self, pos: Pos) -> bool {
        pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height
    }

    pub fn get_tile(&self, pos: Pos) -> Option<char> {
        self.idx(pos).map(|i| self.tiles[i])
    }

    pub fn set_tile(&mut self, pos: Pos, ch: char) {
        if let Some(i) = self.idx(pos) {
            self.tiles[i] = ch;
        }
    }

    pub fn clear_tile(&mut self, pos: Pos) {
        self.set_tile(pos, EMPTY);
    }

    pub fn is_collision(&self, pos: Pos, ch: char) -> bool {
        self.get_tile(pos) == Some(ch)
    }

    /// Draws the outline of the rectangle spanning both corners, inclusive.
    pub fn draw_rectangle(&mut self, top_left: Pos, bottom_right: Pos, ch: char) {
        for x in top_left.x..=bottom_right.x {
            self.set_tile(Pos::new(x, top_left.y), ch);
            self.set_tile(Pos::new(x, bottom_right.y), ch);
        }
        for y in top_left.y..=bottom_right.y {
            self.set_tile(Pos::new(top_left.x, y), ch);
            self.set_tile(Pos::new(bottom_right.x, y), ch);
        }
    }
}
