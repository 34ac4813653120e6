use crate::grid::{Grid, Pos};

/// Anything that draws itself onto the grid once per frame.
pub trait Render {
    fn render(&self, grid: &mut Grid);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    pub pos: Pos,
}

impl Wall {
    pub const MARKER: char = '#';

    pub const fn at(x: i32, y: i32) -> Self {
        Self { pos: Pos::new(x, y) }
    }
}

impl Render for Wall {
    fn render(&self, grid: &mut Grid) {
        grid.set_tile(self.pos, Self::MARKER);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nibble {
    pub pos: Pos,
}

impl Nibble {
    pub const MARKER: char = '.';

    pub const fn at(x: i32, y: i32) -> Self {
        Self { pos: Pos::new(x, y) }
    }

    pub fn overlaps(&self, pos: Pos) -> bool {
        self.pos == pos
    }
}

impl Render for Nibble {
    fn render(&self, grid: &mut Grid) {
        grid.set_tile(self.pos, Self::MARKER);
    }
}
