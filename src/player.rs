use tracing::trace;

use crate::entity::{Nibble, Render, Wall};
use crate::grid::{Grid, Pos};
use crate::input::UserInput;
use crate::map::Map;

#[derive(Debug, Clone)]
pub struct Player {
    pos: Pos,
    x_speed: i32,
    y_speed: i32,
    frames: u32,
    frames_per_move: u32,
}

impl Player {
    pub const MARKER: char = '@';

    /// Starts at the grid's midpoint, standing still.
    pub fn new(grid: &Grid, frames_per_move: u32) -> Self {
        Self::at(Pos::new(grid.mid_width(), grid.mid_height()), frames_per_move)
    }

    pub fn at(pos: Pos, frames_per_move: u32) -> Self {
        Self {
            pos,
            x_speed: 0,
            y_speed: 0,
            frames: 0,
            frames_per_move: frames_per_move.max(1),
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn velocity(&self) -> (i32, i32) {
        (self.x_speed, self.y_speed)
    }

    pub fn update(&mut self, input: UserInput, grid: &mut Grid, map: &mut Map) {
        grid.clear_tile(self.pos);

        self.apply_input(input);

        self.frames += 1;
        if self.frames >= self.frames_per_move {
            self.frames = 0;
            self.step(grid, map);
        }

        self.render(grid);
    }

    fn apply_input(&mut self, input: UserInput) {
        let (dx, dy) = match input {
            UserInput::Left => (-1, 0),
            UserInput::Right => (1, 0),
            UserInput::Up => (0, -1),
            UserInput::Down => (0, 1),
            UserInput::None => return,
        };
        self.x_speed = dx;
        self.y_speed = dy;
    }

    fn step(&mut self, grid: &Grid, map: &mut Map) {
        let next = Pos::new(self.pos.x + self.x_speed, self.pos.y + self.y_speed);
        if grid.is_out_of_bounds(next) || grid.is_collision(next, Wall::MARKER) {
            trace!(x = next.x, y = next.y, "move blocked");
            return;
        }
        self.pos = next;
        if grid.is_collision(next, Nibble::MARKER) {
            map.collide(next);
        }
    }
}

impl Render for Player {
    fn render(&self, grid: &mut Grid) {
        grid.set_tile(self.pos, Self::MARKER);
    }
}
