use rand::Rng;
use tracing::info;

use crate::grid::{Grid, GridError};
use crate::input::UserInput;
use crate::map::Map;
use crate::player::Player;

pub const GRID_W: i32 = 40;
pub const GRID_H: i32 = 20;
pub const END_MESSAGE: &str = "You ate all the nibbles! Yum!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    Ended,
}

pub struct Game {
    grid: Grid,
    map: Map,
    player: Player,
    state: GameState,
    frame: u64,
}

impl Game {
    pub fn new(rng: &mut impl Rng, frames_per_move: u32) -> Result<Self, GridError> {
        let mut grid = Grid::new(GRID_W, GRID_H)?;
        let map = Map::generate(&mut grid, rng);
        let player = Player::new(&grid, frames_per_move);
        info!(
            width = GRID_W,
            height = GRID_H,
            nibbles = map.len(),
            "game started"
        );
        Ok(Self::with_parts(grid, map, player))
    }

    pub fn with_parts(grid: Grid, map: Map, player: Player) -> Self {
        Self {
            grid,
            map,
            player,
            state: GameState::Running,
            frame: 0,
        }
    }

    /// Runs one frame: nibbles, then the player, then the win check.
    pub fn frame(&mut self, input: UserInput) -> GameState {
        if self.state == GameState::Ended {
            return self.state;
        }

        self.frame += 1;
        self.map.update(&mut self.grid);
        self.player.update(input, &mut self.grid, &mut self.map);

        if self.map.is_empty() {
            self.state = GameState::Ended;
            info!(frames = self.frame, "{}", END_MESSAGE);
        }
        self.state
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn remaining(&self) -> usize {
        self.map.len()
    }
}
