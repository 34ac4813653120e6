//! Terminal maze: walk through nested walled rings and eat every nibble.

pub mod config;
pub mod entity;
pub mod game;
pub mod grid;
pub mod input;
pub mod logging;
pub mod map;
pub mod player;
pub mod term;

pub use config::Config;
pub use entity::{Nibble, Render, Wall};
pub use game::{Game, GameState, END_MESSAGE};
pub use grid::{Grid, GridError, Pos};
pub use input::{InputSampler, KeyAction, UserInput};
pub use map::Map;
pub use player::Player;
