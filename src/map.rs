use rand::Rng;
use tracing::{debug, info};

use crate::entity::{Nibble, Render, Wall};
use crate::grid::{Grid, Pos};

const RING_STEP: usize = 2;

/// The maze layout plus every nibble still waiting to be eaten.
#[derive(Debug, Clone, Default)]
pub struct Map {
    nibbles: Vec<Nibble>,
}

impl Map {
    /// Draws the walls onto `grid` and scatters nibbles over the open cells.
    pub fn generate(grid: &mut Grid, rng: &mut impl Rng) -> Self {
        let rings = carve_rings(grid, rng);
        let nibbles = scatter_nibbles(grid, rng);
        info!(rings, nibbles = nibbles.len(), "maze generated");
        Self { nibbles }
    }

    pub fn from_nibbles(nibbles: impl IntoIterator<Item = Nibble>) -> Self {
        Self {
            nibbles: nibbles.into_iter().collect(),
        }
    }

    pub fn update(&self, grid: &mut Grid) {
        for nibble in &self.nibbles {
            nibble.render(grid);
        }
    }

    /// Removes the nibble at `pos`, if any. Order of the rest is not kept.
    pub fn collide(&mut self, pos: Pos) -> bool {
        match self.nibbles.iter().position(|n| n.overlaps(pos)) {
            Some(idx) => {
                self.nibbles.swap_remove(idx);
                debug!(x = pos.x, y = pos.y, left = self.nibbles.len(), "nibble eaten");
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nibbles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nibbles.len()
    }

    pub fn nibbles(&self) -> &[Nibble] {
        &self.nibbles
    }
}

/// Outer border, then rings inset by 2, 4, ... each with one gap on its top
/// and bottom edge. Returns the number of inner rings drawn.
fn carve_rings(grid: &mut Grid, rng: &mut impl Rng) -> usize {
    let x_max = grid.width() - 1;
    let y_max = grid.height() - 1;
    grid.draw_rectangle(Pos::new(0, 0), Pos::new(x_max, y_max), Wall::MARKER);

    let mut rings = 0;
    for inset in (2..grid.mid_width()).step_by(RING_STEP) {
        if inset >= grid.mid_height() {
            break;
        }
        grid.draw_rectangle(
            Pos::new(inset, inset),
            Pos::new(x_max - inset, y_max - inset),
            Wall::MARKER,
        );
        rings += 1;

        let lo = inset + 1;
        let hi = x_max - inset - 1;
        if lo > hi {
            continue;
        }
        grid.clear_tile(Pos::new(rng.gen_range(lo..=hi), inset));
        grid.clear_tile(Pos::new(rng.gen_range(lo..=hi), y_max - inset));
    }
    rings
}

fn scatter_nibbles(grid: &Grid, rng: &mut impl Rng) -> Vec<Nibble> {
    let mut nibbles = Vec::new();
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            if !grid.is_collision(Pos::new(x, y), Wall::MARKER) && rng.gen_bool(0.5) {
                nibbles.push(Nibble::at(x, y));
            }
        }
    }
    nibbles
}
