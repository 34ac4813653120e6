//! Map tests - ring carving, nibble scattering and collision removal

use rand::rngs::StdRng;
use rand::SeedableRng;

use nibble_maze::grid::EMPTY;
use nibble_maze::{Grid, Map, Nibble, Pos, Wall};

fn generated(width: i32, height: i32, seed: u64) -> (Grid, Map) {
    let mut grid = Grid::new(width, height).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    let map = Map::generate(&mut grid, &mut rng);
    (grid, map)
}

fn ring_insets(grid: &Grid) -> Vec<i32> {
    (2..grid.mid_width())
        .step_by(2)
        .take_while(|inset| *inset < grid.mid_height())
        .collect()
}

#[test]
fn test_outer_border_is_wall() {
    let (grid, _) = generated(40, 20, 1);
    for x in 0..40 {
        assert!(grid.is_collision(Pos::new(x, 0), Wall::MARKER));
        assert!(grid.is_collision(Pos::new(x, 19), Wall::MARKER));
    }
    for y in 0..20 {
        assert!(grid.is_collision(Pos::new(0, y), Wall::MARKER));
        assert!(grid.is_collision(Pos::new(39, y), Wall::MARKER));
    }
}

#[test]
fn test_each_ring_has_one_gap_top_and_bottom() {
    for seed in 0..20 {
        let (grid, _) = generated(40, 20, seed);
        let x_max = grid.width() - 1;
        let y_max = grid.height() - 1;
        let insets = ring_insets(&grid);
        assert_eq!(insets, vec![2, 4, 6, 8]);

        for inset in insets {
            for row in [inset, y_max - inset] {
                let gaps: Vec<i32> = (inset..=x_max - inset)
                    .filter(|&x| grid.get_tile(Pos::new(x, row)) == Some(EMPTY))
                    .collect();
                assert_eq!(gaps.len(), 1, "seed {} ring {} row {}", seed, inset, row);
                assert!(gaps[0] > inset && gaps[0] < x_max - inset);
            }
            for y in inset..=y_max - inset {
                assert!(grid.is_collision(Pos::new(inset, y), Wall::MARKER));
                assert!(grid.is_collision(Pos::new(x_max - inset, y), Wall::MARKER));
            }
        }
    }
}

#[test]
fn test_smallest_inner_ring_gets_two_gaps() {
    let (grid, _) = generated(7, 7, 42);
    // Ring spans (2,2)..(4,4) around a single open cell.
    assert_eq!(grid.get_tile(Pos::new(3, 2)), Some(EMPTY));
    assert_eq!(grid.get_tile(Pos::new(3, 4)), Some(EMPTY));
    assert_eq!(grid.get_tile(Pos::new(3, 3)), Some(EMPTY));
    for pos in [
        Pos::new(2, 2),
        Pos::new(4, 2),
        Pos::new(2, 3),
        Pos::new(4, 3),
        Pos::new(2, 4),
        Pos::new(4, 4),
    ] {
        assert!(grid.is_collision(pos, Wall::MARKER), "{:?}", pos);
    }
    let cleared = (2..=4)
        .flat_map(|x| [Pos::new(x, 2), Pos::new(x, 4)])
        .filter(|p| grid.get_tile(*p) == Some(EMPTY))
        .count();
    assert_eq!(cleared, 2);
}

#[test]
fn test_degenerate_ring_skips_gap() {
    // Ring at inset 2 is (2,2)..(3,3): no room for a gap.
    let (grid, _) = generated(6, 6, 7);
    for pos in [Pos::new(2, 2), Pos::new(3, 2), Pos::new(2, 3), Pos::new(3, 3)] {
        assert!(grid.is_collision(pos, Wall::MARKER));
    }
}

#[test]
fn test_generation_survives_all_small_sizes() {
    for width in 3..16 {
        for height in 3..16 {
            let (grid, map) = generated(width, height, (width * 31 + height) as u64);
            for nibble in map.nibbles() {
                assert!(!grid.is_out_of_bounds(nibble.pos));
            }
        }
    }
}

#[test]
fn test_nibbles_never_on_walls() {
    for seed in 0..10 {
        let (grid, map) = generated(40, 20, seed);
        assert!(!map.is_empty());
        for nibble in map.nibbles() {
            assert!(!grid.is_out_of_bounds(nibble.pos));
            assert!(!grid.is_collision(nibble.pos, Wall::MARKER));
        }
    }
}

#[test]
fn test_nibbles_cover_about_half_of_open_cells() {
    let (grid, map) = generated(40, 20, 2024);
    let open = grid.tiles().iter().filter(|&&t| t != Wall::MARKER).count();
    let ratio = map.len() as f64 / open as f64;
    assert!(ratio > 0.4 && ratio < 0.6, "ratio {}", ratio);
}

#[test]
fn test_update_renders_every_nibble() {
    let mut grid = Grid::new(5, 5).unwrap();
    let map = Map::from_nibbles([Nibble::at(1, 1), Nibble::at(3, 2)]);
    map.update(&mut grid);
    map.update(&mut grid);
    assert!(grid.is_collision(Pos::new(1, 1), Nibble::MARKER));
    assert!(grid.is_collision(Pos::new(3, 2), Nibble::MARKER));
    assert_eq!(
        grid.tiles().iter().filter(|&&t| t == Nibble::MARKER).count(),
        2
    );
}

#[test]
fn test_collide_removes_exactly_once() {
    let mut map = Map::from_nibbles([Nibble::at(1, 1), Nibble::at(2, 1), Nibble::at(3, 1)]);
    assert!(map.collide(Pos::new(2, 1)));
    assert_eq!(map.len(), 2);
    assert!(!map.collide(Pos::new(2, 1)));
    assert_eq!(map.len(), 2);
    assert!(!map.nibbles().iter().any(|n| n.overlaps(Pos::new(2, 1))));
}

#[test]
fn test_collide_misses_leave_map_alone() {
    let mut map = Map::from_nibbles([Nibble::at(1, 1)]);
    assert!(!map.collide(Pos::new(0, 0)));
    assert_eq!(map.nibbles(), &[Nibble::at(1, 1)]);
}

#[test]
fn test_empty_stays_empty() {
    let mut map = Map::from_nibbles([Nibble::at(1, 1)]);
    assert!(!map.is_empty());
    assert!(map.collide(Pos::new(1, 1)));
    assert!(map.is_empty());

    let mut grid = Grid::new(3, 3).unwrap();
    map.update(&mut grid);
    assert!(!map.collide(Pos::new(1, 1)));
    assert!(map.is_empty());
}
