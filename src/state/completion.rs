use crate::config::TOLERANCE_PERCENT;
use crate::model::{Grid, Tile};

pub fn tile_in_place(tile: &Tile, grid: Grid) -> bool {
    let home = grid.home(tile.id);
    (tile.position.left - home.left).abs() <= TOLERANCE_PERCENT
        && (tile.position.top - home.top).abs() <= TOLERANCE_PERCENT
}

// One tile per cell, each within tolerance of home.
fn all_in_place(tiles: &[Tile], grid: Grid) -> bool {
    tiles.len() == grid.len() && tiles.iter().all(|t| tile_in_place(t, grid))
}

/// A piece count that is not a valid square grid can never be complete.
pub fn is_complete(tiles: &[Tile], piece_count: u32) -> bool {
    Grid::from_piece_count(piece_count)
        .map(|grid| all_in_place(tiles, grid))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Position;
    use std::rc::Rc;

    fn tiles(positions: &[(f64, f64)]) -> Vec<Tile> {
        positions
            .iter()
            .enumerate()
            .map(|(id, &(left, top))| Tile {
                id: id as u32,
                fragment: Rc::from(""),
                position: Position { left, top },
            })
            .collect()
    }

    #[test]
    fn solved_two_by_two() {
        let t = tiles(&[(0.0, 0.0), (50.0, 0.0), (0.0, 50.0), (50.0, 50.0)]);
        assert!(is_complete(&t, 4));
    }

    #[test]
    fn one_tile_out_of_place() {
        let t = tiles(&[(60.0, 60.0), (50.0, 0.0), (0.0, 50.0), (50.0, 50.0)]);
        assert!(!is_complete(&t, 4));
    }

    #[test]
    fn tolerance_is_inclusive_per_axis() {
        let t = tiles(&[(10.0, -10.0), (40.0, 10.0), (-10.0, 60.0), (60.0, 40.0)]);
        assert!(is_complete(&t, 4));
        let t = tiles(&[(10.01, 0.0), (50.0, 0.0), (0.0, 50.0), (50.0, 50.0)]);
        assert!(!is_complete(&t, 4));
        let t = tiles(&[(0.0, 10.5), (50.0, 0.0), (0.0, 50.0), (50.0, 50.0)]);
        assert!(!is_complete(&t, 4));
    }

    #[test]
    fn order_of_tiles_does_not_matter() {
        let mut t = tiles(&[(0.0, 0.0), (50.0, 0.0), (0.0, 50.0), (50.0, 50.0)]);
        t.reverse();
        assert!(is_complete(&t, 4));
    }

    #[test]
    fn three_by_three_uses_thirds() {
        let step = 100.0 / 3.0;
        let mut pos = Vec::new();
        for row in 0..3 {
            for col in 0..3 {
                pos.push((col as f64 * step + 5.0, row as f64 * step - 5.0));
            }
        }
        assert!(is_complete(&tiles(&pos), 9));
        // Swapping two neighbours breaks it.
        pos.swap(0, 1);
        assert!(!is_complete(&tiles(&pos), 9));
    }

    #[test]
    fn incomplete_sets_and_bad_counts() {
        assert!(!is_complete(&[], 4));
        assert!(!is_complete(&tiles(&[(0.0, 0.0), (50.0, 0.0), (0.0, 50.0)]), 4));
        assert!(!is_complete(&tiles(&[(0.0, 0.0), (50.0, 0.0), (0.0, 50.0), (50.0, 50.0)]), 5));
    }
}
