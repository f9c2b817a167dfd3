use rand::Rng;

use crate::config::BoardConfig;
use crate::snake::Cell;

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Spawns food at a uniformly random cell-aligned position.
    ///
    /// The position is deliberately not checked against the snake body;
    /// the only guarantee is that it lies inside the board.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, board: BoardConfig) -> Self {
        let x = rng.gen_range(0..board.cells_wide()) * board.cell_size;
        let y = rng.gen_range(0..board.cells_high()) * board.cell_size;

        Self::at(Cell { x, y })
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::BoardConfig;

    use super::Food;

    #[test]
    fn spawned_food_is_in_bounds_and_cell_aligned() {
        let board = BoardConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let food = Food::spawn(&mut rng, board);

            assert!(food.position.is_within_bounds(board));
            assert_eq!(food.position.x % board.cell_size, 0);
            assert_eq!(food.position.y % board.cell_size, 0);
        }
    }

    #[test]
    fn spawn_covers_the_whole_grid() {
        let board = BoardConfig::from_display(40, 120, 20).expect("valid display");
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();

        // 2×2 board: all four cells should eventually appear.
        for _ in 0..200 {
            seen.insert(Food::spawn(&mut rng, board).position);
        }

        assert_eq!(seen.len(), 4);
    }
}
