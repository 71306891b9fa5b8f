//! Property tests for board geometry.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use bot_game::{Grid, Location};
use proptest::prelude::*;

fn grid_and_two_locations() -> impl Strategy<Value = (Grid, Location, Location)> {
    (3usize..40, 3usize..40).prop_flat_map(|(rows, cols)| {
        (
            Just(Grid::new(rows, cols)),
            (0..rows, 0..cols).prop_map(|(r, c)| Location::new(r, c)),
            (0..rows, 0..cols).prop_map(|(r, c)| Location::new(r, c)),
        )
    })
}

proptest! {
    #[test]
    fn distance_is_symmetric_and_bounded((grid, a, b) in grid_and_two_locations()) {
        let d = grid.distance(a, b);
        prop_assert_eq!(d, grid.distance(b, a));
        prop_assert!(d <= grid.rows().max(grid.cols()) / 2);
        prop_assert_eq!(d == 0, a == b);
    }

    #[test]
    fn neighbours_are_distinct_and_one_step_away((grid, a, _) in grid_and_two_locations()) {
        let neighbours = grid.neighbours(a);
        for (i, n) in neighbours.iter().enumerate() {
            prop_assert_eq!(grid.distance(a, *n), 1);
            prop_assert!(!neighbours[..i].contains(n));
        }
    }
}
