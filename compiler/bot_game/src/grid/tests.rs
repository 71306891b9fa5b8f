use super::*;
use pretty_assertions::assert_eq;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use slotmap::SlotMap;

fn loc(row: usize, col: usize) -> Location {
    Location::new(row, col)
}

#[test]
fn neighbours_in_row_major_order() {
    let grid = Grid::new(5, 5);
    assert_eq!(
        grid.neighbours(loc(2, 2)),
        [
            loc(1, 1),
            loc(1, 2),
            loc(1, 3),
            loc(2, 1),
            loc(2, 3),
            loc(3, 1),
            loc(3, 2),
            loc(3, 3),
        ]
    );
}

#[test]
fn neighbours_wrap_around_corners() {
    let grid = Grid::new(3, 4);
    assert_eq!(
        grid.neighbours(loc(0, 0)),
        [
            loc(2, 3),
            loc(2, 0),
            loc(2, 1),
            loc(0, 3),
            loc(0, 1),
            loc(1, 3),
            loc(1, 0),
            loc(1, 1),
        ]
    );
}

#[test]
fn distance_wraps() {
    let grid = Grid::new(10, 6);
    assert_eq!(grid.distance(loc(0, 0), loc(0, 0)), 0);
    assert_eq!(grid.distance(loc(0, 0), loc(9, 5)), 1);
    assert_eq!(grid.distance(loc(1, 1), loc(4, 2)), 3);
    assert_eq!(grid.distance(loc(0, 0), loc(5, 3)), 5);
    assert_eq!(grid.distance(loc(2, 0), loc(8, 0)), 4);
}

#[test]
fn place_and_clear() {
    let mut keys: SlotMap<UnitId, ()> = SlotMap::with_key();
    let unit = keys.insert(());

    let mut grid = Grid::new(3, 3);
    assert!(grid.is_free(loc(1, 2)));
    grid.place(loc(1, 2), unit);
    assert_eq!(grid.get(loc(1, 2)), Some(unit));
    assert!(grid.is_free(loc(2, 1)));
    grid.clear(loc(1, 2));
    assert!(grid.is_free(loc(1, 2)));
}

#[test]
fn random_locations_stay_on_the_board() {
    let grid = Grid::new(3, 7);
    let mut rng = SmallRng::seed_from_u64(11);
    for _ in 0..200 {
        let l = grid.random_location(&mut rng);
        assert!(l.row < 3 && l.col < 7, "{l} is off the board");
    }
}

#[test]
fn location_display() {
    assert_eq!(loc(3, 14).to_string(), "[3, 14]");
}
