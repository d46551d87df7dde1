//! Quantization laws over the full normalized input range.

use face_tracker::core::{GridConfig, Quantizer};
use face_tracker::types::GridCell;

fn quantizer() -> Quantizer {
    Quantizer::new(GridConfig::default())
}

#[test]
fn cells_stay_in_range_for_any_input() {
    let q = quantizer();
    let steps = q.config().steps();

    let mut nx = -1.0;
    while nx <= 1.0 {
        let mut ny = -1.0;
        while ny <= 1.0 {
            let cell = q.resolve(nx, ny).cell;
            assert!(cell.col <= steps, "col {} out of range at nx={}", cell.col, nx);
            assert!(cell.row <= steps, "row {} out of range at ny={}", cell.row, ny);
            ny += 0.05;
        }
        nx += 0.05;
    }
}

#[test]
fn boundary_values_land_on_edge_cells() {
    let q = quantizer();
    assert_eq!(q.resolve(-1.0, -1.0).cell, GridCell::new(0, 10));
    assert_eq!(q.resolve(1.0, 1.0).cell, GridCell::new(10, 0));
    assert_eq!(q.resolve(-1.0, 1.0).cell, GridCell::new(0, 0));
    assert_eq!(q.resolve(1.0, -1.0).cell, GridCell::new(10, 10));
}

#[test]
fn center_resolves_to_middle_cell() {
    assert_eq!(quantizer().resolve(0.0, 0.0).cell, GridCell::new(5, 5));
}

#[test]
fn near_boundary_inputs_have_no_off_by_one() {
    let q = quantizer();
    // A hair inside the edge must still resolve to the edge cell.
    assert_eq!(q.resolve(-0.999_999, 0.0).cell.col, 0);
    assert_eq!(q.resolve(0.999_999, 0.0).cell.col, 10);
}

#[test]
fn parameters_track_the_grid() {
    let q = quantizer();
    let r = q.resolve(1.0, 1.0);
    assert_eq!((r.px, r.py), (15.0, 15.0));

    let r = q.resolve(-1.0, -1.0);
    assert_eq!((r.px, r.py), (-15.0, -15.0));
}
