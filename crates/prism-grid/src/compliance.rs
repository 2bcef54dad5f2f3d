//! Grid invariant test helpers.
//!
//! These functions verify the structural invariants every grid must hold
//! after construction, growth, and pointer movement. Reused across the
//! grid and pointer test modules.

use crate::grid::Grid;
use indexmap::IndexSet;
use prism_core::Position;

/// Assert every row has exactly `width` cells and there are `height` rows.
pub fn assert_rectangular<P>(grid: &Grid<P>) {
    let rows: Vec<_> = grid.rows().collect();
    assert_eq!(
        rows.len(),
        grid.height(),
        "row count ({}) != height ({})",
        rows.len(),
        grid.height()
    );
    for (r, row) in rows.iter().enumerate() {
        assert_eq!(
            row.len(),
            grid.width(),
            "row {r} has {} cells, expected {}",
            row.len(),
            grid.width()
        );
    }
}

/// Assert every cell's stamped position matches where it is stored.
pub fn assert_cells_stamped<P>(grid: &Grid<P>) {
    for (r, row) in grid.rows().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            assert_eq!(
                cell.position(),
                Position::new(r, c),
                "cell stored at ({r}, {c}) is stamped {}",
                cell.position()
            );
        }
    }
}

/// Assert the annotation overlay covers exactly one entry per cell.
pub fn assert_overlay_sized<P>(grid: &Grid<P>) {
    assert_eq!(
        grid.annotations().len(),
        grid.cell_count(),
        "overlay length ({}) != cell_count ({})",
        grid.annotations().len(),
        grid.cell_count()
    );
}

/// Assert every registered pointer is inside the grid and IDs are unique.
pub fn assert_pointers_in_bounds<P>(grid: &Grid<P>) {
    let ids: IndexSet<_> = grid.pointer_ids().collect();
    assert_eq!(ids.len(), grid.pointer_count(), "duplicate pointer ids");
    for id in ids {
        let pos = grid
            .pointer(id)
            .expect("registered pointer should resolve")
            .position();
        assert!(
            grid.contains(pos),
            "pointer {id} at {pos} outside {}x{} grid",
            grid.height(),
            grid.width()
        );
    }
}

/// Run all grid invariant checks.
pub fn run_full_compliance<P>(grid: &Grid<P>) {
    assert_rectangular(grid);
    assert_cells_stamped(grid);
    assert_overlay_sized(grid);
    assert_pointers_in_bounds(grid);
}
