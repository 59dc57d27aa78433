use tracing::debug;

use crate::grid::Grid;

fn is_fragile(grid: &Grid, row: usize, column: usize, threshold: usize) -> bool {
    grid.is_marked(row, column) && grid.count_neighbors(row, column) < threshold
}

/// Counts marked cells with fewer than `threshold` marked neighbours.
///
/// The grid is only borrowed, so nothing is removed and the scan order does
/// not matter.
#[tracing::instrument(skip(grid), fields(width = grid.width(), height = grid.height()))]
pub fn count_fragile(grid: &Grid, threshold: usize) -> usize {
    grid.positions()
        .filter(|&(row, column)| is_fragile(grid, row, column, threshold))
        .count()
}

/// Runs a single row-major pass, unmarking fragile cells as soon as they are
/// found. Later cells in the same pass see those removals.
fn peel_pass(grid: &mut Grid, threshold: usize) -> usize {
    let mut removed = 0;

    for (row, column) in grid.positions() {
        if is_fragile(grid, row, column, threshold) {
            grid.unmark(row, column);
            removed += 1;
        }
    }

    removed
}

/// Peels the grid until a full pass removes nothing, returning the number of
/// cells removed by each productive pass.
#[tracing::instrument(skip(grid), fields(width = grid.width(), height = grid.height()))]
pub fn peel_passes(grid: &mut Grid, threshold: usize) -> Vec<usize> {
    let mut passes = Vec::new();

    loop {
        let removed = peel_pass(grid, threshold);
        if removed == 0 {
            break;
        }
        debug!(pass = passes.len(), removed, "peeling pass complete");
        passes.push(removed);
    }

    debug!(passes = passes.len(), "reached fixed point");
    passes
}

/// Unmarks fragile cells in place until none remain and returns how many
/// were removed in total.
pub fn peel_to_fixed_point(grid: &mut Grid, threshold: usize) -> usize {
    let total = peel_passes(grid, threshold).into_iter().sum();
    debug!(total, "peeling finished");
    total
}
