use ndarray::Array2;

use crate::field::{resolve, OffsetField};

use super::distance::patch_ssd;

/// Try to improve the offset at `(row, col)` by re-using a neighbor's offset
/// at this pixel's own coordinate.
///
/// `direction` is -1 on even passes (up/left neighbors) and +1 on odd passes
/// (down/right), so information flows both ways across passes. The
/// horizontal candidate is compared and committed before the vertical one,
/// which therefore sees the already-improved state. Neighbors outside the
/// interior region, and candidates resolving outside the target interior,
/// are discarded.
///
/// Returns the best cost found, for use as the random-search cutoff.
pub(crate) fn propagate(
    source: &Array2<f32>,
    target: &Array2<f32>,
    field: &mut OffsetField,
    row: usize,
    col: usize,
    patch_radius: usize,
    direction: isize,
) -> f32 {
    let current = field.get(row, col);
    let (cur_row, cur_col) = resolve(row, col, current);
    let mut best = patch_ssd(
        source,
        (row, col),
        target,
        (cur_row as usize, cur_col as usize),
        patch_radius,
        f32::INFINITY,
    );

    // Horizontal neighbor first, then vertical.
    let neighbors = [
        (row as isize, col as isize + direction),
        (row as isize + direction, col as isize),
    ];

    for (neighbor_row, neighbor_col) in neighbors {
        if !field.is_interior(neighbor_row, neighbor_col) {
            continue;
        }

        let candidate = field.get(neighbor_row as usize, neighbor_col as usize);
        let (target_row, target_col) = resolve(row, col, candidate);
        if !field.is_interior(target_row, target_col) {
            continue;
        }

        let cost = patch_ssd(
            source,
            (row, col),
            target,
            (target_row as usize, target_col as usize),
            patch_radius,
            f32::INFINITY,
        );
        if cost < best {
            best = cost;
            field.set(row, col, candidate);
        }
    }

    best
}
