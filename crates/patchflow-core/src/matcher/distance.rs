use ndarray::Array2;

/// Sum of squared differences between two equal-size patches.
///
/// Accumulates over the (2*radius+1)^2 window in a fixed row-major scan and
/// returns early as soon as the running sum exceeds `cutoff`. An
/// early-exited value is only a lower bound on the exact cost, but it is
/// guaranteed to be >= it, which suffices for a reject-if-not-better test.
/// Pass `f32::INFINITY` for the exact cost.
///
/// Both centers must be at least `radius` away from every image edge;
/// callers enforce this via the interior-region contract.
pub fn patch_ssd(
    source: &Array2<f32>,
    source_center: (usize, usize),
    target: &Array2<f32>,
    target_center: (usize, usize),
    radius: usize,
    cutoff: f32,
) -> f32 {
    let (src_row, src_col) = (source_center.0 as isize, source_center.1 as isize);
    let (tgt_row, tgt_col) = (target_center.0 as isize, target_center.1 as isize);
    let radius = radius as isize;

    let mut sum = 0.0f32;
    for dr in -radius..=radius {
        for dc in -radius..=radius {
            let a = source[[(src_row + dr) as usize, (src_col + dc) as usize]];
            let b = target[[(tgt_row + dr) as usize, (tgt_col + dc) as usize]];
            let diff = a - b;
            sum += diff * diff;

            if sum > cutoff {
                return sum;
            }
        }
    }

    sum
}
