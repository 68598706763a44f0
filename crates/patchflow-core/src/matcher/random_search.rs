use ndarray::Array2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::field::{resolve, Offset, OffsetField};

use super::distance::patch_ssd;

/// Try to improve the offset at `(row, col)` by stochastic sampling in a
/// window that shrinks geometrically until its radius drops below one pixel.
///
/// Each step draws a uniform vector in [-1, 1]^2, scales it by the current
/// window radius and applies it at the pixel's own position. Candidates
/// resolving inside the target interior are scored with `cost` as cutoff and
/// committed on strict improvement. `cost` is the best patch cost coming out
/// of propagation.
#[allow(clippy::too_many_arguments)]
pub(crate) fn random_search(
    source: &Array2<f32>,
    target: &Array2<f32>,
    field: &mut OffsetField,
    row: usize,
    col: usize,
    patch_radius: usize,
    search_radius: f32,
    search_ratio: f32,
    mut cost: f32,
    rng: &mut Pcg32,
) {
    let mut step = 0;
    loop {
        let window = search_radius * search_ratio.powi(step);
        step += 1;

        // The search window must not shrink below one pixel.
        if window < 1.0 {
            break;
        }

        let candidate = Offset {
            dx: rng.gen_range(-1.0f32..=1.0) * window,
            dy: rng.gen_range(-1.0f32..=1.0) * window,
        };

        let (target_row, target_col) = resolve(row, col, candidate);
        if !field.is_interior(target_row, target_col) {
            continue;
        }

        let score = patch_ssd(
            source,
            (row, col),
            target,
            (target_row as usize, target_col as usize),
            patch_radius,
            cost,
        );
        if score < cost {
            cost = score;
            field.set(row, col, candidate);
        }
    }
}

/// Number of sampling steps the shrinking-window loop performs for a given
/// initial radius and decay ratio: the smallest k with
/// `search_radius * search_ratio^k < 1`.
pub fn shrink_steps(search_radius: f32, search_ratio: f32) -> usize {
    if search_radius < 1.0 {
        return 0;
    }
    let steps = ((1.0 / f64::from(search_radius)).ln() / f64::from(search_ratio).ln()).floor();
    steps as usize + 1
}

#[cfg(test)]
mod tests {
    use super::shrink_steps;

    /// Count steps by walking the same schedule the sampling loop uses.
    fn simulate(search_radius: f32, search_ratio: f32) -> usize {
        let mut steps = 0;
        loop {
            let window = search_radius * search_ratio.powi(steps as i32);
            if window < 1.0 {
                return steps;
            }
            steps += 1;
        }
    }

    #[test]
    fn closed_form_matches_schedule() {
        for &(radius, ratio) in &[
            (30.0, 0.5),
            (100.0, 0.5),
            (17.0, 0.3),
            (240.0, 0.75),
            (3.0, 0.9),
            (1.5, 0.5),
        ] {
            assert_eq!(
                shrink_steps(radius, ratio),
                simulate(radius, ratio),
                "radius={} ratio={}",
                radius,
                ratio
            );
        }
    }

    #[test]
    fn sub_pixel_radius_never_samples() {
        assert_eq!(shrink_steps(0.5, 0.5), 0);
        assert_eq!(shrink_steps(0.99, 0.9), 0);
    }
}
