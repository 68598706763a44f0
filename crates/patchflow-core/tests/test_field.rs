use ndarray::Array2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use patchflow_core::error::PatchflowError;
use patchflow_core::field::{resolve, Offset, OffsetField};
use patchflow_core::matcher::{MatchConfig, MatchSession};

fn make_noise(h: usize, w: usize, seed: u64) -> Array2<f32> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut data = Array2::<f32>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            data[[row, col]] = rng.gen_range(0.0..1.0);
        }
    }
    data
}

#[test]
fn interior_predicate_respects_border() {
    let field = OffsetField::new(20, 30, 4);

    assert!(field.is_interior(4, 4));
    assert!(field.is_interior(15, 25));
    assert!(!field.is_interior(3, 10));
    assert!(!field.is_interior(16, 10));
    assert!(!field.is_interior(10, 3));
    assert!(!field.is_interior(10, 26));
    assert!(!field.is_interior(-1, 10));
}

#[test]
fn resolve_rounds_to_nearest_pixel() {
    assert_eq!(resolve(10, 10, Offset { dx: 2.3, dy: -1.6 }), (8, 12));
    assert_eq!(resolve(10, 10, Offset { dx: 0.0, dy: 0.0 }), (10, 10));
    assert_eq!(resolve(0, 0, Offset { dx: -0.4, dy: 0.4 }), (0, 0));
}

#[test]
fn seeding_satisfies_the_interior_invariant() {
    let img = make_noise(40, 50, 11);
    let config = MatchConfig {
        patch_radius: 3,
        max_offset: 12,
        ..MatchConfig::default()
    };

    let mut session = MatchSession::new(&img, &img, config).unwrap();
    session.seed();

    let field = session.field();
    let border = field.border();
    for row in border..field.height() - border {
        for col in border..field.width() - border {
            let (tr, tc) = resolve(row, col, field.get(row, col));
            assert!(
                field.is_interior(tr, tc),
                "cell ({}, {}) resolves to ({}, {}) outside the interior",
                row,
                col,
                tr,
                tc
            );
        }
    }
}

#[test]
fn seeding_terminates_with_absurd_offset_bound() {
    let img = make_noise(24, 24, 3);
    let config = MatchConfig {
        patch_radius: 2,
        max_offset: 1_000_000,
        ..MatchConfig::default()
    };

    let mut session = MatchSession::new(&img, &img, config).unwrap();
    session.seed();

    let field = session.field();
    let border = field.border();
    for row in border..field.height() - border {
        for col in border..field.width() - border {
            let (tr, tc) = resolve(row, col, field.get(row, col));
            assert!(field.is_interior(tr, tc), "cell ({}, {})", row, col);
        }
    }
}

#[test]
fn border_cells_are_never_written() {
    let source = make_noise(30, 30, 5);
    let config = MatchConfig {
        patch_radius: 3,
        max_offset: 6,
        passes: 3,
        ..MatchConfig::default()
    };

    let field = patchflow_core::matcher::match_frames(&source, &source, &config).unwrap();

    let zero = Offset::default();
    for row in 0..field.height() {
        for col in 0..field.width() {
            if !field.is_interior(row as isize, col as isize) {
                assert_eq!(
                    field.get(row, col),
                    zero,
                    "border cell ({}, {}) was written",
                    row,
                    col
                );
            }
        }
    }
}

#[test]
fn mismatched_dimensions_are_rejected() {
    let a = make_noise(30, 30, 1);
    let b = make_noise(30, 32, 2);

    let err = MatchSession::new(&a, &b, MatchConfig::default()).unwrap_err();
    assert!(matches!(err, PatchflowError::DimensionMismatch { .. }), "{err}");
}

#[test]
fn degenerate_interior_is_rejected() {
    // 10 <= 2 * patch_radius leaves no interior region.
    let a = make_noise(10, 40, 1);

    let config = MatchConfig {
        patch_radius: 5,
        ..MatchConfig::default()
    };
    let err = MatchSession::new(&a, &a, config).unwrap_err();
    assert!(matches!(err, PatchflowError::ImageTooSmall { .. }), "{err}");
}
