use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::MAX_SEED_REJECTS;
use crate::field::{resolve, Offset, OffsetField};

/// Seed every interior cell with a uniformly random integer offset whose
/// resolved target lies inside the target interior region. No cost is
/// evaluated here; only bounds feasibility.
pub(crate) fn seed_field(field: &mut OffsetField, max_offset: i32, rng: &mut Pcg32) {
    let border = field.border();
    let (h, w) = (field.height(), field.width());

    for row in border..h - border {
        for col in border..w - border {
            let offset = draw_offset(field, row, col, max_offset, rng);
            field.set(row, col, offset);
        }
    }
}

/// Rejection-sample an in-bounds offset for one cell. The retry loop is
/// capped; on exhaustion the offset is drawn directly from the per-axis
/// feasible interval clamped to the bound. That interval always contains
/// zero (the cell itself is interior), so the draw cannot fail.
fn draw_offset(
    field: &OffsetField,
    row: usize,
    col: usize,
    max_offset: i32,
    rng: &mut Pcg32,
) -> Offset {
    if max_offset == 0 {
        return Offset::default();
    }

    for _ in 0..MAX_SEED_REJECTS {
        let offset = Offset {
            dx: rng.gen_range(-max_offset..max_offset) as f32,
            dy: rng.gen_range(-max_offset..max_offset) as f32,
        };
        let (target_row, target_col) = resolve(row, col, offset);
        if field.is_interior(target_row, target_col) {
            return offset;
        }
    }

    let border = field.border() as i32;
    let dx_lo = (border - col as i32).max(-max_offset);
    let dx_hi = (field.width() as i32 - border - 1 - col as i32).min(max_offset - 1);
    let dy_lo = (border - row as i32).max(-max_offset);
    let dy_hi = (field.height() as i32 - border - 1 - row as i32).min(max_offset - 1);

    Offset {
        dx: rng.gen_range(dx_lo..=dx_hi) as f32,
        dy: rng.gen_range(dy_lo..=dy_hi) as f32,
    }
}
