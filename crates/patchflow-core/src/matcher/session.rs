use ndarray::Array2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use tracing::{debug, info};

use crate::error::{PatchflowError, Result};
use crate::field::OffsetField;

use super::config::MatchConfig;
use super::{init, propagate, random_search};

/// Iterative matching session between two equal-size grayscale images.
///
/// The session exclusively owns the offset field for its whole life: the
/// field is allocated empty, seeded before the first pass, then improved in
/// place by propagation and random search for however many passes the caller
/// drives. Within a pass, later pixels observe earlier pixels' updates
/// immediately; this sequential dependency is what lets a good match travel
/// across the whole image in a single pass, so the scan is strictly
/// single-threaded.
#[derive(Debug)]
pub struct MatchSession<'a> {
    source: &'a Array2<f32>,
    target: &'a Array2<f32>,
    config: MatchConfig,
    field: OffsetField,
    search_radius: f32,
    max_offset: i32,
    rng: Pcg32,
    passes_done: usize,
    seeded: bool,
}

impl<'a> MatchSession<'a> {
    /// Create a session over borrowed image buffers.
    ///
    /// The input preconditions are validated here, once: both buffers must
    /// have identical dimensions, and each axis must exceed twice the patch
    /// radius so the interior region is non-empty. Everything past
    /// construction runs unchecked.
    pub fn new(
        source: &'a Array2<f32>,
        target: &'a Array2<f32>,
        config: MatchConfig,
    ) -> Result<Self> {
        let (h, w) = source.dim();
        let (th, tw) = target.dim();
        if (h, w) != (th, tw) {
            return Err(PatchflowError::DimensionMismatch {
                source_width: w,
                source_height: h,
                target_width: tw,
                target_height: th,
            });
        }

        let min = 2 * config.patch_radius;
        if h <= min || w <= min {
            return Err(PatchflowError::ImageTooSmall {
                width: w,
                height: h,
                patch_radius: config.patch_radius,
                min,
            });
        }

        let search_radius = config
            .search_radius
            .map(|r| r as f32)
            .unwrap_or(h.min(w) as f32);

        // Offsets longer than the larger image dimension can never resolve
        // inside the interior; clamping keeps seeding fast for absurd bounds.
        let max_offset = config.max_offset.min(h.max(w) as u32) as i32;

        info!(
            width = w,
            height = h,
            patch_radius = config.patch_radius,
            search_radius,
            "match session created"
        );

        Ok(Self {
            source,
            target,
            field: OffsetField::new(h, w, config.patch_radius),
            search_radius,
            max_offset,
            rng: Pcg32::seed_from_u64(config.seed),
            passes_done: 0,
            seeded: false,
            config,
        })
    }

    /// Seed every interior cell with a random in-bounds offset. Runs
    /// automatically before the first pass; calling it again is a no-op.
    pub fn seed(&mut self) {
        if self.seeded {
            return;
        }
        init::seed_field(&mut self.field, self.max_offset, &mut self.rng);
        self.seeded = true;
    }

    /// Run one full raster pass of propagation + random search over the
    /// interior region, committing improvements immediately.
    ///
    /// Even passes scan forward and consult the up/left neighbors; odd
    /// passes scan in reverse and consult down/right.
    pub fn run_pass(&mut self) {
        self.seed();

        let border = self.config.patch_radius;
        let (h, w) = (self.field.height(), self.field.width());
        let forward = self.passes_done % 2 == 0;
        let direction: isize = if forward { -1 } else { 1 };

        debug!(pass = self.passes_done + 1, forward, "running pass");

        if forward {
            for row in border..h - border {
                for col in border..w - border {
                    self.refine_pixel(row, col, direction);
                }
            }
        } else {
            for row in (border..h - border).rev() {
                for col in (border..w - border).rev() {
                    self.refine_pixel(row, col, direction);
                }
            }
        }

        self.passes_done += 1;
    }

    fn refine_pixel(&mut self, row: usize, col: usize, direction: isize) {
        let cost = propagate::propagate(
            self.source,
            self.target,
            &mut self.field,
            row,
            col,
            self.config.patch_radius,
            direction,
        );
        random_search::random_search(
            self.source,
            self.target,
            &mut self.field,
            row,
            col,
            self.config.patch_radius,
            self.search_radius,
            self.config.search_ratio,
            cost,
            &mut self.rng,
        );
    }

    /// Number of completed passes.
    pub fn passes_done(&self) -> usize {
        self.passes_done
    }

    /// Read-only view of the field in its current state.
    pub fn field(&self) -> &OffsetField {
        &self.field
    }

    /// Consume the session and hand the field to the caller.
    pub fn into_field(self) -> OffsetField {
        self.field
    }
}

/// Compute a dense correspondence field from `source` into `target`,
/// running the configured number of passes.
pub fn match_frames(
    source: &Array2<f32>,
    target: &Array2<f32>,
    config: &MatchConfig,
) -> Result<OffsetField> {
    match_frames_with_progress(source, target, config, |_| {})
}

/// Like [`match_frames`], invoking `progress` with the number of completed
/// passes after each pass.
pub fn match_frames_with_progress(
    source: &Array2<f32>,
    target: &Array2<f32>,
    config: &MatchConfig,
    mut progress: impl FnMut(usize),
) -> Result<OffsetField> {
    let mut session = MatchSession::new(source, target, config.clone())?;
    for _ in 0..config.passes {
        session.run_pass();
        progress(session.passes_done());
    }
    Ok(session.into_field())
}
