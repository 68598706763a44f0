use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_MAX_OFFSET, DEFAULT_PASSES, DEFAULT_PATCH_RADIUS, DEFAULT_SEARCH_RATIO, DEFAULT_SEED,
};

/// Parameters of a matching run, fixed for its whole duration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Patch radius r; patches are (2r+1)x(2r+1) windows. Also the border
    /// margin that defines the interior region.
    pub patch_radius: usize,

    /// Bound on the random integer offsets drawn during seeding; each axis
    /// is drawn uniformly from [-max_offset, max_offset).
    pub max_offset: u32,

    /// Number of full passes over the field. Passes always run to this
    /// count; there is no convergence check.
    pub passes: usize,

    /// Per-step decay of the random-search window radius, in (0, 1).
    pub search_ratio: f32,

    /// Initial random-search window radius. `None` derives it from the
    /// smaller image dimension at session start.
    pub search_radius: Option<u32>,

    /// Seed for the field RNG. Runs with the same seed, inputs and
    /// configuration produce byte-identical fields.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            patch_radius: DEFAULT_PATCH_RADIUS,
            max_offset: DEFAULT_MAX_OFFSET,
            passes: DEFAULT_PASSES,
            search_ratio: DEFAULT_SEARCH_RATIO,
            search_radius: None,
            seed: DEFAULT_SEED,
        }
    }
}
