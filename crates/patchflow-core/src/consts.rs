/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Default patch radius for the distance metric.
pub const DEFAULT_PATCH_RADIUS: usize = 5;

/// Default bound on the random offsets drawn during field seeding.
pub const DEFAULT_MAX_OFFSET: u32 = 10;

/// Default number of full propagation/search passes over the field.
pub const DEFAULT_PASSES: usize = 5;

/// Default per-step decay of the random-search window radius.
pub const DEFAULT_SEARCH_RATIO: f32 = 0.5;

/// Default seed for the field RNG. Runs with the same seed, inputs and
/// configuration produce byte-identical fields.
pub const DEFAULT_SEED: u64 = 0;

/// Rejection-sampling attempts per cell during seeding before falling back
/// to a draw from the clamped feasible interval.
pub const MAX_SEED_REJECTS: usize = 64;

/// Small epsilon to avoid division by zero in floating-point comparisons.
pub const EPSILON: f32 = 1e-10;
