//! Randomized dense correspondence matching.
//!
//! For every interior pixel of a source frame, finds a displacement vector
//! pointing to a similar-looking patch in a target frame without testing
//! every possible displacement: random seeding, followed by alternating
//! neighbor propagation and shrinking-radius random search, after Barnes,
//! Shechtman, Finkelstein and Goldman, "PatchMatch: A randomized
//! correspondence algorithm for structural image editing" (SIGGRAPH 2009).

pub mod config;
pub mod distance;
mod init;
mod propagate;
mod random_search;
mod session;

pub use config::MatchConfig;
pub use random_search::shrink_steps;
pub use session::{match_frames, match_frames_with_progress, MatchSession};
