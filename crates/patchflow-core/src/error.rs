use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchflowError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Image dimensions differ: {source_width}x{source_height} vs {target_width}x{target_height}")]
    DimensionMismatch {
        source_width: usize,
        source_height: usize,
        target_width: usize,
        target_height: usize,
    },

    #[error("Image {width}x{height} too small for patch radius {patch_radius} (needs more than {min} per axis)")]
    ImageTooSmall {
        width: usize,
        height: usize,
        patch_radius: usize,
        min: usize,
    },
}

pub type Result<T> = std::result::Result<T, PatchflowError>;
