use ndarray::Array2;

/// Displacement vector linking a source pixel to a target position.
/// `dx` moves along columns, `dy` along rows.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    pub fn magnitude(&self) -> f32 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }
}

/// Dense per-pixel map of displacement vectors, same spatial dimensions as
/// the images being matched.
///
/// The field is exclusively owned by the matching session and mutated in
/// place. Only cells in the interior region `[border, dim - border)` on each
/// axis are ever read or written; cells inside the border margin keep the
/// zero offset from allocation and carry no meaning for callers.
#[derive(Clone, Debug, PartialEq)]
pub struct OffsetField {
    data: Array2<Offset>,
    border: usize,
}

impl OffsetField {
    /// Allocate a zero-filled field with the given border margin
    /// (= patch radius).
    pub fn new(height: usize, width: usize, border: usize) -> Self {
        Self {
            data: Array2::from_elem((height, width), Offset::default()),
            border,
        }
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn border(&self) -> usize {
        self.border
    }

    pub fn get(&self, row: usize, col: usize) -> Offset {
        self.data[[row, col]]
    }

    pub fn set(&mut self, row: usize, col: usize, offset: Offset) {
        self.data[[row, col]] = offset;
    }

    /// Read-only view of the raw offset grid.
    pub fn offsets(&self) -> &Array2<Offset> {
        &self.data
    }

    /// True when `(row, col)` lies inside the interior region, i.e. a full
    /// patch around it fits within the image.
    pub fn is_interior(&self, row: isize, col: isize) -> bool {
        let border = self.border as isize;
        row >= border
            && row < self.height() as isize - border
            && col >= border
            && col < self.width() as isize - border
    }
}

/// Resolve a displaced position to the sample grid by rounding each
/// component to the nearest pixel.
pub fn resolve(row: usize, col: usize, offset: Offset) -> (isize, isize) {
    (
        (row as f32 + offset.dy).round() as isize,
        (col as f32 + offset.dx).round() as isize,
    )
}
