//! Flow-field visualization via the HSV color wheel.
//!
//! Each displacement vector is converted to polar form: the angle maps to
//! hue, the magnitude (normalized by the field's maximum) to saturation,
//! with brightness fixed at maximum. Consumes the finished field read-only.

use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::{EPSILON, PARALLEL_PIXEL_THRESHOLD};
use crate::field::{Offset, OffsetField};
use crate::frame::{ColorFrame, Frame};

/// Render an offset field as an RGB color-wheel image.
pub fn field_to_color(field: &OffsetField) -> ColorFrame {
    let (h, w) = (field.height(), field.width());
    let max_magnitude = field
        .offsets()
        .iter()
        .map(Offset::magnitude)
        .fold(0.0f32, f32::max);

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        render_parallel(field, max_magnitude)
    } else {
        render_sequential(field, max_magnitude)
    }
}

/// Row-parallel rendering using Rayon. Safe here: the field is read-only.
fn render_parallel(field: &OffsetField, max_magnitude: f32) -> ColorFrame {
    let (h, w) = (field.height(), field.width());

    let rows: Vec<Vec<(f32, f32, f32)>> = (0..h)
        .into_par_iter()
        .map(|row| {
            (0..w)
                .map(|col| offset_to_rgb(field.get(row, col), max_magnitude))
                .collect()
        })
        .collect();

    let mut red = Array2::<f32>::zeros((h, w));
    let mut green = Array2::<f32>::zeros((h, w));
    let mut blue = Array2::<f32>::zeros((h, w));
    for (row, row_data) in rows.into_iter().enumerate() {
        for (col, (r, g, b)) in row_data.into_iter().enumerate() {
            red[[row, col]] = r;
            green[[row, col]] = g;
            blue[[row, col]] = b;
        }
    }

    channels_to_frame(red, green, blue)
}

fn render_sequential(field: &OffsetField, max_magnitude: f32) -> ColorFrame {
    let (h, w) = (field.height(), field.width());

    let mut red = Array2::<f32>::zeros((h, w));
    let mut green = Array2::<f32>::zeros((h, w));
    let mut blue = Array2::<f32>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            let (r, g, b) = offset_to_rgb(field.get(row, col), max_magnitude);
            red[[row, col]] = r;
            green[[row, col]] = g;
            blue[[row, col]] = b;
        }
    }

    channels_to_frame(red, green, blue)
}

fn channels_to_frame(red: Array2<f32>, green: Array2<f32>, blue: Array2<f32>) -> ColorFrame {
    ColorFrame {
        red: Frame::new(red, 8),
        green: Frame::new(green, 8),
        blue: Frame::new(blue, 8),
    }
}

/// Map one displacement to RGB: hue from the vector angle, saturation from
/// the normalized magnitude, value fixed at 1.
fn offset_to_rgb(offset: Offset, max_magnitude: f32) -> (f32, f32, f32) {
    let mut angle = offset.dy.atan2(offset.dx).to_degrees();
    if angle < 0.0 {
        angle += 360.0;
    }

    let saturation = if max_magnitude > EPSILON {
        offset.magnitude() / max_magnitude
    } else {
        0.0
    };

    hsv_to_rgb(angle, saturation, 1.0)
}

/// Standard HSV -> RGB conversion; hue in degrees [0, 360), saturation and
/// value in [0, 1].
fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> (f32, f32, f32) {
    let chroma = value * saturation;
    let sector = (hue / 60.0) % 6.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = value - chroma;
    (r + m, g + m, b + m)
}

#[cfg(test)]
mod tests {
    use super::hsv_to_rgb;
    use approx::assert_abs_diff_eq;

    #[test]
    fn primary_hues() {
        let (r, g, b) = hsv_to_rgb(0.0, 1.0, 1.0);
        assert_abs_diff_eq!(r, 1.0);
        assert_abs_diff_eq!(g, 0.0);
        assert_abs_diff_eq!(b, 0.0);

        let (r, g, b) = hsv_to_rgb(120.0, 1.0, 1.0);
        assert_abs_diff_eq!(r, 0.0);
        assert_abs_diff_eq!(g, 1.0);
        assert_abs_diff_eq!(b, 0.0);

        let (r, g, b) = hsv_to_rgb(240.0, 1.0, 1.0);
        assert_abs_diff_eq!(r, 0.0);
        assert_abs_diff_eq!(g, 0.0);
        assert_abs_diff_eq!(b, 1.0);
    }

    #[test]
    fn zero_saturation_is_white() {
        let (r, g, b) = hsv_to_rgb(37.0, 0.0, 1.0);
        assert_abs_diff_eq!(r, 1.0);
        assert_abs_diff_eq!(g, 1.0);
        assert_abs_diff_eq!(b, 1.0);
    }
}
