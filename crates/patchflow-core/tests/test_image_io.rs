use ndarray::Array2;

use patchflow_core::frame::{ColorFrame, Frame};
use patchflow_core::io::{load_image, save_color_image, save_color_png};

fn make_gradient_color(h: usize, w: usize) -> ColorFrame {
    let mut red = Array2::<f32>::zeros((h, w));
    let mut green = Array2::<f32>::zeros((h, w));
    let blue = Array2::<f32>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            red[[row, col]] = row as f32 / h as f32;
            green[[row, col]] = col as f32 / w as f32;
        }
    }
    ColorFrame {
        red: Frame::new(red, 8),
        green: Frame::new(green, 8),
        blue: Frame::new(blue, 8),
    }
}

#[test]
fn png_round_trip_preserves_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flow.png");

    let color = make_gradient_color(24, 32);
    save_color_png(&color, &path).unwrap();

    let reloaded = load_image(&path).unwrap();
    assert_eq!(reloaded.height(), 24);
    assert_eq!(reloaded.width(), 32);
}

#[test]
fn extension_dispatch_accepts_tiff() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flow.tiff");

    let color = make_gradient_color(16, 16);
    save_color_image(&color, &path).unwrap();
    assert!(path.exists());
}
