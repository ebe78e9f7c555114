//! Image rotation onto a grown canvas.
//!
//! Rotating an axis-aligned image produces content whose bounding box is
//! larger than the source, so the output canvas is expanded to fit and the
//! rotated content recentred; pixels outside the source map to black.
//!
//! # Algorithm
//!
//! The rotation uses inverse mapping: for each pixel of the output canvas,
//! the contributing source position is found by rotating the pixel's
//! offset from the canvas center and sampling bilinearly.
//!
//! # Sign convention
//!
//! `rotate_image(img, angle)` moves the image *content* the same way the
//! coordinate transform `Point::rotated_about` with `-angle` moves points.
//! A bounding box that follows rotated content must therefore rotate its
//! corners by the negated angle (see `augment::sampler`).

use crate::buffer::ImageBuffer;

/// Canvas dimensions needed to hold an image of `width x height` rotated
/// by `angle_degrees` without clipping.
///
/// Computed explicitly from the geometry: the four source corners are
/// rotated about the image center and their axis-aligned bounding extent
/// taken. Never returns a zero dimension.
pub fn rotated_canvas_size(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    let w = f64::from(width);
    let h = f64::from(height);
    let (sin, cos) = angle_degrees.to_radians().sin_cos();

    let corners = [(0.0, 0.0), (w, 0.0), (0.0, h), (w, h)];
    let (cx, cy) = (w / 2.0, h / 2.0);

    let mut min_x = f64::MAX;
    let mut max_x = f64::MIN;
    let mut min_y = f64::MAX;
    let mut max_y = f64::MIN;

    for (x, y) in corners {
        let (dx, dy) = (x - cx, y - cy);
        let rx = cos * dx - sin * dy;
        let ry = sin * dx + cos * dy;
        min_x = min_x.min(rx);
        max_x = max_x.max(rx);
        min_y = min_y.min(ry);
        max_y = max_y.max(ry);
    }

    let new_w = (max_x - min_x).round() as u32;
    let new_h = (max_y - min_y).round() as u32;

    (new_w.max(1), new_h.max(1))
}

/// Rotate an image by `angle_degrees` onto a grown canvas.
///
/// The output dimensions are [`rotated_canvas_size`] of the input; the
/// rotated content is centred on the new canvas and uncovered canvas
/// regions are black. Sampling is bilinear. Angle zero returns a copy.
pub fn rotate_image(image: &ImageBuffer, angle_degrees: f64) -> ImageBuffer {
    if angle_degrees.abs() < 1e-9 {
        return image.clone();
    }

    let (dst_w, dst_h) = rotated_canvas_size(image.width, image.height, angle_degrees);

    // Inverse map: destination offsets rotate by +angle back into the
    // source frame, which makes the forward content motion -angle and
    // keeps the convention in the module docs true.
    let (sin, cos) = angle_degrees.to_radians().sin_cos();

    let src_cx = f64::from(image.width) / 2.0;
    let src_cy = f64::from(image.height) / 2.0;
    let dst_cx = f64::from(dst_w) / 2.0;
    let dst_cy = f64::from(dst_h) / 2.0;

    let mut output = ImageBuffer::zeroed(dst_w, dst_h);

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            let dx = f64::from(dst_x) - dst_cx;
            let dy = f64::from(dst_y) - dst_cy;

            let src_x = dx * cos - dy * sin + src_cx;
            let src_y = dx * sin + dy * cos + src_cy;

            let pixel = sample_bilinear(image, src_x, src_y);

            let dst_idx = ((dst_y * dst_w + dst_x) * 3) as usize;
            output.pixels[dst_idx] = pixel[0];
            output.pixels[dst_idx + 1] = pixel[1];
            output.pixels[dst_idx + 2] = pixel[2];
        }
    }

    output
}

#[inline]
fn get_pixel_f64(image: &ImageBuffer, px: usize, py: usize) -> [f64; 3] {
    let idx = (py * image.width as usize + px) * 3;
    [
        f64::from(image.pixels[idx]),
        f64::from(image.pixels[idx + 1]),
        f64::from(image.pixels[idx + 2]),
    ]
}

/// Sample a pixel with bilinear interpolation; out-of-bounds positions
/// sample black.
fn sample_bilinear(image: &ImageBuffer, x: f64, y: f64) -> [u8; 3] {
    let (w, h) = (i64::from(image.width), i64::from(image.height));

    if x < 0.0 || x >= (w - 1) as f64 || y < 0.0 || y >= (h - 1) as f64 {
        return [0, 0, 0];
    }

    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = get_pixel_f64(image, x0, y0);
    let p10 = get_pixel_f64(image, x0 + 1, y0);
    let p01 = get_pixel_f64(image, x0, y0 + 1);
    let p11 = get_pixel_f64(image, x0 + 1, y0 + 1);

    let mut result = [0u8; 3];
    for i in 0..3 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}
