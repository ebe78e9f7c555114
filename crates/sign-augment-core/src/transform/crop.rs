//! Zero-padded cropping.

use crate::buffer::ImageBuffer;
use crate::geometry::Rect;

/// Cut `bounds` out of `image`, filling any part of the window that falls
/// outside the source with black pixels.
///
/// The window may lie partially or entirely outside the source; reads
/// never go out of bounds. The in-bounds span of each scanline is copied
/// as a single slice, only the remainder stays zero.
pub fn cut_with_zero_padding(image: &ImageBuffer, bounds: &Rect) -> ImageBuffer {
    let out_w = bounds.width() as u32;
    let out_h = bounds.height() as u32;
    let mut canvas = ImageBuffer::zeroed(out_w, out_h);

    let img_w = i64::from(image.width);
    let img_h = i64::from(image.height);
    let x1 = i64::from(bounds.x1());
    let y1 = i64::from(bounds.y1());

    // Horizontal span of the canvas whose source column is in bounds;
    // identical for every row.
    let dst_x_start = (-x1).clamp(0, i64::from(out_w));
    let dst_x_end = (img_w - x1).clamp(0, i64::from(out_w));
    if dst_x_start >= dst_x_end {
        return canvas;
    }
    let row_bytes = ((dst_x_end - dst_x_start) * 3) as usize;

    for dst_y in 0..i64::from(out_h) {
        let src_y = y1 + dst_y;
        if src_y < 0 || src_y >= img_h {
            continue;
        }

        let src_start = ((src_y * img_w + x1 + dst_x_start) * 3) as usize;
        let dst_start = ((dst_y * i64::from(out_w) + dst_x_start) * 3) as usize;

        canvas.pixels[dst_start..dst_start + row_bytes]
            .copy_from_slice(&image.pixels[src_start..src_start + row_bytes]);
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test image where each pixel value encodes its position.
    fn test_image(width: u32, height: u32) -> ImageBuffer {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.push(v);
                pixels.push(v);
                pixels.push(v);
            }
        }
        ImageBuffer::new(width, height, pixels)
    }

    #[test]
    fn test_interior_window_is_exact_copy() {
        let img = test_image(10, 10);
        let bounds = Rect::new(2.0, 3.0, 6.0, 8.0).unwrap();

        let out = cut_with_zero_padding(&img, &bounds);
        assert_eq!(out.width, 4);
        assert_eq!(out.height, 5);

        for y in 0..out.height {
            for x in 0..out.width {
                assert_eq!(out.pixel(x, y), img.pixel(x + 2, y + 3));
            }
        }
    }

    #[test]
    fn test_full_window_copies_everything() {
        let img = test_image(8, 6);
        let bounds = Rect::new(0.0, 0.0, 8.0, 6.0).unwrap();

        let out = cut_with_zero_padding(&img, &bounds);
        assert_eq!(out, img);
    }

    #[test]
    fn test_window_overhanging_top_left() {
        let img = test_image(10, 10);
        let bounds = Rect::new(-3.0, -2.0, 4.0, 5.0).unwrap();

        let out = cut_with_zero_padding(&img, &bounds);
        assert_eq!(out.width, 7);
        assert_eq!(out.height, 7);

        for y in 0..out.height {
            for x in 0..out.width {
                let src_x = x as i32 - 3;
                let src_y = y as i32 - 2;
                if src_x >= 0 && src_y >= 0 {
                    assert_eq!(out.pixel(x, y), img.pixel(src_x as u32, src_y as u32));
                } else {
                    assert_eq!(out.pixel(x, y), [0, 0, 0], "padding not black at ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_window_overhanging_bottom_right() {
        let img = test_image(10, 10);
        let bounds = Rect::new(7.0, 8.0, 13.0, 12.0).unwrap();

        let out = cut_with_zero_padding(&img, &bounds);

        for y in 0..out.height {
            for x in 0..out.width {
                let src_x = x + 7;
                let src_y = y + 8;
                if src_x < 10 && src_y < 10 {
                    assert_eq!(out.pixel(x, y), img.pixel(src_x, src_y));
                } else {
                    assert_eq!(out.pixel(x, y), [0, 0, 0]);
                }
            }
        }
    }

    #[test]
    fn test_window_entirely_outside_is_black() {
        let img = test_image(10, 10);

        for bounds in [
            Rect::new(-20.0, -20.0, -10.0, -10.0).unwrap(),
            Rect::new(50.0, 50.0, 60.0, 55.0).unwrap(),
            Rect::new(-20.0, 2.0, -10.0, 8.0).unwrap(),
        ] {
            let out = cut_with_zero_padding(&img, &bounds);
            assert!(out.pixels.iter().all(|&v| v == 0));
        }
    }
}
