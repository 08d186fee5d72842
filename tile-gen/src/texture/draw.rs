//! Software raster primitives for texture generation
//!
//! Point, line, arc, and ellipse scatter primitives drawn directly into a
//! [`TextureBuffer`]. Coordinates are `i32` and may lie outside the buffer;
//! every write is bounds-checked, so primitives clip at the edges instead of
//! wrapping or panicking. Ellipse and arc bounding boxes follow the
//! `[x0, y0, x1, y1]` corner convention with y growing downward.

use super::TextureBuffer;

/// Write a pixel if (x, y) is inside the buffer, compositing src-over when the
/// color carries partial alpha. The destination keeps at least its own alpha.
#[inline]
pub(crate) fn blend_pixel(buf: &mut TextureBuffer, x: i32, y: i32, color: [u8; 4]) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= buf.width || y >= buf.height {
        return;
    }
    if color[3] == 255 {
        buf.set_pixel(x, y, color);
        return;
    }
    let a = color[3] as u32;
    let dst = buf.get_pixel(x, y);
    let over = |s: u8, d: u8| ((s as u32 * a + d as u32 * (255 - a)) / 255) as u8;
    buf.set_pixel(
        x,
        y,
        [
            over(color[0], dst[0]),
            over(color[1], dst[1]),
            over(color[2], dst[2]),
            dst[3].max(color[3]),
        ],
    );
}

/// Stamp a stroke x stroke block anchored at (x, y)
#[inline]
fn stamp(buf: &mut TextureBuffer, x: i32, y: i32, color: [u8; 4], stroke: u32) {
    let lo = -((stroke as i32 - 1) / 2);
    let hi = stroke as i32 / 2;
    for dy in lo..=hi {
        for dx in lo..=hi {
            blend_pixel(buf, x + dx, y + dy, color);
        }
    }
}

/// Draw a line between (x0, y0) and (x1, y1) using Bresenham's algorithm,
/// stamping a `stroke`-pixel-wide block at every plotted point.
pub fn draw_line(
    buf: &mut TextureBuffer,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: [u8; 4],
    stroke: u32,
) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        stamp(buf, x0, y0, color, stroke);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draw an elliptical arc inside the bounding box `[x0, y0, x1, y1]`.
///
/// Angles are degrees measured clockwise from 3 o'clock with y growing
/// downward, so 0..180 traces the lower half of the ellipse. The arc is
/// sampled parametrically at sub-degree resolution, which is gap-free for the
/// primitive sizes the material generators use.
pub fn draw_arc(
    buf: &mut TextureBuffer,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    start_deg: f32,
    end_deg: f32,
    color: [u8; 4],
    stroke: u32,
) {
    let cx = (x0 + x1) as f32 / 2.0;
    let cy = (y0 + y1) as f32 / 2.0;
    let rx = ((x1 - x0) as f32 / 2.0).max(0.5);
    let ry = ((y1 - y0) as f32 / 2.0).max(0.5);

    let span = end_deg - start_deg;
    let steps = (span.abs().ceil() as usize * 2).max(16);
    for i in 0..=steps {
        let theta = (start_deg + span * i as f32 / steps as f32).to_radians();
        let px = (cx + rx * theta.cos()).round() as i32;
        let py = (cy + ry * theta.sin()).round() as i32;
        stamp(buf, px, py, color, stroke);
    }
}

/// Fill the ellipse inscribed in the bounding box `[x0, y0, x1, y1]`.
///
/// The box spans the pixels `x0..=x1` / `y0..=y1`, so the radii cover pixel
/// extents rather than center-to-center distance; a 1px speck bounding box
/// marks its full 2x2 pixel block.
pub fn fill_ellipse(buf: &mut TextureBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: [u8; 4]) {
    let cx = (x0 + x1) as f32 / 2.0;
    let cy = (y0 + y1) as f32 / 2.0;
    let rx = (x1 - x0 + 1) as f32 / 2.0;
    let ry = (y1 - y0 + 1) as f32 / 2.0;

    for py in y0..=y1 {
        for px in x0..=x1 {
            let nx = (px as f32 - cx) / rx;
            let ny = (py as f32 - cy) / ry;
            if nx * nx + ny * ny <= 1.0 {
                blend_pixel(buf, px, py, color);
            }
        }
    }
}

/// Draw a 1px outline of the ellipse inscribed in `[x0, y0, x1, y1]`: the ring
/// of box pixels inside the ellipse but outside the ellipse shrunk by one pixel.
pub fn outline_ellipse(
    buf: &mut TextureBuffer,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: [u8; 4],
) {
    let cx = (x0 + x1) as f32 / 2.0;
    let cy = (y0 + y1) as f32 / 2.0;
    // Same pixel-extent radii as fill_ellipse so the ring hugs the fill edge.
    let rx = (x1 - x0 + 1) as f32 / 2.0;
    let ry = (y1 - y0 + 1) as f32 / 2.0;
    let inner_rx = (rx - 1.0).max(0.5);
    let inner_ry = (ry - 1.0).max(0.5);

    for py in y0..=y1 {
        for px in x0..=x1 {
            let dx = px as f32 - cx;
            let dy = py as f32 - cy;
            let outer = (dx / rx).powi(2) + (dy / ry).powi(2);
            let inner = (dx / inner_rx).powi(2) + (dy / inner_ry).powi(2);
            if outer <= 1.0 && inner > 1.0 {
                blend_pixel(buf, px, py, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];

    #[test]
    fn test_line_endpoints() {
        let mut buf = TextureBuffer::filled(16, 16, [0, 0, 0, 255]);
        draw_line(&mut buf, 2, 3, 10, 12, RED, 1);
        assert_eq!(buf.get_pixel(2, 3), RED);
        assert_eq!(buf.get_pixel(10, 12), RED);
    }

    #[test]
    fn test_line_clips_out_of_bounds() {
        let mut buf = TextureBuffer::filled(8, 8, [0, 0, 0, 255]);
        // Entirely outside; must not panic and must not touch the buffer.
        draw_line(&mut buf, -20, -20, -5, -5, RED, 2);
        assert!(buf.pixels.chunks_exact(4).all(|p| p == [0, 0, 0, 255]));
        // Partially outside clips at the edge.
        draw_line(&mut buf, 4, 4, 20, 4, RED, 1);
        assert_eq!(buf.get_pixel(7, 4), RED);
    }

    #[test]
    fn test_fill_ellipse_interior_and_exterior() {
        let mut buf = TextureBuffer::filled(20, 20, [0, 0, 0, 255]);
        fill_ellipse(&mut buf, 5, 5, 15, 15, RED);
        // Center is filled, box corners stay outside the ellipse.
        assert_eq!(buf.get_pixel(10, 10), RED);
        assert_eq!(buf.get_pixel(5, 5), [0, 0, 0, 255]);
        assert_eq!(buf.get_pixel(0, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn test_fill_ellipse_single_pixel_speck() {
        // A size-1 speck bounding box must mark its whole 2x2 block.
        let mut buf = TextureBuffer::filled(8, 8, [0, 0, 0, 255]);
        fill_ellipse(&mut buf, 3, 3, 4, 4, RED);
        for (x, y) in [(3, 3), (4, 3), (3, 4), (4, 4)] {
            assert_eq!(buf.get_pixel(x, y), RED, "({x}, {y})");
        }
        assert_eq!(buf.get_pixel(2, 3), [0, 0, 0, 255]);
        assert_eq!(buf.get_pixel(5, 4), [0, 0, 0, 255]);
    }

    #[test]
    fn test_fill_ellipse_never_empty() {
        // Every speck size the material generators use draws at least one pixel.
        for size in 1..=8 {
            let mut buf = TextureBuffer::filled(16, 16, [0, 0, 0, 255]);
            fill_ellipse(&mut buf, 4, 4, 4 + size, 4 + size, RED);
            let drawn = buf.pixels.chunks_exact(4).filter(|p| *p == RED).count();
            assert!(drawn > 0, "size {size} drew nothing");
        }
    }

    #[test]
    fn test_outline_ellipse_ring() {
        let mut buf = TextureBuffer::filled(32, 32, [0, 0, 0, 255]);
        outline_ellipse(&mut buf, 4, 4, 24, 24, RED);
        // Rim pixels are drawn, center is not.
        assert_eq!(buf.get_pixel(14, 4), RED);
        assert_eq!(buf.get_pixel(14, 24), RED);
        assert_eq!(buf.get_pixel(14, 14), [0, 0, 0, 255]);
    }

    #[test]
    fn test_arc_lower_half_only() {
        let mut buf = TextureBuffer::filled(32, 32, [0, 0, 0, 255]);
        // 0..180 with y down is the lower half of the ellipse.
        draw_arc(&mut buf, 8, 8, 24, 16, 0.0, 180.0, RED, 1);
        assert_eq!(buf.get_pixel(16, 16), RED);
        // Top of the ellipse is untouched.
        assert_eq!(buf.get_pixel(16, 8), [0, 0, 0, 255]);
    }

    #[test]
    fn test_blend_semi_transparent() {
        let mut buf = TextureBuffer::filled(4, 4, [0, 0, 0, 255]);
        blend_pixel(&mut buf, 1, 1, [255, 255, 255, 128]);
        assert_eq!(buf.get_pixel(1, 1), [128, 128, 128, 255]);
    }
}
