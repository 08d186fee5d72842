//! Procedural ground-tile texture synthesis
//!
//! Each material fills a buffer with its base color and scatters a fixed number
//! of randomized decorative primitives on top (grass tufts, wave arcs, dirt
//! specks, rocks, leaves). No noise functions and no seam correction: the
//! scatter keeps the tiles simple and hand-painted looking.
//!
//! # Example
//! ```no_run
//! use tile_gen::texture::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand_pcg::Pcg32::seed_from_u64(7);
//! for material in Material::ALL {
//!     let tex = material.generate(512, 512, &mut rng);
//!     write_png(&tex, material.file_name().as_ref()).unwrap();
//! }
//! ```

mod draw;
mod export;
mod materials;

pub use draw::{draw_arc, draw_line, fill_ellipse, outline_ellipse};
pub use export::write_png;
pub use materials::{Material, MaterialSpec, NoisePass, Primitive, DEFAULT_TILE_SIZE};

/// RGBA pixel grid that generators draw into and the chroma-key filter maps over
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TextureBuffer {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// RGBA pixel data (4 bytes per pixel, row-major order)
    pub pixels: Vec<u8>,
}

impl TextureBuffer {
    /// Create a new buffer initialized to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            // Size math in usize: u32 would overflow past 32768x32768.
            pixels: vec![0u8; width as usize * height as usize * 4],
        }
    }

    /// Create a buffer filled with a solid color
    pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Self {
        let mut buffer = Self::new(width, height);
        for chunk in buffer.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&color);
        }
        buffer
    }

    /// Get pixel at (x, y)
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Set pixel at (x, y)
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_buffer_new() {
        let buf = TextureBuffer::new(64, 64);
        assert_eq!(buf.width, 64);
        assert_eq!(buf.height, 64);
        assert_eq!(buf.pixels.len(), 64 * 64 * 4);
        assert!(buf.pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_texture_buffer_filled() {
        let color = [124, 200, 100, 255];
        let buf = TextureBuffer::filled(8, 8, color);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(buf.get_pixel(x, y), color);
            }
        }
    }

    #[test]
    fn test_texture_buffer_non_square_indexing() {
        let mut buf = TextureBuffer::new(5, 3);
        buf.set_pixel(4, 2, [1, 2, 3, 4]);
        assert_eq!(buf.get_pixel(4, 2), [1, 2, 3, 4]);
        assert_eq!(buf.pixels.len(), 5 * 3 * 4);
        // (4, 2) is the last pixel in row-major order.
        assert_eq!(buf.pixels[4 * 14..], [1, 2, 3, 4]);
    }

    #[test]
    fn test_texture_buffer_set_get_pixel() {
        let mut buf = TextureBuffer::new(4, 4);
        let color = [100, 150, 200, 255];
        buf.set_pixel(2, 3, color);
        assert_eq!(buf.get_pixel(2, 3), color);
        assert_eq!(buf.get_pixel(0, 0), [0, 0, 0, 0]);
    }
}
