//! PNG export for texture buffers

use super::TextureBuffer;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a [`TextureBuffer`] to `path` as an RGBA8 PNG.
///
/// Existing files are overwritten unconditionally; the pipeline always
/// regenerates tiles rather than checking for previous output.
pub fn write_png(texture: &TextureBuffer, path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let w = BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, texture.width, texture.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    let mut writer = encoder.write_header().map_err(std::io::Error::other)?;
    writer
        .write_image_data(&texture.pixels)
        .map_err(std::io::Error::other)?;

    Ok(())
}
