//! Near-white background stripping for hand-authored art
//!
//! Converts pixels close to white into fully transparent white so tree and
//! rock sprites drawn on a white canvas composite cleanly over ground tiles.
//! The per-pixel rule: a pixel is near-white iff all three of R, G, B are
//! strictly above the threshold; matching pixels become `(255, 255, 255, 0)`
//! and every other pixel is passed through untouched in all four channels.
//!
//! File-level entry points decode with the `image` crate (any format it
//! supports), strip, and re-encode as PNG over the source path. Batch
//! processing isolates per-asset failures: a missing or undecodable input is
//! recorded and skipped, while a write failure aborts the batch since it
//! signals an environment problem likely to affect every remaining asset.

use crate::texture::{write_png, TextureBuffer};
use std::path::{Path, PathBuf};

/// Default near-white threshold
pub const DEFAULT_THRESHOLD: u8 = 240;

/// Error from file-level background stripping
#[derive(Debug, thiserror::Error)]
pub enum ChromaError {
    /// Input path does not exist
    #[error("file not found: {0:?}")]
    FileNotFound(PathBuf),

    /// Input exists but cannot be decoded as an image
    #[error("failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Output could not be encoded or written (the PNG encoder surfaces
    /// encode failures as io errors, so both share this variant)
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Per-asset outcome of a batch strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripOutcome {
    /// Stripped and rewritten in place
    Stripped,
    /// Input path missing; asset skipped
    Missing,
    /// Input could not be decoded; asset skipped
    DecodeFailed(String),
}

/// One entry of the batch report
#[derive(Debug, Clone)]
pub struct StripRecord {
    pub path: PathBuf,
    pub outcome: StripOutcome,
}

/// Map near-white pixels to transparent white, leaving all others unchanged.
///
/// Purely per-pixel, so the output has the input's dimensions and the filter
/// is idempotent: stripped pixels are `(255, 255, 255, 0)` and white itself
/// is above any valid threshold, so a second pass maps them to themselves.
pub fn strip_background(input: &TextureBuffer, threshold: u8) -> TextureBuffer {
    let mut out = input.clone();
    for px in out.pixels.chunks_exact_mut(4) {
        if px[0] > threshold && px[1] > threshold && px[2] > threshold {
            px.copy_from_slice(&[255, 255, 255, 0]);
        }
    }
    out
}

/// Strip the image at `path` and overwrite it in place as PNG.
///
/// Non-RGBA sources are promoted to RGBA with full opacity before filtering.
pub fn strip_file(path: &Path, threshold: u8) -> Result<(), ChromaError> {
    let img = match image::open(path) {
        Ok(img) => img,
        Err(image::ImageError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ChromaError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ChromaError::Decode {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let rgba = img.to_rgba8();
    let buffer = TextureBuffer {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    };

    let stripped = strip_background(&buffer, threshold);
    write_png(&stripped, path).map_err(|e| ChromaError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Strip every path in `paths`, collecting a per-asset report.
///
/// Missing and undecodable inputs are logged and recorded without failing the
/// batch; at most the failing asset is lost. Write errors return `Err`
/// immediately.
pub fn strip_batch(paths: &[PathBuf], threshold: u8) -> Result<Vec<StripRecord>, ChromaError> {
    let mut report = Vec::with_capacity(paths.len());
    for path in paths {
        let outcome = match strip_file(path, threshold) {
            Ok(()) => {
                tracing::info!("Stripped background: {}", path.display());
                StripOutcome::Stripped
            }
            Err(ChromaError::FileNotFound(_)) => {
                tracing::warn!("File not found, skipping: {}", path.display());
                StripOutcome::Missing
            }
            Err(ChromaError::Decode { source, .. }) => {
                tracing::warn!("Failed to decode {}: {source}", path.display());
                StripOutcome::DecodeFailed(source.to_string())
            }
            Err(e @ ChromaError::Write { .. }) => return Err(e),
        };
        report.push(StripRecord {
            path: path.clone(),
            outcome,
        });
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_from_pixels(width: u32, height: u32, pixels: &[[u8; 4]]) -> TextureBuffer {
        TextureBuffer {
            width,
            height,
            pixels: pixels.concat(),
        }
    }

    #[test]
    fn test_strip_near_white_and_keep_rest() {
        let input = buffer_from_pixels(2, 1, &[[250, 250, 250, 255], [10, 10, 10, 255]]);
        let out = strip_background(&input, 240);
        assert_eq!(out.get_pixel(0, 0), [255, 255, 255, 0]);
        assert_eq!(out.get_pixel(1, 0), [10, 10, 10, 255]);
        assert_eq!((out.width, out.height), (2, 1));
    }

    #[test]
    fn test_threshold_is_strict() {
        // All channels must be strictly above the threshold.
        let input = buffer_from_pixels(2, 1, &[[240, 240, 240, 255], [241, 241, 241, 255]]);
        let out = strip_background(&input, 240);
        assert_eq!(out.get_pixel(0, 0), [240, 240, 240, 255]);
        assert_eq!(out.get_pixel(1, 0), [255, 255, 255, 0]);
    }

    #[test]
    fn test_mixed_channels_not_stripped() {
        // One channel at or below the threshold keeps the pixel, alpha included.
        let input = buffer_from_pixels(1, 1, &[[250, 250, 12, 77]]);
        let out = strip_background(&input, 240);
        assert_eq!(out.get_pixel(0, 0), [250, 250, 12, 77]);
    }

    #[test]
    fn test_strip_is_idempotent() {
        let input = buffer_from_pixels(
            2,
            2,
            &[
                [250, 250, 250, 255],
                [10, 10, 10, 255],
                [255, 255, 255, 0],
                [128, 240, 250, 200],
            ],
        );
        let once = strip_background(&input, 240);
        let twice = strip_background(&once, 240);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_strip_file_overwrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sprite.png");
        let input = buffer_from_pixels(2, 1, &[[250, 250, 250, 255], [10, 10, 10, 255]]);
        write_png(&input, &path).unwrap();

        strip_file(&path, DEFAULT_THRESHOLD).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [10, 10, 10, 255]);
    }

    #[test]
    fn test_strip_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.png");
        match strip_file(&missing, DEFAULT_THRESHOLD) {
            Err(ChromaError::FileNotFound(p)) => assert_eq!(p, missing),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_batch_skips_missing_and_bad_assets() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.png");
        write_png(
            &buffer_from_pixels(1, 1, &[[250, 250, 250, 255]]),
            &good,
        )
        .unwrap();
        let missing = dir.path().join("missing.png");
        let corrupt = dir.path().join("corrupt.png");
        std::fs::write(&corrupt, b"not a png").unwrap();

        let report = strip_batch(
            &[good.clone(), missing.clone(), corrupt.clone()],
            DEFAULT_THRESHOLD,
        )
        .unwrap();

        assert_eq!(report.len(), 3);
        assert_eq!(report[0].outcome, StripOutcome::Stripped);
        assert_eq!(report[1].outcome, StripOutcome::Missing);
        assert!(matches!(report[2].outcome, StripOutcome::DecodeFailed(_)));
    }
}
