//! Ground-tile texture asset pipeline
//!
//! This library prepares 2D ground-tile assets: it procedurally synthesizes
//! tileable-style ground textures (grass, dirt, sand, stone, water, forest) by
//! scattering randomized primitives over a base color, and it strips near-white
//! backgrounds from hand-authored art by converting matching pixels to
//! transparent.
//!
//! # Texture Example
//! ```no_run
//! use tile_gen::texture::{write_png, Material};
//! use rand::SeedableRng;
//! use std::path::Path;
//!
//! let mut rng = rand_pcg::Pcg32::seed_from_u64(42);
//! let tex = Material::Grass.generate(512, 512, &mut rng);
//! write_png(&tex, Path::new("ground_grass.png"))?;
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # Chroma-Key Example
//! ```no_run
//! use tile_gen::chroma::{strip_file, DEFAULT_THRESHOLD};
//! use std::path::Path;
//!
//! // Overwrites the file in place with a PNG whose near-white pixels
//! // have become transparent.
//! strip_file(Path::new("tree_green.png"), DEFAULT_THRESHOLD)?;
//! # Ok::<(), tile_gen::chroma::ChromaError>(())
//! ```

pub mod chroma;
pub mod texture;
