//! Ground material presets and texture generation
//!
//! Each material is a compile-time [`MaterialSpec`]: a base color, an accent
//! palette, and a primitive kind scattered a fixed number of times at uniform
//! random positions. Positions are sampled over `0..=width` / `0..=height`
//! inclusive, so primitives may start on the far edge and clip; that matches
//! the hand-painted look the tiles are after.
//!
//! Generation takes the RNG as an argument. Seed it for reproducible tiles,
//! or construct it from entropy for a fresh tile every run.

use super::draw::{blend_pixel, draw_arc, draw_line, fill_ellipse, outline_ellipse};
use super::TextureBuffer;
use rand::Rng;

/// Default edge length for generated ground tiles
pub const DEFAULT_TILE_SIZE: u32 = 512;

/// The closed set of ground materials the pipeline can synthesize
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Material {
    Grass,
    Dirt,
    Sand,
    Stone,
    Water,
    Forest,
}

/// Decorative primitive a material scatters over its base color
#[derive(Clone, Copy, Debug)]
pub enum Primitive {
    /// 2-3 short blades radiating up from a point: left and right blades
    /// always, a slightly longer center blade with probability 0.7.
    Tuft { min_len: i32, max_len: i32 },
    /// Lower-half ellipse arc `rise` pixels tall, stroke 2. The accent's
    /// alpha is honored, so a translucent wave tints rather than covers.
    Wave { min_len: i32, max_len: i32, rise: i32 },
    /// Filled circular speck with a square bounding box.
    Speck { min_size: i32, max_size: i32 },
    /// Single pixel.
    Point,
    /// Filled ellipse with a separate 1px outline color.
    Rock {
        min_w: i32,
        max_w: i32,
        min_h: i32,
        max_h: i32,
        outline: [u8; 4],
    },
}

/// Extra pass of single-pixel noise after the primitive scatter
#[derive(Clone, Copy, Debug)]
pub struct NoisePass {
    pub count: u32,
    pub color: [u8; 4],
}

/// Constant configuration defining one procedurally generated ground texture
#[derive(Clone, Copy, Debug)]
pub struct MaterialSpec {
    /// Opaque base color the tile is flooded with before scattering
    pub base_color: [u8; 4],
    /// 1-3 accent colors; each primitive picks one uniformly
    pub accents: &'static [[u8; 4]],
    /// Number of primitives scattered per tile
    pub count: u32,
    /// Primitive kind with its per-material size ranges
    pub primitive: Primitive,
    /// Optional fine noise pass drawn after the primitives
    pub noise: Option<NoisePass>,
}

const GRASS: MaterialSpec = MaterialSpec {
    base_color: [124, 200, 100, 255], // #7CC864
    accents: &[[160, 230, 130, 255], [80, 160, 60, 255]],
    count: 400,
    primitive: Primitive::Tuft {
        min_len: 6,
        max_len: 12,
    },
    noise: None,
};

const DIRT: MaterialSpec = MaterialSpec {
    base_color: [212, 163, 115, 255], // #D4A373
    accents: &[[180, 130, 90, 255], [230, 190, 140, 255]],
    count: 1000,
    primitive: Primitive::Speck {
        min_size: 1,
        max_size: 3,
    },
    noise: None,
};

const SAND: MaterialSpec = MaterialSpec {
    base_color: [244, 208, 63, 255], // #F4D03F
    accents: &[[220, 180, 50, 255]],
    count: 1500,
    primitive: Primitive::Point,
    noise: None,
};

const STONE: MaterialSpec = MaterialSpec {
    base_color: [168, 168, 168, 255], // #A8A8A8
    accents: &[[150, 150, 150, 255]],
    count: 50,
    primitive: Primitive::Rock {
        min_w: 10,
        max_w: 30,
        min_h: 10,
        max_h: 25,
        outline: [100, 100, 100, 255],
    },
    noise: Some(NoisePass {
        count: 500,
        color: [140, 140, 140, 255],
    }),
};

const WATER: MaterialSpec = MaterialSpec {
    base_color: [144, 224, 239, 255], // #90E0EF
    accents: &[[255, 255, 255, 128]],
    count: 200,
    primitive: Primitive::Wave {
        min_len: 10,
        max_len: 25,
        rise: 5,
    },
    noise: None,
};

const FOREST: MaterialSpec = MaterialSpec {
    base_color: [34, 139, 34, 255], // #228B22
    accents: &[[0, 100, 0, 255]],
    count: 600,
    primitive: Primitive::Speck {
        min_size: 3,
        max_size: 8,
    },
    noise: None,
};

impl Material {
    /// All materials, in generation order
    pub const ALL: [Material; 6] = [
        Material::Grass,
        Material::Dirt,
        Material::Sand,
        Material::Stone,
        Material::Water,
        Material::Forest,
    ];

    /// Short lowercase name for logs
    pub const fn name(self) -> &'static str {
        match self {
            Material::Grass => "grass",
            Material::Dirt => "dirt",
            Material::Sand => "sand",
            Material::Stone => "stone",
            Material::Water => "water",
            Material::Forest => "forest",
        }
    }

    /// Output file name for the generated tile
    pub const fn file_name(self) -> &'static str {
        match self {
            Material::Grass => "ground_grass.png",
            Material::Dirt => "ground_dirt.png",
            Material::Sand => "ground_sand.png",
            Material::Stone => "ground_stone.png",
            Material::Water => "water_tile.png",
            Material::Forest => "ground_forest.png",
        }
    }

    /// The material's constant generation parameters
    pub const fn spec(self) -> &'static MaterialSpec {
        match self {
            Material::Grass => &GRASS,
            Material::Dirt => &DIRT,
            Material::Sand => &SAND,
            Material::Stone => &STONE,
            Material::Water => &WATER,
            Material::Forest => &FOREST,
        }
    }

    /// Generate a `width` x `height` tile for this material.
    ///
    /// Flood-fills the base color, then scatters the spec's primitives at
    /// independently sampled positions, sizes, and accent colors. The same
    /// seed and dimensions produce identical pixels.
    pub fn generate(self, width: u32, height: u32, rng: &mut impl Rng) -> TextureBuffer {
        let spec = self.spec();
        let mut buf = TextureBuffer::filled(width, height, spec.base_color);

        for _ in 0..spec.count {
            let x = rng.random_range(0..=width as i32);
            let y = rng.random_range(0..=height as i32);
            let color = spec.accents[rng.random_range(0..spec.accents.len())];

            match spec.primitive {
                Primitive::Tuft { min_len, max_len } => {
                    let len = rng.random_range(min_len..=max_len);
                    draw_line(&mut buf, x, y, x - 2, y - len, color, 2);
                    draw_line(&mut buf, x, y, x + 2, y - len, color, 2);
                    if rng.random_bool(0.7) {
                        draw_line(&mut buf, x, y, x, y - len - 2, color, 2);
                    }
                }
                Primitive::Wave { min_len, max_len, rise } => {
                    let len = rng.random_range(min_len..=max_len);
                    draw_arc(&mut buf, x, y, x + len, y + rise, 0.0, 180.0, color, 2);
                }
                Primitive::Speck { min_size, max_size } => {
                    let size = rng.random_range(min_size..=max_size);
                    fill_ellipse(&mut buf, x, y, x + size, y + size, color);
                }
                Primitive::Point => {
                    blend_pixel(&mut buf, x, y, color);
                }
                Primitive::Rock {
                    min_w,
                    max_w,
                    min_h,
                    max_h,
                    outline,
                } => {
                    let w = rng.random_range(min_w..=max_w);
                    let h = rng.random_range(min_h..=max_h);
                    fill_ellipse(&mut buf, x, y, x + w, y + h, color);
                    outline_ellipse(&mut buf, x, y, x + w, y + h, outline);
                }
            }
        }

        if let Some(noise) = spec.noise {
            for _ in 0..noise.count {
                let x = rng.random_range(0..=width as i32);
                let y = rng.random_range(0..=height as i32);
                blend_pixel(&mut buf, x, y, noise.color);
            }
        }

        buf
    }
}
