// pixtext
// Copyright 2026 The pixtext Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Generated images and their compositing onto raster surfaces.

use pixtext_core::raster::{PixelsXY, RasterOps, SizeInPixels, RGB};
use std::io;

/// Slack added to sampling coordinates so that values that should be exact integers but are off
/// by rounding errors land on the right pixel.
const SAMPLE_EPSILON: f64 = 1e-9;

/// A rectangular image with transparent pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    size: SizeInPixels,
    pixels: Vec<Option<RGB>>,
}

impl Sprite {
    /// Creates a new sprite from row-major `pixels` where `None` is transparent.
    pub(crate) fn new(size: SizeInPixels, pixels: Vec<Option<RGB>>) -> Self {
        debug_assert_eq!(size.area(), pixels.len());
        Self { size, pixels }
    }

    /// Returns the dimensions of the sprite.
    pub fn size(&self) -> SizeInPixels {
        self.size
    }

    /// Returns the color of the pixel at `x`/`y`, or `None` if it is transparent or out of range.
    pub fn pixel(&self, x: usize, y: usize) -> Option<RGB> {
        if x < self.size.width && y < self.size.height {
            self.pixels[y * self.size.width + x]
        } else {
            None
        }
    }

    /// Returns a copy of this sprite rotated by `angle` radians around its center.
    ///
    /// The result is a square large enough to hold the sprite at any angle, with the sprite
    /// centered in it.  Pixels are sampled from their nearest source pixel.
    pub(crate) fn rotated(&self, angle: f64) -> Sprite {
        let (width, height) = (self.size.width as f64, self.size.height as f64);
        let side = (width.hypot(height).ceil() as usize).max(self.size.width).max(self.size.height);
        let half = side as f64 / 2.0;
        let (sin, cos) = angle.sin_cos();

        let mut pixels = Vec::with_capacity(side * side);
        for dy in 0..side {
            for dx in 0..side {
                let px = dx as f64 + 0.5 - half;
                let py = dy as f64 + 0.5 - half;
                let sx = (px * cos + py * sin + width / 2.0 + SAMPLE_EPSILON).floor();
                let sy = (-px * sin + py * cos + height / 2.0 + SAMPLE_EPSILON).floor();
                if sx < 0.0 || sy < 0.0 {
                    pixels.push(None);
                } else {
                    pixels.push(self.pixel(sx as usize, sy as usize));
                }
            }
        }
        Sprite::new(SizeInPixels::new(side, side), pixels)
    }

    /// Composites the sprite onto `raster` centered at `x`/`y`, skipping transparent pixels.
    pub fn draw<R: RasterOps>(&self, raster: &mut R, x: f64, y: f64) -> io::Result<()> {
        let x0 = (x - self.size.width as f64 / 2.0).floor() as i64;
        let y0 = (y - self.size.height as f64 / 2.0).floor() as i64;

        let mut color = None;
        for (i, pixel) in self.pixels.iter().enumerate() {
            let pixel = match pixel {
                Some(pixel) => *pixel,
                None => continue,
            };
            let dx = (i % self.size.width) as i64;
            let dy = (i / self.size.width) as i64;
            let xy = match PixelsXY::from_i64(x0.saturating_add(dx), y0.saturating_add(dy)) {
                Some(xy) => xy,
                None => continue,
            };
            if color != Some(pixel) {
                raster.set_draw_color(pixel);
                color = Some(pixel);
            }
            raster.draw_pixel(xy)?;
        }
        Ok(())
    }
}

/// Image handle produced by the generator: one sprite per rotation variant.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelArt {
    variants: Vec<Sprite>,
}

impl PixelArt {
    /// Creates a new image out of its rotation `variants`, of which there must be at least one.
    pub(crate) fn new(variants: Vec<Sprite>) -> Self {
        debug_assert!(!variants.is_empty());
        Self { variants }
    }

    /// Returns the number of rotation variants.
    pub fn rotations(&self) -> usize {
        self.variants.len()
    }

    /// Returns the sprite for the `rotation` variant, wrapping around the number of variants.
    pub fn variant(&self, rotation: usize) -> &Sprite {
        &self.variants[rotation % self.variants.len()]
    }

    /// Returns the dimensions of the `rotation` variant.
    pub fn size(&self, rotation: usize) -> SizeInPixels {
        self.variant(rotation).size()
    }
}
