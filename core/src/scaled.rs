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

//! Text renderer that turns strings into cached pixel-art sprites.

use crate::draw::{draw_text, Align, Result};
use crate::glyphs::GlyphTable;
use crate::layout::layout;
use crate::raster::RasterOps;
use std::collections::HashMap;
use std::io;
use std::num::NonZeroU32;
use std::rc::Rc;

/// Options that control how a `PixelArtGenerator` turns category rows into an image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArtOptions {
    /// Whether to flip the image vertically.
    pub is_mirror_y: bool,

    /// Integer upscaling factor applied to the rows.
    pub scale: NonZeroU32,

    /// Number of rotated variants to produce, evenly spaced over a full turn.
    pub rotation_num: NonZeroU32,

    /// Strength of the vertical shading, where zero means flat colors.
    pub color_lighting: f64,
}

impl Default for ArtOptions {
    fn default() -> Self {
        let one = NonZeroU32::new(1).expect("One is not zero");
        Self { is_mirror_y: false, scale: one, rotation_num: one, color_lighting: 0.0 }
    }
}

/// External generator of pixel-art images.
pub trait PixelArtGenerator {
    /// The image handle produced by the generator.
    type Art;

    /// Builds an image out of `rows` of category symbols (`' '`, `'x'` and `'o'`).
    fn generate(&mut self, rows: &[String], options: &ArtOptions) -> Self::Art;

    /// Composites the `rotation` variant of `art` onto `raster` at `x`/`y`.
    fn draw<R: RasterOps>(
        &self,
        raster: &mut R,
        art: &Self::Art,
        x: f64,
        y: f64,
        rotation: usize,
    ) -> io::Result<()>;
}

/// Renders text with the built-in font, either directly or as cached pixel art.
///
/// Generated images are cached per text and scale for the lifetime of the renderer and are never
/// evicted.
pub struct TextRenderer<G: PixelArtGenerator> {
    glyphs: &'static GlyphTable,
    generator: G,
    cache: HashMap<String, Rc<G::Art>>,
}

impl<G: PixelArtGenerator> TextRenderer<G> {
    /// Creates a new renderer backed by the built-in font and `generator`.
    pub fn new(generator: G) -> Self {
        Self::with_glyphs(GlyphTable::builtin(), generator)
    }

    /// Creates a new renderer backed by a specific glyph table.
    pub fn with_glyphs(glyphs: &'static GlyphTable, generator: G) -> Self {
        Self { glyphs, generator, cache: HashMap::default() }
    }

    /// Returns the pixel-art generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Returns the number of cached images.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    /// Draws `text` directly onto `raster`.  See `draw::draw_text` for details.
    pub fn draw<R: RasterOps>(
        &self,
        raster: &mut R,
        text: &str,
        x: f64,
        y: f64,
        align: Align,
    ) -> Result<()> {
        draw_text(raster, self.glyphs, text, x, y, align)
    }

    /// Returns the pixel art for `text` at `scale`, generating it on first use.
    pub fn generate(&mut self, text: &str, scale: NonZeroU32) -> Result<Rc<G::Art>> {
        let key = format!("{}_{}", text, scale);
        if let Some(art) = self.cache.get(&key) {
            log::trace!("Pixel art cache hit for {}", key);
            return Ok(art.clone());
        }

        let grid = layout(self.glyphs, text, scale)?;
        log::debug!(
            "Generating pixel art for {} ({}x{} cells)",
            key,
            grid.size().width,
            grid.size().height
        );
        let art = Rc::from(self.generator.generate(&grid.rows(), &ArtOptions::default()));
        let _previous = self.cache.insert(key, art.clone());
        Ok(art)
    }

    /// Draws `text` at `scale` as pixel art onto `raster` at `x`/`y`.
    pub fn draw_scaled<R: RasterOps>(
        &mut self,
        raster: &mut R,
        text: &str,
        scale: NonZeroU32,
        x: f64,
        y: f64,
    ) -> Result<()> {
        let art = self.generate(text, scale)?;
        self.generator.draw(raster, &art, x, y, 0)?;
        Ok(())
    }
}
