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

//! Default pixel-art generator.

use crate::color::Rgbf;
use crate::spec::ArtStyle;
use crate::sprite::{PixelArt, Sprite};
use pixtext_core::layout::Cell;
use pixtext_core::raster::{RasterOps, SizeInPixels, RGB};
use pixtext_core::{ArtOptions, PixelArtGenerator};
use std::f64::consts::PI;
use std::io;

/// Generator that colors category cells according to an `ArtStyle`.
#[derive(Debug, Default)]
pub struct DotArtGenerator {
    style: ArtStyle,
}

impl DotArtGenerator {
    /// Creates a new generator that renders images with `style`.
    pub fn new(style: ArtStyle) -> Self {
        Self { style }
    }

    /// Computes the color of a `cell` located at row `y` of an image `height` rows tall.
    fn color(&self, cell: Cell, y: usize, height: usize, lighting: f64) -> Option<RGB> {
        let base = Rgbf::from_hsv(self.style.hue, self.style.saturation, self.style.value);
        let base = match cell {
            Cell::Background => return None,
            Cell::Fill => base,
            Cell::Outline => base.scale(1.0 - self.style.edge_darkness),
        };
        let shade = 1.0 + lighting * (0.5 - (y as f64 + 0.5) / height as f64);
        Some(base.scale(shade).to_rgb(self.style.is_limiting_colors))
    }
}

/// Parses `rows` of category symbols into a row-major grid, padding short rows with background.
fn parse_rows(rows: &[String]) -> (SizeInPixels, Vec<Cell>) {
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    let mut cells = Vec::with_capacity(width * rows.len());
    for row in rows {
        let mut n = 0;
        for ch in row.chars() {
            cells.push(Cell::from_symbol(ch));
            n += 1;
        }
        cells.resize(cells.len() + (width - n), Cell::Background);
    }
    (SizeInPixels::new(width, rows.len()), cells)
}

impl PixelArtGenerator for DotArtGenerator {
    type Art = PixelArt;

    fn generate(&mut self, rows: &[String], options: &ArtOptions) -> Self::Art {
        let (size, cells) = parse_rows(rows);
        let scale = options.scale.get() as usize;
        let out_size = SizeInPixels::new(size.width * scale, size.height * scale);

        let mut pixels = Vec::with_capacity(out_size.area());
        for y in 0..out_size.height {
            let sy = if options.is_mirror_y { size.height - 1 - y / scale } else { y / scale };
            for x in 0..out_size.width {
                let cell = cells[sy * size.width + x / scale];
                pixels.push(self.color(cell, y, out_size.height, options.color_lighting));
            }
        }
        let sprite = Sprite::new(out_size, pixels);

        let rotation_num = options.rotation_num.get();
        let variants = if rotation_num == 1 {
            vec![sprite]
        } else {
            (0..rotation_num)
                .map(|i| sprite.rotated(2.0 * PI * f64::from(i) / f64::from(rotation_num)))
                .collect()
        };
        log::trace!(
            "Generated {} variants of {}x{} pixels",
            variants.len(),
            out_size.width,
            out_size.height
        );
        PixelArt::new(variants)
    }

    fn draw<R: RasterOps>(
        &self,
        raster: &mut R,
        art: &Self::Art,
        x: f64,
        y: f64,
        rotation: usize,
    ) -> io::Result<()> {
        art.variant(rotation).draw(raster, x, y)
    }
}
