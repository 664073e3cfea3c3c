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

//! Test utilities for the renderers.

use crate::raster::{PixelsXY, RasterOps, RGB};
use crate::scaled::{ArtOptions, PixelArtGenerator};
use std::cell::RefCell;
use std::io;

/// Mock raster surface that captures drawing operations.
#[derive(Default)]
pub(crate) struct RasterRecorder {
    colors: Vec<RGB>,
    pixels: Vec<(i32, i32)>,
    fail_after: Option<usize>,
}

impl RasterRecorder {
    /// Makes `draw_pixel` fail once `n` pixels have been recorded.
    pub(crate) fn fail_after(&mut self, n: usize) {
        self.fail_after = Some(n);
    }

    /// Returns the sequence of colors set via `set_draw_color`.
    pub(crate) fn colors(&self) -> Vec<RGB> {
        self.colors.clone()
    }

    /// Returns the coordinates of all drawn pixels, in drawing order.
    pub(crate) fn pixels(&self) -> Vec<(i32, i32)> {
        self.pixels.clone()
    }
}

impl RasterOps for RasterRecorder {
    fn set_draw_color(&mut self, color: RGB) {
        self.colors.push(color);
    }

    fn draw_pixel(&mut self, xy: PixelsXY) -> io::Result<()> {
        if self.fail_after == Some(self.pixels.len()) {
            return Err(io::Error::new(io::ErrorKind::Other, "Injected failure"));
        }
        self.pixels.push((xy.x, xy.y));
        Ok(())
    }
}

/// Image produced by the `CountingGenerator`: the raw inputs it was given.
#[derive(Debug)]
pub(crate) struct RecordedArt {
    /// Sequence number of the generation that produced this image, starting at 1.
    pub(crate) id: usize,

    /// The rows passed to `generate`.
    pub(crate) rows: Vec<String>,

    /// The options passed to `generate`.
    pub(crate) options: ArtOptions,
}

/// Pixel-art generator that counts generations and records draw requests.
#[derive(Default)]
pub(crate) struct CountingGenerator {
    generations: usize,
    draws: RefCell<Vec<String>>,
}

impl CountingGenerator {
    /// Returns how many times `generate` has been called.
    pub(crate) fn generations(&self) -> usize {
        self.generations
    }

    /// Returns a textual description of all `draw` calls.
    pub(crate) fn draws(&self) -> Vec<String> {
        self.draws.borrow().clone()
    }
}

impl PixelArtGenerator for CountingGenerator {
    type Art = RecordedArt;

    fn generate(&mut self, rows: &[String], options: &ArtOptions) -> Self::Art {
        self.generations += 1;
        RecordedArt { id: self.generations, rows: rows.to_vec(), options: *options }
    }

    fn draw<R: RasterOps>(
        &self,
        _raster: &mut R,
        art: &Self::Art,
        x: f64,
        y: f64,
        rotation: usize,
    ) -> io::Result<()> {
        self.draws
            .borrow_mut()
            .push(format!("draw: {} at ({}, {}) rotation {}", art.id, x, y, rotation));
        Ok(())
    }
}
