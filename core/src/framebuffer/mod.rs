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

//! Memory-backed implementation of `RasterOps`.

use crate::raster::{PixelsXY, RasterOps, SizeInPixels, RGB, WHITE};
use std::convert::TryFrom;
use std::io::{self, Write};

#[cfg(test)]
mod testutils;

/// Number of bytes per pixel in the framebuffer.
const STRIDE: usize = 3;

/// Raster surface backed by an RGB888 buffer in memory.
///
/// Drawing outside of the surface is clipped.  The contents can be dumped as text or as a binary
/// PPM image.
#[derive(Debug)]
pub struct Framebuffer {
    size_pixels: SizeInPixels,
    fb: Vec<u8>,
    draw_color: RGB,
}

impl Framebuffer {
    /// Creates a new black framebuffer of `size`.
    pub fn new(size: SizeInPixels) -> Self {
        Self { size_pixels: size, fb: vec![0; size.area() * STRIDE], draw_color: WHITE }
    }

    /// Clips the user-supplied `xy` coordinates to the framebuffer.  Returns `None` if they are
    /// out of range and the buffer coordinates otherwise.
    fn clip_xy(&self, xy: PixelsXY) -> Option<(usize, usize)> {
        fn clip(value: i32, max: usize) -> Option<usize> {
            match usize::try_from(value) {
                Ok(value) if value < max => Some(value),
                _ => None,
            }
        }

        match (clip(xy.x, self.size_pixels.width), clip(xy.y, self.size_pixels.height)) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }

    /// Gets the start address of the pixel `x`/`y` in the framebuffer.
    fn fb_addr(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.size_pixels.width);
        debug_assert!(y < self.size_pixels.height);
        ((y * self.size_pixels.width) + x) * STRIDE
    }

    /// Returns the color of the pixel at `x`/`y`, or `None` if it is outside of the framebuffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<RGB> {
        self.clip_xy(PixelsXY::new(x, y)).map(|(x, y)| {
            let addr = self.fb_addr(x, y);
            (self.fb[addr], self.fb[addr + 1], self.fb[addr + 2])
        })
    }

    /// Renders the framebuffer as one line per row: `.` for black, `#` for white and `+` for any
    /// other color.
    pub fn to_text(&self) -> Vec<String> {
        if self.size_pixels.width == 0 {
            return vec![String::new(); self.size_pixels.height];
        }
        self.fb
            .chunks(self.size_pixels.width * STRIDE)
            .map(|row| {
                row.chunks(STRIDE)
                    .map(|pixel| match (pixel[0], pixel[1], pixel[2]) {
                        (0, 0, 0) => '.',
                        (255, 255, 255) => '#',
                        _ => '+',
                    })
                    .collect()
            })
            .collect()
    }

    /// Writes the framebuffer to `output` as a binary (P6) PPM image.
    pub fn write_ppm<W: Write>(&self, output: &mut W) -> io::Result<()> {
        write!(output, "P6\n{} {}\n255\n", self.size_pixels.width, self.size_pixels.height)?;
        output.write_all(&self.fb)?;
        output.flush()
    }
}

impl RasterOps for Framebuffer {
    fn set_draw_color(&mut self, color: RGB) {
        self.draw_color = color;
    }

    fn draw_pixel(&mut self, xy: PixelsXY) -> io::Result<()> {
        if let Some((x, y)) = self.clip_xy(xy) {
            let addr = self.fb_addr(x, y);
            let color = self.draw_color;
            self.fb[addr..addr + STRIDE].copy_from_slice(&[color.0, color.1, color.2]);
        }
        Ok(())
    }
}
