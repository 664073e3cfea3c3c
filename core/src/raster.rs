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

//! Primitive types to describe and draw onto raster surfaces.

use std::convert::TryFrom;
use std::io;

/// Color expressed as a red, green and blue triplet.
pub type RGB = (u8, u8, u8);

/// The color used to render text directly onto a surface.
pub const WHITE: RGB = (255, 255, 255);

/// Represents a coordinate in the pixel space of a surface.
///
/// Coordinates can be negative or exceed the surface size: drawing at them is clipped by the
/// surface.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PixelsXY {
    /// The column number.
    pub x: i32,

    /// The row number.
    pub y: i32,
}

impl PixelsXY {
    /// Constructs a new coordinate at the given `(x, y)` position.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Constructs a new coordinate out of wide values, or `None` if they do not fit.
    pub fn from_i64(x: i64, y: i64) -> Option<Self> {
        match (i32::try_from(x), i32::try_from(y)) {
            (Ok(x), Ok(y)) => Some(Self { x, y }),
            _ => None,
        }
    }
}

/// Represents a rectangular size in pixels.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SizeInPixels {
    /// The width in pixels.
    pub width: usize,

    /// The height in pixels.
    pub height: usize,
}

impl SizeInPixels {
    /// Constructs a new size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Returns the number of pixels covered by this size.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Returns the number of pixels covered by this size, or `None` if it does not fit in memory.
    pub fn checked_area(&self) -> Option<usize> {
        self.width.checked_mul(self.height).filter(|area| *area <= isize::MAX as usize)
    }
}

/// Primitive operations that a raster surface must provide to render text.
pub trait RasterOps {
    /// Sets the drawing color for subsequent operations.
    fn set_draw_color(&mut self, color: RGB);

    /// Draws a single pixel at `xy` using the current drawing color.  Pixels that fall outside of
    /// the surface are silently dropped.
    fn draw_pixel(&mut self, xy: PixelsXY) -> io::Result<()>;
}
