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

//! Utilities to implement tests for the `Framebuffer`.

use crate::framebuffer::{Framebuffer, STRIDE};
use crate::raster::{PixelsXY, SizeInPixels, RGB};

/// Syntactic sugar to instantiate a coordinate in the pixel space.
pub(super) fn xy(x: i32, y: i32) -> PixelsXY {
    PixelsXY::new(x, y)
}

/// Syntactic sugar to instantiate a size.
pub(super) fn size(width: usize, height: usize) -> SizeInPixels {
    SizeInPixels::new(width, height)
}

/// Builder pattern to define and execute `Framebuffer` tests.
#[must_use]
pub(super) struct Tester {
    size: SizeInPixels,
    fb: Framebuffer,
    exp_fb: Vec<u8>,
}

impl Tester {
    /// Creates a new tester backed by a black framebuffer of the given `size`.
    pub(super) fn new(size: SizeInPixels) -> Self {
        Self { size, fb: Framebuffer::new(size), exp_fb: vec![0; size.area() * STRIDE] }
    }

    /// Executes an operation on the framebuffer.
    pub(super) fn op<F>(mut self, op: F) -> Self
    where
        F: Fn(&mut Framebuffer),
    {
        op(&mut self.fb);
        self
    }

    /// Records that the pixel `xy` should be `rgb` after all `op`s have been executed.
    pub(super) fn expect_pixel(mut self, xy: PixelsXY, rgb: RGB) -> Self {
        let offset = ((xy.y as usize * self.size.width) + xy.x as usize) * STRIDE;
        self.exp_fb[offset] = rgb.0;
        self.exp_fb[offset + 1] = rgb.1;
        self.exp_fb[offset + 2] = rgb.2;
        self
    }

    /// Validates recorded expectations about the changes made by all executed `op`s.
    pub(super) fn check(self) {
        if self.exp_fb != self.fb.fb {
            for y in 0..self.size.height {
                for x in 0..self.size.width {
                    let offset = (y * self.size.width + x) * STRIDE;
                    let exp_pixel = &self.exp_fb[offset..offset + STRIDE];
                    let pixel = &self.fb.fb[offset..offset + STRIDE];
                    if exp_pixel != pixel {
                        eprintln!(
                            "{}",
                            pixel_diff(
                                xy(x as i32, y as i32),
                                (exp_pixel[0], exp_pixel[1], exp_pixel[2]),
                                (pixel[0], pixel[1], pixel[2]),
                            )
                        );
                    }
                }
            }
            panic!("Pixel contents differ; see output above");
        }
    }
}

/// Describes a pixel at `xy` that was expected to be `exp` but was drawn as `got`.
pub(super) fn pixel_diff(xy: PixelsXY, exp: RGB, got: RGB) -> String {
    format!(
        ".expect_pixel(xy({:3}, {:3}), ({:3}, {:3}, {:3}))  // got ({:3}, {:3}, {:3})",
        xy.x, xy.y, exp.0, exp.1, exp.2, got.0, got.1, got.2,
    )
}
