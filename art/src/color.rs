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

//! Color conversions.

use pixtext_core::raster::RGB;

/// Step between the channel levels allowed when limiting colors.
const LIMITED_STEP: f64 = 85.0;

/// Color with floating point channels, nominally in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Rgbf(pub(crate) f64, pub(crate) f64, pub(crate) f64);

impl Rgbf {
    /// Converts a hue/saturation/value triplet, all in `[0, 1]`, to RGB.
    pub(crate) fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let h = (hue - hue.floor()) * 6.0;
        let i = h.floor();
        let f = h - i;
        let p = value * (1.0 - saturation);
        let q = value * (1.0 - f * saturation);
        let t = value * (1.0 - (1.0 - f) * saturation);
        match (i as u8) % 6 {
            0 => Rgbf(value, t, p),
            1 => Rgbf(q, value, p),
            2 => Rgbf(p, value, t),
            3 => Rgbf(p, q, value),
            4 => Rgbf(t, p, value),
            _ => Rgbf(value, p, q),
        }
    }

    /// Multiplies all channels by `factor`.
    pub(crate) fn scale(self, factor: f64) -> Self {
        Rgbf(self.0 * factor, self.1 * factor, self.2 * factor)
    }

    /// Converts to 8-bit channels, clamping out-of-range values and optionally quantizing them.
    pub(crate) fn to_rgb(self, limit: bool) -> RGB {
        let channel = |c: f64| {
            let mut c = (c * 255.0).round().max(0.0).min(255.0);
            if limit {
                c = (c / LIMITED_STEP).round() * LIMITED_STEP;
            }
            c as u8
        };
        (channel(self.0), channel(self.1), channel(self.2))
    }
}
