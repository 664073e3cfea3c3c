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

//! Immediate rendering of text onto a raster surface.

use crate::charmap::CharClass;
use crate::glyphs::{Glyph, GlyphTable, GLYPH_ADVANCE};
use crate::raster::{PixelsXY, RasterOps, WHITE};
use std::io;
use std::str::FromStr;

/// Rendering errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The text contains a character that the font cannot render.
    #[error("invalid char: {0}")]
    InvalidCharacter(char),

    /// The text cannot be laid out at the requested scale.
    #[error("text too large at scale {0}")]
    TooLarge(u32),

    /// The raster surface failed to draw.
    #[error("{0}")]
    IoError(#[from] io::Error),
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Horizontal placement of text relative to the requested `x` coordinate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Align {
    /// The text starts at `x`.
    Left,

    /// The text ends at `x`.
    Right,

    /// The text is centered around `x`.
    Center,
}

impl Default for Align {
    fn default() -> Self {
        Align::Center
    }
}

impl FromStr for Align {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Align::Left),
            "right" => Ok(Align::Right),
            "center" => Ok(Align::Center),
            _ => Err(format!("Invalid alignment {}: must be left, right or center", s)),
        }
    }
}

/// Computes the width in pixels taken by `text` when rendered with the fixed advance.
pub fn text_width(text: &str) -> usize {
    text.chars().count() * GLYPH_ADVANCE
}

/// Returns the glyph to render for `ch`, `None` for blanks, or an error if `ch` is unsupported.
pub(crate) fn resolve(glyphs: &GlyphTable, ch: char) -> Result<Option<&Glyph>> {
    match glyphs.classify(ch) {
        CharClass::Invalid => Err(Error::InvalidCharacter(ch)),
        class => Ok(class.glyph_index().and_then(|i| glyphs.glyph(i))),
    }
}

/// Computes the top-left corner of the first glyph of `text` anchored at `x`/`y`.
fn origin(text: &str, x: f64, y: f64, align: Align) -> (i64, i64) {
    let width = text_width(text) as f64;
    let x = match align {
        Align::Left => x,
        Align::Right => x - width,
        Align::Center => x - width / 2.0,
    };
    (x.floor() as i64, y.floor() as i64)
}

/// Draws `text` in white onto `raster` at `x`/`y` following `align`.
///
/// Rendering stops at the first unsupported character, leaving any previous glyphs drawn.
/// Dots whose coordinates do not fit in the pixel space are skipped like any other clipped pixel.
pub fn draw_text<R: RasterOps>(
    raster: &mut R,
    glyphs: &GlyphTable,
    text: &str,
    x: f64,
    y: f64,
    align: Align,
) -> Result<()> {
    let (mut x0, y0) = origin(text, x, y, align);
    raster.set_draw_color(WHITE);
    for ch in text.chars() {
        if let Some(glyph) = resolve(glyphs, ch)? {
            for dot in glyph.dots() {
                let x = x0.saturating_add(i64::from(dot.x));
                let y = y0.saturating_add(i64::from(dot.y));
                if let Some(xy) = PixelsXY::from_i64(x, y) {
                    raster.draw_pixel(xy)?;
                }
            }
        }
        x0 = x0.saturating_add(GLYPH_ADVANCE as i64);
    }
    Ok(())
}
