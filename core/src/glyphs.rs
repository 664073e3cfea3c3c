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

//! Decoder for the built-in bit-packed 4x5 font.

use crate::charmap::{CharClass, CharMap};
use once_cell::sync::Lazy;

/// Width of a glyph cell, in pixels.
pub const GLYPH_WIDTH: usize = 4;

/// Height of a glyph cell, in pixels.
pub const GLYPH_HEIGHT: usize = 5;

/// Horizontal distance between the origins of two consecutive glyphs, in pixels.
pub const GLYPH_ADVANCE: usize = 5;

/// Number of glyphs stored in `FONT_WORDS`.
pub const GLYPH_COUNT: usize = 66;

/// The built-in font, packed as a stream of bits read from the least significant bit of each word.
///
/// Each glyph takes 20 consecutive bits, one per cell of its 4x5 grid in row-major order.
pub const FONT_WORDS: [u32; 42] = [
    0x4644AAA4, 0x6F2496E4, 0xF5646949, 0x167871F4, 0x2489F697, 0xE9669696, 0x79F99668, 0x91967979,
    0x1F799976, 0x1171FF17, 0xF99ED196, 0xEE444E99, 0x53592544, 0xF9F11119, 0x9DDB9999, 0x79769996,
    0x7ED99611, 0x861E9979, 0x994444E7, 0x46699699, 0x6996FD99, 0xF4469999, 0x2224F248, 0x26244424,
    0x64446622, 0x84284248, 0x40F0F024, 0x0F0044E4, 0x480A4E40, 0x9A459124, 0x000A5A16, 0x640444F0,
    0x80004049, 0x40400004, 0x44444040, 0x0AA00044, 0x6476E400, 0xFAFA61D9, 0xE44E4EAA, 0x24F42445,
    0xF244E544, 0x00000042,
];

/// Position of an "on" pixel within a glyph cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Dot {
    /// Column within the cell, in `[0, GLYPH_WIDTH)`.
    pub x: u8,

    /// Row within the cell, in `[0, GLYPH_HEIGHT)`.
    pub y: u8,
}

/// Sparse representation of a glyph: the list of its lit pixels in row-major order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Glyph {
    dots: Vec<Dot>,
}

impl Glyph {
    /// Returns the lit pixels of the glyph.
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Returns true if the glyph has no lit pixels.
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }
}

/// Sequential reader of single bits out of a slice of packed words.
struct BitReader<'a> {
    words: std::slice::Iter<'a, u32>,
    current: u32,
    remaining: u32,
}

impl<'a> BitReader<'a> {
    fn new(words: &'a [u32]) -> Self {
        Self { words: words.iter(), current: 0, remaining: 0 }
    }

    /// Consumes the next bit.  Running out of words is a bug in the packed data.
    fn next_bit(&mut self) -> bool {
        if self.remaining == 0 {
            self.current = *self.words.next().expect("Packed font data is too short");
            self.remaining = 32;
        }
        let bit = (self.current & 1) != 0;
        self.current >>= 1;
        self.remaining -= 1;
        bit
    }
}

/// The decoded font: glyph dot patterns plus the character-to-glyph mapping.
#[derive(Debug)]
pub struct GlyphTable {
    glyphs: Vec<Glyph>,
    char_map: CharMap,
}

static BUILTIN: Lazy<GlyphTable> = Lazy::new(|| GlyphTable::decode(&FONT_WORDS, GLYPH_COUNT));

impl GlyphTable {
    /// Decodes `count` glyphs out of the packed `words`.
    ///
    /// Panics if `words` does not hold `count` glyphs, as that can only happen with malformed
    /// built-in data.
    pub fn decode(words: &[u32], count: usize) -> Self {
        assert!(
            words.len() * 32 >= count * GLYPH_WIDTH * GLYPH_HEIGHT,
            "{} words cannot hold {} glyphs",
            words.len(),
            count
        );

        let mut bits = BitReader::new(words);
        let mut glyphs = Vec::with_capacity(count);
        for _ in 0..count {
            let mut dots = vec![];
            for y in 0..GLYPH_HEIGHT {
                for x in 0..GLYPH_WIDTH {
                    if bits.next_bit() {
                        dots.push(Dot { x: x as u8, y: y as u8 });
                    }
                }
            }
            glyphs.push(Glyph { dots });
        }
        log::trace!("Decoded {} glyphs out of {} words", glyphs.len(), words.len());

        Self { glyphs, char_map: CharMap::new() }
    }

    /// Returns the process-wide table decoded from `FONT_WORDS`.
    pub fn builtin() -> &'static GlyphTable {
        &BUILTIN
    }

    /// Returns all decoded glyphs in index order.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Returns the glyph at `index`, if any.
    pub fn glyph(&self, index: usize) -> Option<&Glyph> {
        self.glyphs.get(index)
    }

    /// Resolves `ch` to its classification.
    pub fn classify(&self, ch: char) -> CharClass {
        self.char_map.classify(ch)
    }
}
