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

//! Mapping of characters to glyphs of the built-in font.

/// Symbols supported by the font, in the order in which their glyphs appear after the letters.
///
/// The trailing `u`, `r`, `d` and `l` are arrows pointing up, right, down and left.  They are not
/// the lowercase letters, which are unsupported.
pub const SYMBOLS: &str = "()[]<>=+-*/%&_!?,.:|'\"$@#\\urdl";

/// Index of the first digit glyph.
const FIRST_DIGIT: usize = 0;

/// Index of the first letter glyph.
const FIRST_LETTER: usize = 10;

/// Index of the first symbol glyph.
const FIRST_SYMBOL: usize = 36;

/// Number of character codes covered by the map.
const CHAR_CODES: usize = 128;

/// Classification of a character with respect to the font.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CharClass {
    /// A decimal digit with its glyph index.
    Digit(usize),

    /// An uppercase letter with its glyph index.
    Letter(usize),

    /// A punctuation or arrow symbol with its glyph index.
    Symbol(usize),

    /// The space character: draws nothing but still advances the cursor.
    Blank,

    /// A character the font cannot render.
    Invalid,
}

impl CharClass {
    /// Returns the glyph index for renderable characters.
    pub fn glyph_index(self) -> Option<usize> {
        match self {
            CharClass::Digit(i) | CharClass::Letter(i) | CharClass::Symbol(i) => Some(i),
            CharClass::Blank | CharClass::Invalid => None,
        }
    }
}

/// Lookup table from 7-bit character codes to their `CharClass`.
#[derive(Debug)]
pub struct CharMap {
    classes: [CharClass; CHAR_CODES],
}

impl Default for CharMap {
    fn default() -> Self {
        Self::new()
    }
}

impl CharMap {
    /// Builds the map for all 7-bit character codes.
    pub fn new() -> Self {
        let mut classes = [CharClass::Invalid; CHAR_CODES];
        for (code, class) in classes.iter_mut().enumerate() {
            let ch = char::from(code as u8);
            *class = match ch {
                ' ' => CharClass::Blank,
                '0'..='9' => CharClass::Digit(FIRST_DIGIT + (ch as usize - '0' as usize)),
                'A'..='Z' => CharClass::Letter(FIRST_LETTER + (ch as usize - 'A' as usize)),
                _ => match SYMBOLS.find(ch) {
                    Some(pos) => CharClass::Symbol(FIRST_SYMBOL + pos),
                    None => CharClass::Invalid,
                },
            };
        }
        Self { classes }
    }

    /// Classifies `ch`.  Anything outside of the 7-bit range is invalid.
    pub fn classify(&self, ch: char) -> CharClass {
        let code = ch as usize;
        if code < CHAR_CODES {
            self.classes[code]
        } else {
            CharClass::Invalid
        }
    }
}
