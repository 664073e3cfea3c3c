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

//! Layout of scaled text into a grid of pixel categories.

use crate::draw::{resolve, Error, Result};
use crate::glyphs::{GlyphTable, GLYPH_ADVANCE};
use crate::raster::SizeInPixels;
use std::convert::TryFrom;
use std::num::NonZeroU32;

/// Offsets to the 8 neighbors of a cell: N, NE, E, SE, S, SW, W and NW.
const NEIGHBORS: [(isize, isize); 8] =
    [(0, -1), (1, -1), (1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1)];

/// Category of a single pixel in a layout grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cell {
    /// Transparent area.
    Background,

    /// Interior of a glyph.
    Fill,

    /// Border of a glyph.
    Outline,
}

impl Cell {
    /// Returns the symbol that represents this category in textual rows.
    pub fn symbol(self) -> char {
        match self {
            Cell::Background => ' ',
            Cell::Fill => 'x',
            Cell::Outline => 'o',
        }
    }

    /// Parses a category `symbol`.  Unknown symbols are treated as background.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            'x' => Cell::Fill,
            'o' => Cell::Outline,
            _ => Cell::Background,
        }
    }
}

/// Rectangular grid of pixel categories stored in row-major order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CellGrid {
    size: SizeInPixels,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Creates a grid of `size` with all cells set to background.
    pub fn new(size: SizeInPixels) -> Self {
        Self { size, cells: vec![Cell::Background; size.area()] }
    }

    /// Returns the dimensions of the grid.
    pub fn size(&self) -> SizeInPixels {
        self.size
    }

    /// Returns the cell at `x`/`y`.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.offset(x, y)]
    }

    /// Sets the cell at `x`/`y` to `cell`.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let offset = self.offset(x, y);
        self.cells[offset] = cell;
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.size.width);
        debug_assert!(y < self.size.height);
        y * self.size.width + x
    }

    /// Returns true if the cell at `x`/`y` has to be drawn as an outline: it lies on the grid
    /// boundary or touches the background.
    fn is_edge(&self, x: usize, y: usize) -> bool {
        if x == 0 || y == 0 || x == self.size.width - 1 || y == self.size.height - 1 {
            return true;
        }
        NEIGHBORS.iter().any(|(dx, dy)| {
            let nx = (x as isize + dx) as usize;
            let ny = (y as isize + dy) as usize;
            self.get(nx, ny) == Cell::Background
        })
    }

    /// Reclassifies every fill cell on the edge of a shape as an outline cell.
    pub fn outline(&mut self) {
        for y in 0..self.size.height {
            for x in 0..self.size.width {
                if self.get(x, y) == Cell::Fill && self.is_edge(x, y) {
                    self.set(x, y, Cell::Outline);
                }
            }
        }
    }

    /// Renders the grid as one string per row using the category symbols.
    pub fn rows(&self) -> Vec<String> {
        if self.size.width == 0 {
            return vec![String::new(); self.size.height];
        }
        self.cells
            .chunks(self.size.width)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }
}

/// Lays out `text` scaled by `scale` and outlines the result.
///
/// Every glyph dot becomes a `scale`x`scale` block of fill cells and glyphs are `5 * scale` cells
/// apart.  Fails with `Error::TooLarge` if the resulting grid cannot be represented.
pub fn layout(glyphs: &GlyphTable, text: &str, scale: NonZeroU32) -> Result<CellGrid> {
    let too_large = || Error::TooLarge(scale.get());
    let scale = usize::try_from(scale.get()).map_err(|_| too_large())?;
    let advance = GLYPH_ADVANCE.checked_mul(scale).ok_or_else(too_large)?;
    let width = advance.checked_mul(text.chars().count()).ok_or_else(too_large)?;
    let size = SizeInPixels::new(width, advance);
    if size.checked_area().is_none() {
        return Err(too_large());
    }
    let mut grid = CellGrid::new(size);

    for (i, ch) in text.chars().enumerate() {
        let glyph = match resolve(glyphs, ch)? {
            Some(glyph) => glyph,
            None => continue,
        };
        let ox = i * advance;
        for dot in glyph.dots() {
            let x1 = usize::from(dot.x) * scale;
            let y1 = usize::from(dot.y) * scale;
            for y in y1..y1 + scale {
                for x in x1..x1 + scale {
                    grid.set(ox + x, y, Cell::Fill);
                }
            }
        }
    }

    grid.outline();
    Ok(grid)
}
