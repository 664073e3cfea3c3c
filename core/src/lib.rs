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

//! Bitmap font decoding and text rendering for low-resolution displays.
//!
//! Text can be drawn directly onto a `RasterOps` surface with `draw::draw_text`, or turned into
//! outlined and scaled pixel art via a `scaled::TextRenderer` that caches every generated image.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

pub mod charmap;
pub mod draw;
pub mod framebuffer;
pub mod glyphs;
pub mod layout;
pub mod raster;
pub mod scaled;
#[cfg(test)]
mod testutils;

pub use draw::{Align, Error, Result};
pub use scaled::{ArtOptions, PixelArtGenerator, TextRenderer};
