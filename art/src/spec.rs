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

//! Configuration support for the pixel-art generator.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::io;
use std::str::FromStr;

/// An error while parsing an art style specification.
#[derive(Debug, thiserror::Error)]
#[error("{}", .0)]
pub struct ParseError(pub String);

impl From<ParseError> for io::Error {
    fn from(value: ParseError) -> Self {
        Self::new(io::ErrorKind::InvalidInput, value.0)
    }
}

/// Syntactic sugar to create an error.
macro_rules! mkerror {
    ($($arg:tt)*) => ({
        ParseError(format!($($arg)*))
    })
}

/// Result type for art style specification parse errors.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Named base colors, as `(name, hue, saturation)` tuples.
const PALETTES: &[(&str, f64, f64)] = &[
    ("white", 0.0, 0.0),
    ("red", 0.0, 0.8),
    ("yellow", 1.0 / 6.0, 0.8),
    ("green", 2.0 / 6.0, 0.8),
    ("cyan", 3.0 / 6.0, 0.8),
    ("blue", 4.0 / 6.0, 0.8),
    ("magenta", 5.0 / 6.0, 0.8),
];

/// Visual style applied by the generator when coloring category cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArtStyle {
    /// Hue of the fill color, in `[0, 1]`.
    pub hue: f64,

    /// Saturation of the fill color, in `[0, 1]`.
    pub saturation: f64,

    /// Brightness of the fill color, in `[0, 1]`.
    pub value: f64,

    /// How much darker outlines are than the fill, in `[0, 1]`.
    pub edge_darkness: f64,

    /// Whether to quantize every color channel to a handful of levels.
    pub is_limiting_colors: bool,
}

impl Default for ArtStyle {
    fn default() -> Self {
        Self { hue: 0.0, saturation: 0.0, value: 1.0, edge_darkness: 0.4, is_limiting_colors: false }
    }
}

impl ArtStyle {
    /// Parses a style specification of the form `palette[:flags]`.
    ///
    /// The palette names the base color.  The optional flags are a sequence of comma-separated
    /// flags where each flag can be a boolean flag (`limit_colors`) or a keyed flag
    /// (`hue=F`, `saturation=F`, `value=F` or `edge_darkness=F`) that overrides the palette.
    pub fn from_spec(s: &str) -> Result<Self> {
        let mut spec = ArtSpec::init(if s.is_empty() { "white" } else { s });

        let (hue, saturation) = match PALETTES.iter().find(|(name, _, _)| *name == spec.palette) {
            Some((_, hue, saturation)) => (*hue, *saturation),
            None => return Err(mkerror!("Unknown palette {}", spec.palette)),
        };

        let mut style = ArtStyle { hue, saturation, ..ArtStyle::default() };
        if let Some(hue) = spec.take_unit_flag("hue")? {
            style.hue = hue;
        }
        if let Some(saturation) = spec.take_unit_flag("saturation")? {
            style.saturation = saturation;
        }
        if let Some(value) = spec.take_unit_flag("value")? {
            style.value = value;
        }
        if let Some(edge_darkness) = spec.take_unit_flag("edge_darkness")? {
            style.edge_darkness = edge_darkness;
        }
        style.is_limiting_colors = spec.take_flag("limit_colors");
        spec.finish()?;

        Ok(style)
    }
}

impl FromStr for ArtStyle {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ArtStyle::from_spec(s)
    }
}

/// Parser for an art style specification.
///
/// A specification is a string of the form `palette[:flags]`.  Flags are queried one by one and
/// `finish` must be called at the end to ensure that all provided flags were recognized.
pub struct ArtSpec<'a> {
    /// The name of the desired palette.
    pub palette: &'a str,

    /// Collection of boolean flags that appear in the input specification and that haven't been
    /// queried yet.
    flags: HashSet<&'a str>,

    /// Collection of keyed flags that appear in the input specification and that haven't been
    /// queried yet.
    keyed_flags: HashMap<&'a str, &'a str>,
}

impl<'a> ArtSpec<'a> {
    /// Initializes the specification parser from `s`.
    pub fn init(s: &'a str) -> Self {
        let (palette, rest) = s.split_once(':').unwrap_or((s, ""));

        let mut flags = HashSet::default();
        let mut keyed_flags = HashMap::default();
        for pair in rest.split(',') {
            if pair.is_empty() {
                continue;
            }

            match pair.split_once('=') {
                None => {
                    let _exists = flags.insert(pair);
                }
                Some((k, v)) => {
                    let _old = keyed_flags.insert(k, v);
                }
            }
        }

        Self { palette, flags, keyed_flags }
    }

    /// Queries whether the boolean `flag` is in the specification or not.
    pub fn take_flag(&mut self, flag: &str) -> bool {
        self.flags.remove(flag)
    }

    /// Queries the value of the keyed `flag` from the specification, parsed according to `V`.
    pub fn take_keyed_flag<V>(&mut self, key: &str) -> Result<Option<V>>
    where
        V: FromStr,
        V::Err: Display,
    {
        match self.keyed_flags.remove(key) {
            Some(v) => {
                V::from_str(v).map(Some).map_err(|e| mkerror!("Invalid style flag {}: {}", key, e))
            }
            None => Ok(None),
        }
    }

    /// Queries the keyed `flag` as a number that must be within `[0, 1]`.
    fn take_unit_flag(&mut self, key: &str) -> Result<Option<f64>> {
        match self.take_keyed_flag::<f64>(key)? {
            Some(v) if !(0.0..=1.0).contains(&v) => {
                Err(mkerror!("Invalid style flag {}: {} is not in [0, 1]", key, v))
            }
            v => Ok(v),
        }
    }

    /// Validates that all provided flags have been queried.
    pub fn finish(self) -> Result<()> {
        if self.flags.is_empty() && self.keyed_flags.is_empty() {
            Ok(())
        } else {
            let flags_iter = self.flags.into_iter();
            let keyed_iter = self.keyed_flags.into_keys();
            let mut unknown = flags_iter.chain(keyed_iter).collect::<Vec<&'a str>>();
            unknown.sort();
            Err(mkerror!("Palette {} does not recognize flags: {}", self.palette, unknown.join(", ")))
        }
    }
}
