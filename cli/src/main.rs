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

//! Command-line interface to render text with the pixtext font.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use anyhow::{Error, Result};
use getopts::Options;
use pixtext_art::{ArtStyle, DotArtGenerator};
use pixtext_core::draw::text_width;
use pixtext_core::framebuffer::Framebuffer;
use pixtext_core::glyphs::{GlyphTable, GLYPH_HEIGHT};
use pixtext_core::layout::layout;
use pixtext_core::raster::SizeInPixels;
use pixtext_core::{Align, TextRenderer};
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

/// Errors caused by the user when invoking this binary (invalid options or arguments).
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
struct UsageError {
    message: String,
}

impl UsageError {
    /// Creates a new usage error with `message`.
    fn new<T: Into<String>>(message: T) -> Self {
        Self { message: message.into() }
    }
}

/// Flattens all causes of an error into a single string.
fn flatten_causes(err: &Error) -> String {
    err.chain().fold(String::new(), |flattened, cause| {
        let flattened = if flattened.is_empty() { flattened } else { flattened + ": " };
        flattened + &format!("{}", cause)
    })
}

/// Consumes and returns the program name from `env::Args`.
///
/// If the program name cannot be obtained, return `default_name` instead.
fn program_name(mut args: env::Args, default_name: &'static str) -> (String, env::Args) {
    let name = match args.next() {
        Some(arg0) => match Path::new(&arg0).file_stem() {
            Some(basename) => match basename.to_str() {
                Some(s) => s.to_owned(),
                None => default_name.to_owned(),
            },
            None => default_name.to_owned(),
        },
        None => default_name.to_owned(),
    };
    (name, args)
}

/// Prints usage information for program `name` with `opts` following the GNU Standards format.
fn help(name: &str, opts: &Options) -> Result<i32> {
    let brief = format!("Usage: {} [options] TEXT", name);
    println!("{}", opts.usage(&brief));
    println!("Supported characters: 0-9 A-Z space and ()[]<>=+-*/%&_!?,.:|'\"$@#\\urdl");
    Ok(0)
}

/// Prints version information following the GNU Standards format.
fn version() -> Result<i32> {
    println!("pixtext {}", env!("CARGO_PKG_VERSION"));
    println!("License Apache Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0>");
    Ok(0)
}

/// Parses the value of the `--scale` flag.
fn parse_scale(value: &str) -> Result<NonZeroU32> {
    NonZeroU32::from_str(value)
        .map_err(|e| UsageError::new(format!("Invalid scale {}: {}", value, e)).into())
}

/// Renders `text` with the built-in font directly onto a framebuffer that fits it exactly.
fn render_direct(text: &str, align: Align) -> Result<Framebuffer> {
    let width = text_width(text);
    let mut fb = Framebuffer::new(SizeInPixels::new(width, GLYPH_HEIGHT));

    let renderer = TextRenderer::new(DotArtGenerator::default());
    let x = match align {
        Align::Left => 0.0,
        Align::Right => width as f64,
        Align::Center => width as f64 / 2.0,
    };
    renderer.draw(&mut fb, text, x, 0.0, align)?;
    Ok(fb)
}

/// Renders `text` as pixel art at `scale` onto a framebuffer that fits the generated image.
fn render_scaled(text: &str, scale: NonZeroU32, style: ArtStyle) -> Result<Framebuffer> {
    let mut renderer = TextRenderer::new(DotArtGenerator::new(style));
    let size = renderer.generate(text, scale)?.size(0);
    let mut fb = Framebuffer::new(size);
    renderer.draw_scaled(
        &mut fb,
        text,
        scale,
        size.width as f64 / 2.0,
        size.height as f64 / 2.0,
    )?;
    Ok(fb)
}

/// Prints the contents of `fb` to stdout or saves them as a PPM image to `output`.
fn emit(fb: &Framebuffer, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let mut file = BufWriter::new(File::create(path)?);
            fb.write_ppm(&mut file)?;
        }
        None => {
            let stdout = io::stdout();
            let mut stdout = stdout.lock();
            for line in fb.to_text() {
                writeln!(stdout, "{}", line)?;
            }
        }
    }
    Ok(())
}

/// Version of `main` that returns errors to the caller for reporting.
fn safe_main(name: &str, args: env::Args) -> Result<i32> {
    let args: Vec<String> = args.collect();

    let mut opts = Options::new();
    opts.optopt("a", "align", "alignment of direct text: left, right or center", "ALIGN");
    opts.optflag("", "grid", "print the pixel categories of the scaled text and exit");
    opts.optflag("h", "help", "show command-line usage information and exit");
    opts.optopt("o", "output", "write the rendered text as a PPM image to this file", "PATH");
    opts.optopt("s", "scale", "render the text as scaled pixel art", "N");
    opts.optopt("", "style", "style of the pixel art, as palette[:flag,key=value]", "SPEC");
    opts.optflag("", "version", "show version information and exit");
    let matches = opts.parse(args)?;

    if matches.opt_present("help") {
        return help(name, &opts);
    }

    if matches.opt_present("version") {
        return version();
    }

    let text = match matches.free.as_slice() {
        [] => return Err(UsageError::new("Missing text to render").into()),
        [text] => text.as_str(),
        [_, ..] => return Err(UsageError::new("Too many arguments").into()),
    };

    let grid = matches.opt_present("grid");
    let scaled = matches.opt_present("scale") && !grid;
    if grid && matches.opt_present("output") {
        return Err(UsageError::new("--output cannot be used with --grid").into());
    }
    if (grid || scaled) && matches.opt_present("align") {
        return Err(UsageError::new("--align only applies to direct rendering").into());
    }
    if !scaled && matches.opt_present("style") {
        return Err(UsageError::new("--style only applies to scaled rendering").into());
    }

    let align = match matches.opt_str("align") {
        Some(align) => Align::from_str(&align).map_err(UsageError::new)?,
        None => Align::default(),
    };
    let style = match matches.opt_str("style") {
        Some(style) => {
            ArtStyle::from_spec(&style).map_err(|e| UsageError::new(format!("{}", e)))?
        }
        None => ArtStyle::default(),
    };
    let scale = match matches.opt_str("scale") {
        Some(scale) => Some(parse_scale(&scale)?),
        None => None,
    };
    let output = matches.opt_str("output").map(PathBuf::from);

    if grid {
        let scale = match scale {
            Some(scale) => scale,
            None => parse_scale("1")?,
        };
        for row in layout(GlyphTable::builtin(), text, scale)?.rows() {
            println!("{}", row);
        }
        return Ok(0);
    }

    log::debug!("Rendering {:?} at scale {:?}", text, scale);
    let fb = match scale {
        Some(scale) => render_scaled(text, scale, style)?,
        None => render_direct(text, align)?,
    };
    emit(&fb, output.as_deref())?;
    Ok(0)
}

fn main() {
    env_logger::init();

    let (name, args) = program_name(env::args(), "pixtext");
    let exit_code = match safe_main(&name, args) {
        Ok(code) => code,
        Err(e) => {
            if let Some(e) = e.downcast_ref::<UsageError>() {
                eprintln!("Usage error: {}", e);
                eprintln!("Type {} --help for more information", name);
                2
            } else if let Some(e) = e.downcast_ref::<getopts::Fail>() {
                eprintln!("Usage error: {}", e);
                eprintln!("Type {} --help for more information", name);
                2
            } else {
                eprintln!("{}: {}", name, flatten_causes(&e));
                1
            }
        }
    };
    process::exit(exit_code);
}
