//! ## svgeq - convert SVG paths to parametric equations
//!
//! `svgeq` reads an SVG document, converts the `d` attribute of each
//! `<path>` element into a pair of polynomial equations x(t), y(t) over
//! t in [0, 1], and writes either a plain-text listing or a LaTeX document
//! of the results.
//!
//! Adjacent cubic (or quadratic) Bézier segments can optionally be fused
//! into one higher-degree Bézier curve over the concatenated control
//! polygon, giving a single equation pair per run of segments.
//!
//! ## Library use
//!
//! Create a `ConvertConfig` and call the appropriate `convert_*` function:
//!
//! ```
//! let cfg = svgeq::ConvertConfig::default();
//!
//! let input = r#"<svg><path d="M0 0 L10 0"/></svg>"#;
//! let output = svgeq::convert_str(input, &cfg).unwrap();
//!
//! assert!(output.contains("x(t) = 10*t"));
//! ```

use std::io::{BufRead, Cursor, Write};
use std::str::FromStr;

#[cfg(feature = "cli")]
pub mod cli;
mod compose;
mod document;
mod equation;
pub mod errors;
mod geometry;
mod output;
mod path;
mod poly;
mod types;

pub use compose::{compose, group_path, CompositeGroup};
pub use equation::{build, ParametricPair};
pub use errors::{Result, SvgeqError};
pub use geometry::{Path, Point, Segment, SegmentKind};
pub use poly::Polynomial;

// Allow users of this as a library to easily retrieve the version of svgeq being used
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which textual rendering of the equations to emit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// numeric listing, one `x(t) = ...` / `y(t) = ...` pair per curve
    #[default]
    Plain,
    /// a complete LaTeX document for typesetting
    Latex,
}

impl FromStr for OutputFormat {
    type Err = SvgeqError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "plain" => Ok(OutputFormat::Plain),
            "latex" => Ok(OutputFormat::Latex),
            _ => Err(SvgeqError::MessageError(format!(
                "unknown output format '{}'",
                value
            ))),
        }
    }
}

/// Settings to configure a single conversion.
#[derive(Clone, Debug)]
pub struct ConvertConfig {
    /// Fuse runs of adjacent same-kind Bézier segments into single curves
    pub fuse: bool,
    /// Output rendering (plain listing or LaTeX document)
    pub format: OutputFormat,
    /// Significant digits carried into rendered coefficients
    pub precision: u32,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            fuse: false,
            format: OutputFormat::Plain,
            precision: 11,
        }
    }
}

/// Convert one parsed path into its equation pairs.
///
/// Without fusion each segment maps to one pair; with fusion each
/// composite group maps to one pair. Errors carry the 1-based segment
/// (or group) index.
fn convert_path(path: &Path, fuse: bool) -> Result<Vec<ParametricPair>> {
    if fuse {
        group_path(&path.segments)
            .iter()
            .enumerate()
            .map(|(i, group)| compose(group).map_err(|e| e.in_segment(i + 1)))
            .collect()
    } else {
        path.segments
            .iter()
            .enumerate()
            .map(|(i, segment)| build(segment).map_err(|e| e.in_segment(i + 1)))
            .collect()
    }
}

/// Reads an SVG document from `reader`, converts every path, and writes
/// the rendered equations to `writer`.
///
/// Note the entire document is read before any output is written.
pub fn convert_stream(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    config: &ConvertConfig,
) -> Result<()> {
    let path_data = document::read_path_attrs(reader)?;

    let mut equations = Vec::new();
    for (i, d) in path_data.iter().enumerate() {
        let parsed = path::parse_path_data(d).map_err(|e| e.in_path(i + 1))?;
        equations.push(convert_path(&parsed, config.fuse).map_err(|e| e.in_path(i + 1))?);
    }

    let rendered = match config.format {
        OutputFormat::Plain => output::render_plain(&equations, config.precision),
        OutputFormat::Latex => output::render_latex(&equations, config.precision),
    };
    writer.write_all(rendered.as_bytes())?;

    Ok(())
}

/// Convert `input` provided as a string, returning the result as a string.
pub fn convert_str<T: Into<String>>(input: T, config: &ConvertConfig) -> Result<String> {
    let input = input.into();

    let mut input = Cursor::new(input);
    let mut output: Vec<u8> = vec![];

    convert_stream(&mut input, &mut output, config)?;

    Ok(String::from_utf8(output).expect("non-UTF8 output generated"))
}

/// Convert the provided `input` string using default config.
pub fn convert_str_default<T: Into<String>>(input: T) -> Result<String> {
    convert_str(input, &ConvertConfig::default())
}
