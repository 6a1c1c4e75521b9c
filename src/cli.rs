use clap::Parser;

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Cursor, IsTerminal, Read};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::errors::{Result, SvgeqError};
use crate::{convert_stream, ConvertConfig};

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about=None)] // Read from Cargo.toml
struct Arguments {
    /// File to process ('-' for stdin)
    #[arg(default_value = "-")]
    file: String,

    /// Target output file ('-' for stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Fuse runs of adjacent same-kind Bézier segments into single
    /// higher-degree curves
    #[arg(short, long)]
    fuse: bool,

    /// Output format: 'plain' equation listing or 'latex' document
    #[arg(long, default_value = "plain")]
    format: String,

    /// Significant digits in rendered coefficients
    #[arg(long, default_value = "11")]
    precision: u32,
}

/// Top-level configuration used by the `svgeq` command-line process.
///
/// 'front-end' settings (input/output filenames) are stored directly in
/// this struct; per-conversion settings are in the embedded
/// `ConvertConfig` struct.
#[derive(Clone)]
pub struct Config {
    /// Path to input file, or '-' for stdin
    pub input_path: String,
    /// Path to output file, or '-' for stdout
    pub output_path: String,
    /// conversion config options
    pub convert: ConvertConfig,
}

impl Config {
    fn from_args(args: Arguments) -> Result<Self> {
        if args.precision == 0 {
            return Err(SvgeqError::from("Precision must be at least 1 digit"));
        }
        if args.file != "-" && args.output != "-" {
            // Arguably creating this struct shouldn't do any IO, but this is a
            // deliberate UX safety restriction on the CLI which is worth keeping
            // as high-level as possible to keep the lower level API cleaner.
            let in_path = Path::new(&args.file);
            let out_path = Path::new(&args.output);
            if out_path.exists()
                && out_path.canonicalize().map_err(SvgeqError::from)?
                    == in_path.canonicalize().map_err(SvgeqError::from)?
            {
                return Err(SvgeqError::from(
                    "Output path must not refer to the same file as the input file.",
                ));
            }
        }
        Ok(Self {
            input_path: args.file,
            output_path: args.output,
            convert: ConvertConfig {
                fuse: args.fuse,
                format: args.format.parse()?,
                precision: args.precision,
            },
        })
    }

    /// Create a `Config` object set up given a command line string.
    ///
    /// The string is parsed using `shlex::split()`, so values containing
    /// spaces or quotes should be quoted or escaped appropriately.
    pub fn from_cmdline(args: &str) -> Result<Self> {
        let args = shlex::split(args).unwrap_or_default();
        let args = Arguments::try_parse_from(args.iter()).map_err(SvgeqError::from_err)?;
        Self::from_args(args)
    }
}

/// Create a `Config` object from process arguments.
pub fn get_config() -> Result<Config> {
    let args = Arguments::parse();
    Config::from_args(args)
}

/// Read file from `input` ('-' for stdin), convert its paths, and write
/// to file given by `output` ('-' for stdout).
pub fn convert_file(input: &str, output: &str, cfg: &ConvertConfig) -> Result<()> {
    let mut in_reader = if input == "-" {
        let mut stdin = std::io::stdin().lock();
        if stdin.is_terminal() {
            // This is unpleasant; at least on Mac, a single Ctrl-D is not otherwise
            // enough to signal end-of-input, even when given at the start of a line.
            // Work around this by reading entire input, then wrapping in a Cursor to
            // provide a buffered reader.
            let mut buf = Vec::new();
            stdin
                .read_to_end(&mut buf)
                .expect("stdin should be readable to EOF");
            Box::new(BufReader::new(Cursor::new(buf))) as Box<dyn BufRead>
        } else {
            Box::new(stdin) as Box<dyn BufRead>
        }
    } else {
        Box::new(BufReader::new(File::open(input)?)) as Box<dyn BufRead>
    };

    if output == "-" {
        convert_stream(&mut in_reader, &mut std::io::stdout(), cfg)?;
    } else {
        let mut out_temp = NamedTempFile::new()?;
        convert_stream(&mut in_reader, &mut out_temp, cfg)?;
        // Copy content rather than rename (by .persist()) since this
        // could cross filesystems; some apps also fail to react to
        // 'moved-over' files.
        fs::copy(out_temp.path(), output)?;
    }

    Ok(())
}

/// Run the `svgeq` program with a given `Config`.
pub fn run(config: Config) -> Result<()> {
    convert_file(&config.input_path, &config.output_path, &config.convert)
}
