use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use decomment::profiles::normalize_ext;
use decomment::{Config, print_languages, run_with_config};

/// decomment - strip comments from a source file.
///
/// The comment syntax is picked from the file extension. Unknown extensions
/// are passed through unchanged.
#[derive(Parser, Debug)]
#[command(
    name = "decomment",
    author,
    version,
    about = "Strip comments from a source file based on its extension",
    long_about = r#"Strip comments from a source file based on its extension.

Single-line comments (#, //, --, ;) are cut from the marker to the end of the
line, block comments (/* */, <!-- -->, """ """, ...) are removed across lines.
Lines that are left blank after stripping are dropped.

Typical usage:
  decomment main.c
  decomment --keep-docstrings tool.py -o tool.stripped.py
  decomment --list-languages
"#
)]
struct Args {
    /// File to process.
    #[arg(value_name = "FILE", required_unless_present = "list_languages")]
    file: Option<PathBuf>,

    /// Keep Python docstrings that directly follow a `def` or `class` line.
    #[arg(long = "keep-docstrings")]
    keep_docstrings: bool,

    /// Output file (default: stdout).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Treat the file as having this extension (e.g. py, .rs).
    #[arg(short = 'x', long = "ext", value_name = "EXT")]
    ext: Option<String>,

    /// Print a JSON object { "path", "file_name", "language", "content" } to stdout.
    #[arg(long = "json", conflicts_with = "output")]
    json: bool,

    /// List the supported extensions and their comment markers, then exit.
    #[arg(long = "list-languages")]
    list_languages: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    if args.list_languages {
        print_languages();
        return Ok(());
    }

    // clap requires FILE unless --list-languages, which returned above.
    let Some(input) = args.file else {
        bail!("No input file given.");
    };

    let ext = match args.ext {
        Some(ext) if normalize_ext(&ext).is_empty() => {
            bail!("No valid extension provided (after normalisation).")
        }
        other => other,
    };

    let cfg = Config {
        input,
        ext,
        keep_docstrings: args.keep_docstrings,
        output: args.output,
        json: args.json,
    };

    run_with_config(cfg)
}
