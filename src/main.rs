//! picoml CLI - compile images into OCaml palette-index arrays

use clap::Parser;
use log::{debug, error, LevelFilter};
use picoml::{Converter, PicomlError};
use rayon::prelude::*;
use simplelog::{Config, SimpleLogger};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::exit;

#[derive(Parser)]
#[command(name = "picoml", about = "Compile images into OCaml palette-index arrays")]
struct Args {
    /// Input image files
    files: Vec<PathBuf>,
    /// Fail on colors missing from the palette instead of skipping them
    #[arg(short, long)]
    strict: bool,
    /// Log verbosity (0 = info, 1 = debug, 2 = trace)
    #[arg(short, long, default_value_t = 0)]
    debug: u8,
}

fn logger_init(debug: u8) {
    let log_level = match debug {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::init(log_level, Config::default()).unwrap();
}

fn main() -> Result<(), PicomlError> {
    let args = Args::parse();
    logger_init(args.debug);

    if args.files.is_empty() {
        println!("Usage: picoml file.png ...files");
        return Ok(());
    }

    let converter = Converter::new().with_strict(args.strict);

    // Decode and convert in parallel, then print sequentially in argument
    // order so each file's output stays one contiguous unit.
    let results: Vec<_> = args
        .files
        .par_iter()
        .map(|path| {
            debug!("converting {}", path.display());
            image::open(path)
                .map_err(PicomlError::from)
                .and_then(|img| converter.convert(&img))
        })
        .collect();

    let mut stdout = io::stdout().lock();
    let mut failed = 0;
    for (path, result) in args.files.iter().zip(results) {
        match result {
            Ok(text) => writeln!(stdout, "{text}")?,
            Err(err) => {
                error!("{}: {err}", path.display());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        exit(1);
    }
    Ok(())
}
