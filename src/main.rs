use clap::Parser;
use log::LevelFilter;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use blankgen::codegen;
use blankgen::{parse_idl, Document, IdlError};

#[derive(Parser)]
#[command(name = "blankgen")]
#[command(about = "Generate a blank plugin source file from an IDL file", long_about = None)]
struct Cli {
    /// IDL file name
    #[arg(short, long, value_name = "FILENAME")]
    idl: PathBuf,

    /// Source file name
    #[arg(short, long, value_name = "FILENAME", required_unless_present = "check")]
    source: Option<PathBuf>,

    /// Check the IDL file only (no generation)
    #[arg(long)]
    check: bool,

    /// Verbose output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<(), IdlError> {
    log::info!("Processing: {}", cli.idl.display());

    let input = fs::read_to_string(&cli.idl)?;
    let document = parse_idl(&input)?;

    log::debug!(
        "parsed {} functions ({} callbacks), {} constants",
        document.functions().count(),
        document.callbacks().count(),
        document.constants().count()
    );

    // Fail on type and attribute errors before the output file is touched
    codegen::validate(&document)?;

    if cli.check {
        log::info!("{} - OK", cli.idl.display());
        return Ok(());
    }

    if let Some(source) = &cli.source {
        write_source(source, &document)?;
    }

    Ok(())
}

fn write_source(path: &Path, document: &Document) -> Result<(), IdlError> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    codegen::generate(&mut out, document)?;
    out.flush()?;

    log::info!("  → {}", path.display());
    Ok(())
}
