//! Quine-McCluskey reducer - Command Line Interface
//!
//! Reads a PLA file, reduces its ON-set and writes the surviving implicants
//! next to the input as `<name>_minimized.pla`.

use clap::{ArgAction, Parser};
use qmc_logic::pla::derive_output_path;
use qmc_logic::{PLAReader, PLATable, PLAWriter, ReduceConfig, Reducer};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::io;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "qmc")]
#[command(about = "Quine-McCluskey implicant reduction for PLA files", long_about = None)]
#[command(version)]
struct Args {
    /// Input PLA file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (defaults to <input>_minimized.pla)
    #[arg(short = 'O', long = "out-file", conflicts_with = "stdout")]
    output_file: Option<PathBuf>,

    /// Write the result to stdout instead of a file
    #[arg(long)]
    stdout: bool,

    /// Print pass statistics
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Fail on malformed terms instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Disable all logging
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = TermLogger::init(
        args.log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    let Some(input) = args.input.as_ref() else {
        eprintln!("Usage: qmc <FILE>");
        process::exit(1);
    };

    log::info!("Reading input file: {}", input.display());

    let table = match PLATable::from_pla_file(input) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error reading PLA file '{}': {}", input.display(), e);
            process::exit(1);
        }
    };

    let config = ReduceConfig {
        strict: args.strict,
        summary: args.summary,
    };
    let minterms: Vec<&str> = table.minterms().collect();
    let reduction = match Reducer::new(config).run(&minterms, table.num_inputs()) {
        Ok(reduction) => reduction,
        Err(e) => {
            eprintln!("Error reducing '{}': {}", input.display(), e);
            process::exit(1);
        }
    };

    if args.summary {
        eprintln!("Passes:");
        for pass in reduction.passes() {
            eprintln!(
                "  generation {}: {} terms, {} merges, {} survivors",
                pass.generation, pass.terms, pass.merges, pass.survivors
            );
        }
        if !reduction.rejected().is_empty() {
            eprintln!("Skipped terms:   {}", reduction.rejected().len());
        }
        eprintln!("Implicants:      {}", reduction.implicants().len());
    }

    let cover = reduction.into_cover(table.num_outputs());

    if args.stdout {
        let stdout = io::stdout();
        if let Err(e) = cover.write_pla(&mut stdout.lock()) {
            eprintln!("Error writing to stdout: {}", e);
            process::exit(1);
        }
        return;
    }

    let output_path = args
        .output_file
        .clone()
        .unwrap_or_else(|| derive_output_path(input));

    if let Err(e) = cover.to_pla_file(&output_path) {
        eprintln!(
            "Error writing output file '{}': {}",
            output_path.display(),
            e
        );
        process::exit(1);
    }

    println!("Minimized logic written to {}", output_path.display());
}
