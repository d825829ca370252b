//! Interactive front end: asks for a desired resistance and lists every single resistor and
//! series/parallel pair within 2% of it.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::Level;

use resistor_pair::input::{parse_desired, read_desired};
use resistor_pair::report::Search;
use resistor_pair::Result;

#[derive(Parser)]
#[command(name = "resistor-pair")]
#[command(about = "Find standard resistors and resistor pairs within 2% of a value", long_about = None)]
#[command(version)]
struct Cli {
    /// Desired resistance in ohms, prompted for when omitted
    #[arg(value_name = "OHMS", allow_negative_numbers = true)]
    value: Option<String>,

    /// Exit without waiting for enter once the results are printed
    #[arg(long)]
    no_pause: bool,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    let desired = match cli.value.as_deref().map(parse_desired).transpose() {
        Ok(desired) => desired,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    match run(desired, cli.no_pause) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(desired: Option<f64>, no_pause: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "*** Calculator for 2 resistor pair ***")?;

    let desired = match desired {
        Some(desired) => desired,
        None => read_desired(&mut input, &mut out)?,
    };
    tracing::info!(desired, "searching");

    writeln!(out, "\n\nResults within 2% of value...")?;
    let summary = Search::new(desired)?.run(&mut out)?;
    tracing::info!(matches = summary.matches, "done");

    writeln!(out, "\nPress enter to continue...")?;
    out.flush()?;
    if !no_pause {
        let mut line = String::new();
        input.read_line(&mut line)?;
    }
    Ok(())
}
