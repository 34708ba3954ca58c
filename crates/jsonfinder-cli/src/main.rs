//! Command-line front end for the `jsonfinder` crate.
//!
//! Detects JSON embedded in the input and formats it, filters on it, or
//! deletes sections of the output around it, similar to the built-in
//! `json.tool` but for mixed text.

mod format;
mod input_output;
mod logging;
mod process;
mod sections;

use std::io::Write;

use clap::Parser;
use log::info;

use crate::{
    format::Format,
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    process::ProcessOptions,
    sections::SectionSet,
};

/// Detect JSON in the input and format it or filter based on its presence.
///
/// Optionally specify space-separated filters so that the program will only
/// pay attention to JSON where the source text contains all the filters as
/// substrings.
#[derive(clap::Parser, Debug)]
#[command(name = "jsonfinder", version)]
pub struct Args {
    /// Substring filters applied to the source text of each JSON match.
    filters: Vec<String>,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Delete the given sections in the output: J/json (selected JSON),
    /// C/context (text on the same lines as JSON), L/other-lines (lines
    /// without any JSON). Use capital letters (-dCL) or long names
    /// separated by commas (--delete=context,other-lines).
    #[arg(short, long, value_parser = sections::parse_delete, value_name = "SECTIONS")]
    delete: Option<SectionSet>,

    /// Output format for detected JSON. Unless FORMAT is off, keys are
    /// sorted lexicographically.
    #[arg(short, long, value_enum, default_value_t = Format::On, value_name = "FORMAT")]
    format: Format,

    /// Number of spaces in each level of indentation when FORMAT is on.
    #[arg(short = 'n', long, default_value_t = 4, value_name = "INDENT")]
    indent: usize,

    /// Process the input line by line for a live stream of results. JSON
    /// split across multiple lines will not be detected.
    #[arg(short, long)]
    linewise: bool,

    /// Only pay attention to objects/arrays with at least MIN leaf
    /// elements. This prevents things like [1] from being recognised.
    #[arg(short, long, default_value_t = 2, value_name = "MIN")]
    min_size: usize,

    /// Collect all selected JSON values into a single top-level array and
    /// output only that array.
    #[arg(short, long, conflicts_with = "linewise")]
    array: bool,

    #[command(flatten)]
    log: LogArgs,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    args.log.setup_logging(2)?;

    let mut reader = args.input.open_reader()?;
    let mut writer = args.output.open_writer()?;

    let options = ProcessOptions {
        filters: &args.filters,
        delete: args.delete.unwrap_or_default(),
        format: args.format,
        indent: args.indent,
        min_size: args.min_size,
        array: args.array,
    };
    info!(
        "scanning with {} filter(s), min size {}",
        args.filters.len(),
        args.min_size
    );

    if args.linewise {
        process::run_linewise(&mut reader, &mut writer, &options)?;
    } else {
        process::run_buffered(&mut reader, &mut writer, &options)?;
    }
    writer.flush()?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(err) = run(&args) {
        if let Some(io_err) = err.downcast_ref::<std::io::Error>() {
            // A consumer such as `head` closing the pipe is not an error.
            if io_err.kind() == std::io::ErrorKind::BrokenPipe {
                return;
            }
        }
        eprintln!("jsonfinder: {err}");
        std::process::exit(1);
    }
}
