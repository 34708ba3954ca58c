use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter},
};

fn resolve_std_stream(path: Option<&str>) -> Option<&str> {
    match path {
        Some("-") | None => None,
        Some(p) => Some(p),
    }
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Read data from INFILE instead of stdin; "-" also means stdin.
    #[arg(short, long, value_name = "INFILE")]
    pub infile: Option<String>,
}

impl InputArgs {
    /// Open a buffered reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match resolve_std_stream(self.infile.as_deref()) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
        })
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Write output to OUTFILE instead of stdout; "-" also means stdout.
    #[arg(short, long, value_name = "OUTFILE")]
    pub outfile: Option<String>,
}

impl OutputArgs {
    /// Open a buffered writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn std::io::Write>, Box<dyn std::error::Error>> {
        Ok(match resolve_std_stream(self.outfile.as_deref()) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}
