//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use huffcode::tools::cli::{huffopts_init, HuffOpts};
use huffcode::tools::report::report;
use huffcode::HuffmanCoding;

use log::{error, info};
use simplelog::{Config, TermLogger, TerminalMode};

fn main() -> Result<(), huffcode::Error> {
    let options = huffopts_init();

    // Log to stderr so the report on stdout stays clean.
    if TermLogger::init(
        options.verbosity,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Logger already initialized");
    }

    let result = run(&options);
    if let Err(e) = &result {
        error!("{}", e);
    }
    result
}

/// Build the coding for the selected source and print the report.
fn run(options: &HuffOpts) -> Result<(), huffcode::Error> {
    let coding = match options.source_text()? {
        Some(text) => HuffmanCoding::new(&text)?,
        None => HuffmanCoding::with_default_sample(),
    };
    info!("{}", coding);
    print!("{}", report(&coding, options));
    Ok(())
}
