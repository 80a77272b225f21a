use clap::Parser;
use log::{info, LevelFilter};

use crate::error::{Error, Result};

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Builds a Huffman code for a string and reports its length and entropy",
    long_about = None)]
pub struct Args {
    /// Text to code (case-insensitive)
    #[clap(conflicts_with_all = &["file", "sample"])]
    text: Option<String>,

    /// Read the text to code from a file
    #[clap(short = 'f', long = "file", conflicts_with = "sample")]
    file: Option<String>,

    /// Code the built-in sample text "Hello!"
    #[clap(long = "sample")]
    sample: bool,

    /// Also print the code tree
    #[clap(short = 't', long = "tree")]
    tree: bool,

    /// Print only the summary line
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Sets verbosity. -v shows warnings, -vvvv is chatty
    #[clap(short = 'v', parse(from_occurrences))]
    v: u8,
}

/// Where the text to code comes from.
#[derive(Debug, PartialEq, Eq)]
pub enum Source {
    Text(String),
    File(String),
    Sample,
    Missing,
}

/// Defines all user settable options to control program behavior
#[derive(Debug)]
pub struct HuffOpts {
    /// Input text, file or sample
    pub source: Source,
    /// Print the code tree after the table
    pub show_tree: bool,
    /// Only print the summary line
    pub quiet: bool,
    /// Log level passed to the logger
    pub verbosity: LevelFilter,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            source: Source::Missing,
            show_tree: false,
            quiet: false,
            verbosity: LevelFilter::Error,
        }
    }

    /// Copy parsed command line arguments into our internal structure.
    pub fn from_args(args: Args) -> Self {
        let mut opts = HuffOpts::new();
        opts.source = match (args.text, args.file, args.sample) {
            (Some(text), _, _) => Source::Text(text),
            (None, Some(path), _) => Source::File(path),
            (None, None, true) => Source::Sample,
            (None, None, false) => Source::Missing,
        };
        opts.show_tree = args.tree;
        opts.quiet = args.quiet;
        opts.verbosity = match args.v {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        opts
    }

    /// Return the text to code. The sample is handled by the caller and yields None.
    pub fn source_text(&self) -> Result<Option<String>> {
        match &self.source {
            Source::Text(text) => Ok(Some(text.clone())),
            Source::File(path) => {
                info!("Getting input from the file {}", path);
                Ok(Some(std::fs::read_to_string(path)?))
            }
            Source::Sample => Ok(None),
            Source::Missing => Err(Error::InvalidInput(
                "no text given; pass TEXT, --file or --sample".to_string(),
            )),
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the process arguments into HuffOpts.
pub fn huffopts_init() -> HuffOpts {
    HuffOpts::from_args(Args::parse())
}

#[cfg(test)]
mod test {
    use super::*;

    fn opts_from(argv: &[&str]) -> HuffOpts {
        HuffOpts::from_args(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn text_arg_test() {
        let opts = opts_from(&["huffcode", "-t", "Hello"]);
        assert_eq!(opts.source, Source::Text("Hello".to_string()));
        assert!(opts.show_tree);
        assert!(!opts.quiet);
        assert_eq!(opts.verbosity, LevelFilter::Error);
    }

    #[test]
    fn verbosity_test() {
        assert_eq!(opts_from(&["huffcode", "-vv", "x"]).verbosity, LevelFilter::Info);
        assert_eq!(
            opts_from(&["huffcode", "-vvvvv", "x"]).verbosity,
            LevelFilter::Trace
        );
    }

    #[test]
    fn sample_and_file_test() {
        assert_eq!(opts_from(&["huffcode", "--sample"]).source, Source::Sample);
        assert_eq!(
            opts_from(&["huffcode", "-f", "in.txt"]).source,
            Source::File("in.txt".to_string())
        );
    }

    #[test]
    fn conflicting_sources_test() {
        assert!(Args::try_parse_from(&["huffcode", "abc", "--sample"]).is_err());
        assert!(Args::try_parse_from(&["huffcode", "-f", "in.txt", "--sample"]).is_err());
    }

    #[test]
    fn missing_source_test() {
        let opts = opts_from(&["huffcode"]);
        assert_eq!(opts.source, Source::Missing);
        assert!(matches!(opts.source_text(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn missing_file_test() {
        let opts = opts_from(&["huffcode", "-f", "/nonexistent/huffcode/input.txt"]);
        assert!(matches!(opts.source_text(), Err(Error::Io(_))));
    }
}
