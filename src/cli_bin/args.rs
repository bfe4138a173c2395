//! Command-line argument definitions and parsing

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser)]
#[command(
    name = "textmode",
    version,
    about = "Read text files with YAML front matter and write their bodies back",
    long_about = "textmode splits the YAML front matter off text files, prints the \
                  resulting record, and writes bodies back in a chosen encoding. \
                  Front matter can name the output encoding with an `_encoding` field."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the record parsed from a file
    Read(ReadArgs),
    /// Write a body to a file
    Write(WriteArgs),
    /// Read a file and write its body to another file
    Copy(CopyArgs),
}

/// Options that build the resource type for an operation
#[derive(Args, Debug, Clone, Default)]
pub struct ResourceTypeOptions {
    /// Encoding label (utf8, ascii, latin1, utf16le, or any WHATWG label)
    #[arg(short, long)]
    pub encoding: Option<String>,

    /// Treat the whole file as body
    #[arg(long)]
    pub no_frontmatter: bool,

    /// YAML file describing the resource type; flags override its values
    #[arg(long, value_name = "FILE")]
    pub resource_type: Option<PathBuf>,
}

/// Arguments for the read command
#[derive(Args, Debug)]
pub struct ReadArgs {
    /// File to read
    pub file: PathBuf,

    #[command(flatten)]
    pub resource: ResourceTypeOptions,

    /// Output format
    #[arg(long, value_enum, default_value = "yaml")]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the write command
#[derive(Args, Debug)]
pub struct WriteArgs {
    /// File to write
    pub file: PathBuf,

    /// Body text
    #[arg(short, long, conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the body text from a UTF-8 file
    #[arg(long, value_name = "FILE")]
    pub body_file: Option<PathBuf>,

    #[command(flatten)]
    pub resource: ResourceTypeOptions,
}

/// Arguments for the copy command
#[derive(Args, Debug)]
pub struct CopyArgs {
    /// File to read
    pub source: PathBuf,

    /// File to write
    pub destination: PathBuf,

    #[command(flatten)]
    pub resource: ResourceTypeOptions,
}

/// Output formats for the read command
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    /// YAML format
    Yaml,
    /// JSON format
    Json,
}
