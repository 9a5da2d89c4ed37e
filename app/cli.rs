use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(version, about = "Inspect and produce AMF0 encoded buffers", long_about)]
pub(crate) struct AppCli {
    #[arg(long, value_name = "LOG_LEVEL")]
    pub(crate) log_level: Option<String>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Decode every value of a buffer holding concatenated AMF0 values
    Decode {
        /// Input file, `-` reads stdin
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Debug)]
        format: OutputFormat,
        /// Input is hex text instead of raw bytes
        #[arg(long)]
        hex: bool,
    },
    /// Encode a JSON document as a single AMF0 value
    Encode {
        /// JSON file, `-` reads stdin
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// Output file, stdout when absent
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
        /// Encode a top level JSON object as an ECMA array
        #[arg(long)]
        ecma: bool,
        /// Write hex text instead of raw bytes
        #[arg(long)]
        hex: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub(crate) enum OutputFormat {
    Debug,
    Json,
}
