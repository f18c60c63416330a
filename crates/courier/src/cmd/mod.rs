use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod inspect;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a payload to wire bytes.
    Encode(EncodeArgs),
    /// Decode a single payload from wire bytes.
    Decode(DecodeArgs),
    /// Decode payloads until end of input and print each.
    Inspect(InspectArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Inspect(args) => inspect::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Message text payload.
    #[arg(long, conflicts_with_all = ["error", "heartbeat"])]
    pub text: Option<String>,
    /// Message recipient.
    #[arg(long, requires = "text")]
    pub to: Option<String>,
    /// Message sender.
    #[arg(long, requires = "text")]
    pub from: Option<String>,
    /// Error text payload.
    #[arg(long, conflicts_with_all = ["text", "heartbeat"])]
    pub error: Option<String>,
    /// Heartbeat payload.
    #[arg(long, conflicts_with_all = ["text", "error"])]
    pub heartbeat: bool,
    /// Write wire bytes to a file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Read wire bytes from a file instead of stdin.
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Read wire bytes from a file instead of stdin.
    pub input: Option<PathBuf>,
    /// Stop after N payloads.
    #[arg(long)]
    pub count: Option<usize>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
