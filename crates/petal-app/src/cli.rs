use std::path::PathBuf;

use clap::Parser;

/// Petal — a streaming terminal chat for Gemini models.
#[derive(Parser, Debug)]
#[command(name = "petal", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Model id override (also settable via PETAL_MODEL).
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Log directive override (e.g. debug, petal_ai=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
