use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use crate::core::error::AdapterError;

/// Command-line surface of the adapter.
///
/// The mode is taken as a plain string rather than a `ValueEnum` so that an
/// unrecognized mode produces our JSON error object instead of clap's usage
/// message.
#[derive(Debug, Parser)]
#[command(
    name = "tokenizer-adapter",
    version,
    about = "Encode text to token ids and decode ids back to text with a pretrained tokenizer.json"
)]
pub struct Args {
    /// Operation to run: encode, decode or info
    pub mode: String,

    /// Directory containing the tokenizer.json artifact
    pub model_dir: PathBuf,

    /// Text to encode, or ids to decode (JSON array or comma-separated list)
    pub payload: Option<String>,

    /// Do not add special tokens when encoding
    #[arg(long)]
    pub no_special_tokens: bool,

    /// Keep special tokens in the decoded text
    #[arg(long)]
    pub keep_special_tokens: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
    Info,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Encode => "encode",
            Mode::Decode => "decode",
            Mode::Info => "info",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = AdapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "encode" => Ok(Mode::Encode),
            "decode" => Ok(Mode::Decode),
            "info" => Ok(Mode::Info),
            other => Err(AdapterError::UnknownMode(other.to_string())),
        }
    }
}
