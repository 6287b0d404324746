mod cli;
mod core;
mod parsing;
mod tokenizer;

use clap::Parser;
use clap::error::ErrorKind;
use log::debug;

use crate::cli::{Args, Mode};
use crate::core::error::{AdapterError, USAGE};
use crate::core::types::{DecodeReply, EncodeReply, InfoReply};
use crate::parsing::parse_token_ids;
use crate::tokenizer::Tokenizer;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            debug!("argument error: {err}");
            fail(USAGE.to_string(), 2);
        }
    };

    match run(&args) {
        Ok(reply) => println!("{reply}"),
        Err(err) => fail(err.to_string(), err.exit_code()),
    }
}

/// Run one adapter operation and return the JSON reply for stdout.
fn run(args: &Args) -> Result<String, AdapterError> {
    let mode: Mode = args.mode.parse()?;
    let tokenizer = Tokenizer::load_from_dir(&args.model_dir)?;

    let reply = match mode {
        Mode::Encode => {
            let text = require_payload(args, mode)?;
            let ids = tokenizer.encode(text, !args.no_special_tokens)?;
            debug!("encoded {} bytes into {} ids", text.len(), ids.len());
            serde_json::to_string(&EncodeReply { ids })
        }
        Mode::Decode => {
            let ids = parse_token_ids(require_payload(args, mode)?)?;
            let text = tokenizer.decode(&ids, !args.keep_special_tokens)?;
            debug!("decoded {} ids into {} bytes", ids.len(), text.len());
            serde_json::to_string(&DecodeReply { text })
        }
        Mode::Info => serde_json::to_string(&InfoReply {
            vocab_size: tokenizer.vocab_size(),
            eos_token_id: tokenizer.eos_token_id(),
        }),
    };
    reply.map_err(AdapterError::from)
}

fn require_payload(args: &Args, mode: Mode) -> Result<&str, AdapterError> {
    args.payload
        .as_deref()
        .ok_or(AdapterError::MissingPayload(mode))
}

/// Print a JSON error object on stdout and terminate with `code`.
/// Stdout carries nothing but the one JSON object; logs go to stderr.
fn fail(message: String, code: i32) -> ! {
    println!("{}", serde_json::json!({ "error": message }));
    std::process::exit(code);
}
