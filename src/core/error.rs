use thiserror::Error;

use crate::cli::Mode;
use crate::parsing::PayloadError;
use crate::tokenizer::TokenizerError;

/// Usage line embedded in JSON error objects for malformed invocations.
pub const USAGE: &str = "usage: tokenizer-adapter <encode|decode|info> <model_dir> [payload]";

/// Top-level failure of one adapter invocation.
///
/// Every variant maps to an exit code: 2 for usage and input problems,
/// 1 when the tokenization backend itself fails.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("unknown mode {0}")]
    UnknownMode(String),

    #[error("missing payload for mode {0}; {usage}", usage = USAGE)]
    MissingPayload(Mode),

    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),

    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error("failed to serialize reply: {0}")]
    Json(#[from] serde_json::Error),
}

impl AdapterError {
    /// Process exit code for this failure: 0 is success, 1 a backend
    /// failure, 2 a usage or input error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AdapterError::UnknownMode(_)
            | AdapterError::MissingPayload(_)
            | AdapterError::Payload(_)
            | AdapterError::Tokenizer(TokenizerError::ArtifactNotFound(_)) => 2,
            AdapterError::Tokenizer(_) | AdapterError::Json(_) => 1,
        }
    }
}
