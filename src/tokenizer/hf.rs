use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde_json::Value;
use thiserror::Error;
use tokenizers::Tokenizer as HfTokenizer;

/// File name of the serialized tokenizer definition inside a model directory.
pub const TOKENIZER_FILE: &str = "tokenizer.json";

/// Model configuration file, consulted for `eos_token_id`.
const CONFIG_FILE: &str = "config.json";

/// Token names tried, in order, when config.json does not pin an eos id.
const EOS_CANDIDATES: &[&str] = &["</s>", "<|endoftext|>", "<|end|>", "<|im_end|>"];

/// Wrapper around a pretrained Hugging Face tokenizer.
///
/// Provides the two operations the adapter exposes, encode and decode,
/// plus the metadata reported by `info`. The underlying tokenizer is
/// loaded once per process; nothing is cached beyond it.
#[derive(Debug)]
pub struct Tokenizer {
    inner: HfTokenizer,
    eos_token_id: Option<u32>,
}

#[derive(Debug, Error)]
pub enum TokenizerError {
    #[error("tokenizer.json not found in {0}")]
    ArtifactNotFound(String),

    #[error("failed to load tokenizer: {0}")]
    Load(String),

    #[error("failed to encode text: {0}")]
    Encode(String),

    #[error("failed to decode ids: {0}")]
    Decode(String),
}

impl Tokenizer {
    /// Load `tokenizer.json` from a model directory.
    ///
    /// A missing artifact is an input error (exit 2 at the surface); a
    /// present but unparsable artifact is a backend failure (exit 1).
    pub fn load_from_dir<P: AsRef<Path>>(model_dir: P) -> Result<Self, TokenizerError> {
        let dir = model_dir.as_ref();
        let artifact = dir.join(TOKENIZER_FILE);
        if !artifact.is_file() {
            return Err(TokenizerError::ArtifactNotFound(dir.display().to_string()));
        }

        let inner =
            HfTokenizer::from_file(&artifact).map_err(|e| TokenizerError::Load(e.to_string()))?;
        let eos_token_id = resolve_eos_token_id(dir, &inner);
        debug!(
            "loaded tokenizer from {} (vocab size {}, eos id {:?})",
            artifact.display(),
            inner.get_vocab_size(true),
            eos_token_id
        );

        Ok(Self {
            inner,
            eos_token_id,
        })
    }

    /// Encode text into a sequence of token ids.
    pub fn encode(&self, text: &str, add_special_tokens: bool) -> Result<Vec<u32>, TokenizerError> {
        let encoding = self
            .inner
            .encode(text, add_special_tokens)
            .map_err(|e| TokenizerError::Encode(e.to_string()))?;
        Ok(encoding.get_ids().to_vec())
    }

    /// Decode a sequence of token ids back into text.
    pub fn decode(&self, ids: &[u32], skip_special_tokens: bool) -> Result<String, TokenizerError> {
        self.inner
            .decode(ids, skip_special_tokens)
            .map_err(|e| TokenizerError::Decode(e.to_string()))
    }

    /// Vocabulary size, counting added tokens.
    pub fn vocab_size(&self) -> usize {
        self.inner.get_vocab_size(true)
    }

    /// End-of-sequence token id, if one could be resolved.
    pub fn eos_token_id(&self) -> Option<u32> {
        self.eos_token_id
    }
}

/// Resolve the eos token id: config.json first, then well-known token names.
fn resolve_eos_token_id(dir: &Path, tokenizer: &HfTokenizer) -> Option<u32> {
    if let Some(id) = eos_from_config(dir) {
        return Some(id);
    }
    EOS_CANDIDATES
        .iter()
        .find_map(|name| tokenizer.token_to_id(name))
}

/// Read `eos_token_id` from config.json in the model directory.
/// A missing or malformed config is not an error; it only loses the eos id.
fn eos_from_config(dir: &Path) -> Option<u32> {
    let path = dir.join(CONFIG_FILE);
    let data = fs::read_to_string(&path).ok()?;
    match serde_json::from_str::<Value>(&data) {
        Ok(config) => config
            .get("eos_token_id")
            .and_then(Value::as_u64)
            .and_then(|id| u32::try_from(id).ok()),
        Err(err) => {
            warn!("ignoring malformed {}: {}", path.display(), err);
            None
        }
    }
}
