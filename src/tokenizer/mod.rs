/// Tokenizer module for converting text to token ids and vice versa.
///
/// All substantive tokenization logic (vocabulary, merges, normalization,
/// special-token handling) is delegated to the Hugging Face `tokenizers`
/// crate; this module only locates and loads the artifact.
pub mod hf;

pub use hf::{Tokenizer, TokenizerError};
