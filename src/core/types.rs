use serde::Serialize;

/// Reply for `encode`: the token ids for the input text, in order.
#[derive(Debug, Serialize)]
pub struct EncodeReply {
    pub ids: Vec<u32>,
}

/// Reply for `decode`: the text reconstructed from the input ids.
#[derive(Debug, Serialize)]
pub struct DecodeReply {
    pub text: String,
}

/// Reply for `info`: tokenizer metadata. `eos_token_id` is `null` when
/// neither config.json nor the vocabulary pins an end-of-sequence token.
#[derive(Debug, Serialize)]
pub struct InfoReply {
    pub vocab_size: usize,
    pub eos_token_id: Option<u32>,
}
