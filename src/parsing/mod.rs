pub mod payload;

pub use payload::{PayloadError, parse_token_ids};
