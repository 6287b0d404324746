use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("invalid ids payload: {0}")]
    InvalidJson(String),

    #[error("invalid id '{0}' in comma-separated payload")]
    InvalidSegment(String),
}

/// Parse a decode payload into token ids.
///
/// Two forms are accepted: a JSON array of non-negative integers
/// (`"[1,2,3]"`), or a comma-separated list (`"1,2,3"`). Empty segments in
/// the comma-separated form are skipped, so `"1,,2,"` parses as `[1, 2]`;
/// any non-empty segment that is not a non-negative integer is rejected.
pub fn parse_token_ids(payload: &str) -> Result<Vec<u32>, PayloadError> {
    let trimmed = payload.trim();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).map_err(|e| PayloadError::InvalidJson(e.to_string()));
    }
    trimmed
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            segment
                .parse::<u32>()
                .map_err(|_| PayloadError::InvalidSegment(segment.to_string()))
        })
        .collect()
}
