//! Data URL codec for staged image previews.
//!
//! Format: `data:<mime>;base64,<payload>` with the standard padded base64
//! alphabet. `decode` is the exact inverse of `encode`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// Why a preview string could not be turned back into bytes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataUrlError {
    #[error("missing `data:` scheme")]
    MissingScheme,

    #[error("missing `;base64,` delimiter")]
    MissingDelimiter,

    #[error("empty MIME type")]
    EmptyMime,

    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),
}

/// Bytes recovered from a data URL together with their MIME type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDataUrl {
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Encode bytes as a self-describing data URL
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    format!("{SCHEME}{mime}{BASE64_MARKER}{}", STANDARD.encode(bytes))
}

/// Parse a data URL produced by [`encode`]
pub fn decode(url: &str) -> Result<DecodedDataUrl, DataUrlError> {
    let rest = url.strip_prefix(SCHEME).ok_or(DataUrlError::MissingScheme)?;
    let (mime, payload) = rest
        .split_once(BASE64_MARKER)
        .ok_or(DataUrlError::MissingDelimiter)?;

    if mime.trim().is_empty() {
        return Err(DataUrlError::EmptyMime);
    }

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| DataUrlError::InvalidBase64(e.to_string()))?;

    Ok(DecodedDataUrl {
        mime: mime.to_string(),
        bytes,
    })
}
