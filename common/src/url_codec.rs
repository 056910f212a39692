//! URL-safe encoding of serializable state: CBOR, then base64.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde::{Serialize, de::DeserializeOwned};

#[derive(Debug, thiserror::Error)]
pub enum StateParseError {
    #[error("Failed to decode base64: {0}")]
    DecodeError(#[from] base64::DecodeError),
    #[error("Failed to deserialize: {0}")]
    CiboriumError(#[from] ciborium::de::Error<std::io::Error>),
    #[error("Failed to serialize: {0}")]
    SerializeError(#[from] ciborium::ser::Error<std::io::Error>),
}

pub fn encode_url_safe<T: Serialize>(value: &T) -> Result<String, StateParseError> {
    let mut serialized = Vec::new();
    ciborium::into_writer(value, &mut serialized)?;
    Ok(URL_SAFE.encode(serialized))
}

pub fn decode_url_safe<T: DeserializeOwned>(s: &str) -> Result<T, StateParseError> {
    let decoded = URL_SAFE.decode(s.as_bytes())?;
    let parsed = ciborium::from_reader(std::io::Cursor::new(decoded))?;
    Ok(parsed)
}
