//! URL parameter helpers and types.

use std::{fmt::Display, str::FromStr};

use dioxus::logger::tracing;
use common::url_codec::{StateParseError, decode_url_safe, encode_url_safe};
use serde::{Deserialize, Serialize, de::DeserializeOwned};


// You can use a custom type with the hash segment as long as it implements Display, FromStr and Default
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl <T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

// Display the state in a way that can be parsed by FromStr
impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match encode_url_safe(&self.0) {
            Ok(encoded) => write!(f, "{}", encoded),
            Err(e) => {
                tracing::warn!("failed to encode URL parameter, leaving it empty: {e}");
                Ok(())
            }
        }
    }
}

// Parse the state from a string that was created by Display
impl<T: DeserializeOwned> FromStr for UrlParam<T> {
    type Err = StateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_url_safe(s).map(UrlParam)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cannot be encoded"))
        }
    }

    #[test]
    fn unencodable_value_displays_as_empty_segment() {
        assert_eq!(UrlParam(Unencodable).to_string(), "");
    }

    #[test]
    fn display_output_parses_back() {
        let param = UrlParam(Some(vec!["MD".to_string(), "PhD".to_string()]));
        let parsed: UrlParam<Option<Vec<String>>> = param.to_string().parse().unwrap();
        assert_eq!(parsed, param);
    }
}
