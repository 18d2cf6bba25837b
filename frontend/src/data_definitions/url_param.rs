//! Route segments that carry serialized view state.

use std::{fmt::Display, str::FromStr};

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde::{Deserialize, Serialize};


/// A value stored in one path segment as base64 (URL alphabet) CBOR.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serialized = Vec::new();
        if ciborium::into_writer(&self.0, &mut serialized).is_ok() {
            write!(f, "{}", URL_SAFE.encode(serialized))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum UrlParamError {
    Base64(base64::DecodeError),
    Cbor(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for UrlParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "route segment is not base64: {}", err),
            Self::Cbor(err) => write!(f, "route segment does not hold the expected value: {}", err),
        }
    }
}

impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = UrlParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = URL_SAFE.decode(s.as_bytes()).map_err(UrlParamError::Base64)?;
        let value = ciborium::from_reader(std::io::Cursor::new(bytes)).map_err(UrlParamError::Cbor)?;
        Ok(UrlParam(value))
    }
}
