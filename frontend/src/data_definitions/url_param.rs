//! Route segment wrapper that stores serde values as url-safe base64 CBOR.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};


// route segments need Display, FromStr and Default
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut cbor = Vec::new();
        ciborium::into_writer(&self.0, &mut cbor).map_err(|_| std::fmt::Error)?;
        write!(f, "{}", URL_SAFE_NO_PAD.encode(cbor))
    }
}

#[derive(Debug)]
pub enum UrlParamError {
    Base64(base64::DecodeError),
    Cbor(ciborium::de::Error<std::io::Error>),
}

impl Display for UrlParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "url segment is not base64: {}", err),
            Self::Cbor(err) => write!(f, "url segment does not hold the expected state: {}", err),
        }
    }
}

impl std::error::Error for UrlParamError {}

impl<T: for<'de> Deserialize<'de> + Default> FromStr for UrlParam<T> {
    type Err = UrlParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // an empty segment is the default state, e.g. a bare search page
        if s.is_empty() {
            return Ok(UrlParam(T::default()));
        }
        let cbor = URL_SAFE_NO_PAD.decode(s.as_bytes()).map_err(UrlParamError::Base64)?;
        let value = ciborium::from_reader(std::io::Cursor::new(cbor)).map_err(UrlParamError::Cbor)?;
        Ok(UrlParam(value))
    }
}
