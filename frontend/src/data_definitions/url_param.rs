//! Route segments that carry structured state.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use serde::{Deserialize, Serialize};

/// CBOR then URL-safe base64, so any serde type can sit in a `/:segment`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut encoded = Vec::new();
        if ciborium::into_writer(&self.0, &mut encoded).is_ok() {
            write!(f, "{}", URL_SAFE.encode(encoded))?;
        }
        Ok(())
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
            Self::Cbor(err) => write!(f, "url segment does not decode: {}", err),
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

#[cfg(test)]
mod tests {
    use common::filter_state::{FilterField, FilterFlag, FilterState};

    use super::*;

    #[test]
    fn applied_filters_survive_the_url() {
        let mut filters = FilterState::default();
        filters.set_input(FilterField::City, "São Paulo");
        filters.set_input(FilterField::MinRating, "4.5");
        filters.toggle_flag(FilterFlag::OpenNow);

        let segment = UrlParam(Some(filters.clone())).to_string();
        assert!(!segment.contains('/'));
        let back: UrlParam<Option<FilterState>> = segment.parse().unwrap();
        assert_eq!(back.0, Some(filters));
    }

    #[test]
    fn garbage_segment_is_rejected() {
        assert!(matches!("%%%".parse::<UrlParam<Option<FilterState>>>(), Err(UrlParamError::Base64(_))));
        let not_cbor = URL_SAFE.encode([0xff, 0x00]);
        assert!(not_cbor.parse::<UrlParam<Option<FilterState>>>().is_err());
    }
}
