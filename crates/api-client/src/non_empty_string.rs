// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Non-empty string validation
//!
//! [`NonEmptyString`] backs every required configuration value of the client
//! (base URL, API key). Once a value has been wrapped it is known to contain at
//! least one non-whitespace character, so the request pipeline never has to
//! re-check it.
//!
//! ```rust
//! use api_client::NonEmptyString;
//!
//! let api_key = NonEmptyString::new("zk_dev_123").expect("valid key");
//! assert_eq!(api_key.as_str(), "zk_dev_123");
//!
//! assert!(NonEmptyString::new("").is_err());
//! assert!(NonEmptyString::new(" \t\n").is_err());
//! ```

use core::fmt;
use std::str::FromStr;

/// Error returned when a value is empty or whitespace-only
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("string cannot be empty or whitespace-only")]
pub struct EmptyStringError;

/// A string guaranteed to hold at least one non-whitespace character
///
/// Leading and trailing whitespace is kept as given; only the all-blank case is
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyString(Box<str>);

impl NonEmptyString {
    /// Wrap `s`, rejecting empty and whitespace-only input
    pub fn new(s: impl Into<String>) -> Result<Self, EmptyStringError> {
        let s = s.into();
        if s.trim().is_empty() {
            Err(EmptyStringError)
        } else {
            Ok(Self(s.into_boxed_str()))
        }
    }

    /// Borrow the contained value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return a copy with any trailing `/` characters removed
    ///
    /// Returns `None` if nothing but slashes would remain.
    pub fn trim_end_slashes(&self) -> Option<Self> {
        Self::new(self.0.trim_end_matches('/')).ok()
    }
}

impl fmt::Display for NonEmptyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NonEmptyString {
    type Err = EmptyStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for NonEmptyString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = EmptyStringError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_values() {
        assert_eq!(NonEmptyString::new(""), Err(EmptyStringError));
        assert_eq!(NonEmptyString::new("   "), Err(EmptyStringError));
        assert_eq!(NonEmptyString::new("\t\r\n"), Err(EmptyStringError));
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        let value = NonEmptyString::new(" key ").unwrap();
        assert_eq!(value.as_str(), " key ");
        assert_eq!(value.to_string(), " key ");
    }

    #[test]
    fn parses_from_str() {
        let parsed: NonEmptyString = "uniswap-v3".parse().unwrap();
        assert_eq!(parsed.as_ref(), "uniswap-v3");
        assert!("".parse::<NonEmptyString>().is_err());
    }

    #[test]
    fn trims_trailing_slashes() {
        let url = NonEmptyString::new("https://api.zerion.io/v1//").unwrap();
        assert_eq!(
            url.trim_end_slashes().unwrap().as_str(),
            "https://api.zerion.io/v1"
        );
        assert!(NonEmptyString::new("///").unwrap().trim_end_slashes().is_none());
    }
}
