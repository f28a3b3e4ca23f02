// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Query-string parameters
//!
//! [`Query`] only ever stores parameters that carry a value: `None` and empty
//! strings are dropped on insertion, so placeholder values never reach the
//! wire.

/// Ordered list of query-string parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value`, skipping empty values
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    /// Append `key=value` when `value` is `Some` and non-empty
    #[must_use]
    pub fn with_opt<T: ToString>(mut self, key: impl Into<String>, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        let value = value.to_string();
        if !value.is_empty() {
            self.pairs.push((key.into(), value));
        }
    }

    /// Whether no parameter was supplied
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Value of the first parameter named `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Parameters in insertion order
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}
