// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Pagination parameters

use api_client::Query;

/// One page request: an optional size and an optional opaque cursor
///
/// Only supplied values are sent. Following the cursor returned by the API is
/// left to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Maximum number of items to return
    pub limit: Option<u32>,
    /// Cursor from a previous response
    pub cursor: Option<String>,
}

impl Page {
    /// No pagination parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Request at most `limit` items
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Continue from `cursor`
    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Query parameters for this page
    pub fn to_query(&self) -> Query {
        Query::new()
            .with_opt("limit", self.limit)
            .with_opt("cursor", self.cursor.as_deref())
    }
}
