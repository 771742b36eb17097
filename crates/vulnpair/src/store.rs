// SPDX-License-Identifier: Apache-2.0

//! Stub data store used by the query and state-change fixtures.
//!
//! The store never touches a real database. It echoes back the statement
//! (and, on the parameterized path, the bound parameters) it was handed,
//! which is exactly what the harness needs to assert on: whether untrusted
//! input ended up inside the statement text or safely out-of-band.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// What the stub store saw for one query.
///
/// On the unparameterized path `params` is always empty; any untrusted
/// input that reached the store is embedded in `statement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOutcome {
    /// The statement text as submitted.
    pub statement: String,
    /// Bound parameters, in order.
    pub params: Vec<String>,
}

/// Data-store boundary with one unparameterized and one parameterized shape.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Submits a fully-assembled statement. Whatever the caller
    /// concatenated into it is part of the statement.
    async fn query_unsafe(&self, statement: &str) -> Result<QueryOutcome>;

    /// Submits a fixed template plus out-of-band parameters.
    async fn query_safe(&self, template: &str, params: &[String]) -> Result<QueryOutcome>;
}

/// In-memory placeholder store. Constructed once, never mutated.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubStore;

impl StubStore {
    /// Creates the stub store.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DataStore for StubStore {
    async fn query_unsafe(&self, statement: &str) -> Result<QueryOutcome> {
        tracing::debug!(%statement, "stub store received raw statement");
        Ok(QueryOutcome {
            statement: statement.to_string(),
            params: Vec::new(),
        })
    }

    async fn query_safe(&self, template: &str, params: &[String]) -> Result<QueryOutcome> {
        tracing::debug!(%template, param_count = params.len(), "stub store received parameterized query");
        Ok(QueryOutcome {
            statement: template.to_string(),
            params: params.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_store_echoes_raw_statement() {
        let store = StubStore::new();
        let outcome = store.query_unsafe("SELECT 1").await.unwrap();
        assert_eq!(outcome.statement, "SELECT 1");
        assert!(outcome.params.is_empty());
    }

    #[tokio::test]
    async fn test_stub_store_echoes_template_and_params() {
        let store = StubStore::new();
        let outcome = store
            .query_safe("SELECT * FROM t WHERE id = ?", &["42".to_string()])
            .await
            .unwrap();
        assert_eq!(outcome.statement, "SELECT * FROM t WHERE id = ?");
        assert_eq!(outcome.params, vec!["42".to_string()]);
    }
}
