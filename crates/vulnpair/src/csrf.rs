// SPDX-License-Identifier: Apache-2.0

//! State-change authorization pair: a destructive deletion with and without
//! proof that the session intended it.
//!
//! The unsafe half deletes based on read-style parameters with no token
//! check and concatenates the id into the statement (CSRF plus injection in
//! one). The safe half refuses unless the request-bound token equals the
//! session-bound token, then issues a parameterized deletion.

use serde::{Deserialize, Serialize};

use crate::store::{DataStore, QueryOutcome};
use crate::Result;

/// Fixed deletion template used by the safe half.
const DELETE_TEMPLATE: &str = "DELETE FROM users WHERE id = ?";

/// Read-style request parameters (as from a URL query string).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    /// Identifier of the record to delete.
    pub id: String,
}

/// Request body of a state-changing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Identifier of the record to delete.
    pub id: String,
}

/// Deletes a user record from read-style parameters: no authorization
/// token, and the id is concatenated straight into the statement.
pub async fn delete_user_unsafe<S: DataStore + ?Sized>(
    store: &S,
    params: &QueryParams,
) -> Result<QueryOutcome> {
    let statement = format!("DELETE FROM users WHERE id = {}", params.id);
    store.query_unsafe(&statement).await
}

/// Deletes a user record only when the request token matches the session
/// token. Returns `Ok(false)` without touching the store when the token is
/// absent or mismatched; on a match, issues exactly one parameterized
/// deletion and returns `Ok(true)`.
pub async fn delete_user_safe<S: DataStore + ?Sized>(
    store: &S,
    body: &RequestBody,
    csrf_token: Option<&str>,
    csrf_session: &str,
) -> Result<bool> {
    match csrf_token {
        Some(token) if token == csrf_session => {}
        _ => return Ok(false),
    }
    store
        .query_safe(DELETE_TEMPLATE, &[body.id.clone()])
        .await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StubStore;

    #[tokio::test]
    async fn test_unsafe_delete_concatenates_id() {
        let store = StubStore::new();
        let params = QueryParams {
            id: "7 OR 1=1".to_string(),
        };
        let outcome = delete_user_unsafe(&store, &params).await.unwrap();
        assert_eq!(outcome.statement, "DELETE FROM users WHERE id = 7 OR 1=1");
        assert!(outcome.params.is_empty());
    }

    #[tokio::test]
    async fn test_safe_delete_refuses_mismatched_token() {
        let store = StubStore::new();
        let body = RequestBody { id: "7".to_string() };
        let deleted = delete_user_safe(&store, &body, Some("tok1"), "tok2")
            .await
            .unwrap();
        assert!(!deleted);
    }

    #[tokio::test]
    async fn test_safe_delete_refuses_absent_token() {
        let store = StubStore::new();
        let body = RequestBody { id: "7".to_string() };
        let deleted = delete_user_safe(&store, &body, None, "tokA").await.unwrap();
        assert!(!deleted);
    }

    #[tokio::test]
    async fn test_safe_delete_parameterizes_on_token_match() {
        let store = StubStore::new();
        let body = RequestBody { id: "7".to_string() };
        let deleted = delete_user_safe(&store, &body, Some("tokA"), "tokA")
            .await
            .unwrap();
        assert!(deleted);
    }
}
