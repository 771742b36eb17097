// SPDX-License-Identifier: Apache-2.0

//! Query-construction pair: parameterized template vs. string concatenation.

use crate::store::{DataStore, QueryOutcome};
use crate::Result;

/// Fixed template used by the safe half; the search term never enters it.
const SEARCH_TEMPLATE: &str = "SELECT * FROM products WHERE name LIKE ?";

/// Searches products with a parameterized query. `term` (wrapped in SQL
/// wildcards) travels out-of-band as the single bound parameter, so it
/// cannot alter the query structure.
pub async fn search_products_safe<S: DataStore + ?Sized>(
    store: &S,
    term: &str,
) -> Result<QueryOutcome> {
    store
        .query_safe(SEARCH_TEMPLATE, &[format!("%{term}%")])
        .await
}

/// Searches products by concatenating `term` into the query text. Any quote
/// or SQL syntax in `term` alters the query semantics.
pub async fn search_products_unsafe<S: DataStore + ?Sized>(
    store: &S,
    term: &str,
) -> Result<QueryOutcome> {
    let statement = format!("SELECT * FROM products WHERE name LIKE '%{term}%'");
    store.query_unsafe(&statement).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StubStore;

    #[tokio::test]
    async fn test_safe_search_keeps_template_fixed() {
        let store = StubStore::new();
        let outcome = search_products_safe(&store, "x' OR '1'='1").await.unwrap();

        assert_eq!(outcome.statement, SEARCH_TEMPLATE);
        assert_eq!(outcome.params, vec!["%x' OR '1'='1%".to_string()]);
        assert!(
            !outcome.statement.contains("OR"),
            "Raw term must never appear in the template text"
        );
    }

    #[tokio::test]
    async fn test_unsafe_search_embeds_term_in_statement() {
        let store = StubStore::new();
        let outcome = search_products_unsafe(&store, "x' OR '1'='1").await.unwrap();

        assert_eq!(
            outcome.statement,
            "SELECT * FROM products WHERE name LIKE '%x' OR '1'='1%'"
        );
        assert!(outcome.params.is_empty());
    }
}
