// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Vulnpair
//!
//! Paired safe/unsafe code fixtures for exercising security scanners.
//!
//! Each module holds one vulnerability class as a pair of functions: a
//! mitigated version and a deliberately vulnerable one. The functions are
//! independent, stateless leaves invoked in isolation by the harness under
//! evaluation; nothing here orchestrates anything. The "database", process
//! runner and evaluator are stubbed boundary collaborators, passed in
//! explicitly so every fixture stays independently testable.
//!
//! The unsafe halves exist to be flagged. Do not lift them into real code.
//!
//! ## Modules
//!
//! - [`markup`] - reflected markup injection (XSS)
//! - [`process`] - shell command injection
//! - [`eval`] - arbitrary code evaluation
//! - [`query`] - SQL injection
//! - [`session`] - predictable identifier generation
//! - [`signature`] - weak keys and timing-unsafe comparison
//! - [`csrf`] - unauthorized state change
//! - [`utils`] - a benign control function

// ============================================================================
// Error Handling
// ============================================================================

pub use error::FixtureError;

/// Convenience Result type for fixture operations.
///
/// This is equivalent to `std::result::Result<T, FixtureError>`.
pub type Result<T> = std::result::Result<T, FixtureError>;

// ============================================================================
// Boundary Collaborators
// ============================================================================

pub use eval::{Evaluator, StubEvaluator};
pub use process::{ProcessRunner, SystemRunner};
pub use store::{DataStore, QueryOutcome, StubStore};

// ============================================================================
// Fixture Pairs
// ============================================================================

pub use csrf::{QueryParams, RequestBody, delete_user_safe, delete_user_unsafe};
pub use eval::{run_snippet_safe, run_snippet_unsafe};
pub use markup::{echo_safe, echo_unsafe, escape_markup};
pub use process::{show_commit_safe, show_commit_unsafe};
pub use query::{search_products_safe, search_products_unsafe};
pub use session::{make_session_id_safe, make_session_id_unsafe};
pub use signature::{KeyMaterial, SIG_KEY_ENV, verify_signature_safe, verify_signature_unsafe};
pub use utils::add_two_number;

// ============================================================================
// Modules
// ============================================================================

pub mod csrf;
pub mod error;
pub mod eval;
pub mod markup;
pub mod process;
pub mod query;
pub mod session;
pub mod signature;
pub mod store;
pub mod utils;
