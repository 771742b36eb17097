// SPDX-License-Identifier: Apache-2.0

//! Error types for the fixture library.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Most fixtures have no error path at all; the two that do (the stub
//! store and the stub evaluator) propagate these variants unmodified.

use thiserror::Error;

/// Errors that can surface from the stubbed boundary collaborators.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// The stub data store rejected a query.
    #[error("store error: {message}")]
    Store {
        /// Error message from the store.
        message: String,
    },

    /// The stub evaluator could not interpret the submitted program text.
    #[error("evaluation error: {message}")]
    Eval {
        /// Error message from the evaluator.
        message: String,
    },
}
