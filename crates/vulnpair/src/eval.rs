// SPDX-License-Identifier: Apache-2.0

//! Dynamic-code-evaluation pair.
//!
//! There is no general `eval` to call safely, so the safe half demonstrates
//! the only sound policy: untrusted input never becomes program text. It
//! ignores its argument and evaluates a fixed expression. The unsafe half
//! feeds the caller's text straight into the evaluator.

use crate::error::FixtureError;
use crate::Result;

/// The fixed expression the safe half evaluates, regardless of input.
const SAFE_SNIPPET: &str = "1";

/// Code-evaluation boundary: accepts program text, yields a value.
pub trait Evaluator {
    /// Evaluates `source` and returns its value.
    fn eval(&self, source: &str) -> Result<i64>;
}

/// Placeholder evaluator that interprets a single integer literal.
///
/// Anything else is an evaluation fault, which propagates to the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubEvaluator;

impl StubEvaluator {
    /// Creates the stub evaluator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Evaluator for StubEvaluator {
    fn eval(&self, source: &str) -> Result<i64> {
        source
            .trim()
            .parse()
            .map_err(|_| FixtureError::Eval {
                message: format!("not an integer literal: {source:?}"),
            })
    }
}

/// Evaluates a fixed, hardcoded expression and returns its constant value.
/// The `_code` argument has zero influence on what executes.
pub fn run_snippet_safe<E: Evaluator + ?Sized>(evaluator: &E, _code: &str) -> Result<i64> {
    evaluator.eval(SAFE_SNIPPET)
}

/// Evaluates `code` directly as program text. Arbitrary code execution
/// against a real evaluator; faults propagate unmodified.
pub fn run_snippet_unsafe<E: Evaluator + ?Sized>(evaluator: &E, code: &str) -> Result<i64> {
    evaluator.eval(code)
}
