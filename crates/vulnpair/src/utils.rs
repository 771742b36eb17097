// SPDX-License-Identifier: Apache-2.0

//! Unrelated utility with no security relevance, kept so scanners have at
//! least one plainly benign function in the fixture set.

/// Returns the arithmetic sum of its two arguments. No validation.
#[must_use]
pub const fn add_two_number(num1: i64, num2: i64) -> i64 {
    num1 + num2
}
