// SPDX-License-Identifier: Apache-2.0

//! Reflected-markup pair: untrusted text echoed into an HTML container.
//!
//! The safe half entity-escapes the five markup-significant characters in a
//! single pass before wrapping; the unsafe half reflects the input verbatim
//! (reflected XSS in a real HTTP context).

/// Escapes `&`, `<`, `>`, `"` and `'` to their entity forms.
///
/// Single pass over the input, so already-produced entities are never
/// re-escaped.
#[must_use]
pub fn escape_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Echoes `input` into a fixed container with all markup metacharacters
/// escaped. The returned markup contains no unescaped input characters.
#[must_use]
pub fn echo_safe(input: &str) -> String {
    format!("<div>{}</div>", escape_markup(input))
}

/// Echoes `input` into the container without escaping. Any markup in the
/// input lands in the output byte-for-byte.
#[must_use]
pub fn echo_unsafe(input: &str) -> String {
    format!("<div>{input}</div>")
}
