#![forbid(unsafe_code)]

//! Attribute value escaping for canonical start tags.
//!
//! `&` → `&amp;`, `<` → `&lt;`, `"` → `&quot;`, and the whitespace
//! characters TAB, LF, CR as character references so they survive
//! attribute-value normalization on re-parse.

/// Escape an attribute value.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            '\t' => out.push_str("&#x9;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            _ => out.push(ch),
        }
    }
    out
}
