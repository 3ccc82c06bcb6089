#![forbid(unsafe_code)]

//! Render sorted attribute axes as canonical start tags.
//!
//! The renderer writes nodes in the order it is given. Sort first with
//! [`crate::order::sort_attributes`].

use crate::escape;
use sorteringen_xml::AttributeValue;

/// Render one node as ` qname="value"`.
pub fn render_attr<T: AttributeValue + ?Sized>(attr: &T) -> String {
    format!(
        " {}=\"{}\"",
        attr.qualified_name(),
        escape::escape_attr(attr.value())
    )
}

/// Render `<name attrs...>`.
pub fn render_start_tag<T: AttributeValue>(name: &str, attrs: &[T]) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push('<');
    out.push_str(name);
    for attr in attrs {
        out.push_str(&render_attr(attr));
    }
    out.push('>');
    out
}
