#![forbid(unsafe_code)]

//! Namespace declaration value checks.
//!
//! Canonical XML does not define a canonical form for documents that bind
//! a prefix to a relative URI reference. A namespace value is treated as
//! absolute when it is empty (an undeclaration) or has a non-empty scheme
//! before its first `:`. This is a syntactic shortcut, not RFC 3986
//! validation.

use sorteringen_core::{ns, Error, Result};
use sorteringen_xml::{axis, AttributeValue};

/// Whether a namespace declaration value counts as absolute.
pub fn namespace_is_absolute(value: &str) -> bool {
    value.is_empty() || value.find(':').is_some_and(|pos| pos > 0)
}

/// Whether a namespace declaration value counts as relative.
pub fn namespace_is_relative(value: &str) -> bool {
    !namespace_is_absolute(value)
}

/// [`namespace_is_absolute`] applied to a declaration node's value.
pub fn attr_namespace_is_absolute<T: AttributeValue + ?Sized>(attr: &T) -> bool {
    namespace_is_absolute(attr.value())
}

/// [`namespace_is_relative`] applied to a declaration node's value.
pub fn attr_namespace_is_relative<T: AttributeValue + ?Sized>(attr: &T) -> bool {
    namespace_is_relative(attr.value())
}

/// Fail if `attr` declares a namespace with a relative value.
///
/// `element` names the owning element for the error. Nodes that are not
/// `xmlns` or `xmlns:*` declarations always pass.
pub fn assert_not_relative_ns<T: AttributeValue + ?Sized>(element: &str, attr: &T) -> Result<()> {
    let name = attr.qualified_name();
    let declares = name == ns::XMLNS_PREFIX
        || name
            .strip_prefix(ns::XMLNS_PREFIX)
            .is_some_and(|rest| rest.starts_with(':'));

    if declares && attr_namespace_is_relative(attr) {
        log::debug!("rejecting relative namespace {name}=\"{}\" on <{element}>", attr.value());
        return Err(Error::RelativeNamespace {
            element: element.to_owned(),
            name: name.to_owned(),
            value: attr.value().to_owned(),
        });
    }
    Ok(())
}

/// Check every namespace declaration made on `node`.
pub fn check_for_relative_namespace(node: roxmltree::Node<'_, '_>) -> Result<()> {
    if !node.is_element() {
        return Ok(());
    }
    let element = axis::element_name(node);
    for decl in axis::namespace_decls(node) {
        assert_not_relative_ns(&element, &decl)?;
    }
    Ok(())
}

/// Check every element of `doc`; the first relative declaration fails.
pub fn check_document(doc: &roxmltree::Document<'_>) -> Result<()> {
    doc.descendants()
        .filter(|n| n.is_element())
        .try_for_each(check_for_relative_namespace)
}
