#![forbid(unsafe_code)]

//! Build an element's attribute axis from a `roxmltree` node.
//!
//! roxmltree keeps namespace declarations out of `attributes()` and only
//! exposes the in-scope namespaces of each element. The declarations made
//! on an element are recovered by diffing its in-scope namespaces against
//! those of its parent element.

use crate::attr::AttrNode;
use sorteringen_core::ns;

/// The namespace declarations made on `node`, in document order.
///
/// The `xml` prefix is never reported. If the element drops a default
/// namespace that its parent had, an `xmlns=""` declaration is reported.
/// Returns nothing for non-element nodes.
pub fn namespace_decls(node: roxmltree::Node<'_, '_>) -> Vec<AttrNode> {
    if !node.is_element() {
        return Vec::new();
    }
    let parent = node.parent().filter(|p| p.is_element());

    let mut decls = Vec::new();

    let own_default = default_namespace(node);
    let parent_default = parent.and_then(default_namespace);
    if own_default != parent_default {
        decls.push(AttrNode::namespace_decl(None, own_default.unwrap_or("")));
    }

    for namespace in node.namespaces() {
        let Some(prefix) = namespace.name() else {
            continue;
        };
        if prefix == ns::XML_PREFIX {
            continue;
        }
        let inherited = parent.is_some_and(|p| {
            p.namespaces()
                .any(|pns| pns.name() == Some(prefix) && pns.uri() == namespace.uri())
        });
        if !inherited {
            decls.push(AttrNode::namespace_decl(Some(prefix), namespace.uri()));
        }
    }
    decls
}

/// The ordinary (non-declaration) attributes of `node`, in document order.
///
/// Qualified names are read from the source text, so the prefix is the one
/// the document wrote.
pub fn attributes(node: roxmltree::Node<'_, '_>) -> Vec<AttrNode> {
    let input = node.document().input_text();
    node.attributes()
        .map(|attr| match attr.namespace() {
            None => AttrNode::unqualified(attr.name(), attr.value()),
            Some(uri) => {
                let prefix = input
                    .get(attr.range_qname())
                    .and_then(|qname| written_prefix(qname, attr.name()))
                    .or_else(|| attribute_prefix(node, uri));
                AttrNode::qualified(uri, prefix, attr.name(), attr.value())
            }
        })
        .collect()
}

/// Namespace declarations followed by attributes, both in document order.
pub fn attribute_axis(node: roxmltree::Node<'_, '_>) -> Vec<AttrNode> {
    let mut axis = namespace_decls(node);
    axis.extend(attributes(node));
    log::debug!(
        "collected {} attribute node(s) on <{}>",
        axis.len(),
        node.tag_name().name()
    );
    axis
}

/// The qualified name of an element, as written in the start tag.
///
/// Falls back to the in-scope bindings when the source text is unavailable
/// (elements expanded from an entity): the default namespace wins when it
/// matches, otherwise the first prefix bound to the element's namespace.
pub fn element_name(node: roxmltree::Node<'_, '_>) -> String {
    let tag = node.tag_name();
    let local = tag.name();
    let Some(uri) = tag.namespace() else {
        return local.to_owned();
    };
    if let Some(qname) = start_tag_qname(node) {
        if let Some(prefix) = written_prefix(qname, local) {
            return format!("{prefix}:{local}");
        }
        if qname == local {
            return local.to_owned();
        }
    }
    if default_namespace(node) == Some(uri) {
        return local.to_owned();
    }
    match attribute_prefix(node, uri) {
        Some(prefix) => format!("{prefix}:{local}"),
        None => local.to_owned(),
    }
}

/// The name following `<` in the source text of an element.
fn start_tag_qname<'a>(node: roxmltree::Node<'a, '_>) -> Option<&'a str> {
    let text = node.document().input_text().get(node.range())?;
    let rest = text.strip_prefix('<')?;
    let end = rest
        .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// The prefix of `qname` if it is `prefix:local`.
fn written_prefix<'a>(qname: &'a str, local: &str) -> Option<&'a str> {
    let (prefix, rest) = qname.split_once(':')?;
    (rest == local && !prefix.is_empty()).then_some(prefix)
}

/// The in-scope default namespace, `None` when absent or undeclared.
fn default_namespace<'a>(node: roxmltree::Node<'a, '_>) -> Option<&'a str> {
    node.namespaces()
        .find(|n| n.name().is_none())
        .map(|n| n.uri())
        .filter(|uri| !uri.is_empty())
}

/// The prefix bound to `uri` for use on an attribute.
///
/// Attributes never take the default namespace, so only prefixed bindings
/// are considered.
fn attribute_prefix<'a>(node: roxmltree::Node<'a, '_>, uri: &str) -> Option<&'a str> {
    if uri == ns::XML {
        return Some(ns::XML_PREFIX);
    }
    node.namespaces()
        .find(|n| n.name().is_some() && n.uri() == uri)
        .and_then(|n| n.name())
}
