#![forbid(unsafe_code)]

//! Canonical ordering of an element's namespace and attribute nodes.
//!
//! Canonical XML puts namespace declarations before attributes. Namespace
//! declarations are ordered by local name, with the default declaration
//! (`xmlns`) keyed as the empty string so it comes first. Attributes are
//! ordered by namespace URI, then local name, where an attribute without a
//! namespace URI sorts before any attribute with one. Attributes without a
//! namespace URI are ordered among themselves by qualified name.
//!
//! All string comparisons are `str` ordering, which on UTF-8 is code point
//! order. Locale collation is never involved.

use sorteringen_core::ns;
use sorteringen_xml::AttributeNode;
use std::cmp::Ordering;

/// Compare two attribute or namespace declaration nodes in canonical order.
///
/// Returns `Less` if `a` is emitted before `b`. Two namespace declarations
/// with the same prefix compare `Equal`; use a stable sort (such as
/// [`sort_attributes`]) to keep their input order.
///
/// Nodes must be well-formed per [`AttributeNode`]. A missing local name is
/// not checked and sorts as `""`.
pub fn compare_attributes<A, B>(a: &A, b: &B) -> Ordering
where
    A: AttributeNode + ?Sized,
    B: AttributeNode + ?Sized,
{
    let ns_a = a.namespace_uri();
    let ns_b = b.namespace_uri();

    match (a.is_namespace_decl(), b.is_namespace_decl()) {
        (true, true) => namespace_key(a).cmp(namespace_key(b)),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => match (ns_a, ns_b) {
            (None, None) => a.qualified_name().cmp(b.qualified_name()),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(uri_a), Some(uri_b)) => uri_a
                .cmp(uri_b)
                .then_with(|| local_key(a).cmp(local_key(b))),
        },
    }
}

/// Stable sort of `nodes` into canonical order.
pub fn sort_attributes<T: AttributeNode>(nodes: &mut [T]) {
    nodes.sort_by(|a, b| compare_attributes(a, b));
    log::trace!(
        "sorted axis: [{}]",
        nodes
            .iter()
            .map(|n| n.qualified_name())
            .collect::<Vec<_>>()
            .join(", ")
    );
}

/// Whether `nodes` is already in canonical order.
pub fn is_sorted<T: AttributeNode>(nodes: &[T]) -> bool {
    nodes
        .windows(2)
        .all(|w| compare_attributes(&w[0], &w[1]) != Ordering::Greater)
}

/// A node wrapped so that `Ord` follows canonical attribute order.
///
/// Useful as a `BTreeSet`/`BTreeMap` key or with `sort_by_key`. Equality
/// is equivalence under the ordering, not field equality: two declarations
/// of the same prefix are equal keys.
#[derive(Debug)]
pub struct AttrCompare<'a, T: ?Sized>(pub &'a T);

impl<T: ?Sized> Clone for AttrCompare<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for AttrCompare<'_, T> {}

impl<T: AttributeNode + ?Sized> PartialEq for AttrCompare<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: AttributeNode + ?Sized> Eq for AttrCompare<'_, T> {}

impl<T: AttributeNode + ?Sized> PartialOrd for AttrCompare<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: AttributeNode + ?Sized> Ord for AttrCompare<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_attributes(self.0, other.0)
    }
}

/// Sort key of a namespace declaration: the prefix, `""` for the default.
fn namespace_key<T: AttributeNode + ?Sized>(node: &T) -> &str {
    match node.local_name() {
        Some(ns::XMLNS_PREFIX) | None => "",
        Some(prefix) => prefix,
    }
}

fn local_key<T: AttributeNode + ?Sized>(node: &T) -> &str {
    node.local_name().unwrap_or("")
}
