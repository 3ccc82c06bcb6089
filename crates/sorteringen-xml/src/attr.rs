#![forbid(unsafe_code)]

//! Attribute and namespace declaration nodes.

use sorteringen_core::ns;

/// Read access to the three names that decide canonical attribute order.
///
/// Implementors must follow the DOM conventions for `Attr` nodes:
/// - a namespace declaration has namespace URI [`ns::XMLNS`] and a local
///   name (`"xmlns"` for the default declaration, the prefix otherwise);
/// - a namespace-qualified attribute has a local name;
/// - an attribute without a namespace URI is ordered by its qualified name.
///
/// These are preconditions of the ordering, not checked at runtime.
pub trait AttributeNode {
    /// The namespace URI the node belongs to, `None` for no namespace.
    fn namespace_uri(&self) -> Option<&str>;

    /// The unprefixed name.
    fn local_name(&self) -> Option<&str>;

    /// The full name including any prefix.
    fn qualified_name(&self) -> &str;

    /// Whether this node declares a namespace (`xmlns` or `xmlns:p`).
    fn is_namespace_decl(&self) -> bool {
        self.namespace_uri() == Some(ns::XMLNS)
    }
}

/// An [`AttributeNode`] that also exposes its string value.
pub trait AttributeValue: AttributeNode {
    fn value(&self) -> &str;
}

impl<T: AttributeNode + ?Sized> AttributeNode for &T {
    fn namespace_uri(&self) -> Option<&str> {
        (**self).namespace_uri()
    }

    fn local_name(&self) -> Option<&str> {
        (**self).local_name()
    }

    fn qualified_name(&self) -> &str {
        (**self).qualified_name()
    }
}

impl<T: AttributeValue + ?Sized> AttributeValue for &T {
    fn value(&self) -> &str {
        (**self).value()
    }
}

/// An owned attribute or namespace declaration node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrNode {
    /// Namespace URI, `None` for no namespace.
    pub namespace_uri: Option<String>,
    /// Local name.
    pub local_name: Option<String>,
    /// Qualified name (`prefix:local` or just `local`).
    pub qualified_name: String,
    /// Attribute value, or the URI for a namespace declaration.
    pub value: String,
}

impl AttrNode {
    /// Build a node from its raw DOM fields.
    pub fn new(
        namespace_uri: Option<&str>,
        local_name: Option<&str>,
        qualified_name: &str,
        value: &str,
    ) -> Self {
        Self {
            namespace_uri: namespace_uri.map(str::to_owned),
            local_name: local_name.map(str::to_owned),
            qualified_name: qualified_name.to_owned(),
            value: value.to_owned(),
        }
    }

    /// A namespace declaration. `None` declares the default namespace.
    pub fn namespace_decl(prefix: Option<&str>, uri: &str) -> Self {
        match prefix {
            None => Self::new(Some(ns::XMLNS), Some(ns::XMLNS_PREFIX), ns::XMLNS_PREFIX, uri),
            Some(prefix) => Self::new(
                Some(ns::XMLNS),
                Some(prefix),
                &format!("{}:{prefix}", ns::XMLNS_PREFIX),
                uri,
            ),
        }
    }

    /// An attribute in no namespace.
    pub fn unqualified(name: &str, value: &str) -> Self {
        Self::new(None, Some(name), name, value)
    }

    /// An attribute in namespace `uri`, written with `prefix` if given.
    pub fn qualified(uri: &str, prefix: Option<&str>, local_name: &str, value: &str) -> Self {
        let qname = match prefix {
            Some(p) => format!("{p}:{local_name}"),
            None => local_name.to_owned(),
        };
        Self::new(Some(uri), Some(local_name), &qname, value)
    }

    /// The prefix part of the qualified name, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.qualified_name.split_once(':').map(|(p, _)| p)
    }
}

impl AttributeNode for AttrNode {
    fn namespace_uri(&self) -> Option<&str> {
        self.namespace_uri.as_deref()
    }

    fn local_name(&self) -> Option<&str> {
        self.local_name.as_deref()
    }

    fn qualified_name(&self) -> &str {
        &self.qualified_name
    }
}

impl AttributeValue for AttrNode {
    fn value(&self) -> &str {
        &self.value
    }
}
