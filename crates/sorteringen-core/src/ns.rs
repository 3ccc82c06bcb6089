#![forbid(unsafe_code)]

//! XML namespace constants used across the workspace.

/// Namespace URI of namespace declaration attributes (`xmlns`, `xmlns:p`).
///
/// An attribute node belongs to this namespace if and only if it is a
/// namespace declaration.
pub const XMLNS: &str = "http://www.w3.org/2000/xmlns/";

/// XML namespace, bound to the reserved `xml` prefix.
pub const XML: &str = "http://www.w3.org/XML/1998/namespace";

/// Local name of the default namespace declaration.
pub const XMLNS_PREFIX: &str = "xmlns";

/// The reserved `xml` prefix.
pub const XML_PREFIX: &str = "xml";
