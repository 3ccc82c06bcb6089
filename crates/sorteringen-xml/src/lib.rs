#![forbid(unsafe_code)]

//! Read-only attribute node abstraction for the sorteringen crates.
//!
//! The ordering code never touches a DOM directly. It sees attribute and
//! namespace declaration nodes through the [`AttributeNode`] trait, and this
//! crate supplies [`AttrNode`] plus a bridge that builds them from a
//! `roxmltree` element.

pub mod attr;
pub mod axis;
pub mod document;

pub use attr::{AttrNode, AttributeNode, AttributeValue};
pub use axis::{attribute_axis, attributes, element_name, namespace_decls};
pub use document::XmlDocument;

/// Return roxmltree parsing options that allow DTD.
///
/// roxmltree does not expand external entities, so allowing a DTD only
/// enables the internal subset.
pub fn parsing_options() -> roxmltree::ParsingOptions {
    roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    }
}
