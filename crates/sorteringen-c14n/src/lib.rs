#![forbid(unsafe_code)]

//! Canonical XML attribute ordering.
//!
//! - [`order`]: the comparator that puts an element's namespace declarations
//!   and attributes in Canonical XML order
//! - [`helper`]: absolute/relative classification of namespace values and
//!   rejection of relative namespace declarations
//! - [`render`]: canonical start tags from a sorted axis

pub mod escape;
pub mod helper;
pub mod order;
pub mod render;

pub use helper::{
    assert_not_relative_ns, attr_namespace_is_absolute, attr_namespace_is_relative,
    check_document, check_for_relative_namespace, namespace_is_absolute, namespace_is_relative,
};
pub use order::{compare_attributes, is_sorted, sort_attributes, AttrCompare};

use sorteringen_core::Error;
use sorteringen_xml::{axis, AttrNode};

/// The attribute axis of `node` in canonical order.
///
/// Namespace declarations are checked for relative values first.
pub fn sorted_axis(node: roxmltree::Node<'_, '_>) -> Result<Vec<AttrNode>, Error> {
    check_for_relative_namespace(node)?;
    let mut nodes = axis::attribute_axis(node);
    sort_attributes(&mut nodes);
    Ok(nodes)
}

/// The canonical start tag of `node`: its name and sorted attribute axis.
pub fn canonical_start_tag(node: roxmltree::Node<'_, '_>) -> Result<String, Error> {
    let nodes = sorted_axis(node)?;
    Ok(render::render_start_tag(&axis::element_name(node), &nodes))
}
