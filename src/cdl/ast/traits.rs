//! Common interfaces for uniform node access
//!
//! [`Node`] is the contract every element variant implements: identity
//! (kind and optional member name), provenance (span into the source
//! buffer), and the two serialization strategies. Serialization is a pure
//! read; it never mutates the tree and is total over any well-formed tree.

use super::span::Span;

/// Common interface for all element tree nodes.
pub trait Node {
    /// The kind of node, e.g. "array" or "number".
    fn node_type(&self) -> &'static str;

    /// The member name if this node is a named member of an object, else
    /// the empty string.
    fn debug_name(&self) -> &str;

    /// The byte range this node occupies in the source, once the parser has
    /// recorded it.
    fn span(&self) -> Option<Span>;

    /// Canonical single-line text for this node and its descendants.
    fn to_json(&self) -> String;

    /// Pretty-printed text, starting at the given indent level.
    ///
    /// An independent strategy from [`Node::to_json`]: the two share child
    /// order but nothing else is guaranteed between them.
    fn to_formatted_json(&self, indent: usize) -> String;
}
