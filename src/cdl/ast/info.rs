//! Shared node metadata
//!
//! Every element variant embeds a [`NodeInfo`]: a non-owning view of the
//! source buffer, the span the element occupies, the optional member name
//! (set when the element is a named member of an object), and an
//! informational record of which container the element was appended to.
//!
//! The buffer is held as `Arc<str>`: it is allocated once by the parse entry
//! point and sliced by span, never copied into the tree. A completed tree is
//! therefore `Send + Sync` and safe for concurrent readers.

use super::container::ContainerKind;
use super::span::Span;
use std::fmt;
use std::sync::Arc;

/// Shared read-only handle to the source text a tree was parsed from.
pub type SourceBuffer = Arc<str>;

/// Identifies the container an element belongs to.
///
/// This is diagnostic information only: it names the owning container kind
/// and the element's index within it. It is never used to reach back into
/// the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerRef {
    pub kind: ContainerKind,
    pub index: usize,
}

impl fmt::Display for OwnerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.kind, self.index)
    }
}

/// Positional metadata shared by every element variant.
#[derive(Debug, Clone)]
pub struct NodeInfo {
    buffer: SourceBuffer,
    span: Option<Span>,
    name: Option<String>,
    owner: Option<OwnerRef>,
}

impl NodeInfo {
    pub fn new(buffer: SourceBuffer) -> Self {
        Self {
            buffer,
            span: None,
            name: None,
            owner: None,
        }
    }

    pub fn buffer(&self) -> &SourceBuffer {
        &self.buffer
    }

    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// Record the byte range this element occupies in the source buffer.
    pub fn set_span(&mut self, span: Span) {
        self.span = Some(span);
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Display label: the member name if present, else empty.
    pub fn debug_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn owner(&self) -> Option<OwnerRef> {
        self.owner
    }

    pub(crate) fn set_owner(&mut self, owner: OwnerRef) {
        self.owner = Some(owner);
    }

    /// The source text covered by this element's span, or empty if the span
    /// is unset.
    pub fn content(&self) -> &str {
        match self.span {
            Some(span) => self.buffer.get(span.range()).unwrap_or(""),
            None => "",
        }
    }
}

// Spans and names are what identify a node in tests and comparisons; the
// buffer handle and owner record are incidental.
impl PartialEq for NodeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.span == other.span && self.name == other.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(text: &str) -> SourceBuffer {
        Arc::from(text)
    }

    #[test]
    fn test_new_info_is_unset() {
        let info = NodeInfo::new(buffer("{ a: 1 }"));
        assert_eq!(info.span(), None);
        assert_eq!(info.name(), None);
        assert_eq!(info.debug_name(), "");
        assert_eq!(info.content(), "");
    }

    #[test]
    fn test_content_slices_buffer() {
        let mut info = NodeInfo::new(buffer("{ width: 100 }"));
        info.set_span(Span::new(2, 7).unwrap());
        assert_eq!(info.content(), "width");
    }

    #[test]
    fn test_debug_name_uses_member_name() {
        let mut info = NodeInfo::new(buffer(""));
        info.set_name("points");
        assert_eq!(info.debug_name(), "points");
        assert_eq!(info.name(), Some("points"));
    }

    #[test]
    fn test_content_out_of_bounds_is_empty() {
        let mut info = NodeInfo::new(buffer("ab"));
        info.set_span(Span::new(1, 10).unwrap());
        assert_eq!(info.content(), "");
    }

    #[test]
    fn test_owner_display() {
        let owner = OwnerRef {
            kind: ContainerKind::Array,
            index: 3,
        };
        assert_eq!(format!("{}", owner), "array[3]");
    }
}
