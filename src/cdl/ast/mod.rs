//! The element tree
//!
//! A parsed document is a tree of typed nodes: objects and arrays own their
//! children exclusively (a strict tree, no sharing, no cycles), leaves
//! carry scalar values. Every node records the byte span it occupies in the
//! original source buffer, which is held as a shared read-only handle and
//! sliced on demand, never copied.
//!
//! Construction happens single-threaded during parsing via per-variant
//! `allocate` factories and append-only container pushes. A completed tree
//! is read-only and safe to share across threads.

pub mod container;
pub mod element;
pub mod elements;
pub mod error;
pub mod info;
mod json;
pub mod span;
pub mod traits;

pub use container::{Container, ContainerKind};
pub use element::Element;
pub use elements::{Array, Literal, LiteralKind, Number, Object, Str};
pub use error::TreeError;
pub use info::{NodeInfo, OwnerRef, SourceBuffer};
pub use span::{Position, SourceMap, Span};
pub use traits::Node;
