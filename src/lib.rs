//! # cdl
//!
//! A parser for the cdl constraint description format: a JSON-like textual
//! description language used to embed structured configuration and
//! constraint data in layout descriptions.
//!
//! Parsing produces a tree of typed elements (objects, arrays, strings,
//! numbers, booleans/null). Every element remembers the exact byte span it
//! occupies in the source, for diagnostics and for recovering source text;
//! the source buffer itself is shared, never copied into the tree. Any
//! subtree re-serializes to canonical single-line text (`to_json`) or to an
//! indented form (`to_formatted_json`).
//!
//! ```ignore
//! let object = cdl::parse("{ width: 100, pts: [1, 2, 3] }")?;
//! assert_eq!(object.named_f64("width")?, 100.0);
//! assert_eq!(object.to_json(), "{ \"width\": 100, \"pts\": [1, 2, 3] }");
//! ```

pub mod cdl;

pub use cdl::{parse, ParseError};
