//! Element variants
//!
//! One file per node kind. The containers (array, object) share the
//! [`Container`](super::container::Container) storage; the leaves (string,
//! number, literal) carry only their value plus the shared node metadata.

pub mod array;
pub mod literal;
pub mod number;
pub mod object;
pub mod string;

pub use array::Array;
pub use literal::{Literal, LiteralKind};
pub use number::Number;
pub use object::Object;
pub use string::Str;
