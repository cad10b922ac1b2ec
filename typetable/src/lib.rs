//! An in-memory table whose columns are identified by their value types.
//!
//! The `Schema` derive turns a tuple struct into a row type. Each field type is a column, and a
//! column is read or written by naming its type: `row.get::<char>()`. Because the type is the
//! key, the column types of a schema must be distinct. A [`Table`] stores rows of one schema and
//! identifies each by an [`Index`] that is handed out on insertion and never reused.
//!
//! # Example
//!
//! ```
//! use typetable::{Schema, Table};
//!
//! #[derive(Debug, Schema)]
//! struct Sample(i32, char, String);
//!
//! let mut table = Table::<Sample>::new();
//! assert_eq!(table.headers(), ["i32", "char", "String"]);
//!
//! let a = table.insert_with((1, '2', String::from("3")));
//! let b = table.insert_with((4, '5', String::from("6")));
//! assert_eq!((a, b), (0, 1));
//!
//! assert!(table.update(b, 'x'));
//! assert_eq!(table.select::<char>(b), Some(&'x'));
//!
//! assert!(table.remove(a));
//! assert_eq!(table.select::<i32>(a), None);
//! assert_eq!(table.insert(), 2);
//! ```
//!
//! # Build-time checks
//!
//! Mistakes in the choice of column types are compile errors rather than run-time failures.
//! The derive itself rejects a repeated column type, a struct with named fields and a struct
//! without columns (see `tests/ui`). The remaining checks are trait bounds.
//!
//! Every column type must be printable:
//!
//! ```compile_fail,E0277
//! use typetable::Schema;
//!
//! #[derive(Default)]
//! struct Opaque(u8);
//!
//! #[derive(Schema)]
//! struct Sample(i32, Opaque);
//! ```
//!
//! Every inserted value must have a column of its type:
//!
//! ```compile_fail,E0277
//! use typetable::{Schema, Table};
//!
//! #[derive(Debug, Schema)]
//! struct Sample(i32, char, String);
//!
//! let mut table = Table::<Sample>::new();
//! table.insert_with((1i32, 2.5f64));
//! ```
//!
//! and no two inserted values may share a type:
//!
//! ```compile_fail,E0080
//! use typetable::{Schema, Table};
//!
//! #[derive(Debug, Schema)]
//! struct Sample(i32, char, String);
//!
//! let mut table = Table::<Sample>::new();
//! table.insert_with((1i32, 'a', 2i32));
//! ```
//!
//! Projections may repeat and reorder columns, but only columns of the schema:
//!
//! ```compile_fail,E0277
//! use typetable::{Schema, Table};
//!
//! #[derive(Debug, Schema)]
//! struct Sample(i32, char, String);
//!
//! let table = Table::<Sample>::new();
//! table.project::<(i32, u8)>(|_, _| {});
//! ```
//!
//! # Notes
//!
//!  - Column types must be `'static + Debug + Default`. A fresh row holds the default of each.
//!  - Rows live in a vector sorted by index. Point reads and updates are `O(log n)`; removal
//!    shifts the rows behind it and is `O(n)`.
//!  - There is no locking. A table shared across threads needs an outer lock.
//!  - Headers are display names derived from [`std::any::type_name`] and can be overridden with
//!    `#[schema(header = "..")]` on a field. They are diagnostics, not identifiers.
//!  - Events are emitted through `tracing` at `trace` and `debug` level; no subscriber is
//!    installed by this crate.
extern crate self as typetable;

pub use typetable_derive::Schema;

mod assign;
mod error;
pub mod names;
mod projection;
mod schema;
mod table;

pub use assign::Assign;
pub use error::{Error, Result};
pub use projection::{Cell, Projection, Visitor};
#[doc(hidden)]
pub use schema::assert_column;
pub use schema::{Field, Schema};
pub use table::{Index, Table};
