//! Class file parsing: the binary reader behind the line-number strategy.
//!
//! This module owns the minimal JVM class file subset the crate understands. The entry
//! point is [`crate::classfile::ClassSummary::from_bytes`], which parses one class far
//! enough to enumerate its methods and their first line-number records, and
//! [`crate::classfile::LineMap`], the queryable result the sorting layer consumes.
//!
//! # Key Components
//!
//! - [`crate::classfile::ClassSummary`] - Parsed identity and method table of one class
//! - [`crate::classfile::LineMap`] - (name, descriptor) to first-line mapping with
//!   default-value queries
//! - [`crate::classfile::MethodRecord`] / [`crate::classfile::MethodAccessFlags`] - One
//!   method entry in physical order
//! - [`crate::classfile::constantpool::ConstantPool`] - Constant pool parsing and lookup
//!
//! # Integration
//!
//! [`crate::sorter::ClassFileStrategy`] drives this module: it resolves class bytes via a
//! [`crate::file::ClassSource`], parses a fresh [`LineMap`] per lookup, and feeds the
//! resulting line numbers to the member comparators. The reader is equally usable on its
//! own for tooling that wants the raw table view.

pub mod constantpool;
mod linemap;
mod method;
mod mutf8;
mod reader;

pub use linemap::LineMap;
pub use method::{MethodAccessFlags, MethodRecord};
pub use reader::{ClassSummary, CLASS_MAGIC};
