//! Method-to-line mapping built from one parse pass.
//!
//! This is the structured result the visitor-style traversal of the original design is
//! replaced with: a single parse produces a [`crate::classfile::linemap::LineMap`] from
//! method to first line number, and the sorting layer queries it with a caller-supplied
//! default. The map is ephemeral by design - it is rebuilt from the class bytes on every
//! sort pass and never cached, so its content is a pure function of the bytes.
//!
//! # Keying
//!
//! Entries are keyed by method name **and** descriptor. Keying by name alone would let
//! same-named members silently overwrite each other (compiler-generated bridge methods
//! share their target's name); the descriptor disambiguates every legal combination, since
//! a class file cannot contain two methods with identical name and descriptor.
//!
//! # Usage Examples
//!
//! ```rust,ignore
//! let map = LineMap::from_class(&bytes)?;
//! let line = map.first_line_or("toString", "()Ljava/lang/String;", 0);
//! ```

use std::collections::HashMap;

use crate::{classfile::ClassSummary, Result};

/// Mapping from (method name, descriptor) to the first line number of the method's code.
///
/// Methods without any line-number record - abstract, native, or compiled without debug
/// information - are absent from the map and resolve through the default-value queries.
#[derive(Debug, Clone, Default)]
pub struct LineMap {
    lines: HashMap<(String, String), u32>,
}

impl LineMap {
    /// Parse `data` as a class file and build the map in one pass.
    ///
    /// # Arguments
    /// * `data` - The raw bytes of one class file
    ///
    /// # Errors
    /// Returns the parse error of [`ClassSummary::from_bytes`] for unreadable input;
    /// missing debug information is not an error.
    pub fn from_class(data: &[u8]) -> Result<LineMap> {
        Ok(ClassSummary::from_bytes(data)?.line_map())
    }

    /// Record the first line for a method. Used by the reader while walking the table.
    pub(crate) fn insert(&mut self, name: &str, descriptor: &str, line: u32) {
        self.lines
            .insert((name.to_string(), descriptor.to_string()), line);
    }

    /// First line number of the method, if it has one.
    #[must_use]
    pub fn first_line(&self, name: &str, descriptor: &str) -> Option<u32> {
        self.lines
            .get(&(name.to_string(), descriptor.to_string()))
            .copied()
    }

    /// First line number of the method, or `default` when the method has no record.
    ///
    /// This is the single query the line-number strategy is built on: total for missing
    /// entries, erroring only at parse time.
    #[must_use]
    pub fn first_line_or(&self, name: &str, descriptor: &str, default: u32) -> u32 {
        self.first_line(name, descriptor).unwrap_or(default)
    }

    /// Number of methods with a recorded line.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no method has a recorded line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
