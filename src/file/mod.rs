//! Class file access and byte-stream resolution.
//!
//! This module abstracts over where class bytes come from and how they are read. It provides
//! the raw-data layer underneath the [`crate::classfile`] reader: bounds-checked buffers,
//! a cursor parser, and the byte-stream providers that resolve a fully-qualified type name
//! to the bytes of its compiled class.
//!
//! # Architecture
//!
//! Two seams keep the data sources pluggable:
//!
//! - **[`crate::file::Backend`]** - a loaded chunk of class bytes (disk mapping or owned
//!   buffer), providing bounds-checked slicing
//! - **[`crate::file::ClassSource`]** - the byte-stream provider: resolves a fully-qualified
//!   type name to a [`Backend`]. This is the boundary the host environment implements when
//!   classes live somewhere unusual (archives, network, generated code)
//!
//! # Key Components
//!
//! ## Parsing Infrastructure
//! - [`crate::file::parser::Parser`] - Cursor-based big-endian parsing interface
//! - [`crate::file::io`] - Low-level bounds-checked primitive reads
//!
//! ## Backend Implementations
//! - [`crate::file::physical::Physical`] - Memory-mapped file backend for disk access
//! - [`crate::file::memory::Memory`] - In-memory buffer backend
//!
//! ## Provider Implementations
//! - [`crate::file::DirectorySource`] - Classpath-style lookup under one or more root
//!   directories
//! - [`crate::file::MemorySource`] - Name-to-bytes map, the in-process analogue of a
//!   loader-backed repository
//!
//! # Examples
//!
//! ## Resolving from a directory tree
//!
//! ```rust,no_run
//! use classorder::file::{ClassSource, DirectorySource};
//!
//! let source = DirectorySource::new(["target/classes"]);
//! let backend = source.open("com.example.Outer$Inner")?;
//! // target/classes/com/example/Outer$Inner.class
//! assert_eq!(&backend.data()[0..2], &[0xCA, 0xFE]);
//! # Ok::<(), classorder::Error>(())
//! ```
//!
//! ## Resolving from memory
//!
//! ```rust,no_run
//! use classorder::file::{ClassSource, MemorySource};
//!
//! let mut source = MemorySource::new();
//! source.insert("com.example.Foo", std::fs::read("Foo.class")?);
//! let backend = source.open("com.example.Foo")?;
//! println!("{} bytes", backend.len());
//! # Ok::<(), classorder::Error>(())
//! ```

pub mod io;
pub mod parser;

mod memory;
mod physical;

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use crate::{Error::ClassNotFound, Result};

pub use memory::Memory;
pub use physical::Physical;

/// Backend trait for class byte sources.
///
/// This trait abstracts over the storage of one class's bytes, allowing for both in-memory
/// and on-disk representations. All implementations must be thread-safe.
pub trait Backend: Send + Sync {
    /// Returns a slice of the data at the given offset and length.
    ///
    /// # Arguments
    ///
    /// * `offset` - The starting offset within the data.
    /// * `len` - The length of the slice in bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the requested range is out of bounds.
    fn data_slice(&self, offset: usize, len: usize) -> Result<&[u8]>;

    /// Returns the entire data buffer.
    fn data(&self) -> &[u8];

    /// Returns the total length of the data buffer.
    fn len(&self) -> usize;

    /// Returns `true` if the backend holds no data.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Byte-stream provider resolving fully-qualified type names to class bytes.
///
/// This is the external collaborator the line-number strategy consumes: given a name like
/// `com.example.Outer$Inner`, the provider locates the compiled class and returns its bytes.
/// Failure to locate the class is fatal ([`crate::Error::ClassNotFound`] or an I/O error),
/// never silently defaulted - a missing artifact indicates an environment problem, not
/// missing debug information.
///
/// Implementations must be thread-safe; providers are shared by reference across sort calls.
pub trait ClassSource: Send + Sync {
    /// Resolve `type_name` to the bytes of its compiled class.
    ///
    /// # Arguments
    /// * `type_name` - Fully-qualified binary name in dotted form (inner classes keep
    ///   their `$` separators)
    ///
    /// # Errors
    /// Returns [`crate::Error::ClassNotFound`] if no class with this name exists in the
    /// source, or [`crate::Error::FileError`] for underlying I/O failures.
    fn open(&self, type_name: &str) -> Result<Box<dyn Backend>>;
}

/// Classpath-style byte-stream provider over one or more root directories.
///
/// Mirrors how a class loader resolves a name against a directory classpath entry:
/// `com.example.Foo` becomes `<root>/com/example/Foo.class`, checked against each root in
/// order. Files are memory-mapped on open ([`Physical`]), so repeated sorts of large
/// classes do not copy the bytes.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    roots: Vec<PathBuf>,
}

impl DirectorySource {
    /// Create a provider searching the given roots in order.
    ///
    /// # Arguments
    /// * `roots` - Directories to resolve class files under, highest priority first
    pub fn new<I, P>(roots: I) -> DirectorySource
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        DirectorySource {
            roots: roots.into_iter().map(|p| p.as_ref().to_path_buf()).collect(),
        }
    }

    fn relative_path(type_name: &str) -> PathBuf {
        let mut path = PathBuf::from(type_name.replace('.', "/"));
        path.set_extension("class");
        path
    }
}

impl ClassSource for DirectorySource {
    fn open(&self, type_name: &str) -> Result<Box<dyn Backend>> {
        let relative = Self::relative_path(type_name);
        for root in &self.roots {
            let candidate = root.join(&relative);
            if candidate.is_file() {
                return Ok(Box::new(Physical::new(&candidate)?));
            }
        }

        Err(ClassNotFound(type_name.to_string()))
    }
}

/// In-memory byte-stream provider.
///
/// The in-process analogue of a loader-backed repository: a map from fully-qualified name
/// to class bytes. Used for embedded class images and throughout the test suite.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    classes: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    /// Create an empty provider.
    #[must_use]
    pub fn new() -> MemorySource {
        MemorySource::default()
    }

    /// Register the class bytes for `type_name`, replacing any previous entry.
    pub fn insert(&mut self, type_name: impl Into<String>, bytes: Vec<u8>) {
        self.classes.insert(type_name.into(), bytes);
    }
}

impl ClassSource for MemorySource {
    fn open(&self, type_name: &str) -> Result<Box<dyn Backend>> {
        match self.classes.get(type_name) {
            Some(bytes) => Ok(Box::new(Memory::new(bytes.clone())?)),
            None => Err(ClassNotFound(type_name.to_string())),
        }
    }
}
