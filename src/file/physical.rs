//! Physical file backend for memory-mapped I/O.
//!
//! This module provides the [`crate::file::physical::Physical`] backend that implements the
//! [`crate::file::Backend`] trait for accessing class files from disk using memory-mapped
//! I/O. The mapping gives bounds-checked random access without reading the whole file into
//! an owned buffer first, which suits the reader's skip-heavy access pattern (fields and
//! instruction streams are skipped, only small attribute headers are touched).
//!
//! # Usage Examples
//!
//! ```rust,ignore
//! use classorder::file::{Backend, Physical};
//! use std::path::Path;
//!
//! let physical = Physical::new(Path::new("Example.class"))?;
//! let magic = physical.data_slice(0, 4)?;
//! assert_eq!(magic, &[0xCA, 0xFE, 0xBA, 0xBE]);
//! # Ok::<(), classorder::Error>(())
//! ```

use super::Backend;
use crate::{Error::OutOfBounds, Result};

use memmap2::Mmap;
use std::{fs, path::Path};

/// A file backend that uses memory-mapped I/O for access to class files on disk.
///
/// All access operations include bounds checking to ensure memory safety. The mapping is
/// read-only; this crate never modifies class files.
#[derive(Debug)]
pub struct Physical {
    data: Mmap,
}

impl Physical {
    /// Create a new memory-mapped backend for the given file.
    ///
    /// # Arguments
    /// * `file` - Path of the file to map
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened or mapped, and
    /// [`crate::Error::Empty`] if the file has no content.
    pub fn new(file: &Path) -> Result<Physical> {
        let file = fs::File::open(file)?;

        // SAFETY: the mapping is read-only and lives as long as the backend owning it.
        let data = unsafe { Mmap::map(&file)? };
        if data.is_empty() {
            return Err(crate::Error::Empty);
        }

        Ok(Physical { data })
    }
}

impl Backend for Physical {
    fn data_slice(&self, offset: usize, len: usize) -> Result<&[u8]> {
        offset
            .checked_add(len)
            .and_then(|end| self.data.get(offset..end))
            .ok_or(OutOfBounds)
    }

    fn data(&self) -> &[u8] {
        &self.data
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
