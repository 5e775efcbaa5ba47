//! Constant pool parsing and lookup.
//!
//! Every name the reader needs - the class's own name, method names, descriptors, attribute
//! names - lives in the constant pool at the front of the class file (JVMS 4.4). The reader
//! only ever *resolves* `Utf8` and `Class` entries; all other entry kinds are parsed just far
//! enough to skip their payload, because the pool is a heterogeneous sequence with no size
//! table and must be walked entry by entry to find where the method table starts.
//!
//! # Key Components
//!
//! - [`crate::classfile::constantpool::ConstantTag`] - The tag byte of each pool entry
//! - [`crate::classfile::constantpool::ConstantEntry`] - One parsed (or skipped) entry
//! - [`crate::classfile::constantpool::ConstantPool`] - The indexed pool with lookup queries
//!
//! # Pool Layout
//!
//! The pool is 1-indexed: `constant_pool_count` is one larger than the number of slots, and
//! index 0 is never valid. `Long` and `Double` entries occupy *two* slots; the slot after
//! them is unusable (JVMS 4.4.5). Both quirks are honored here - getting either wrong shifts
//! every later index and scrambles method names.

use strum::FromRepr;

use crate::{classfile::mutf8, file::parser::Parser, Result};

/// Tag byte identifying the kind of a constant pool entry (JVMS table 4.4-B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u8)]
pub enum ConstantTag {
    /// `CONSTANT_Utf8_info` - modified UTF-8 string
    Utf8 = 1,
    /// `CONSTANT_Integer_info`
    Integer = 3,
    /// `CONSTANT_Float_info`
    Float = 4,
    /// `CONSTANT_Long_info` - occupies two pool slots
    Long = 5,
    /// `CONSTANT_Double_info` - occupies two pool slots
    Double = 6,
    /// `CONSTANT_Class_info`
    Class = 7,
    /// `CONSTANT_String_info`
    String = 8,
    /// `CONSTANT_Fieldref_info`
    FieldRef = 9,
    /// `CONSTANT_Methodref_info`
    MethodRef = 10,
    /// `CONSTANT_InterfaceMethodref_info`
    InterfaceMethodRef = 11,
    /// `CONSTANT_NameAndType_info`
    NameAndType = 12,
    /// `CONSTANT_MethodHandle_info`
    MethodHandle = 15,
    /// `CONSTANT_MethodType_info`
    MethodType = 16,
    /// `CONSTANT_Dynamic_info`
    Dynamic = 17,
    /// `CONSTANT_InvokeDynamic_info`
    InvokeDynamic = 18,
    /// `CONSTANT_Module_info`
    Module = 19,
    /// `CONSTANT_Package_info`
    Package = 20,
}

impl ConstantTag {
    /// Payload size in bytes after the tag, for fixed-size entries.
    ///
    /// `Utf8` is the only variable-size entry and returns `None`.
    #[must_use]
    pub fn payload_size(self) -> Option<usize> {
        match self {
            ConstantTag::Utf8 => None,
            ConstantTag::Class
            | ConstantTag::String
            | ConstantTag::MethodType
            | ConstantTag::Module
            | ConstantTag::Package => Some(2),
            ConstantTag::MethodHandle => Some(3),
            ConstantTag::Integer
            | ConstantTag::Float
            | ConstantTag::FieldRef
            | ConstantTag::MethodRef
            | ConstantTag::InterfaceMethodRef
            | ConstantTag::NameAndType
            | ConstantTag::Dynamic
            | ConstantTag::InvokeDynamic => Some(4),
            ConstantTag::Long | ConstantTag::Double => Some(8),
        }
    }
}

/// One entry of the constant pool.
///
/// Only the entry kinds the reader resolves are materialized; everything else is recorded
/// as [`ConstantEntry::Other`] with its payload skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstantEntry {
    /// Decoded modified UTF-8 string
    Utf8(String),
    /// Class reference, pointing at the `Utf8` entry holding the internal name
    Class {
        /// Pool index of the class's internal name
        name_index: u16,
    },
    /// Entry kind the reader does not resolve; payload was skipped
    Other(ConstantTag),
    /// Unusable slot: index 0, or the slot following a `Long`/`Double` entry
    Reserved,
}

/// The parsed constant pool of one class file.
///
/// # Examples
///
/// ```rust,ignore
/// let pool = ConstantPool::parse(&mut parser)?;
/// let name = pool.utf8(method_name_index)?;
/// ```
#[derive(Debug, Clone)]
pub struct ConstantPool {
    entries: Vec<ConstantEntry>,
}

impl ConstantPool {
    /// Parse the constant pool at the parser's current position.
    ///
    /// Expects the cursor to sit on `constant_pool_count` (directly after the version
    /// fields) and leaves it on the `access_flags` field that follows the pool.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] for unknown tags or undecodable strings, and
    /// [`crate::Error::OutOfBounds`] if the pool runs past the end of the buffer.
    pub fn parse(parser: &mut Parser<'_>) -> Result<ConstantPool> {
        let count = parser.read_be::<u16>()?;
        let mut entries = Vec::with_capacity(count as usize);
        entries.push(ConstantEntry::Reserved);

        let mut index = 1;
        while index < count {
            let tag_byte = parser.read_be::<u8>()?;
            let Some(tag) = ConstantTag::from_repr(tag_byte) else {
                return Err(malformed_error!(
                    "Unknown constant pool tag {} at index {}",
                    tag_byte,
                    index
                ));
            };

            match tag {
                ConstantTag::Utf8 => {
                    let length = parser.read_be::<u16>()?;
                    let bytes = parser.read_bytes(length as usize)?;
                    entries.push(ConstantEntry::Utf8(mutf8::decode(bytes)?));
                }
                ConstantTag::Class => {
                    let name_index = parser.read_be::<u16>()?;
                    entries.push(ConstantEntry::Class { name_index });
                }
                _ => {
                    // payload_size is Some for every non-Utf8 tag
                    let size = tag.payload_size().unwrap_or(0);
                    parser.advance_by(size)?;
                    entries.push(ConstantEntry::Other(tag));
                }
            }

            // Long and Double take up two slots; the second one is dead (JVMS 4.4.5)
            if matches!(tag, ConstantTag::Long | ConstantTag::Double) {
                entries.push(ConstantEntry::Reserved);
                index += 2;
            } else {
                index += 1;
            }
        }

        Ok(ConstantPool { entries })
    }

    /// Number of pool slots, including index 0 and `Long`/`Double` shadow slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.entries.len()
    }

    /// Look up the entry at `index`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the index is outside the pool.
    pub fn get(&self, index: u16) -> Result<&ConstantEntry> {
        self.entries
            .get(index as usize)
            .ok_or_else(|| malformed_error!("Constant pool index {} out of range", index))
    }

    /// Resolve the `Utf8` entry at `index`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the index is invalid or the entry is not a
    /// `Utf8` constant.
    pub fn utf8(&self, index: u16) -> Result<&str> {
        match self.get(index)? {
            ConstantEntry::Utf8(value) => Ok(value),
            other => Err(malformed_error!(
                "Constant pool index {} is not Utf8 - {:?}",
                index,
                other
            )),
        }
    }

    /// Resolve the `Class` entry at `index` to its fully-qualified name in dotted form.
    ///
    /// The pool stores internal names (`com/example/Outer$Inner`); this converts the
    /// package separators to dots to match the descriptor model used by the sorter.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the index is invalid, the entry is not a
    /// `Class` constant, or its name index does not resolve to `Utf8`.
    pub fn class_name(&self, index: u16) -> Result<String> {
        match self.get(index)? {
            ConstantEntry::Class { name_index } => {
                Ok(self.utf8(*name_index)?.replace('/', "."))
            }
            other => Err(malformed_error!(
                "Constant pool index {} is not a Class - {:?}",
                index,
                other
            )),
        }
    }
}
