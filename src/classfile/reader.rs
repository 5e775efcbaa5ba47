//! Minimal class file reader for line-number extraction.
//!
//! This module parses exactly as much of the JVM class file format (JVMS chapter 4) as is
//! needed to enumerate a class's methods in physical table order and observe, per method,
//! the first line-number record of its instruction stream. Everything else - field bodies,
//! the instructions themselves, stack map tables, annotations - is skipped over by length.
//!
//! # Architecture
//!
//! The original design traversed the class with a callback-per-construct visitor; here the
//! traversal is one explicit parse pass ([`ClassSummary::from_bytes`]) that returns a
//! structured result. Only one attribute kind is consumed (`LineNumberTable`, nested inside
//! `Code`), so polymorphic dispatch buys nothing over a direct walk.
//!
//! # Parse Order
//!
//! 1. Magic (`0xCAFEBABE`) and minor/major version
//! 2. Constant pool ([`crate::classfile::constantpool::ConstantPool`])
//! 3. Class identity: access flags, this-class, super-class, interfaces
//! 4. Fields - skipped attribute by attribute
//! 5. Methods - for each entry, the attribute walk below
//! 6. Trailing class attributes are not read; nothing after the method table matters here
//!
//! Per method, the first `Code` attribute is entered and its nested attributes walked; the
//! first entry of the first non-empty `LineNumberTable` becomes the method's line. A method
//! without such a record (abstract, native, or compiled without debug information) simply
//! has no line - that is a legitimate state, not an error.
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use classorder::classfile::ClassSummary;
//!
//! let bytes = std::fs::read("Example.class")?;
//! let summary = ClassSummary::from_bytes(&bytes)?;
//!
//! println!("{} v{}.{}", summary.class_name, summary.major_version, summary.minor_version);
//! for method in &summary.methods {
//!     match method.first_line {
//!         Some(line) => println!("  {}{} at line {}", method.name, method.descriptor, line),
//!         None => println!("  {}{} (no debug info)", method.name, method.descriptor),
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{
    classfile::{
        constantpool::ConstantPool,
        method::{MethodAccessFlags, MethodRecord},
        LineMap,
    },
    file::parser::Parser,
    Result,
};

/// The class file magic number (JVMS 4.1).
pub const CLASS_MAGIC: u32 = 0xCAFE_BABE;

/// Parsed view of one class file: identity plus its method table.
///
/// Methods appear in the order their entries occur in the binary. That order is *not*
/// guaranteed to match the source order - recovering the source order from the recorded
/// line numbers is the whole point of the crate.
#[derive(Debug, Clone)]
pub struct ClassSummary {
    /// Fully-qualified name of the class in dotted form, e.g. `com.example.Outer$Inner`
    pub class_name: String,
    /// Major class file version (e.g. 52 for Java 8)
    pub major_version: u16,
    /// Minor class file version
    pub minor_version: u16,
    /// Method entries in physical table order
    pub methods: Vec<MethodRecord>,
}

impl ClassSummary {
    /// Parse a class file.
    ///
    /// # Arguments
    /// * `data` - The raw bytes of one class file
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] for empty input, [`crate::Error::NotSupported`] if
    /// the magic does not match, and [`crate::Error::Malformed`] or
    /// [`crate::Error::OutOfBounds`] for structurally broken files.
    pub fn from_bytes(data: &[u8]) -> Result<ClassSummary> {
        if data.is_empty() {
            return Err(crate::Error::Empty);
        }

        let mut parser = Parser::new(data);

        let magic = parser.read_be::<u32>()?;
        if magic != CLASS_MAGIC {
            return Err(crate::Error::NotSupported);
        }

        let minor_version = parser.read_be::<u16>()?;
        let major_version = parser.read_be::<u16>()?;

        let pool = ConstantPool::parse(&mut parser)?;

        parser.advance_by(2)?; // access_flags
        let this_class = parser.read_be::<u16>()?;
        let class_name = pool.class_name(this_class)?;
        parser.advance_by(2)?; // super_class

        let interfaces_count = parser.read_be::<u16>()?;
        parser.advance_by(interfaces_count as usize * 2)?;

        let fields_count = parser.read_be::<u16>()?;
        for _ in 0..fields_count {
            parser.advance_by(6)?; // access_flags, name_index, descriptor_index
            skip_attributes(&mut parser)?;
        }

        let methods_count = parser.read_be::<u16>()?;
        let mut methods = Vec::with_capacity(methods_count as usize);
        for _ in 0..methods_count {
            methods.push(parse_method(&mut parser, &pool)?);
        }

        Ok(ClassSummary {
            class_name,
            major_version,
            minor_version,
            methods,
        })
    }

    /// Build the method-to-line map from the parsed method table.
    #[must_use]
    pub fn line_map(&self) -> LineMap {
        let mut map = LineMap::default();
        for method in &self.methods {
            if let Some(line) = method.first_line {
                map.insert(&method.name, &method.descriptor, line);
            }
        }
        map
    }
}

/// Parse one `method_info` entry and extract its first line-number record.
fn parse_method(parser: &mut Parser<'_>, pool: &ConstantPool) -> Result<MethodRecord> {
    let access_flags = MethodAccessFlags::from_bits_truncate(parser.read_be::<u16>()?);
    let name = pool.utf8(parser.read_be::<u16>()?)?.to_string();
    let descriptor = pool.utf8(parser.read_be::<u16>()?)?.to_string();

    let mut first_line = None;
    let attributes_count = parser.read_be::<u16>()?;
    for _ in 0..attributes_count {
        let attr_name_index = parser.read_be::<u16>()?;
        let attr_length = parser.read_be::<u32>()? as usize;

        if first_line.is_none() && pool.utf8(attr_name_index)? == "Code" {
            first_line = parse_code_attribute(parser, pool, attr_length)?;
        } else {
            parser.advance_by(attr_length)?;
        }
    }

    Ok(MethodRecord {
        name,
        descriptor,
        access_flags,
        first_line,
    })
}

/// Walk a `Code` attribute (JVMS 4.7.3) and return the first line-number record, if any.
///
/// The instruction stream and exception table are skipped; only the nested attribute list
/// is examined, and of that only `LineNumberTable` entries (JVMS 4.7.12). The first entry
/// of the first non-empty table wins - tables may legally be split across multiple
/// attributes, and record order inside a table follows the order the compiler emitted.
fn parse_code_attribute(
    parser: &mut Parser<'_>,
    pool: &ConstantPool,
    attr_length: usize,
) -> Result<Option<u32>> {
    let start = parser.pos();

    parser.advance_by(4)?; // max_stack, max_locals
    let code_length = parser.read_be::<u32>()? as usize;
    parser.advance_by(code_length)?;

    let exception_table_length = parser.read_be::<u16>()?;
    parser.advance_by(exception_table_length as usize * 8)?;

    let mut first_line = None;
    let attributes_count = parser.read_be::<u16>()?;
    for _ in 0..attributes_count {
        let attr_name_index = parser.read_be::<u16>()?;
        let attr_length = parser.read_be::<u32>()? as usize;
        let attr_start = parser.pos();

        if first_line.is_none() && pool.utf8(attr_name_index)? == "LineNumberTable" {
            let entry_count = parser.read_be::<u16>()?;
            if entry_count > 0 {
                parser.advance_by(2)?; // start_pc of the first entry
                first_line = Some(u32::from(parser.read_be::<u16>()?));
            }
        }

        // Position past the attribute regardless of how much of it was consumed
        let consumed = parser.pos() - attr_start;
        let Some(remaining) = attr_length.checked_sub(consumed) else {
            return Err(malformed_error!(
                "Code attribute of length {} overran by nested attribute",
                attr_length
            ));
        };
        parser.advance_by(remaining)?;
    }

    let consumed = parser.pos() - start;
    if consumed != attr_length {
        return Err(malformed_error!(
            "Code attribute length mismatch - declared {}, walked {}",
            attr_length,
            consumed
        ));
    }

    Ok(first_line)
}

/// Skip an `attributes_count`-prefixed attribute list without interpreting it.
fn skip_attributes(parser: &mut Parser<'_>) -> Result<()> {
    let count = parser.read_be::<u16>()?;
    for _ in 0..count {
        parser.advance_by(2)?; // attribute_name_index
        let length = parser.read_be::<u32>()? as usize;
        parser.advance_by(length)?;
    }
    Ok(())
}
