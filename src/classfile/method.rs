//! Parsed method entries and their access flags.
//!
//! One [`crate::classfile::method::MethodRecord`] is produced per `method_info` structure,
//! in the order the entries physically appear in the class file. That physical order is not
//! the source order - compilers are free to reorder the table - which is exactly why the
//! first line number of each method's code is carried along as the sort key.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// Method access and property flags (JVMS table 4.6-A)
    pub struct MethodAccessFlags: u16 {
        /// Declared public
        const PUBLIC = 0x0001;
        /// Declared private
        const PRIVATE = 0x0002;
        /// Declared protected
        const PROTECTED = 0x0004;
        /// Declared static
        const STATIC = 0x0008;
        /// Declared final
        const FINAL = 0x0010;
        /// Declared synchronized
        const SYNCHRONIZED = 0x0020;
        /// Bridge method generated by the compiler
        const BRIDGE = 0x0040;
        /// Declared with a variable number of arguments
        const VARARGS = 0x0080;
        /// Declared native; no Code attribute
        const NATIVE = 0x0100;
        /// Declared abstract; no Code attribute
        const ABSTRACT = 0x0400;
        /// Declared strictfp
        const STRICT = 0x0800;
        /// Not present in source code
        const SYNTHETIC = 0x1000;
    }
}

impl MethodAccessFlags {
    /// Whether the method can carry a `Code` attribute at all.
    ///
    /// Abstract and native methods have no body, hence no instruction stream and no
    /// line-number records; they resolve through the caller-supplied default.
    #[must_use]
    pub fn has_code(&self) -> bool {
        !self.intersects(MethodAccessFlags::ABSTRACT | MethodAccessFlags::NATIVE)
    }
}

/// One method entry of a parsed class, in physical table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRecord {
    /// Method name (`<init>` and `<clinit>` for constructors and static initializers)
    pub name: String,
    /// JVM type descriptor, e.g. `(ILjava/lang/String;)V`
    pub descriptor: String,
    /// Access and property flags
    pub access_flags: MethodAccessFlags,
    /// First line-number record of the method's instruction stream, if any was recorded
    pub first_line: Option<u32>,
}
