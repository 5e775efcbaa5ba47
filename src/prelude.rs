//! # classorder Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the classorder library. Import this module to get quick access to the essential
//! types for member-order recovery.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all classorder operations
pub use crate::Error;

/// The result type used throughout classorder
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// The member-sorting façade
pub use crate::sorter::MemberSorter;

/// The pluggable line-number contract and its reference implementation
pub use crate::sorter::{ClassFileStrategy, LineNumberStrategy};

// ================================================================================================
// Class File Reading
// ================================================================================================

/// Parsed class identity and method table
pub use crate::classfile::{ClassSummary, LineMap, MethodAccessFlags, MethodRecord};

/// Low-level file parsing utilities
pub use crate::Parser;

// ================================================================================================
// Member Descriptors and Reflection Boundary
// ================================================================================================

/// Member handles and the reflection-facility contract
pub use crate::reflect::{
    FixtureReflector, MethodDescriptor, Reflector, TypeDescriptor, TypeFixture,
};

// ================================================================================================
// Byte-Stream Providers
// ================================================================================================

/// Class byte resolution backends and providers
pub use crate::file::{Backend, ClassSource, DirectorySource, MemorySource};
