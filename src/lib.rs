// Copyright 2025 classorder contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(dead_code)]

//! # classorder
//!
//! Recovers the *source-declaration order* of a class's members from JVM class files.
//! Reflection-style facilities return methods and nested classes in an unspecified order;
//! the order the programmer actually wrote survives only in the debug metadata the compiler
//! embeds in the bytecode. `classorder` parses the `LineNumberTable` records of each
//! method's `Code` attribute and uses the first recorded line as a sort key, handing back
//! member lists in the order they appear in the source file.
//!
//! Classes must have been compiled with line-number debug information (`javac -g` or the
//! default `-g:lines`); methods without a body (abstract, native) have no line records and
//! sort through a documented default instead.
//!
//! ## Features
//!
//! - **Minimal class file reader** - Parses exactly the subset needed: constant pool,
//!   method table, and per-method first line-number record
//! - **Pluggable strategies** - Swap the line-number source at runtime, for testing or
//!   richer metadata backends
//! - **Pluggable byte sources** - Resolve class bytes from classpath-style directories
//!   (memory-mapped) or in-memory maps
//! - **Stateless by design** - No caching; every sort reflects the bytes of the moment
//! - **Memory safe** - Bounds-checked parsing with comprehensive error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use classorder::prelude::*;
//!
//! // Resolve class bytes the way a directory classpath entry would
//! let strategy = ClassFileStrategy::new(DirectorySource::new(["target/classes"]));
//!
//! // The host supplies the (unordered) member lists
//! let mut reflector = FixtureReflector::new();
//! reflector.register(
//!     TypeFixture::new("com.example.Foo")
//!         .declared_method("save", "()V")
//!         .declared_method("load", "()V"),
//! );
//!
//! let sorter = MemberSorter::new(reflector, Arc::new(strategy));
//! for method in sorter.declared_methods(&TypeDescriptor::new("com.example.Foo"))? {
//!     println!("{}", method);
//! }
//! # Ok::<(), classorder::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `classorder` is organized into a few small modules:
//!
//! - [`sorter`] - The public façade, comparators, and the strategy contract
//! - [`classfile`] - The class file reader and the method-to-line map
//! - [`reflect`] - Descriptors and the reflection-facility boundary
//! - [`file`] - Byte-stream providers and low-level parsing infrastructure
//! - [`Error`] and [`Result`] - Comprehensive error handling
//!
//! Data flows one direction per sort: façade → reflection facility → comparators →
//! strategy → class reader → sorted members back to the caller.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Result). Unreadable artifacts are fatal and
//! propagate to the caller; *missing debug information is not an error* and resolves
//! through the documented defaults:
//!
//! ```rust,no_run
//! use classorder::{classfile::ClassSummary, Error};
//!
//! match ClassSummary::from_bytes(&std::fs::read("Foo.class")?) {
//!     Ok(summary) => println!("{} methods", summary.methods.len()),
//!     Err(Error::NotSupported) => println!("not a class file"),
//!     Err(Error::Malformed { message, .. }) => println!("malformed: {}", message),
//!     Err(e) => println!("error: {}", e),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Standards Compliance
//!
//! The reader follows the class file format of the JVM specification (JVMS chapter 4),
//! including the constant pool slot rules (4.4.5), modified UTF-8 (4.4.7), and the
//! `Code`/`LineNumberTable` attribute layouts (4.7.3, 4.7.12).

#[macro_use]
pub(crate) mod macros;

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust,no_run
/// use classorder::prelude::*;
///
/// let summary = ClassSummary::from_bytes(&std::fs::read("Foo.class")?)?;
/// println!("{}", summary.class_name);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub mod prelude;

/// Class file access: backends, byte-stream providers, and parsing primitives.
///
/// # Key Components
///
/// - [`file::ClassSource`] - Resolves fully-qualified names to class bytes
/// - [`file::DirectorySource`] / [`file::MemorySource`] - Provider implementations
/// - [`file::Backend`] - Bounds-checked access to one class's bytes
/// - [`file::parser::Parser`] - Cursor-based big-endian parsing
pub mod file;

/// Class file parsing and line-number extraction.
///
/// # Key Components
///
/// - [`classfile::ClassSummary`] - Parsed identity and method table of one class
/// - [`classfile::LineMap`] - Method-to-line mapping with default-value queries
/// - [`classfile::MethodRecord`] - One method entry in physical table order
pub mod classfile;

/// Descriptors and the reflection facility boundary.
///
/// # Key Components
///
/// - [`reflect::TypeDescriptor`] / [`reflect::MethodDescriptor`] - Member handles
/// - [`reflect::Reflector`] - The member-enumeration contract the host implements
/// - [`reflect::FixtureReflector`] - Map-backed implementation
pub mod reflect;

/// Member sorting: façade, comparators, and the strategy contract.
///
/// # Key Components
///
/// - [`sorter::MemberSorter`] - The public entry point
/// - [`sorter::LineNumberStrategy`] - The pluggable line-number contract
/// - [`sorter::ClassFileStrategy`] - The reader-backed reference strategy
pub mod sorter;

/// `classorder` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always
/// [`Error`]. This is used consistently throughout the crate for all fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `classorder` Error type
///
/// The main error type for all operations in this crate. Provides detailed error
/// information for class resolution, class file parsing, and sorter configuration.
pub use error::Error;

/// Low-level parsing utilities.
///
/// See [`file::parser::Parser`] for cursor-based access to class file bytes.
pub use file::parser::Parser;
