//! The pluggable line-number resolution contract and its class-file-backed implementation.
//!
//! A [`crate::sorter::strategy::LineNumberStrategy`] turns a member descriptor into a sort
//! key. Both operations are total with respect to *missing* information - a member without
//! debug data resolves to the caller-supplied default - and only fail when the underlying
//! class artifact cannot be located or parsed. That split matters: missing line records are
//! an everyday state (abstract methods, classes compiled without `-g`), while an unreadable
//! artifact means the environment is broken and must surface loudly.
//!
//! The contract is a capability set: anything implementing the two operations with these
//! defaulting semantics is a valid strategy, which is how the test suite substitutes fixed
//! synthetic line numbers without touching real class bytes.

use crate::{
    classfile::LineMap,
    file::ClassSource,
    reflect::{MethodDescriptor, TypeDescriptor},
    Result,
};

/// Resolves members to the first line number of their declaration or body.
pub trait LineNumberStrategy: Send + Sync {
    /// First line number of the *type's own declaration*, or `default` when the strategy
    /// cannot resolve type declarations.
    ///
    /// # Errors
    /// Only for unreadable artifacts; "unknown" resolves to `default`.
    fn type_line(&self, ty: &TypeDescriptor, default: u32) -> Result<u32>;

    /// First line number of the method's compiled body, or `default` when the method has
    /// no line-number records.
    ///
    /// # Errors
    /// Only for unreadable artifacts; "no record" resolves to `default`.
    fn method_line(&self, method: &MethodDescriptor, default: u32) -> Result<u32>;
}

/// The reference strategy, backed by the class file reader.
///
/// Resolves a method by opening its declaring type's class bytes through the configured
/// [`crate::file::ClassSource`], building a fresh [`crate::classfile::LineMap`], and
/// looking the method up by name and descriptor. Nothing is cached: every resolution
/// re-reads and re-parses, so results always reflect the bytes currently on disk (or in
/// the source) at the cost of repeated parse work during a sort.
///
/// # Examples
///
/// ```rust,no_run
/// use classorder::file::DirectorySource;
/// use classorder::reflect::MethodDescriptor;
/// use classorder::sorter::{ClassFileStrategy, LineNumberStrategy};
///
/// let strategy = ClassFileStrategy::new(DirectorySource::new(["target/classes"]));
/// let method = MethodDescriptor::new("com.example.Foo", "run", "()V");
/// let line = strategy.method_line(&method, 0)?;
/// # Ok::<(), classorder::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ClassFileStrategy<S> {
    source: S,
}

impl<S: ClassSource> ClassFileStrategy<S> {
    /// Create a strategy resolving class bytes through `source`.
    pub fn new(source: S) -> ClassFileStrategy<S> {
        ClassFileStrategy { source }
    }
}

impl<S: ClassSource> LineNumberStrategy for ClassFileStrategy<S> {
    /// Always returns `default`, unmodified.
    ///
    /// Nested-type declaration lines are not recoverable from per-method line tables, so
    /// this operation is a deliberate pass-through rather than an unimplemented stub.
    /// Substituting a richer metadata source (a source map, an index built at compile
    /// time) is the intended way to change this behavior.
    fn type_line(&self, _ty: &TypeDescriptor, default: u32) -> Result<u32> {
        Ok(default)
    }

    fn method_line(&self, method: &MethodDescriptor, default: u32) -> Result<u32> {
        let backend = self.source.open(method.declaring_type())?;
        let map = LineMap::from_class(backend.data())?;
        Ok(map.first_line_or(method.name(), method.descriptor(), default))
    }
}
