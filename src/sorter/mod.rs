//! Member sorting: the public façade over strategy and comparators.
//!
//! [`crate::sorter::MemberSorter`] is the entry point of the crate. Given a type, it
//! fetches the member lists from the reflection facility, resolves a line-number key per
//! member through the active [`crate::sorter::LineNumberStrategy`], and returns the
//! members sorted into source-declaration order.
//!
//! # Architecture
//!
//! Data flows one direction per call:
//!
//! façade → [`crate::reflect::Reflector`] (fetch unordered members) →
//! [`crate::sorter::compare`] (stable sort) → [`crate::sorter::LineNumberStrategy`]
//! (resolve keys) → [`crate::classfile`] (parse line records) → sorted members returned.
//!
//! Nothing is cached between calls: repeated sorts of the same type repeat the reflection
//! query and the class parses. The crate deliberately favors statelessness - results
//! always match the artifact bytes of the moment - over sort throughput, which fits its
//! role as an introspection aid rather than a hot path.
//!
//! # Strategy Replacement
//!
//! The active strategy lives in a lock-guarded slot and can be swapped at any time, for
//! all subsequent calls, via [`crate::sorter::MemberSorter::set_strategy`]. Swapping in
//! "no strategy" is a configuration error and leaves the active strategy untouched.
//!
//! # Usage Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use classorder::file::MemorySource;
//! use classorder::reflect::{FixtureReflector, TypeDescriptor, TypeFixture};
//! use classorder::sorter::{ClassFileStrategy, MemberSorter};
//!
//! let mut reflector = FixtureReflector::new();
//! reflector.register(
//!     TypeFixture::new("com.example.Outer")
//!         .nested_class("com.example.Outer$B")
//!         .nested_class("com.example.Outer$A"),
//! );
//!
//! let strategy = ClassFileStrategy::new(MemorySource::new());
//! let sorter = MemberSorter::new(reflector, Arc::new(strategy));
//!
//! // Nested-type keys all default under the reference strategy, so the
//! // reflection order passes through unchanged
//! let classes = sorter.declared_classes(&TypeDescriptor::new("com.example.Outer"))?;
//! assert_eq!(classes[0].name(), "com.example.Outer$B");
//! # Ok::<(), classorder::Error>(())
//! ```

pub mod compare;
mod strategy;

use std::sync::{Arc, RwLock};

use crate::{
    reflect::{MethodDescriptor, Reflector, TypeDescriptor},
    Result,
};

pub use compare::DEFAULT_MEMBER_LINE;
pub use strategy::{ClassFileStrategy, LineNumberStrategy};

/// Sorts a type's members into source-declaration order.
///
/// The sorter pairs a reflection facility (where the unordered member lists come from)
/// with a swappable line-number strategy (where the sort keys come from). Both the
/// reflection results and the strategy output are consumed fresh on every call.
///
/// Inherited methods returned by [`MemberSorter::methods`] carry line numbers from their
/// *declaring* type's class file, so the sorted sequence interleaves positions from
/// multiple source files. That is the expected behavior of a raw line-number order, not
/// an error; callers wanting per-file grouping can group by
/// [`crate::reflect::MethodDescriptor::declaring_type`] first.
pub struct MemberSorter<R> {
    reflector: R,
    strategy: RwLock<Arc<dyn LineNumberStrategy>>,
}

impl<R: Reflector> MemberSorter<R> {
    /// Create a sorter over `reflector` with `strategy` as the initially active strategy.
    pub fn new(reflector: R, strategy: Arc<dyn LineNumberStrategy>) -> MemberSorter<R> {
        MemberSorter {
            reflector,
            strategy: RwLock::new(strategy),
        }
    }

    /// Replace the active strategy for all subsequent sorts, from any caller.
    ///
    /// # Arguments
    /// * `strategy` - The replacement; `None` is the null-equivalent and is rejected
    ///
    /// # Errors
    /// Returns [`crate::Error::Configuration`] for `None` - the previously active
    /// strategy stays in effect - and [`crate::Error::LockError`] if the slot lock is
    /// poisoned.
    pub fn set_strategy(&self, strategy: Option<Arc<dyn LineNumberStrategy>>) -> Result<()> {
        let Some(strategy) = strategy else {
            return Err(crate::Error::Configuration("strategy is null".to_string()));
        };

        let mut slot = write_lock!(self.strategy)?;
        *slot = strategy;
        Ok(())
    }

    /// The currently active strategy.
    ///
    /// # Errors
    /// Returns [`crate::Error::LockError`] if the slot lock is poisoned.
    pub fn strategy(&self) -> Result<Arc<dyn LineNumberStrategy>> {
        Ok(read_lock!(self.strategy)?.clone())
    }

    /// The type's declared nested classes, sorted by declaration line number.
    ///
    /// With the reference strategy every type key defaults, so the output order equals
    /// the reflection facility's raw order exactly - callers must not assume declaration
    /// order for nested types unless a richer strategy is installed.
    ///
    /// # Errors
    /// Propagates strategy read/parse errors and lock poisoning.
    pub fn declared_classes(&self, ty: &TypeDescriptor) -> Result<Vec<TypeDescriptor>> {
        let strategy = self.strategy()?;
        let mut classes = self.reflector.declared_classes(ty);
        compare::sort_classes(strategy.as_ref(), &mut classes)?;
        Ok(classes)
    }

    /// The type's own declared methods, sorted into source-declaration order.
    ///
    /// # Errors
    /// Propagates strategy read/parse errors and lock poisoning.
    pub fn declared_methods(&self, ty: &TypeDescriptor) -> Result<Vec<MethodDescriptor>> {
        let strategy = self.strategy()?;
        let mut methods = self.reflector.declared_methods(ty);
        compare::sort_methods(strategy.as_ref(), &mut methods)?;
        Ok(methods)
    }

    /// All methods visible on the type, inherited ones included, sorted by raw line
    /// number across declaring types.
    ///
    /// # Errors
    /// Propagates strategy read/parse errors and lock poisoning.
    pub fn methods(&self, ty: &TypeDescriptor) -> Result<Vec<MethodDescriptor>> {
        let strategy = self.strategy()?;
        let mut methods = self.reflector.methods(ty);
        compare::sort_methods(strategy.as_ref(), &mut methods)?;
        Ok(methods)
    }
}
