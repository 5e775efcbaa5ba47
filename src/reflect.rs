//! The reflection facility boundary: member descriptors and their provider.
//!
//! Enumerating a type's members is outside this crate's scope - reflection belongs to the
//! host environment (a JVM attach agent, a class-index database, a build-tool model of the
//! compiled output). What the sorter needs from it is small and is captured by the
//! [`crate::reflect::Reflector`] trait: the *unordered* declared methods, all visible
//! methods, and declared nested classes of a type, as descriptor values.
//!
//! Descriptors are plain owned values. A [`crate::reflect::MethodDescriptor`] carries its
//! declaring type's name because that is the class file the line number must be read from -
//! for inherited methods this differs from the type being sorted.
//!
//! [`crate::reflect::FixtureReflector`] is a map-backed implementation for hosts that
//! enumerate members up front, and for tests.

use std::collections::HashMap;

/// Opaque handle to a compiled type.
///
/// Holds the fully-qualified binary name in dotted form; nested classes keep their `$`
/// separators (`com.example.Outer$Inner`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    name: String,
}

impl TypeDescriptor {
    /// Create a descriptor for the given fully-qualified name.
    pub fn new(name: impl Into<String>) -> TypeDescriptor {
        TypeDescriptor { name: name.into() }
    }

    /// The fully-qualified name, e.g. `com.example.Outer$Inner`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Opaque handle to one declared method of a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodDescriptor {
    declaring_type: String,
    name: String,
    descriptor: String,
}

impl MethodDescriptor {
    /// Create a descriptor for a method of `declaring_type`.
    ///
    /// # Arguments
    /// * `declaring_type` - Fully-qualified name of the class that declares the method
    /// * `name` - Method name (`<init>` for constructors)
    /// * `descriptor` - JVM type descriptor, e.g. `(ILjava/lang/String;)V`
    pub fn new(
        declaring_type: impl Into<String>,
        name: impl Into<String>,
        descriptor: impl Into<String>,
    ) -> MethodDescriptor {
        MethodDescriptor {
            declaring_type: declaring_type.into(),
            name: name.into(),
            descriptor: descriptor.into(),
        }
    }

    /// Fully-qualified name of the declaring type.
    ///
    /// For inherited methods this is the supertype, and it decides which class file the
    /// line number is read from.
    #[must_use]
    pub fn declaring_type(&self) -> &str {
        &self.declaring_type
    }

    /// The method name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The JVM type descriptor of the method.
    #[must_use]
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }
}

impl std::fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}{}", self.declaring_type, self.name, self.descriptor)
    }
}

/// The reflection facility consumed by the sorter.
///
/// Implementations return members in whatever order they naturally hold them - hash order,
/// index order, anything. The contract is about membership, not order: the sorter treats
/// the returned sequence as unordered input and only relies on it being stable for the
/// duration of one call.
pub trait Reflector {
    /// All methods declared directly by `ty`, unordered.
    fn declared_methods(&self, ty: &TypeDescriptor) -> Vec<MethodDescriptor>;

    /// All methods visible on `ty` including inherited ones, unordered.
    fn methods(&self, ty: &TypeDescriptor) -> Vec<MethodDescriptor>;

    /// All nested classes declared directly by `ty`, unordered.
    fn declared_classes(&self, ty: &TypeDescriptor) -> Vec<TypeDescriptor>;
}

/// Member lists for one type, registered with a [`FixtureReflector`].
#[derive(Debug, Clone, Default)]
pub struct TypeFixture {
    name: String,
    declared_methods: Vec<MethodDescriptor>,
    methods: Vec<MethodDescriptor>,
    declared_classes: Vec<TypeDescriptor>,
}

impl TypeFixture {
    /// Start a fixture for the given fully-qualified type name.
    pub fn new(name: impl Into<String>) -> TypeFixture {
        TypeFixture {
            name: name.into(),
            ..TypeFixture::default()
        }
    }

    /// Add a method declared by this type itself (visible in both member views).
    #[must_use]
    pub fn declared_method(mut self, name: &str, descriptor: &str) -> TypeFixture {
        let method = MethodDescriptor::new(&self.name, name, descriptor);
        self.declared_methods.push(method.clone());
        self.methods.push(method);
        self
    }

    /// Add an inherited method (visible in the all-methods view only).
    #[must_use]
    pub fn inherited_method(
        mut self,
        declaring_type: &str,
        name: &str,
        descriptor: &str,
    ) -> TypeFixture {
        self.methods
            .push(MethodDescriptor::new(declaring_type, name, descriptor));
        self
    }

    /// Add a nested class declared by this type.
    #[must_use]
    pub fn nested_class(mut self, name: &str) -> TypeFixture {
        self.declared_classes.push(TypeDescriptor::new(name));
        self
    }
}

/// Map-backed [`Reflector`] implementation.
///
/// # Examples
///
/// ```rust
/// use classorder::reflect::{FixtureReflector, Reflector, TypeDescriptor, TypeFixture};
///
/// let mut reflector = FixtureReflector::new();
/// reflector.register(
///     TypeFixture::new("com.example.Foo")
///         .declared_method("b", "()V")
///         .declared_method("a", "()V"),
/// );
///
/// let ty = TypeDescriptor::new("com.example.Foo");
/// assert_eq!(reflector.declared_methods(&ty).len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixtureReflector {
    types: HashMap<String, TypeFixture>,
}

impl FixtureReflector {
    /// Create an empty reflector.
    #[must_use]
    pub fn new() -> FixtureReflector {
        FixtureReflector::default()
    }

    /// Register the member lists for one type, replacing any previous registration.
    pub fn register(&mut self, fixture: TypeFixture) {
        self.types.insert(fixture.name.clone(), fixture);
    }
}

impl Reflector for FixtureReflector {
    fn declared_methods(&self, ty: &TypeDescriptor) -> Vec<MethodDescriptor> {
        self.types
            .get(ty.name())
            .map(|fixture| fixture.declared_methods.clone())
            .unwrap_or_default()
    }

    fn methods(&self, ty: &TypeDescriptor) -> Vec<MethodDescriptor> {
        self.types
            .get(ty.name())
            .map(|fixture| fixture.methods.clone())
            .unwrap_or_default()
    }

    fn declared_classes(&self, ty: &TypeDescriptor) -> Vec<TypeDescriptor> {
        self.types
            .get(ty.name())
            .map(|fixture| fixture.declared_classes.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_member_views() {
        let mut reflector = FixtureReflector::new();
        reflector.register(
            TypeFixture::new("com.example.Foo")
                .declared_method("own", "()V")
                .inherited_method("java.lang.Object", "toString", "()Ljava/lang/String;")
                .nested_class("com.example.Foo$Inner"),
        );

        let ty = TypeDescriptor::new("com.example.Foo");

        let declared = reflector.declared_methods(&ty);
        assert_eq!(declared.len(), 1);
        assert_eq!(declared[0].name(), "own");
        assert_eq!(declared[0].declaring_type(), "com.example.Foo");

        let all = reflector.methods(&ty);
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].declaring_type(), "java.lang.Object");

        let nested = reflector.declared_classes(&ty);
        assert_eq!(nested.len(), 1);
        assert_eq!(nested[0].name(), "com.example.Foo$Inner");
    }

    #[test]
    fn unknown_type_is_memberless() {
        let reflector = FixtureReflector::new();
        let ty = TypeDescriptor::new("com.example.Ghost");

        assert!(reflector.declared_methods(&ty).is_empty());
        assert!(reflector.methods(&ty).is_empty());
        assert!(reflector.declared_classes(&ty).is_empty());
    }
}
