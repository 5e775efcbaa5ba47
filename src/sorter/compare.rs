//! Stable line-number ordering of member lists.
//!
//! Sorting is decorate-sort-undecorate: every member's key is resolved through the active
//! strategy *before* the sort runs, so a read or parse failure propagates as an error
//! instead of aborting mid-comparison (a comparator callback has no way to carry a
//! `Result` out of a sort). One key resolution per member also bounds the parse work at
//! O(members) per call instead of O(members log members).
//!
//! # Default Policy
//!
//! Members the strategy cannot resolve get [`DEFAULT_MEMBER_LINE`] (zero) as their key and
//! therefore group at the *front* of the result, keeping their original relative order.
//! This is a fixed policy choice: abstract and native methods, and classes compiled
//! without debug information, have no line records, and pushing them to the end (a
//! max-sentinel default) would bury exactly the members a caller is most likely to notice
//! missing. Zero also makes the nested-type sort a visible no-op under the reference
//! strategy, where every type key defaults identically.
//!
//! Ties - including the everything-defaulted case - preserve the input order: the sort is
//! stable, and keys are plain `u32`s, so the total-order requirements hold trivially.

use crate::{
    reflect::{MethodDescriptor, TypeDescriptor},
    sorter::strategy::LineNumberStrategy,
    Result,
};

/// Sort key substituted for members without resolvable line numbers.
///
/// Zero is a legal, meaningful line value: it groups unresolvable members at the front of
/// the sorted sequence in their original relative order.
pub const DEFAULT_MEMBER_LINE: u32 = 0;

/// Sort methods ascending by their first line number, stable on ties.
///
/// # Errors
/// Propagates the strategy's read/parse errors; the list is left unmodified in that case.
pub fn sort_methods(
    strategy: &dyn LineNumberStrategy,
    methods: &mut Vec<MethodDescriptor>,
) -> Result<()> {
    let mut keys = Vec::with_capacity(methods.len());
    for method in methods.iter() {
        keys.push(strategy.method_line(method, DEFAULT_MEMBER_LINE)?);
    }

    let mut keyed: Vec<(u32, MethodDescriptor)> = keys.into_iter().zip(methods.drain(..)).collect();
    keyed.sort_by_key(|(line, _)| *line);
    methods.extend(keyed.into_iter().map(|(_, method)| method));
    Ok(())
}

/// Sort nested types ascending by their declaration line number, stable on ties.
///
/// Under the reference strategy every type key defaults, making this an order-preserving
/// pass; a strategy with a richer metadata source turns it into a real sort.
///
/// # Errors
/// Propagates the strategy's read/parse errors; the list is left unmodified in that case.
pub fn sort_classes(
    strategy: &dyn LineNumberStrategy,
    classes: &mut Vec<TypeDescriptor>,
) -> Result<()> {
    let mut keys = Vec::with_capacity(classes.len());
    for class in classes.iter() {
        keys.push(strategy.type_line(class, DEFAULT_MEMBER_LINE)?);
    }

    let mut keyed: Vec<(u32, TypeDescriptor)> = keys.into_iter().zip(classes.drain(..)).collect();
    keyed.sort_by_key(|(line, _)| *line);
    classes.extend(keyed.into_iter().map(|(_, class)| class));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::FixedLines;

    fn methods_named(names: &[&str]) -> Vec<MethodDescriptor> {
        names
            .iter()
            .map(|name| MethodDescriptor::new("com.example.Foo", *name, "()V"))
            .collect()
    }

    fn names(methods: &[MethodDescriptor]) -> Vec<String> {
        methods.iter().map(|m| m.name().to_string()).collect()
    }

    #[test]
    fn orders_by_line() {
        let strategy = FixedLines::methods(&[("a", 10), ("b", 5), ("c", 20)]);
        let mut methods = methods_named(&["a", "b", "c"]);

        sort_methods(&strategy, &mut methods).unwrap();
        assert_eq!(names(&methods), ["b", "a", "c"]);
    }

    #[test]
    fn all_defaulted_preserves_input_order() {
        let strategy = FixedLines::methods(&[]);
        let mut methods = methods_named(&["z", "m", "a"]);

        sort_methods(&strategy, &mut methods).unwrap();
        assert_eq!(names(&methods), ["z", "m", "a"]);
    }

    #[test]
    fn unresolved_members_group_first() {
        let strategy = FixedLines::methods(&[("documented", 15)]);
        let mut methods = methods_named(&["documented", "ghost1", "ghost2"]);

        sort_methods(&strategy, &mut methods).unwrap();
        assert_eq!(names(&methods), ["ghost1", "ghost2", "documented"]);
    }

    #[test]
    fn ties_are_stable() {
        let strategy = FixedLines::methods(&[("x", 10), ("y", 10), ("w", 3)]);
        let mut methods = methods_named(&["x", "y", "w"]);

        sort_methods(&strategy, &mut methods).unwrap();
        assert_eq!(names(&methods), ["w", "x", "y"]);
    }

    #[test]
    fn classes_sort_with_type_lines() {
        let strategy = FixedLines::types(&[("B", 4), ("A", 9)]);
        let mut classes = vec![TypeDescriptor::new("A"), TypeDescriptor::new("B")];

        sort_classes(&strategy, &mut classes).unwrap();
        assert_eq!(classes[0].name(), "B");
        assert_eq!(classes[1].name(), "A");
    }
}
