//! Shared functionality which is used in unit-tests across the crate.

use std::collections::HashMap;

use crate::{
    reflect::{MethodDescriptor, TypeDescriptor},
    sorter::LineNumberStrategy,
    Result,
};

/// Specification of one method entry for [`class_bytes`].
pub(crate) struct MethodSpec {
    name: &'static str,
    descriptor: &'static str,
    access: u16,
    /// (start_pc, line) entries of the LineNumberTable; None means no Code attribute
    lines: Option<Vec<(u16, u16)>>,
}

impl MethodSpec {
    pub(crate) fn new(name: &'static str, descriptor: &'static str) -> MethodSpec {
        MethodSpec {
            name,
            descriptor,
            access: 0x0001, // public
            lines: None,
        }
    }

    pub(crate) fn access(mut self, flags: u16) -> MethodSpec {
        self.access = flags;
        self
    }

    pub(crate) fn lines(mut self, entries: &[(u16, u16)]) -> MethodSpec {
        self.lines = Some(entries.to_vec());
        self
    }
}

fn push_u16(data: &mut Vec<u8>, value: u16) {
    data.extend_from_slice(&value.to_be_bytes());
}

fn push_u32(data: &mut Vec<u8>, value: u32) {
    data.extend_from_slice(&value.to_be_bytes());
}

fn push_utf8(data: &mut Vec<u8>, value: &str) {
    data.push(1); // CONSTANT_Utf8
    push_u16(data, value.len() as u16);
    data.extend_from_slice(value.as_bytes());
}

/// Assemble a minimal class file: the given methods, each optionally carrying a Code
/// attribute with a single-instruction body and one LineNumberTable.
///
/// `internal_name` uses slash form (`com/example/Widget`).
pub(crate) fn class_bytes(internal_name: &str, methods: &[MethodSpec]) -> Vec<u8> {
    let mut data = Vec::new();

    push_u32(&mut data, 0xCAFE_BABE);
    push_u16(&mut data, 0); // minor
    push_u16(&mut data, 52); // major, Java 8

    // Pool: #1 name, #2 class, #3 "Code", #4 "LineNumberTable", then two Utf8 per method
    push_u16(&mut data, 5 + methods.len() as u16 * 2);
    push_utf8(&mut data, internal_name);
    data.push(7); // CONSTANT_Class
    push_u16(&mut data, 1);
    push_utf8(&mut data, "Code");
    push_utf8(&mut data, "LineNumberTable");
    for method in methods {
        push_utf8(&mut data, method.name);
        push_utf8(&mut data, method.descriptor);
    }

    push_u16(&mut data, 0x0021); // class access_flags
    push_u16(&mut data, 2); // this_class
    push_u16(&mut data, 0); // super_class
    push_u16(&mut data, 0); // interfaces
    push_u16(&mut data, 0); // fields

    push_u16(&mut data, methods.len() as u16);
    for (position, method) in methods.iter().enumerate() {
        push_u16(&mut data, method.access);
        push_u16(&mut data, 5 + position as u16 * 2); // name_index
        push_u16(&mut data, 6 + position as u16 * 2); // descriptor_index

        match &method.lines {
            None => push_u16(&mut data, 0),
            Some(entries) => {
                push_u16(&mut data, 1); // one attribute: Code
                push_u16(&mut data, 3); // "Code"
                push_u32(&mut data, 21 + entries.len() as u32 * 4);
                push_u16(&mut data, 1); // max_stack
                push_u16(&mut data, 1); // max_locals
                push_u32(&mut data, 1); // code_length
                data.push(0xB1); // return
                push_u16(&mut data, 0); // exception_table_length
                push_u16(&mut data, 1); // one nested attribute: LineNumberTable
                push_u16(&mut data, 4); // "LineNumberTable"
                push_u32(&mut data, 2 + entries.len() as u32 * 4);
                push_u16(&mut data, entries.len() as u16);
                for (start_pc, line) in entries {
                    push_u16(&mut data, *start_pc);
                    push_u16(&mut data, *line);
                }
            }
        }
    }

    data
}

/// Strategy double returning fixed line numbers by member name, defaulting otherwise.
#[derive(Debug, Default)]
pub(crate) struct FixedLines {
    methods: HashMap<String, u32>,
    types: HashMap<String, u32>,
}

impl FixedLines {
    pub(crate) fn methods(pairs: &[(&str, u32)]) -> FixedLines {
        FixedLines {
            methods: pairs
                .iter()
                .map(|(name, line)| (name.to_string(), *line))
                .collect(),
            types: HashMap::new(),
        }
    }

    pub(crate) fn types(pairs: &[(&str, u32)]) -> FixedLines {
        FixedLines {
            methods: HashMap::new(),
            types: pairs
                .iter()
                .map(|(name, line)| (name.to_string(), *line))
                .collect(),
        }
    }
}

impl LineNumberStrategy for FixedLines {
    fn type_line(&self, ty: &TypeDescriptor, default: u32) -> Result<u32> {
        Ok(self.types.get(ty.name()).copied().unwrap_or(default))
    }

    fn method_line(&self, method: &MethodDescriptor, default: u32) -> Result<u32> {
        Ok(self.methods.get(method.name()).copied().unwrap_or(default))
    }
}
