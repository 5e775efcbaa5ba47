//! Shared builder for crafting class files used by the integration tests.
//!
//! The builder emits structurally valid class files containing exactly what the reader
//! cares about: a constant pool, a method table, and per method an optional `Code`
//! attribute with an optional `LineNumberTable`. Bodies are a single `return` instruction;
//! nothing here executes, the bytes only need to parse.

/// What a built method carries in its attribute list.
enum MethodBody {
    /// No `Code` attribute at all (abstract/native methods)
    None,
    /// A `Code` attribute without any `LineNumberTable` (compiled without `-g`)
    CodeWithoutDebug,
    /// A `Code` attribute with one `LineNumberTable` of (start_pc, line) entries
    CodeWithLines(Vec<(u16, u16)>),
}

struct BuiltMethod {
    name: String,
    descriptor: String,
    access: u16,
    body: MethodBody,
}

/// Builds one synthetic class file.
pub struct ClassFileBuilder {
    internal_name: String,
    methods: Vec<BuiltMethod>,
}

impl ClassFileBuilder {
    /// Start a class named by its internal (slash-separated) name.
    pub fn new(internal_name: &str) -> ClassFileBuilder {
        ClassFileBuilder {
            internal_name: internal_name.to_string(),
            methods: Vec::new(),
        }
    }

    /// Add a public method whose code carries the given line-number entries.
    pub fn method(mut self, name: &str, descriptor: &str, lines: &[(u16, u16)]) -> Self {
        self.methods.push(BuiltMethod {
            name: name.to_string(),
            descriptor: descriptor.to_string(),
            access: 0x0001,
            body: MethodBody::CodeWithLines(lines.to_vec()),
        });
        self
    }

    /// Add a public method with code but no debug information.
    pub fn method_without_debug(mut self, name: &str, descriptor: &str) -> Self {
        self.methods.push(BuiltMethod {
            name: name.to_string(),
            descriptor: descriptor.to_string(),
            access: 0x0001,
            body: MethodBody::CodeWithoutDebug,
        });
        self
    }

    /// Add a public abstract method (no `Code` attribute).
    pub fn abstract_method(mut self, name: &str, descriptor: &str) -> Self {
        self.methods.push(BuiltMethod {
            name: name.to_string(),
            descriptor: descriptor.to_string(),
            access: 0x0401,
            body: MethodBody::None,
        });
        self
    }

    /// Assemble the class file bytes.
    pub fn build(self) -> Vec<u8> {
        let mut data = Vec::new();

        push_u32(&mut data, 0xCAFE_BABE);
        push_u16(&mut data, 0); // minor
        push_u16(&mut data, 52); // major, Java 8

        // Pool: #1 name Utf8, #2 Class -> #1, #3 "Code", #4 "LineNumberTable",
        // then name/descriptor Utf8 pairs per method
        push_u16(&mut data, 5 + self.methods.len() as u16 * 2);
        push_utf8(&mut data, &self.internal_name);
        data.push(7); // CONSTANT_Class
        push_u16(&mut data, 1);
        push_utf8(&mut data, "Code");
        push_utf8(&mut data, "LineNumberTable");
        for method in &self.methods {
            push_utf8(&mut data, &method.name);
            push_utf8(&mut data, &method.descriptor);
        }

        push_u16(&mut data, 0x0021); // class access_flags
        push_u16(&mut data, 2); // this_class
        push_u16(&mut data, 0); // super_class
        push_u16(&mut data, 0); // interfaces_count
        push_u16(&mut data, 0); // fields_count

        push_u16(&mut data, self.methods.len() as u16);
        for (position, method) in self.methods.iter().enumerate() {
            push_u16(&mut data, method.access);
            push_u16(&mut data, 5 + position as u16 * 2); // name_index
            push_u16(&mut data, 6 + position as u16 * 2); // descriptor_index

            match &method.body {
                MethodBody::None => push_u16(&mut data, 0),
                MethodBody::CodeWithoutDebug => {
                    push_u16(&mut data, 1);
                    push_code_header(&mut data, 13);
                    push_u16(&mut data, 0); // no nested attributes
                }
                MethodBody::CodeWithLines(entries) => {
                    push_u16(&mut data, 1);
                    push_code_header(&mut data, 21 + entries.len() as u32 * 4);
                    push_u16(&mut data, 1); // one nested attribute
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
}

/// Emit the fixed part of a `Code` attribute: header fields, a one-byte `return` body,
/// and an empty exception table. `attr_length` must account for the nested attributes.
fn push_code_header(data: &mut Vec<u8>, attr_length: u32) {
    push_u16(data, 3); // "Code"
    push_u32(data, attr_length);
    push_u16(data, 1); // max_stack
    push_u16(data, 1); // max_locals
    push_u32(data, 1); // code_length
    data.push(0xB1); // return
    push_u16(data, 0); // exception_table_length
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
