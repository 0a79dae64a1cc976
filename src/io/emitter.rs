// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! OpenSCAD script emitter

use super::number::format_number;
use crate::ast::{ModuleReference, Node, Params, Value};
use crate::config::{RenderConfig, TransformStyle};
use crate::error::{Result, ScadError};

/// Words that cannot be used as module or parameter names
const RESERVED: &[&str] = &[
    "module", "function", "if", "else", "for", "let", "each", "true", "false", "undef",
    "include", "use", "assert", "echo",
];

/// Renders a recorded tree into script text.
///
/// Output is built in memory; nothing reaches a sink until the whole document
/// rendered without error.
pub struct Emitter<'a> {
    config: &'a RenderConfig,
    out: String,
}

impl<'a> Emitter<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            out: String::new(),
        }
    }

    /// Emit the hoisted references, the global resolution assignments and the
    /// root statements, in that order
    pub fn emit(mut self, references: &[ModuleReference], roots: &[Node]) -> Result<String> {
        for reference in references {
            self.reference(reference)?;
        }

        if !self.config.resolution.is_empty() {
            self.section_break();
            for (name, value) in self.config.resolution.assignments() {
                let literal = format_number(value).map_err(|_| ScadError::NonFinite {
                    node: "resolution".into(),
                    param: name.into(),
                    value,
                })?;
                self.out.push_str(&format!("{name} = {literal};\n"));
            }
        }

        if roots.iter().any(emits_text) {
            self.section_break();
        }
        for node in roots {
            self.statement(node, 0)?;
        }

        Ok(self.out)
    }

    fn reference(&mut self, reference: &ModuleReference) -> Result<()> {
        let path = &reference.path;
        if path.is_empty() || path.contains(['>', '\n', '\r']) {
            return Err(ScadError::InvalidPath {
                keyword: reference.kind.keyword().to_string(),
                path: path.clone(),
            });
        }
        self.out
            .push_str(&format!("{} <{}>\n", reference.kind.keyword(), path));
        Ok(())
    }

    fn section_break(&mut self) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
    }

    fn indent(&mut self, depth: usize) {
        self.out
            .extend(std::iter::repeat(' ').take(depth * self.config.indent));
    }

    fn statement(&mut self, node: &Node, depth: usize) -> Result<()> {
        match node {
            Node::Primitive { shape, params } => {
                self.indent(depth);
                self.call(shape.name(), params)?;
                self.out.push_str(";\n");
            }
            Node::Transform {
                op,
                params,
                children,
            } => {
                self.indent(depth);
                self.call(op.name(), params)?;
                match children.as_slice() {
                    [child]
                        if self.config.transform_style == TransformStyle::Statement
                            && is_geometry(child) =>
                    {
                        self.out.push('\n');
                        self.statement(child, depth + 1)?;
                    }
                    _ => self.block(children, depth)?,
                }
            }
            Node::Combinator { op, children } => {
                self.indent(depth);
                self.out.push_str(op.name());
                self.out.push_str("()");
                self.block(children, depth)?;
            }
            Node::Extrusion {
                op,
                params,
                children,
            } => {
                self.indent(depth);
                self.call(op.name(), params)?;
                self.block(children, depth)?;
            }
            Node::ModuleCall {
                name,
                params,
                children,
            } => {
                check_identifier(name, name)?;
                self.indent(depth);
                self.call(name, params)?;
                match children {
                    Some(children) => self.block(children, depth)?,
                    None => self.out.push_str(";\n"),
                }
            }
            // Hoisted to the top of the document by the collector.
            Node::Reference(_) => {}
            Node::Comment(text) => self.comment(text, depth),
        }
        Ok(())
    }

    fn block(&mut self, children: &[Node], depth: usize) -> Result<()> {
        if !children.iter().any(emits_text) {
            self.out.push_str(" {}\n");
            return Ok(());
        }
        self.out.push_str(" {\n");
        for child in children {
            self.statement(child, depth + 1)?;
        }
        self.indent(depth);
        self.out.push_str("}\n");
        Ok(())
    }

    fn comment(&mut self, text: &str, depth: usize) {
        let mut lines: Vec<&str> = text.lines().collect();
        if lines.is_empty() {
            lines.push("");
        }
        for line in lines {
            self.indent(depth);
            let line = line.trim_end();
            if line.is_empty() {
                self.out.push_str("//\n");
            } else {
                self.out.push_str("// ");
                self.out.push_str(line);
                self.out.push('\n');
            }
        }
    }

    /// `name(key = value, ...)` without terminator
    fn call(&mut self, name: &str, params: &Params) -> Result<()> {
        self.out.push_str(name);
        self.out.push('(');
        for (i, (key, value)) in params.iter().enumerate() {
            check_identifier(name, key)?;
            if i > 0 {
                self.out.push_str(", ");
            }
            self.out.push_str(key);
            self.out.push_str(" = ");
            let mut path = Vec::new();
            self.value(value, name, key, &mut path)?;
        }
        self.out.push(')');
        Ok(())
    }

    fn value(&mut self, value: &Value, node: &str, key: &str, path: &mut Vec<usize>) -> Result<()> {
        match value {
            Value::Number(n) => {
                let literal = format_number(*n).map_err(|_| ScadError::NonFinite {
                    node: node.to_string(),
                    param: param_path(key, path),
                    value: *n,
                })?;
                self.out.push_str(&literal);
            }
            Value::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Str(s) => self.out.push_str(&quote(s)),
            Value::Vector(items) => {
                self.out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    path.push(i);
                    self.value(item, node, key, path)?;
                    path.pop();
                }
                self.out.push(']');
            }
            Value::Undef => self.out.push_str("undef"),
        }
        Ok(())
    }
}

/// Whether `node` produces any text where it is recorded
fn emits_text(node: &Node) -> bool {
    !matches!(node, Node::Reference(_))
}

/// Whether `node` can stand as the body of a brace-less transform
fn is_geometry(node: &Node) -> bool {
    !matches!(node, Node::Reference(_) | Node::Comment(_))
}

fn param_path(key: &str, path: &[usize]) -> String {
    let mut text = key.to_string();
    for index in path {
        text.push_str(&format!("[{index}]"));
    }
    text
}

/// `$`-prefixed or plain ASCII identifier that is not a reserved word
pub fn is_identifier(name: &str) -> bool {
    let bare = name.strip_prefix('$').unwrap_or(name);
    let mut chars = bare.chars();
    let head_ok = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    head_ok && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') && !RESERVED.contains(&name)
}

fn check_identifier(node: &str, name: &str) -> Result<()> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(ScadError::InvalidIdentifier {
            node: node.to_string(),
            name: name.to_string(),
        })
    }
}

/// Double-quoted string literal
pub fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
