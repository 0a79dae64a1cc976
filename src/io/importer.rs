// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Serialized tree importer

use crate::ast::Node;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a JSON file holding either a single node or an array of root nodes
pub fn load_tree(path: impl AsRef<Path>) -> Result<Vec<Node>> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read tree file: {}", path.display()))?;

    parse_tree(&source).with_context(|| format!("Failed to parse tree file: {}", path.display()))
}

/// Parse a JSON tree from memory
pub fn parse_tree(source: &str) -> Result<Vec<Node>> {
    let value: serde_json::Value = serde_json::from_str(source).context("Invalid JSON")?;
    let roots = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };
    Ok(roots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{CombinatorOp, Shape};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_tree_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(
            file,
            r#"[{{"reference":{{"kind":"use","path":"lib.scad"}}}},
               {{"combinator":{{"op":"union","children":[{{"primitive":{{"shape":"cube","params":{{"size":1}}}}}}]}}}}]"#
        )?;

        let roots = load_tree(file.path())?;
        assert_eq!(roots.len(), 2);
        match &roots[1] {
            Node::Combinator { op, children } => {
                assert_eq!(*op, CombinatorOp::Union);
                assert!(matches!(
                    children[0],
                    Node::Primitive {
                        shape: Shape::Cube,
                        ..
                    }
                ));
            }
            other => panic!("unexpected root: {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_single_node() -> Result<()> {
        let roots = parse_tree(r#"{"comment":"hello"}"#)?;
        assert_eq!(roots, vec![Node::comment("hello")]);
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let err = load_tree("/nonexistent/tree.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read tree file"));
    }
}
