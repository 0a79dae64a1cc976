// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Collects the external module references to hoist above the script body

use super::{ModuleReference, Node};
use ahash::AHashSet;

/// Gather every distinct module reference in the tree.
///
/// Pre-order, depth-first over `roots`; a path is kept at its first encounter
/// and later references to the same path are skipped.
pub fn collect_references(roots: &[Node]) -> Vec<ModuleReference> {
    let mut collector = Collector::default();
    for node in roots {
        collector.visit(node);
    }
    collector.references
}

#[derive(Default)]
struct Collector<'a> {
    seen: AHashSet<&'a str>,
    references: Vec<ModuleReference>,
}

impl<'a> Collector<'a> {
    fn visit(&mut self, node: &'a Node) {
        if let Node::Reference(reference) = node {
            if self.seen.insert(reference.path.as_str()) {
                self.references.push(reference.clone());
            }
        }

        for child in node.children() {
            self.visit(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{CombinatorOp, Params, ReferenceKind, Shape, TransformOp};

    fn use_file(path: &str) -> Node {
        Node::Reference(ModuleReference::new(ReferenceKind::Use, path))
    }

    fn union(children: Vec<Node>) -> Node {
        Node::Combinator {
            op: CombinatorOp::Union,
            children,
        }
    }

    #[test]
    fn test_same_path_at_three_depths() {
        let roots = vec![
            union(vec![
                Node::primitive(Shape::Cube, Params::new()),
                union(vec![use_file("b.scad"), union(vec![use_file("a.scad")])]),
            ]),
            use_file("a.scad"),
            Node::Transform {
                op: TransformOp::Translate,
                params: Params::new(),
                children: vec![use_file("b.scad"), use_file("a.scad")],
            },
        ];

        let paths: Vec<String> = collect_references(&roots)
            .into_iter()
            .map(|r| r.path)
            .collect();
        assert_eq!(paths, vec!["b.scad", "a.scad"]);
    }

    #[test]
    fn test_first_kind_wins() {
        let roots = vec![
            Node::Reference(ModuleReference::new(ReferenceKind::Include, "lib.scad")),
            use_file("lib.scad"),
        ];
        let refs = collect_references(&roots);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].kind, ReferenceKind::Include);
    }

    #[test]
    fn test_no_references() {
        let roots = vec![Node::primitive(Shape::Sphere, Params::new())];
        assert!(collect_references(&roots).is_empty());
    }

    #[test]
    fn test_references_inside_module_body() {
        let roots = vec![Node::ModuleCall {
            name: "flexible".into(),
            params: Params::new(),
            children: Some(vec![use_file("inner.scad")]),
        }];
        assert_eq!(collect_references(&roots)[0].path, "inner.scad");
    }
}
