// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! AST Node definitions

use super::Params;
use serde::{Deserialize, Serialize};

/// One statement of the CSG program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Primitive {
        shape: Shape,
        params: Params,
    },
    Transform {
        op: TransformOp,
        params: Params,
        children: Vec<Node>,
    },
    Combinator {
        op: CombinatorOp,
        children: Vec<Node>,
    },
    Extrusion {
        op: ExtrusionOp,
        params: Params,
        children: Vec<Node>,
    },
    /// Invocation of a user module; `children` is `None` for a plain call
    /// and `Some` when the module takes a body block
    ModuleCall {
        name: String,
        params: Params,
        children: Option<Vec<Node>>,
    },
    Reference(ModuleReference),
    Comment(String),
}

impl Node {
    pub fn primitive(shape: Shape, params: Params) -> Self {
        Node::Primitive { shape, params }
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Node::Comment(text.into())
    }

    /// Child nodes in recording order
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Transform { children, .. }
            | Node::Combinator { children, .. }
            | Node::Extrusion { children, .. } => children,
            Node::ModuleCall {
                children: Some(children),
                ..
            } => children,
            _ => &[],
        }
    }

    /// Name of the statement as written in the script
    pub fn name(&self) -> &str {
        match self {
            Node::Primitive { shape, .. } => shape.name(),
            Node::Transform { op, .. } => op.name(),
            Node::Combinator { op, .. } => op.name(),
            Node::Extrusion { op, .. } => op.name(),
            Node::ModuleCall { name, .. } => name,
            Node::Reference(reference) => reference.kind.keyword(),
            Node::Comment(_) => "comment",
        }
    }
}

/// Leaf shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Cube,
    Sphere,
    Cylinder,
    Polygon,
    Circle,
    Square,
    Import,
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Cube => "cube",
            Shape::Sphere => "sphere",
            Shape::Cylinder => "cylinder",
            Shape::Polygon => "polygon",
            Shape::Circle => "circle",
            Shape::Square => "square",
            Shape::Import => "import",
        }
    }
}

/// Operations applied to their children as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformOp {
    Translate,
    Rotate,
    Mirror,
    Scale,
    Color,
    Resize,
    Offset,
}

impl TransformOp {
    pub fn name(&self) -> &'static str {
        match self {
            TransformOp::Translate => "translate",
            TransformOp::Rotate => "rotate",
            TransformOp::Mirror => "mirror",
            TransformOp::Scale => "scale",
            TransformOp::Color => "color",
            TransformOp::Resize => "resize",
            TransformOp::Offset => "offset",
        }
    }
}

/// Boolean and hull-like combinations; child order is significant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinatorOp {
    Union,
    Difference,
    Intersection,
    Hull,
    Minkowski,
}

impl CombinatorOp {
    pub fn name(&self) -> &'static str {
        match self {
            CombinatorOp::Union => "union",
            CombinatorOp::Difference => "difference",
            CombinatorOp::Intersection => "intersection",
            CombinatorOp::Hull => "hull",
            CombinatorOp::Minkowski => "minkowski",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtrusionOp {
    Linear,
    Rotational,
}

impl ExtrusionOp {
    pub fn name(&self) -> &'static str {
        match self {
            ExtrusionOp::Linear => "linear_extrude",
            ExtrusionOp::Rotational => "rotate_extrude",
        }
    }
}

/// Declaration that an external script file must be loaded.
///
/// Identity is the path string alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleReference {
    pub kind: ReferenceKind,
    pub path: String,
}

impl ModuleReference {
    pub fn new(kind: ReferenceKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// Module and function definitions only
    Use,
    /// Definitions plus the file's top-level statements
    Include,
}

impl ReferenceKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            ReferenceKind::Use => "use",
            ReferenceKind::Include => "include",
        }
    }
}
