// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Abstract Syntax Tree module
//!
//! Defines the tree recorded from client code and later emitted as script text

mod collector;
mod node;
mod value;

pub use collector::collect_references;
pub use node::{
    CombinatorOp, ExtrusionOp, ModuleReference, Node, ReferenceKind, Shape, TransformOp,
};
pub use value::{Params, Value};

/// 3D Vector type alias
pub type Vec3 = nalgebra::Vector3<f64>;

/// 2D Vector type alias
pub type Vec2 = nalgebra::Vector2<f64>;
