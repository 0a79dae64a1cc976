// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Scadforge
//!
//! Builds OpenSCAD scripts from ordinary Rust code. Nested closures describe a
//! CSG tree; the tree is rendered as indented script text with every external
//! library reference hoisted to the top.
//!
//! ```
//! use scadforge::{render_to_string, RenderConfig};
//!
//! let script = render_to_string(&RenderConfig::default(), |s| {
//!     s.difference(|s| {
//!         s.cube([10.0, 10.0, 10.0]);
//!         s.sphere(6.0);
//!     });
//! })
//! .unwrap();
//!
//! assert_eq!(
//!     script,
//!     "difference() {\n  cube(size = [10, 10, 10]);\n  sphere(r = 6);\n}\n"
//! );
//! ```

pub mod ast;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod recorder;

pub use ast::{
    collect_references, CombinatorOp, ExtrusionOp, ModuleReference, Node, Params, ReferenceKind,
    Shape, TransformOp, Value, Vec2, Vec3,
};
pub use config::{RenderConfig, Resolution, TransformStyle};
pub use error::{ErrorKind, ScadError};
pub use io::{format_number, load_tree, render_to_string, write_scad, Document};
pub use recorder::{
    Circle, Color, Cube, Cylinder, Import, LinearExtrude, Offset, Outcome, Polygon, Recorder,
    Resize, Rotate, RotateExtrude, Sphere, Square,
};
