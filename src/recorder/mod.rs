// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Recorder module
//!
//! Turns nested closure calls into an ordered CSG tree

mod args;
mod session;
mod vocabulary;

pub use args::{
    Circle, Color, Cube, Cylinder, Import, LinearExtrude, Offset, Polygon, Resize, Rotate,
    RotateExtrude, Sphere, Square,
};
pub use session::{Outcome, Recorder};
