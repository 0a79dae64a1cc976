// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! The fixed construction vocabulary recorded by a [`Recorder`]

use super::args::{
    Circle, Color, Cube, Cylinder, Import, LinearExtrude, Offset, Polygon, Resize, Rotate,
    RotateExtrude, Sphere, Square,
};
use super::{Outcome, Recorder};
use crate::ast::{
    CombinatorOp, ExtrusionOp, ModuleReference, Node, Params, ReferenceKind, Shape, TransformOp,
    Vec3,
};

impl Recorder {
    // Primitives

    pub fn primitive(&mut self, shape: Shape, params: impl Into<Params>) {
        self.record(Node::primitive(shape, params.into()));
    }

    pub fn cube(&mut self, args: impl Into<Cube>) {
        self.primitive(Shape::Cube, args.into());
    }

    pub fn sphere(&mut self, args: impl Into<Sphere>) {
        self.primitive(Shape::Sphere, args.into());
    }

    pub fn cylinder(&mut self, args: Cylinder) {
        self.primitive(Shape::Cylinder, args);
    }

    pub fn polygon(&mut self, args: Polygon) {
        self.primitive(Shape::Polygon, args);
    }

    pub fn circle(&mut self, args: impl Into<Circle>) {
        self.primitive(Shape::Circle, args.into());
    }

    pub fn square(&mut self, args: impl Into<Square>) {
        self.primitive(Shape::Square, args.into());
    }

    pub fn import(&mut self, args: impl Into<Import>) {
        self.primitive(Shape::Import, args.into());
    }

    // Transforms

    pub fn transform<R: Outcome>(
        &mut self,
        op: TransformOp,
        params: impl Into<Params>,
        body: impl FnOnce(&mut Recorder) -> R,
    ) -> R {
        let params = params.into();
        self.scoped(
            move |children| Node::Transform {
                op,
                params,
                children,
            },
            body,
        )
    }

    pub fn translate<R: Outcome>(
        &mut self,
        v: impl Into<Vec3>,
        body: impl FnOnce(&mut Recorder) -> R,
    ) -> R {
        let v: Vec3 = v.into();
        self.transform(TransformOp::Translate, Params::new().with("v", v), body)
    }

    pub fn rotate<R: Outcome>(
        &mut self,
        args: impl Into<Rotate>,
        body: impl FnOnce(&mut Recorder) -> R,
    ) -> R {
        self.transform(TransformOp::Rotate, args.into(), body)
    }

    /// Mirror across the plane through the origin with normal `v`
    pub fn mirror<R: Outcome>(
        &mut self,
        v: impl Into<Vec3>,
        body: impl FnOnce(&mut Recorder) -> R,
    ) -> R {
        let v: Vec3 = v.into();
        self.transform(TransformOp::Mirror, Params::new().with("v", v), body)
    }

    pub fn scale<R: Outcome>(
        &mut self,
        v: impl Into<Vec3>,
        body: impl FnOnce(&mut Recorder) -> R,
    ) -> R {
        let v: Vec3 = v.into();
        self.transform(TransformOp::Scale, Params::new().with("v", v), body)
    }

    pub fn color<R: Outcome>(
        &mut self,
        args: impl Into<Color>,
        body: impl FnOnce(&mut Recorder) -> R,
    ) -> R {
        self.transform(TransformOp::Color, args.into(), body)
    }

    pub fn resize<R: Outcome>(
        &mut self,
        args: impl Into<Resize>,
        body: impl FnOnce(&mut Recorder) -> R,
    ) -> R {
        self.transform(TransformOp::Resize, args.into(), body)
    }

    pub fn offset<R: Outcome>(&mut self, args: Offset, body: impl FnOnce(&mut Recorder) -> R) -> R {
        self.transform(TransformOp::Offset, args, body)
    }

    // Combinators

    pub fn combine<R: Outcome>(
        &mut self,
        op: CombinatorOp,
        body: impl FnOnce(&mut Recorder) -> R,
    ) -> R {
        self.scoped(move |children| Node::Combinator { op, children }, body)
    }

    pub fn union<R: Outcome>(&mut self, body: impl FnOnce(&mut Recorder) -> R) -> R {
        self.combine(CombinatorOp::Union, body)
    }

    /// Everything after the first child is subtracted from the first
    pub fn difference<R: Outcome>(&mut self, body: impl FnOnce(&mut Recorder) -> R) -> R {
        self.combine(CombinatorOp::Difference, body)
    }

    pub fn intersection<R: Outcome>(&mut self, body: impl FnOnce(&mut Recorder) -> R) -> R {
        self.combine(CombinatorOp::Intersection, body)
    }

    pub fn hull<R: Outcome>(&mut self, body: impl FnOnce(&mut Recorder) -> R) -> R {
        self.combine(CombinatorOp::Hull, body)
    }

    pub fn minkowski<R: Outcome>(&mut self, body: impl FnOnce(&mut Recorder) -> R) -> R {
        self.combine(CombinatorOp::Minkowski, body)
    }

    // Extrusions

    pub fn extrude<R: Outcome>(
        &mut self,
        op: ExtrusionOp,
        params: impl Into<Params>,
        body: impl FnOnce(&mut Recorder) -> R,
    ) -> R {
        let params = params.into();
        self.scoped(
            move |children| Node::Extrusion {
                op,
                params,
                children,
            },
            body,
        )
    }

    pub fn linear_extrude<R: Outcome>(
        &mut self,
        args: impl Into<LinearExtrude>,
        body: impl FnOnce(&mut Recorder) -> R,
    ) -> R {
        self.extrude(ExtrusionOp::Linear, args.into(), body)
    }

    pub fn rotate_extrude<R: Outcome>(
        &mut self,
        args: RotateExtrude,
        body: impl FnOnce(&mut Recorder) -> R,
    ) -> R {
        self.extrude(ExtrusionOp::Rotational, args, body)
    }

    // Modules

    /// Call a module defined in a referenced file
    pub fn call(&mut self, name: impl Into<String>, params: impl Into<Params>) {
        self.record(Node::ModuleCall {
            name: name.into(),
            params: params.into(),
            children: None,
        });
    }

    /// Call a module that takes a body block
    pub fn call_with<R: Outcome>(
        &mut self,
        name: impl Into<String>,
        params: impl Into<Params>,
        body: impl FnOnce(&mut Recorder) -> R,
    ) -> R {
        let name = name.into();
        let params = params.into();
        self.scoped(
            move |children| Node::ModuleCall {
                name,
                params,
                children: Some(children),
            },
            body,
        )
    }

    /// Make the definitions of `path` available (`use <path>`)
    pub fn use_file(&mut self, path: impl Into<String>) {
        self.record(Node::Reference(ModuleReference::new(ReferenceKind::Use, path)));
    }

    /// Make the definitions of `path` available and run its top level
    /// statements (`include <path>`)
    pub fn include_file(&mut self, path: impl Into<String>) {
        self.record(Node::Reference(ModuleReference::new(
            ReferenceKind::Include,
            path,
        )));
    }

    pub fn comment(&mut self, text: impl Into<String>) {
        self.record(Node::comment(text));
    }
}
