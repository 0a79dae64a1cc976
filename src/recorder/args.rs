// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Typed arguments for the built-in vocabulary.
//!
//! Each argument type renders to an ordered [`Params`] mapping. Only values
//! that were set are emitted, so the downstream defaults apply to the rest.
//! Every type also accepts arbitrary extra parameters through `param`, which
//! follow the same last-write-wins rule.

use crate::ast::{Params, Value, Vec2, Vec3};

macro_rules! extra_params {
    ($($name:ident),* $(,)?) => {$(
        impl $name {
            /// Set an additional parameter, replacing any earlier value for `name`
            pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
                self.extra.set(name, value);
                self
            }
        }

        impl From<$name> for Params {
            fn from(args: $name) -> Params {
                let mut params = args.base_params();
                params.merge(args.extra);
                params
            }
        }
    )*};
}

extra_params!(
    Cube,
    Sphere,
    Cylinder,
    Circle,
    Square,
    Polygon,
    Import,
    Rotate,
    Color,
    Resize,
    Offset,
    LinearExtrude,
    RotateExtrude,
);

fn set_opt(params: &mut Params, name: &str, value: Option<impl Into<Value>>) {
    if let Some(value) = value {
        params.set(name, value);
    }
}

/// Box, either uniform (`size = s`) or per axis (`size = [x, y, z]`)
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    size: Value,
    center: Option<bool>,
    extra: Params,
}

impl Cube {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::sized(Vec3::new(x, y, z))
    }

    pub fn sized(size: impl Into<Vec3>) -> Self {
        let size: Vec3 = size.into();
        Self {
            size: size.into(),
            center: None,
            extra: Params::new(),
        }
    }

    pub fn side(side: f64) -> Self {
        Self {
            size: Value::Number(side),
            center: None,
            extra: Params::new(),
        }
    }

    pub fn centered(mut self) -> Self {
        self.center = Some(true);
        self
    }

    fn base_params(&self) -> Params {
        let mut params = Params::new().with("size", self.size.clone());
        set_opt(&mut params, "center", self.center);
        params
    }
}

impl From<f64> for Cube {
    fn from(side: f64) -> Self {
        Cube::side(side)
    }
}

impl From<[f64; 3]> for Cube {
    fn from(size: [f64; 3]) -> Self {
        Cube::sized(size)
    }
}

impl From<Vec3> for Cube {
    fn from(size: Vec3) -> Self {
        Cube::sized(size)
    }
}

/// Radius or diameter of a round shape
#[derive(Debug, Clone, Copy, PartialEq)]
enum Round {
    Radius(f64),
    Diameter(f64),
}

impl Round {
    fn apply(&self, params: &mut Params) {
        match *self {
            Round::Radius(r) => params.set("r", r),
            Round::Diameter(d) => params.set("d", d),
        };
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    size: Round,
    segments: Option<u32>,
    extra: Params,
}

impl Sphere {
    pub fn radius(r: f64) -> Self {
        Self {
            size: Round::Radius(r),
            segments: None,
            extra: Params::new(),
        }
    }

    pub fn diameter(d: f64) -> Self {
        Self {
            size: Round::Diameter(d),
            segments: None,
            extra: Params::new(),
        }
    }

    /// Fixed fragment count (`$fn`) for this sphere only
    pub fn segments(mut self, n: u32) -> Self {
        self.segments = Some(n);
        self
    }

    fn base_params(&self) -> Params {
        let mut params = Params::new();
        self.size.apply(&mut params);
        set_opt(&mut params, "$fn", self.segments);
        params
    }
}

impl From<f64> for Sphere {
    fn from(r: f64) -> Self {
        Sphere::radius(r)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum CylinderSize {
    Uniform(Round),
    Cone(f64, f64),
}

/// Cylinder or truncated cone standing on the XY plane
#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder {
    height: f64,
    size: CylinderSize,
    center: Option<bool>,
    segments: Option<u32>,
    extra: Params,
}

impl Cylinder {
    pub fn new(height: f64, radius: f64) -> Self {
        Self::with_size(height, CylinderSize::Uniform(Round::Radius(radius)))
    }

    pub fn diameter(height: f64, diameter: f64) -> Self {
        Self::with_size(height, CylinderSize::Uniform(Round::Diameter(diameter)))
    }

    /// Cone with bottom radius `r1` and top radius `r2`
    pub fn cone(height: f64, r1: f64, r2: f64) -> Self {
        Self::with_size(height, CylinderSize::Cone(r1, r2))
    }

    fn with_size(height: f64, size: CylinderSize) -> Self {
        Self {
            height,
            size,
            center: None,
            segments: None,
            extra: Params::new(),
        }
    }

    pub fn centered(mut self) -> Self {
        self.center = Some(true);
        self
    }

    pub fn segments(mut self, n: u32) -> Self {
        self.segments = Some(n);
        self
    }

    fn base_params(&self) -> Params {
        let mut params = Params::new().with("h", self.height);
        match &self.size {
            CylinderSize::Uniform(round) => round.apply(&mut params),
            CylinderSize::Cone(r1, r2) => {
                params.set("r1", *r1).set("r2", *r2);
            }
        }
        set_opt(&mut params, "center", self.center);
        set_opt(&mut params, "$fn", self.segments);
        params
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    size: Round,
    segments: Option<u32>,
    extra: Params,
}

impl Circle {
    pub fn radius(r: f64) -> Self {
        Self {
            size: Round::Radius(r),
            segments: None,
            extra: Params::new(),
        }
    }

    pub fn diameter(d: f64) -> Self {
        Self {
            size: Round::Diameter(d),
            segments: None,
            extra: Params::new(),
        }
    }

    pub fn segments(mut self, n: u32) -> Self {
        self.segments = Some(n);
        self
    }

    fn base_params(&self) -> Params {
        let mut params = Params::new();
        self.size.apply(&mut params);
        set_opt(&mut params, "$fn", self.segments);
        params
    }
}

impl From<f64> for Circle {
    fn from(r: f64) -> Self {
        Circle::radius(r)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    size: Value,
    center: Option<bool>,
    extra: Params,
}

impl Square {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Vec2::new(width, height).into(),
            center: None,
            extra: Params::new(),
        }
    }

    pub fn side(side: f64) -> Self {
        Self {
            size: Value::Number(side),
            center: None,
            extra: Params::new(),
        }
    }

    pub fn centered(mut self) -> Self {
        self.center = Some(true);
        self
    }

    fn base_params(&self) -> Params {
        let mut params = Params::new().with("size", self.size.clone());
        set_opt(&mut params, "center", self.center);
        params
    }
}

impl From<f64> for Square {
    fn from(side: f64) -> Self {
        Square::side(side)
    }
}

/// Closed 2D outline; `paths` selects and orders points for holes
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Vec2>,
    paths: Option<Vec<Vec<usize>>>,
    convexity: Option<u32>,
    extra: Params,
}

impl Polygon {
    pub fn new<P: Into<Vec2>>(points: impl IntoIterator<Item = P>) -> Self {
        Self {
            points: points.into_iter().map(Into::into).collect(),
            paths: None,
            convexity: None,
            extra: Params::new(),
        }
    }

    pub fn paths(mut self, paths: Vec<Vec<usize>>) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn convexity(mut self, convexity: u32) -> Self {
        self.convexity = Some(convexity);
        self
    }

    fn base_params(&self) -> Params {
        let mut params = Params::new().with("points", self.points.clone());
        set_opt(&mut params, "paths", self.paths.clone());
        set_opt(&mut params, "convexity", self.convexity);
        params
    }
}

/// External geometry file; the path is passed through verbatim
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    file: String,
    center: Option<bool>,
    convexity: Option<u32>,
    extra: Params,
}

impl Import {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            file: path.into(),
            center: None,
            convexity: None,
            extra: Params::new(),
        }
    }

    pub fn centered(mut self) -> Self {
        self.center = Some(true);
        self
    }

    pub fn convexity(mut self, convexity: u32) -> Self {
        self.convexity = Some(convexity);
        self
    }

    fn base_params(&self) -> Params {
        let mut params = Params::new().with("file", self.file.as_str());
        set_opt(&mut params, "center", self.center);
        set_opt(&mut params, "convexity", self.convexity);
        params
    }
}

impl From<&str> for Import {
    fn from(path: &str) -> Self {
        Import::file(path)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Rotation {
    Euler(Vec3),
    Axis(f64, Vec3),
}

/// Rotation in degrees; axes left unset stay at 0
#[derive(Debug, Clone, PartialEq)]
pub struct Rotate {
    rotation: Rotation,
    extra: Params,
}

impl Default for Rotate {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Rotate {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            rotation: Rotation::Euler(Vec3::new(x, y, z)),
            extra: Params::new(),
        }
    }

    /// Rotate `angle` degrees around an arbitrary `axis`
    pub fn about(angle: f64, axis: impl Into<Vec3>) -> Self {
        Self {
            rotation: Rotation::Axis(angle, axis.into()),
            extra: Params::new(),
        }
    }

    pub fn x(self, angle: f64) -> Self {
        self.axis(0, angle)
    }

    pub fn y(self, angle: f64) -> Self {
        self.axis(1, angle)
    }

    pub fn z(self, angle: f64) -> Self {
        self.axis(2, angle)
    }

    fn axis(mut self, index: usize, angle: f64) -> Self {
        let mut angles = match self.rotation {
            Rotation::Euler(angles) => angles,
            Rotation::Axis(..) => Vec3::zeros(),
        };
        angles[index] = angle;
        self.rotation = Rotation::Euler(angles);
        self
    }

    fn base_params(&self) -> Params {
        match &self.rotation {
            Rotation::Euler(angles) => Params::new().with("a", *angles),
            Rotation::Axis(angle, axis) => Params::new().with("a", *angle).with("v", *axis),
        }
    }
}

impl From<[f64; 3]> for Rotate {
    fn from(angles: [f64; 3]) -> Self {
        Rotate::new(angles[0], angles[1], angles[2])
    }
}

impl From<Vec3> for Rotate {
    fn from(angles: Vec3) -> Self {
        Rotate::new(angles.x, angles.y, angles.z)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    color: Value,
    alpha: Option<f64>,
    extra: Params,
}

impl Color {
    /// Named or `#rrggbb` color
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            color: Value::Str(name.into()),
            alpha: None,
            extra: Params::new(),
        }
    }

    /// Components in `0..=1`
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            color: [r, g, b].into(),
            alpha: None,
            extra: Params::new(),
        }
    }

    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            color: [r, g, b, a].into(),
            alpha: None,
            extra: Params::new(),
        }
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    fn base_params(&self) -> Params {
        let mut params = Params::new().with("c", self.color.clone());
        set_opt(&mut params, "alpha", self.alpha);
        params
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::named(name)
    }
}

/// Resize to absolute dimensions; a 0 entry leaves that axis alone unless
/// `auto` scales it to keep the aspect ratio
#[derive(Debug, Clone, PartialEq)]
pub struct Resize {
    size: Vec3,
    auto: Option<Value>,
    extra: Params,
}

impl Resize {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            size: Vec3::new(x, y, z),
            auto: None,
            extra: Params::new(),
        }
    }

    pub fn auto(mut self, auto: bool) -> Self {
        self.auto = Some(Value::Bool(auto));
        self
    }

    /// Per-axis `auto` flags
    pub fn auto_axes(mut self, axes: [bool; 3]) -> Self {
        self.auto = Some(axes.into());
        self
    }

    fn base_params(&self) -> Params {
        let mut params = Params::new().with("newsize", self.size);
        set_opt(&mut params, "auto", self.auto.clone());
        params
    }
}

impl From<[f64; 3]> for Resize {
    fn from(size: [f64; 3]) -> Self {
        Resize::new(size[0], size[1], size[2])
    }
}

/// 2D outline inset/outset
#[derive(Debug, Clone, PartialEq)]
pub struct Offset {
    amount: Offsetting,
    chamfer: Option<bool>,
    extra: Params,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Offsetting {
    Radius(f64),
    Delta(f64),
}

impl Offset {
    /// Rounded offset
    pub fn radius(r: f64) -> Self {
        Self {
            amount: Offsetting::Radius(r),
            chamfer: None,
            extra: Params::new(),
        }
    }

    /// Sharp-cornered offset
    pub fn delta(delta: f64) -> Self {
        Self {
            amount: Offsetting::Delta(delta),
            chamfer: None,
            extra: Params::new(),
        }
    }

    pub fn chamfer(mut self, chamfer: bool) -> Self {
        self.chamfer = Some(chamfer);
        self
    }

    fn base_params(&self) -> Params {
        let mut params = match self.amount {
            Offsetting::Radius(r) => Params::new().with("r", r),
            Offsetting::Delta(d) => Params::new().with("delta", d),
        };
        set_opt(&mut params, "chamfer", self.chamfer);
        params
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinearExtrude {
    height: f64,
    center: Option<bool>,
    twist: Option<f64>,
    slices: Option<u32>,
    scale: Option<Value>,
    convexity: Option<u32>,
    extra: Params,
}

impl LinearExtrude {
    pub fn height(height: f64) -> Self {
        Self {
            height,
            center: None,
            twist: None,
            slices: None,
            scale: None,
            convexity: None,
            extra: Params::new(),
        }
    }

    pub fn centered(mut self) -> Self {
        self.center = Some(true);
        self
    }

    /// Total twist in degrees over the extrusion height
    pub fn twist(mut self, degrees: f64) -> Self {
        self.twist = Some(degrees);
        self
    }

    pub fn slices(mut self, slices: u32) -> Self {
        self.slices = Some(slices);
        self
    }

    /// Scale of the top face, uniform or `[x, y]`
    pub fn scale(mut self, scale: impl Into<Value>) -> Self {
        self.scale = Some(scale.into());
        self
    }

    pub fn convexity(mut self, convexity: u32) -> Self {
        self.convexity = Some(convexity);
        self
    }

    fn base_params(&self) -> Params {
        let mut params = Params::new().with("height", self.height);
        set_opt(&mut params, "center", self.center);
        set_opt(&mut params, "twist", self.twist);
        set_opt(&mut params, "slices", self.slices);
        set_opt(&mut params, "scale", self.scale.clone());
        set_opt(&mut params, "convexity", self.convexity);
        params
    }
}

impl From<f64> for LinearExtrude {
    fn from(height: f64) -> Self {
        LinearExtrude::height(height)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RotateExtrude {
    angle: Option<f64>,
    convexity: Option<u32>,
    segments: Option<u32>,
    extra: Params,
}

impl RotateExtrude {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sweep angle in degrees (full turn when unset)
    pub fn angle(mut self, degrees: f64) -> Self {
        self.angle = Some(degrees);
        self
    }

    pub fn convexity(mut self, convexity: u32) -> Self {
        self.convexity = Some(convexity);
        self
    }

    pub fn segments(mut self, n: u32) -> Self {
        self.segments = Some(n);
        self
    }

    fn base_params(&self) -> Params {
        let mut params = Params::new();
        set_opt(&mut params, "angle", self.angle);
        set_opt(&mut params, "convexity", self.convexity);
        set_opt(&mut params, "$fn", self.segments);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(params: &Params) -> Vec<&str> {
        params.iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn test_unset_options_are_omitted() {
        let params: Params = Cylinder::new(10.0, 2.0).into();
        assert_eq!(names(&params), vec!["h", "r"]);

        let params: Params = Cylinder::cone(10.0, 2.0, 1.0).centered().segments(48).into();
        assert_eq!(names(&params), vec!["h", "r1", "r2", "center", "$fn"]);
    }

    #[test]
    fn test_extra_param_overrides_typed_value() {
        let params: Params = Sphere::radius(3.0).segments(16).param("$fn", 64).into();
        assert_eq!(names(&params), vec!["r", "$fn"]);
        assert_eq!(params.get("$fn"), Some(&Value::Number(64.0)));
    }

    #[test]
    fn test_rotate_defaults_to_zero() {
        let params: Params = Rotate::default().z(90.0).x(45.0).into();
        assert_eq!(params.get("a"), Some(&Value::from([45.0, 0.0, 90.0])));

        let params: Params = Rotate::about(30.0, [0.0, 0.0, 1.0]).into();
        assert_eq!(names(&params), vec!["a", "v"]);
    }

    #[test]
    fn test_resize_auto() {
        let params: Params = Resize::new(40.0, 0.0, 0.0).auto(true).into();
        assert_eq!(params.get("newsize"), Some(&Value::from([40.0, 0.0, 0.0])));
        assert_eq!(params.get("auto"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_polygon_points() {
        let params: Params = Polygon::new([[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]])
            .paths(vec![vec![0, 1, 2]])
            .into();
        assert_eq!(names(&params), vec!["points", "paths"]);
        assert_eq!(
            params.get("paths"),
            Some(&Value::Vector(vec![Value::from(vec![0usize, 1, 2])]))
        );
    }
}
