// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Grammar check of emitted scripts

use crate::config::{RenderConfig, TransformStyle};
use crate::io::render_to_string;
use crate::recorder::{
    Circle, Color, Cylinder, LinearExtrude, Offset, Polygon, Resize, Rotate, RotateExtrude,
    Sphere, Square,
};
use crate::ast::{Params, Value};
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "io/scad.pest"]
struct ScadGrammar;

fn assert_parses(script: &str) {
    if let Err(err) = ScadGrammar::parse(Rule::program, script) {
        panic!("script does not parse:\n{script}\n{err}");
    }
}

fn count(script: &str, rule: Rule) -> usize {
    ScadGrammar::parse(Rule::program, script)
        .unwrap()
        .flatten()
        .filter(|pair| pair.as_rule() == rule)
        .count()
}

fn full_vocabulary(config: &RenderConfig) -> String {
    render_to_string(config, |s| {
        s.include_file("settings.scad");
        s.comment("Base plate\nwith rounded corners");
        s.difference(|s| {
            s.hull(|s| {
                for (x, y) in [(0.0, 0.0), (20.0, 0.0), (0.0, 20.0), (20.0, 20.0)] {
                    s.translate([x, y, 0.0], |s| {
                        s.cylinder(Cylinder::new(2.0, 3.0).segments(32))
                    });
                }
            });
            s.rotate(Rotate::about(45.0, [0.0, 0.0, 1.0]), |s| {
                s.cube([4.0, 4.0, 10.0]);
            });
            s.use_file("lib/text.scad");
        });
        s.color(Color::rgba(1.0, 0.5, 0.0, 0.8), |s| {
            s.resize(Resize::new(10.0, 0.0, 0.0).auto(true), |s| {
                s.sphere(Sphere::diameter(3.0).param("$fa", 5))
            })
        });
        s.linear_extrude(LinearExtrude::height(2.0).twist(-90.0), |s| {
            s.offset(Offset::radius(0.5), |s| s.square(Square::new(3.0, 1.0).centered()))
        });
        s.rotate_extrude(RotateExtrude::new().angle(270.0), |s| {
            s.translate([5.0, 0.0, 0.0], |s| s.circle(Circle::radius(1.0)))
        });
        s.polygon(Polygon::new(vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]));
        s.mirror([1.0, 0.0, 0.0], |s| s.scale([1.0, 2.0, 1.0], |_| {}));
        s.intersection(|s| s.minkowski(|s| s.import("part.stl")));
        s.call(
            "label",
            Params::new()
                .with("text", "say \"hi\"\n")
                .with("size", Value::Undef)
                .with("flags", vec![true, false]),
        );
        s.call_with("array", Params::new().with("n", 3), |s| s.sphere(1.0));
    })
    .unwrap()
}

#[test]
fn test_full_vocabulary_parses_in_block_form() {
    let config = RenderConfig::default().with_fa(12.0).with_fs(2.0).with_fn(0.0);
    let script = full_vocabulary(&config);
    assert_parses(&script);
    assert_eq!(count(&script, Rule::reference), 2);
    assert_eq!(count(&script, Rule::assignment), 3);
}

#[test]
fn test_full_vocabulary_parses_in_statement_form() {
    let config = RenderConfig::default().with_transform_style(TransformStyle::Statement);
    let script = full_vocabulary(&config);
    assert_parses(&script);
    let blocks = count(&full_vocabulary(&RenderConfig::default()), Rule::block);
    assert!(count(&script, Rule::block) < blocks);
    assert!(script.contains("translate(v = [20, 20, 0])\n      cylinder("));
}

#[test]
fn test_grammar_rejects_malformed_scripts() {
    for bad in [
        "cube(size = 1)",
        "cube(size = 1e3);",
        "union() {",
        "cube(size = [1, 2);",
        "$fa = 1;\nuse <late.scad>\n",
    ] {
        assert!(ScadGrammar::parse(Rule::program, bad).is_err(), "accepted: {bad}");
    }
}
