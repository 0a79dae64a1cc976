// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! End-to-end recording and emission tests

use scadforge::{
    render_to_string, write_scad, Circle, Cylinder, Document, ErrorKind, Node, RenderConfig,
    Rotate, Square, TransformStyle,
};

fn render(compose: impl FnOnce(&mut scadforge::Recorder)) -> String {
    render_to_string(&RenderConfig::default(), compose).unwrap()
}

#[test]
fn test_difference_of_box_and_sphere() {
    let script = render(|s| {
        s.difference(|s| {
            s.cube([10.0, 10.0, 10.0]);
            s.sphere(3.0);
        })
    });

    assert_eq!(
        script,
        "difference() {\n  cube(size = [10, 10, 10]);\n  sphere(r = 3);\n}\n"
    );
    assert!(!script.contains("use <"));
}

#[test]
fn test_sibling_references_hoisted_once() {
    let script = render(|s| {
        s.union(|s| {
            s.use_file("foo.ext");
            s.call("foo", scadforge::Params::new());
        });
        s.translate([0.0, 0.0, 5.0], |s| {
            s.hull(|s| s.use_file("foo.ext"));
        });
    });

    assert_eq!(script.matches("foo.ext").count(), 1);
    assert_eq!(
        script,
        "use <foo.ext>\n\nunion() {\n  foo();\n}\ntranslate(v = [0, 0, 5]) {\n  hull() {}\n}\n"
    );
}

#[test]
fn test_statement_order_follows_control_flow() {
    let script = render(|s| {
        for i in 0..4 {
            if i == 2 {
                s.comment("skipped two");
                continue;
            }
            s.translate([i as f64, 0.0, 0.0], |s| s.sphere(0.5));
        }
    });

    let order: Vec<&str> = script
        .lines()
        .filter(|l| !l.starts_with(' ') && *l != "}")
        .collect();
    assert_eq!(
        order,
        vec![
            "translate(v = [0, 0, 0]) {",
            "translate(v = [1, 0, 0]) {",
            "// skipped two",
            "translate(v = [3, 0, 0]) {",
        ]
    );
}

#[test]
fn test_rounded_square_hull() {
    let (w, h, r) = (20.0, 10.0, 2.0);
    let script = render(|s| {
        s.linear_extrude(3.0, |s| {
            s.hull(|s| {
                for x in [r, w - r] {
                    for y in [r, h - r] {
                        s.translate([x, y, 0.0], |s| s.circle(Circle::radius(r).segments(24)));
                    }
                }
            })
        })
    });

    assert!(script.starts_with("linear_extrude(height = 3) {\n  hull() {\n"));
    assert_eq!(script.matches("circle(r = 2, $fn = 24);").count(), 4);
    assert!(script.contains("    translate(v = [18, 8, 0]) {\n      circle("));
    assert!(script.ends_with("    }\n  }\n}\n"));
}

fn branch(s: &mut scadforge::Recorder, length: f64, depth: u32) {
    s.cylinder(Cylinder::new(length, length / 10.0));
    if depth == 0 {
        return;
    }
    for angle in [-30.0, 30.0] {
        s.translate([0.0, 0.0, length], |s| {
            s.rotate(Rotate::default().x(angle), |s| branch(s, length * 0.7, depth - 1))
        });
    }
}

#[test]
fn test_recursive_composition() {
    let document = Document::record(RenderConfig::default(), |s| branch(s, 10.0, 3)).unwrap();
    // 1 + 2 + 4 + 8 cylinders, each non-root one under a translate and a rotate
    assert_eq!(document.node_count(), 15 + 14 * 2);

    let script = document.render().unwrap();
    assert_eq!(script.matches("cylinder(").count(), 15);
    assert!(script.contains("cylinder(h = 3.43, r = 0.343);"));
}

#[test]
fn test_statement_form_configuration() {
    let config = RenderConfig::default().with_transform_style(TransformStyle::Statement);
    let script = render_to_string(&config, |s| {
        s.translate([1.0, 2.0, 3.0], |s| s.square(Square::side(2.0).centered()));
    })
    .unwrap();
    assert_eq!(
        script,
        "translate(v = [1, 2, 3])\n  square(size = 2, center = true);\n"
    );
}

#[test]
fn test_resolution_header() {
    let config = RenderConfig::default().with_fa(12.0).with_fs(2.0);
    let script = render_to_string(&config, |s| {
        s.include_file("common.scad");
        s.sphere(1.0);
    })
    .unwrap();
    assert_eq!(
        script,
        "include <common.scad>\n\n$fa = 12;\n$fs = 2;\n\nsphere(r = 1);\n"
    );
}

#[test]
fn test_empty_document() {
    assert_eq!(render(|_| {}), "");
}

#[test]
fn test_failed_subtree_is_discarded() {
    let document = Document::record(RenderConfig::default(), |s| {
        s.union(|s| {
            s.cube(1.0);
            let result: Result<(), &str> = s.translate([1.0, 0.0, 0.0], |s| {
                s.sphere(1.0);
                Err("out of range")
            });
            assert!(result.is_err());
            s.cube(2.0);
        });
    })
    .unwrap();

    let union = &document.roots()[0];
    assert_eq!(union.children().len(), 2);
    assert!(union.children().iter().all(|n| matches!(n, Node::Primitive { .. })));
}

#[test]
fn test_value_errors_leave_sink_empty() {
    let mut sink = Vec::new();
    let err = write_scad(&mut sink, &RenderConfig::default(), |s| {
        s.translate([f64::INFINITY, 0.0, 0.0], |s| s.cube(1.0));
    })
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Value);
    assert!(err.to_string().contains("v[0]"));
    assert!(sink.is_empty());
}
