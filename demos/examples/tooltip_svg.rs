// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip outlines rendered as SVG.
//!
//! Lays out one tooltip per pointer edge, with pointers sliding from centered
//! toward a corner until they override it, and writes an SVG document to
//! stdout.
//!
//! Run:
//! - `cargo run -p understory_tooltip_demos --example tooltip_svg > tooltips.svg`

use kurbo::{Affine, Rect, Shape, Size, Vec2};
use understory_tooltip::{Pointer, PointerEdge, tooltip_path};

const CELL: Size = Size::new(160.0, 120.0);
const BOX_RADIUS: f64 = 8.0;

fn main() {
    let edges = [
        PointerEdge::Top,
        PointerEdge::Right,
        PointerEdge::Bottom,
        PointerEdge::Left,
    ];
    let offsets = [0.0, -33.0, -50.0];

    println!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        CELL.width * offsets.len() as f64,
        CELL.height * edges.len() as f64
    );

    for (row, edge) in edges.iter().enumerate() {
        for (col, offset) in offsets.iter().enumerate() {
            let pointer = Pointer::new(*edge, Size::new(20.0, 10.0))
                .with_corner_radius(2.0)
                .with_offset(*offset);

            // Reserve room for the pointer inside the cell, then center the cell.
            let frame = Rect::new(0.0, 0.0, 120.0, 80.0);
            let main_rect = pointer.main_rect(frame);
            let path = tooltip_path(main_rect, BOX_RADIUS, &pointer);
            let t = path.triangle();

            let origin = Vec2::new(CELL.width * col as f64 + 20.0, CELL.height * row as f64 + 20.0);
            let mut bez = path.to_bez_path(0.1);
            bez.apply_affine(Affine::translate(origin));

            println!(
                r##"  <path d="{}" fill="#fffbe6" stroke="#333" stroke-width="1"/>"##,
                bez.to_svg()
            );
            println!(
                "  <!-- {edge:?} offset {offset}: ends {:?}/{:?}, overridden {:?}, area {:.1} -->",
                t.end1,
                t.end3,
                t.overridden_corner(),
                path.area()
            );
        }
    }

    println!("</svg>");
}
