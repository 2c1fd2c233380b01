// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Tooltip: Kurbo-native tooltip outline geometry.
//!
//! This crate builds the outline of a tooltip: a rounded box with a pointer
//! protruding from one of its edges. It is headless. It does not lay out
//! content, position the tooltip relative to its target, or render anything.
//! Callers pass the box rectangle and a [`Pointer`] and get back a closed
//! [`TooltipPath`] that any kurbo-consuming renderer can fill or stroke.
//!
//! ## Pointer placement
//!
//! The pointer is centered on its edge and shifted by [`Pointer::offset`].
//! Where it would collide with a rounded box corner it is clamped:
//!
//! - If its base reaches into a corner's rounding zone, the base is moved to
//!   the end of the straight part of the edge and the apex is aligned with
//!   that end, giving a right-angled pointer. See [`PointerEnd::OffCenter`].
//! - If its base would extend past the box corner itself, it is clamped to the
//!   corner, and that corner is drawn sharp and merged into the pointer. See
//!   [`PointerEnd::Overridden`] and [`TriangleGeometry::overridden_corner`].
//!
//! With a non-zero [`Pointer::corner_radius`] the apex is always rounded, and
//! the base vertices are rounded unless they were clamped against an edge.
//!
//! ## Preconditions
//!
//! Inputs are assumed finite, with a non-negative box corner radius and pointer
//! size. The box corner radius should not exceed half of the box's smaller
//! dimension. None of this is checked: out-of-range values still produce a
//! closed outline, just not a pretty one.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Shape, Size};
//! use understory_tooltip::{Pointer, PointerEdge, tooltip_path};
//!
//! let main_rect = Rect::new(0.0, 0.0, 100.0, 60.0);
//! let pointer = Pointer::new(PointerEdge::Top, Size::new(20.0, 10.0));
//! let path = tooltip_path(main_rect, 8.0, &pointer);
//!
//! let t = path.triangle();
//! assert_eq!(t.point1, Point::new(40.0, 0.0));
//! assert_eq!(t.point2, Point::new(50.0, -10.0));
//! assert_eq!(t.point3, Point::new(60.0, 0.0));
//!
//! assert!(path.is_closed());
//! assert!(path.contains(Point::new(50.0, -5.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc` when the default `std` feature is
//! disabled; enable `libm` instead for float math without the standard library.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use core::f64::consts::{FRAC_PI_2, PI};

use kurbo::{Point, Rect};

mod path;
mod pointer;
mod triangle;

pub use path::{OutlineEl, TooltipPath};
pub use pointer::{Pointer, PointerEdge};
pub use triangle::{Corner, PointerEnd, TriangleGeometry};

use path::OutlineBuilder;

/// Build the outline of a tooltip box `main_rect` with corners rounded by
/// `box_corner_radius` and `pointer` protruding from one edge.
///
/// The outline starts at the top-left corner and runs clockwise: top-left
/// corner, top edge, top-right corner, right edge, and so on, with the pointer
/// inserted on its edge. Corners overridden by the pointer are drawn sharp.
/// The result always ends with [`OutlineEl::ClosePath`].
#[must_use]
pub fn tooltip_path(main_rect: Rect, box_corner_radius: f64, pointer: &Pointer) -> TooltipPath {
    let rect = main_rect.abs();
    let r = box_corner_radius;
    let triangle = TriangleGeometry::new(pointer, rect, r);
    let mut b = OutlineBuilder::new();

    if triangle.overrides(Corner::TopLeft) {
        b.move_to(Point::new(rect.min_x(), rect.min_y()));
    } else {
        b.corner(Point::new(rect.min_x() + r, rect.min_y() + r), r, PI);
    }
    if pointer.edge == PointerEdge::Top {
        add_triangle(&mut b, &triangle);
    }

    if !triangle.overrides(Corner::TopRight) {
        b.corner(
            Point::new(rect.max_x() - r, rect.min_y() + r),
            r,
            3.0 * FRAC_PI_2,
        );
    }
    if pointer.edge == PointerEdge::Right {
        add_triangle(&mut b, &triangle);
    }

    if !triangle.overrides(Corner::BottomRight) {
        b.corner(Point::new(rect.max_x() - r, rect.max_y() - r), r, 0.0);
    }
    if pointer.edge == PointerEdge::Bottom {
        add_triangle(&mut b, &triangle);
    }

    if !triangle.overrides(Corner::BottomLeft) {
        b.corner(Point::new(rect.min_x() + r, rect.max_y() - r), r, FRAC_PI_2);
    }
    if pointer.edge == PointerEdge::Left {
        add_triangle(&mut b, &triangle);
    }

    b.close();
    b.finish(triangle)
}

fn add_triangle(b: &mut OutlineBuilder, t: &TriangleGeometry) {
    if t.corner_radius == 0.0 {
        b.line_to(t.point1);
        b.line_to(t.point2);
        b.line_to(t.point3);
        return;
    }

    if t.end1.is_off_center() {
        // Sits on the straight edge; nothing to round against.
        b.line_to(t.point1);
    } else {
        b.arc_to(t.point1, t.point2, t.corner_radius);
    }

    b.arc_to(t.point2, t.point3, t.corner_radius);

    if t.end3.is_off_center() {
        b.line_to(t.point3);
    } else {
        b.arc_to(t.point3, t.point4, t.corner_radius);
    }
}
