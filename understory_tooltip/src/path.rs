// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outline elements and the kurbo [`Shape`] view of a tooltip outline.

use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, PI};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Arc, BezPath, PathEl, Point, Rect, Shape, Vec2};
use smallvec::SmallVec;

use crate::triangle::TriangleGeometry;

/// Below this, points are treated as coincident and legs as collinear.
const EPSILON: f64 = 1e-9;

/// Tolerance used when [`Shape`] queries need a flattened path.
const SHAPE_TOLERANCE: f64 = 1e-3;

/// One drawing instruction of a tooltip outline.
///
/// Arcs start at the current point: the builder always emits a line to an
/// arc's start point first when the two differ.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutlineEl {
    /// Start the outline at a point.
    MoveTo(Point),
    /// Straight line to a point.
    LineTo(Point),
    /// Circular arc given by center, radius, start angle and sweep.
    ///
    /// Angles are in radians; a positive sweep turns clockwise on screen
    /// (y down).
    Arc(Arc),
    /// Straight line back to the start, closing the outline.
    ClosePath,
}

/// A closed tooltip outline, traced clockwise from the top-left corner.
///
/// Produced by [`tooltip_path`](crate::tooltip_path). The outline keeps the
/// exact arcs it was built from; use [`TooltipPath::to_bez_path`] or the
/// [`Shape`] implementation to get cubic Béziers for rendering.
#[derive(Clone, Debug)]
pub struct TooltipPath {
    pub(crate) elements: SmallVec<[OutlineEl; 16]>,
    pub(crate) triangle: TriangleGeometry,
}

impl TooltipPath {
    /// Drawing instructions in order.
    #[must_use]
    pub fn elements(&self) -> &[OutlineEl] {
        &self.elements
    }

    /// Pointer geometry the outline was built from.
    #[must_use]
    pub fn triangle(&self) -> &TriangleGeometry {
        &self.triangle
    }

    /// Whether the outline ends with a close instruction.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.elements.last(), Some(OutlineEl::ClosePath))
    }

    /// Flatten into a [`BezPath`], approximating arcs within `tolerance`.
    #[must_use]
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        BezPath::from_vec(self.flatten(tolerance))
    }

    fn flatten(&self, tolerance: f64) -> Vec<PathEl> {
        let mut out = Vec::with_capacity(self.elements.len() * 2);
        for el in &self.elements {
            match *el {
                OutlineEl::MoveTo(p) => out.push(PathEl::MoveTo(p)),
                OutlineEl::LineTo(p) => out.push(PathEl::LineTo(p)),
                OutlineEl::Arc(arc) => out.extend(arc.append_iter(tolerance)),
                OutlineEl::ClosePath => out.push(PathEl::ClosePath),
            }
        }
        out
    }
}

impl Shape for TooltipPath {
    type PathElementsIter<'iter> = alloc::vec::IntoIter<PathEl>;

    fn path_elements(&self, tolerance: f64) -> Self::PathElementsIter<'_> {
        self.flatten(tolerance).into_iter()
    }

    fn area(&self) -> f64 {
        self.to_bez_path(SHAPE_TOLERANCE).area()
    }

    fn perimeter(&self, accuracy: f64) -> f64 {
        self.to_bez_path(SHAPE_TOLERANCE).perimeter(accuracy)
    }

    fn winding(&self, pt: Point) -> i32 {
        self.to_bez_path(SHAPE_TOLERANCE).winding(pt)
    }

    fn bounding_box(&self) -> Rect {
        self.to_bez_path(SHAPE_TOLERANCE).bounding_box()
    }
}

/// Accumulates outline elements while tracking the current point.
#[derive(Debug, Default)]
pub(crate) struct OutlineBuilder {
    elements: SmallVec<[OutlineEl; 16]>,
    current: Option<Point>,
}

impl OutlineBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn move_to(&mut self, p: Point) {
        self.elements.push(OutlineEl::MoveTo(p));
        self.current = Some(p);
    }

    pub(crate) fn line_to(&mut self, p: Point) {
        if self.current.is_none() {
            self.move_to(p);
            return;
        }
        self.elements.push(OutlineEl::LineTo(p));
        self.current = Some(p);
    }

    /// Connect to the start of `arc`, then append it.
    fn arc(&mut self, arc: Arc) {
        let start = arc.center + Vec2::from_angle(arc.start_angle) * arc.radii.x;
        let current = self.current;
        match current {
            None => self.move_to(start),
            Some(current) if (current - start).hypot() > EPSILON => self.line_to(start),
            Some(_) => {}
        }
        self.elements.push(OutlineEl::Arc(arc));
        self.current =
            Some(arc.center + Vec2::from_angle(arc.start_angle + arc.sweep_angle) * arc.radii.x);
    }

    /// Quarter-circle box corner, sweeping clockwise from `start_angle`.
    ///
    /// A zero radius collapses to a line to the corner point.
    pub(crate) fn corner(&mut self, center: Point, radius: f64, start_angle: f64) {
        if radius <= 0.0 {
            self.line_to(center);
            return;
        }
        self.arc(Arc {
            center,
            radii: Vec2::new(radius, radius),
            start_angle,
            sweep_angle: FRAC_PI_2,
            x_rotation: 0.0,
        });
    }

    /// Round the corner at `t1` between the legs `current -> t1` and `t1 -> t2`.
    ///
    /// Emits a line to the first tangent point and an arc to the second. With
    /// no current point, a zero radius, a zero-length leg or collinear legs,
    /// this is a line to `t1`.
    pub(crate) fn arc_to(&mut self, t1: Point, t2: Point, radius: f64) {
        let Some(p0) = self.current else {
            self.move_to(t1);
            return;
        };
        let Some(arc) = tangent_arc(p0, t1, t2, radius) else {
            self.line_to(t1);
            return;
        };
        self.arc(arc);
    }

    pub(crate) fn close(&mut self) {
        self.elements.push(OutlineEl::ClosePath);
    }

    pub(crate) fn finish(self, triangle: TriangleGeometry) -> TooltipPath {
        TooltipPath {
            elements: self.elements,
            triangle,
        }
    }
}

/// Arc of `radius` tangent to `p0 -> t1` and `t1 -> t2`, from the tangent point
/// on the first leg to the tangent point on the second.
fn tangent_arc(p0: Point, t1: Point, t2: Point, radius: f64) -> Option<Arc> {
    if radius <= 0.0 {
        return None;
    }
    let back = p0 - t1;
    let ahead = t2 - t1;
    if back.hypot() <= EPSILON || ahead.hypot() <= EPSILON {
        return None;
    }
    let u = back.normalize();
    let v = ahead.normalize();
    let cos = u.dot(v);
    let sin = u.cross(v).abs();
    if sin <= EPSILON {
        return None;
    }

    // Distance from the vertex to each tangent point: r / tan(theta / 2).
    let d = radius * (1.0 + cos) / sin;
    let a = t1 + u * d;
    let b = t1 + v * d;
    let center = t1 + (u + v).normalize() * Vec2::new(d, radius).hypot();

    let from = a - center;
    let to = b - center;
    let sweep = from.cross(to).atan2(from.dot(to));
    debug_assert!(sweep.abs() < PI, "tangent arcs sweep less than a half turn");

    Some(Arc {
        center,
        radii: Vec2::new(radius, radius),
        start_angle: from.atan2(),
        sweep_angle: sweep,
        x_rotation: 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn near(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-9
    }

    fn arc_start(arc: &Arc) -> Point {
        arc.center + Vec2::from_angle(arc.start_angle) * arc.radii.x
    }

    fn arc_end(arc: &Arc) -> Point {
        arc.center + Vec2::from_angle(arc.start_angle + arc.sweep_angle) * arc.radii.x
    }

    #[test]
    fn tangent_arc_right_angle() {
        let arc = tangent_arc(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            2.0,
        )
        .expect("right angle should round");
        assert!(near(arc.center, Point::new(8.0, 2.0)));
        assert!(near(arc_start(&arc), Point::new(8.0, 0.0)));
        assert!(near(arc_end(&arc), Point::new(10.0, 2.0)));
        // Turning from +x toward +y is clockwise on screen.
        assert!((arc.sweep_angle - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn tangent_arc_counter_clockwise_turn() {
        let arc = tangent_arc(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, -10.0),
            2.0,
        )
        .expect("right angle should round");
        assert!(arc.sweep_angle < 0.0);
        assert!(near(arc_start(&arc), Point::new(8.0, 0.0)));
        assert!(near(arc_end(&arc), Point::new(10.0, -2.0)));
    }

    #[test]
    fn tangent_arc_touches_both_legs() {
        let p0 = Point::new(8.0, 0.0);
        let t1 = Point::new(40.0, 0.0);
        let t2 = Point::new(50.0, -10.0);
        let arc = tangent_arc(p0, t1, t2, 4.0).expect("acute corner should round");
        // Center is one radius away from both legs.
        assert!((arc.center.y.abs() - 4.0).abs() < 1e-9);
        let leg = (t2 - t1).normalize();
        let off = arc.center - t1;
        assert!((off.cross(leg).abs() - 4.0).abs() < 1e-9);
        // Endpoints lie on the legs.
        let start = arc_start(&arc);
        let end = arc_end(&arc);
        assert!(start.y.abs() < 1e-9 && start.x < t1.x);
        assert!(((end - t1).cross(leg)).abs() < 1e-9);
    }

    #[test]
    fn degenerate_corners_fall_back_to_lines() {
        let p0 = Point::new(0.0, 0.0);
        let t1 = Point::new(10.0, 0.0);
        assert!(tangent_arc(p0, t1, Point::new(20.0, 0.0), 2.0).is_none());
        assert!(tangent_arc(p0, t1, Point::new(10.0, 10.0), 0.0).is_none());
        assert!(tangent_arc(t1, t1, Point::new(10.0, 10.0), 2.0).is_none());
        assert!(tangent_arc(p0, t1, t1, 2.0).is_none());

        let mut b = OutlineBuilder::new();
        b.move_to(p0);
        b.arc_to(t1, Point::new(20.0, 0.0), 2.0);
        assert_eq!(b.elements.last(), Some(&OutlineEl::LineTo(t1)));
    }

    #[test]
    fn arc_connects_from_current_point() {
        let mut b = OutlineBuilder::new();
        b.corner(Point::new(8.0, 8.0), 8.0, PI);
        assert!(matches!(b.elements[0], OutlineEl::MoveTo(p) if near(p, Point::new(0.0, 8.0))));
        assert!(matches!(b.elements[1], OutlineEl::Arc(_)));
        b.corner(Point::new(92.0, 8.0), 8.0, 3.0 * FRAC_PI_2);
        assert!(matches!(b.elements[2], OutlineEl::LineTo(p) if near(p, Point::new(92.0, 0.0))));
        assert!(matches!(b.elements[3], OutlineEl::Arc(_)));
        assert!(b.current.is_some_and(|p| near(p, Point::new(100.0, 8.0))));
    }

    #[test]
    fn zero_radius_corner_is_a_line() {
        let mut b = OutlineBuilder::new();
        b.corner(Point::new(0.0, 0.0), 0.0, PI);
        b.corner(Point::new(10.0, 0.0), 0.0, 3.0 * FRAC_PI_2);
        assert_eq!(
            b.elements.as_slice(),
            &[
                OutlineEl::MoveTo(Point::new(0.0, 0.0)),
                OutlineEl::LineTo(Point::new(10.0, 0.0)),
            ]
        );
    }
}
