// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer triangle placement against the box edge.
//!
//! All four edges share one routine: the pointer is placed along the edge's
//! axis in an [`EdgeFrame`], clamped against the box corners, and the resulting
//! vertices are mapped back to absolute coordinates.

use kurbo::{Point, Rect};

use crate::pointer::{Pointer, PointerEdge};

/// A corner of the tooltip box.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Corner {
    /// Corner at `(min_x, min_y)`.
    TopLeft,
    /// Corner at `(max_x, min_y)`.
    TopRight,
    /// Corner at `(max_x, max_y)`.
    BottomRight,
    /// Corner at `(min_x, max_y)`.
    BottomLeft,
}

/// How one base vertex of the pointer meets the box outline.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PointerEnd {
    /// The vertex sits in free space along the edge and may be rounded.
    Rounded,
    /// The pointer was pushed against a rounded corner; the vertex lies on the
    /// start of the corner arc and is left sharp.
    OffCenter,
    /// The pointer reaches past the corner, which is drawn sharp and merged
    /// into the pointer. The vertex is left sharp.
    Overridden,
}

impl PointerEnd {
    /// Whether this vertex touches the straight box edge and must stay sharp.
    #[must_use]
    pub const fn is_off_center(self) -> bool {
        !matches!(self, Self::Rounded)
    }
}

/// Resolved pointer geometry for one tooltip outline.
///
/// Points are ordered for an outline drawn clockwise: `point1` is the base
/// vertex reached first, `point2` the apex, `point3` the other base vertex.
/// `point0` and `point4` lie on the box edge, `box_corner_radius` away from
/// the corners before `point1` and after `point3`; they are the tangent
/// references for rounding the base vertices and are never emitted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleGeometry {
    /// Edge the pointer sits on.
    pub edge: PointerEdge,
    /// Arc tangent reference before `point1`.
    pub point0: Point,
    /// First base vertex.
    pub point1: Point,
    /// Apex.
    pub point2: Point,
    /// Second base vertex.
    pub point3: Point,
    /// Arc tangent reference after `point3`.
    pub point4: Point,
    /// Pointer bounding box after clamping against the box corners.
    pub bounds: Rect,
    /// Rounding radius for the pointer vertices.
    pub corner_radius: f64,
    /// Treatment of `point1`.
    pub end1: PointerEnd,
    /// Treatment of `point3`.
    pub end3: PointerEnd,
}

/// The pointer edge expressed along a single axis.
///
/// `t` runs along the edge from `lo` to `hi`; the perpendicular coordinate of
/// the edge is `base`, and the pointer grows toward `base + outward * depth`.
#[derive(Clone, Copy, Debug)]
struct EdgeFrame {
    lo: f64,
    hi: f64,
    base: f64,
    outward: f64,
    along_x: bool,
    /// Clockwise traversal runs `hi -> lo` (bottom and left edges).
    reversed: bool,
    lo_corner: Corner,
    hi_corner: Corner,
}

impl EdgeFrame {
    fn new(edge: PointerEdge, rect: Rect) -> Self {
        match edge {
            PointerEdge::Top => Self {
                lo: rect.min_x(),
                hi: rect.max_x(),
                base: rect.min_y(),
                outward: -1.0,
                along_x: true,
                reversed: false,
                lo_corner: Corner::TopLeft,
                hi_corner: Corner::TopRight,
            },
            PointerEdge::Right => Self {
                lo: rect.min_y(),
                hi: rect.max_y(),
                base: rect.max_x(),
                outward: 1.0,
                along_x: false,
                reversed: false,
                lo_corner: Corner::TopRight,
                hi_corner: Corner::BottomRight,
            },
            PointerEdge::Bottom => Self {
                lo: rect.min_x(),
                hi: rect.max_x(),
                base: rect.max_y(),
                outward: 1.0,
                along_x: true,
                reversed: true,
                lo_corner: Corner::BottomLeft,
                hi_corner: Corner::BottomRight,
            },
            PointerEdge::Left => Self {
                lo: rect.min_y(),
                hi: rect.max_y(),
                base: rect.min_x(),
                outward: -1.0,
                along_x: false,
                reversed: true,
                lo_corner: Corner::TopLeft,
                hi_corner: Corner::BottomLeft,
            },
        }
    }

    fn point(&self, t: f64, depth: f64) -> Point {
        let perp = self.base + self.outward * depth;
        if self.along_x {
            Point::new(t, perp)
        } else {
            Point::new(perp, t)
        }
    }

    fn rect(&self, t0: f64, t1: f64, depth: f64) -> Rect {
        Rect::from_points(self.point(t0, 0.0), self.point(t1, depth))
    }
}

impl TriangleGeometry {
    /// Place `pointer` against `main_rect` whose corners are rounded by
    /// `box_corner_radius`.
    ///
    /// The pointer is centered on the edge and shifted by `pointer.offset`. If
    /// that pushes its base into a corner's rounding zone it is clamped to the
    /// end of the straight edge and the apex is aligned with the clamped end.
    /// If it would leave the box entirely, it is clamped to the box corner and
    /// that corner is reported as overridden.
    #[must_use]
    pub fn new(pointer: &Pointer, main_rect: Rect, box_corner_radius: f64) -> Self {
        let frame = EdgeFrame::new(pointer.edge, main_rect);
        let r = box_corner_radius;
        let width = pointer.size.width;
        let depth = pointer.size.height;

        let start = (frame.lo + frame.hi) / 2.0 - width / 2.0 + pointer.offset;

        let (start, apex, lo_end, hi_end) = if start < frame.lo + r {
            let end = if start < frame.lo {
                PointerEnd::Overridden
            } else {
                PointerEnd::OffCenter
            };
            let start = if start < frame.lo { frame.lo } else { frame.lo + r };
            (start, start, end, PointerEnd::Rounded)
        } else if start > frame.hi - width - r {
            let end = if start > frame.hi - width {
                PointerEnd::Overridden
            } else {
                PointerEnd::OffCenter
            };
            let start = if start > frame.hi - width {
                frame.hi - width
            } else {
                frame.hi - width - r
            };
            (start, start + width, PointerEnd::Rounded, end)
        } else {
            (start, start + width / 2.0, PointerEnd::Rounded, PointerEnd::Rounded)
        };
        let end = start + width;

        let lo_base = frame.point(start, 0.0);
        let hi_base = frame.point(end, 0.0);
        let lo_ref = frame.point(frame.lo + r, 0.0);
        let hi_ref = frame.point(frame.hi - r, 0.0);

        let (point0, point1, point3, point4, end1, end3) = if frame.reversed {
            (hi_ref, hi_base, lo_base, lo_ref, hi_end, lo_end)
        } else {
            (lo_ref, lo_base, hi_base, hi_ref, lo_end, hi_end)
        };

        Self {
            edge: pointer.edge,
            point0,
            point1,
            point2: frame.point(apex, depth),
            point3,
            point4,
            bounds: frame.rect(start, end, depth),
            corner_radius: pointer.corner_radius,
            end1,
            end3,
        }
    }

    /// The box corner replaced by the pointer, if any.
    ///
    /// Only the two corners adjacent to the pointer edge can be overridden, and
    /// never both.
    #[must_use]
    pub fn overridden_corner(&self) -> Option<Corner> {
        let frame = EdgeFrame::new(self.edge, Rect::ZERO);
        let (lo_end, hi_end) = if frame.reversed {
            (self.end3, self.end1)
        } else {
            (self.end1, self.end3)
        };
        if lo_end == PointerEnd::Overridden {
            Some(frame.lo_corner)
        } else if hi_end == PointerEnd::Overridden {
            Some(frame.hi_corner)
        } else {
            None
        }
    }

    /// Whether `corner` is drawn sharp because the pointer overrides it.
    #[must_use]
    pub fn overrides(&self, corner: Corner) -> bool {
        self.overridden_corner() == Some(corner)
    }

    /// Whether the pointer sits centered with both base vertices free.
    #[must_use]
    pub fn is_centered(&self) -> bool {
        self.end1 == PointerEnd::Rounded && self.end3 == PointerEnd::Rounded
    }
}
