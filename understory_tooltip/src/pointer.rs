// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer description: which edge it sits on, how big it is, and where.

use kurbo::{Rect, Size};

/// Side of the tooltip box that the pointer protrudes from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PointerEdge {
    /// Pointer above the box, pointing up.
    Top,
    /// Pointer below the box, pointing down.
    Bottom,
    /// Pointer left of the box, pointing left.
    Left,
    /// Pointer right of the box, pointing right.
    Right,
}

impl PointerEdge {
    /// The edge on the other side of the box.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Whether the edge runs along the x axis (top or bottom).
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Tooltip pointer parameters.
///
/// `size.width` is the length of the pointer's base along the edge, and
/// `size.height` is how far the apex protrudes away from the box. For
/// [`PointerEdge::Left`] and [`PointerEdge::Right`] the pointer is rotated, so
/// its bounding box is `size.height` wide and `size.width` tall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    /// Edge the pointer protrudes from.
    pub edge: PointerEdge,
    /// Base length (`width`) and protrusion depth (`height`).
    pub size: Size,
    /// Radius used to round the pointer's apex and free base vertices.
    ///
    /// Zero draws a sharp triangle.
    pub corner_radius: f64,
    /// Shift from the centered position along the edge.
    ///
    /// Positive values move the pointer toward +x on horizontal edges and
    /// toward +y on vertical edges.
    pub offset: f64,
}

impl Pointer {
    /// A sharp, centered pointer.
    #[must_use]
    pub const fn new(edge: PointerEdge, size: Size) -> Self {
        Self {
            edge,
            size,
            corner_radius: 0.0,
            offset: 0.0,
        }
    }

    /// Returns a copy with the given pointer corner radius.
    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Returns a copy shifted by `offset` along its edge.
    #[must_use]
    pub const fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Box rectangle inside a tooltip `frame` that also has to hold the pointer.
    ///
    /// The pointer depth (`size.height`) is reserved on the pointer edge. A
    /// frame too small to hold the depth collapses to zero extent on that axis.
    #[must_use]
    pub fn main_rect(&self, frame: Rect) -> Rect {
        let frame = frame.abs();
        let depth = self.size.height;
        match self.edge {
            PointerEdge::Top => Rect::new(
                frame.x0,
                (frame.y0 + depth).min(frame.y1),
                frame.x1,
                frame.y1,
            ),
            PointerEdge::Bottom => Rect::new(
                frame.x0,
                frame.y0,
                frame.x1,
                (frame.y1 - depth).max(frame.y0),
            ),
            PointerEdge::Left => Rect::new(
                (frame.x0 + depth).min(frame.x1),
                frame.y0,
                frame.x1,
                frame.y1,
            ),
            PointerEdge::Right => Rect::new(
                frame.x0,
                frame.y0,
                (frame.x1 - depth).max(frame.x0),
                frame.y1,
            ),
        }
    }

    /// Frame enclosing `main_rect` plus the pointer depth on the pointer edge.
    #[must_use]
    pub fn frame(&self, main_rect: Rect) -> Rect {
        let depth = self.size.height;
        let r = main_rect.abs();
        match self.edge {
            PointerEdge::Top => Rect::new(r.x0, r.y0 - depth, r.x1, r.y1),
            PointerEdge::Bottom => Rect::new(r.x0, r.y0, r.x1, r.y1 + depth),
            PointerEdge::Left => Rect::new(r.x0 - depth, r.y0, r.x1, r.y1),
            PointerEdge::Right => Rect::new(r.x0, r.y0, r.x1 + depth, r.y1),
        }
    }
}
