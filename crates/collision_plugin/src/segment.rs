//! Ground-plane segments for occlusion / line-of-sight queries.
//!
//! A segment between the camera and the player is tested against obstacle
//! leaves by evaluating its carrying line at the four box edges. The line is
//! classified once per query so axis-aligned segments never divide by a zero
//! slope.

use glam::Vec2;

use crate::bounds::Aabb;

/// Tolerance absorbing floating-point edge effects in segment/box tests.
pub const EPSILON: f32 = 0.01;

/// Line carrying a segment, classified by slope.
///
/// Planar coordinates are (x, z); `Vec2::y` holds the world Z axis.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Line {
  /// General line `z = m * x + c`.
  Sloped { m: f32, c: f32 },
  /// `Δx == 0`: slope is undefined, the line is `x = const`.
  Vertical { x: f32 },
  /// `Δz == 0`: the inverted evaluation would divide by a zero slope.
  Horizontal { z: f32 },
}

/// A 2D segment in the X/Z plane with its line classification and its own
/// bounding box precomputed once per query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
  start: Vec2,
  end: Vec2,
  line: Line,
  bounds: Aabb,
}

impl Segment {
  /// Classify the segment between two planar points.
  ///
  /// A zero-length segment classifies as vertical and degrades to a point
  /// test under the bounding-box prune.
  pub fn new(start: Vec2, end: Vec2) -> Self {
    let dx = end.x - start.x;
    let dz = end.y - start.y;
    let line = if dx == 0.0 {
      Line::Vertical { x: start.x }
    } else if dz == 0.0 {
      Line::Horizontal { z: start.y }
    } else {
      let m = dz / dx;
      Line::Sloped {
        m,
        c: start.y - m * start.x,
      }
    };
    Self {
      start,
      end,
      line,
      bounds: Aabb::from_corners_xz(start, end),
    }
  }

  /// Start point.
  #[inline]
  pub fn start(&self) -> Vec2 {
    self.start
  }

  /// End point.
  #[inline]
  pub fn end(&self) -> Vec2 {
    self.end
  }

  /// Bounding box of the segment's own extent, used for pruning.
  #[inline]
  pub fn bounds(&self) -> &Aabb {
    &self.bounds
  }

  /// Test the segment's carrying line against the four edges of a leaf box.
  ///
  /// Callers prune against [`Self::bounds`] first (the hierarchy does);
  /// past the prune the segment is treated as its carrying line. Each edge
  /// evaluation tolerates [`EPSILON`], so a segment clipping a corner within
  /// that tolerance counts as intersecting.
  pub fn hits_box(&self, bounds: &Aabb) -> bool {
    let min = bounds.min();
    let max = bounds.max();
    match self.line {
      Line::Sloped { m, c } => {
        // Evaluate the line at the box's X edges...
        let z_at_min_x = m * min.x + c;
        if z_at_min_x >= min.z - EPSILON && z_at_min_x <= max.z + EPSILON {
          return true;
        }
        let z_at_max_x = m * max.x + c;
        if z_at_max_x >= min.z - EPSILON && z_at_max_x <= max.z + EPSILON {
          return true;
        }
        // ...and inverted at its Z edges.
        let x_at_min_z = (min.z - c) / m;
        if x_at_min_z >= min.x - EPSILON && x_at_min_z <= max.x + EPSILON {
          return true;
        }
        let x_at_max_z = (max.z - c) / m;
        x_at_max_z >= min.x - EPSILON && x_at_max_z <= max.x + EPSILON
      }
      // Axis-aligned segments reduce to one interval test; the prune has
      // already matched the other axis.
      Line::Vertical { x } => x >= min.x - EPSILON && x <= max.x + EPSILON,
      Line::Horizontal { z } => z >= min.z - EPSILON && z <= max.z + EPSILON,
    }
  }
}

#[cfg(test)]
#[path = "segment_test.rs"]
mod segment_test;
