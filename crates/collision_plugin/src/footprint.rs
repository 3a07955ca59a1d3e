//! Obstacle footprints derived from instance transforms.
//!
//! Level collaborators place instances (position, half-extents, height);
//! the collision core derives the 8-corner vertex list a render mesh would
//! occupy and reduces it to an obstacle box. Keeping the derivation here
//! means the game layer never hand-computes extents.

use glam::{Vec2, Vec3};
use smallvec::SmallVec;

use crate::bounds::Aabb;
use crate::error::CollisionError;

/// Vertex scratch for one instance: 8 corners with stride 3. Inline
/// capacity avoids a heap allocation per placed instance.
pub type FootprintVertices = SmallVec<[f32; 24]>;

/// Corner vertices of an instance footprint, base resting on the ground
/// plane (y = 0) and top at `height`.
///
/// Only the planar components of `pos` are used; instances sit on the
/// ground regardless of their render translation.
pub fn footprint_vertices(pos: Vec3, height: f32, half_extents: Vec2) -> FootprintVertices {
  footprint_vertices_offset(pos, height, half_extents, Vec2::ZERO)
}

/// As [`footprint_vertices`], subtracting a planar pivot offset first.
///
/// Some source models are authored around a non-origin pivot; the offset
/// realigns the footprint with where the mesh actually renders.
pub fn footprint_vertices_offset(
  pos: Vec3,
  height: f32,
  half_extents: Vec2,
  pivot: Vec2,
) -> FootprintVertices {
  let x_pos = pos.x + half_extents.x - pivot.x;
  let x_neg = pos.x - half_extents.x - pivot.x;
  let z_pos = pos.z + half_extents.y - pivot.y;
  let z_neg = pos.z - half_extents.y - pivot.y;

  let mut out = FootprintVertices::new();
  for (x, y, z) in [
    (x_pos, height, z_neg),
    (x_pos, 0.0, z_neg),
    (x_neg, 0.0, z_neg),
    (x_neg, height, z_neg),
    (x_pos, height, z_pos),
    (x_pos, 0.0, z_pos),
    (x_neg, 0.0, z_pos),
    (x_neg, height, z_pos),
  ] {
    out.extend_from_slice(&[x, y, z]);
  }
  out
}

/// Obstacle box for one placed instance.
///
/// # Errors
/// Propagates [`CollisionError::InvalidGeometry`]; unreachable for the
/// well-formed vertex list built here, but the box constructor owns that
/// check.
pub fn obstacle_from_instance(
  pos: Vec3,
  height: f32,
  half_extents: Vec2,
) -> Result<Aabb, CollisionError> {
  Aabb::from_vertices(&footprint_vertices(pos, height, half_extents))
}

#[cfg(test)]
#[path = "footprint_test.rs"]
mod footprint_test;
