//! Axis-aligned bounding boxes over the X/Z collision plane.

use glam::{Vec2, Vec3};

use crate::error::CollisionError;

/// Axis-aligned bounding box with X and Z as the query axes.
///
/// Y carries the vertical extent of the geometry but is never consulted by
/// the overlap test: collision is 2.5D, resolved purely in the ground plane.
///
/// A box is immutable once constructed; moving bodies rebuild their box each
/// frame instead of mutating it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
	min: Vec3,
	max: Vec3,
}

impl Aabb {
	/// Create a new AABB from min and max corners.
	///
	/// # Panics
	/// Debug-asserts that min <= max on all axes.
	pub fn new(min: Vec3, max: Vec3) -> Self {
		debug_assert!(
			min.x <= max.x && min.y <= max.y && min.z <= max.z,
			"AABB min must be <= max on all axes"
		);
		Self { min, max }
	}

	/// Build from two ground-plane corners in any order.
	///
	/// The planar coordinates are normalized componentwise; the vertical
	/// extent is fixed to the zero range, as for per-frame player boxes.
	pub fn from_corners_xz(a: Vec2, b: Vec2) -> Self {
		Self {
			min: Vec3::new(a.x.min(b.x), 0.0, a.y.min(b.y)),
			max: Vec3::new(a.x.max(b.x), 0.0, a.y.max(b.y)),
		}
	}

	/// Build from six explicit bounds.
	///
	/// # Panics
	/// Debug-asserts that each min <= max pair is ordered.
	pub fn from_bounds(
		min_x: f32,
		max_x: f32,
		min_y: f32,
		max_y: f32,
		min_z: f32,
		max_z: f32,
	) -> Self {
		Self::new(
			Vec3::new(min_x, min_y, min_z),
			Vec3::new(max_x, max_y, max_z),
		)
	}

	/// Build from a ground-plane center and half-extents, with the vertical
	/// range `[0, height]`.
	pub fn from_center_half_extents_xz(center: Vec2, half_extents: Vec2, height: f32) -> Self {
		Self {
			min: Vec3::new(center.x - half_extents.x, 0.0, center.y - half_extents.y),
			max: Vec3::new(center.x + half_extents.x, height, center.y + half_extents.y),
		}
	}

	/// Build the minimal box containing all vertices of a flat `[x, y, z,
	/// ...]` position list.
	///
	/// # Errors
	/// Returns [`CollisionError::InvalidGeometry`] if the slice is empty or
	/// its length is not a multiple of 3. A trailing partial vertex is a
	/// malformed upload, never something to truncate away.
	pub fn from_vertices(vertices: &[f32]) -> Result<Self, CollisionError> {
		if vertices.is_empty() || vertices.len() % 3 != 0 {
			return Err(CollisionError::InvalidGeometry {
				len: vertices.len(),
			});
		}
		let mut min = Vec3::splat(f32::INFINITY);
		let mut max = Vec3::splat(f32::NEG_INFINITY);
		for corner in vertices.chunks_exact(3) {
			let p = Vec3::new(corner[0], corner[1], corner[2]);
			min = min.min(p);
			max = max.max(p);
		}
		Ok(Self { min, max })
	}

	/// Minimum corner (inclusive).
	#[inline]
	pub fn min(&self) -> Vec3 {
		self.min
	}

	/// Maximum corner (inclusive).
	#[inline]
	pub fn max(&self) -> Vec3 {
		self.max
	}

	/// Check if this box overlaps another on the ground axes.
	///
	/// Closed-interval test: boxes sharing a face or edge count as
	/// overlapping. Symmetric. Y is not compared.
	#[inline]
	pub fn overlaps_xz(&self, other: &Aabb) -> bool {
		self.min.x <= other.max.x
			&& self.max.x >= other.min.x
			&& self.min.z <= other.max.z
			&& self.max.z >= other.min.z
	}

	/// Ground-plane center of the box.
	#[inline]
	pub fn center_xz(&self) -> Vec2 {
		Vec2::new(
			(self.min.x + self.max.x) * 0.5,
			(self.min.z + self.max.z) * 0.5,
		)
	}

	/// Ground-plane size of the box (max - min).
	#[inline]
	pub fn size_xz(&self) -> Vec2 {
		Vec2::new(self.max.x - self.min.x, self.max.z - self.min.z)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new() {
		let aabb = Aabb::new(Vec3::new(-1.0, 0.0, -3.0), Vec3::new(1.0, 2.0, 3.0));
		assert_eq!(aabb.min(), Vec3::new(-1.0, 0.0, -3.0));
		assert_eq!(aabb.max(), Vec3::new(1.0, 2.0, 3.0));
	}

	#[test]
	fn test_from_corners_xz_normalizes() {
		// Corners may arrive in any order; the extent must come out sorted.
		let a = Aabb::from_corners_xz(Vec2::new(3.0, -2.0), Vec2::new(-1.0, 4.0));
		let b = Aabb::from_corners_xz(Vec2::new(-1.0, 4.0), Vec2::new(3.0, -2.0));
		assert_eq!(a, b);
		assert_eq!(a.min().x, -1.0);
		assert_eq!(a.max().x, 3.0);
		assert_eq!(a.min().z, -2.0);
		assert_eq!(a.max().z, 4.0);
	}

	#[test]
	fn test_from_bounds() {
		let aabb = Aabb::from_bounds(2.0, 3.0, 0.0, 2.0, 2.0, 3.0);
		assert_eq!(aabb.min(), Vec3::new(2.0, 0.0, 2.0));
		assert_eq!(aabb.max(), Vec3::new(3.0, 2.0, 3.0));
	}

	#[test]
	fn test_from_center_half_extents_xz() {
		let aabb = Aabb::from_center_half_extents_xz(Vec2::new(2.5, 2.5), Vec2::splat(0.5), 2.0);
		assert_eq!(aabb.min(), Vec3::new(2.0, 0.0, 2.0));
		assert_eq!(aabb.max(), Vec3::new(3.0, 2.0, 3.0));
	}

	/// Componentwise min/max reduction over a stride-3 vertex list, grouped
	/// by index modulo 3.
	#[test]
	fn test_from_vertices_reduction() {
		let vertices = [
			1.0, 0.0, 1.0, //
			-1.0, 0.0, 1.0, //
			-1.0, 0.0, -1.0, //
			1.0, 0.0, -1.0, //
			1.0, 5.0, 1.0, //
			-1.0, 5.0, 1.0, //
			-1.0, 5.0, -1.0, //
			1.0, 5.0, -1.0,
		];
		let aabb = Aabb::from_vertices(&vertices).expect("well-formed vertex list");
		assert_eq!(aabb.min(), Vec3::new(-1.0, 0.0, -1.0));
		assert_eq!(aabb.max(), Vec3::new(1.0, 5.0, 1.0));
	}

	/// A trailing partial vertex is malformed input, not something to
	/// truncate away.
	#[test]
	fn test_from_vertices_rejects_bad_stride() {
		let vertices = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
		assert_eq!(
			Aabb::from_vertices(&vertices),
			Err(CollisionError::InvalidGeometry { len: 7 })
		);
	}

	#[test]
	fn test_from_vertices_rejects_empty() {
		assert_eq!(
			Aabb::from_vertices(&[]),
			Err(CollisionError::InvalidGeometry { len: 0 })
		);
	}

	#[test]
	fn test_overlaps_true() {
		let a = Aabb::from_bounds(0.0, 10.0, 0.0, 1.0, 0.0, 10.0);
		let b = Aabb::from_bounds(5.0, 15.0, 0.0, 1.0, 5.0, 15.0);
		assert!(a.overlaps_xz(&b));
		assert!(b.overlaps_xz(&a));
	}

	#[test]
	fn test_overlaps_touching() {
		// Touching at boundary should count as overlapping
		let a = Aabb::from_bounds(0.0, 10.0, 0.0, 1.0, 0.0, 10.0);
		let b = Aabb::from_bounds(10.0, 20.0, 0.0, 1.0, 10.0, 20.0);
		assert!(a.overlaps_xz(&b));
		assert!(b.overlaps_xz(&a));
	}

	#[test]
	fn test_overlaps_false() {
		let a = Aabb::from_bounds(0.0, 10.0, 0.0, 1.0, 0.0, 10.0);
		let b = Aabb::from_bounds(11.0, 20.0, 0.0, 1.0, 11.0, 20.0);
		assert!(!a.overlaps_xz(&b));
		assert!(!b.overlaps_xz(&a));
	}

	#[test]
	fn test_overlaps_reflexive() {
		let a = Aabb::from_bounds(-3.0, 7.0, 0.0, 12.0, 2.0, 4.0);
		assert!(a.overlaps_xz(&a));
	}

	/// Disjoint on one ground axis is enough to reject, even when the other
	/// axis matches.
	#[test]
	fn test_overlaps_needs_both_ground_axes() {
		let a = Aabb::from_bounds(0.0, 10.0, 0.0, 1.0, 0.0, 10.0);
		let b = Aabb::from_bounds(0.0, 10.0, 0.0, 1.0, 11.0, 20.0);
		assert!(!a.overlaps_xz(&b), "Z gap must reject despite X overlap");
	}

	/// Collision is 2.5D: boxes separated vertically still overlap.
	#[test]
	fn test_overlaps_ignores_y() {
		let low = Aabb::from_bounds(0.0, 1.0, 0.0, 1.0, 0.0, 1.0);
		let high = Aabb::from_bounds(0.0, 1.0, 50.0, 60.0, 0.0, 1.0);
		assert!(low.overlaps_xz(&high));
	}

	#[test]
	fn test_center_and_size() {
		let aabb = Aabb::from_bounds(-1.0, 3.0, 0.0, 2.0, -2.0, 6.0);
		assert_eq!(aabb.center_xz(), Vec2::new(1.0, 2.0));
		assert_eq!(aabb.size_xz(), Vec2::new(4.0, 8.0));
	}
}
