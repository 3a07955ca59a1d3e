use super::*;

/// 8 corners, stride 3, base resting on the ground and top at `height`.
#[test]
fn test_vertex_layout() {
  let vertices = footprint_vertices(Vec3::new(1.0, 5.0, 2.0), 4.0, Vec2::new(1.5, 0.5));
  assert_eq!(vertices.len(), 24);

  for corner in vertices.chunks_exact(3) {
    assert!(
      corner[0] == -0.5 || corner[0] == 2.5,
      "X must sit on a footprint edge, got {}",
      corner[0]
    );
    assert!(
      corner[1] == 0.0 || corner[1] == 4.0,
      "Y must be ground or top, got {}",
      corner[1]
    );
    assert!(
      corner[2] == 1.5 || corner[2] == 2.5,
      "Z must sit on a footprint edge, got {}",
      corner[2]
    );
  }
}

/// The instance's render translation height is ignored; footprints always
/// rest on the ground plane.
#[test]
fn test_pos_y_ignored() {
  let grounded = footprint_vertices(Vec3::new(1.0, 0.0, 2.0), 4.0, Vec2::splat(0.5));
  let floating = footprint_vertices(Vec3::new(1.0, 9.0, 2.0), 4.0, Vec2::splat(0.5));
  assert_eq!(grounded, floating);
}

#[test]
fn test_pivot_offset_shifts_footprint() {
  let centered = footprint_vertices(Vec3::new(0.0, 0.0, 0.0), 2.0, Vec2::splat(1.0));
  let offset = footprint_vertices_offset(
    Vec3::new(1.0, 0.0, 3.0),
    2.0,
    Vec2::splat(1.0),
    Vec2::new(1.0, 3.0),
  );
  assert_eq!(centered, offset, "pivot must cancel the authored translation");
}

#[test]
fn test_obstacle_from_instance_bounds() {
  let obstacle = obstacle_from_instance(Vec3::new(2.5, 0.0, 2.5), 2.0, Vec2::splat(0.5))
    .expect("well-formed footprint");
  assert_eq!(obstacle.min(), Vec3::new(2.0, 0.0, 2.0));
  assert_eq!(obstacle.max(), Vec3::new(3.0, 2.0, 3.0));
}
