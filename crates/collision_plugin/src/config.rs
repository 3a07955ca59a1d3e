//! HierarchyConfig - construction parameters for the static grid.

/// Configuration for static hierarchy construction.
///
/// The map is a square centered at the origin spanning
/// `[-map_side, +map_side]` on both ground axes: a `map_side` of 64 covers
/// a 128 x 128 play area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HierarchyConfig {
  /// Half-extent of the map square from the origin, in world units.
  pub map_side: f32,

  /// Quartering depth of the static grid. Each level splits every region
  /// into 4 quadrants; the deepest level's cells accept obstacle leaves.
  /// Depth 2 yields the classic 16-cell grid.
  pub levels: u32,

  /// Vertical extent assigned to grid nodes. Cosmetic only: queries never
  /// consult Y, but tree dumps and debug draws use it.
  pub ceiling: f32,
}

impl HierarchyConfig {
  /// Config for a map of the given half-extent, with default depth and
  /// ceiling.
  pub fn new(map_side: f32) -> Self {
    Self {
      map_side,
      ..Self::default()
    }
  }

  /// Number of accepting cells along one axis (`2^levels`).
  #[inline]
  pub fn cells_per_axis(&self) -> u32 {
    1 << self.levels
  }

  /// Side length of one accepting cell in world units.
  #[inline]
  pub fn cell_side(&self) -> f32 {
    (self.map_side * 2.0) / self.cells_per_axis() as f32
  }
}

impl Default for HierarchyConfig {
  fn default() -> Self {
    Self {
      map_side: 64.0,
      levels: 2,
      ceiling: 12.0,
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
