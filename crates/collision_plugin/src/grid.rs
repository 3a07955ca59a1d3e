//! Static hierarchy construction, obstacle routing, and queries.
//!
//! The map square is recursively quartered a fixed number of levels; the
//! deepest cells accept obstacle leaves. Construction happens once on the
//! load path, queries run on the per-frame path, and nothing mutates the
//! tree in between.

use glam::Vec2;

use crate::bounds::Aabb;
use crate::config::HierarchyConfig;
use crate::error::CollisionError;
use crate::node::HierarchyNode;
use crate::segment::Segment;

/// Traversal counters for one query, used to verify pruning behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryStats {
  /// Nodes whose extent was tested against the candidate.
  pub nodes_visited: u32,
  /// Leaves that survived the prune and were tested directly.
  pub leaves_tested: u32,
}

/// The static collision hierarchy of one level.
///
/// Build once, insert obstacles while loading, then query read-only for the
/// rest of the session. Queries and insertions take the hierarchy by
/// reference; nothing here is process-global.
#[derive(Clone, Debug, PartialEq)]
pub struct Hierarchy {
  root: HierarchyNode,
  config: HierarchyConfig,
}

impl Hierarchy {
  /// Build the fixed spatial grid for a map of `config.map_side` half-extent.
  ///
  /// Construction is deterministic: the same config always produces a
  /// structurally identical tree. All accepting cells start empty.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "hierarchy::build"))]
  pub fn build(config: HierarchyConfig) -> Self {
    debug_assert!(config.map_side > 0.0, "map_side must be positive");
    debug_assert!(config.levels >= 1, "grid needs at least one quartering level");
    let root = subdivide(
      Vec2::splat(-config.map_side),
      Vec2::splat(config.map_side),
      0,
      &config,
    );
    Self { root, config }
  }

  /// Construction parameters this hierarchy was built with.
  pub fn config(&self) -> &HierarchyConfig {
    &self.config
  }

  /// Root node, for inspection and dumps.
  pub fn root(&self) -> &HierarchyNode {
    &self.root
  }

  /// Insert an obstacle, routing it into every accepting cell its extent
  /// overlaps. An obstacle straddling a cell boundary is duplicated into
  /// each overlapping cell; queries are existence checks, so duplication
  /// costs redundant work but never correctness.
  ///
  /// # Errors
  /// [`CollisionError::UnroutableObstacle`] if no accepting cell overlapped
  /// the obstacle - it would be invisible to every future query, which the
  /// load phase must not discover silently.
  pub fn insert(&mut self, obstacle: Aabb) -> Result<(), CollisionError> {
    self.insert_counted(obstacle).map(|_| ())
  }

  /// As [`Self::insert`], reporting how many accepting cells received the
  /// obstacle. The session layer feeds the count to metrics.
  pub(crate) fn insert_counted(&mut self, obstacle: Aabb) -> Result<u32, CollisionError> {
    let cells = self.root.route(&obstacle);
    if cells == 0 {
      return Err(CollisionError::UnroutableObstacle { bounds: obstacle });
    }
    Ok(cells)
  }

  /// Does any obstacle overlap the candidate box on the ground axes?
  pub fn query_overlap(&self, candidate: &Aabb) -> bool {
    self.query_overlap_stats(candidate).0
  }

  /// As [`Self::query_overlap`], with traversal counters.
  pub fn query_overlap_stats(&self, candidate: &Aabb) -> (bool, QueryStats) {
    let mut stats = QueryStats::default();
    let hit = self.root.overlap_hit(candidate, &mut stats);
    (hit, stats)
  }

  /// Does the ground-plane segment from `start` to `end` cross any
  /// obstacle? Used for camera-occlusion checks between camera and player.
  pub fn query_segment(&self, start: Vec2, end: Vec2) -> bool {
    self.query_segment_stats(start, end).0
  }

  /// As [`Self::query_segment`], with traversal counters.
  pub fn query_segment_stats(&self, start: Vec2, end: Vec2) -> (bool, QueryStats) {
    let segment = Segment::new(start, end);
    let mut stats = QueryStats::default();
    let hit = self.root.segment_hit(&segment, &mut stats);
    (hit, stats)
  }

  /// Number of obstacle leaves in the tree, counting duplicates from
  /// boundary-straddling insertions.
  pub fn leaf_count(&self) -> u32 {
    fn count(node: &HierarchyNode) -> u32 {
      if node.is_leaf() {
        1
      } else {
        node.children().iter().map(count).sum()
      }
    }
    count(&self.root)
  }

  /// Indented dump of the whole tree. For tests and tracing only.
  pub fn dump(&self) -> String {
    self.root.dump()
  }
}

/// Recursively quarter `[min, max]` until the accepting depth is reached.
fn subdivide(min: Vec2, max: Vec2, depth: u32, config: &HierarchyConfig) -> HierarchyNode {
  let bounds = Aabb::from_bounds(min.x, max.x, 0.0, config.ceiling, min.y, max.y);
  if depth == config.levels {
    return HierarchyNode::interior(bounds, true);
  }
  let mid = (min + max) * 0.5;
  let mut node = HierarchyNode::interior(bounds, false);
  // Deterministic quadrant order; boundaries are shared between neighbors
  // (closed intervals).
  for (qmin, qmax) in [
    (min, mid),
    (mid, max),
    (Vec2::new(min.x, mid.y), Vec2::new(mid.x, max.y)),
    (Vec2::new(mid.x, min.y), Vec2::new(max.x, mid.y)),
  ] {
    node.push_child(subdivide(qmin, qmax, depth + 1, config));
  }
  node
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
