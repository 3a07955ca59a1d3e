//! HierarchyNode - tagged node of the static collision tree.
//!
//! One node type covers the whole tree: leaves carry a single obstacle's
//! extent, interiors carry exclusively-owned children. There are no parent
//! pointers; every traversal is top-down.

use crate::bounds::Aabb;
use crate::grid::QueryStats;
use crate::segment::Segment;

/// Role of a node within the hierarchy.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
  /// Directly represents one obstacle; participates in leaf-level tests.
  Leaf,

  /// Partitions space into children. Accepting interiors are the deepest
  /// static grid cells: inserted obstacles become their leaf children.
  Interior {
    /// Whether inserted obstacles are appended here instead of routed
    /// deeper.
    accepts_insertions: bool,
    /// Owned child nodes. Strict tree: no node appears in two parents.
    children: Vec<HierarchyNode>,
  },
}

/// A node of the collision hierarchy: an extent plus its role.
#[derive(Clone, Debug, PartialEq)]
pub struct HierarchyNode {
  bounds: Aabb,
  kind: NodeKind,
}

impl HierarchyNode {
  /// Create a leaf node for one obstacle.
  pub fn leaf(bounds: Aabb) -> Self {
    Self {
      bounds,
      kind: NodeKind::Leaf,
    }
  }

  /// Create an interior node with no children yet.
  pub fn interior(bounds: Aabb, accepts_insertions: bool) -> Self {
    Self {
      bounds,
      kind: NodeKind::Interior {
        accepts_insertions,
        children: Vec::new(),
      },
    }
  }

  /// Extent of this node.
  #[inline]
  pub fn bounds(&self) -> &Aabb {
    &self.bounds
  }

  /// Role of this node.
  #[inline]
  pub fn kind(&self) -> &NodeKind {
    &self.kind
  }

  /// True if this node directly represents an obstacle.
  #[inline]
  pub fn is_leaf(&self) -> bool {
    matches!(self.kind, NodeKind::Leaf)
  }

  /// True if inserted obstacles are appended directly to this node.
  #[inline]
  pub fn accepts_insertions(&self) -> bool {
    matches!(
      self.kind,
      NodeKind::Interior {
        accepts_insertions: true,
        ..
      }
    )
  }

  /// Children of this node. Empty for leaves.
  pub fn children(&self) -> &[HierarchyNode] {
    match &self.kind {
      NodeKind::Leaf => &[],
      NodeKind::Interior { children, .. } => children,
    }
  }

  /// Append a child to an interior node.
  pub(crate) fn push_child(&mut self, child: HierarchyNode) {
    match &mut self.kind {
      NodeKind::Leaf => debug_assert!(false, "leaf nodes cannot own children"),
      NodeKind::Interior { children, .. } => children.push(child),
    }
  }

  /// Route an obstacle down the tree. An accepting node appends it as a
  /// leaf child; other interiors recurse into every child overlapping it on
  /// the ground axes. Returns the number of accepting cells that received
  /// the obstacle (0 means it fell outside the static grid entirely).
  pub(crate) fn route(&mut self, obstacle: &Aabb) -> u32 {
    match &mut self.kind {
      NodeKind::Leaf => 0,
      NodeKind::Interior {
        accepts_insertions: true,
        children,
      } => {
        children.push(HierarchyNode::leaf(*obstacle));
        1
      }
      NodeKind::Interior {
        accepts_insertions: false,
        children,
      } => {
        let mut routed = 0;
        for child in children {
          if child.bounds.overlaps_xz(obstacle) {
            routed += child.route(obstacle);
          }
        }
        routed
      }
    }
  }

  /// Existence query: does any leaf under this node overlap the candidate
  /// on the ground axes? Subtrees whose extent misses the candidate are
  /// pruned without descending.
  pub(crate) fn overlap_hit(&self, candidate: &Aabb, stats: &mut QueryStats) -> bool {
    stats.nodes_visited += 1;
    if !self.bounds.overlaps_xz(candidate) {
      return false;
    }
    match &self.kind {
      NodeKind::Leaf => {
        stats.leaves_tested += 1;
        true
      }
      NodeKind::Interior { children, .. } => children
        .iter()
        .any(|child| child.overlap_hit(candidate, stats)),
    }
  }

  /// Existence query: does the segment's carrying line cross any leaf under
  /// this node? Pruning uses the segment's own bounding box exactly like
  /// the overlap query; the edge math only runs at leaves.
  pub(crate) fn segment_hit(&self, segment: &Segment, stats: &mut QueryStats) -> bool {
    stats.nodes_visited += 1;
    if !self.bounds.overlaps_xz(segment.bounds()) {
      return false;
    }
    match &self.kind {
      NodeKind::Leaf => {
        stats.leaves_tested += 1;
        segment.hits_box(&self.bounds)
      }
      NodeKind::Interior { children, .. } => children
        .iter()
        .any(|child| child.segment_hit(segment, stats)),
    }
  }

  /// Indented one-line-per-node dump of the subtree, with stable sequential
  /// ids assigned in traversal order. For tests and tracing only.
  pub fn dump(&self) -> String {
    let mut out = String::new();
    let mut next_id = 0u32;
    self.dump_into(&mut out, 0, &mut next_id);
    out
  }

  fn dump_into(&self, out: &mut String, depth: usize, next_id: &mut u32) {
    use std::fmt::Write;

    let id = *next_id;
    *next_id += 1;
    let role = match &self.kind {
      NodeKind::Leaf => "leaf",
      NodeKind::Interior {
        accepts_insertions: true,
        ..
      } => "cell",
      NodeKind::Interior {
        accepts_insertions: false,
        ..
      } => "grid",
    };
    let b = &self.bounds;
    let _ = writeln!(
      out,
      "{:indent$}[{id}] {role} X: {{ {:.2} {:.2} }} Z: {{ {:.2} {:.2} }} ({} children)",
      "",
      b.min().x,
      b.max().x,
      b.min().z,
      b.max().z,
      self.children().len(),
      indent = depth * 3,
    );
    for child in self.children() {
      child.dump_into(out, depth + 1, next_id);
    }
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
