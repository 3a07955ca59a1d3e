//! Error taxonomy for the collision core.
//!
//! Every variant is recoverable: the game loop logs and continues (treating
//! the failure as "no insertion" or "no collision", whichever is safe)
//! rather than crashing an interactive session.

use thiserror::Error;

use crate::bounds::Aabb;

/// Errors surfaced by box construction and hierarchy loading.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CollisionError {
  /// Vertex input to box construction has the wrong stride. Vertex data is
  /// positions packed as `[x, y, z, x, y, z, ...]`; anything whose length
  /// is not a positive multiple of 3 is malformed and is rejected instead
  /// of truncated.
  #[error("vertex list of length {len} is not a positive multiple of 3")]
  InvalidGeometry {
    /// Length of the offending vertex slice.
    len: usize,
  },

  /// An inserted obstacle overlapped no accepting cell of the static grid,
  /// so it would be invisible to every future query. The load phase decides
  /// whether to log-and-continue or abort.
  #[error("obstacle {bounds:?} overlaps no accepting cell of the static grid")]
  UnroutableObstacle {
    /// Extent of the obstacle that could not be routed.
    bounds: Aabb,
  },

  /// Obstacle insertion was attempted after the level finished loading. The
  /// hierarchy is append-only during the load phase and read-only afterward.
  #[error("collision world is sealed; obstacles can only be inserted while loading")]
  LoadPhaseClosed,
}
