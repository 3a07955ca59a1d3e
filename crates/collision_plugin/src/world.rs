//! CollisionWorld - level-scoped collision container.
//!
//! Each level owns its own hierarchy, load state, and metrics. The world is
//! constructed by the level/session context and passed by reference into
//! insert and query calls, so nothing is process-global and levels can be
//! loaded side by side.

use std::sync::atomic::{AtomicU64, Ordering};

use glam::{Vec2, Vec3};

use crate::bounds::Aabb;
use crate::config::HierarchyConfig;
use crate::error::CollisionError;
use crate::footprint;
use crate::grid::Hierarchy;
use crate::metrics::CollisionMetrics;

// =============================================================================
// LevelId - unique identifier
// =============================================================================

/// Atomic counter for generating unique LevelIds.
static LEVEL_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Opaque level identifier.
///
/// Generated atomically - guaranteed unique within process lifetime.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct LevelId(u64);

impl LevelId {
    /// Generate a new unique LevelId.
    pub fn new() -> Self {
        Self(LEVEL_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl Default for LevelId {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Load state machine
// =============================================================================

/// Bootstrap state of a level's collision data.
///
/// Obstacles stream in while loading; `finish_loading` seals the hierarchy
/// and the world stays read-only for the rest of the session.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoadState {
    /// The level loader is still handing obstacles to the core.
    LoadingObstacles,
    /// The hierarchy is sealed; queries are valid.
    Ready,
}

// =============================================================================
// CollisionWorld - per-level state container
// =============================================================================

/// Per-level collision state: one static hierarchy plus its load-phase
/// bookkeeping.
///
/// Queries issued before [`Self::finish_loading`] report no collision
/// instead of reading a half-built tree; insertions after it fail with
/// [`CollisionError::LoadPhaseClosed`].
#[derive(Debug)]
pub struct CollisionWorld {
    id: LevelId,
    state: LoadState,
    hierarchy: Hierarchy,
    metrics: CollisionMetrics,
}

impl CollisionWorld {
    /// Build the static grid for a new level and start accepting obstacles.
    pub fn new(config: HierarchyConfig) -> Self {
        Self {
            id: LevelId::new(),
            state: LoadState::LoadingObstacles,
            hierarchy: Hierarchy::build(config),
            metrics: CollisionMetrics::default(),
        }
    }

    /// Unique id of this level's collision world.
    pub fn id(&self) -> LevelId {
        self.id
    }

    /// Current load state.
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// The underlying hierarchy, for inspection and dumps.
    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    /// Collision statistics collected so far.
    pub fn metrics(&self) -> &CollisionMetrics {
        &self.metrics
    }

    /// Route one obstacle box into the grid.
    ///
    /// # Errors
    /// [`CollisionError::LoadPhaseClosed`] after `finish_loading`;
    /// [`CollisionError::UnroutableObstacle`] if the obstacle overlaps no
    /// accepting cell (counted in metrics, warned under `tracing`; the
    /// caller decides whether to continue or abort the load).
    pub fn insert_obstacle(&mut self, obstacle: Aabb) -> Result<(), CollisionError> {
        if self.state != LoadState::LoadingObstacles {
            return Err(CollisionError::LoadPhaseClosed);
        }
        match self.hierarchy.insert_counted(obstacle) {
            Ok(cells) => {
                self.metrics.record_insert(cells);
                Ok(())
            }
            Err(err) => {
                self.metrics.record_unroutable();
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    level = self.id.raw(),
                    ?obstacle,
                    "obstacle overlaps no accepting cell; dropped"
                );
                Err(err)
            }
        }
    }

    /// Derive an obstacle box from a placed instance and route it in.
    ///
    /// # Errors
    /// As [`Self::insert_obstacle`].
    pub fn insert_instance(
        &mut self,
        pos: Vec3,
        height: f32,
        half_extents: Vec2,
    ) -> Result<(), CollisionError> {
        let obstacle = footprint::obstacle_from_instance(pos, height, half_extents)?;
        self.insert_obstacle(obstacle)
    }

    /// Seal the hierarchy. Queries are valid from here on; insertions are
    /// rejected.
    pub fn finish_loading(&mut self) {
        self.state = LoadState::Ready;
        #[cfg(feature = "tracing")]
        tracing::info!(
            level = self.id.raw(),
            obstacles = self.hierarchy.leaf_count(),
            "collision world sealed"
        );
    }

    /// Does any obstacle overlap the candidate box?
    pub fn query_overlap(&self, candidate: &Aabb) -> bool {
        if !self.ready() {
            return false;
        }
        #[cfg(feature = "metrics")]
        let started = crate::metrics::is_enabled().then(web_time::Instant::now);

        let hit = self.hierarchy.query_overlap(candidate);

        #[cfg(feature = "metrics")]
        if let Some(started) = started {
            self.metrics
                .record_overlap_query(started.elapsed().as_secs_f32() * 1_000_000.0);
        }
        hit
    }

    /// Does the ground-plane segment from `start` to `end` cross any
    /// obstacle?
    pub fn query_segment(&self, start: Vec2, end: Vec2) -> bool {
        if !self.ready() {
            return false;
        }
        #[cfg(feature = "metrics")]
        let started = crate::metrics::is_enabled().then(web_time::Instant::now);

        let hit = self.hierarchy.query_segment(start, end);

        #[cfg(feature = "metrics")]
        if let Some(started) = started {
            self.metrics
                .record_segment_query(started.elapsed().as_secs_f32() * 1_000_000.0);
        }
        hit
    }

    /// Player-movement check: would a footprint of the given half-extents
    /// centered at `center` collide with any obstacle?
    pub fn collides(&self, center: Vec2, half_extents: Vec2) -> bool {
        let candidate = Aabb::from_corners_xz(center - half_extents, center + half_extents);
        self.query_overlap(&candidate)
    }

    /// Camera-occlusion check: is the line of sight from `eye` to `target`
    /// blocked by any obstacle?
    pub fn occluded(&self, eye: Vec2, target: Vec2) -> bool {
        self.query_segment(eye, target)
    }

    fn ready(&self) -> bool {
        if self.state == LoadState::Ready {
            return true;
        }
        #[cfg(feature = "tracing")]
        tracing::warn!(
            level = self.id.raw(),
            "query before finish_loading; reporting no collision"
        );
        false
    }
}

#[cfg(test)]
#[path = "world_test.rs"]
mod world_test;
