//! collision_plugin - Framework/engine independent 2.5D collision core
//!
//! This crate provides the spatial collision index used by the game layer:
//! a hierarchical axis-aligned bounding box (AABB) structure over the X/Z
//! ground plane, built once per level load and queried every frame.
//!
//! # Features
//!
//! - **Static grid hierarchy**: the map square is recursively quartered into
//!   a fixed grid of accepting cells; obstacles are routed in as leaves
//! - **Region overlap queries**: player-movement collision against obstacle
//!   footprints, with O(1) pruning per rejected subtree
//! - **Segment queries**: camera-occlusion / line-of-sight tests in the
//!   ground plane, hardened against axis-aligned (zero-slope) segments
//! - **Footprint derivation**: obstacle extents computed from instance
//!   transforms (position, half-extents, height)
//!
//! Rendering, input, and level-file parsing live in the engine bridge; this
//! crate only consumes obstacle geometry and answers boolean queries.
//!
//! # Example
//!
//! ```
//! use collision_plugin::{CollisionWorld, HierarchyConfig};
//! use glam::{Vec2, Vec3};
//!
//! let mut world = CollisionWorld::new(HierarchyConfig::new(64.0));
//! world
//!   .insert_instance(Vec3::new(2.5, 0.0, 2.5), 2.0, Vec2::splat(0.5))
//!   .unwrap();
//! world.finish_loading();
//!
//! // Player candidate footprint vs. obstacles.
//! assert!(world.collides(Vec2::new(2.5, 2.5), Vec2::splat(0.1)));
//! // Camera line-of-sight to the player.
//! assert!(world.occluded(Vec2::ZERO, Vec2::new(5.0, 5.0)));
//! ```

pub mod bounds;
pub mod config;
pub mod error;
pub mod footprint;
pub mod grid;
pub mod node;
pub mod segment;
pub mod world;

// Engine-agnostic metrics collection
pub mod metrics;

// Re-export commonly used items
pub use bounds::Aabb;
pub use config::HierarchyConfig;
pub use error::CollisionError;
pub use grid::{Hierarchy, QueryStats};
pub use node::{HierarchyNode, NodeKind};
pub use segment::Segment;
pub use world::{CollisionWorld, LevelId, LoadState};
