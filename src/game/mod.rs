//! Game simulation core
//!
//! A small ECS-flavored simulation: entities live in fixed parallel
//! component arrays tagged with capability masks, and a handful of systems
//! run over them once per frame in a fixed order (input, steering,
//! collision, integration). One collision is all it takes; the death
//! sequence is a camera animation, not gameplay.
//!
//! Key concepts:
//! - Entity: plain index into the component arrays
//! - ComponentMask: bitset deciding which arrays hold valid data
//! - World: the arrays themselves, spawned once and never shrunk
//! - GameState: the per-session context threaded through update/draw

pub mod camera;
pub mod collision;
pub mod entity;
pub mod player;
pub mod state;
pub mod world;

pub use camera::{CameraMode, CameraPose};
pub use entity::{ComponentMask, Entity};
pub use state::GameState;
pub use world::World;

/// Radians of look change per pixel of mouse movement; doubles as the yaw
/// rate at full turn lean, in radians per millisecond.
pub const MOUSE_SENSITIVITY: f32 = 0.006;

/// Movement speed in world units per millisecond.
pub const MOVEMENT_SPEED: f32 = 0.02;

/// Milliseconds of held input to reach a full turn lean.
pub const TURNING_TIME: f32 = 1500.0;

/// Length of the death camera animation in milliseconds.
pub const DYING_TIME: f32 = 3000.0;

/// Camera height above the player's feet.
pub const EYE_HEIGHT: f32 = 1.4;

/// Collider radius of the player sphere.
pub const PLAYER_RADIUS: f32 = 0.2;

/// Collider radius of each enemy sphere.
pub const ENEMY_RADIUS: f32 = 0.5;
