//! Camera state and presentation pose
//!
//! The camera state carries the angles driven by the simulation step. Each
//! frame the presentation step derives a `CameraPose` from it: a plain
//! (position, yaw, pitch, roll) tuple the renderer consumes.
//!
//! The death sequence is a scripted, time-driven blend, not a physical
//! simulation: the camera tips forward, banks out of any lean, rises, and
//! drifts off over DYING_TIME milliseconds.

use std::f32::consts::PI;

use crate::math::Vec4;
use super::player::{dying_factor, turning_factor, PlayerState};
use super::{DYING_TIME, EYE_HEIGHT};

/// Which input/camera path runs each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Normal play: the camera sits at the player's eyes and banks into turns.
    #[default]
    Character,
    /// Detached free-fly observer (noclip). Bypasses player movement and
    /// collision entirely.
    FreeFly,
}

/// Camera angles plus the free-fly position.
///
/// Yaw is kept wrapped to (-pi, pi] and pitch clamped to [-pi/2, pi/2].
/// `position` is only meaningful in free-fly mode; in character mode the
/// pose position is derived from the player instead.
#[derive(Debug, Clone, Copy)]
pub struct CameraState {
    pub yaw: f32,
    pub pitch: f32,
    pub position: Vec4,
}

impl CameraState {
    pub fn new() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            position: Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    /// Re-establish the angle ranges after input has been applied.
    pub fn clamp_angles(&mut self) {
        if self.yaw > PI {
            self.yaw -= 2.0 * PI;
        } else if self.yaw < -PI {
            self.yaw += 2.0 * PI;
        }
        self.pitch = self.pitch.clamp(-PI / 2.0, PI / 2.0);
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new()
    }
}

/// The pose handed to the renderer each frame.
#[derive(Debug, Clone, Copy)]
pub struct CameraPose {
    pub position: Vec4,
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

/// Derive the camera pose for this frame. Pure: reads state, mutates nothing.
pub fn camera_pose(
    mode: CameraMode,
    camera: &CameraState,
    player_position: Vec4,
    player: &PlayerState,
) -> CameraPose {
    match mode {
        CameraMode::FreeFly => CameraPose {
            position: camera.position,
            yaw: camera.yaw,
            pitch: camera.pitch,
            roll: 0.0,
        },
        CameraMode::Character => {
            let mut position = player_position + Vec4::new(0.0, EYE_HEIGHT, 0.0, 0.0);
            let mut yaw = camera.yaw;
            let mut pitch = 0.0;
            // Bank into the turn
            let mut roll = PI / 9.0 * turning_factor(player.turn);

            if player.dead {
                let dead_factor = dying_factor(player.dead_timer);
                // Keep slowly panning after the main animation has played out
                if player.dead_timer > DYING_TIME / 2.0 {
                    yaw += 0.0002 * (player.dead_timer - DYING_TIME / 2.0);
                }
                pitch = -PI / 7.0 * dead_factor;
                roll = (1.0 - dead_factor) * roll;
                position = position + Vec4::new(0.0, dead_factor * 6.0, 0.0, 0.0);
                position = position
                    + Vec4::new(pitch.cos() * yaw.sin(), 0.0, pitch.cos() * yaw.cos(), 0.0)
                        * (10.0 * dead_factor);
            }

            CameraPose { position, yaw, pitch, roll }
        }
    }
}
