//! Renderer
//!
//! Thin 3D view over the entity table: takes the camera pose computed by
//! the presentation step and draws every entity that carries a model. The
//! pose is (position, yaw, pitch, roll); roll is applied by tilting the
//! camera's up vector so the view banks with the player's lean.

pub mod models;

pub use models::{ModelId, ModelLibrary};

use macroquad::prelude::*;

use crate::game::camera::CameraPose;
use crate::game::{ComponentMask, World};

pub struct Renderer {
    width: f32,
    height: f32,
}

impl Renderer {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Track the viewport so the projection keeps the right aspect ratio.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Draw one frame of the world from the given pose.
    pub fn draw(&self, world: &World, models: &ModelLibrary, pose: &CameraPose, _dt: f32) {
        clear_background(Color::from_rgba(96, 134, 180, 255));

        let position = vec3(pose.position.x, pose.position.y, pose.position.z);
        let direction = view_direction(pose.yaw, pose.pitch);
        let up = rolled_up(direction, pose.roll);

        set_camera(&Camera3D {
            position,
            target: position + direction,
            up,
            aspect: Some(self.width / self.height.max(1.0)),
            ..Default::default()
        });

        for entity in world.query(ComponentMask::POSITION | ComponentMask::MODEL) {
            if let Some(model) = world.models[entity.index()] {
                models.draw(model, world.positions[entity.index()]);
            }
        }

        // Back to screen space for the GUI overlay
        set_default_camera();
    }
}

/// Unit view direction for a yaw/pitch pair. Yaw zero looks down -z.
fn view_direction(yaw: f32, pitch: f32) -> Vec3 {
    vec3(
        -yaw.sin() * pitch.cos(),
        pitch.sin(),
        -yaw.cos() * pitch.cos(),
    )
}

/// Camera up vector banked around the view direction by `roll`.
fn rolled_up(direction: Vec3, roll: f32) -> Vec3 {
    let right = direction.cross(vec3(0.0, 1.0, 0.0));
    if right.length() < 1e-4 {
        // Looking straight up or down; any up perpendicular to the view works
        return vec3(0.0, 1.0, 0.0);
    }
    let right = right.normalize();
    let up = right.cross(direction).normalize();
    up * roll.cos() + right * roll.sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_direction_at_rest() {
        let dir = view_direction(0.0, 0.0);
        assert!((dir.z + 1.0).abs() < 1e-6);
        assert!(dir.x.abs() < 1e-6);
        assert!(dir.y.abs() < 1e-6);
    }

    #[test]
    fn test_view_direction_pitch_up() {
        let dir = view_direction(0.0, std::f32::consts::FRAC_PI_2);
        assert!((dir.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rolled_up_without_roll() {
        let up = rolled_up(view_direction(0.7, 0.2), 0.0);
        assert!(up.y > 0.9);
        assert!((up.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_rolled_up_banks() {
        let up = rolled_up(view_direction(0.0, 0.0), 0.3);
        // Banking tips the up vector sideways
        assert!(up.x.abs() > 0.1);
        assert!((up.length() - 1.0).abs() < 1e-5);
    }
}
