//! Game state and the per-frame simulation step
//!
//! `GameState` owns the entity world, the player's bookkeeping, the camera
//! and the renderer, and is driven by the host frame loop through three
//! entry points: `update` advances the simulation, `draw` derives a camera
//! pose and renders, `resize` forwards viewport changes.
//!
//! All time values are in milliseconds. Death freezes the simulation clock
//! (everything moves with an effective dt of zero) while the death timer
//! keeps counting real time.

use macroquad::rand::gen_range;

use crate::config::Settings;
use crate::input::FrameInput;
use crate::math::Vec4;
use crate::render::{ModelLibrary, Renderer};
use crate::ui::{Constraints, FlexRow, Widget};

use super::camera::{camera_pose, CameraMode, CameraState};
use super::collision::collides;
use super::entity::{ComponentMask, Entity};
use super::player::{turning_factor, PlayerState};
use super::world::{Collider, World};
use super::{ENEMY_RADIUS, MOVEMENT_SPEED, PLAYER_RADIUS, TURNING_TIME};

pub struct GameState {
    world: World,
    models: ModelLibrary,
    renderer: Renderer,
    hud: FlexRow,

    player: Entity,
    player_data: PlayerState,
    camera: CameraState,
    mode: CameraMode,
    mouse_sensitivity: f32,
}

impl GameState {
    /// Spawn the session's entities and set up the collaborators.
    ///
    /// The player always occupies the first slot. If the entity table fills
    /// up before every enemy is placed, the session simply runs with fewer
    /// enemies.
    pub fn new(
        models: ModelLibrary,
        mut hud: FlexRow,
        settings: &Settings,
        width: f32,
        height: f32,
    ) -> Self {
        let mut world = World::with_capacity(settings.entity_capacity.max(1));

        let player = world.spawn().expect("capacity is at least 1");
        world.masks[player.index()] =
            ComponentMask::POSITION | ComponentMask::VELOCITY | ComponentMask::COLLIDER;
        world.positions[player.index()] = Vec4::new(0.0, 0.0, 0.0, 1.0);
        world.velocities[player.index()] = Vec4::ZERO;
        world.colliders[player.index()] = Collider { radius: PLAYER_RADIUS };

        if let Some(ground) = world.spawn() {
            world.masks[ground.index()] = ComponentMask::POSITION | ComponentMask::MODEL;
            world.positions[ground.index()] = Vec4::new(0.0, 0.0, 0.0, 1.0);
            world.models[ground.index()] = Some(models.ground);
        } else {
            eprintln!("Entity table full, no slot for the ground");
        }

        let half = settings.enemy_spawn_range / 2.0;
        for _ in 0..settings.enemy_count {
            let Some(enemy) = world.spawn() else {
                eprintln!(
                    "Entity table full, spawned {} of {} enemies",
                    world.spawned().saturating_sub(2),
                    settings.enemy_count
                );
                break;
            };
            world.masks[enemy.index()] = ComponentMask::POSITION
                | ComponentMask::MODEL
                | ComponentMask::VELOCITY
                | ComponentMask::COLLIDER
                | ComponentMask::ENEMY;
            world.positions[enemy.index()] =
                Vec4::new(gen_range(-half, half), 0.0, gen_range(-half, half), 1.0);
            world.models[enemy.index()] = Some(models.enemy);
            world.velocities[enemy.index()] = Vec4::ZERO;
            world.colliders[enemy.index()] = Collider { radius: ENEMY_RADIUS };
        }

        hud.layout(Constraints::exact(width, height));

        Self {
            world,
            models,
            renderer: Renderer::new(width, height),
            hud,
            player,
            player_data: PlayerState::new(),
            camera: CameraState::new(),
            mode: CameraMode::default(),
            mouse_sensitivity: settings.mouse_sensitivity,
        }
    }

    /// Which input/camera path is currently active.
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Advance the simulation by `dt` milliseconds.
    pub fn update(&mut self, dt: f32, input: &FrameInput) {
        // Death freeze: the world stops, only the death clock keeps running
        let dt = if self.player_data.dead {
            self.player_data.dead_timer += dt;
            0.0
        } else {
            dt
        };

        if input.toggle_camera {
            self.mode = match self.mode {
                CameraMode::Character => CameraMode::FreeFly,
                CameraMode::FreeFly => CameraMode::Character,
            };
        }

        // =====================================================================
        // Turning and look
        // =====================================================================
        match self.mode {
            CameraMode::FreeFly => {
                self.camera.yaw -= input.mouse_delta.0 * self.mouse_sensitivity;
                self.camera.pitch -= input.mouse_delta.1 * self.mouse_sensitivity;
            }
            CameraMode::Character => {
                let player = &mut self.player_data;
                if input.left != input.right {
                    player.turn += if input.left { -dt } else { dt };
                } else if player.turn.abs() < TURNING_TIME / 3.0 {
                    // Relax the lean back to neutral, but only from a shallow
                    // lean; a full lean holds until countersteered
                    if player.turn < -dt {
                        player.turn += dt;
                    } else if player.turn > dt {
                        player.turn -= dt;
                    } else {
                        player.turn = 0.0;
                    }
                }
                player.turn = player.turn.clamp(-TURNING_TIME, TURNING_TIME);
                self.camera.yaw -= self.mouse_sensitivity * turning_factor(player.turn) * dt;
            }
        }
        self.camera.clamp_angles();

        // =====================================================================
        // Movement
        // =====================================================================
        let yaw = self.camera.yaw;
        let forward = Vec4::new(
            -MOVEMENT_SPEED * yaw.sin(),
            0.0,
            -MOVEMENT_SPEED * yaw.cos(),
            0.0,
        );
        let right = forward.cross3(Vec4::UP);

        match self.mode {
            CameraMode::FreeFly => {
                let mut displacement = Vec4::ZERO;
                if input.forward {
                    displacement = displacement + forward;
                }
                if input.left {
                    displacement = displacement - right;
                }
                if input.backward {
                    displacement = displacement - forward;
                }
                if input.right {
                    displacement = displacement + right;
                }
                if input.fly_up {
                    displacement = displacement + Vec4::new(0.0, MOVEMENT_SPEED, 0.0, 0.0);
                }
                if input.fly_down {
                    displacement = displacement - Vec4::new(0.0, MOVEMENT_SPEED, 0.0, 0.0);
                }
                self.camera.position = self.camera.position + displacement * dt;
            }
            CameraMode::Character => {
                // Forward only; strafing and backpedaling are not part of
                // this mode
                self.world.velocities[self.player.index()] =
                    if input.forward { forward } else { Vec4::ZERO };
            }
        }

        // =====================================================================
        // Systems
        // =====================================================================
        self.steer_enemies();
        if !self.player_data.dead {
            self.check_player_collisions(dt);
        }
        self.integrate(dt);
    }

    /// Render the frame: derive the camera pose, draw the world, then the
    /// GUI overlay. Reads state, mutates nothing.
    pub fn draw(&self, dt: f32) {
        let pose = camera_pose(
            self.mode,
            &self.camera,
            self.world.positions[self.player.index()],
            &self.player_data,
        );
        self.renderer.draw(&self.world, &self.models, &pose, dt);
        self.hud.draw(0.0, 0.0);
    }

    /// Forward a viewport change to the renderer and re-lay-out the GUI.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.renderer.resize(width, height);
        self.hud.layout(Constraints::exact(width, height));
    }

    /// Point every enemy's velocity at the player.
    fn steer_enemies(&mut self) {
        let required = ComponentMask::POSITION | ComponentMask::VELOCITY | ComponentMask::ENEMY;
        let player_position = self.world.positions[self.player.index()];
        for enemy in self.world.query(required) {
            let toward = player_position - self.world.positions[enemy.index()];
            self.world.velocities[enemy.index()] = if toward.is_zero3() {
                Vec4::ZERO
            } else {
                toward.normalize() / 100.0
            };
        }
    }

    /// Sweep the player against every collidable entity. The first hit ends
    /// the session; anything after it is irrelevant.
    fn check_player_collisions(&mut self, dt: f32) {
        let required = ComponentMask::POSITION | ComponentMask::VELOCITY | ComponentMask::COLLIDER;
        if !self.world.has(self.player, required) {
            return;
        }
        let index = self.player.index();
        let position = self.world.positions[index];
        let velocity = self.world.velocities[index];
        let radius = self.world.colliders[index].radius;

        for other in self.world.query(required) {
            if other == self.player {
                continue;
            }
            let relative = (velocity - self.world.velocities[other.index()]) * dt;
            if collides(
                position,
                self.world.positions[other.index()],
                radius,
                self.world.colliders[other.index()].radius,
                relative,
            ) {
                println!("Player hit, starting death sequence");
                self.player_data.kill();
                break;
            }
        }
    }

    /// Apply velocities to positions.
    fn integrate(&mut self, dt: f32) {
        let required = ComponentMask::POSITION | ComponentMask::VELOCITY;
        for entity in self.world.query(required) {
            let i = entity.index();
            self.world.positions[i] = self.world.positions[i] + self.world.velocities[i] * dt;
        }
    }
}
