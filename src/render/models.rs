//! Model library
//!
//! Opaque model handles for the entity table. The geometry itself is
//! procedural (a ground slab and a pyramid), with optional textures loaded
//! from `assets/`. A failed texture load is reported and the model stays
//! flat-colored; the game keeps running with the degraded visual.

use macroquad::prelude::*;

use crate::math::Vec4;

/// Handle into the model library, stored in the entity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelId(usize);

#[derive(Debug, Clone, Copy)]
struct ModelVertex {
    position: [f32; 3],
    uv: [f32; 2],
    color: Color,
}

/// One renderable model: untransformed geometry plus an optional texture.
struct Model {
    vertices: Vec<ModelVertex>,
    indices: Vec<u16>,
    texture: Option<Texture2D>,
}

/// All models for the session, built once at startup.
pub struct ModelLibrary {
    models: Vec<Model>,
    pub ground: ModelId,
    pub enemy: ModelId,
}

impl ModelLibrary {
    /// Build the procedural geometry with no textures.
    pub fn procedural() -> Self {
        Self {
            models: vec![ground_model(), pyramid_model()],
            ground: ModelId(0),
            enemy: ModelId(1),
        }
    }

    /// Build the library and try to texture it from `assets/`.
    pub async fn load() -> Self {
        let mut library = Self::procedural();

        match load_texture("assets/textures/ground.png").await {
            Ok(texture) => {
                texture.set_filter(FilterMode::Nearest);
                library.models[library.ground.0].texture = Some(texture);
            }
            Err(e) => {
                eprintln!("Failed to load ground texture: {}, drawing it flat", e);
            }
        }

        library
    }

    /// Draw a model at a world position. Unknown handles draw nothing.
    pub fn draw(&self, id: ModelId, position: Vec4) {
        let Some(model) = self.models.get(id.0) else {
            return;
        };
        let vertices = model
            .vertices
            .iter()
            .map(|v| {
                Vertex::new(
                    v.position[0] + position.x,
                    v.position[1] + position.y,
                    v.position[2] + position.z,
                    v.uv[0],
                    v.uv[1],
                    v.color,
                )
            })
            .collect();
        draw_mesh(&Mesh {
            vertices,
            indices: model.indices.clone(),
            texture: model.texture.clone(),
        });
    }
}

/// A flat slab big enough to cover the enemy spawn area.
fn ground_model() -> Model {
    const HALF: f32 = 250.0;
    let color = Color::from_rgba(52, 84, 48, 255);
    Model {
        vertices: vec![
            ModelVertex { position: [-HALF, 0.0, -HALF], uv: [0.0, 0.0], color },
            ModelVertex { position: [HALF, 0.0, -HALF], uv: [1.0, 0.0], color },
            ModelVertex { position: [HALF, 0.0, HALF], uv: [1.0, 1.0], color },
            ModelVertex { position: [-HALF, 0.0, HALF], uv: [0.0, 1.0], color },
        ],
        indices: vec![0, 1, 2, 0, 2, 3],
        texture: None,
    }
}

/// A four-sided pyramid sitting on the ground plane, apex up.
///
/// Each face gets its own vertices so the two alternating tones read as
/// facets without any lighting.
fn pyramid_model() -> Model {
    const HALF: f32 = 0.5;
    const HEIGHT: f32 = 1.0;
    let tones = [
        Color::from_rgba(188, 96, 52, 255),
        Color::from_rgba(148, 72, 40, 255),
    ];

    let apex = [0.0, HEIGHT, 0.0];
    let corners = [
        [-HALF, 0.0, -HALF],
        [HALF, 0.0, -HALF],
        [HALF, 0.0, HALF],
        [-HALF, 0.0, HALF],
    ];

    let mut vertices = Vec::with_capacity(12);
    let mut indices = Vec::with_capacity(12);
    for (i, _) in corners.iter().enumerate() {
        let color = tones[i % 2];
        let a = corners[i];
        let b = corners[(i + 1) % 4];
        let base = vertices.len() as u16;
        vertices.push(ModelVertex { position: apex, uv: [0.5, 0.0], color });
        vertices.push(ModelVertex { position: a, uv: [0.0, 1.0], color });
        vertices.push(ModelVertex { position: b, uv: [1.0, 1.0], color });
        indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    Model {
        vertices,
        indices,
        texture: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_handles_are_distinct() {
        let library = ModelLibrary::procedural();
        assert_ne!(library.ground, library.enemy);
    }

    #[test]
    fn test_ground_is_a_quad() {
        let model = ground_model();
        assert_eq!(model.vertices.len(), 4);
        assert_eq!(model.indices.len(), 6);
    }

    #[test]
    fn test_pyramid_faces() {
        let model = pyramid_model();
        assert_eq!(model.vertices.len(), 12);
        assert_eq!(model.indices.len(), 12);
        for &i in &model.indices {
            assert!((i as usize) < model.vertices.len());
        }
        // Apex of every face sits at the full height
        assert!(model.vertices.iter().any(|v| v.position[1] == 1.0));
    }
}
