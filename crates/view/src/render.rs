use foundation::math::Vec3;
use scene::World;
use scene::components::{Material, Shape3D, Transform};

use crate::camera::Camera3D;

/// Fixed scene lighting, part of every render frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Lighting {
    pub ambient_color: String,
    pub ambient_intensity: f64,
    pub directional_color: String,
    pub directional_position: Vec3,
    pub directional_intensity: f64,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient_color: "#d3d3d3".to_string(),
            ambient_intensity: 0.8,
            directional_color: "#d3d3d3".to_string(),
            directional_position: Vec3::new(-400.0, 100.0, 400.0),
            directional_intensity: 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    Draw3D {
        transform: Transform,
        shape: Shape3D,
        material: Material,
    },
}

/// Everything a backend needs to draw one redraw cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub camera: Camera3D,
    pub lighting: Lighting,
    pub commands: Vec<RenderCommand>,
}

pub struct Renderer;

impl Renderer {
    pub fn collect(world: &World, camera: Camera3D) -> RenderFrame {
        let mut commands = Vec::new();
        for (entity, transform, drawable) in world.drawables_3d() {
            let material = world.material(entity).cloned().unwrap_or_default();
            commands.push(RenderCommand::Draw3D {
                transform,
                shape: drawable.shape,
                material,
            });
        }
        RenderFrame {
            camera,
            lighting: Lighting::default(),
            commands,
        }
    }
}
