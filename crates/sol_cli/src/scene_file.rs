//! JSON scene description and the built-in demo scene.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sol_tracer::{
    Color, Light, LinearColor, Material, Plane, Primitive, Scene, Sphere, TracerOptions, Vec3,
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Everything needed for one render, as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub options: TracerOptions,
    #[serde(default)]
    pub primitives: Vec<Primitive>,
    #[serde(default)]
    pub lights: Vec<Light>,
}

impl SceneFile {
    /// Load a scene from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open scene file {}", path.display()))?;
        let scene: SceneFile = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse scene file {}", path.display()))?;

        log::info!(
            "Loaded {} primitives and {} lights from {}",
            scene.primitives.len(),
            scene.lights.len(),
            path.display()
        );
        Ok(scene)
    }

    /// Two spheres over a floor, lit by one key light.
    pub fn demo() -> Self {
        let material = |r, g, b, ambient: Color| {
            Material::new(
                LinearColor::from(Color::rgb(r, g, b)),
                LinearColor::from(ambient),
                1.0,
                0.5,
                4.0,
            )
        };

        let floor = material(220, 200, 220, Color::BLACK);
        let orange = material(220, 150, 20, Color::rgb(10, 5, 5));
        let green = material(20, 230, 10, Color::rgb(5, 10, 5));

        Self {
            options: TracerOptions::default(),
            primitives: vec![
                Sphere::new(Vec3::new(-20.0, 10.0, 100.0), 5.0, green).into(),
                Sphere::new(Vec3::new(0.0, 0.0, 220.0), 45.0, orange).into(),
                Plane::new(Vec3::new(0.0, -30.0, 0.0), Vec3::Y, floor)
                    .with_extent(100.0, 100.0)
                    .into(),
            ],
            lights: vec![Light::new(
                Vec3::new(60.0, 120.0, 60.0),
                LinearColor::WHITE,
                4.5,
            )],
        }
    }

    /// Borrow the primitives and lights for rendering.
    pub fn scene(&self) -> Scene<'_> {
        Scene::new(&self.primitives, &self.lights)
    }
}
