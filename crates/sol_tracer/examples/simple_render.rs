//! Simple ray tracer example.
//!
//! Renders two spheres over a floor and saves to PPM format.

use sol_tracer::{
    render_parallel, Color, ImageBuffer, Light, LinearColor, Material, Plane, Primitive, Scene,
    Sphere, TracerOptions, Vec3, DEFAULT_BUCKET_SIZE,
};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() {
    println!("Sol Ray Tracer - Simple Example");
    println!("===============================");

    let (primitives, lights) = build_scene();

    let options = TracerOptions::new()
        .with_resolution(640, 360)
        .with_lens(90.0, 50.0)
        .with_background(Color::rgb(10, 10, 10))
        .with_ambient_light(LinearColor::rgb(0.15, 0.15, 0.2));

    println!("Rendering {}x{}...", options.image_width, options.image_height);

    let start = std::time::Instant::now();
    let image = render_parallel(&options, Scene::new(&primitives, &lights), DEFAULT_BUCKET_SIZE);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> (Vec<Primitive>, Vec<Light>) {
    let shiny = |r, g, b| Material::matte(LinearColor::rgb(r, g, b), 1.0, 0.5, 16.0);

    let primitives: Vec<Primitive> = vec![
        Sphere::new(Vec3::new(-20.0, 10.0, 100.0), 5.0, shiny(0.08, 0.9, 0.04)).into(),
        Sphere::new(Vec3::new(0.0, 0.0, 220.0), 45.0, shiny(0.86, 0.59, 0.08)).into(),
        Plane::new(Vec3::new(0.0, -30.0, 0.0), Vec3::Y, shiny(0.86, 0.78, 0.86)).into(),
    ];

    let lights = vec![
        Light::new(Vec3::new(60.0, 120.0, 60.0), LinearColor::WHITE, 4.5),
        Light::new(Vec3::new(-80.0, 40.0, 0.0), LinearColor::rgb(0.3, 0.4, 1.0), 3.5),
    ];

    println!("Created {} primitives, {} lights", primitives.len(), lights.len());
    (primitives, lights)
}

fn save_ppm(image: &ImageBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let c = image.get(x, y);
            writeln!(writer, "{} {} {}", c.r, c.g, c.b)?;
        }
    }

    Ok(())
}
