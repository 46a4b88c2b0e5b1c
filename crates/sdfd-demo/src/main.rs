use anyhow::{Context, Result, ensure};
use sdfd::coords::Vec2;
use sdfd::geometry::{Circle, Plane};
use sdfd::logging::{LoggingConfig, init_logging};
use sdfd::scene::{Object, Scene};

const OUTPUT: &str = "output.sdfd";

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let scene = square_with_hole();
    sdfd::store_to_file(&scene, OUTPUT).with_context(|| format!("writing {OUTPUT}"))?;

    let loaded = sdfd::load_from_file(OUTPUT).with_context(|| format!("reading {OUTPUT}"))?;
    ensure!(loaded == scene, "{OUTPUT} did not load back to the scene that was stored");
    loaded.validate().context("stored scene is malformed")?;

    let probes = [
        ("hole center", Vec2::new(32.0, 32.0)),
        ("corner", Vec2::new(18.0, 18.0)),
        ("edge midpoint", Vec2::new(32.0, 16.0)),
        ("outside", Vec2::new(4.0, 4.0)),
    ];

    for (name, point) in probes {
        let d = loaded.evaluate(0, point)?;
        log::info!("{name:>14} ({:>5.1}, {:>5.1}): {d:>8.3}", point.x, point.y);
    }

    // Subpixel layout: three samples per pixel horizontally.
    let lcd = loaded.with_scale(Vec2::new(3.0, 1.0));
    for (name, point) in probes {
        let scaled = Vec2::new(point.x * 3.0, point.y);
        let d = lcd.evaluate(0, scaled)?;
        log::info!("{name:>14} scaled ({:>5.1}, {:>5.1}): {d:>8.3}", scaled.x, scaled.y);
    }

    Ok(())
}

/// A 32x32 square with a radius 12 circle carved out of its center.
fn square_with_hole() -> Scene {
    let mut object = Object::new();

    let left = object.push_primitive(Plane::from_point_and_normal(Vec2::new(16.0, 16.0), Vec2::new(-1.0, 0.0)));
    let top = object.push_primitive(Plane::from_point_and_normal(Vec2::new(16.0, 16.0), Vec2::new(0.0, -1.0)));
    let right = object.push_primitive(Plane::from_point_and_normal(Vec2::new(48.0, 48.0), Vec2::new(1.0, 0.0)));
    let bottom = object.push_primitive(Plane::from_point_and_normal(Vec2::new(48.0, 48.0), Vec2::new(0.0, 1.0)));
    let hole = object.push_primitive(Circle::new(Vec2::new(32.0, 32.0), 12.0));

    let a = object.intersection(left, top);
    let b = object.intersection(right, bottom);
    let square = object.intersection(a, b);
    object.subtract(square, hole);

    let mut scene = Scene::new();
    scene.push_object(object);
    scene
}
