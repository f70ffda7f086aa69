mod cli;
mod config;
mod logger;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Args, SceneChoice};
use lumen_renderer::{demo, RenderConfig, Renderer, Scene};
use std::time::Instant;

fn build_scene(args: &Args) -> Result<Scene> {
    let scene = match args.scene {
        SceneChoice::SolidSpheres => demo::solid_spheres(),
        SceneChoice::Primitives => demo::primitives(),
        SceneChoice::LitSpheres => demo::lit_spheres(),
        SceneChoice::Reference => demo::reference(),
        SceneChoice::Obj => {
            let path = args.mesh.as_ref().context("--mesh is required for the obj scene")?;
            demo::obj_showcase(path).with_context(|| format!("Failed to load {}", path.display()))?
        }
    };
    Ok(scene)
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_logger(args.log_level.into());

    let mut config = match &args.config {
        Some(path) => config::load_render_config(path)?,
        None => RenderConfig::default(),
    };
    args.apply_to(&mut config);

    let mut scene = build_scene(&args)?;
    if let Some(time) = args.time {
        demo::animate(&mut scene, time);
    }
    args.apply_to_camera(scene.camera_mut());

    log::info!(
        "Rendering '{}' ({} primitives, {} lights) at {}x{}",
        scene.name(),
        scene.primitive_count(),
        scene.lights().len(),
        args.width,
        args.height
    );

    let start = Instant::now();
    let mut renderer = Renderer::with_config(args.width, args.height, config);
    renderer.render(&scene);
    log::info!("Render finished in {:.2?}", start.elapsed());

    renderer
        .save(&args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    Ok(())
}
