use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_renderer::{Camera, LightingMode, RenderConfig, Vec3};
use std::path::PathBuf;

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Built-in scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneChoice {
    SolidSpheres,
    Primitives,
    LitSpheres,
    Reference,
    /// Load the model given with --mesh
    Obj,
}

/// Lighting modes as command line values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    ObservedArea,
    Radiance,
    Brdf,
    Combined,
}

impl From<Mode> for LightingMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::ObservedArea => LightingMode::ObservedArea,
            Mode::Radiance => LightingMode::Radiance,
            Mode::Brdf => LightingMode::Brdf,
            Mode::Combined => LightingMode::Combined,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(about = "Render a scene with the Lumen direct-lighting ray tracer")]
pub struct Args {
    /// Scene to render
    #[arg(short, long, value_enum, default_value = "reference")]
    pub scene: SceneChoice,

    /// OBJ file for the obj scene
    #[arg(long, required_if_eq("scene", "obj"))]
    pub mesh: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value_t = 640, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 480, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Output image (.png, .bmp or .jpg)
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// JSON render config; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Lighting mode
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Ignore occlusion between surfaces and lights
    #[arg(long)]
    pub no_shadows: bool,

    /// Shade pixels on the calling thread only
    #[arg(long)]
    pub single_threaded: bool,

    /// Animation time in seconds; spins the scene's meshes
    #[arg(short, long)]
    pub time: Option<f32>,

    /// Camera field of view in degrees
    #[arg(long)]
    pub fov: Option<f32>,

    /// Turn the camera around world Y, in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub yaw: Option<f32>,

    /// Tilt the camera up or down, in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub pitch: Option<f32>,

    /// Move the camera along its right, up and forward axes
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    pub camera_offset: Option<Vec<f32>>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Apply command line overrides on top of `config`.
    pub fn apply_to(&self, config: &mut RenderConfig) {
        if let Some(mode) = self.mode {
            config.lighting_mode = mode.into();
        }
        if self.no_shadows {
            config.shadows_enabled = false;
        }
        if self.single_threaded {
            config.parallel = false;
        }
    }

    /// Apply the camera flags, in the order fov, orientation, offset.
    pub fn apply_to_camera(&self, camera: &mut Camera) {
        if let Some(fov) = self.fov {
            camera.set_fov(fov);
        }
        if self.yaw.is_some() || self.pitch.is_some() {
            let yaw = self.yaw.unwrap_or_default().to_radians();
            let pitch = self.pitch.unwrap_or_default().to_radians();
            camera.rotate(yaw, pitch);
        }
        if let Some(offset) = self.camera_offset.as_deref() {
            if let &[x, y, z] = offset {
                camera.translate(Vec3::new(x, y, z));
            }
        }
    }
}
