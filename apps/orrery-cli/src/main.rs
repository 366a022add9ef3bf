use clap::{Parser, Subcommand};
use orrery_render::{DebugTextRenderer, RenderFrame, Renderer};
use orrery_scene::SceneConfig;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "orrery-cli", about = "Headless tool for orrery scenes")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and the bodies of a scene
    Info {
        /// Scene configuration (YAML)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Load a scene configuration and report problems
    Validate {
        /// Scene configuration (YAML)
        #[arg(long)]
        config: PathBuf,
    },
    /// Print the frame the viewer would draw at a given time
    Frame {
        /// Seconds since startup
        #[arg(short, long, default_value = "0")]
        time: f32,
        /// Scene configuration (YAML)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Write the built-in scene configuration as YAML
    DumpConfig,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SceneConfig> {
    match path {
        Some(path) => {
            tracing::debug!("loading {}", path.display());
            Ok(SceneConfig::load(path)?)
        }
        None => Ok(SceneConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info { config } => {
            let config = load_config(config.as_deref())?;
            println!("orrery-cli v{}", env!("CARGO_PKG_VERSION"));
            println!(
                "window: {}x{} \"{}\"",
                config.window.width, config.window.height, config.window.title
            );
            println!(
                "projection: near={} far={} aspect={:.3}",
                config.projection.near,
                config.projection.far,
                config.aspect()
            );
            println!("bodies: {}", config.bodies.len());
            for body in &config.bodies {
                println!(
                    "  {:<8} half_extent={:.2} rotation={:.2} texture={}",
                    body.name,
                    body.half_extent,
                    body.rotation,
                    config.texture_path(body).display()
                );
            }
        }
        Commands::Validate { config } => {
            let scene = SceneConfig::load(&config)?;
            println!(
                "{}: ok ({} bodies)",
                config.display(),
                scene.bodies.len()
            );
        }
        Commands::Frame { time, config } => {
            let config = load_config(config.as_deref())?;
            let frame = RenderFrame::compose(
                &config.camera(),
                &config.bodies,
                time.max(0.0),
                config.aspect(),
                config.projection.near,
                config.projection.far,
            );
            let mut renderer = DebugTextRenderer::new();
            print!("{}", renderer.render(&frame));
        }
        Commands::DumpConfig => {
            print!("{}", SceneConfig::default().to_yaml()?);
        }
    }

    Ok(())
}
