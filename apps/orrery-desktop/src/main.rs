mod hud;
mod state;

use anyhow::{Context, Result};
use clap::Parser;
use hud::Hud;
use orrery_assets::{ShaderSources, TextureData};
use orrery_render_wgpu::{BodyAssets, GpuContext, SceneRenderer, builtin_sources};
use orrery_scene::{FrameClock, SceneConfig};
use state::AppState;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{CursorGrabMode, Window, WindowId};

#[derive(Parser)]
#[command(name = "orrery-desktop", about = "Orrery desktop viewer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Scene configuration (YAML); built-in solar system when omitted
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Window and GPU resources that exist only while the loop is running.
///
/// Field order is drop order: GPU objects go before the device, the surface
/// before the window.
struct Graphics {
    renderer: SceneRenderer,
    hud: Hud,
    gpu: GpuContext,
    window: Arc<Window>,
}

impl Graphics {
    fn create(event_loop: &ActiveEventLoop, config: &SceneConfig) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(config.window.title.clone())
            .with_inner_size(PhysicalSize::new(config.window.width, config.window.height));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let gpu = GpuContext::new(window.clone()).context("failed to initialize GPU")?;

        let shaders = match (&config.assets.vertex_shader, &config.assets.fragment_shader) {
            (Some(vs), Some(fs)) => {
                tracing::info!("loading shaders {} and {}", vs.display(), fs.display());
                ShaderSources::load(vs, fs)?
            }
            _ => builtin_sources(),
        };

        let max_texture = gpu.device.limits().max_texture_dimension_2d;
        let textures: Vec<TextureData> = config
            .bodies
            .iter()
            .map(|body| {
                TextureData::load_or_fallback(config.texture_path(body)).fit_within(max_texture)
            })
            .collect();
        let assets: Vec<BodyAssets<'_>> = config
            .bodies
            .iter()
            .zip(&textures)
            .map(|(body, texture)| BodyAssets {
                name: &body.name,
                half_extent: body.half_extent,
                texture,
            })
            .collect();
        let renderer = SceneRenderer::new(&gpu, &shaders, &assets)?;
        let hud = Hud::new(&window, &gpu);

        capture_cursor(&window);

        Ok(Self {
            renderer,
            hud,
            gpu,
            window,
        })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.gpu.resize(size.width, size.height);
        let (width, height) = self.gpu.size();
        self.renderer.resize(&self.gpu.device, width, height);
    }

    fn redraw(&mut self, state: &mut AppState) {
        let time = state.clock.tick();
        state.advance(time);
        self.hud.record_frame(time);
        let frame = state.frame();

        let output = match self.gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.gpu.reconfigure();
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.render(
            &self.gpu.device,
            &self.gpu.queue,
            &view,
            &frame,
            state.wireframe,
        );
        if state.show_hud {
            self.hud.paint(&self.window, &self.gpu, &view, state);
        }

        output.present();
        self.window.request_redraw();
    }
}

fn capture_cursor(window: &Window) {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
    if let Err(e) = grabbed {
        tracing::warn!("could not capture cursor: {e}");
    }
    window.set_cursor_visible(false);
}

/// The cursor stays captured, so egui's pointer position is stale. Pointer
/// events go to the camera only.
fn hud_receives(event: &WindowEvent) -> bool {
    !matches!(
        event,
        WindowEvent::MouseWheel { .. }
            | WindowEvent::MouseInput { .. }
            | WindowEvent::CursorMoved { .. }
            | WindowEvent::CursorEntered { .. }
            | WindowEvent::CursorLeft { .. }
    )
}

enum Phase {
    Init,
    Running(Box<Graphics>),
    Terminated,
}

struct OrreryApp {
    state: AppState,
    phase: Phase,
    focused: bool,
    failure: Option<anyhow::Error>,
}

impl OrreryApp {
    fn new(config: SceneConfig) -> Self {
        Self {
            state: AppState::new(config),
            phase: Phase::Init,
            focused: true,
            failure: None,
        }
    }

    /// Release window and GPU resources and leave the loop.
    fn terminate(&mut self, event_loop: &ActiveEventLoop) {
        if !matches!(self.phase, Phase::Terminated) {
            self.phase = Phase::Terminated;
            tracing::info!(
                "render loop terminated after {:.1}s",
                self.state.clock.elapsed().as_secs_f32()
            );
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for OrreryApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if !matches!(self.phase, Phase::Init) {
            return;
        }

        match Graphics::create(event_loop, &self.state.config) {
            Ok(graphics) => {
                self.state.wireframe_supported = graphics.renderer.supports_wireframe();
                self.state.clock = FrameClock::new();
                tracing::info!(
                    "rendering {} bodies with {} backend",
                    graphics.renderer.body_count(),
                    graphics.gpu.backend().to_str()
                );
                graphics.window.request_redraw();
                self.phase = Phase::Running(Box::new(graphics));
            }
            Err(e) => {
                tracing::error!("initialization failed: {e:#}");
                self.failure = Some(e);
                self.terminate(event_loop);
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Phase::Running(graphics) = &mut self.phase else {
            return;
        };

        if self.state.show_hud
            && hud_receives(&event)
            && graphics.hud.on_window_event(&graphics.window, &event)
        {
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.terminate(event_loop),
            WindowEvent::Resized(size) => graphics.resize(size),
            WindowEvent::Focused(focused) => {
                self.focused = focused;
                if focused {
                    capture_cursor(&graphics.window);
                } else {
                    self.state.input.release_all();
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                self.state
                    .handle_key(key, key_state == ElementState::Pressed);
                if self.state.quit_requested {
                    self.terminate(event_loop);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => self.state.scroll(delta),
            WindowEvent::RedrawRequested => graphics.redraw(&mut self.state),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.focused && matches!(self.phase, Phase::Running(_)) {
                self.state.mouse_motion(delta.0, delta.1);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Phase::Running(graphics) = &self.phase {
            graphics.window.request_redraw();
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<SceneConfig> {
    let config = match path {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => SceneConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("orrery-desktop starting");
    let config = load_config(cli.config.as_deref())?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = OrreryApp::new(config);
    event_loop.run_app(&mut app)?;

    match app.failure.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
