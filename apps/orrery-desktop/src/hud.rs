use crate::state::AppState;
use egui::Context as EguiContext;
use orrery_render_wgpu::GpuContext;
use orrery_scene::FrameTime;
use winit::event::WindowEvent;
use winit::window::Window;

/// Weight of the newest sample in the smoothed frame rate.
const FPS_SMOOTHING: f32 = 0.1;

/// egui overlay with frame and camera readouts.
pub struct Hud {
    ctx: EguiContext,
    winit: egui_winit::State,
    renderer: egui_wgpu::Renderer,
    fps: f32,
}

impl Hud {
    pub fn new(window: &Window, gpu: &GpuContext) -> Self {
        let ctx = EguiContext::default();
        let winit = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let format = gpu.surface_format();
        let renderer = egui_wgpu::Renderer::new(&gpu.device, format, None, 1, false);
        Self {
            ctx,
            winit,
            renderer,
            fps: 0.0,
        }
    }

    /// Returns true when egui consumed the event.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.winit.on_window_event(window, event).consumed
    }

    /// Track frame rate every frame, even while hidden.
    pub fn record_frame(&mut self, time: FrameTime) {
        if time.delta > 0.0 {
            let sample = 1.0 / time.delta;
            self.fps = if self.fps == 0.0 {
                sample
            } else {
                self.fps + (sample - self.fps) * FPS_SMOOTHING
            };
        }
    }

    pub fn paint(
        &mut self,
        window: &Window,
        gpu: &GpuContext,
        target: &wgpu::TextureView,
        state: &AppState,
    ) {
        let raw_input = self.winit.take_egui_input(window);
        let fps = self.fps;
        let full_output = self.ctx.run(raw_input, |ctx| draw_panel(ctx, state, fps));
        self.winit
            .handle_platform_output(window, full_output.platform_output);

        let paint_jobs = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        let (width, height) = gpu.size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer
                .update_texture(&gpu.device, &gpu.queue, *id, image_delta);
        }
        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("hud_encoder"),
            });
        self.renderer.update_buffers(
            &gpu.device,
            &gpu.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("hud_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            self.renderer.render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        gpu.queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}

fn draw_panel(ctx: &EguiContext, state: &AppState, fps: f32) {
    let camera = &state.camera;
    egui::Window::new("Orrery")
        .anchor(egui::Align2::LEFT_TOP, [8.0, 8.0])
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.label(format!("FPS: {fps:.0}"));
            ui.label(format!("Time: {:.1}s", state.last_frame.elapsed));
            ui.separator();

            let p = camera.position;
            ui.label(format!("Position: ({:.1}, {:.1}, {:.1})", p.x, p.y, p.z));
            ui.label(format!(
                "Yaw: {:.1}  Pitch: {:.1}",
                camera.yaw(),
                camera.pitch()
            ));
            ui.label(format!("Zoom: {:.1}", camera.zoom()));
            ui.label(format!(
                "Wireframe: {}",
                match (state.wireframe_supported, state.wireframe) {
                    (false, _) => "unavailable",
                    (true, true) => "on",
                    (true, false) => "off",
                }
            ));

            ui.separator();
            ui.collapsing(format!("Bodies ({})", state.config.bodies.len()), |ui| {
                for body in &state.config.bodies {
                    let [x, y, z] = body.position.to_array();
                    ui.label(format!("{}: ({x:.0}, {y:.0}, {z:.0})", body.name));
                }
            });
        });
}
