use orrery_input::{Action, InputState};
use orrery_render::RenderFrame;
use orrery_scene::{FlyCamera, FrameClock, FrameTime, SceneConfig};
use winit::event::MouseScrollDelta;
use winit::keyboard::KeyCode;

/// Everything the render loop mutates between frames, independent of the
/// window and GPU.
pub struct AppState {
    pub config: SceneConfig,
    pub camera: FlyCamera,
    pub input: InputState,
    pub clock: FrameClock,
    pub last_frame: FrameTime,
    pub wireframe: bool,
    pub wireframe_supported: bool,
    pub show_hud: bool,
    pub quit_requested: bool,
}

impl AppState {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            camera: config.camera(),
            config,
            input: InputState::new(),
            clock: FrameClock::new(),
            last_frame: FrameTime {
                delta: 0.0,
                elapsed: 0.0,
            },
            wireframe: false,
            wireframe_supported: true,
            show_hud: false,
            quit_requested: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if let Some(action) = self.input.handle_key(key, pressed) {
            self.handle_action(action);
        }
    }

    pub fn mouse_motion(&mut self, dx: f64, dy: f64) {
        let action = self.input.mouse_motion(dx, dy);
        self.handle_action(action);
    }

    pub fn scroll(&mut self, delta: MouseScrollDelta) {
        let action = self.input.scroll(delta);
        self.handle_action(action);
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::ToggleWireframe if self.wireframe_supported => {
                self.wireframe = !self.wireframe;
                tracing::info!("wireframe {}", if self.wireframe { "on" } else { "off" });
            }
            Action::ToggleWireframe => {
                tracing::warn!("wireframe mode is not supported by this adapter");
            }
            Action::ToggleHud => self.show_hud = !self.show_hud,
            Action::Quit => {
                tracing::info!("quit requested");
                self.quit_requested = true;
            }
            camera_action => {
                camera_action.apply_to_camera(&mut self.camera, self.last_frame.delta);
            }
        }
    }

    /// Start a frame: record timing and apply held movement keys.
    pub fn advance(&mut self, time: FrameTime) {
        self.last_frame = time;
        let moves: Vec<Action> = self.input.movement().collect();
        for action in moves {
            action.apply_to_camera(&mut self.camera, time.delta);
        }
    }

    pub fn frame(&self) -> RenderFrame {
        RenderFrame::compose(
            &self.camera,
            &self.config.bodies,
            self.last_frame.elapsed,
            self.config.aspect(),
            self.config.projection.near,
            self.config.projection.far,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_scene::glam::Vec3;

    fn state() -> AppState {
        AppState::new(SceneConfig::default())
    }

    #[test]
    fn starts_at_configured_camera() {
        let s = state();
        assert_eq!(s.camera.position, Vec3::new(0.0, 0.0, 70.0));
        assert!(!s.quit_requested);
    }

    #[test]
    fn escape_requests_quit() {
        let mut s = state();
        s.handle_key(KeyCode::Escape, true);
        assert!(s.quit_requested);
    }

    #[test]
    fn held_forward_moves_each_frame() {
        let mut s = state();
        s.camera.speed = 10.0;
        s.handle_key(KeyCode::KeyW, true);
        s.advance(FrameTime {
            delta: 0.05,
            elapsed: 0.05,
        });
        s.advance(FrameTime {
            delta: 0.05,
            elapsed: 0.10,
        });
        assert!(s.camera.position.abs_diff_eq(Vec3::new(0.0, 0.0, 69.0), 1e-4));

        s.handle_key(KeyCode::KeyW, false);
        s.advance(FrameTime {
            delta: 0.05,
            elapsed: 0.15,
        });
        assert!(s.camera.position.abs_diff_eq(Vec3::new(0.0, 0.0, 69.0), 1e-4));
    }

    #[test]
    fn wireframe_toggle_respects_support() {
        let mut s = state();
        s.handle_key(KeyCode::KeyO, true);
        assert!(s.wireframe);
        s.handle_key(KeyCode::KeyO, false);
        s.handle_key(KeyCode::KeyO, true);
        assert!(!s.wireframe);

        s.wireframe_supported = false;
        s.handle_key(KeyCode::KeyO, false);
        s.handle_key(KeyCode::KeyO, true);
        assert!(!s.wireframe);
    }

    #[test]
    fn mouse_up_pitches_up() {
        let mut s = state();
        // Window y decreases when the mouse moves up.
        s.mouse_motion(0.0, -20.0);
        assert!((s.camera.pitch() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn scroll_zooms_within_bounds() {
        let mut s = state();
        s.scroll(MouseScrollDelta::LineDelta(0.0, -5.0));
        assert_eq!(s.camera.zoom(), 45.0);
        s.scroll(MouseScrollDelta::LineDelta(0.0, 100.0));
        assert_eq!(s.camera.zoom(), 1.0);
    }

    #[test]
    fn frame_uses_last_elapsed_time() {
        let mut s = state();
        s.advance(FrameTime {
            delta: 0.016,
            elapsed: 2.0,
        });
        let frame = s.frame();
        assert_eq!(frame.elapsed, 2.0);
        assert_eq!(frame.draws.len(), 9);
        assert_eq!(frame.draws[3].model, s.config.bodies[3].model(2.0));
    }
}
