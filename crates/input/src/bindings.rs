use crate::action::Action;
use orrery_scene::CameraMovement;
use std::collections::HashSet;
use winit::event::MouseScrollDelta;
use winit::keyboard::KeyCode;

/// Pixel-precise scroll devices report roughly this many pixels per wheel line.
pub const PIXELS_PER_SCROLL_LINE: f32 = 20.0;

/// Held movement keys, polled once per frame in this order.
pub const MOVEMENT_BINDINGS: [(KeyCode, CameraMovement); 4] = [
    (KeyCode::KeyW, CameraMovement::Forward),
    (KeyCode::KeyS, CameraMovement::Backward),
    (KeyCode::KeyA, CameraMovement::Left),
    (KeyCode::KeyD, CameraMovement::Right),
];

/// Keys that fire once per press.
pub fn press_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Escape => Some(Action::Quit),
        KeyCode::KeyO => Some(Action::ToggleWireframe),
        KeyCode::F1 => Some(Action::ToggleHud),
        _ => None,
    }
}

/// Tracks which keys are held and turns window input into [`Action`]s.
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. Returns the edge-triggered action for a fresh
    /// press; OS key repeat does not re-fire it.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> Option<Action> {
        if !pressed {
            self.held.remove(&key);
            return None;
        }
        if !self.held.insert(key) {
            return None;
        }
        let action = press_action(key);
        if let Some(action) = action {
            tracing::debug!(?key, ?action, "key action");
        }
        action
    }

    /// Forget all held keys, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Movement actions for every held movement key.
    pub fn movement(&self) -> impl Iterator<Item = Action> + '_ {
        MOVEMENT_BINDINGS
            .iter()
            .filter(|(key, _)| self.held.contains(key))
            .map(|&(_, direction)| Action::Move(direction))
    }

    /// Raw mouse motion. Window y grows downward, so it is flipped for pitch.
    pub fn mouse_motion(&self, dx: f64, dy: f64) -> Action {
        Action::Look {
            dx: dx as f32,
            dy: -dy as f32,
        }
    }

    pub fn scroll(&self, delta: MouseScrollDelta) -> Action {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_SCROLL_LINE,
        };
        Action::Zoom(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn held_keys_produce_movement() {
        let mut input = InputState::new();
        assert_eq!(input.handle_key(KeyCode::KeyW, true), None);
        assert_eq!(input.handle_key(KeyCode::KeyD, true), None);
        let moves: Vec<Action> = input.movement().collect();
        assert_eq!(
            moves,
            [
                Action::Move(CameraMovement::Forward),
                Action::Move(CameraMovement::Right)
            ]
        );

        input.handle_key(KeyCode::KeyW, false);
        assert_eq!(input.movement().count(), 1);
        assert_eq!(
            input.movement().next(),
            Some(Action::Move(CameraMovement::Right))
        );
    }

    #[test]
    fn edge_actions_fire_once_per_press() {
        let mut input = InputState::new();
        assert_eq!(input.handle_key(KeyCode::KeyO, true), Some(Action::ToggleWireframe));
        // OS repeat while held
        assert_eq!(input.handle_key(KeyCode::KeyO, true), None);
        input.handle_key(KeyCode::KeyO, false);
        assert_eq!(input.handle_key(KeyCode::KeyO, true), Some(Action::ToggleWireframe));

        assert_eq!(input.handle_key(KeyCode::Escape, true), Some(Action::Quit));
        assert_eq!(input.handle_key(KeyCode::F1, true), Some(Action::ToggleHud));
        assert_eq!(input.handle_key(KeyCode::KeyQ, true), None);
    }

    #[test]
    fn release_all_stops_movement() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::KeyA, true);
        input.handle_key(KeyCode::KeyS, true);
        input.release_all();
        assert_eq!(input.movement().count(), 0);
    }

    #[test]
    fn mouse_motion_flips_y() {
        let input = InputState::new();
        assert_eq!(
            input.mouse_motion(4.0, 3.0),
            Action::Look { dx: 4.0, dy: -3.0 }
        );
    }

    #[test]
    fn scroll_units_are_lines() {
        let input = InputState::new();
        assert_eq!(
            input.scroll(MouseScrollDelta::LineDelta(0.0, -2.0)),
            Action::Zoom(-2.0)
        );
        assert_eq!(
            input.scroll(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 40.0))),
            Action::Zoom(2.0)
        );
    }
}
