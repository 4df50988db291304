// src/input.rs
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::debug;

use crate::state::AnimationState;
use crate::vec3::EulerAngles;

const RATE_STEP: f64 = 5.0;
const ANGLE_STEP: f64 = 2.5;

// Maps keys onto the animation state.
pub struct InputController {
    next_polar_view_is_north: bool,
}

impl Default for InputController {
    fn default() -> Self {
        Self::new()
    }
}

impl InputController {
    pub fn new() -> Self {
        Self { next_polar_view_is_north: true }
    }

    // Drains pending terminal events without blocking longer than `timeout`.
    pub fn poll(&mut self, state: &mut AnimationState, timeout: Duration) -> io::Result<()> {
        let mut wait = timeout;
        while event::poll(wait)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    self.handle_key(key.code, state);
                }
            }
            wait = Duration::ZERO;
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode, state: &mut AnimationState) {
        match code {
            KeyCode::Esc => state.schedule_termination(),
            KeyCode::Char('+') => { state.change_rotation_rate(RATE_STEP); }
            KeyCode::Char('-') => { state.change_rotation_rate(-RATE_STEP); }
            KeyCode::Char(' ') => state.toggle_pause(),
            KeyCode::Char('r') => state.reset_rotation_angles_to_default(),
            KeyCode::Char('w') => state.rotate_around_x_axis(-ANGLE_STEP),
            KeyCode::Char('s') => state.rotate_around_x_axis(ANGLE_STEP),
            KeyCode::Char('a') => state.rotate_around_y_axis(-ANGLE_STEP),
            KeyCode::Char('d') => state.rotate_around_y_axis(ANGLE_STEP),
            KeyCode::Char('q') => state.rotate_around_z_axis(ANGLE_STEP),
            KeyCode::Char('e') => state.rotate_around_z_axis(-ANGLE_STEP),
            KeyCode::Char('p') => {
                // flips between the polar view and the unrotated view
                let angles = if self.next_polar_view_is_north {
                    EulerAngles::new(180.0, 0.0, 0.0)
                } else {
                    EulerAngles::new(0.0, 0.0, 0.0)
                };
                state.set_rotation_angles(angles);
                self.next_polar_view_is_north = !self.next_polar_view_is_north;
            }
            other => debug!("unhandled key {:?}", other),
        }
    }
}
