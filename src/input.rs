//! Input state management
//!
//! Polls macroquad's keyboard and mouse state once per frame and condenses
//! it into a plain `FrameInput` snapshot. The simulation only ever sees the
//! snapshot, never the window, so tests can hand-build input frames.

use macroquad::prelude::*;

/// The game actions a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    FlyUp,
    FlyDown,
    ToggleCamera,
}

/// One frame's worth of input, already resolved to booleans and deltas.
///
/// In character mode the left/right actions drive the turn lean; in free-fly
/// mode the same actions strafe.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub fly_up: bool,
    pub fly_down: bool,
    /// Edge-triggered: true only on the frame the toggle key went down.
    pub toggle_camera: bool,
    /// Mouse movement since the previous frame, in pixels.
    pub mouse_delta: (f32, f32),
}

/// Tracks the mouse between frames and produces `FrameInput` snapshots.
pub struct InputState {
    last_mouse: (f32, f32),
    grabbed: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            last_mouse: mouse_position(),
            grabbed: false,
        }
    }

    /// Read the current device state into a snapshot. Call once per frame.
    pub fn snapshot(&mut self) -> FrameInput {
        let mouse = mouse_position();
        let delta = (mouse.0 - self.last_mouse.0, mouse.1 - self.last_mouse.1);
        self.last_mouse = mouse;

        FrameInput {
            forward: action_down(Action::MoveForward),
            backward: action_down(Action::MoveBackward),
            left: action_down(Action::MoveLeft),
            right: action_down(Action::MoveRight),
            fly_up: action_down(Action::FlyUp),
            fly_down: action_down(Action::FlyDown),
            toggle_camera: is_key_pressed(key_for(Action::ToggleCamera)),
            mouse_delta: if self.grabbed { delta } else { (0.0, 0.0) },
        }
    }

    /// Grab or release the cursor. Grabbed mode hides the cursor and feeds
    /// relative mouse deltas into the snapshot.
    pub fn set_grab(&mut self, grab: bool) {
        self.grabbed = grab;
        set_cursor_grab(grab);
        show_mouse(!grab);
        // Swallow the jump the cursor makes when the grab state flips
        self.last_mouse = mouse_position();
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn key_for(action: Action) -> KeyCode {
    match action {
        Action::MoveForward => KeyCode::W,
        Action::MoveBackward => KeyCode::S,
        Action::MoveLeft => KeyCode::A,
        Action::MoveRight => KeyCode::D,
        Action::FlyUp => KeyCode::Space,
        Action::FlyDown => KeyCode::LeftShift,
        Action::ToggleCamera => KeyCode::Tab,
    }
}

fn action_down(action: Action) -> bool {
    is_key_down(key_for(action))
}
