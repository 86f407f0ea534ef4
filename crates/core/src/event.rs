use crate::geometry::Point;

/// Joystick button that triggers the back-box action.
pub const JOY_BUTTON_BACK: u8 = 1;

/// Mouse buttons as reported by the windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    WheelUp,
    WheelDown,
    Other(u8),
}

impl MouseButton {
    /// `true` for real clicks; wheel "buttons" are not presses.
    #[must_use]
    pub fn is_click(self) -> bool {
        matches!(self, Self::Left | Self::Middle | Self::Right)
    }
}

/// Input events fed to widgets in batches, one batch per host frame.
///
/// Sources:
/// - Mouse      → `MouseMotion`, `MouseButtonDown`, `MouseButtonUp`
/// - Joystick   → `JoyButtonDown`
/// - Touch      → `FingerDown`, `FingerUp` (normalised `[0, 1]` coordinates)
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    MouseMotion { position: Point },
    MouseButtonDown { button: MouseButton, position: Point },
    MouseButtonUp { button: MouseButton, position: Point },
    JoyButtonDown { button: u8 },
    FingerDown { x: f32, y: f32 },
    FingerUp { x: f32, y: f32 },
}

impl InputEvent {
    /// Pointer position carried by mouse events, if any.
    #[must_use]
    pub fn mouse_position(&self) -> Option<Point> {
        match self {
            Self::MouseMotion { position }
            | Self::MouseButtonDown { position, .. }
            | Self::MouseButtonUp { position, .. } => Some(*position),
            _ => None,
        }
    }
}
