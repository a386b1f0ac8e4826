//! Input abstraction layer.
//!
//! Normalizes DOM mouse events into an `InputEvent` enum consumed by the
//! viewport and the graph editor. Coordinates are canvas-relative screen
//! pixels (`offsetX` / `offsetY`).

use vw_core::Point;

/// Which mouse button an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left button (DOM code 0). Adds, selects and drags vertices.
    Primary,
    /// Wheel button (DOM code 1). Pans the viewport.
    Middle,
    /// Right button (DOM code 2). Deselects or removes vertices.
    Secondary,
    Other(i16),
}

impl From<i16> for PointerButton {
    fn from(code: i16) -> Self {
        match code {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown {
        x: f64,
        y: f64,
        button: PointerButton,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp {
        x: f64,
        y: f64,
        button: PointerButton,
    },
    /// Mouse wheel. Only the sign of `delta_y` matters.
    Wheel {
        delta_y: f64,
    },
}

impl InputEvent {
    /// Create a PointerDown from a DOM `MouseEvent`.
    /// (Used when bridging from JS via wasm-bindgen.)
    pub fn from_pointer_down(x: f64, y: f64, button: i16) -> Self {
        Self::PointerDown {
            x,
            y,
            button: button.into(),
        }
    }

    pub fn from_pointer_move(x: f64, y: f64) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up(x: f64, y: f64, button: i16) -> Self {
        Self::PointerUp {
            x,
            y,
            button: button.into(),
        }
    }

    pub fn from_wheel(delta_y: f64) -> Self {
        Self::Wheel { delta_y }
    }

    /// Screen position, if this is a pointer event with finite coordinates.
    pub fn position(&self) -> Option<Point> {
        let point = match *self {
            Self::PointerDown { x, y, .. }
            | Self::PointerMove { x, y }
            | Self::PointerUp { x, y, .. } => Point::new(x, y),
            Self::Wheel { .. } => return None,
        };
        point.is_finite().then_some(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_button_codes() {
        assert_eq!(PointerButton::from(0), PointerButton::Primary);
        assert_eq!(PointerButton::from(1), PointerButton::Middle);
        assert_eq!(PointerButton::from(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from(4), PointerButton::Other(4));
    }

    #[test]
    fn position_skips_wheel_and_nan() {
        assert_eq!(
            InputEvent::from_pointer_move(3.0, 4.0).position(),
            Some(Point::new(3.0, 4.0))
        );
        assert_eq!(InputEvent::from_wheel(1.0).position(), None);
        assert_eq!(InputEvent::from_pointer_down(f64::NAN, 0.0, 0).position(), None);
    }
}
