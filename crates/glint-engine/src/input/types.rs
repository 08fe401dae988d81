/// Keyboard key identifier.
///
/// Intentionally minimal; the backend maps platform keycodes into these
/// variants where possible and reports everything else as `Unknown` with a
/// stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    /// Platform-dependent key not represented above.
    Unknown(u32),
}

/// Surface/input events drained by one `poll_events` call.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The window system asked the surface to close.
    CloseRequested,

    Key {
        key: Key,
        pressed: bool,
        /// True for key-repeat events.
        repeat: bool,
    },

    /// New surface size in logical pixels.
    Resized { width: f32, height: f32 },

    /// Window focus change.
    Focused(bool),
}
