//! Input abstraction layer.

mod mock;
mod queue;

pub use mock::ScriptedInput;
pub use queue::QueuedInput;

/// Logical button actions consumed by the device.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Left,
    Right,
    /// Both buttons pressed together.
    Confirm,
    Back,
    TogglePower,
    OpenSettings,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
