//! Screen state machine for the simulated wallet.

use core::{
    fmt::{self, Write as _},
    str,
};

use heapless::String;
use log::{debug, info};

use crate::{
    address::SEED_BYTES,
    input::{InputEvent, InputProvider},
    render::{DeviceView, MenuRowView, PinSlotView, ScreenView},
    settings::SettingsEntry,
    wallet::{APP_COUNT, APPS, AppId, MockTransaction, TX_FIELD_BYTES, TxStep},
};

pub const PIN_LEN: usize = 4;
const DEFAULT_PIN: &str = "1234";
const LOCK_CURSOR_MAX: u8 = PIN_LEN as u8 - 1;

const TOAST_PIN_OK: &str = "PIN OK";
const TOAST_PIN_WRONG: &str = "Wrong PIN";
const TOAST_SIGNED: &str = "Signed (mock)";
const TOAST_INPUT_ERROR: &str = "Input error";

pub type SeedString = String<SEED_BYTES>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    PinLength(usize),
    PinNotNumeric,
    ZeroDuration(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PinLength(len) => write!(f, "PIN must have {PIN_LEN} digits, got {len}"),
            Self::PinNotNumeric => f.write_str("PIN must only contain digits 0-9"),
            Self::ZeroDuration(name) => write!(f, "{name} must be greater than zero"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DeviceConfig {
    pub demo_pin: PinDigits,
    pub splash_ms: u32,
    pub pin_ok_ms: u32,
    pub toast_ms: u32,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            demo_pin: PinDigits::from_digits(DEFAULT_PIN),
            splash_ms: 800,
            pin_ok_ms: 300,
            toast_ms: 1_500,
        }
    }
}

impl DeviceConfig {
    pub fn with_demo_pin(mut self, pin: &str) -> Result<Self, ConfigError> {
        self.demo_pin = PinDigits::parse(pin)?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.demo_pin.is_complete() {
            return Err(ConfigError::PinLength(self.demo_pin.len()));
        }
        if self.splash_ms == 0 {
            return Err(ConfigError::ZeroDuration("splash_ms"));
        }
        if self.pin_ok_ms == 0 {
            return Err(ConfigError::ZeroDuration("pin_ok_ms"));
        }
        if self.toast_ms == 0 {
            return Err(ConfigError::ZeroDuration("toast_ms"));
        }
        Ok(())
    }
}

/// The active screen. Bounded fields are kept in range by every transition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Splash,
    Lock { pin: PinDigits, cursor: u8 },
    Home,
    Apps { index: u8 },
    Address { app: AppId },
    TxReview { app: AppId, step: u8, approved: bool },
    Settings { index: u8 },
}

impl Screen {
    pub const fn locked() -> Self {
        Self::Lock {
            pin: PinDigits::new(),
            cursor: 0,
        }
    }
}

/// Transient message with its own expiry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Toast {
    pub text: &'static str,
    pub expires_ms: u64,
}

/// Automatic transition that only applies while the state version it was
/// scheduled under is still current.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScheduledTransition {
    pub due_ms: u64,
    pub target: Screen,
    pub version: u32,
}

/// Whole device state for one session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeviceState {
    powered: bool,
    screen: Screen,
    toast: Option<Toast>,
    seed: SeedString,
    tx: MockTransaction,
    config: DeviceConfig,
    version: u32,
    pending: Option<ScheduledTransition>,
}

/// Applies one input to `state` and returns the successor state.
pub fn transition(state: &DeviceState, event: InputEvent, now_ms: u64) -> DeviceState {
    let mut next = state.clone();
    next.apply(event, now_ms);
    next
}

/// Lets time pass: fires due timers and expires toasts.
pub fn advance(state: &DeviceState, now_ms: u64) -> DeviceState {
    let mut next = state.clone();
    next.advance_time(now_ms);
    next
}

/// Runtime wrapper that drains an input provider into a [`DeviceState`].
pub struct DeviceApp<IN>
where
    IN: InputProvider,
{
    state: DeviceState,
    input: IN,
    app_title: &'static str,
    pending_redraw: bool,
}

include!("pin.rs");
include!("input.rs");
include!("navigation.rs");
include!("runtime.rs");
include!("view.rs");
