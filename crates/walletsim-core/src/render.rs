//! Render-ready view models handed to front ends.

use crate::app::PIN_LEN;

/// Number of characters the device shows per address line.
pub const ADDRESS_LINE_CHARS: usize = 16;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PinSlotView {
    Empty,
    Digit(u8),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MenuRowView<'a> {
    pub label: &'a str,
    pub detail: &'a str,
}

impl Default for MenuRowView<'_> {
    fn default() -> Self {
        Self {
            label: "",
            detail: "",
        }
    }
}

/// What the device screen shows right now.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScreenView<'a> {
    PoweredOff,
    Splash {
        title: &'a str,
    },
    Lock {
        slots: [PinSlotView; PIN_LEN],
        cursor: usize,
    },
    Home {
        title: &'a str,
        hint: &'a str,
    },
    Apps {
        rows: &'a [MenuRowView<'a>],
        cursor: usize,
    },
    Address {
        app_name: &'a str,
        currency: &'a str,
        address: &'a str,
    },
    TxReview {
        app_name: &'a str,
        step_label: &'a str,
        value: &'a str,
        step: usize,
        step_count: usize,
        approved: bool,
    },
    Settings {
        rows: &'a [MenuRowView<'a>],
        cursor: usize,
    },
}

/// Full frame: the screen plus overlays.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DeviceView<'a> {
    pub screen: ScreenView<'a>,
    pub toast: Option<&'a str>,
    pub powered: bool,
}
