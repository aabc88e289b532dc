/// Up to [`PIN_LEN`] committed PIN digits, stored as ASCII.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PinDigits {
    bytes: [u8; PIN_LEN],
    len: usize,
}

impl Default for PinDigits {
    fn default() -> Self {
        Self::new()
    }
}

impl PinDigits {
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; PIN_LEN],
            len: 0,
        }
    }

    /// Keeps the leading ASCII digits of `source`, up to [`PIN_LEN`].
    pub fn from_digits(source: &str) -> Self {
        let mut pin = Self::new();
        for byte in source.bytes() {
            if !byte.is_ascii_digit() || !pin.push(byte - b'0') {
                break;
            }
        }
        pin
    }

    /// Strict form of [`PinDigits::from_digits`] for configuration input.
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        if !source.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::PinNotNumeric);
        }
        if source.len() != PIN_LEN {
            return Err(ConfigError::PinLength(source.len()));
        }
        Ok(Self::from_digits(source))
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub fn is_complete(&self) -> bool {
        self.len == PIN_LEN
    }

    pub fn slot(&self, index: usize) -> Option<u8> {
        if index < self.len {
            Some(self.bytes[index] - b'0')
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        str::from_utf8(&self.bytes[..self.len]).unwrap_or("")
    }

    fn push(&mut self, digit: u8) -> bool {
        if self.len >= PIN_LEN || digit > 9 {
            return false;
        }
        self.bytes[self.len] = b'0' + digit;
        self.len += 1;
        true
    }

    /// Pads to [`PIN_LEN`] slots, increments the slot at `cursor` modulo 10
    /// (an unset slot counts as 0) and commits the set slots in order.
    fn bump_slot(&self, cursor: usize) -> Self {
        let mut slots = [None; PIN_LEN];
        for (index, slot) in slots.iter_mut().enumerate() {
            *slot = self.slot(index);
        }

        let cursor = cursor.min(PIN_LEN - 1);
        slots[cursor] = Some((slots[cursor].unwrap_or(0) + 1) % 10);

        let mut next = Self::new();
        for digit in slots.into_iter().flatten() {
            next.push(digit);
        }
        next
    }
}

fn step_back(current: u8, total: u8) -> u8 {
    current.saturating_sub(1).min(total.saturating_sub(1))
}

fn step_forward(current: u8, total: u8) -> u8 {
    current.saturating_add(1).min(total.saturating_sub(1))
}
