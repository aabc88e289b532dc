//! Device settings menu.

/// Entries of the settings menu; order is the on-screen order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SettingsEntry {
    Brightness,
    About,
    Lock,
    Power,
}

impl SettingsEntry {
    pub const COUNT: u8 = 4;

    pub const ALL: [SettingsEntry; Self::COUNT as usize] =
        [Self::Brightness, Self::About, Self::Lock, Self::Power];

    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Brightness,
            1 => Self::About,
            2 => Self::Lock,
            _ => Self::Power,
        }
    }

    /// Row label; the power entry names the action it would take.
    pub fn label(self, powered: bool) -> &'static str {
        match self {
            Self::Brightness => "Brightness",
            Self::About => "About",
            Self::Lock => "Lock",
            Self::Power if powered => "Power Off",
            Self::Power => "Power On",
        }
    }

    pub fn detail(self) -> &'static str {
        match self {
            Self::Brightness => "Max",
            Self::About => "v1.0 demo",
            Self::Lock => "Re-enter PIN",
            Self::Power => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_label_follows_power_state() {
        assert_eq!(SettingsEntry::Power.label(true), "Power Off");
        assert_eq!(SettingsEntry::Power.label(false), "Power On");
    }

    #[test]
    fn indices_round_trip_through_menu_order() {
        for (index, entry) in SettingsEntry::ALL.iter().enumerate() {
            assert_eq!(SettingsEntry::from_index(index as u8), *entry);
        }
        assert_eq!(SettingsEntry::from_index(200), SettingsEntry::Power);
    }
}
