impl DeviceState {
    pub fn left(&mut self, now_ms: u64) {
        self.apply(InputEvent::Left, now_ms);
    }

    pub fn right(&mut self, now_ms: u64) {
        self.apply(InputEvent::Right, now_ms);
    }

    pub fn confirm(&mut self, now_ms: u64) {
        self.apply(InputEvent::Confirm, now_ms);
    }

    pub fn back(&mut self, now_ms: u64) {
        self.apply(InputEvent::Back, now_ms);
    }

    pub fn toggle_power(&mut self, now_ms: u64) {
        self.apply(InputEvent::TogglePower, now_ms);
    }

    pub fn open_settings(&mut self, now_ms: u64) {
        self.apply(InputEvent::OpenSettings, now_ms);
    }

    /// Applies one input event. Every event is total: events that mean
    /// nothing on the current screen, or arrive while powered off, are
    /// ignored.
    pub fn apply(&mut self, event: InputEvent, now_ms: u64) {
        if matches!(event, InputEvent::TogglePower) {
            self.apply_power_toggle(now_ms);
            return;
        }

        if !self.powered {
            debug!("device: ignored event={:?} powered=false", event);
            return;
        }

        match event {
            InputEvent::Left => self.apply_step(false),
            InputEvent::Right => self.apply_step(true),
            InputEvent::Confirm => self.apply_confirm(now_ms),
            InputEvent::Back => self.apply_back(),
            InputEvent::OpenSettings => self.apply_open_settings(),
            InputEvent::TogglePower => {}
        }
    }

    fn apply_step(&mut self, forward: bool) {
        let move_by = |current: u8, total: u8| {
            if forward {
                step_forward(current, total)
            } else {
                step_back(current, total)
            }
        };

        let next = match self.screen {
            Screen::Lock { pin, cursor } => Screen::Lock {
                pin,
                cursor: move_by(cursor, LOCK_CURSOR_MAX + 1),
            },
            Screen::Apps { index } => Screen::Apps {
                index: move_by(index, APP_COUNT as u8),
            },
            Screen::TxReview {
                app,
                step,
                approved,
            } => Screen::TxReview {
                app,
                step: move_by(step, TxStep::COUNT),
                approved,
            },
            Screen::Settings { index } => Screen::Settings {
                index: move_by(index, SettingsEntry::COUNT),
            },
            Screen::Splash | Screen::Home | Screen::Address { .. } => return,
        };

        self.set_screen(next);
    }

    fn apply_confirm(&mut self, now_ms: u64) {
        match self.screen {
            Screen::Splash => {}
            Screen::Lock { pin, cursor } => self.confirm_pin(pin, cursor, now_ms),
            Screen::Home => self.set_screen(Screen::Apps { index: 0 }),
            Screen::Apps { index } => self.set_screen(Screen::Address {
                app: AppId::from_index(index),
            }),
            Screen::Address { app } => self.set_screen(Screen::TxReview {
                app,
                step: 0,
                approved: false,
            }),
            Screen::TxReview {
                app,
                step,
                approved,
            } => {
                if step < TxStep::COUNT - 1 {
                    self.set_screen(Screen::TxReview {
                        app,
                        step: step + 1,
                        approved,
                    });
                } else if !approved {
                    info!("device: transaction approved app={:?}", app);
                    self.set_screen(Screen::TxReview {
                        app,
                        step,
                        approved: true,
                    });
                    self.show_toast(TOAST_SIGNED, now_ms);
                }
            }
            Screen::Settings { index } => {
                self.run_settings_entry(SettingsEntry::from_index(index), now_ms)
            }
        }
    }

    fn confirm_pin(&mut self, pin: PinDigits, cursor: u8, now_ms: u64) {
        if pin == self.config.demo_pin {
            self.set_screen(Screen::Home);
            return;
        }

        let next = pin.bump_slot(cursor as usize);
        self.set_screen(Screen::Lock { pin: next, cursor });

        if !next.is_complete() {
            return;
        }

        if next == self.config.demo_pin {
            info!("device: pin accepted");
            self.show_toast(TOAST_PIN_OK, now_ms);
            self.schedule(Screen::Home, self.config.pin_ok_ms, now_ms);
        } else {
            info!("device: pin rejected");
            self.show_toast(TOAST_PIN_WRONG, now_ms);
        }
    }

    fn apply_back(&mut self) {
        let next = match self.screen {
            Screen::Apps { .. } | Screen::Settings { .. } => Screen::Home,
            Screen::Address { .. } => Screen::Apps { index: 0 },
            Screen::TxReview { app, .. } => Screen::Address { app },
            Screen::Splash | Screen::Lock { .. } | Screen::Home => return,
        };

        self.set_screen(next);
    }

    fn apply_open_settings(&mut self) {
        if matches!(self.screen, Screen::Home) {
            self.set_screen(Screen::Settings { index: 0 });
        }
    }

    fn run_settings_entry(&mut self, entry: SettingsEntry, now_ms: u64) {
        debug!("device: settings action entry={:?}", entry);
        match entry {
            SettingsEntry::Brightness | SettingsEntry::About => {
                self.show_toast(entry.detail(), now_ms)
            }
            SettingsEntry::Lock => self.set_screen(Screen::locked()),
            SettingsEntry::Power => self.apply_power_toggle(now_ms),
        }
    }
}
