impl DeviceState {
    fn set_screen(&mut self, next: Screen) {
        if next == self.screen {
            return;
        }

        self.bump_version();
        debug!(
            "device: screen {:?} -> {:?} version={}",
            self.screen, next, self.version
        );
        self.screen = next;
    }

    fn bump_version(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    fn show_toast(&mut self, text: &'static str, now_ms: u64) {
        debug!(
            "device: toast text={:?} duration_ms={}",
            text, self.config.toast_ms
        );
        self.toast = Some(Toast {
            text,
            expires_ms: now_ms.saturating_add(self.config.toast_ms as u64),
        });
    }

    /// Replaces any pending transition. It is dropped if the version moves
    /// on before `delay_ms` has elapsed.
    fn schedule(&mut self, target: Screen, delay_ms: u32, now_ms: u64) {
        let due_ms = now_ms.saturating_add(delay_ms as u64);
        debug!(
            "device: schedule target={:?} due_ms={} version={}",
            target, due_ms, self.version
        );
        self.pending = Some(ScheduledTransition {
            due_ms,
            target,
            version: self.version,
        });
    }

    fn apply_power_toggle(&mut self, now_ms: u64) {
        self.powered = !self.powered;
        self.bump_version();
        info!(
            "device: power {} screen={:?}",
            if self.powered { "on" } else { "off" },
            self.screen
        );

        if self.powered && matches!(self.screen, Screen::Splash) {
            self.schedule(Screen::locked(), self.config.splash_ms, now_ms);
        }
    }
}
