impl DeviceState {
    /// Starts a session on the splash screen. Seeds longer than
    /// [`SEED_BYTES`] are cut.
    pub fn new(seed: &str, config: DeviceConfig, now_ms: u64) -> Self {
        let mut session_seed = SeedString::new();
        for ch in seed.chars() {
            if session_seed.push(ch).is_err() {
                break;
            }
        }

        let tx = MockTransaction::from_seed(&session_seed);
        let mut state = Self {
            powered: true,
            screen: Screen::Splash,
            toast: None,
            seed: session_seed,
            tx,
            config,
            version: 0,
            pending: None,
        };
        state.schedule(Screen::locked(), config.splash_ms, now_ms);
        state
    }

    /// Expires the toast and fires the pending transition when due.
    ///
    /// Returns `true` when anything visible changed.
    pub fn advance_time(&mut self, now_ms: u64) -> bool {
        let mut changed = false;

        if let Some(toast) = self.toast {
            if now_ms >= toast.expires_ms {
                self.toast = None;
                changed = true;
            }
        }

        if let Some(pending) = self.pending {
            if now_ms >= pending.due_ms {
                self.pending = None;
                if pending.version == self.version && self.powered {
                    self.set_screen(pending.target);
                    changed = true;
                } else {
                    debug!(
                        "device: dropped stale transition target={:?} scheduled_version={} version={}",
                        pending.target, pending.version, self.version
                    );
                }
            }
        }

        changed
    }

    pub fn powered(&self) -> bool {
        self.powered
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn toast(&self) -> Option<&'static str> {
        self.toast.map(|toast| toast.text)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn pending(&self) -> Option<ScheduledTransition> {
        self.pending
    }
}

impl<IN> DeviceApp<IN>
where
    IN: InputProvider,
{
    pub fn new(
        input: IN,
        config: DeviceConfig,
        seed: &str,
        app_title: &'static str,
        now_ms: u64,
    ) -> Self {
        let state = DeviceState::new(seed, config, now_ms);
        info!(
            "device: session start title={:?} seed_len={}",
            app_title,
            state.seed.len()
        );

        Self {
            state,
            input,
            app_title,
            pending_redraw: true,
        }
    }

    /// Fires due timers, then drains queued input, and reports whether the
    /// screen needs to be drawn again.
    ///
    /// Timers go first: anything already due happened before input that is
    /// only seen now.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        if self.state.advance_time(now_ms) {
            self.pending_redraw = true;
        }

        self.process_inputs(now_ms);

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.dispatch(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    self.state.show_toast(TOAST_INPUT_ERROR, now_ms);
                    self.pending_redraw = true;
                    break;
                }
            }
        }
    }

    fn dispatch(&mut self, event: InputEvent, now_ms: u64) {
        self.state.apply(event, now_ms);
        self.pending_redraw = true;
    }

    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    pub fn input_mut(&mut self) -> &mut IN {
        &mut self.input
    }
}
