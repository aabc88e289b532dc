impl DeviceState {
    pub fn with_view<F>(&self, app_title: &str, f: F)
    where
        F: FnOnce(DeviceView<'_>),
    {
        if !self.powered {
            f(DeviceView {
                screen: ScreenView::PoweredOff,
                toast: None,
                powered: false,
            });
            return;
        }

        let toast = self.toast.map(|toast| toast.text);

        match self.screen {
            Screen::Splash => f(powered_view(ScreenView::Splash { title: app_title }, toast)),
            Screen::Lock { pin, cursor } => {
                let mut slots = [PinSlotView::Empty; PIN_LEN];
                for (index, slot) in slots.iter_mut().enumerate() {
                    if let Some(digit) = pin.slot(index) {
                        *slot = PinSlotView::Digit(digit);
                    }
                }

                f(powered_view(
                    ScreenView::Lock {
                        slots,
                        cursor: (cursor as usize).min(PIN_LEN - 1),
                    },
                    toast,
                ));
            }
            Screen::Home => f(powered_view(
                ScreenView::Home {
                    title: app_title,
                    hint: "Confirm: apps  S: settings",
                },
                toast,
            )),
            Screen::Apps { index } => {
                let mut rows = [MenuRowView::default(); APP_COUNT];
                for (row, app) in rows.iter_mut().zip(APPS.iter()) {
                    *row = MenuRowView {
                        label: app.name,
                        detail: app.currency,
                    };
                }

                f(powered_view(
                    ScreenView::Apps {
                        rows: &rows,
                        cursor: (index as usize).min(rows.len() - 1),
                    },
                    toast,
                ));
            }
            Screen::Address { app } => {
                let wallet = app.app();
                let address = wallet.derive_address(&self.seed);
                f(powered_view(
                    ScreenView::Address {
                        app_name: wallet.name,
                        currency: wallet.currency,
                        address: &address,
                    },
                    toast,
                ));
            }
            Screen::TxReview {
                app,
                step,
                approved,
            } => {
                let wallet = app.app();
                let tx_step = TxStep::from_index(step);
                let mut value = String::<TX_FIELD_BYTES>::new();
                let _ = match tx_step {
                    TxStep::To => value.push_str(&self.tx.to),
                    TxStep::Amount => {
                        write!(value, "{} {}", self.tx.amount, wallet.currency).map_err(|_| ())
                    }
                    TxStep::Fee => {
                        write!(value, "{} {}", self.tx.fee, wallet.currency).map_err(|_| ())
                    }
                    TxStep::Network => value.push_str(self.tx.network),
                    TxStep::Sign if approved => value.push_str("Approved"),
                    TxStep::Sign => value.push_str("Confirm to sign"),
                };

                f(powered_view(
                    ScreenView::TxReview {
                        app_name: wallet.name,
                        step_label: tx_step.label(),
                        value: &value,
                        step: step as usize,
                        step_count: TxStep::COUNT as usize,
                        approved,
                    },
                    toast,
                ));
            }
            Screen::Settings { index } => {
                let mut rows = [MenuRowView::default(); SettingsEntry::COUNT as usize];
                for (row, entry) in rows.iter_mut().zip(SettingsEntry::ALL) {
                    *row = MenuRowView {
                        label: entry.label(self.powered),
                        detail: entry.detail(),
                    };
                }

                f(powered_view(
                    ScreenView::Settings {
                        rows: &rows,
                        cursor: (index as usize).min(rows.len() - 1),
                    },
                    toast,
                ));
            }
        }
    }
}

impl<IN> DeviceApp<IN>
where
    IN: InputProvider,
{
    pub fn with_view<F>(&self, f: F)
    where
        F: FnOnce(DeviceView<'_>),
    {
        self.state.with_view(self.app_title, f);
    }
}

fn powered_view<'a>(screen: ScreenView<'a>, toast: Option<&'a str>) -> DeviceView<'a> {
    DeviceView {
        screen,
        toast,
        powered: true,
    }
}
