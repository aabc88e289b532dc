use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{LevelFilter, debug, info};
use ratatui::DefaultTerminal;
use walletsim_core::{
    app::{DeviceApp, TickResult},
    input::QueuedInput,
};

use config::HostConfig;
use keys::KeyAction;

#[path = "main/config.rs"]
mod config;
#[path = "main/draw.rs"]
mod draw;
#[path = "main/keys.rs"]
mod keys;

const TITLE: &str = "Walletsim";
const INPUT_QUEUE_DEPTH: usize = 16;
const EVENT_POLL_MS: u64 = 25;

type Device = DeviceApp<QueuedInput<INPUT_QUEUE_DEPTH>>;

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let host = HostConfig::from_env().context("reading WALLETSIM_* configuration")?;
    info!(
        "host: starting splash_ms={} toast_ms={} seed_from_env={}",
        host.device.splash_ms, host.device.toast_ms, host.seed_from_env
    );

    let started = Instant::now();
    let device = DeviceApp::new(
        QueuedInput::new(),
        host.device,
        &host.seed,
        TITLE,
        0,
    );

    let terminal = ratatui::init();
    let result = run(terminal, device, started);
    ratatui::restore();
    result
}

fn run(mut terminal: DefaultTerminal, mut device: Device, started: Instant) -> Result<()> {
    let mut redraw = true;

    loop {
        let now_ms = started.elapsed().as_millis() as u64;
        if device.tick(now_ms) == TickResult::RenderRequested {
            redraw = true;
        }

        if redraw {
            terminal
                .draw(|frame| device.with_view(|view| draw::device(frame, TITLE, view)))
                .context("drawing device frame")?;
            redraw = false;
        }

        if !event::poll(Duration::from_millis(EVENT_POLL_MS)).context("polling terminal")? {
            continue;
        }

        match event::read().context("reading terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match keys::map_key(key) {
                KeyAction::Quit => break,
                KeyAction::Device(input) => {
                    // stderr shares the terminal with the TUI; keep this below warn
                    if !device.input_mut().push(input) {
                        debug!("host: input queue full, dropped {:?}", input);
                    }
                }
                KeyAction::Ignore => {}
            },
            Event::Resize(_, _) => redraw = true,
            _ => {}
        }
    }

    info!("host: quit");
    Ok(())
}
