use std::{env, fmt::Write as _};

use anyhow::{Context, Result, anyhow, bail};
use walletsim_core::{
    address::SEED_BYTES,
    app::{DeviceConfig, SeedString},
};

const SEED_ENV: &str = "WALLETSIM_SEED";
const PIN_ENV: &str = "WALLETSIM_PIN";
const SPLASH_ENV: &str = "WALLETSIM_SPLASH_MS";
const TOAST_ENV: &str = "WALLETSIM_TOAST_MS";
const RANDOM_SEED_BYTES: usize = 16;

/// Session settings read from the environment.
#[derive(Debug)]
pub struct HostConfig {
    pub seed: SeedString,
    pub seed_from_env: bool,
    pub device: DeviceConfig,
}

impl HostConfig {
    pub fn from_env() -> Result<Self> {
        let mut device = DeviceConfig::default();

        if let Some(pin) = read_var(PIN_ENV)? {
            device = device
                .with_demo_pin(&pin)
                .map_err(|err| anyhow!("{PIN_ENV}: {err}"))?;
        }
        if let Some(splash_ms) = read_millis(SPLASH_ENV)? {
            device.splash_ms = splash_ms;
        }
        if let Some(toast_ms) = read_millis(TOAST_ENV)? {
            device.toast_ms = toast_ms;
        }
        device.validate().map_err(|err| anyhow!("{err}"))?;

        let (seed, seed_from_env) = match read_var(SEED_ENV)? {
            Some(seed) => (fixed_seed(&seed)?, true),
            None => (random_seed(), false),
        };

        Ok(Self {
            seed,
            seed_from_env,
            device,
        })
    }
}

fn read_var(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) => Ok(Some(value.trim().to_owned())),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err).with_context(|| format!("reading {name}")),
    }
}

fn read_millis(name: &str) -> Result<Option<u32>> {
    read_var(name)?
        .map(|raw| {
            raw.parse::<u32>()
                .with_context(|| format!("{name} must be a whole number of milliseconds"))
        })
        .transpose()
}

fn fixed_seed(raw: &str) -> Result<SeedString> {
    if raw.is_empty() {
        bail!("{SEED_ENV} is set but empty");
    }

    let mut seed = SeedString::new();
    seed.push_str(raw)
        .map_err(|_| anyhow!("{SEED_ENV} is longer than {SEED_BYTES} bytes"))?;
    Ok(seed)
}

/// Fresh per-session seed; only used to vary the mock addresses.
fn random_seed() -> SeedString {
    let bytes: [u8; RANDOM_SEED_BYTES] = rand::random();
    let mut seed = SeedString::new();
    for byte in bytes {
        let _ = write!(seed, "{byte:02x}");
    }
    seed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_seed_is_hex_of_expected_length() {
        let seed = random_seed();
        assert_eq!(seed.len(), RANDOM_SEED_BYTES * 2);
        assert!(seed.bytes().all(|b| b.is_ascii_hexdigit()));
    }

    #[test]
    fn oversized_seed_is_rejected() {
        let raw = "a".repeat(SEED_BYTES + 1);
        assert!(fixed_seed(&raw).is_err());
        assert!(fixed_seed("").is_err());
        assert_eq!(fixed_seed("demo").unwrap().as_str(), "demo");
    }
}
