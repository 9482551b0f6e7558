//! Settle-window configuration.
//!
//! Firmware needs time between accepting a set-report and producing the
//! response. The wait is drawn uniformly from a per-class window; the
//! defaults below were tuned against real hardware. A JSON file can
//! override any subset of classes.

use crate::error::{Error, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Environment variable naming a timing override file.
pub const TIMING_ENV: &str = "OPEN_CHROMA_TIMING";

/// Inclusive `[min_us, max_us]` wait between write and read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettleWindow {
    pub min_us: u64,
    pub max_us: u64,
}

impl SettleWindow {
    /// No wait at all. Used by simulated transports.
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(min_us: u64, max_us: u64) -> Self {
        Self { min_us, max_us }
    }

    fn validate(&self, class: &str) -> Result<()> {
        if self.min_us > self.max_us {
            return Err(Error::Config(format!(
                "{class}: min_us {} is greater than max_us {}",
                self.min_us, self.max_us
            )));
        }
        Ok(())
    }

    /// Draw a wait duration from the window.
    pub fn sample(&self) -> Duration {
        if self.max_us <= self.min_us {
            return Duration::from_micros(self.min_us);
        }
        Duration::from_micros(rand::rng().random_range(self.min_us..=self.max_us))
    }
}

/// Device family selecting a settle window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimingClass {
    /// Keyboards, laptops, wired mice, mugs.
    Wired,
    /// Mouse mats, speakers, headset stands, LED controllers.
    Accessory,
    /// Core, HDK and the legacy mats behind a hub controller.
    Hub,
    /// Docks and RF receivers.
    Wireless,
}

/// Settle windows for every timing class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub wired: SettleWindow,
    pub accessory: SettleWindow,
    pub hub: SettleWindow,
    pub wireless: SettleWindow,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            wired: SettleWindow::new(600, 800),
            accessory: SettleWindow::new(600, 1000),
            hub: SettleWindow::new(900, 1000),
            wireless: SettleWindow::new(31000, 31100),
        }
    }
}

impl TimingConfig {
    /// Every class waits zero. For simulated devices and tests.
    pub fn immediate() -> Self {
        Self {
            wired: SettleWindow::ZERO,
            accessory: SettleWindow::ZERO,
            hub: SettleWindow::ZERO,
            wireless: SettleWindow::ZERO,
        }
    }

    pub fn window(&self, class: TimingClass) -> SettleWindow {
        match class {
            TimingClass::Wired => self.wired,
            TimingClass::Accessory => self.accessory,
            TimingClass::Hub => self.hub,
            TimingClass::Wireless => self.wireless,
        }
    }

    fn validate(&self) -> Result<()> {
        self.wired.validate("wired")?;
        self.accessory.validate("accessory")?;
        self.hub.validate("hub")?;
        self.wireless.validate("wireless")
    }

    /// Parse JSON. Classes absent from the document keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "Loading timing config");
        Self::from_json(&text)
    }

    /// Load from the file named by `OPEN_CHROMA_TIMING`, or defaults if unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(TIMING_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tuned_windows() {
        let c = TimingConfig::default();
        assert_eq!(c.window(TimingClass::Wired), SettleWindow::new(600, 800));
        assert_eq!(c.window(TimingClass::Accessory), SettleWindow::new(600, 1000));
        assert_eq!(c.window(TimingClass::Hub), SettleWindow::new(900, 1000));
        assert_eq!(c.window(TimingClass::Wireless), SettleWindow::new(31000, 31100));
    }

    #[test]
    fn json_round_trip() {
        let c = TimingConfig::default();
        let back = TimingConfig::from_json(&c.to_json().unwrap()).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = TimingConfig::from_json(r#"{"wireless": {"min_us": 40000, "max_us": 45000}}"#)
            .unwrap();
        assert_eq!(c.wireless, SettleWindow::new(40000, 45000));
        assert_eq!(c.wired, TimingConfig::default().wired);
        assert_eq!(c.hub, TimingConfig::default().hub);
    }

    #[test]
    fn inverted_window_rejected() {
        let err = TimingConfig::from_json(r#"{"hub": {"min_us": 10, "max_us": 5}}"#).unwrap_err();
        assert!(matches!(err, Error::Config(ref m) if m.contains("hub")));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            TimingConfig::from_json("{ not json"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn load_missing_file_is_config_error() {
        let path = std::env::temp_dir().join("open-chroma-timing-does-not-exist.json");
        assert!(matches!(TimingConfig::load(&path), Err(Error::Config(_))));
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("open-chroma-timing-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"wired": {"min_us": 1, "max_us": 2}}"#).unwrap();
        let c = TimingConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(c.wired, SettleWindow::new(1, 2));
    }

    #[test]
    fn sample_stays_in_window() {
        let w = SettleWindow::new(600, 800);
        for _ in 0..100 {
            let d = w.sample().as_micros();
            assert!((600..=800).contains(&d));
        }
        assert_eq!(SettleWindow::ZERO.sample(), Duration::ZERO);
    }
}
