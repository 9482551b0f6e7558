//! Per-device handle.
//!
//! A [`RazerDevice`] owns the transport for one attached device together
//! with its descriptor, settle window and cached state. Every public
//! operation validates against the descriptor first, then takes the device
//! lock for the whole command sequence (mode switch, command, resends).

use crate::comm::{self, DeviceStatus};
use crate::commands::{self, led_effect};
use crate::config::{SettleWindow, TimingConfig};
use crate::device::{self, BrightnessMode, DeviceDescriptor, Lighting};
use crate::effects::{self, Effect, EffectKind, Generation, Rgb};
use crate::error::{Error, Result};
use crate::frame::{self, FrameSegment};
use crate::report::{led, transaction, Report, Storage};
use crate::safety::MODE_NORMAL;
use crate::transport::{exchange, ControlTransport};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, warn};

/// Pause between the colour and the effect command of a blink.
const BLINK_GAP: Duration = Duration::from_millis(5);

/// State remembered between commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachedState {
    /// Last device mode written or read, as `(mode, param)`.
    pub mode: Option<(u8, u8)>,
    pub brightness: u8,
    pub firmware: Option<(u8, u8)>,
}

struct DeviceInner {
    transport: Box<dyn ControlTransport>,
    state: CachedState,
}

/// Handle to one attached device.
pub struct RazerDevice {
    descriptor: &'static DeviceDescriptor,
    window: SettleWindow,
    inner: Mutex<DeviceInner>,
}

impl std::fmt::Debug for RazerDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RazerDevice")
            .field("name", &self.descriptor.name)
            .field("pid", &format_args!("0x{:04X}", self.descriptor.pid))
            .field("window", &self.window)
            .finish()
    }
}

impl RazerDevice {
    /// Resolve `pid` and wrap `transport`. No I/O happens here.
    pub fn open(pid: u16, transport: Box<dyn ControlTransport>, timing: &TimingConfig) -> Result<Self> {
        let descriptor = device::lookup(pid)?;
        Ok(Self::with_descriptor(descriptor, transport, timing))
    }

    pub fn with_descriptor(
        descriptor: &'static DeviceDescriptor,
        transport: Box<dyn ControlTransport>,
        timing: &TimingConfig,
    ) -> Self {
        Self {
            descriptor,
            window: timing.window(descriptor.timing),
            inner: Mutex::new(DeviceInner {
                transport,
                state: CachedState {
                    mode: None,
                    brightness: descriptor.initial_brightness,
                    firmware: None,
                },
            }),
        }
    }

    pub fn descriptor(&self) -> &'static DeviceDescriptor {
        self.descriptor
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    pub fn cached_state(&self) -> Result<CachedState> {
        Ok(self.lock()?.state)
    }

    /// Apply the attach-time device mode, if the model has one.
    pub fn initialize(&self) -> Result<()> {
        let Some(mode) = self.descriptor.mode.on_attach else {
            return Ok(());
        };
        let mut inner = self.lock()?;
        self.write_mode(&mut inner, mode, 0)
    }

    /// Check the device with a firmware query under its own tag and window.
    pub fn status(&self) -> Result<DeviceStatus> {
        let inner = self.lock()?;
        Ok(comm::check_device_status(
            inner.transport.as_ref(),
            self.descriptor.transaction_id,
            self.window,
        ))
    }

    fn lock(&self) -> Result<MutexGuard<'_, DeviceInner>> {
        self.inner
            .lock()
            .map_err(|_| Error::Resource(format!("{}: device lock poisoned", self.descriptor.name)))
    }

    fn unsupported(&self, command: &'static str) -> Error {
        warn!(
            model = self.descriptor.name,
            command, "Command not supported by this model"
        );
        Error::NotSupported {
            model: self.descriptor.name,
            command,
        }
    }

    fn send(&self, inner: &mut DeviceInner, mut report: Report, tag: u8) -> Result<Report> {
        report.set_transaction_id(tag);
        exchange(inner.transport.as_ref(), &mut report, self.window)
    }

    fn send_default(&self, inner: &mut DeviceInner, report: Report) -> Result<Report> {
        self.send(inner, report, self.descriptor.transaction_id)
    }

    fn write_mode(&self, inner: &mut DeviceInner, mode: u8, param: u8) -> Result<()> {
        if self.descriptor.quirks.no_device_mode {
            debug!(model = self.descriptor.name, "No device mode, skipping");
            return Ok(());
        }
        let report = commands::set_device_mode(mode, param);
        let written = (report.arguments()[0], report.arguments()[1]);
        self.send_default(inner, report)?;
        debug!(
            model = self.descriptor.name,
            mode = format_args!("0x{:02X}", written.0),
            param = written.1,
            "Device mode set"
        );
        inner.state.mode = Some(written);
        Ok(())
    }

    // Effects

    /// Apply `effect` to the model's main LED, persisted on the device.
    pub fn set_effect(&self, effect: &Effect) -> Result<()> {
        self.apply_effect(self.descriptor.led, effect, Storage::VarStore)
    }

    pub fn set_effect_with_storage(&self, effect: &Effect, storage: Storage) -> Result<()> {
        self.apply_effect(self.descriptor.led, effect, storage)
    }

    /// Apply `effect` to one LED zone, e.g. the scroll wheel of a mouse.
    ///
    /// Mode preconditions and quirks only apply to the main LED.
    pub fn set_effect_on(&self, led: u8, effect: &Effect) -> Result<()> {
        if !self.descriptor.has_zone(led) {
            return Err(Error::invalid(
                "led",
                format!("0x{led:02X} is not an effect zone of {}", self.descriptor.name),
            ));
        }
        self.apply_effect(led, effect, Storage::VarStore)
    }

    fn apply_effect(&self, led: u8, effect: &Effect, storage: Storage) -> Result<()> {
        let d = self.descriptor;
        let kind = effect.kind();
        if !d.supports(kind) {
            return Err(self.unsupported(kind.name()));
        }

        let mut inner = self.lock()?;
        if kind == EffectKind::CustomFrame {
            let draw = effects::encode(d.generation, effect, storage, led)?;
            self.send(&mut inner, draw, d.frame_tag())?;
            return Ok(());
        }

        match d.lighting {
            Lighting::Matrix => self.matrix_effect(&mut inner, led, effect, storage),
            Lighting::LedCommands => self.led_command_effect(&mut inner, led, effect, storage),
            Lighting::LedEffect => self.led_effect_only(&mut inner, led, effect, storage),
        }
    }

    fn matrix_effect(&self, inner: &mut DeviceInner, led: u8, effect: &Effect, storage: Storage) -> Result<()> {
        let d = self.descriptor;
        let main = led == d.led;

        if main {
            if let Some(mode) = d.mode.before_effect {
                self.write_mode(inner, mode, 0)?;
            }
        }

        let effect = match *effect {
            Effect::Wave { direction } if main && d.quirks.wave_inverted => Effect::Wave {
                direction: direction ^ 0x03,
            },
            other => other,
        };

        let report = effects::encode(d.generation, &effect, storage, led)?;
        self.send_default(inner, report.clone())?;

        if main && d.quirks.static_relatch && matches!(effect, Effect::Static(_)) {
            debug!(model = d.name, "Re-latching static colour");
            self.send_default(inner, commands::latch_marker())?;
            self.send_default(inner, report)?;
        }
        Ok(())
    }

    fn led_command_effect(&self, inner: &mut DeviceInner, led: u8, effect: &Effect, storage: Storage) -> Result<()> {
        let (on, firmware_effect, color) = match *effect {
            Effect::None => (0, None, None),
            Effect::Static(color) => (1, Some(led_effect::STATIC), Some(color)),
            Effect::Spectrum => (1, Some(led_effect::SPECTRUM), None),
            Effect::Pulsate => (1, Some(led_effect::PULSATE), None),
            other => return Err(self.unsupported(other.kind().name())),
        };

        self.send_default(inner, commands::set_led_state(storage, led, on))?;
        if let Some(id) = firmware_effect {
            self.send_default(inner, commands::set_led_effect(storage, led, id))?;
        }
        if let Some(color) = color {
            self.send_default(inner, commands::set_led_rgb(storage, led, color))?;
        }
        Ok(())
    }

    fn led_effect_only(&self, inner: &mut DeviceInner, led: u8, effect: &Effect, storage: Storage) -> Result<()> {
        let report = match *effect {
            // Single-colour LEDs: the colour argument has nowhere to go.
            Effect::Static(_) => commands::set_led_effect(storage, led, led_effect::STATIC),
            Effect::Pulsate => commands::set_led_effect(storage, led, led_effect::PULSATE),
            Effect::None => effects::encode(self.descriptor.generation, effect, storage, led)?,
            other => return Err(self.unsupported(other.kind().name())),
        };
        self.send_default(inner, report)?;
        Ok(())
    }

    // Custom frames

    /// Upload row segments of a custom frame. Nothing is shown until
    /// [`commit_custom_frame`](Self::commit_custom_frame).
    ///
    /// Every segment is validated before the first record is sent.
    pub fn stream_custom_frame(&self, segments: &[FrameSegment]) -> Result<()> {
        let d = self.descriptor;
        if !d.has_frame() {
            return Err(self.unsupported(EffectKind::CustomFrame.name()));
        }
        let reports = frame::encode_segments(d.frame, d.rows, d.cols, segments)?;

        let mut inner = self.lock()?;
        debug!(model = d.name, records = reports.len(), "Streaming custom frame");
        for report in reports {
            if let Some(mode) = d.mode.before_frame {
                self.write_mode(&mut inner, mode, 0)?;
            }
            self.send(&mut inner, report, d.frame_tag())?;
        }
        Ok(())
    }

    /// Upload a packed `[row, start, stop, rgb..]` buffer.
    pub fn stream_packed_frame(&self, buf: &[u8]) -> Result<()> {
        let segments = frame::parse_segments(buf)?;
        self.stream_custom_frame(&segments)
    }

    /// Display the uploaded frame.
    pub fn commit_custom_frame(&self) -> Result<()> {
        self.set_effect(&Effect::CustomFrame)
    }

    // Device mode and identity

    /// Modes other than normal and driver are written as normal mode.
    /// `param` is never sent; the device always receives 0.
    pub fn set_device_mode(&self, mode: u8, param: u8) -> Result<()> {
        let mut inner = self.lock()?;
        self.write_mode(&mut inner, mode, param)
    }

    /// Current `(mode, param)`. Models without device mode report normal mode.
    pub fn device_mode(&self) -> Result<(u8, u8)> {
        let mut inner = self.lock()?;
        if self.descriptor.quirks.no_device_mode {
            return Ok(inner.state.mode.unwrap_or((MODE_NORMAL, 0)));
        }
        let response = self.send_default(&mut inner, commands::get_device_mode())?;
        let mode = (response.arguments()[0], response.arguments()[1]);
        inner.state.mode = Some(mode);
        Ok(mode)
    }

    /// `(major, minor)`; read once per handle.
    pub fn firmware_version(&self) -> Result<(u8, u8)> {
        let mut inner = self.lock()?;
        if let Some(version) = inner.state.firmware {
            debug!(model = self.descriptor.name, "Firmware version from cache");
            return Ok(version);
        }
        let response = self.send_default(&mut inner, commands::get_firmware_version())?;
        let version = (response.arguments()[0], response.arguments()[1]);
        inner.state.firmware = Some(version);
        Ok(version)
    }

    pub fn serial(&self) -> Result<String> {
        let mut inner = self.lock()?;
        let response = self.send_default(&mut inner, commands::get_serial())?;
        Ok(commands::parse_serial(&response))
    }

    // Brightness

    pub fn set_brightness(&self, value: u8) -> Result<()> {
        self.write_brightness(self.descriptor.led, value)
    }

    /// Brightness of one effect zone, e.g. a charging pad ring.
    pub fn set_brightness_on(&self, led: u8, value: u8) -> Result<()> {
        if !self.descriptor.has_zone(led) {
            return Err(Error::invalid(
                "led",
                format!("0x{led:02X} is not an effect zone of {}", self.descriptor.name),
            ));
        }
        self.write_brightness(led, value)
    }

    fn write_brightness(&self, led: u8, value: u8) -> Result<()> {
        let report = match self.descriptor.brightness {
            BrightnessMode::None => return Err(self.unsupported("brightness")),
            BrightnessMode::Standard => commands::set_led_brightness(Storage::VarStore, led, value),
            BrightnessMode::Extended
            | BrightnessMode::ExtendedCached
            | BrightnessMode::ExtendedStandardQuery => {
                commands::set_extended_brightness(Storage::VarStore, led, value)
            }
            BrightnessMode::Laptop => commands::set_laptop_brightness(value),
        };
        let mut inner = self.lock()?;
        self.send_default(&mut inner, report)?;
        if led == self.descriptor.led {
            inner.state.brightness = value;
        }
        Ok(())
    }

    pub fn brightness(&self) -> Result<u8> {
        let d = self.descriptor;
        let (query, index) = match d.brightness {
            BrightnessMode::None => return Err(self.unsupported("brightness")),
            BrightnessMode::ExtendedCached => {
                let inner = self.lock()?;
                debug!(model = d.name, "Brightness from cache");
                return Ok(inner.state.brightness);
            }
            BrightnessMode::Standard => (commands::get_led_brightness(Storage::VarStore, d.led), 2),
            BrightnessMode::ExtendedStandardQuery => {
                (commands::get_led_brightness(Storage::VarStore, led::BACKLIGHT), 2)
            }
            BrightnessMode::Extended => (commands::get_extended_brightness(Storage::VarStore, d.led), 2),
            BrightnessMode::Laptop => (commands::get_laptop_brightness(), 1),
        };
        let mut inner = self.lock()?;
        let response = self.send_default(&mut inner, query)?;
        let value = response.arguments()[index];
        inner.state.brightness = value;
        Ok(value)
    }

    // Single LEDs

    fn check_led(&self, led: u8, command: &'static str) -> Result<()> {
        if self.descriptor.leds.is_empty() {
            return Err(self.unsupported(command));
        }
        if !self.descriptor.has_led(led) {
            return Err(Error::invalid(
                "led",
                format!("0x{led:02X} is not present on {}", self.descriptor.name),
            ));
        }
        Ok(())
    }

    pub fn set_led_state(&self, led: u8, on: bool) -> Result<()> {
        self.check_led(led, "LED state")?;
        let mut inner = self.lock()?;
        self.send_default(&mut inner, commands::set_led_state(Storage::VarStore, led, on as u8))?;
        Ok(())
    }

    pub fn led_state(&self, led: u8) -> Result<bool> {
        self.check_led(led, "LED state")?;
        let mut inner = self.lock()?;
        let response = self.send_default(&mut inner, commands::get_led_state(Storage::VarStore, led))?;
        Ok(response.arguments()[2] != 0)
    }

    /// Select a firmware effect id (see [`commands::led_effect`]) for one LED.
    pub fn set_led_effect(&self, led: u8, effect: u8) -> Result<()> {
        self.check_led(led, "LED effect")?;
        let mut inner = self.lock()?;
        self.send_default(&mut inner, commands::set_led_effect(Storage::VarStore, led, effect))?;
        Ok(())
    }

    pub fn set_led_rgb(&self, led: u8, color: Rgb) -> Result<()> {
        self.check_led(led, "LED colour")?;
        let mut inner = self.lock()?;
        self.send_default(&mut inner, commands::set_led_rgb(Storage::VarStore, led, color))?;
        Ok(())
    }

    // Accessory extras

    /// Fire one reactive ripple on a mouse mat.
    pub fn trigger_reactive(&self) -> Result<()> {
        let d = self.descriptor;
        let report = match d.reactive_trigger {
            Some(Generation::Standard) => commands::reactive_trigger(),
            Some(Generation::Extended) => {
                let blank = Effect::Reactive {
                    speed: 0,
                    color: Rgb::new(0, 0, 0),
                };
                effects::encode_extended(&blank, Storage::VarStore, d.led)?
            }
            None => return Err(self.unsupported("reactive trigger")),
        };
        let mut inner = self.lock()?;
        self.send_default(&mut inner, report)?;
        Ok(())
    }

    /// Blink the backlight in `color`.
    pub fn set_blinking(&self, color: Rgb) -> Result<()> {
        if !self.descriptor.quirks.blinking {
            return Err(self.unsupported("blinking effect"));
        }
        let mut inner = self.lock()?;
        let rgb = commands::set_led_rgb(Storage::VarStore, led::BACKLIGHT, color);
        self.send(&mut inner, rgb, transaction::EXTENDED)?;
        std::thread::sleep(BLINK_GAP);
        let blink = commands::set_led_effect(Storage::VarStore, led::BACKLIGHT, led_effect::BLINKING);
        self.send(&mut inner, blink, transaction::EXTENDED)?;
        Ok(())
    }

    /// Whether a cup sits on the mug holder.
    pub fn mug_present(&self) -> Result<bool> {
        if !self.descriptor.quirks.cup_sensor {
            return Err(self.unsupported("cup sensor"));
        }
        let mut inner = self.lock()?;
        let response = self.send_default(&mut inner, commands::get_cup_state())?;
        Ok(response.arguments()[1] != 0)
    }

    // Keyboard extras

    pub fn set_fn_toggle(&self, on: bool) -> Result<()> {
        if !self.descriptor.quirks.fn_toggle {
            return Err(self.unsupported("fn toggle"));
        }
        let mut inner = self.lock()?;
        self.send_default(&mut inner, commands::set_fn_toggle(on as u8))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Palette;
    use crate::pids;
    use crate::report::CommandStatus;
    use crate::transport::mock::MockTransport;

    fn open(pid: u16) -> (RazerDevice, MockTransport) {
        let mock = MockTransport::new();
        let device = RazerDevice::open(pid, Box::new(mock.clone()), &TimingConfig::immediate()).unwrap();
        (device, mock)
    }

    const RED: Rgb = Rgb::new(0xFF, 0, 0);

    #[test]
    fn open_unknown_pid_fails() {
        let err = RazerDevice::open(0x1234, Box::new(MockTransport::new()), &TimingConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownDevice(0x1234)));
    }

    #[test]
    fn window_follows_timing_class() {
        let mock = MockTransport::new();
        let d = RazerDevice::open(pids::MOUSE_DOCK, Box::new(mock), &TimingConfig::default()).unwrap();
        assert_eq!(d.window, SettleWindow::new(31000, 31100));
    }

    #[test]
    fn standard_static_on_keyboard() {
        let (dev, mock) = open(pids::BLACKWIDOW_CHROMA);
        dev.set_effect(&Effect::Static(RED)).unwrap();
        let sent = mock.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].transaction_id(), 0xFF);
        assert_eq!((sent[0].command_class(), sent[0].command_id()), (0x03, 0x0A));
        assert_eq!(sent[0].payload(), &[0x06, 0xFF, 0x00, 0x00]);
    }

    #[test]
    fn extended_effect_uses_device_led_and_tag() {
        let (dev, mock) = open(pids::HUNTSMAN_V2);
        dev.set_effect(&Effect::Spectrum).unwrap();
        let r = &mock.sent()[0];
        assert_eq!(r.transaction_id(), 0x1F);
        assert_eq!(&r.payload()[..3], &[0x01, led::BACKLIGHT, 0x03]);
    }

    #[test]
    fn unsupported_effect_sends_nothing() {
        let (dev, mock) = open(pids::KRAKEN_KITTY_EDITION);
        let err = dev.set_effect(&Effect::Wave { direction: 1 }).unwrap_err();
        assert!(matches!(err, Error::NotSupported { command: "wave effect", .. }));
        assert!(mock.sent().is_empty());
    }

    #[test]
    fn zone_effect_on_mouse_scroll_wheel() {
        let (dev, mock) = open(pids::DEATHADDER_ELITE);
        dev.set_effect_on(led::SCROLL_WHEEL, &Effect::Static(RED)).unwrap();
        let r = &mock.sent()[0];
        assert_eq!(r.transaction_id(), 0x3F);
        assert_eq!(&r.payload()[..3], &[0x01, led::SCROLL_WHEEL, 0x01]);

        assert!(matches!(
            dev.set_effect_on(led::BACKLIGHT, &Effect::Spectrum),
            Err(Error::InvalidArgument { field: "led", .. })
        ));
    }

    #[test]
    fn led_command_family_sequences() {
        let (dev, mock) = open(pids::DEATHADDER_CHROMA);
        dev.set_effect(&Effect::Static(RED)).unwrap();
        assert_eq!(mock.commands(), vec![(0x03, 0x00), (0x03, 0x02), (0x03, 0x01)]);
        let sent = mock.sent();
        assert_eq!(sent[0].payload(), &[0x01, led::LOGO, 0x01]);
        assert_eq!(sent[1].payload(), &[0x01, led::LOGO, led_effect::STATIC]);
        assert_eq!(sent[2].payload(), &[0x01, led::LOGO, 0xFF, 0x00, 0x00]);

        mock.clear();
        dev.set_effect(&Effect::None).unwrap();
        assert_eq!(mock.commands(), vec![(0x03, 0x00)]);
        assert_eq!(mock.sent()[0].payload(), &[0x01, led::LOGO, 0x00]);
    }

    #[test]
    fn single_colour_keyboard_pulsates() {
        let (dev, mock) = open(pids::BLACKWIDOW_ULTIMATE_2013);
        dev.set_effect(&Effect::Pulsate).unwrap();
        let r = &mock.sent()[0];
        assert_eq!((r.command_class(), r.command_id()), (0x03, 0x02));
        assert_eq!(r.payload(), &[0x01, led::LOGO, led_effect::PULSATE]);
        assert!(dev.set_effect(&Effect::Spectrum).is_err());
    }

    #[test]
    fn orbweaver_off_uses_matrix_none() {
        let (dev, mock) = open(pids::ORBWEAVER);
        dev.set_effect(&Effect::None).unwrap();
        let r = &mock.sent()[0];
        assert_eq!((r.command_class(), r.command_id()), (0x03, 0x0A));
        assert_eq!(r.payload(), &[0x00]);
    }

    #[test]
    fn charging_pad_static_relatches() {
        let (dev, mock) = open(pids::CHARGING_PAD_CHROMA);
        dev.set_effect(&Effect::Static(RED)).unwrap();
        assert_eq!(
            mock.commands(),
            vec![(0x00, 0x04), (0x0F, 0x02), (0x0F, 0x02), (0x0F, 0x02)]
        );
        let sent = mock.sent();
        assert_eq!(sent[0].payload(), &[MODE_NORMAL, 0x00]);
        assert_eq!(sent[2].payload(), &[0, 0, 0x08, 0, 0, 0]);
        assert_eq!(sent[1].payload(), sent[3].payload());
        assert!(sent.iter().all(|r| r.transaction_id() == 0x1F));
    }

    #[test]
    fn charging_pad_wave_is_inverted() {
        let (dev, mock) = open(pids::CHARGING_PAD_CHROMA);
        dev.set_effect(&Effect::Wave { direction: 1 }).unwrap();
        let wave = &mock.sent()[1];
        // 1 ^ 3 = 2, clamped to the Extended range.
        assert_eq!(&wave.payload()[..5], &[0x01, led::ZERO, 0x04, 0x01, 0x28]);

        mock.clear();
        dev.set_effect(&Effect::Wave { direction: 2 }).unwrap();
        assert_eq!(mock.sent()[1].arguments()[3], 0x01);

        mock.clear();
        dev.set_effect(&Effect::Wave { direction: 3 }).unwrap();
        assert_eq!(mock.sent()[1].arguments()[3], 0x00);
    }

    #[test]
    fn charging_pad_rings_skip_preconditions() {
        let (dev, mock) = open(pids::CHARGING_PAD_CHROMA);
        dev.set_effect_on(led::FAST_CHARGING, &Effect::Breathing(Palette::Random))
            .unwrap();
        assert_eq!(mock.commands(), vec![(0x0F, 0x02)]);
        assert_eq!(mock.sent()[0].arguments()[1], led::FAST_CHARGING);
    }

    #[test]
    fn mamba_draw_uses_legacy_tag() {
        let (dev, mock) = open(pids::MAMBA_WIRED);
        dev.stream_custom_frame(&[FrameSegment::new(0, 0, 1, vec![1, 2, 3, 4, 5, 6])])
            .unwrap();
        dev.commit_custom_frame().unwrap();
        dev.set_effect(&Effect::Spectrum).unwrap();
        let tags: Vec<u8> = mock.sent().iter().map(|r| r.transaction_id()).collect();
        assert_eq!(tags, vec![0x80, 0x80, 0xFF]);
    }

    #[test]
    fn frame_on_frameless_model_is_unsupported() {
        let (dev, mock) = open(pids::TARTARUS_CHROMA);
        let err = dev
            .stream_custom_frame(&[FrameSegment::new(0, 0, 0, vec![0; 3])])
            .unwrap_err();
        assert!(matches!(err, Error::NotSupported { .. }));
        assert!(mock.sent().is_empty());
    }

    #[test]
    fn bad_segment_sends_nothing() {
        let (dev, mock) = open(pids::BLACKWIDOW_CHROMA);
        let good = FrameSegment::new(0, 0, 0, vec![0; 3]);
        let bad = FrameSegment::new(9, 0, 0, vec![0; 3]);
        assert!(dev.stream_custom_frame(&[good, bad]).is_err());
        assert!(mock.sent().is_empty());
    }

    #[test]
    fn laptop_skips_device_mode() {
        let (dev, mock) = open(pids::BLADE_STEALTH);
        dev.initialize().unwrap();
        dev.set_device_mode(0x03, 0).unwrap();
        assert_eq!(dev.device_mode().unwrap(), (MODE_NORMAL, 0));
        assert!(mock.sent().is_empty());
    }

    #[test]
    fn keyboard_attach_sets_normal_mode() {
        let (dev, mock) = open(pids::BLACKWIDOW_X_CHROMA);
        dev.initialize().unwrap();
        assert_eq!(mock.commands(), vec![(0x00, 0x04)]);
        assert_eq!(dev.cached_state().unwrap().mode, Some((0x00, 0x00)));
    }

    #[test]
    fn accessory_attach_sets_driver_mode() {
        let (dev, mock) = open(pids::FIREFLY_V2);
        dev.initialize().unwrap();
        assert_eq!(mock.sent()[0].payload(), &[0x03, 0x00]);
        assert_eq!(mock.sent()[0].transaction_id(), 0x3F);
    }

    #[test]
    fn factory_mode_is_sanitised() {
        let (dev, mock) = open(pids::BLACKWIDOW_CHROMA);
        dev.set_device_mode(0x02, 0x05).unwrap();
        assert_eq!(mock.sent()[0].payload(), &[0x00, 0x00]);
        assert_eq!(dev.cached_state().unwrap().mode, Some((0x00, 0x00)));
    }

    #[test]
    fn device_mode_reads_response() {
        let (dev, mock) = open(pids::BLACKWIDOW_CHROMA);
        mock.on_command(0x00, 0x84, &[0x03, 0x00]);
        assert_eq!(dev.device_mode().unwrap(), (0x03, 0x00));
    }

    #[test]
    fn firmware_version_is_cached() {
        let (dev, mock) = open(pids::HUNTSMAN);
        mock.on_command(0x00, 0x81, &[0x01, 0x04]);
        assert_eq!(dev.firmware_version().unwrap(), (1, 4));
        assert_eq!(dev.firmware_version().unwrap(), (1, 4));
        assert_eq!(mock.sent().len(), 1);
    }

    #[test]
    fn serial_is_parsed() {
        let (dev, mock) = open(pids::HUNTSMAN);
        mock.on_command(0x00, 0x82, b"IO1234567890\0");
        assert_eq!(dev.serial().unwrap(), "IO1234567890");
    }

    #[test]
    fn brightness_families() {
        let (dev, mock) = open(pids::BLADE_2018);
        mock.on_command(0x0E, 0x84, &[0x01, 0x80]);
        dev.set_brightness(0x40).unwrap();
        assert_eq!(mock.sent()[0].payload(), &[0x01, 0x40]);
        assert_eq!(dev.brightness().unwrap(), 0x80);

        let (dev, mock) = open(pids::BLACKWIDOW_CHROMA);
        mock.on_command(0x03, 0x83, &[0x01, led::BACKLIGHT, 0x33]);
        assert_eq!(dev.brightness().unwrap(), 0x33);

        let (dev, mock) = open(pids::CHROMA_HDK);
        mock.on_command(0x03, 0x83, &[0x01, led::BACKLIGHT, 0x44]);
        dev.set_brightness(0x10).unwrap();
        assert_eq!(mock.commands()[0], (0x0F, 0x04));
        assert_eq!(dev.brightness().unwrap(), 0x44);
        assert_eq!(mock.commands()[1], (0x03, 0x83));
    }

    #[test]
    fn cached_brightness_does_no_io() {
        let (dev, mock) = open(pids::FIREFLY_HYPERFLUX);
        assert_eq!(dev.brightness().unwrap(), 0xFF);
        dev.set_brightness(0x20).unwrap();
        assert_eq!(dev.brightness().unwrap(), 0x20);
        assert_eq!(mock.sent().len(), 1);
    }

    #[test]
    fn brightness_unsupported() {
        let (dev, mock) = open(pids::NAGA_HEX_V2);
        assert!(matches!(dev.brightness(), Err(Error::NotSupported { .. })));
        assert!(mock.sent().is_empty());
    }

    #[test]
    fn single_led_commands() {
        let (dev, mock) = open(pids::BLACKWIDOW_CHROMA);
        mock.on_command(0x03, 0x80, &[0x01, led::GAME, 0x01]);
        dev.set_led_state(led::GAME, true).unwrap();
        assert!(dev.led_state(led::GAME).unwrap());
        dev.set_led_effect(led::MACRO, led_effect::BLINKING).unwrap();
        dev.set_led_rgb(led::MACRO, RED).unwrap();
        assert_eq!(
            mock.commands(),
            vec![(0x03, 0x00), (0x03, 0x80), (0x03, 0x02), (0x03, 0x01)]
        );
        assert!(matches!(
            dev.set_led_state(led::LOGO, true),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn fn_toggle_only_on_laptops() {
        let (dev, mock) = open(pids::BLADE_STEALTH);
        dev.set_fn_toggle(true).unwrap();
        assert_eq!(mock.sent()[0].payload(), &[0x00, 0x01]);

        let (dev, _) = open(pids::BLACKWIDOW_CHROMA);
        assert!(matches!(dev.set_fn_toggle(true), Err(Error::NotSupported { .. })));
    }

    #[test]
    fn device_failure_is_returned() {
        let (dev, mock) = open(pids::BLACKWIDOW_CHROMA);
        mock.push_status(CommandStatus::NotSupported);
        assert!(matches!(
            dev.set_effect(&Effect::Spectrum),
            Err(Error::DeviceStatus { .. })
        ));
    }

    #[test]
    fn failed_mode_switch_stops_the_sequence() {
        let (dev, mock) = open(pids::CHARGING_PAD_CHROMA);
        mock.push_status(CommandStatus::Failure);
        assert!(dev.set_effect(&Effect::Spectrum).is_err());
        assert_eq!(mock.commands(), vec![(0x00, 0x04)]);
    }

    #[test]
    fn mode_param_never_reaches_the_wire() {
        let (dev, mock) = open(pids::BLACKWIDOW_CHROMA);
        dev.set_device_mode(0x03, 0x07).unwrap();
        assert_eq!(mock.sent()[0].payload(), &[0x03, 0x00]);
        assert_eq!(dev.cached_state().unwrap().mode, Some((0x03, 0x00)));
    }

    #[test]
    fn status_uses_device_tag() {
        let (dev, mock) = open(pids::FIREFLY_V2);
        assert_eq!(dev.status().unwrap(), DeviceStatus::Connected);
        assert_eq!(mock.commands(), vec![(0x00, 0x81)]);
        assert_eq!(mock.sent()[0].transaction_id(), 0x3F);

        mock.push_status(CommandStatus::Failure);
        assert_eq!(dev.status().unwrap(), DeviceStatus::Error);
    }

    #[test]
    fn charging_pad_frame_switches_mode_per_record() {
        let (dev, mock) = open(pids::CHARGING_PAD_CHROMA);
        let segments = [
            FrameSegment::new(0, 0, 1, vec![1; 6]),
            FrameSegment::new(0, 2, 3, vec![2; 6]),
        ];
        dev.stream_custom_frame(&segments).unwrap();
        assert_eq!(
            mock.commands(),
            vec![(0x00, 0x04), (0x0F, 0x03), (0x00, 0x04), (0x0F, 0x03)]
        );
        assert!(mock.sent().iter().step_by(2).all(|r| r.payload() == &[0x03, 0x00]));
    }

    #[test]
    fn extended_reactive_trigger() {
        let (dev, mock) = open(pids::FIREFLY_HYPERFLUX);
        dev.trigger_reactive().unwrap();
        let r = &mock.sent()[0];
        assert_eq!((r.command_class(), r.command_id(), r.data_size()), (0x0F, 0x02, 9));
        // Speed 0 clamps to the slowest speed; the colour stays black.
        assert_eq!(r.payload(), &[0x01, led::ZERO, 0x05, 0x00, 0x01, 0x01, 0, 0, 0]);
        assert_eq!(r.transaction_id(), 0x3F);
    }

    #[test]
    fn standard_reactive_trigger() {
        let (dev, mock) = open(pids::FIREFLY);
        dev.trigger_reactive().unwrap();
        let r = &mock.sent()[0];
        assert_eq!((r.command_class(), r.command_id()), (0x03, 0x0A));
        assert_eq!(r.payload(), &[0x02, 0, 0, 0, 0]);
    }

    #[test]
    fn reactive_trigger_unsupported() {
        let (dev, mock) = open(pids::CORE);
        assert!(matches!(
            dev.trigger_reactive(),
            Err(Error::NotSupported { command: "reactive trigger", .. })
        ));
        assert!(mock.sent().is_empty());
    }

    #[test]
    fn mug_blinks_backlight() {
        let (dev, mock) = open(pids::CHROMA_MUG);
        dev.set_blinking(Rgb::new(0x10, 0x20, 0x30)).unwrap();
        assert_eq!(mock.commands(), vec![(0x03, 0x01), (0x03, 0x02)]);
        let sent = mock.sent();
        assert_eq!(sent[0].payload(), &[0x01, led::BACKLIGHT, 0x10, 0x20, 0x30]);
        assert_eq!(sent[1].payload(), &[0x01, led::BACKLIGHT, led_effect::BLINKING]);
        assert!(sent.iter().all(|r| r.transaction_id() == 0x3F));
    }

    #[test]
    fn mug_cup_sensor() {
        let (dev, mock) = open(pids::CHROMA_MUG);
        mock.on_command(0x02, 0x81, &[0x00, 0x01]);
        assert!(dev.mug_present().unwrap());
        mock.on_command(0x02, 0x81, &[0x00, 0x00]);
        assert!(!dev.mug_present().unwrap());
        assert_eq!(mock.commands(), vec![(0x02, 0x81), (0x02, 0x81)]);
    }

    #[test]
    fn mug_extras_elsewhere_are_unsupported() {
        let (dev, mock) = open(pids::FIREFLY_V2);
        assert!(matches!(dev.mug_present(), Err(Error::NotSupported { .. })));
        assert!(matches!(
            dev.set_blinking(RED),
            Err(Error::NotSupported { .. })
        ));
        assert!(mock.sent().is_empty());
    }
}
