//! Builders for the non-effect commands: device mode, firmware, serial,
//! single-LED control, brightness, the keyboard fn toggle and a few
//! accessory extras.
//!
//! Every builder returns an unsealed, untagged [`Report`]. The device
//! handle stamps the transaction id and the exchange engine seals it.

use crate::effects::{standard_id, Rgb, EXTENDED_CLASS, STANDARD_CLASS};
use crate::report::{new_report, Report, Storage};
use crate::safety::{clamp_u8, sanitize_device_mode};

const CLASS_DEVICE: u8 = 0x00;
const CLASS_MISC: u8 = 0x02;
const CLASS_LED: u8 = 0x03;
const CLASS_LAPTOP: u8 = 0x0E;

/// Highest LED effect id the LED effect command accepts.
const LED_EFFECT_MAX: u8 = 0x05;
/// Length of the serial number argument block.
pub const SERIAL_LEN: usize = 22;

/// LED effect command values.
pub mod led_effect {
    pub const STATIC: u8 = 0x00;
    pub const BLINKING: u8 = 0x01;
    pub const PULSATE: u8 = 0x02;
    pub const SPECTRUM: u8 = 0x04;
}

/// Set device mode. Unsupported modes are rewritten to normal mode and the
/// parameter is always sent as 0.
pub fn set_device_mode(mode: u8, param: u8) -> Report {
    let (mode, param) = sanitize_device_mode(mode, param);
    let mut report = new_report(CLASS_DEVICE, 0x04, 0x02);
    report.arguments_mut()[0] = mode;
    report.arguments_mut()[1] = param;
    report
}

pub fn get_device_mode() -> Report {
    new_report(CLASS_DEVICE, 0x84, 0x02)
}

/// Response carries `[major, minor]`.
pub fn get_firmware_version() -> Report {
    new_report(CLASS_DEVICE, 0x81, 0x02)
}

pub fn get_serial() -> Report {
    new_report(CLASS_DEVICE, 0x82, SERIAL_LEN as u8)
}

/// Decode the serial from a response: NUL-terminated, printable ASCII only.
pub fn parse_serial(response: &Report) -> String {
    response.arguments()[..SERIAL_LEN]
        .iter()
        .take_while(|&&b| b != 0)
        .filter(|b| b.is_ascii_graphic() || **b == b' ')
        .map(|&b| b as char)
        .collect::<String>()
        .trim()
        .to_string()
}

pub fn set_led_state(storage: Storage, led: u8, on: u8) -> Report {
    let mut report = new_report(CLASS_LED, 0x00, 0x03);
    let args = report.arguments_mut();
    args[0] = storage as u8;
    args[1] = led;
    args[2] = clamp_u8(on, 0, 1);
    report
}

pub fn get_led_state(storage: Storage, led: u8) -> Report {
    let mut report = new_report(CLASS_LED, 0x80, 0x03);
    report.arguments_mut()[0] = storage as u8;
    report.arguments_mut()[1] = led;
    report
}

/// Select the firmware effect of a single LED (static, blink, pulsate, spectrum).
pub fn set_led_effect(storage: Storage, led: u8, effect: u8) -> Report {
    let mut report = new_report(CLASS_LED, 0x02, 0x03);
    let args = report.arguments_mut();
    args[0] = storage as u8;
    args[1] = led;
    args[2] = clamp_u8(effect, 0, LED_EFFECT_MAX);
    report
}

pub fn set_led_rgb(storage: Storage, led: u8, color: Rgb) -> Report {
    let mut report = new_report(CLASS_LED, 0x01, 0x05);
    let args = report.arguments_mut();
    args[0] = storage as u8;
    args[1] = led;
    args[2..5].copy_from_slice(&color.to_bytes());
    report
}

/// Standard brightness for one LED.
pub fn set_led_brightness(storage: Storage, led: u8, brightness: u8) -> Report {
    let mut report = new_report(CLASS_LED, 0x03, 0x03);
    let args = report.arguments_mut();
    args[0] = storage as u8;
    args[1] = led;
    args[2] = brightness;
    report
}

/// Response carries the value at argument 2.
pub fn get_led_brightness(storage: Storage, led: u8) -> Report {
    let mut report = new_report(CLASS_LED, 0x83, 0x03);
    report.arguments_mut()[0] = storage as u8;
    report.arguments_mut()[1] = led;
    report
}

pub fn set_extended_brightness(storage: Storage, led: u8, brightness: u8) -> Report {
    let mut report = new_report(EXTENDED_CLASS, 0x04, 0x03);
    let args = report.arguments_mut();
    args[0] = storage as u8;
    args[1] = led;
    args[2] = brightness;
    report
}

pub fn get_extended_brightness(storage: Storage, led: u8) -> Report {
    let mut report = new_report(EXTENDED_CLASS, 0x84, 0x03);
    report.arguments_mut()[0] = storage as u8;
    report.arguments_mut()[1] = led;
    report
}

/// Laptop keyboard backlight.
pub fn set_laptop_brightness(brightness: u8) -> Report {
    let mut report = new_report(CLASS_LAPTOP, 0x04, 0x02);
    report.arguments_mut()[0] = 0x01;
    report.arguments_mut()[1] = brightness;
    report
}

/// Response carries the value at argument 1.
pub fn get_laptop_brightness() -> Report {
    let mut report = new_report(CLASS_LAPTOP, 0x84, 0x02);
    report.arguments_mut()[0] = 0x01;
    report
}

/// Swap the function-key row between media keys and F-keys.
pub fn set_fn_toggle(on: u8) -> Report {
    let mut report = new_report(CLASS_MISC, 0x06, 0x02);
    report.arguments_mut()[1] = clamp_u8(on, 0, 1);
    report
}

/// Short custom-draw marker that makes some wireless pads latch the
/// colour they were just sent.
pub fn latch_marker() -> Report {
    let mut report = new_report(EXTENDED_CLASS, 0x02, 0x06);
    report.arguments_mut()[2] = 0x08;
    report
}

/// Zeroed Standard reactive effect. Fires one reactive ripple on mats that
/// have no key presses of their own.
pub fn reactive_trigger() -> Report {
    let mut report = new_report(STANDARD_CLASS, 0x0A, 0x05);
    report.arguments_mut()[0] = standard_id::REACTIVE;
    report
}

/// Mug holder cup sensor. Response carries the state at argument 1.
pub fn get_cup_state() -> Report {
    new_report(CLASS_MISC, 0x81, 0x02)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::led;

    #[test]
    fn device_mode_passes_driver_mode() {
        let r = set_device_mode(0x03, 0x00);
        assert_eq!((r.command_class(), r.command_id(), r.data_size()), (0x00, 0x04, 2));
        assert_eq!(r.payload(), &[0x03, 0x00]);
    }

    #[test]
    fn device_mode_param_is_never_sent() {
        assert_eq!(set_device_mode(0x03, 0x07).payload(), &[0x03, 0x00]);
        assert_eq!(set_device_mode(0x00, 0x01).payload(), &[0x00, 0x00]);
    }

    #[test]
    fn device_mode_blocks_factory_mode() {
        let r = set_device_mode(0x02, 0x01);
        assert_eq!(r.payload(), &[0x00, 0x00]);
    }

    #[test]
    fn query_ids_have_get_bit() {
        for r in [get_device_mode(), get_firmware_version(), get_serial()] {
            assert_eq!(r.command_class(), 0x00);
            assert_ne!(r.command_id() & 0x80, 0);
        }
        assert_eq!(get_serial().data_size(), 0x16);
    }

    #[test]
    fn serial_is_trimmed_at_nul() {
        let mut r = get_serial();
        r.put(0, b"PM1234H56789012\0junk").unwrap();
        assert_eq!(parse_serial(&r), "PM1234H56789012");
    }

    #[test]
    fn serial_drops_control_bytes() {
        let mut r = get_serial();
        r.put(0, &[b'X', 0x07, b'Y', 0xFF, b'Z']).unwrap();
        assert_eq!(parse_serial(&r), "XYZ");
    }

    #[test]
    fn led_state_clamps() {
        let r = set_led_state(Storage::VarStore, led::LOGO, 9);
        assert_eq!(r.payload(), &[0x01, 0x04, 0x01]);
    }

    #[test]
    fn led_effect_clamps() {
        let r = set_led_effect(Storage::VarStore, led::LOGO, 0x30);
        assert_eq!(r.payload(), &[0x01, 0x04, 0x05]);
    }

    #[test]
    fn led_rgb_layout() {
        let r = set_led_rgb(Storage::NoStore, led::GAME, Rgb::new(1, 2, 3));
        assert_eq!((r.command_class(), r.command_id()), (0x03, 0x01));
        assert_eq!(r.payload(), &[0x00, 0x08, 1, 2, 3]);
    }

    #[test]
    fn brightness_families() {
        let r = set_led_brightness(Storage::VarStore, led::BACKLIGHT, 0x80);
        assert_eq!((r.command_class(), r.command_id()), (0x03, 0x03));
        assert_eq!(r.payload(), &[0x01, 0x05, 0x80]);

        let r = set_extended_brightness(Storage::VarStore, led::ZERO, 0x40);
        assert_eq!((r.command_class(), r.command_id()), (0x0F, 0x04));
        assert_eq!(r.payload(), &[0x01, 0x00, 0x40]);

        let r = set_laptop_brightness(0xFF);
        assert_eq!((r.command_class(), r.command_id()), (0x0E, 0x04));
        assert_eq!(r.payload(), &[0x01, 0xFF]);
        assert_eq!(get_laptop_brightness().payload(), &[0x01, 0x00]);
    }

    #[test]
    fn fn_toggle_layout() {
        let r = set_fn_toggle(3);
        assert_eq!((r.command_class(), r.command_id()), (0x02, 0x06));
        assert_eq!(r.payload(), &[0x00, 0x01]);
    }

    #[test]
    fn latch_marker_layout() {
        let r = latch_marker();
        assert_eq!((r.command_class(), r.command_id(), r.data_size()), (0x0F, 0x02, 6));
        assert_eq!(r.payload(), &[0, 0, 0x08, 0, 0, 0]);
    }

    #[test]
    fn reactive_trigger_is_zeroed_reactive() {
        let r = reactive_trigger();
        assert_eq!((r.command_class(), r.command_id(), r.data_size()), (0x03, 0x0A, 5));
        assert_eq!(r.payload(), &[0x02, 0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn cup_state_query() {
        let r = get_cup_state();
        assert_eq!((r.command_class(), r.command_id(), r.data_size()), (0x02, 0x81, 2));
        assert_eq!(r.payload(), &[0x00, 0x00]);
    }
}
