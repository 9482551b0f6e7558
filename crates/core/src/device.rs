//! Device model descriptors.
//!
//! Every supported product id maps to one static [`DeviceDescriptor`]
//! describing how to talk to it: protocol generation, transaction tag,
//! LED id, supported effects, custom-frame layout, mode preconditions,
//! brightness command family and settle-window class. Dispatch never
//! branches on product ids; it reads the descriptor.

use crate::config::TimingClass;
use crate::effects::{EffectKind, Generation};
use crate::error::{Error, Result};
use crate::frame::FrameLayout;
use crate::pids;
use crate::report::{led, transaction};
use crate::safety::{MODE_DRIVER, MODE_NORMAL};

/// Broad product family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Keyboard,
    Keypad,
    Laptop,
    Mouse,
    Mousemat,
    MouseDock,
    Speaker,
    Headset,
    HeadsetStand,
    Mug,
    Controller,
    ChargingPad,
}

/// How hardware effects reach the LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lighting {
    /// The generation's matrix effect command.
    Matrix,
    /// LED state, LED effect and LED colour commands in sequence.
    LedCommands,
    /// LED effect command only. The LEDs are single-colour.
    LedEffect,
}

/// Brightness command family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrightnessMode {
    None,
    /// 0x03/0x03 set, 0x03/0x83 get.
    Standard,
    /// 0x0F/0x04 set, 0x0F/0x84 get.
    Extended,
    /// Extended set. The device does not report it back; reads use the cache.
    ExtendedCached,
    /// Extended set, Standard get on the backlight LED.
    ExtendedStandardQuery,
    /// 0x0E/0x04 laptop backlight.
    Laptop,
}

/// Device mode switches issued implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModePolicy {
    /// Mode set once when the handle is attached.
    pub on_attach: Option<u8>,
    /// Mode set before every hardware effect.
    pub before_effect: Option<u8>,
    /// Mode set before every custom-frame record.
    pub before_frame: Option<u8>,
}

impl ModePolicy {
    pub const NONE: Self = Self {
        on_attach: None,
        before_effect: None,
        before_frame: None,
    };
    const NORMAL_ON_ATTACH: Self = Self {
        on_attach: Some(MODE_NORMAL),
        ..Self::NONE
    };
    const DRIVER_ON_ATTACH: Self = Self {
        on_attach: Some(MODE_DRIVER),
        ..Self::NONE
    };
    const PER_COMMAND: Self = Self {
        on_attach: None,
        before_effect: Some(MODE_NORMAL),
        before_frame: Some(MODE_DRIVER),
    };
}

/// Per-model deviations from the generic command flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quirks {
    /// Wave direction is XORed with 3 before encoding.
    pub wave_inverted: bool,
    /// A static colour only sticks after a latch marker and a resend.
    pub static_relatch: bool,
    /// Laptops have no device mode command.
    pub no_device_mode: bool,
    /// Keyboard supports the fn-row toggle.
    pub fn_toggle: bool,
    /// Mug holder reports whether a cup is present.
    pub cup_sensor: bool,
    /// Backlight can blink via the LED colour and LED effect commands.
    pub blinking: bool,
}

impl Quirks {
    pub const NONE: Self = Self {
        wave_inverted: false,
        static_relatch: false,
        no_device_mode: false,
        fn_toggle: false,
        cup_sensor: false,
        blinking: false,
    };
    const LAPTOP: Self = Self {
        no_device_mode: true,
        fn_toggle: true,
        ..Self::NONE
    };
    const CHARGING_PAD: Self = Self {
        wave_inverted: true,
        static_relatch: true,
        ..Self::NONE
    };
    const MUG: Self = Self {
        cup_sensor: true,
        blinking: true,
        ..Self::NONE
    };
}

/// Static description of one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceDescriptor {
    pub pid: u16,
    pub name: &'static str,
    pub kind: DeviceKind,
    pub generation: Generation,
    pub transaction_id: u8,
    /// Tag used for frame records and the custom draw, if it differs.
    pub frame_transaction_id: Option<u8>,
    /// LED used for effects and brightness.
    pub led: u8,
    /// Additional LEDs that accept effects.
    pub zones: &'static [u8],
    /// LEDs driven by the single-LED commands.
    pub leds: &'static [u8],
    pub timing: TimingClass,
    /// USB interface carrying the control channel.
    pub interface: u8,
    pub effects: &'static [EffectKind],
    pub frame: FrameLayout,
    pub rows: u8,
    pub cols: u8,
    pub mode: ModePolicy,
    pub lighting: Lighting,
    pub brightness: BrightnessMode,
    /// Cached brightness before the first write.
    pub initial_brightness: u8,
    /// Encoder family of the one-shot reactive trigger, if the model has one.
    pub reactive_trigger: Option<Generation>,
    pub quirks: Quirks,
}

use EffectKind as E;

const KEYBOARD_CHROMA: &[EffectKind] = &[
    E::None,
    E::Static,
    E::Wave,
    E::Spectrum,
    E::Reactive,
    E::Breathing,
    E::CustomFrame,
];
const KEYBOARD_FULL: &[EffectKind] = &[
    E::None,
    E::Static,
    E::Wave,
    E::Spectrum,
    E::Reactive,
    E::Breathing,
    E::Starlight,
    E::CustomFrame,
];
const KEYBOARD_ULTIMATE_2016: &[EffectKind] = &[
    E::None,
    E::Static,
    E::Wave,
    E::Reactive,
    E::Breathing,
    E::Starlight,
    E::CustomFrame,
];
const DEATHSTALKER: &[EffectKind] = &[
    E::None,
    E::Static,
    E::Wave,
    E::Spectrum,
    E::Breathing,
    E::CustomFrame,
];
const TARTARUS: &[EffectKind] = &[E::None, E::Static, E::Spectrum, E::Breathing];
const SINGLE_COLOUR: &[EffectKind] = &[E::Static, E::Pulsate];
const SINGLE_COLOUR_WITH_OFF: &[EffectKind] = &[E::None, E::Static, E::Pulsate];
const LED_RGB: &[EffectKind] = &[E::None, E::Static, E::Spectrum];
const LED_RGB_PULSATE: &[EffectKind] = &[E::None, E::Static, E::Spectrum, E::Pulsate];
const MOUSE_MATRIX: &[EffectKind] = &[
    E::None,
    E::Static,
    E::Wave,
    E::Spectrum,
    E::Reactive,
    E::Breathing,
    E::CustomFrame,
];
const MOUSE_ZONES: &[EffectKind] = &[E::None, E::Static, E::Spectrum, E::Reactive, E::Breathing];
const MOUSE_ZONES_FRAME: &[EffectKind] = &[
    E::None,
    E::Static,
    E::Spectrum,
    E::Reactive,
    E::Breathing,
    E::CustomFrame,
];
const ACCESSORY_WAVE: &[EffectKind] = &[
    E::None,
    E::Static,
    E::Wave,
    E::Spectrum,
    E::Breathing,
    E::CustomFrame,
];
const ACCESSORY_KITTY: &[EffectKind] = &[E::None, E::Static, E::Breathing, E::CustomFrame];
const ACCESSORY_DOCK: &[EffectKind] = &[E::None, E::Static, E::Spectrum, E::Breathing, E::CustomFrame];

const GAME_MACRO: &[u8] = &[led::GAME, led::MACRO];
const PROFILE: &[u8] = &[led::RED_PROFILE, led::GREEN_PROFILE, led::BLUE_PROFILE];
const LOGO: &[u8] = &[led::LOGO];
const SCROLL: &[u8] = &[led::SCROLL_WHEEL];
const LOGO_SCROLL: &[u8] = &[led::LOGO, led::SCROLL_WHEEL];
const CHARGE_RINGS: &[u8] = &[led::CHARGING, led::FAST_CHARGING, led::FULLY_CHARGED];

impl DeviceDescriptor {
    const fn new(pid: u16, name: &'static str, kind: DeviceKind) -> Self {
        Self {
            pid,
            name,
            kind,
            generation: Generation::Standard,
            transaction_id: transaction::DEFAULT,
            frame_transaction_id: None,
            led: led::BACKLIGHT,
            zones: &[],
            leds: &[],
            timing: TimingClass::Wired,
            interface: 0,
            effects: &[],
            frame: FrameLayout::None,
            rows: 0,
            cols: 0,
            mode: ModePolicy::NONE,
            lighting: Lighting::Matrix,
            brightness: BrightnessMode::None,
            initial_brightness: 0,
            reactive_trigger: None,
            quirks: Quirks::NONE,
        }
    }

    /// Standard-generation Chroma keyboard with a 6x22 matrix.
    const fn keyboard(pid: u16, name: &'static str) -> Self {
        Self {
            interface: 2,
            effects: KEYBOARD_CHROMA,
            frame: FrameLayout::Matrix,
            rows: 6,
            cols: 22,
            mode: ModePolicy::NORMAL_ON_ATTACH,
            brightness: BrightnessMode::Standard,
            leds: GAME_MACRO,
            ..Self::new(pid, name, DeviceKind::Keyboard)
        }
    }

    /// Pre-Chroma keyboard with a single-colour backlight.
    const fn classic_keyboard(pid: u16, name: &'static str) -> Self {
        Self {
            led: led::LOGO,
            effects: SINGLE_COLOUR,
            frame: FrameLayout::None,
            rows: 0,
            cols: 0,
            lighting: Lighting::LedEffect,
            ..Self::keyboard(pid, name)
        }
    }

    const fn extended_keyboard(pid: u16, name: &'static str, tag: u8, rows: u8, cols: u8) -> Self {
        Self {
            generation: Generation::Extended,
            transaction_id: tag,
            effects: KEYBOARD_FULL,
            frame: FrameLayout::Extended,
            rows,
            cols,
            brightness: BrightnessMode::Extended,
            ..Self::keyboard(pid, name)
        }
    }

    const fn laptop(pid: u16, name: &'static str, cols: u8) -> Self {
        Self {
            interface: 2,
            effects: KEYBOARD_FULL,
            frame: FrameLayout::Matrix,
            rows: 6,
            cols,
            brightness: BrightnessMode::Laptop,
            leds: LOGO,
            quirks: Quirks::LAPTOP,
            ..Self::new(pid, name, DeviceKind::Laptop)
        }
    }

    /// Mouse with logo and scroll LEDs reachable only by LED state.
    const fn basic_mouse(pid: u16, name: &'static str, leds: &'static [u8]) -> Self {
        Self {
            led: leds[0],
            leds,
            ..Self::new(pid, name, DeviceKind::Mouse)
        }
    }

    /// Chroma mouse driven through the Standard matrix effect command.
    const fn matrix_mouse(pid: u16, name: &'static str, frame: FrameLayout, cols: u8) -> Self {
        Self {
            effects: MOUSE_MATRIX,
            frame,
            rows: 1,
            cols,
            brightness: BrightnessMode::Standard,
            leds: LOGO_SCROLL,
            ..Self::new(pid, name, DeviceKind::Mouse)
        }
    }

    /// Extended mouse addressing its LOGO and SCROLL zones separately.
    const fn zoned_mouse(pid: u16, name: &'static str, tag: u8) -> Self {
        Self {
            generation: Generation::Extended,
            transaction_id: tag,
            led: led::LOGO,
            zones: LOGO_SCROLL,
            effects: MOUSE_ZONES,
            brightness: BrightnessMode::Extended,
            ..Self::new(pid, name, DeviceKind::Mouse)
        }
    }

    /// Extended accessory: whole-device LED, driver mode on attach.
    const fn accessory(pid: u16, name: &'static str, kind: DeviceKind, tag: u8) -> Self {
        Self {
            generation: Generation::Extended,
            transaction_id: tag,
            led: led::ZERO,
            timing: TimingClass::Accessory,
            effects: ACCESSORY_WAVE,
            mode: ModePolicy::DRIVER_ON_ATTACH,
            brightness: BrightnessMode::ExtendedStandardQuery,
            ..Self::new(pid, name, kind)
        }
    }

    /// Accessory speaking the Standard encoders under the 0x3F tag.
    const fn standard_accessory(pid: u16, name: &'static str, kind: DeviceKind) -> Self {
        Self {
            generation: Generation::Standard,
            led: led::BACKLIGHT,
            brightness: BrightnessMode::Standard,
            ..Self::accessory(pid, name, kind, transaction::EXTENDED)
        }
    }

    const fn with_effects(self, effects: &'static [EffectKind]) -> Self {
        Self { effects, ..self }
    }

    const fn with_frame(self, frame: FrameLayout, rows: u8, cols: u8) -> Self {
        Self {
            frame,
            rows,
            cols,
            ..self
        }
    }

    const fn without_frame(self) -> Self {
        self.with_frame(FrameLayout::None, 0, 0)
    }

    const fn with_leds(self, leds: &'static [u8]) -> Self {
        Self { leds, ..self }
    }

    const fn with_led(self, led: u8) -> Self {
        Self { led, ..self }
    }

    const fn with_zones(self, zones: &'static [u8]) -> Self {
        Self { zones, ..self }
    }

    const fn with_tag(self, transaction_id: u8) -> Self {
        Self {
            transaction_id,
            ..self
        }
    }

    const fn with_frame_tag(self, tag: u8) -> Self {
        Self {
            frame_transaction_id: Some(tag),
            ..self
        }
    }

    const fn with_lighting(self, lighting: Lighting) -> Self {
        Self { lighting, ..self }
    }

    const fn with_brightness(self, brightness: BrightnessMode) -> Self {
        Self { brightness, ..self }
    }

    const fn with_initial_brightness(self, initial_brightness: u8) -> Self {
        Self {
            initial_brightness,
            ..self
        }
    }

    const fn with_timing(self, timing: TimingClass) -> Self {
        Self { timing, ..self }
    }

    const fn with_mode(self, mode: ModePolicy) -> Self {
        Self { mode, ..self }
    }

    const fn with_reactive_trigger(self, generation: Generation) -> Self {
        Self {
            reactive_trigger: Some(generation),
            ..self
        }
    }

    const fn with_quirks(self, quirks: Quirks) -> Self {
        Self { quirks, ..self }
    }

    const fn with_kind(self, kind: DeviceKind) -> Self {
        Self { kind, ..self }
    }

    pub fn supports(&self, kind: EffectKind) -> bool {
        self.effects.contains(&kind)
    }

    /// Whether `led` accepts effects on this model.
    pub fn has_zone(&self, led: u8) -> bool {
        led == self.led || self.zones.contains(&led)
    }

    pub fn has_led(&self, led: u8) -> bool {
        self.leds.contains(&led)
    }

    pub fn has_frame(&self) -> bool {
        self.frame != FrameLayout::None
    }

    /// Tag for frame records and the custom draw.
    pub fn frame_tag(&self) -> u8 {
        self.frame_transaction_id.unwrap_or(self.transaction_id)
    }
}

/// Every supported model.
pub static DEVICES: &[DeviceDescriptor] = &[
    // Keyboards
    DeviceDescriptor::classic_keyboard(pids::BLACKWIDOW_ORIGINAL, "Razer BlackWidow Classic"),
    DeviceDescriptor::classic_keyboard(pids::BLACKWIDOW_ULTIMATE_2012, "Razer BlackWidow Ultimate 2012"),
    DeviceDescriptor::classic_keyboard(pids::BLACKWIDOW_STEALTH_EDITION, "Razer BlackWidow Stealth Edition"),
    DeviceDescriptor::classic_keyboard(pids::BLACKWIDOW_ULTIMATE_2013, "Razer BlackWidow Ultimate 2013"),
    DeviceDescriptor::classic_keyboard(pids::BLACKWIDOW_STEALTH, "Razer BlackWidow Stealth"),
    DeviceDescriptor::keyboard(pids::ANANSI, "Razer Anansi")
        .with_effects(LED_RGB)
        .with_lighting(Lighting::LedCommands)
        .without_frame(),
    DeviceDescriptor::keyboard(pids::ORBWEAVER, "Razer Orbweaver")
        .with_kind(DeviceKind::Keypad)
        .with_effects(SINGLE_COLOUR_WITH_OFF)
        .with_lighting(Lighting::LedEffect)
        .with_leds(PROFILE)
        .without_frame(),
    DeviceDescriptor::keyboard(pids::BLACKWIDOW_CHROMA, "Razer BlackWidow Chroma"),
    DeviceDescriptor::keyboard(pids::DEATHSTALKER_CHROMA, "Razer DeathStalker Chroma")
        .with_effects(DEATHSTALKER)
        .with_frame(FrameLayout::OneRow, 1, 12),
    DeviceDescriptor::keyboard(pids::ORBWEAVER_CHROMA, "Razer Orbweaver Chroma")
        .with_kind(DeviceKind::Keypad)
        .with_frame(FrameLayout::Matrix, 4, 5)
        .with_leds(PROFILE),
    DeviceDescriptor::keyboard(pids::TARTARUS_CHROMA, "Razer Tartarus Chroma")
        .with_kind(DeviceKind::Keypad)
        .with_effects(TARTARUS)
        .with_leds(PROFILE)
        .without_frame(),
    DeviceDescriptor::keyboard(pids::BLACKWIDOW_CHROMA_TE, "Razer BlackWidow Chroma Tournament Edition"),
    DeviceDescriptor::keyboard(pids::BLACKWIDOW_OVERWATCH, "Razer BlackWidow Chroma (Overwatch)"),
    DeviceDescriptor::keyboard(pids::BLACKWIDOW_ULTIMATE_2016, "Razer BlackWidow Ultimate 2016")
        .with_effects(KEYBOARD_ULTIMATE_2016),
    DeviceDescriptor::keyboard(pids::BLACKWIDOW_X_CHROMA, "Razer BlackWidow X Chroma"),
    DeviceDescriptor::keyboard(pids::BLACKWIDOW_X_ULTIMATE, "Razer BlackWidow X Ultimate")
        .with_effects(KEYBOARD_ULTIMATE_2016),
    DeviceDescriptor::keyboard(pids::BLACKWIDOW_X_CHROMA_TE, "Razer BlackWidow X Chroma Tournament Edition"),
    DeviceDescriptor::extended_keyboard(pids::ORNATA_CHROMA, "Razer Ornata Chroma", transaction::EXTENDED, 6, 22)
        .with_brightness(BrightnessMode::ExtendedCached),
    DeviceDescriptor::keyboard(pids::BLACKWIDOW_CHROMA_V2, "Razer BlackWidow Chroma V2"),
    DeviceDescriptor::extended_keyboard(pids::HUNTSMAN_ELITE, "Razer Huntsman Elite", transaction::EXTENDED, 9, 22),
    DeviceDescriptor::extended_keyboard(pids::HUNTSMAN, "Razer Huntsman", transaction::EXTENDED, 6, 22),
    DeviceDescriptor::extended_keyboard(pids::BLACKWIDOW_ELITE, "Razer BlackWidow Elite", transaction::EXTENDED, 6, 22),
    DeviceDescriptor::extended_keyboard(pids::CYNOSA_CHROMA, "Razer Cynosa Chroma", transaction::EXTENDED, 6, 22),
    DeviceDescriptor::extended_keyboard(pids::TARTARUS_V2, "Razer Tartarus V2", transaction::EXTENDED, 4, 6)
        .with_kind(DeviceKind::Keypad)
        .with_leds(PROFILE),
    DeviceDescriptor::extended_keyboard(pids::CYNOSA_LITE, "Razer Cynosa Lite", transaction::EXTENDED, 1, 1),
    DeviceDescriptor::extended_keyboard(pids::BLACKWIDOW_2019, "Razer BlackWidow 2019", transaction::EXTENDED, 6, 22),
    DeviceDescriptor::extended_keyboard(pids::HUNTSMAN_TE, "Razer Huntsman Tournament Edition", transaction::EXTENDED, 6, 18),
    DeviceDescriptor::extended_keyboard(pids::BLACKWIDOW_V3, "Razer BlackWidow V3", transaction::WIRELESS, 6, 22),
    DeviceDescriptor::extended_keyboard(pids::HUNTSMAN_MINI, "Razer Huntsman Mini", transaction::WIRELESS, 5, 15),
    DeviceDescriptor::extended_keyboard(pids::BLACKWIDOW_V3_MINI, "Razer BlackWidow V3 Mini", transaction::WIRELESS, 5, 16),
    DeviceDescriptor::extended_keyboard(pids::BLACKWIDOW_V3_PRO_WIRED, "Razer BlackWidow V3 Pro (Wired)", transaction::WIRELESS, 6, 22),
    DeviceDescriptor::extended_keyboard(pids::ORNATA_V2, "Razer Ornata V2", transaction::WIRELESS, 6, 22),
    DeviceDescriptor::extended_keyboard(pids::CYNOSA_V2, "Razer Cynosa V2", transaction::WIRELESS, 6, 22),
    DeviceDescriptor::extended_keyboard(pids::HUNTSMAN_V2_ANALOG, "Razer Huntsman V2 Analog", transaction::WIRELESS, 9, 22),
    DeviceDescriptor::extended_keyboard(pids::HUNTSMAN_V2_TKL, "Razer Huntsman V2 Tenkeyless", transaction::WIRELESS, 6, 18),
    DeviceDescriptor::extended_keyboard(pids::HUNTSMAN_V2, "Razer Huntsman V2", transaction::WIRELESS, 6, 22),
    DeviceDescriptor::extended_keyboard(pids::BLACKWIDOW_V3_MINI_WIRELESS, "Razer BlackWidow V3 Mini (Wireless)", transaction::HYPERSPEED, 5, 16),
    DeviceDescriptor::extended_keyboard(pids::BLACKWIDOW_V3_TK, "Razer BlackWidow V3 Tenkeyless", transaction::WIRELESS, 6, 18),
    // Laptops
    DeviceDescriptor::laptop(pids::BLADE_STEALTH, "Razer Blade Stealth", 16)
        .with_effects(KEYBOARD_CHROMA),
    DeviceDescriptor::laptop(pids::BLADE_QHD, "Razer Blade Stealth (QHD)", 16),
    DeviceDescriptor::laptop(pids::BLADE_PRO_LATE_2016, "Razer Blade Pro (Late 2016)", 25),
    DeviceDescriptor::laptop(pids::BLADE_STEALTH_LATE_2016, "Razer Blade Stealth (Late 2016)", 16)
        .with_effects(KEYBOARD_CHROMA),
    DeviceDescriptor::laptop(pids::BLADE_LATE_2016, "Razer Blade (Late 2016)", 16),
    DeviceDescriptor::laptop(pids::BLADE_PRO_2017, "Razer Blade Pro (2017)", 25),
    DeviceDescriptor::laptop(pids::BLADE_STEALTH_MID_2017, "Razer Blade Stealth (Mid 2017)", 16),
    DeviceDescriptor::laptop(pids::BLADE_PRO_2017_FULLHD, "Razer Blade Pro FullHD (2017)", 25),
    DeviceDescriptor::laptop(pids::BLADE_STEALTH_LATE_2017, "Razer Blade Stealth (Late 2017)", 16),
    DeviceDescriptor::laptop(pids::BLADE_2018, "Razer Blade 15 (2018)", 16),
    DeviceDescriptor::laptop(pids::BLADE_PRO_2019, "Razer Blade Pro (2019)", 16),
    DeviceDescriptor::laptop(pids::BLADE_STEALTH_2019, "Razer Blade Stealth (2019)", 16),
    DeviceDescriptor::laptop(pids::BLADE_2019_ADV, "Razer Blade 15 Advanced (2019)", 16),
    DeviceDescriptor::laptop(pids::BLADE_2018_BASE, "Razer Blade 15 Base (2018)", 16),
    DeviceDescriptor::laptop(pids::BLADE_2018_MERCURY, "Razer Blade 15 (2018) Mercury", 16),
    DeviceDescriptor::laptop(pids::BLADE_MID_2019_MERCURY, "Razer Blade 15 (Mid 2019) Mercury", 16),
    DeviceDescriptor::laptop(pids::BLADE_2019_BASE, "Razer Blade 15 Base (2019)", 16),
    DeviceDescriptor::laptop(pids::BLADE_STEALTH_LATE_2019, "Razer Blade Stealth (Late 2019)", 16),
    DeviceDescriptor::laptop(pids::BLADE_PRO_LATE_2019, "Razer Blade Pro (Late 2019)", 16),
    DeviceDescriptor::laptop(pids::BLADE_STUDIO_EDITION_2019, "Razer Blade 15 Studio Edition (2019)", 16),
    DeviceDescriptor::laptop(pids::BLADE_STEALTH_EARLY_2020, "Razer Blade Stealth (Early 2020)", 16),
    DeviceDescriptor::laptop(pids::BLADE_15_ADV_2020, "Razer Blade 15 Advanced (2020)", 16),
    DeviceDescriptor::laptop(pids::BLADE_EARLY_2020_BASE, "Razer Blade 15 Base (Early 2020)", 16),
    DeviceDescriptor::laptop(pids::BLADE_STEALTH_LATE_2020, "Razer Blade Stealth (Late 2020)", 16),
    DeviceDescriptor::laptop(pids::BOOK_2020, "Razer Book 13 (2020)", 16),
    DeviceDescriptor::laptop(pids::BLADE_15_ADV_EARLY_2021, "Razer Blade 15 Advanced (Early 2021)", 16),
    DeviceDescriptor::laptop(pids::BLADE_17_PRO_EARLY_2021, "Razer Blade 17 Pro (Early 2021)", 16),
    DeviceDescriptor::laptop(pids::BLADE_15_BASE_EARLY_2021, "Razer Blade 15 Base (Early 2021)", 16),
    DeviceDescriptor::laptop(pids::BLADE_14_2021, "Razer Blade 14 (2021)", 16),
    DeviceDescriptor::laptop(pids::BLADE_15_ADV_MID_2021, "Razer Blade 15 Advanced (Mid 2021)", 16),
    DeviceDescriptor::laptop(pids::BLADE_17_PRO_MID_2021, "Razer Blade 17 Pro (Mid 2021)", 16),
    // Mice
    DeviceDescriptor::basic_mouse(pids::OROCHI_2011, "Razer Orochi 2011", SCROLL),
    DeviceDescriptor::basic_mouse(pids::ABYSSUS_1800, "Razer Abyssus 1800", LOGO),
    DeviceDescriptor::basic_mouse(pids::MAMBA_2012_WIRED, "Razer Mamba 2012 (Wired)", LOGO_SCROLL),
    DeviceDescriptor::basic_mouse(pids::MAMBA_2012_WIRELESS, "Razer Mamba 2012 (Wireless)", LOGO_SCROLL),
    DeviceDescriptor::basic_mouse(pids::IMPERATOR, "Razer Imperator 2012", LOGO_SCROLL),
    DeviceDescriptor::basic_mouse(pids::OUROBOROS, "Razer Ouroboros", SCROLL)
        .with_brightness(BrightnessMode::Standard),
    DeviceDescriptor::basic_mouse(pids::TAIPAN, "Razer Taipan", LOGO_SCROLL),
    DeviceDescriptor::basic_mouse(pids::NAGA_HEX_RED, "Razer Naga Hex (Red)", LOGO_SCROLL),
    DeviceDescriptor::basic_mouse(pids::DEATHADDER_2013, "Razer DeathAdder 2013", LOGO_SCROLL),
    DeviceDescriptor::basic_mouse(pids::OROCHI_2013, "Razer Orochi 2013", SCROLL),
    DeviceDescriptor::basic_mouse(pids::NAGA_2014, "Razer Naga 2014", LOGO_SCROLL),
    DeviceDescriptor::basic_mouse(pids::NAGA_HEX, "Razer Naga Hex", LOGO_SCROLL),
    DeviceDescriptor::basic_mouse(pids::ABYSSUS, "Razer Abyssus 2014", LOGO),
    DeviceDescriptor::basic_mouse(pids::DEATHADDER_CHROMA, "Razer DeathAdder Chroma", LOGO_SCROLL)
        .with_effects(LED_RGB_PULSATE)
        .with_lighting(Lighting::LedCommands)
        .with_zones(LOGO_SCROLL)
        .with_brightness(BrightnessMode::Standard),
    DeviceDescriptor::matrix_mouse(pids::MAMBA_WIRED, "Razer Mamba (Wired)", FrameLayout::Matrix, 15)
        .with_frame_tag(transaction::LEGACY_FRAME),
    DeviceDescriptor::matrix_mouse(pids::MAMBA_WIRELESS, "Razer Mamba (Wireless)", FrameLayout::Matrix, 15)
        .with_frame_tag(transaction::LEGACY_FRAME),
    DeviceDescriptor::matrix_mouse(pids::MAMBA_TE_WIRED, "Razer Mamba Tournament Edition", FrameLayout::OneRow, 16),
    DeviceDescriptor::matrix_mouse(pids::OROCHI_CHROMA, "Razer Orochi (Chroma)", FrameLayout::None, 0)
        .with_effects(MOUSE_ZONES)
        .with_led(led::SCROLL_WHEEL)
        .with_leds(SCROLL)
        .without_frame(),
    DeviceDescriptor::matrix_mouse(pids::DIAMONDBACK_CHROMA, "Razer Diamondback Chroma", FrameLayout::Matrix, 21),
    DeviceDescriptor::matrix_mouse(pids::NAGA_HEX_V2, "Razer Naga Hex V2", FrameLayout::Matrix, 3)
        .with_tag(transaction::EXTENDED)
        .with_effects(MOUSE_ZONES_FRAME)
        .with_brightness(BrightnessMode::None),
    DeviceDescriptor::basic_mouse(pids::NAGA_CHROMA, "Razer Naga Chroma", LOGO_SCROLL),
    DeviceDescriptor::basic_mouse(pids::DEATHADDER_3500, "Razer DeathAdder 3500", LOGO_SCROLL),
    DeviceDescriptor::basic_mouse(pids::ABYSSUS_V2, "Razer Abyssus V2", LOGO),
    DeviceDescriptor::zoned_mouse(pids::DEATHADDER_ELITE, "Razer DeathAdder Elite", transaction::EXTENDED)
        .with_effects(MOUSE_ZONES_FRAME)
        .with_frame(FrameLayout::Extended, 1, 2),
    DeviceDescriptor::basic_mouse(pids::ABYSSUS_2000, "Razer Abyssus 2000", LOGO),
    DeviceDescriptor::zoned_mouse(pids::LANCEHEAD_TE_WIRED, "Razer Lancehead Tournament Edition", transaction::EXTENDED)
        .with_effects(MOUSE_ZONES_FRAME)
        .with_frame(FrameLayout::Extended, 1, 16),
    DeviceDescriptor::zoned_mouse(pids::BASILISK, "Razer Basilisk", transaction::EXTENDED),
    DeviceDescriptor::zoned_mouse(pids::MAMBA_ELITE, "Razer Mamba Elite", transaction::EXTENDED)
        .with_effects(MOUSE_ZONES_FRAME)
        .with_frame(FrameLayout::Extended, 1, 20),
    DeviceDescriptor::zoned_mouse(pids::VIPER, "Razer Viper", transaction::EXTENDED)
        .with_zones(&[]),
    DeviceDescriptor::zoned_mouse(pids::VIPER_ULTIMATE_WIRED, "Razer Viper Ultimate (Wired)", transaction::EXTENDED)
        .with_zones(&[]),
    DeviceDescriptor::zoned_mouse(pids::DEATHADDER_V2_PRO_WIRED, "Razer DeathAdder V2 Pro (Wired)", transaction::EXTENDED),
    DeviceDescriptor::zoned_mouse(pids::DEATHADDER_V2, "Razer DeathAdder V2", transaction::EXTENDED),
    DeviceDescriptor::zoned_mouse(pids::BASILISK_V2, "Razer Basilisk V2", transaction::EXTENDED),
    DeviceDescriptor::zoned_mouse(pids::VIPER_MINI, "Razer Viper Mini", transaction::EXTENDED)
        .with_zones(&[]),
    DeviceDescriptor::zoned_mouse(pids::BASILISK_V3, "Razer Basilisk V3", transaction::WIRELESS)
        .with_led(led::ZERO)
        .with_zones(&[])
        .with_effects(MOUSE_ZONES_FRAME)
        .with_frame(FrameLayout::Extended, 1, 11),
    // Accessories
    DeviceDescriptor::accessory(pids::FIREFLY_HYPERFLUX, "Razer Firefly Hyperflux", DeviceKind::Mousemat, transaction::EXTENDED)
        .with_effects(MOUSE_ZONES_FRAME)
        .with_frame(FrameLayout::Extended, 1, 15)
        .with_brightness(BrightnessMode::ExtendedCached)
        .with_initial_brightness(0xFF)
        .with_reactive_trigger(Generation::Extended),
    DeviceDescriptor::accessory(pids::MOUSE_DOCK, "Razer Mouse Dock", DeviceKind::MouseDock, transaction::EXTENDED)
        .with_effects(ACCESSORY_DOCK)
        .with_frame(FrameLayout::Extended, 1, 1)
        .with_brightness(BrightnessMode::ExtendedCached)
        .with_timing(TimingClass::Wireless),
    DeviceDescriptor::standard_accessory(pids::CORE, "Razer Core", DeviceKind::Controller)
        .with_effects(MOUSE_MATRIX)
        .with_frame(FrameLayout::OneRow, 1, 9)
        .with_timing(TimingClass::Hub),
    DeviceDescriptor::accessory(pids::NOMMO_PRO, "Razer Nommo Pro", DeviceKind::Speaker, transaction::EXTENDED)
        .with_frame(FrameLayout::Extended, 1, 8),
    DeviceDescriptor::accessory(pids::NOMMO_CHROMA, "Razer Nommo Chroma", DeviceKind::Speaker, transaction::EXTENDED)
        .with_frame(FrameLayout::Extended, 1, 24),
    DeviceDescriptor::standard_accessory(pids::FIREFLY, "Razer Firefly", DeviceKind::Mousemat)
        .with_effects(MOUSE_MATRIX)
        .with_frame(FrameLayout::OneRow, 1, 15)
        .with_timing(TimingClass::Hub)
        .with_reactive_trigger(Generation::Standard),
    DeviceDescriptor::accessory(pids::GOLIATHUS_CHROMA, "Razer Goliathus Chroma", DeviceKind::Mousemat, transaction::EXTENDED)
        .with_effects(MOUSE_ZONES_FRAME)
        .with_frame(FrameLayout::Extended, 1, 1)
        .with_brightness(BrightnessMode::ExtendedCached)
        .with_initial_brightness(0xFF)
        .with_timing(TimingClass::Hub)
        .with_reactive_trigger(Generation::Extended),
    DeviceDescriptor::accessory(pids::GOLIATHUS_CHROMA_EXTENDED, "Razer Goliathus Chroma Extended", DeviceKind::Mousemat, transaction::EXTENDED)
        .with_effects(MOUSE_ZONES_FRAME)
        .with_frame(FrameLayout::Extended, 1, 1)
        .with_brightness(BrightnessMode::ExtendedCached)
        .with_initial_brightness(0xFF)
        .with_timing(TimingClass::Hub)
        .with_reactive_trigger(Generation::Extended),
    DeviceDescriptor::accessory(pids::FIREFLY_V2, "Razer Firefly V2", DeviceKind::Mousemat, transaction::EXTENDED)
        .with_effects(MOUSE_MATRIX)
        .with_frame(FrameLayout::Extended, 1, 19)
        .with_brightness(BrightnessMode::ExtendedCached)
        .with_initial_brightness(0xFF)
        .with_reactive_trigger(Generation::Extended),
    DeviceDescriptor::standard_accessory(pids::CHROMA_MUG, "Razer Chroma Mug Holder", DeviceKind::Mug)
        .with_frame(FrameLayout::OneRow, 1, 15)
        .with_timing(TimingClass::Wired)
        .with_quirks(Quirks::MUG),
    DeviceDescriptor::accessory(pids::CHROMA_BASE, "Razer Base Station Chroma", DeviceKind::HeadsetStand, transaction::EXTENDED)
        .with_frame(FrameLayout::Extended, 1, 15),
    DeviceDescriptor::accessory(pids::CHROMA_HDK, "Razer Chroma Hardware Development Kit", DeviceKind::Controller, transaction::EXTENDED)
        .with_frame(FrameLayout::Extended, 4, 16)
        .with_timing(TimingClass::Hub),
    DeviceDescriptor::accessory(pids::KRAKEN_KITTY_EDITION, "Razer Kraken Kitty Edition", DeviceKind::Headset, transaction::WIRELESS)
        .with_effects(ACCESSORY_KITTY)
        .with_frame(FrameLayout::ExtendedPadded, 1, 4)
        .with_brightness(BrightnessMode::ExtendedCached)
        .with_mode(ModePolicy::NONE),
    DeviceDescriptor::accessory(pids::MOUSE_BUNGEE_V3_CHROMA, "Razer Mouse Bungee V3 Chroma", DeviceKind::Controller, transaction::WIRELESS)
        .with_frame(FrameLayout::ExtendedPadded, 1, 8)
        .with_brightness(BrightnessMode::ExtendedCached),
    DeviceDescriptor::accessory(pids::BASE_STATION_V2_CHROMA, "Razer Base Station V2 Chroma", DeviceKind::HeadsetStand, transaction::WIRELESS)
        .with_frame(FrameLayout::ExtendedPadded, 1, 16)
        .with_brightness(BrightnessMode::ExtendedCached),
    DeviceDescriptor::accessory(pids::CHARGING_PAD_CHROMA, "Razer Charging Pad Chroma", DeviceKind::ChargingPad, transaction::WIRELESS)
        .with_frame(FrameLayout::ExtendedPadded, 1, 10)
        .with_zones(CHARGE_RINGS)
        .with_brightness(BrightnessMode::ExtendedCached)
        .with_mode(ModePolicy::PER_COMMAND)
        .with_quirks(Quirks::CHARGING_PAD),
];

/// Look up the descriptor for a product id.
pub fn lookup(pid: u16) -> Result<&'static DeviceDescriptor> {
    DEVICES
        .iter()
        .find(|d| d.pid == pid)
        .ok_or(Error::UnknownDevice(pid))
}
