//! Lighting effects and their two wire encodings.
//!
//! Devices speak one of two mutually exclusive protocol generations:
//!
//! - **Standard**: class 0x03, id 0x0A. The first argument byte is the
//!   effect id and the payload is small and fixed per effect.
//! - **Extended**: class 0x0F, id 0x02. Arguments start with
//!   `[storage, led, effect_id]` followed by an effect-specific tail.
//!
//! Bounded fields are clamped, never rejected (see [`crate::safety`]).

use crate::commands;
use crate::error::{Error, Result};
use crate::report::{new_report, Report, Storage};
use crate::safety::{clamp_u8, validate_len, validate_min_len};
use serde::{Deserialize, Serialize};

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Read a colour from the first three bytes of `data`.
    pub fn from_slice(data: &[u8]) -> Option<Self> {
        match data {
            [r, g, b, ..] => Some(Self::new(*r, *g, *b)),
            _ => None,
        }
    }

    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Colour selection shared by breathing and starlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Palette {
    Random,
    Single(Rgb),
    Dual(Rgb, Rgb),
}

impl Palette {
    /// 3 bytes select one colour, 6 bytes two, anything else random.
    pub fn from_bytes(data: &[u8]) -> Self {
        match data.len() {
            3 => Rgb::from_slice(data).map_or(Self::Random, Self::Single),
            6 => match (Rgb::from_slice(&data[..3]), Rgb::from_slice(&data[3..])) {
                (Some(a), Some(b)) => Self::Dual(a, b),
                _ => Self::Random,
            },
            _ => Self::Random,
        }
    }

    /// Number of colours carried.
    pub fn count(&self) -> u8 {
        match self {
            Self::Random => 0,
            Self::Single(_) => 1,
            Self::Dual(..) => 2,
        }
    }

    fn write_colors(&self, report: &mut Report, offset: usize) -> Result<()> {
        match self {
            Self::Random => Ok(()),
            Self::Single(a) => report.put(offset, &a.to_bytes()),
            Self::Dual(a, b) => {
                report.put(offset, &a.to_bytes())?;
                report.put(offset + 3, &b.to_bytes())
            }
        }
    }
}

/// A lighting effect with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    None,
    Static(Rgb),
    /// Raw direction; clamped per generation when encoded.
    Wave { direction: u8 },
    Spectrum,
    Reactive { speed: u8, color: Rgb },
    Breathing(Palette),
    Starlight { speed: u8, palette: Palette },
    /// Brightness pulse driven by the LED effect command.
    Pulsate,
    /// Latch a previously streamed custom frame.
    CustomFrame,
}

/// Effect family without parameters, used for capability lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    None,
    Static,
    Wave,
    Spectrum,
    Reactive,
    Breathing,
    Starlight,
    Pulsate,
    CustomFrame,
}

impl EffectKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none effect",
            Self::Static => "static effect",
            Self::Wave => "wave effect",
            Self::Spectrum => "spectrum effect",
            Self::Reactive => "reactive effect",
            Self::Breathing => "breathing effect",
            Self::Starlight => "starlight effect",
            Self::Pulsate => "pulsate effect",
            Self::CustomFrame => "custom frame",
        }
    }
}

impl Effect {
    pub fn kind(&self) -> EffectKind {
        match self {
            Self::None => EffectKind::None,
            Self::Static(_) => EffectKind::Static,
            Self::Wave { .. } => EffectKind::Wave,
            Self::Spectrum => EffectKind::Spectrum,
            Self::Reactive { .. } => EffectKind::Reactive,
            Self::Breathing(_) => EffectKind::Breathing,
            Self::Starlight { .. } => EffectKind::Starlight,
            Self::Pulsate => EffectKind::Pulsate,
            Self::CustomFrame => EffectKind::CustomFrame,
        }
    }

    /// Build an effect from a raw byte buffer, the way a driver write
    /// delivers it.
    ///
    /// | kind | accepted input |
    /// |---|---|
    /// | static | `[r, g, b]` |
    /// | wave | `[direction, ..]` |
    /// | reactive | `[speed, r, g, b]` |
    /// | breathing | 3 bytes single, 6 bytes dual, else random |
    /// | starlight | `[speed]`, `[speed, rgb]`, `[speed, rgb, rgb]` |
    /// | others | ignored |
    pub fn from_bytes(kind: EffectKind, data: &[u8]) -> Result<Self> {
        Ok(match kind {
            EffectKind::None => Self::None,
            EffectKind::Spectrum => Self::Spectrum,
            EffectKind::Pulsate => Self::Pulsate,
            EffectKind::CustomFrame => Self::CustomFrame,
            EffectKind::Static => {
                validate_len("static", data, 3)?;
                Self::Static(rgb_at(data, 0)?)
            }
            EffectKind::Wave => {
                validate_min_len("wave", data, 1)?;
                Self::Wave { direction: data[0] }
            }
            EffectKind::Reactive => {
                validate_len("reactive", data, 4)?;
                Self::Reactive {
                    speed: data[0],
                    color: rgb_at(data, 1)?,
                }
            }
            EffectKind::Breathing => Self::Breathing(Palette::from_bytes(data)),
            EffectKind::Starlight => {
                let palette = match data.len() {
                    1 => Palette::Random,
                    4 => Palette::Single(rgb_at(data, 1)?),
                    7 => Palette::Dual(rgb_at(data, 1)?, rgb_at(data, 4)?),
                    n => {
                        return Err(Error::invalid(
                            "starlight",
                            format!("expected 1, 4 or 7 bytes, got {n}"),
                        ))
                    }
                };
                Self::Starlight {
                    speed: data[0],
                    palette,
                }
            }
        })
    }
}

fn rgb_at(data: &[u8], offset: usize) -> Result<Rgb> {
    data.get(offset..)
        .and_then(Rgb::from_slice)
        .ok_or_else(|| Error::invalid("rgb", format!("no colour at offset {offset}")))
}

/// Protocol generation spoken by a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Generation {
    Standard,
    Extended,
}

pub(crate) const STANDARD_CLASS: u8 = 0x03;
const STANDARD_EFFECT_ID: u8 = 0x0A;
pub(crate) const EXTENDED_CLASS: u8 = 0x0F;
const EXTENDED_EFFECT_ID: u8 = 0x02;

/// Effect ids of the Standard generation (first argument byte).
///
/// Values are the ids the firmware accepts, as captured from the 0x03/0x0A
/// matrix effect command. They are not a dense enumeration.
pub mod standard_id {
    pub const NONE: u8 = 0x00;
    pub const WAVE: u8 = 0x01;
    pub const REACTIVE: u8 = 0x02;
    pub const BREATHING: u8 = 0x03;
    pub const SPECTRUM: u8 = 0x04;
    pub const CUSTOM: u8 = 0x05;
    pub const STATIC: u8 = 0x06;
    pub const STARLIGHT: u8 = 0x19;
}

/// Effect ids of the Extended generation (third argument byte), as
/// captured from the 0x0F/0x02 command.
pub mod extended_id {
    pub const NONE: u8 = 0x00;
    pub const STATIC: u8 = 0x01;
    pub const BREATHING: u8 = 0x02;
    pub const SPECTRUM: u8 = 0x03;
    pub const WAVE: u8 = 0x04;
    pub const REACTIVE: u8 = 0x05;
    pub const STARLIGHT: u8 = 0x07;
    pub const CUSTOM: u8 = 0x08;
}

/// Encode `effect` for the given generation.
pub fn encode(generation: Generation, effect: &Effect, storage: Storage, led: u8) -> Result<Report> {
    match generation {
        Generation::Standard => encode_standard(effect, storage, led),
        Generation::Extended => encode_extended(effect, storage, led),
    }
}

/// Standard-generation encoder. `led` only matters for [`Effect::Pulsate`].
pub fn encode_standard(effect: &Effect, storage: Storage, led: u8) -> Result<Report> {
    let (size, args): (u8, Vec<u8>) = match *effect {
        Effect::None => (1, vec![standard_id::NONE]),
        Effect::Wave { direction } => (2, vec![standard_id::WAVE, clamp_u8(direction, 1, 2)]),
        Effect::Reactive { speed, color } => {
            let mut a = vec![standard_id::REACTIVE, clamp_u8(speed, 1, 4)];
            a.extend_from_slice(&color.to_bytes());
            (5, a)
        }
        Effect::Breathing(palette) => {
            // Random is sub-mode 3; single and dual carry their colour count.
            let mode = match palette {
                Palette::Random => 0x03,
                p => p.count(),
            };
            let mut a = vec![standard_id::BREATHING, mode];
            push_colors(&mut a, &palette);
            (8, a)
        }
        Effect::Spectrum => (1, vec![standard_id::SPECTRUM]),
        Effect::CustomFrame => (2, vec![standard_id::CUSTOM, storage as u8]),
        Effect::Static(color) => {
            let mut a = vec![standard_id::STATIC];
            a.extend_from_slice(&color.to_bytes());
            (4, a)
        }
        Effect::Starlight { speed, palette } => {
            let mode = match palette {
                Palette::Random => 0x03,
                p => p.count(),
            };
            let mut a = vec![standard_id::STARLIGHT, mode, clamp_u8(speed, 1, 3)];
            push_colors(&mut a, &palette);
            let size = a.len() as u8;
            (size, a)
        }
        Effect::Pulsate => return Ok(commands::set_led_effect(storage, led, commands::led_effect::PULSATE)),
    };

    let mut report = new_report(STANDARD_CLASS, STANDARD_EFFECT_ID, size);
    report.put(0, &args)?;
    Ok(report)
}

fn push_colors(out: &mut Vec<u8>, palette: &Palette) {
    match palette {
        Palette::Random => {}
        Palette::Single(a) => out.extend_from_slice(&a.to_bytes()),
        Palette::Dual(a, b) => {
            out.extend_from_slice(&a.to_bytes());
            out.extend_from_slice(&b.to_bytes());
        }
    }
}

fn extended_base(size: u8, storage: Storage, led: u8, effect_id: u8) -> Report {
    let mut report = new_report(EXTENDED_CLASS, EXTENDED_EFFECT_ID, size);
    let args = report.arguments_mut();
    args[0] = storage as u8;
    args[1] = led;
    args[2] = effect_id;
    report
}

/// Payload size for a palette-carrying Extended effect: 6, 9 or 12.
fn palette_size(palette: &Palette) -> u8 {
    6 + 3 * palette.count()
}

/// Extended-generation encoder.
pub fn encode_extended(effect: &Effect, storage: Storage, led: u8) -> Result<Report> {
    let report = match *effect {
        Effect::None => extended_base(6, storage, led, extended_id::NONE),
        Effect::Static(color) => {
            let mut r = extended_base(9, storage, led, extended_id::STATIC);
            r.arguments_mut()[5] = 0x01;
            r.put(6, &color.to_bytes())?;
            r
        }
        Effect::Breathing(palette) => {
            let mut r = extended_base(palette_size(&palette), storage, led, extended_id::BREATHING);
            r.arguments_mut()[3] = palette.count();
            r.arguments_mut()[5] = palette.count();
            palette.write_colors(&mut r, 6)?;
            r
        }
        Effect::Spectrum => extended_base(6, storage, led, extended_id::SPECTRUM),
        Effect::Wave { direction } => {
            let mut r = extended_base(6, storage, led, extended_id::WAVE);
            r.arguments_mut()[3] = clamp_u8(direction, 0, 1);
            // Fixed tuning byte observed on every capture.
            r.arguments_mut()[4] = 0x28;
            r
        }
        Effect::Reactive { speed, color } => {
            let mut r = extended_base(9, storage, led, extended_id::REACTIVE);
            r.arguments_mut()[4] = clamp_u8(speed, 1, 4);
            r.arguments_mut()[5] = 0x01;
            r.put(6, &color.to_bytes())?;
            r
        }
        Effect::Starlight { speed, palette } => {
            let mut r = extended_base(palette_size(&palette), storage, led, extended_id::STARLIGHT);
            r.arguments_mut()[4] = clamp_u8(speed, 1, 3);
            r.arguments_mut()[5] = palette.count();
            palette.write_colors(&mut r, 6)?;
            r
        }
        Effect::CustomFrame => extended_base(0x0C, Storage::NoStore, 0x00, extended_id::CUSTOM),
        Effect::Pulsate => commands::set_led_effect(storage, led, commands::led_effect::PULSATE),
    };
    Ok(report)
}
