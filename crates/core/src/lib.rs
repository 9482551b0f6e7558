//! open-chroma-core: Razer report protocol, effect encoders and per-model
//! dispatch.
//!
//! This crate provides the host-side logic for driving the lighting of
//! Razer peripherals through the 90-byte HID feature-report protocol.

pub mod comm;
pub mod commands;
pub mod config;
pub mod device;
pub mod dispatch;
pub mod effects;
pub mod error;
pub mod frame;
#[cfg(feature = "hidapi")]
pub mod hid;
pub mod registry;
pub mod report;
pub mod safety;
pub mod transport;

/// Razer USB Vendor ID.
pub const RAZER_VID: u16 = 0x1532;

/// Known Razer product IDs.
pub mod pids {
    // Keyboards
    pub const BLACKWIDOW_ORIGINAL: u16 = 0x0104;
    pub const BLACKWIDOW_ULTIMATE_2012: u16 = 0x010D;
    pub const BLACKWIDOW_STEALTH_EDITION: u16 = 0x010E;
    pub const ANANSI: u16 = 0x010F;
    pub const ORBWEAVER: u16 = 0x0113;
    pub const BLACKWIDOW_ULTIMATE_2013: u16 = 0x011A;
    pub const BLACKWIDOW_STEALTH: u16 = 0x011B;
    pub const BLACKWIDOW_CHROMA: u16 = 0x0203;
    pub const DEATHSTALKER_CHROMA: u16 = 0x0204;
    pub const ORBWEAVER_CHROMA: u16 = 0x0207;
    pub const TARTARUS_CHROMA: u16 = 0x0208;
    pub const BLACKWIDOW_CHROMA_TE: u16 = 0x0209;
    pub const BLACKWIDOW_OVERWATCH: u16 = 0x0211;
    pub const BLACKWIDOW_ULTIMATE_2016: u16 = 0x0214;
    pub const BLACKWIDOW_X_CHROMA: u16 = 0x0216;
    pub const BLACKWIDOW_X_ULTIMATE: u16 = 0x0217;
    pub const BLACKWIDOW_X_CHROMA_TE: u16 = 0x021A;
    pub const ORNATA_CHROMA: u16 = 0x021E;
    pub const BLACKWIDOW_CHROMA_V2: u16 = 0x0221;
    pub const HUNTSMAN_ELITE: u16 = 0x0226;
    pub const HUNTSMAN: u16 = 0x0227;
    pub const BLACKWIDOW_ELITE: u16 = 0x0228;
    pub const CYNOSA_CHROMA: u16 = 0x022A;
    pub const TARTARUS_V2: u16 = 0x022B;
    pub const CYNOSA_LITE: u16 = 0x023F;
    pub const BLACKWIDOW_2019: u16 = 0x0241;
    pub const HUNTSMAN_TE: u16 = 0x0243;
    pub const BLACKWIDOW_V3: u16 = 0x024E;
    pub const HUNTSMAN_MINI: u16 = 0x0257;
    pub const BLACKWIDOW_V3_MINI: u16 = 0x0258;
    pub const BLACKWIDOW_V3_PRO_WIRED: u16 = 0x025A;
    pub const ORNATA_V2: u16 = 0x025D;
    pub const CYNOSA_V2: u16 = 0x025E;
    pub const HUNTSMAN_V2_ANALOG: u16 = 0x0266;
    pub const HUNTSMAN_V2_TKL: u16 = 0x026B;
    pub const HUNTSMAN_V2: u16 = 0x026C;
    pub const BLACKWIDOW_V3_MINI_WIRELESS: u16 = 0x0271;
    pub const BLACKWIDOW_V3_TK: u16 = 0x0A24;

    // Laptops
    pub const BLADE_STEALTH: u16 = 0x0205;
    pub const BLADE_QHD: u16 = 0x020F;
    pub const BLADE_PRO_LATE_2016: u16 = 0x0210;
    pub const BLADE_STEALTH_LATE_2016: u16 = 0x0220;
    pub const BLADE_LATE_2016: u16 = 0x0224;
    pub const BLADE_PRO_2017: u16 = 0x0225;
    pub const BLADE_STEALTH_MID_2017: u16 = 0x022D;
    pub const BLADE_PRO_2017_FULLHD: u16 = 0x022F;
    pub const BLADE_STEALTH_LATE_2017: u16 = 0x0232;
    pub const BLADE_2018: u16 = 0x0233;
    pub const BLADE_PRO_2019: u16 = 0x0234;
    pub const BLADE_STEALTH_2019: u16 = 0x0239;
    pub const BLADE_2019_ADV: u16 = 0x023A;
    pub const BLADE_2018_BASE: u16 = 0x023B;
    pub const BLADE_2018_MERCURY: u16 = 0x0240;
    pub const BLADE_MID_2019_MERCURY: u16 = 0x0245;
    pub const BLADE_2019_BASE: u16 = 0x0246;
    pub const BLADE_STEALTH_LATE_2019: u16 = 0x024A;
    pub const BLADE_PRO_LATE_2019: u16 = 0x024C;
    pub const BLADE_STUDIO_EDITION_2019: u16 = 0x024D;
    pub const BLADE_STEALTH_EARLY_2020: u16 = 0x0252;
    pub const BLADE_15_ADV_2020: u16 = 0x0253;
    pub const BLADE_EARLY_2020_BASE: u16 = 0x0255;
    pub const BLADE_STEALTH_LATE_2020: u16 = 0x0259;
    pub const BOOK_2020: u16 = 0x026A;
    pub const BLADE_15_ADV_EARLY_2021: u16 = 0x026D;
    pub const BLADE_17_PRO_EARLY_2021: u16 = 0x026E;
    pub const BLADE_15_BASE_EARLY_2021: u16 = 0x026F;
    pub const BLADE_14_2021: u16 = 0x0270;
    pub const BLADE_15_ADV_MID_2021: u16 = 0x0276;
    pub const BLADE_17_PRO_MID_2021: u16 = 0x0279;

    // Mice
    pub const OROCHI_2011: u16 = 0x0013;
    pub const ABYSSUS_1800: u16 = 0x0020;
    pub const MAMBA_2012_WIRED: u16 = 0x0024;
    pub const MAMBA_2012_WIRELESS: u16 = 0x0025;
    pub const IMPERATOR: u16 = 0x002F;
    pub const OUROBOROS: u16 = 0x0032;
    pub const TAIPAN: u16 = 0x0034;
    pub const NAGA_HEX_RED: u16 = 0x0036;
    pub const DEATHADDER_2013: u16 = 0x0037;
    pub const OROCHI_2013: u16 = 0x0039;
    pub const NAGA_2014: u16 = 0x0040;
    pub const NAGA_HEX: u16 = 0x0041;
    pub const ABYSSUS: u16 = 0x0042;
    pub const DEATHADDER_CHROMA: u16 = 0x0043;
    pub const MAMBA_WIRED: u16 = 0x0044;
    pub const MAMBA_WIRELESS: u16 = 0x0045;
    pub const MAMBA_TE_WIRED: u16 = 0x0046;
    pub const OROCHI_CHROMA: u16 = 0x0048;
    pub const DIAMONDBACK_CHROMA: u16 = 0x004C;
    pub const NAGA_HEX_V2: u16 = 0x0050;
    pub const NAGA_CHROMA: u16 = 0x0053;
    pub const DEATHADDER_3500: u16 = 0x0054;
    pub const ABYSSUS_V2: u16 = 0x005B;
    pub const DEATHADDER_ELITE: u16 = 0x005C;
    pub const ABYSSUS_2000: u16 = 0x005E;
    pub const LANCEHEAD_TE_WIRED: u16 = 0x0060;
    pub const BASILISK: u16 = 0x0064;
    pub const MAMBA_ELITE: u16 = 0x006C;
    pub const VIPER: u16 = 0x0078;
    pub const VIPER_ULTIMATE_WIRED: u16 = 0x007A;
    pub const DEATHADDER_V2_PRO_WIRED: u16 = 0x007C;
    pub const DEATHADDER_V2: u16 = 0x0084;
    pub const BASILISK_V2: u16 = 0x0085;
    pub const VIPER_MINI: u16 = 0x008A;
    pub const BASILISK_V3: u16 = 0x0099;

    // Accessories
    pub const FIREFLY_HYPERFLUX: u16 = 0x0068;
    pub const MOUSE_DOCK: u16 = 0x007E;
    pub const CORE: u16 = 0x0215;
    pub const NOMMO_PRO: u16 = 0x0517;
    pub const NOMMO_CHROMA: u16 = 0x0518;
    pub const FIREFLY: u16 = 0x0C00;
    pub const GOLIATHUS_CHROMA: u16 = 0x0C01;
    pub const GOLIATHUS_CHROMA_EXTENDED: u16 = 0x0C02;
    pub const FIREFLY_V2: u16 = 0x0C04;
    pub const CHROMA_MUG: u16 = 0x0F07;
    pub const CHROMA_BASE: u16 = 0x0F08;
    pub const CHROMA_HDK: u16 = 0x0F09;
    pub const KRAKEN_KITTY_EDITION: u16 = 0x0F19;
    pub const MOUSE_BUNGEE_V3_CHROMA: u16 = 0x0F1D;
    pub const BASE_STATION_V2_CHROMA: u16 = 0x0F20;
    pub const CHARGING_PAD_CHROMA: u16 = 0x0F26;
}
