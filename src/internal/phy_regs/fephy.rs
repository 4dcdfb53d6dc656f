//! Rockchip integrated FEPHY vendor registers.
//!
//! # Test-mode bank interface
//!
//! Five register banks sit behind the test-mode control register (20).
//! After the test-mode latch is opened, a banked write is staged in
//! register 23 and committed by a control word; a banked read is requested
//! by a control word and the result lands in register 21.
//!
//! ```text
//! control word, write:  15 14 13..11 10  9..5   4..0
//!                        0  1  bank    1   -    offset
//! control word, read:    1  0  bank    1  offset  -
//! ```

#![allow(dead_code)]

/// PHY identifier constants
pub mod phy_id {
    /// Integrated FEPHY identifier (PHYIDR1 << 16 | PHYIDR2)
    pub const ID: u32 = 0x0680_8101;
    /// Exact match only
    pub const MASK: u32 = 0xFFFF_FFFF;
}

/// Vendor register addresses
pub mod reg {
    /// Internal control/status (MDI/MDI-X control)
    pub const INTERNAL_CTRL_STATUS: u8 = 17;
    /// Test-mode control word
    pub const TSTCNTL: u8 = 20;
    /// Banked read result, low word
    pub const TSTREAD1: u8 = 21;
    /// Banked read result, high word
    pub const TSTREAD2: u8 = 22;
    /// Banked write staging
    pub const TSTWRITE: u8 = 23;
    /// LED control
    pub const LED_CTRL: u8 = 25;
    /// Interrupt status, clear on read
    pub const INT_STATUS: u8 = 29;
    /// Interrupt mask
    pub const INT_MASK: u8 = 30;
    /// Special control/status (resolved speed)
    pub const SPECIAL_CTRL_STATUS: u8 = 31;
}

/// Internal Control/Status Register (17) bits
pub mod internal_ctrl {
    /// Automatic MDI/MDI-X crossover
    pub const AUTO_MDIX_EN: u16 = 1 << 7;
    /// Manual MDI-X when automatic crossover is off
    pub const MDIX_EN: u16 = 1 << 6;
}

/// Special Control/Status Register (31) bits
pub mod special_ctrl {
    /// Resolved 10 Mbps
    pub const SPEED_10: u16 = 1 << 2;
    /// Resolved 100 Mbps
    pub const SPEED_100: u16 = 1 << 3;
}

/// Test-mode control word fields
pub mod tstcntl {
    /// Offset position in a write command
    pub const WRITE_ADDR_SHIFT: u16 = 0;
    /// Offset position in a read command
    pub const READ_ADDR_SHIFT: u16 = 5;
    /// Bank selector position
    pub const BANK_SEL_SHIFT: u16 = 11;
    /// Read strobe
    pub const RD: u16 = (1 << 15) | (1 << 10);
    /// Write strobe
    pub const WR: u16 = (1 << 14) | (1 << 10);
    /// Test mode enabled
    pub const TSTMODE_ENABLE: u16 = 0x0400;
    /// Test mode disabled, back to the basic register map
    pub const TSTMODE_DISABLE: u16 = 0x0000;
    /// Offset field width
    pub const OFFSET_MASK: u16 = 0x1F;
}

/// Register offsets inside the WOL bank
pub mod wol_bank {
    /// Hardware address bytes 4..5
    pub const ADDR_LOW: u8 = 0x0;
    /// Hardware address bytes 2..3
    pub const ADDR_MID: u8 = 0x1;
    /// Hardware address bytes 0..1
    pub const ADDR_HIGH: u8 = 0x2;
    /// Match enable
    pub const MATCH_CTRL: u8 = 0x3;
}

/// Register offsets inside the DSP0 bank
pub mod dsp0_bank {
    /// A7 configuration (100 Mbps transmit amplitude)
    pub const A7_CFG: u8 = 0x18;
}
