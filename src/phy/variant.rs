//! Silicon variant register tables
//!
//! Everything that ties the driver to one particular FEPHY die lives here:
//! identifier, LED default, analog tuning writes and the Wake-on-LAN values.
//! A new variant is a new table entry; the protocol code does not change.

use super::bank::{Bank, BankWrite};
use crate::internal::phy_regs::fephy::{dsp0_bank, phy_id};

/// Register table for one FEPHY variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FephyVariant {
    /// Human-readable name
    pub name: &'static str,
    /// PHY identifier (PHYIDR1 << 16 | PHYIDR2)
    pub phy_id: u32,
    /// Bits of the identifier that must match
    pub phy_id_mask: u32,
    /// LED control register value written at init
    pub led_ctrl: u16,
    /// Banked tuning writes, applied in order inside one test-mode session
    pub tuning: &'static [BankWrite],
    /// WOL bank match-enable value written when arming
    pub wol_match_enable: u16,
    /// Interrupt mask enabling the wake sources
    pub wol_irq_mask: u16,
}

impl FephyVariant {
    /// Check a PHY identifier against this variant
    pub const fn matches(&self, phy_id: u32) -> bool {
        (phy_id & self.phy_id_mask) == (self.phy_id & self.phy_id_mask)
    }

    /// Find the variant for a PHY identifier
    pub fn lookup(phy_id: u32) -> Option<&'static FephyVariant> {
        VARIANTS.iter().find(|v| v.matches(phy_id))
    }
}

/// Rockchip integrated FEPHY
pub const INTERNAL_FEPHY: FephyVariant = FephyVariant {
    name: "Rockchip integrated FEPHY",
    phy_id: phy_id::ID,
    phy_id_mask: phy_id::MASK,
    // reset default is 0x7f
    led_ctrl: 0x07AA,
    tuning: &[
        // 100M amplitude
        BankWrite::new(Bank::Dsp0, dsp0_bank::A7_CFG, 0x000C),
    ],
    wol_match_enable: 0x000F,
    wol_irq_mask: 0x0E00,
};

/// All supported variants
pub static VARIANTS: &[FephyVariant] = &[INTERNAL_FEPHY];
