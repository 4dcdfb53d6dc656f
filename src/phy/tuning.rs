//! Device tuning sequence
//!
//! Run once per initialization: LED control first, then the variant's banked
//! analog tuning inside a single test-mode session. Writes already applied
//! stay applied on failure; the device has nothing to undo them with.

use super::bank::TestModeSession;
use super::variant::FephyVariant;
use crate::error::Result;
use crate::hal::mdio::MdioBus;
use crate::internal::phy_regs::fephy::reg;

/// Apply the variant's LED and analog tuning to the PHY at `addr`
pub fn apply<M: MdioBus>(mdio: &mut M, addr: u8, variant: &FephyVariant) -> Result<()> {
    mdio.write(addr, reg::LED_CTRL, variant.led_ctrl)?;

    let mut session = TestModeSession::open(mdio, addr)?;
    session.apply(variant.tuning)?;
    session.close()?;

    #[cfg(feature = "defmt")]
    defmt::debug!(
        "fephy@{}: tuning applied ({} banked writes)",
        addr,
        variant.tuning.len()
    );

    Ok(())
}
