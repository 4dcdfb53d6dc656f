//! Wake-on-LAN programming
//!
//! Arming loads the interface's hardware address into the WOL bank, sets the
//! match-enable bits, then unmasks the wake interrupt sources. Disarming
//! clears match-enable and masks the sources again. The banked writes run in
//! their own test-mode session; the interrupt mask is a primary register and
//! is written after the session is closed.
//!
//! The host side of the wake interrupt is not touched here; pairing the two
//! is the power-state controller's job.

use super::bank::{Bank, TestModeSession};
use super::variant::FephyVariant;
use crate::error::Result;
use crate::hal::host::MacAddress;
use crate::hal::mdio::MdioBus;
use crate::internal::phy_regs::fephy::{reg, wol_bank};

/// Pack a hardware address into the three WOL bank match words
///
/// Returned in bank-offset order: bytes 4..5, bytes 2..3, bytes 0..1.
pub const fn match_words(addr: &MacAddress) -> [u16; 3] {
    [
        ((addr[4] as u16) << 8) | addr[5] as u16,
        ((addr[2] as u16) << 8) | addr[3] as u16,
        ((addr[0] as u16) << 8) | addr[1] as u16,
    ]
}

/// Arm address-match wake on the PHY at `addr`
pub fn enable<M: MdioBus>(
    mdio: &mut M,
    addr: u8,
    variant: &FephyVariant,
    hw_addr: &MacAddress,
) -> Result<()> {
    let [low, mid, high] = match_words(hw_addr);

    let mut session = TestModeSession::open(mdio, addr)?;
    session.bank_write(Bank::Wol, wol_bank::ADDR_LOW, low)?;
    session.bank_write(Bank::Wol, wol_bank::ADDR_MID, mid)?;
    session.bank_write(Bank::Wol, wol_bank::ADDR_HIGH, high)?;
    session.bank_write(Bank::Wol, wol_bank::MATCH_CTRL, variant.wol_match_enable)?;
    session.close()?;

    mdio.write(addr, reg::INT_MASK, variant.wol_irq_mask)?;
    Ok(())
}

/// Disarm address-match wake on the PHY at `addr`
///
/// The address words are left in place; with match-enable and the interrupt
/// mask cleared they have no effect.
pub fn disable<M: MdioBus>(mdio: &mut M, addr: u8) -> Result<()> {
    let mut session = TestModeSession::open(mdio, addr)?;
    session.bank_write(Bank::Wol, wol_bank::MATCH_CTRL, 0x0000)?;
    session.close()?;

    mdio.write(addr, reg::INT_MASK, 0x0000)?;
    Ok(())
}
