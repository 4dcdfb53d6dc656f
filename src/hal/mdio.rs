//! MDIO register transport
//!
//! The FEPHY is managed through plain 16-bit register reads and writes.
//! [`MdioBus`] is the only path the driver has to the device; anything that
//! can perform a Clause 22 transaction (a MAC's SMI block, a bit-banged bus,
//! a host-side mock) can back it.

use crate::error::{ConfigError, ConfigResult, TransportResult};

// =============================================================================
// MDIO Constants
// =============================================================================

/// Maximum valid PHY address (5-bit field)
pub const MAX_PHY_ADDR: u8 = 31;

/// Maximum valid register address (5-bit field)
pub const MAX_REG_ADDR: u8 = 31;

/// Check a PHY address against the 5-bit field
pub const fn check_phy_addr(addr: u8) -> ConfigResult<u8> {
    if addr > MAX_PHY_ADDR {
        Err(ConfigError::InvalidPhyAddress)
    } else {
        Ok(addr)
    }
}

// =============================================================================
// MDIO Bus Trait
// =============================================================================

/// Trait for MDIO bus operations
///
/// Each call is one synchronous, blocking transaction. A failed transaction
/// is reported once with the transport's status code; retry policy belongs
/// to whoever owns the bus.
pub trait MdioBus {
    /// Read a PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> TransportResult<u16>;

    /// Write a PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> TransportResult<()>;

    /// Check if the MDIO bus is busy
    fn is_busy(&self) -> bool {
        false
    }
}

impl<M: MdioBus + ?Sized> MdioBus for &mut M {
    #[inline]
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> TransportResult<u16> {
        (**self).read(phy_addr, reg_addr)
    }

    #[inline]
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> TransportResult<()> {
        (**self).write(phy_addr, reg_addr, value)
    }

    #[inline]
    fn is_busy(&self) -> bool {
        (**self).is_busy()
    }
}
