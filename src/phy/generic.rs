//! Generic PHY Driver Trait
//!
//! The lifecycle every PHY driver exposes to its host, plus the generic
//! Clause 22 routines (negotiation, soft reset, power-down/up) that
//! vendor drivers delegate to.

use embedded_hal::delay::DelayNs;

use crate::config::{Duplex, Speed};
use crate::error::{ConfigError, Result};
use crate::hal::mdio::MdioBus;

// =============================================================================
// Link Status
// =============================================================================

/// Ethernet link status information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStatus {
    /// Link speed
    pub speed: Speed,
    /// Duplex mode
    pub duplex: Duplex,
}

impl LinkStatus {
    /// Create a new link status
    pub const fn new(speed: Speed, duplex: Duplex) -> Self {
        Self { speed, duplex }
    }

    /// 100 Mbps Full Duplex
    pub const fn fast_full() -> Self {
        Self::new(Speed::Mbps100, Duplex::Full)
    }

    /// 10 Mbps Half Duplex
    pub const fn slow_half() -> Self {
        Self::new(Speed::Mbps10, Duplex::Half)
    }
}

// =============================================================================
// PHY Capabilities
// =============================================================================

/// Speed/duplex modes a PHY (or its link partner) supports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyCapabilities {
    /// Supports 100BASE-TX Full Duplex
    pub speed_100_fd: bool,
    /// Supports 100BASE-TX Half Duplex
    pub speed_100_hd: bool,
    /// Supports 10BASE-T Full Duplex
    pub speed_10_fd: bool,
    /// Supports 10BASE-T Half Duplex
    pub speed_10_hd: bool,
    /// Supports auto-negotiation
    pub auto_negotiation: bool,
    /// Supports PAUSE flow control
    pub pause: bool,
}

impl PhyCapabilities {
    /// Basic 10/100 feature set
    pub const fn basic_10_100() -> Self {
        Self {
            speed_100_fd: true,
            speed_100_hd: true,
            speed_10_fd: true,
            speed_10_hd: true,
            auto_negotiation: true,
            pause: false,
        }
    }
}

// =============================================================================
// PHY Driver Trait
// =============================================================================

/// Trait for Ethernet PHY drivers
///
/// `init`, `enable_auto_negotiation`, `suspend` and `resume` are the
/// lifecycle hooks a host framework drives; the rest reports link state.
/// Drivers with nothing to arm around sleep can implement `suspend`/`resume`
/// with [`ieee802_3::power_down`]/[`ieee802_3::power_up`] alone.
pub trait PhyDriver {
    /// Get the PHY address (0-31)
    fn address(&self) -> u8;

    /// Bring the PHY into its operating configuration
    fn init<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;

    /// Perform a soft reset
    fn soft_reset<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;

    /// Configure and restart auto-negotiation
    fn enable_auto_negotiation<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;

    /// Force specific speed and duplex
    fn force_link<M: MdioBus>(&mut self, mdio: &mut M, status: LinkStatus) -> Result<()>;

    /// Check if the link is up
    fn is_link_up<M: MdioBus>(&self, mdio: &mut M) -> Result<bool>;

    /// Current link parameters, `None` while the link is down
    fn link_status<M: MdioBus>(&self, mdio: &mut M) -> Result<Option<LinkStatus>>;

    /// Returns `Some` once when the link transitions to up
    fn poll_link<M: MdioBus>(&mut self, mdio: &mut M) -> Result<Option<LinkStatus>>;

    /// Get PHY capabilities
    fn capabilities<M: MdioBus>(&self, mdio: &mut M) -> Result<PhyCapabilities>;

    /// Read the PHY identifier, `(PHYIDR1 << 16) | PHYIDR2`
    fn phy_id<M: MdioBus>(&self, mdio: &mut M) -> Result<u32>;

    /// Check if auto-negotiation is complete
    fn is_auto_negotiation_complete<M: MdioBus>(&self, mdio: &mut M) -> Result<bool>;

    /// Get the link partner's advertised abilities
    fn link_partner_abilities<M: MdioBus>(&self, mdio: &mut M) -> Result<PhyCapabilities>;

    /// Enter the low-power state
    fn suspend<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;

    /// Leave the low-power state
    fn resume<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;
}

// =============================================================================
// Default Implementations
// =============================================================================

/// Generic routines on the IEEE 802.3 Clause 22 registers
pub mod ieee802_3 {
    use super::*;
    use crate::internal::phy_regs::standard::{anar, bmcr, bmsr, phy_reg};

    /// Read-modify-write helper
    pub fn modify<M, F>(mdio: &mut M, phy_addr: u8, reg_addr: u8, f: F) -> Result<()>
    where
        M: MdioBus,
        F: FnOnce(u16) -> u16,
    {
        let value = mdio.read(phy_addr, reg_addr)?;
        mdio.write(phy_addr, reg_addr, f(value))?;
        Ok(())
    }

    /// Read BMSR and check link status bit
    ///
    /// The bit latches low, so a stale "down" is cleared by a first read.
    pub fn is_link_up<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<bool> {
        let _latched = mdio.read(phy_addr, phy_reg::BMSR)?;
        let bmsr_val = mdio.read(phy_addr, phy_reg::BMSR)?;
        Ok((bmsr_val & bmsr::LINK_STATUS) != 0)
    }

    /// Read BMSR and check AN complete bit
    pub fn is_an_complete<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<bool> {
        let bmsr_val = mdio.read(phy_addr, phy_reg::BMSR)?;
        Ok((bmsr_val & bmsr::AN_COMPLETE) != 0)
    }

    /// Set BMCR.RESET and spin until it self-clears
    ///
    /// Gives up silently after `max_attempts` polls; some PHYs are slow to
    /// clear the bit and still come up fine.
    pub fn soft_reset<M: MdioBus>(mdio: &mut M, phy_addr: u8, max_attempts: u32) -> Result<()> {
        modify(mdio, phy_addr, phy_reg::BMCR, |v| v | bmcr::RESET)?;

        for _ in 0..max_attempts {
            let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;
            if (bmcr_val & bmcr::RESET) == 0 {
                return Ok(());
            }
        }
        Ok(())
    }

    /// Set BMCR.RESET and poll with a delay until it self-clears
    ///
    /// Fails with [`ConfigError::ResetTimeout`] once `timeout_us` elapses.
    /// A zero `poll_us` is treated as 1 µs.
    pub fn soft_reset_timeout<M: MdioBus, D: DelayNs>(
        mdio: &mut M,
        phy_addr: u8,
        delay: &mut D,
        poll_us: u32,
        timeout_us: u32,
    ) -> Result<()> {
        modify(mdio, phy_addr, phy_reg::BMCR, |v| v | bmcr::RESET)?;

        let poll_us = poll_us.max(1);
        let mut waited: u32 = 0;
        loop {
            delay.delay_us(poll_us);
            waited = waited.saturating_add(poll_us);
            let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;
            if (bmcr_val & bmcr::RESET) == 0 {
                return Ok(());
            }
            if waited >= timeout_us {
                return Err(ConfigError::ResetTimeout.into());
            }
        }
    }

    /// Write the advertisement register from a capability set
    pub fn write_advertisement<M: MdioBus>(
        mdio: &mut M,
        phy_addr: u8,
        caps: &PhyCapabilities,
    ) -> Result<()> {
        let mut anar_val = anar::SELECTOR_IEEE802_3;
        if caps.speed_100_fd {
            anar_val |= anar::TX_FD;
        }
        if caps.speed_100_hd {
            anar_val |= anar::TX_HD;
        }
        if caps.speed_10_fd {
            anar_val |= anar::T10_FD;
        }
        if caps.speed_10_hd {
            anar_val |= anar::T10_HD;
        }
        if caps.pause {
            anar_val |= anar::PAUSE;
        }
        mdio.write(phy_addr, phy_reg::ANAR, anar_val)?;
        Ok(())
    }

    /// Enable auto-negotiation and restart
    pub fn enable_auto_negotiation<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
        modify(mdio, phy_addr, phy_reg::BMCR, |v| {
            (v | bmcr::AN_ENABLE | bmcr::AN_RESTART) & !bmcr::ISOLATE
        })
    }

    /// Generic negotiation routine: advertise, then (re)start autoneg
    pub fn config_aneg<M: MdioBus>(
        mdio: &mut M,
        phy_addr: u8,
        caps: &PhyCapabilities,
    ) -> Result<()> {
        write_advertisement(mdio, phy_addr, caps)?;
        enable_auto_negotiation(mdio, phy_addr)
    }

    /// Force speed and duplex
    pub fn force_link<M: MdioBus>(mdio: &mut M, phy_addr: u8, status: LinkStatus) -> Result<()> {
        modify(mdio, phy_addr, phy_reg::BMCR, |mut v| {
            v &= !(bmcr::AN_ENABLE | bmcr::ISOLATE);
            if matches!(status.speed, Speed::Mbps100) {
                v |= bmcr::SPEED_100;
            } else {
                v &= !bmcr::SPEED_100;
            }
            if matches!(status.duplex, Duplex::Full) {
                v |= bmcr::DUPLEX_FULL;
            } else {
                v &= !bmcr::DUPLEX_FULL;
            }
            v
        })
    }

    /// Generic power-down primitive
    pub fn power_down<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
        modify(mdio, phy_addr, phy_reg::BMCR, |v| v | bmcr::POWER_DOWN)
    }

    /// Generic power-up primitive
    pub fn power_up<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
        modify(mdio, phy_addr, phy_reg::BMCR, |v| v & !bmcr::POWER_DOWN)
    }

    /// Read PHY ID from PHYIDR1 and PHYIDR2
    pub fn read_phy_id<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<u32> {
        let id1 = mdio.read(phy_addr, phy_reg::PHYIDR1)? as u32;
        let id2 = mdio.read(phy_addr, phy_reg::PHYIDR2)? as u32;
        Ok((id1 << 16) | id2)
    }

    /// Read capabilities from BMSR
    pub fn read_capabilities<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<PhyCapabilities> {
        let bmsr_val = mdio.read(phy_addr, phy_reg::BMSR)?;

        Ok(PhyCapabilities {
            speed_100_fd: (bmsr_val & bmsr::TX_FD_CAPABLE) != 0,
            speed_100_hd: (bmsr_val & bmsr::TX_HD_CAPABLE) != 0,
            speed_10_fd: (bmsr_val & bmsr::T10_FD_CAPABLE) != 0,
            speed_10_hd: (bmsr_val & bmsr::T10_HD_CAPABLE) != 0,
            auto_negotiation: (bmsr_val & bmsr::AN_ABILITY) != 0,
            pause: false,
        })
    }

    /// Read link partner abilities from ANLPAR
    pub fn read_link_partner<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<PhyCapabilities> {
        let anlpar_val = mdio.read(phy_addr, phy_reg::ANLPAR)?;

        Ok(PhyCapabilities {
            speed_100_fd: (anlpar_val & anar::TX_FD) != 0,
            speed_100_hd: (anlpar_val & anar::TX_HD) != 0,
            speed_10_fd: (anlpar_val & anar::T10_FD) != 0,
            speed_10_hd: (anlpar_val & anar::T10_HD) != 0,
            auto_negotiation: true,
            pause: (anlpar_val & anar::PAUSE) != 0,
        })
    }

    /// Resolve speed/duplex the generic way
    ///
    /// With autoneg on, the highest mode both sides advertise wins; `None`
    /// until negotiation completes or when nothing is common. With autoneg
    /// off, BMCR's forced bits are the answer.
    pub fn resolve_link<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<Option<LinkStatus>> {
        let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;

        if (bmcr_val & bmcr::AN_ENABLE) == 0 {
            return Ok(Some(link_status_from_bmcr(bmcr_val)));
        }
        if !is_an_complete(mdio, phy_addr)? {
            return Ok(None);
        }

        let local = mdio.read(phy_addr, phy_reg::ANAR)?;
        let partner = mdio.read(phy_addr, phy_reg::ANLPAR)?;
        let common = local & partner & anar::ABILITY_MASK;

        let link = if common & anar::TX_FD != 0 {
            LinkStatus::new(Speed::Mbps100, Duplex::Full)
        } else if common & anar::TX_HD != 0 {
            LinkStatus::new(Speed::Mbps100, Duplex::Half)
        } else if common & anar::T10_FD != 0 {
            LinkStatus::new(Speed::Mbps10, Duplex::Full)
        } else if common & anar::T10_HD != 0 {
            LinkStatus::new(Speed::Mbps10, Duplex::Half)
        } else {
            return Ok(None);
        };
        Ok(Some(link))
    }

    /// Decode forced speed/duplex from a BMCR value
    pub const fn link_status_from_bmcr(bmcr_val: u16) -> LinkStatus {
        let speed = if (bmcr_val & bmcr::SPEED_100) != 0 {
            Speed::Mbps100
        } else {
            Speed::Mbps10
        };
        let duplex = if (bmcr_val & bmcr::DUPLEX_FULL) != 0 {
            Duplex::Full
        } else {
            Duplex::Half
        };
        LinkStatus::new(speed, duplex)
    }
}
