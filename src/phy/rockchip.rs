//! Rockchip Integrated FEPHY Driver
//!
//! Driver for the Fast-Ethernet transceiver integrated in Rockchip SoCs.
//!
//! Besides the usual Clause 22 lifecycle the FEPHY needs:
//! - A tuning pass at init (LED control plus banked analog settings)
//! - Wake-on-LAN keyed to the attached interface's hardware address
//! - An optional out-of-band wake line, armed only while suspended
//!
//! # Wake Line
//!
//! The line is looked up by the host at probe time. When present it is
//! registered immediately, masked, and marked as a wake source; after that
//! only [`suspend`](PhyDriver::suspend) and [`resume`](PhyDriver::resume)
//! change whether it may fire, and they change the PHY's own interrupt mask in
//! the same step.
//!
//! ```text
//!  suspend:  WOL bank + INT_MASK  ->  line.enable()   ->  BMCR.PDOWN = 1
//!  resume:   WOL bank + INT_MASK  ->  line.disable()  ->  BMCR.PDOWN = 0
//!            (armed)                                      (generic primitive)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use rk_fephy::{FephyConfig, IrqLookup, PhyDriver, RockchipFephy};
//!
//! let mut phy = RockchipFephy::probe(FephyConfig::new(), IrqLookup::Found(wake_line))?;
//! phy.attach(netdev);
//! phy.init(&mut mdio)?;
//! phy.enable_auto_negotiation(&mut mdio)?;
//!
//! // system sleep
//! phy.suspend(&mut mdio)?;
//! // ... wake line fires, host calls phy.on_wake_irq(&mut mdio)
//! phy.resume(&mut mdio)?;
//! ```

use embedded_hal::delay::DelayNs;

use super::generic::{LinkStatus, PhyCapabilities, PhyDriver, ieee802_3};
use super::variant::FephyVariant;
use super::{tuning, wol};
use crate::config::{Duplex, FephyConfig, MdixMode, PowerState, Speed};
use crate::error::{ConfigError, Result};
use crate::hal::host::{InterruptLine, IrqLookup, NetDevice};
use crate::hal::mdio::MdioBus;
use crate::internal::phy_regs::fephy::{internal_ctrl, phy_id, reg, special_ctrl};
use crate::internal::phy_regs::standard::{bmcr, phy_reg};

// =============================================================================
// Constants
// =============================================================================

/// Integrated FEPHY identifier
pub const PHY_ID: u32 = phy_id::ID;
/// Exact match: this driver answers for one device only
pub const PHY_ID_MASK: u32 = phy_id::MASK;

/// Maximum soft reset polls
const RESET_MAX_ATTEMPTS: u32 = 1000;

/// Soft reset poll interval for [`RockchipFephy::soft_reset_with_delay`]
const RESET_POLL_US: u32 = 1_000;

/// Soft reset timeout for [`RockchipFephy::soft_reset_with_delay`]
const RESET_TIMEOUT_US: u32 = 500_000;

// =============================================================================
// Driver
// =============================================================================

/// Rockchip integrated FEPHY driver
///
/// `I` is the host's wake interrupt line, `N` the attached network device.
/// Boards without a wake line use [`NoInterruptLine`](crate::hal::NoInterruptLine).
#[derive(Debug)]
pub struct RockchipFephy<I: InterruptLine, N: NetDevice> {
    /// PHY address (0-31)
    addr: u8,
    /// Register table for this die
    variant: &'static FephyVariant,
    /// Crossover mode applied at init
    mdix: Option<MdixMode>,
    /// Wake line, present only when the board wires one
    wake_irq: Option<I>,
    /// Interface supplying the WoL match address
    netdev: Option<N>,
    power: PowerState,
    /// Whether the WOL bank, INT_MASK and the host line are currently armed
    wake_armed: bool,
    /// Last known link state
    last_link_up: bool,
}

impl<I: InterruptLine, N: NetDevice> RockchipFephy<I, N> {
    /// Bind the driver to a PHY
    ///
    /// A found wake line is registered, then masked and marked as a wake
    /// source, so it cannot fire before the first suspend. A deferred line
    /// fails with [`ConfigError::ProbeDeferred`]; the host retries later.
    pub fn probe(config: FephyConfig, wake_irq: IrqLookup<I>) -> Result<Self> {
        config.validate()?;

        let wake_irq = match wake_irq {
            IrqLookup::Found(mut line) => {
                if let Err(code) = line.request() {
                    #[cfg(feature = "defmt")]
                    defmt::error!(
                        "fephy@{}: wake irq request failed ({})",
                        config.phy_addr,
                        code
                    );
                    return Err(ConfigError::IrqRequestFailed(code).into());
                }
                line.disable();
                line.set_wake(true);

                #[cfg(feature = "defmt")]
                defmt::info!("fephy@{}: wake irq registered", config.phy_addr);
                Some(line)
            }
            IrqLookup::NotWired => {
                #[cfg(feature = "defmt")]
                defmt::debug!("fephy@{}: no wake irq", config.phy_addr);
                None
            }
            IrqLookup::Deferred => return Err(ConfigError::ProbeDeferred.into()),
        };

        Ok(Self {
            addr: config.phy_addr,
            variant: config.variant,
            mdix: config.mdix,
            wake_irq,
            netdev: None,
            power: PowerState::Active,
            wake_armed: false,
            last_link_up: false,
        })
    }

    /// Unbind the driver
    ///
    /// Disarms the host side of the wake line and deregisters it, handing it
    /// back so no handler outlives the driver. PHY registers are not touched.
    pub fn remove(mut self) -> Option<I> {
        let mut line = self.wake_irq.take()?;
        line.disable();
        line.set_wake(false);
        line.free();
        Some(line)
    }

    /// Attach the network device whose address Wake-on-LAN matches
    pub fn attach(&mut self, netdev: N) {
        self.netdev = Some(netdev);
    }

    /// Detach the network device
    pub fn detach(&mut self) -> Option<N> {
        self.netdev.take()
    }

    /// Attached network device
    pub fn netdev(&self) -> Option<&N> {
        self.netdev.as_ref()
    }

    /// Register table in use
    pub fn variant(&self) -> &'static FephyVariant {
        self.variant
    }

    /// Whether a wake line was found at probe
    pub fn has_wake_irq(&self) -> bool {
        self.wake_irq.is_some()
    }

    /// Power state after the last successful transition
    pub fn power_state(&self) -> PowerState {
        self.power
    }

    /// Whether Wake-on-LAN and the wake line are currently armed
    pub fn is_wake_armed(&self) -> bool {
        self.wake_armed
    }

    /// Verify this is the integrated FEPHY by reading the PHY ID
    pub fn verify_id<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        let id = ieee802_3::read_phy_id(mdio, self.addr)?;
        Ok(self.variant.matches(id))
    }

    /// Soft reset, polling BMCR with a delay between reads
    pub fn soft_reset_with_delay<M: MdioBus, D: DelayNs>(
        &mut self,
        mdio: &mut M,
        delay: &mut D,
    ) -> Result<()> {
        ieee802_3::soft_reset_timeout(mdio, self.addr, delay, RESET_POLL_US, RESET_TIMEOUT_US)
    }

    /// Resolved speed from the special control/status register
    ///
    /// Duplex comes from BMCR. `None` when neither speed bit is set.
    pub fn read_speed_indication<M: MdioBus>(&self, mdio: &mut M) -> Result<Option<LinkStatus>> {
        let status = mdio.read(self.addr, reg::SPECIAL_CTRL_STATUS)?;
        let speed = if status & special_ctrl::SPEED_100 != 0 {
            Speed::Mbps100
        } else if status & special_ctrl::SPEED_10 != 0 {
            Speed::Mbps10
        } else {
            return Ok(None);
        };

        let bmcr_val = mdio.read(self.addr, phy_reg::BMCR)?;
        let duplex = if bmcr_val & bmcr::DUPLEX_FULL != 0 {
            Duplex::Full
        } else {
            Duplex::Half
        };
        Ok(Some(LinkStatus::new(speed, duplex)))
    }

    /// Select MDI/MDI-X crossover
    pub fn set_mdix<M: MdioBus>(&mut self, mdio: &mut M, mode: MdixMode) -> Result<()> {
        ieee802_3::modify(mdio, self.addr, reg::INTERNAL_CTRL_STATUS, |v| {
            let v = v & !(internal_ctrl::AUTO_MDIX_EN | internal_ctrl::MDIX_EN);
            match mode {
                MdixMode::Auto => v | internal_ctrl::AUTO_MDIX_EN,
                MdixMode::Mdi => v,
                MdixMode::Mdix => v | internal_ctrl::MDIX_EN,
            }
        })?;
        self.mdix = Some(mode);
        Ok(())
    }

    /// Current crossover setting as read from the PHY
    pub fn mdix<M: MdioBus>(&self, mdio: &mut M) -> Result<MdixMode> {
        let v = mdio.read(self.addr, reg::INTERNAL_CTRL_STATUS)?;
        Ok(if v & internal_ctrl::AUTO_MDIX_EN != 0 {
            MdixMode::Auto
        } else if v & internal_ctrl::MDIX_EN != 0 {
            MdixMode::Mdix
        } else {
            MdixMode::Mdi
        })
    }

    /// Wake interrupt handler
    ///
    /// Reading the status register acknowledges the event; the value is not
    /// needed. Called by the host from its threaded interrupt context.
    pub fn on_wake_irq<M: MdioBus>(&self, mdio: &mut M) -> Result<()> {
        let _status = mdio.read(self.addr, reg::INT_STATUS)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("fephy@{}: wake irq acknowledged ({=u16:#x})", self.addr, _status);

        Ok(())
    }

    /// Arm or disarm both wake facets in one step
    ///
    /// The PHY side always changes first: armed before the host listens,
    /// silenced before the host stops listening.
    fn set_wake_armed<M: MdioBus>(&mut self, mdio: &mut M, armed: bool) -> Result<()> {
        let Some(line) = self.wake_irq.as_mut() else {
            return Ok(());
        };

        if armed {
            let netdev = self.netdev.as_ref().ok_or(ConfigError::NotAttached)?;
            wol::enable(mdio, self.addr, self.variant, &netdev.hw_addr())?;
            line.enable();
        } else {
            wol::disable(mdio, self.addr)?;
            line.disable();
        }
        self.wake_armed = armed;

        #[cfg(feature = "defmt")]
        defmt::debug!("fephy@{}: wake armed = {}", self.addr, armed);

        Ok(())
    }
}

impl<I: InterruptLine, N: NetDevice> PhyDriver for RockchipFephy<I, N> {
    fn address(&self) -> u8 {
        self.addr
    }

    fn init<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        tuning::apply(mdio, self.addr, self.variant)?;

        if let Some(mode) = self.mdix {
            self.set_mdix(mdio, mode)?;
        }

        self.last_link_up = false;
        Ok(())
    }

    fn soft_reset<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        ieee802_3::soft_reset(mdio, self.addr, RESET_MAX_ATTEMPTS)
    }

    fn enable_auto_negotiation<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        ieee802_3::config_aneg(mdio, self.addr, &PhyCapabilities::basic_10_100())
    }

    fn force_link<M: MdioBus>(&mut self, mdio: &mut M, status: LinkStatus) -> Result<()> {
        ieee802_3::force_link(mdio, self.addr, status)
    }

    fn is_link_up<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        ieee802_3::is_link_up(mdio, self.addr)
    }

    fn link_status<M: MdioBus>(&self, mdio: &mut M) -> Result<Option<LinkStatus>> {
        if !self.is_link_up(mdio)? {
            return Ok(None);
        }
        ieee802_3::resolve_link(mdio, self.addr)
    }

    fn poll_link<M: MdioBus>(&mut self, mdio: &mut M) -> Result<Option<LinkStatus>> {
        let link_up = self.is_link_up(mdio)?;

        if link_up && !self.last_link_up {
            self.last_link_up = true;
            return ieee802_3::resolve_link(mdio, self.addr);
        }

        if !link_up && self.last_link_up {
            self.last_link_up = false;
        }

        Ok(None)
    }

    fn capabilities<M: MdioBus>(&self, mdio: &mut M) -> Result<PhyCapabilities> {
        ieee802_3::read_capabilities(mdio, self.addr)
    }

    fn phy_id<M: MdioBus>(&self, mdio: &mut M) -> Result<u32> {
        ieee802_3::read_phy_id(mdio, self.addr)
    }

    fn is_auto_negotiation_complete<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        ieee802_3::is_an_complete(mdio, self.addr)
    }

    fn link_partner_abilities<M: MdioBus>(&self, mdio: &mut M) -> Result<PhyCapabilities> {
        ieee802_3::read_link_partner(mdio, self.addr)
    }

    /// Arm wake (when wired), then power down
    ///
    /// A power-down failure after a successful arm leaves wake armed.
    fn suspend<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        self.set_wake_armed(mdio, true)?;
        ieee802_3::power_down(mdio, self.addr)?;
        self.power = PowerState::Suspended;
        Ok(())
    }

    /// Disarm wake (when wired), then power up
    fn resume<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        self.set_wake_armed(mdio, false)?;
        ieee802_3::power_up(mdio, self.addr)?;
        self.power = PowerState::Active;
        Ok(())
    }
}
