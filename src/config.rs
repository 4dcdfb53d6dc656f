//! Configuration types for the Rockchip FEPHY driver

use crate::error::{ConfigError, ConfigResult};
use crate::hal::mdio::check_phy_addr;
use crate::phy::variant::{FephyVariant, INTERNAL_FEPHY};

/// Ethernet link speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// 10 Mbps
    Mbps10,
    /// 100 Mbps
    #[default]
    Mbps100,
}

/// Ethernet duplex mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duplex {
    /// Half duplex
    Half,
    /// Full duplex
    #[default]
    Full,
}

/// MDI/MDI-X crossover selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MdixMode {
    /// Automatic crossover detection
    #[default]
    Auto,
    /// Force straight-through (MDI)
    Mdi,
    /// Force crossover (MDI-X)
    Mdix,
}

/// Power state of the transceiver as seen by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Powered up, wake line masked
    #[default]
    Active,
    /// Powered down, wake line armed when wired
    Suspended,
}

/// Driver configuration
///
/// Use the builder methods to customize:
///
/// ```ignore
/// let config = FephyConfig::new()
///     .with_phy_addr(2)
///     .with_mdix(MdixMode::Auto);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FephyConfig {
    /// PHY address on the management bus (0-31)
    pub phy_addr: u8,
    /// Silicon variant register table
    pub variant: &'static FephyVariant,
    /// Crossover mode applied during init; `None` leaves the reset default
    pub mdix: Option<MdixMode>,
}

impl Default for FephyConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FephyConfig {
    /// Default configuration: address 0, integrated FEPHY, reset-default MDI-X
    pub const fn new() -> Self {
        Self {
            phy_addr: 0,
            variant: &INTERNAL_FEPHY,
            mdix: None,
        }
    }

    /// Set the PHY address
    #[must_use]
    pub const fn with_phy_addr(mut self, addr: u8) -> Self {
        self.phy_addr = addr;
        self
    }

    /// Select the silicon variant table
    #[must_use]
    pub const fn with_variant(mut self, variant: &'static FephyVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Apply a crossover mode during init
    #[must_use]
    pub const fn with_mdix(mut self, mode: MdixMode) -> Self {
        self.mdix = Some(mode);
        self
    }

    /// Select the variant matching a PHY identifier read from the device
    pub fn for_phy_id(self, phy_id: u32) -> ConfigResult<Self> {
        match FephyVariant::lookup(phy_id) {
            Some(variant) => Ok(self.with_variant(variant)),
            None => Err(ConfigError::UnsupportedPhy),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        check_phy_addr(self.phy_addr)?;
        Ok(())
    }
}
