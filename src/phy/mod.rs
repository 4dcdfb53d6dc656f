//! Ethernet PHY Drivers
//!
//! A generic PHY driver trait plus the Rockchip integrated FEPHY driver.
//!
//! # Architecture
//!
//! The PHY layer talks to hardware only through [`MdioBus`](crate::hal::MdioBus)
//! and the host traits in [`hal::host`](crate::hal::host). Layering, leaf first:
//!
//! - [`bank`]: test-mode session and banked register access
//! - [`tuning`]: init-time LED and analog tuning
//! - [`wol`]: Wake-on-LAN arm/disarm
//! - [`rockchip`]: the driver, which owns the wake line and sequences
//!   suspend/resume
//! - [`variant`]: per-die register tables used by all of the above
//!
//! # Example
//!
//! ```ignore
//! use rk_fephy::phy::{PhyDriver, RockchipFephy};
//! use rk_fephy::{FephyConfig, IrqLookup};
//!
//! let mut phy = RockchipFephy::probe(FephyConfig::new(), IrqLookup::Found(line))?;
//! phy.attach(netdev);
//! phy.init(&mut mdio)?;
//!
//! loop {
//!     if let Some(link) = phy.poll_link(&mut mdio)? {
//!         println!("Link up: {:?}", link);
//!         break;
//!     }
//! }
//! ```

pub mod bank;
pub mod generic;
pub mod rockchip;
pub mod tuning;
pub mod variant;
pub mod wol;

pub use bank::{Bank, BankWrite, TestModeSession, with_test_mode};
pub use generic::{LinkStatus, PhyCapabilities, PhyDriver, ieee802_3};
pub use rockchip::{PHY_ID, PHY_ID_MASK, RockchipFephy};
pub use variant::{FephyVariant, INTERNAL_FEPHY, VARIANTS};
