//! Rockchip Integrated FEPHY Driver
//!
//! A `no_std`, `no_alloc` driver for the Fast-Ethernet transceiver integrated
//! in Rockchip SoCs.
//!
//! # Architecture
//!
//! The driver is organized into three layers:
//!
//! 1. **PHY Layer** ([`phy`]): the FEPHY driver, its banked register
//!    protocol, tuning and Wake-on-LAN sequences, plus the generic
//!    [`PhyDriver`] trait
//! 2. **HAL Layer** ([`hal`]): the register transport ([`MdioBus`]) and what
//!    the hosting framework provides ([`InterruptLine`], [`NetDevice`])
//! 3. **Sync Layer** (`sync`, optional): a critical-section wrapper that lets
//!    the wake interrupt handler and the power path share one driver
//!
//! ## Standard Compliance
//!
//! - **IEEE 802.3 Clause 22**: BMCR/BMSR/ANAR/ANLPAR handling, soft reset,
//!   power-down
//! - **Rockchip FEPHY**: test-mode banks, LED and DSP tuning, WoL registers
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting and log output
//! - `critical-section`: Enable ISR-safe `SharedFephy` wrapper
//!
//! # Example
//!
//! ```ignore
//! use rk_fephy::{FephyConfig, IrqLookup, PhyDriver, RockchipFephy};
//!
//! let config = FephyConfig::new().with_phy_addr(0);
//! let mut phy = RockchipFephy::probe(config, IrqLookup::Found(wake_line))?;
//! phy.attach(netdev);
//!
//! phy.init(&mut mdio)?;
//! phy.enable_auto_negotiation(&mut mdio)?;
//!
//! if let Some(link) = phy.poll_link(&mut mdio)? {
//!     mac.set_speed(link.speed);
//!     mac.set_duplex(link.duplex);
//! }
//!
//! // around system sleep
//! phy.suspend(&mut mdio)?;
//! phy.resume(&mut mdio)?;
//! ```

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels live here; Cargo.toml mirrors them for workspace tools.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod config;
pub mod error;
pub mod hal;
pub mod phy;

// Internal implementation details (pub(crate) only)
mod internal;

#[cfg(feature = "critical-section")]
#[cfg_attr(docsrs, doc(cfg(feature = "critical-section")))]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
pub mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{Duplex, FephyConfig, MdixMode, PowerState, Speed};
pub use error::{
    ConfigError, ConfigResult, Error, Result, TransportError, TransportResult,
};
pub use hal::{InterruptLine, IrqLookup, MacAddress, MdioBus, NetDevice, NoInterruptLine};

// Re-export PHY types
pub use phy::{
    Bank, BankWrite, FephyVariant, INTERNAL_FEPHY, LinkStatus, PhyCapabilities, PhyDriver,
    RockchipFephy, TestModeSession,
};

// Re-export sync types when critical-section is enabled
#[cfg(feature = "critical-section")]
pub use sync::SharedFephy;
