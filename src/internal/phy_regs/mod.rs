//! PHY Register Definitions
//!
//! Register maps for PHY devices reached over the management bus.
//!
//! # Module Organization
//!
//! - [`standard`] - IEEE 802.3 Clause 22 standard PHY registers (0-15)
//! - [`fephy`] - Rockchip FEPHY vendor registers (16-31) and the test-mode
//!   bank interface behind them
//!
//! # Access Method
//!
//! Registers 0-31 are reached directly. The FEPHY's banked registers are only
//! reachable through the test-mode control word in register 20.

pub mod fephy;
pub mod standard;
