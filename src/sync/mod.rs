//! Synchronization and Concurrency Support
//!
//! The wake interrupt handler and the suspend/resume path touch the same
//! PHY. [`SharedFephy`] keeps the bus and driver behind one critical section
//! so the two never interleave.
//!
//! # Feature Flags
//!
//! - `critical-section`: enables this module
//!
//! # Example
//!
//! ```ignore
//! use rk_fephy::sync::SharedFephy;
//!
//! static FEPHY: SharedFephy<Mdio, WakeLine, Iface> = SharedFephy::new();
//!
//! fn main() {
//!     FEPHY.install(mdio, phy);
//!     FEPHY.with(|mdio, phy| phy.init(mdio)).unwrap();
//! }
//!
//! #[interrupt]
//! fn WOL_IRQ() {
//!     FEPHY.on_wake_irq().ok();
//! }
//! ```

mod shared;

pub use shared::SharedFephy;
