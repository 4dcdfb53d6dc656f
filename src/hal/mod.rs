//! Hardware Abstraction Layer
//!
//! The driver never touches hardware directly. Everything it needs from the
//! outside world comes through the narrow traits in this module:
//!
//! - [`mdio`]: register transport to the PHY (Clause 22 read/write)
//! - [`host`]: what the hosting framework provides (wake interrupt line,
//!   attached network device)
//!
//! # Delay Integration
//!
//! Types that need delays use `embedded_hal::delay::DelayNs` directly.
//! Pass any delay implementation from your HAL.

pub mod host;
pub mod mdio;

// Re-export commonly used types
pub use host::{InterruptLine, IrqLookup, MacAddress, NetDevice, NoInterruptLine};
pub use mdio::MdioBus;
