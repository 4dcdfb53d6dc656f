//! Hosting framework contracts
//!
//! The PHY driver is bound and driven by a hosting framework (a MAC driver,
//! a network stack, a board support layer). These traits are what the driver
//! consumes from it. They are intentionally small: the framework keeps
//! interrupt controller mechanics and device discovery to itself.

/// Length of an Ethernet hardware address
pub const MAC_ADDR_LEN: usize = 6;

/// Ethernet hardware address, most significant byte first
pub type MacAddress = [u8; MAC_ADDR_LEN];

// =============================================================================
// Wake Interrupt Line
// =============================================================================

/// The out-of-band wake interrupt line wired from the PHY to the host
///
/// The framework owns the interrupt controller; this trait only exposes the
/// primitives the driver sequences. The handler itself is the driver's
/// wake-event acknowledgement, which the framework calls from its threaded
/// (rising-edge, one-shot) interrupt context.
pub trait InterruptLine {
    /// Register the wake handler on this line
    ///
    /// Returns the framework's status code on failure.
    fn request(&mut self) -> Result<(), i32>;

    /// Deregister the wake handler
    fn free(&mut self);

    /// Let the line fire
    fn enable(&mut self);

    /// Mask the line
    fn disable(&mut self);

    /// Mark the line as a system wake source (or clear it)
    fn set_wake(&mut self, wake: bool);
}

/// Interrupt line type for boards without a wake line
///
/// Every primitive is a no-op. The driver never calls them because probing
/// with [`IrqLookup::NotWired`] leaves the line absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoInterruptLine;

impl InterruptLine for NoInterruptLine {
    fn request(&mut self) -> Result<(), i32> {
        Ok(())
    }

    fn free(&mut self) {}

    fn enable(&mut self) {}

    fn disable(&mut self) {}

    fn set_wake(&mut self, _wake: bool) {}
}

/// Result of looking up the PHY's named `"wol_irq"` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IrqLookup<I> {
    /// The line is described and its provider is ready
    Found(I),
    /// The board does not wire a wake line
    NotWired,
    /// The line is described but its provider has not probed yet
    Deferred,
}

impl<I> IrqLookup<I> {
    /// Build a lookup result from an optional line
    pub fn from_option(line: Option<I>) -> Self {
        match line {
            Some(line) => IrqLookup::Found(line),
            None => IrqLookup::NotWired,
        }
    }
}

// =============================================================================
// Attached Network Device
// =============================================================================

/// The network interface the PHY is attached to
pub trait NetDevice {
    /// Current hardware address of the interface
    fn hw_addr(&self) -> MacAddress;
}

impl<N: NetDevice + ?Sized> NetDevice for &N {
    fn hw_addr(&self) -> MacAddress {
        (**self).hw_addr()
    }
}

impl NetDevice for MacAddress {
    fn hw_addr(&self) -> MacAddress {
        *self
    }
}
