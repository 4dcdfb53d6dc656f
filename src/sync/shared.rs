//! ISR-safe FEPHY wrapper using critical sections.
//!
//! Provides [`SharedFephy`], which owns the management bus and the driver so
//! that the power path and the wake interrupt handler can share them.

use core::cell::RefCell;
use critical_section::Mutex;

use crate::error::{ConfigError, Result};
use crate::hal::host::{InterruptLine, NetDevice};
use crate::hal::mdio::MdioBus;
use crate::phy::{PhyDriver, RockchipFephy};

struct Bound<M, I: InterruptLine, N: NetDevice> {
    mdio: M,
    phy: RockchipFephy<I, N>,
}

/// ISR-safe FEPHY wrapper using critical sections.
///
/// Each of [`suspend`](Self::suspend), [`resume`](Self::resume) and
/// [`on_wake_irq`](Self::on_wake_irq) runs inside one critical section, so
/// the wake handler never observes a half-armed transition.
///
/// # Example
///
/// ```ignore
/// static FEPHY: SharedFephy<Mdio, WakeLine, Iface> = SharedFephy::new();
///
/// FEPHY.install(mdio, phy);
/// FEPHY.suspend()?;
///
/// #[interrupt]
/// fn WOL_IRQ() {
///     FEPHY.on_wake_irq().ok();
/// }
/// ```
pub struct SharedFephy<M: MdioBus, I: InterruptLine, N: NetDevice> {
    inner: Mutex<RefCell<Option<Bound<M, I, N>>>>,
}

impl<M: MdioBus, I: InterruptLine, N: NetDevice> SharedFephy<M, I, N> {
    /// Create an empty wrapper (const, suitable for static initialization).
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Install the bus and a probed driver, returning whatever was installed before
    pub fn install(&self, mdio: M, phy: RockchipFephy<I, N>) -> Option<(M, RockchipFephy<I, N>)> {
        self.slot(|slot| slot.replace(Bound { mdio, phy }))
            .map(|b| (b.mdio, b.phy))
    }

    /// Remove the bus and driver, e.g. before [`RockchipFephy::remove`]
    pub fn take(&self) -> Option<(M, RockchipFephy<I, N>)> {
        self.slot(Option::take).map(|b| (b.mdio, b.phy))
    }

    /// Whether a driver is installed
    pub fn is_bound(&self) -> bool {
        self.slot(|slot| slot.is_some())
    }

    /// Execute a closure with exclusive access to the bus and driver.
    ///
    /// Interrupts are disabled for the duration of the closure.
    pub fn with<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut M, &mut RockchipFephy<I, N>) -> Result<R>,
    {
        self.slot(|slot| match slot {
            Some(b) => f(&mut b.mdio, &mut b.phy),
            None => Err(ConfigError::NotBound.into()),
        })
    }

    fn slot<R>(&self, f: impl FnOnce(&mut Option<Bound<M, I, N>>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow_ref_mut(cs)))
    }

    /// Suspend in one critical section
    pub fn suspend(&self) -> Result<()> {
        self.with(|mdio, phy| phy.suspend(mdio))
    }

    /// Resume in one critical section
    pub fn resume(&self) -> Result<()> {
        self.with(|mdio, phy| phy.resume(mdio))
    }

    /// Wake interrupt handler entry point
    pub fn on_wake_irq(&self) -> Result<()> {
        self.with(|mdio, phy| phy.on_wake_irq(mdio))
    }
}

impl<M: MdioBus, I: InterruptLine, N: NetDevice> Default for SharedFephy<M, I, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FephyConfig, PowerState};
    use crate::error::Error;
    use crate::hal::host::IrqLookup;
    use crate::internal::phy_regs::fephy::reg;
    use crate::test_utils::{Event, MockInterruptLine, MockMdioBus, MockNetDevice};

    type Shared = SharedFephy<MockMdioBus, MockInterruptLine, MockNetDevice>;

    fn bound() -> Shared {
        let mdio = MockMdioBus::new();
        let line = MockInterruptLine::new(mdio.event_log());
        let mut phy = RockchipFephy::probe(FephyConfig::new(), IrqLookup::Found(line)).unwrap();
        phy.attach(MockNetDevice::new([0x02, 0, 0, 0, 0, 1]));

        let shared = Shared::new();
        assert!(shared.install(mdio, phy).is_none());
        shared
    }

    #[test]
    fn test_empty_wrapper_is_not_bound() {
        let shared = Shared::new();
        assert!(!shared.is_bound());
        assert_eq!(shared.suspend(), Err(Error::Config(ConfigError::NotBound)));
        assert_eq!(
            shared.on_wake_irq(),
            Err(Error::Config(ConfigError::NotBound))
        );
    }

    #[test]
    fn test_suspend_wake_resume_through_wrapper() {
        let shared = bound();

        shared.suspend().unwrap();
        shared.on_wake_irq().unwrap();
        shared.resume().unwrap();

        let (mdio, phy) = shared.take().unwrap();
        assert_eq!(phy.power_state(), PowerState::Active);
        assert!(mdio.events().contains(&Event::Read(reg::INT_STATUS)));
        assert!(!shared.is_bound());
    }

    #[test]
    fn test_with_exposes_driver_state() {
        let shared = bound();
        shared.suspend().unwrap();

        let armed = shared.with(|_, phy| Ok(phy.is_wake_armed())).unwrap();
        assert!(armed);
    }

    #[test]
    fn test_take_then_remove() {
        let shared = bound();
        let (_mdio, phy) = shared.take().unwrap();

        let line = phy.remove().unwrap();
        assert!(!line.is_requested());
    }
}
