//! Testing utilities and mock implementations
//!
//! Mocks for the bus and host seams so the FEPHY driver can be exercised on
//! the host without hardware. The bus, interrupt line and delay can share one
//! event log, which is how ordering across the seams is checked.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::vec::Vec;

use crate::error::{TransportError, TransportResult};
use crate::hal::host::{InterruptLine, MacAddress, NetDevice};
use crate::hal::mdio::{MAX_REG_ADDR, MdioBus};
use crate::internal::phy_regs::fephy::{reg, tstcntl};
use crate::phy::bank::Bank;

// =============================================================================
// Event Log
// =============================================================================

/// One observable action on a mocked seam
///
/// Bus events carry the register only; the PHY address is in the write log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Read(u8),
    Write(u8, u16),
    IrqRequest,
    IrqFree,
    IrqEnable,
    IrqDisable,
    IrqWake(bool),
}

/// Event log shared between mocks
pub type EventLog = Rc<RefCell<Vec<Event>>>;

// =============================================================================
// Mock MDIO Bus
// =============================================================================

/// Mock MDIO bus for testing PHY drivers without hardware
///
/// Registers default to 0. Besides the flat register map it emulates the
/// FEPHY test-mode latch: while open, write commands on the control register
/// commit the staged value into a bank store, and read commands load the
/// result register from it.
///
/// # Example
///
/// ```ignore
/// let mut mdio = MockMdioBus::new();
/// mdio.fail_at(3);
/// assert!(TestModeSession::open(&mut mdio, 0).is_err());
/// assert_eq!(mdio.get_writes().len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct MockMdioBus {
    /// Register values: (phy_addr, reg_addr) -> value
    registers: RefCell<HashMap<(u8, u8), u16>>,
    /// Bits forced high on every read: (phy_addr, reg_addr) -> mask
    held: RefCell<HashMap<(u8, u8), u16>>,
    /// Banked values: (phy_addr, bank selector, offset) -> value
    banks: RefCell<HashMap<(u8, u16, u8), u16>>,
    /// PHYs whose test-mode latch is open
    test_mode: RefCell<HashMap<u8, bool>>,
    /// Record of successful writes: (phy_addr, reg_addr, value)
    write_log: RefCell<Vec<(u8, u8, u16)>>,
    /// Ordered record of successful operations
    events: EventLog,
    /// Operations attempted so far, failed ones included
    ops: Cell<usize>,
    reads: Cell<usize>,
    /// Index of the operation that fails
    fail_at: Cell<Option<usize>>,
    /// While set, every operation times out
    busy: Cell<bool>,
}

impl MockMdioBus {
    /// Create a new mock MDIO bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the event log, for sharing with other mocks
    pub fn event_log(&self) -> EventLog {
        Rc::clone(&self.events)
    }

    /// Set a register value
    pub fn set_register(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);
    }

    /// Get the current value of a register (for test verification)
    pub fn get_register(&self, phy_addr: u8, reg_addr: u8) -> Option<u16> {
        self.registers.borrow().get(&(phy_addr, reg_addr)).copied()
    }

    /// Keep `mask` set on every read of a register, e.g. a reset bit that never clears
    pub fn hold_bits(&self, phy_addr: u8, reg_addr: u8, mask: u16) {
        self.held.borrow_mut().insert((phy_addr, reg_addr), mask);
    }

    /// Value committed to a bank register, if any
    pub fn bank_register(&self, phy_addr: u8, bank: Bank, offset: u8) -> Option<u16> {
        self.banks
            .borrow()
            .get(&(phy_addr, bank.selector(), offset))
            .copied()
    }

    /// Preload a bank register
    pub fn set_bank_register(&self, phy_addr: u8, bank: Bank, offset: u8, value: u16) {
        self.banks
            .borrow_mut()
            .insert((phy_addr, bank.selector(), offset), value);
    }

    /// Whether the PHY's test-mode latch is currently open
    pub fn in_test_mode(&self, phy_addr: u8) -> bool {
        self.test_mode
            .borrow()
            .get(&phy_addr)
            .copied()
            .unwrap_or(false)
    }

    /// Get all writes that have been made
    pub fn get_writes(&self) -> Vec<(u8, u8, u16)> {
        self.write_log.borrow().clone()
    }

    /// Clear the write log
    pub fn clear_writes(&self) {
        self.write_log.borrow_mut().clear();
    }

    /// Snapshot of the event log
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Clear the event log and the write log
    pub fn clear_log(&self) {
        self.events.borrow_mut().clear();
        self.clear_writes();
    }

    /// Make the `index`-th operation from now fail (0-based, reads and writes)
    ///
    /// The failing operation is counted but neither applied nor logged.
    pub fn fail_at(&self, index: usize) {
        self.fail_at.set(Some(self.ops.get() + index));
    }

    /// Operations attempted, failed ones included
    pub fn op_count(&self) -> usize {
        self.ops.get()
    }

    /// Successful reads
    pub fn read_count(&self) -> usize {
        self.reads.get()
    }

    /// Set the busy flag; a busy bus fails each operation with `TIMEOUT`
    pub fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }

    fn begin_op(&self, reg_addr: u8) -> TransportResult<()> {
        debug_assert!(reg_addr <= MAX_REG_ADDR, "register {reg_addr} out of range");
        let index = self.ops.get();
        self.ops.set(index + 1);
        if self.fail_at.get() == Some(index) {
            return Err(TransportError::BUS);
        }
        if self.busy.get() {
            return Err(TransportError::TIMEOUT);
        }
        Ok(())
    }

    fn control_word(&self, phy_addr: u8, value: u16) {
        match value {
            tstcntl::TSTMODE_ENABLE => {
                self.test_mode.borrow_mut().insert(phy_addr, true);
            }
            tstcntl::TSTMODE_DISABLE => {
                self.test_mode.borrow_mut().insert(phy_addr, false);
            }
            _ if !self.in_test_mode(phy_addr) => {}
            _ if value & tstcntl::RD == tstcntl::RD => {
                let bank = (value >> tstcntl::BANK_SEL_SHIFT) & 0x7;
                let offset = ((value >> tstcntl::READ_ADDR_SHIFT) & tstcntl::OFFSET_MASK) as u8;
                if let Some(v) = self.banks.borrow().get(&(phy_addr, bank, offset)) {
                    self.set_register(phy_addr, reg::TSTREAD1, *v);
                }
            }
            _ if value & tstcntl::WR == tstcntl::WR => {
                let bank = (value >> tstcntl::BANK_SEL_SHIFT) & 0x7;
                let offset = ((value >> tstcntl::WRITE_ADDR_SHIFT) & tstcntl::OFFSET_MASK) as u8;
                let staged = self.get_register(phy_addr, reg::TSTWRITE).unwrap_or(0);
                self.banks
                    .borrow_mut()
                    .insert((phy_addr, bank, offset), staged);
            }
            _ => {}
        }
    }
}

impl MdioBus for MockMdioBus {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> TransportResult<u16> {
        self.begin_op(reg_addr)?;
        self.reads.set(self.reads.get() + 1);
        self.events.borrow_mut().push(Event::Read(reg_addr));

        let held = self
            .held
            .borrow()
            .get(&(phy_addr, reg_addr))
            .copied()
            .unwrap_or(0);
        Ok(self.get_register(phy_addr, reg_addr).unwrap_or(0) | held)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> TransportResult<()> {
        self.begin_op(reg_addr)?;
        self.write_log
            .borrow_mut()
            .push((phy_addr, reg_addr, value));
        self.events
            .borrow_mut()
            .push(Event::Write(reg_addr, value));

        self.set_register(phy_addr, reg_addr, value);
        if reg_addr == reg::TSTCNTL {
            self.control_word(phy_addr, value);
        }
        Ok(())
    }

    fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

// =============================================================================
// Mock Interrupt Line
// =============================================================================

/// Mock wake interrupt line recording into a shared event log
#[derive(Debug, Default)]
pub struct MockInterruptLine {
    events: EventLog,
    request_error: Option<i32>,
    requested: bool,
    enabled: bool,
    wake: bool,
}

impl MockInterruptLine {
    /// Create a line recording into `events`
    pub fn new(events: EventLog) -> Self {
        Self {
            events,
            ..Self::default()
        }
    }

    /// Create a line whose `request` fails with `code`
    pub fn failing(events: EventLog, code: i32) -> Self {
        Self {
            events,
            request_error: Some(code),
            ..Self::default()
        }
    }

    pub fn is_requested(&self) -> bool {
        self.requested
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_wake_source(&self) -> bool {
        self.wake
    }

    fn log(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

impl InterruptLine for MockInterruptLine {
    fn request(&mut self) -> Result<(), i32> {
        if let Some(code) = self.request_error {
            return Err(code);
        }
        self.requested = true;
        // request leaves the line enabled, as host frameworks do
        self.enabled = true;
        self.log(Event::IrqRequest);
        Ok(())
    }

    fn free(&mut self) {
        self.requested = false;
        self.enabled = false;
        self.log(Event::IrqFree);
    }

    fn enable(&mut self) {
        self.enabled = true;
        self.log(Event::IrqEnable);
    }

    fn disable(&mut self) {
        self.enabled = false;
        self.log(Event::IrqDisable);
    }

    fn set_wake(&mut self, wake: bool) {
        self.wake = wake;
        self.log(Event::IrqWake(wake));
    }
}

// =============================================================================
// Mock Network Device
// =============================================================================

/// Mock network interface with a changeable hardware address
#[derive(Debug, Default)]
pub struct MockNetDevice {
    hw_addr: Cell<MacAddress>,
}

impl MockNetDevice {
    pub fn new(hw_addr: MacAddress) -> Self {
        Self {
            hw_addr: Cell::new(hw_addr),
        }
    }

    /// Change the address, as an `ip link set address` would
    pub fn set_hw_addr(&self, hw_addr: MacAddress) {
        self.hw_addr.set(hw_addr);
    }
}

impl NetDevice for MockNetDevice {
    fn hw_addr(&self) -> MacAddress {
        self.hw_addr.get()
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: Cell<u64>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        self.total_ns.get()
    }

    /// Get total milliseconds that were "delayed"
    pub fn total_ms(&self) -> u64 {
        self.total_ns() / 1_000_000
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns.set(self.total_ns.get() + ns as u64);
    }
}

// =============================================================================
// Test Assertions
// =============================================================================

/// Assert that a register was written with a specific value
#[macro_export]
macro_rules! assert_reg_written {
    ($mdio:expr, $phy:expr, $reg:expr, $value:expr) => {
        let writes = $mdio.get_writes();
        assert!(
            writes
                .iter()
                .any(|w| w.0 == $phy && w.1 == $reg && w.2 == $value),
            "Expected write to PHY {} reg {} with value 0x{:04X}, but got: {:?}",
            $phy,
            $reg,
            $value,
            writes
        );
    };
}

/// Assert that a register was never written
#[macro_export]
macro_rules! assert_reg_not_written {
    ($mdio:expr, $phy:expr, $reg:expr) => {
        let writes = $mdio.get_writes();
        assert!(
            !writes.iter().any(|w| w.0 == $phy && w.1 == $reg),
            "Expected no write to PHY {} reg {}, but got: {:?}",
            $phy,
            $reg,
            writes
        );
    };
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::phy::bank::{read_command, write_command};
    use std::vec;

    #[test]
    fn mock_mdio_read_write() {
        let mut mdio = MockMdioBus::new();

        // Initially reads 0
        assert_eq!(mdio.read(0, 1).unwrap(), 0);

        mdio.set_register(0, 1, 0x1234);
        assert_eq!(mdio.read(0, 1).unwrap(), 0x1234);

        mdio.write(0, 1, 0x5678).unwrap();
        assert_eq!(mdio.read(0, 1).unwrap(), 0x5678);

        assert_eq!(mdio.get_writes(), vec![(0, 1, 0x5678)]);
        assert_eq!(mdio.read_count(), 3);
    }

    #[test]
    fn mock_mdio_fail_at_counts_but_skips() {
        let mut mdio = MockMdioBus::new();
        mdio.fail_at(1);

        mdio.write(0, 4, 1).unwrap();
        assert_eq!(mdio.write(0, 5, 2), Err(TransportError::BUS));
        mdio.write(0, 6, 3).unwrap();

        assert_eq!(mdio.get_writes(), vec![(0, 4, 1), (0, 6, 3)]);
        assert_eq!(mdio.get_register(0, 5), None);
        assert_eq!(mdio.op_count(), 3);
    }

    #[test]
    fn mock_mdio_busy_times_out() {
        let mut mdio = MockMdioBus::new();
        mdio.set_busy(true);

        assert!(mdio.is_busy());
        assert_eq!(mdio.read(0, 1), Err(TransportError::TIMEOUT));
        assert_eq!(mdio.write(0, 1, 0x1234), Err(TransportError::TIMEOUT));
        assert!(mdio.events().is_empty());

        mdio.set_busy(false);
        mdio.write(0, 1, 0x1234).unwrap();
        assert_eq!(mdio.op_count(), 3);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn mock_mdio_rejects_register_past_clause_22() {
        let mut mdio = MockMdioBus::new();
        let _ = mdio.read(0, MAX_REG_ADDR + 1);
    }

    #[test]
    fn mock_mdio_bank_emulation() {
        let mut mdio = MockMdioBus::new();

        // commands outside test mode are ignored
        mdio.write(0, reg::TSTWRITE, 0x1111).unwrap();
        mdio.write(0, reg::TSTCNTL, write_command(Bank::Wol, 2)).unwrap();
        assert_eq!(mdio.bank_register(0, Bank::Wol, 2), None);

        mdio.write(0, reg::TSTCNTL, tstcntl::TSTMODE_ENABLE).unwrap();
        assert!(mdio.in_test_mode(0));
        mdio.write(0, reg::TSTWRITE, 0x2222).unwrap();
        mdio.write(0, reg::TSTCNTL, write_command(Bank::Wol, 2)).unwrap();
        assert_eq!(mdio.bank_register(0, Bank::Wol, 2), Some(0x2222));

        mdio.write(0, reg::TSTCNTL, read_command(Bank::Wol, 2)).unwrap();
        assert_eq!(mdio.read(0, reg::TSTREAD1).unwrap(), 0x2222);

        mdio.write(0, reg::TSTCNTL, tstcntl::TSTMODE_DISABLE).unwrap();
        assert!(!mdio.in_test_mode(0));
    }

    #[test]
    fn mock_shared_event_log() {
        let mut mdio = MockMdioBus::new();
        let mut line = MockInterruptLine::new(mdio.event_log());

        line.disable();
        mdio.write(0, 30, 0x0E00).unwrap();
        line.enable();

        assert_eq!(
            mdio.events(),
            vec![Event::IrqDisable, Event::Write(30, 0x0E00), Event::IrqEnable]
        );
    }

    #[test]
    fn mock_delay_tracking() {
        let mut delay = MockDelay::new();

        embedded_hal::delay::DelayNs::delay_ns(&mut delay, 1000);
        embedded_hal::delay::DelayNs::delay_ns(&mut delay, 2000);

        assert_eq!(delay.total_ns(), 3000);
        assert_eq!(delay.total_ms(), 0); // Less than 1ms

        embedded_hal::delay::DelayNs::delay_ns(&mut delay, 1_000_000);
        assert_eq!(delay.total_ms(), 1);
    }
}
