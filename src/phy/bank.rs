//! Test-mode bank access
//!
//! The FEPHY keeps its DSP, Wake-on-LAN, BIST and analog front-end registers
//! in banks that are not part of the Clause 22 map. They are reached through
//! three primary registers: a control word (20), a write staging register
//! (23) and a read result register (21). The control word only decodes bank
//! commands while the device's test-mode latch is open.
//!
//! [`TestModeSession`] is the open latch. It mutably borrows the bus, so
//! banked and direct register access cannot interleave, and it closes the
//! latch when dropped, so no exit path leaves the device in test mode.
//!
//! ```ignore
//! let mut session = TestModeSession::open(&mut mdio, addr)?;
//! session.bank_write(Bank::Dsp0, 0x18, 0x000C)?;
//! session.close()?;
//! ```

use crate::error::Result;
use crate::hal::mdio::MdioBus;
use crate::internal::phy_regs::fephy::{reg, tstcntl};

/// Largest offset inside a bank
pub const MAX_BANK_OFFSET: u8 = 31;

/// Control word sequence that opens the test-mode latch
///
/// The latch needs to see the disable→enable edge twice before it settles.
pub const TEST_MODE_OPEN_SEQUENCE: [u16; 4] = [
    tstcntl::TSTMODE_DISABLE,
    tstcntl::TSTMODE_ENABLE,
    tstcntl::TSTMODE_DISABLE,
    tstcntl::TSTMODE_ENABLE,
];

// =============================================================================
// Banks and Commands
// =============================================================================

/// Register bank selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Bank {
    /// DSP configuration
    Dsp0 = 0,
    /// Wake-on-LAN address match
    Wol = 1,
    /// Built-in self test
    Bist = 3,
    /// Analog front end
    Afe = 4,
    /// DSP configuration, second bank
    Dsp1 = 5,
}

impl Bank {
    /// Selector value placed in the control word
    pub const fn selector(self) -> u16 {
        self as u16
    }
}

/// Control word committing the staged value to `bank[offset]`
#[inline]
pub const fn write_command(bank: Bank, offset: u8) -> u16 {
    tstcntl::WR
        | (bank.selector() << tstcntl::BANK_SEL_SHIFT)
        | ((offset as u16 & tstcntl::OFFSET_MASK) << tstcntl::WRITE_ADDR_SHIFT)
}

/// Control word latching `bank[offset]` into the read result register
#[inline]
pub const fn read_command(bank: Bank, offset: u8) -> u16 {
    tstcntl::RD
        | (bank.selector() << tstcntl::BANK_SEL_SHIFT)
        | ((offset as u16 & tstcntl::OFFSET_MASK) << tstcntl::READ_ADDR_SHIFT)
}

/// One banked register write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BankWrite {
    /// Target bank
    pub bank: Bank,
    /// Register offset inside the bank (0-31)
    pub offset: u8,
    /// Value to commit
    pub value: u16,
}

impl BankWrite {
    /// Create a banked write
    pub const fn new(bank: Bank, offset: u8, value: u16) -> Self {
        Self {
            bank,
            offset,
            value,
        }
    }
}

// =============================================================================
// Test-Mode Session
// =============================================================================

/// An open test-mode latch on one PHY
///
/// Only a session can issue banked accesses. Dropping it writes the
/// "disable" control word; [`close`](Self::close) does the same but reports
/// the transport result.
#[derive(Debug)]
pub struct TestModeSession<'a, M: MdioBus> {
    mdio: &'a mut M,
    addr: u8,
    open: bool,
}

impl<'a, M: MdioBus> TestModeSession<'a, M> {
    /// Open the test-mode latch
    ///
    /// Writes the four-step [`TEST_MODE_OPEN_SEQUENCE`]. If any write fails
    /// the remaining ones are not issued and no session is returned.
    pub fn open(mdio: &'a mut M, addr: u8) -> Result<Self> {
        for value in TEST_MODE_OPEN_SEQUENCE {
            mdio.write(addr, reg::TSTCNTL, value)?;
        }
        Ok(Self {
            mdio,
            addr,
            open: true,
        })
    }

    /// PHY address this session talks to
    pub fn address(&self) -> u8 {
        self.addr
    }

    /// Write `value` into `bank[offset]`
    ///
    /// Stages the value, then commits it with the write control word.
    pub fn bank_write(&mut self, bank: Bank, offset: u8, value: u16) -> Result<()> {
        debug_assert!(offset <= MAX_BANK_OFFSET);
        self.mdio.write(self.addr, reg::TSTWRITE, value)?;
        self.mdio
            .write(self.addr, reg::TSTCNTL, write_command(bank, offset))?;
        Ok(())
    }

    /// Apply a list of banked writes in order
    pub fn apply(&mut self, writes: &[BankWrite]) -> Result<()> {
        for w in writes {
            self.bank_write(w.bank, w.offset, w.value)?;
        }
        Ok(())
    }

    /// Read `bank[offset]`
    pub fn bank_read(&mut self, bank: Bank, offset: u8) -> Result<u16> {
        debug_assert!(offset <= MAX_BANK_OFFSET);
        self.mdio
            .write(self.addr, reg::TSTCNTL, read_command(bank, offset))?;
        Ok(self.mdio.read(self.addr, reg::TSTREAD1)?)
    }

    /// Close the latch, returning the device to its basic register map
    pub fn close(mut self) -> Result<()> {
        self.open = false;
        self.mdio
            .write(self.addr, reg::TSTCNTL, tstcntl::TSTMODE_DISABLE)?;
        Ok(())
    }
}

impl<M: MdioBus> Drop for TestModeSession<'_, M> {
    fn drop(&mut self) {
        if self.open {
            // Error path: the caller already has a failure to report.
            let _ = self
                .mdio
                .write(self.addr, reg::TSTCNTL, tstcntl::TSTMODE_DISABLE);
        }
    }
}

/// Run `f` inside a test-mode session
///
/// The session is closed on success; on failure it is closed on drop and
/// `f`'s error is returned.
pub fn with_test_mode<M, R, F>(mdio: &mut M, addr: u8, f: F) -> Result<R>
where
    M: MdioBus,
    F: FnOnce(&mut TestModeSession<'_, M>) -> Result<R>,
{
    let mut session = TestModeSession::open(mdio, addr)?;
    let out = f(&mut session)?;
    session.close()?;
    Ok(out)
}
