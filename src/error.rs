//! Error types for the Rockchip FEPHY driver
//!
//! Errors are organized by origin:
//! - [`TransportError`]: a register read/write on the management bus failed
//! - [`ConfigError`]: probe and configuration failures that are not caused
//!   by register traffic (bad address, deferred interrupt provider, ...)
//!
//! The unified [`Error`] enum wraps both and is returned by most driver
//! methods. Every multi-step register sequence stops at the first
//! [`TransportError`] and hands it back unchanged.

// =============================================================================
// Transport Errors
// =============================================================================

/// Failure of a single register transaction on the management bus
///
/// Carries the status code reported by the transport. The driver never
/// interprets the code; "bus busy", "device absent" and "bus fault" all look
/// the same at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransportError {
    code: i32,
}

impl TransportError {
    /// Generic I/O failure code for transports without a better one
    pub const BUS: Self = Self::new(-5);

    /// Busy/timeout failure code
    pub const TIMEOUT: Self = Self::new(-110);

    /// Wrap a transport status code
    pub const fn new(code: i32) -> Self {
        Self { code }
    }

    /// The status code reported by the transport
    pub const fn code(&self) -> i32 {
        self.code
    }
}

impl core::fmt::Display for TransportError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "register transport failed ({})", self.code)
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Probe and configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Invalid PHY address (must be 0-31)
    InvalidPhyAddress,
    /// PHY identifier does not match any known variant
    UnsupportedPhy,
    /// Wake interrupt provider not ready, probe must be retried later
    ProbeDeferred,
    /// Registering the wake interrupt handler failed with the given code
    IrqRequestFailed(i32),
    /// Soft reset did not self-clear in time
    ResetTimeout,
    /// No network device attached while Wake-on-LAN needs its address
    NotAttached,
    /// Shared wrapper has no driver installed
    NotBound,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::IrqRequestFailed(code) => {
                write!(f, "{} ({})", self.as_str(), code)
            }
            _ => f.write_str(self.as_str()),
        }
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::InvalidPhyAddress => "invalid PHY address",
            ConfigError::UnsupportedPhy => "unsupported PHY identifier",
            ConfigError::ProbeDeferred => "wake interrupt not ready, probe deferred",
            ConfigError::IrqRequestFailed(_) => "wake interrupt request failed",
            ConfigError::ResetTimeout => "soft reset timed out",
            ConfigError::NotAttached => "no network device attached",
            ConfigError::NotBound => "driver not bound",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// ```ignore
/// match phy.suspend(&mut mdio) {
///     Err(Error::Transport(e)) => { /* bus fault, e.code() */ }
///     Err(Error::Config(ConfigError::NotAttached)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Register transport failure
    Transport(TransportError),
    /// Configuration or probe error
    Config(ConfigError),
}

impl Error {
    /// Returns the transport error if this is one
    pub const fn transport(&self) -> Option<TransportError> {
        match self {
            Error::Transport(e) => Some(*e),
            Error::Config(_) => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "transport: {e}"),
            Error::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Error::Transport(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

/// Result type alias for driver operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for raw transport operations
pub type TransportResult<T> = core::result::Result<T, TransportError>;

// =============================================================================
// Unit Tests
// =============================================================================
