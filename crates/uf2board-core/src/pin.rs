use std::fmt;

use thiserror::Error;

/// Highest pin index within one GPIO port.
pub const PIN_MAX: u8 = 31;

/// A physical GPIO location, port plus pin.
///
/// Ordering and hashing follow `(port, pin)`, which is the same order as
/// [`global_index`](PinId::global_index), so a `PinId` works directly as a
/// map key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PinId {
    port: u8,
    pin: u8,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("pin {pin} on port {port} is out of range, pin must be 0..=31")]
pub struct PinRangeError {
    pub port: u8,
    pub pin: u8,
}

impl PinId {
    pub const fn new(port: u8, pin: u8) -> Result<Self, PinRangeError> {
        if pin > PIN_MAX {
            return Err(PinRangeError { port, pin });
        }
        Ok(Self { port, pin })
    }

    /// Const shorthand for board tables. An out-of-range pin fails the
    /// build instead of returning an error.
    pub const fn pinnum(port: u8, pin: u8) -> Self {
        match Self::new(port, pin) {
            Ok(id) => id,
            Err(_) => panic!("pin number out of range"),
        }
    }

    pub const fn port(self) -> u8 {
        self.port
    }

    pub const fn pin(self) -> u8 {
        self.pin
    }

    /// Canonical single-integer form, `port * 32 + pin`.
    pub const fn global_index(self) -> u16 {
        self.port as u16 * 32 + self.pin as u16
    }

    /// Inverse of [`global_index`](Self::global_index).
    pub const fn from_global_index(index: u16) -> Self {
        assert!(index >> 5 <= u8::MAX as u16, "global index out of range");
        Self {
            port: (index >> 5) as u8,
            pin: (index & 0x1f) as u8,
        }
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}.{}", self.port, self.pin)
    }
}
