//! Board-configuration layer for a USB/BLE UF2 bootloader.
//!
//! The bootloader proper (USB mass-storage emulation, BLE DFU transport,
//! flash programming) is written once and reused unchanged on every
//! supported board. Everything that differs between two boards lives in a
//! [`BoardDescriptor`]: which GPIO pins drive LEDs and buttons, the USB
//! vendor/product ids, the BLE device-information strings, and the metadata
//! embedded in the self-describing UF2 image.
//!
//! A build selects a board by name. [`BoardRegistry::builtin`] validates
//! every registered descriptor once and refuses to initialize if any is
//! malformed, so generic firmware that gets a descriptor out of the
//! registry never has to re-check invariants at use time.

pub mod boards;
pub mod descriptor;
pub mod pin;
pub mod registry;
pub mod validate;

pub use descriptor::{
    ActiveLevel, BleIdentity, BoardDescriptor, ButtonIndexError, ImageMetadata, NeopixelStrip,
    PullMode, UsbIdentity,
};
pub use pin::{PinId, PinRangeError};
pub use registry::{BoardRegistry, RegistryInitError, UnknownBoardError};
pub use validate::{validate, PinRole, ValidationError, VOLUME_LABEL_MAX};
