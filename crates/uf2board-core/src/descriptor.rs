use thiserror::Error;

use crate::pin::PinId;

/// Logic level that turns a board's LEDs on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ActiveLevel {
    Low,
    High,
}

impl ActiveLevel {
    /// Raw level to drive the pin to when lighting the LED.
    pub const fn level(self) -> u8 {
        match self {
            ActiveLevel::Low => 0,
            ActiveLevel::High => 1,
        }
    }
}

/// Internal resistor configuration applied to button input pins.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PullMode {
    Up,
    Down,
    None,
}

/// Strings served from the BLE device-information service during OTA
/// updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BleIdentity {
    pub manufacturer: &'static str,
    pub model: &'static str,
}

/// USB identifiers, placed verbatim into the 16-bit device descriptor
/// fields. The two product ids may be equal (single-mode device) or
/// distinct (separate UF2-bootloader and CDC-only personalities).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsbIdentity {
    pub vendor_id: u16,
    pub uf2_pid: u16,
    pub cdc_pid: u16,
}

/// Metadata embedded in the self-describing UF2 image.
///
/// `volume_label` doubles as the advertised name of the emulated
/// mass-storage volume and is length- and charset-constrained, see
/// [`validate`](crate::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMetadata {
    pub product_name: &'static str,
    pub volume_label: &'static str,
    pub board_id: &'static str,
    pub index_url: &'static str,
}

/// Addressable RGB strip, on boards that have one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeopixelStrip {
    pub pin: PinId,
    pub count: u16,
    /// Packed 0x00RRGGBB default brightness.
    pub brightness: u32,
}

/// Everything that differs between two boards running the same bootloader.
///
/// One `static` descriptor exists per supported board (see
/// [`boards`](crate::boards)); it is populated at definition time and never
/// mutated, so any number of concurrent readers may use the accessors
/// without synchronization. Generic bootloader code only ever touches the
/// accessors, never the board modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardDescriptor {
    /// Registry key, also the board's directory name in the build system.
    pub name: &'static str,

    pub led_count: usize,
    /// Index 0 is the primary indicator, index 1 the secondary.
    pub led_pins: &'static [PinId],
    pub led_active_level: ActiveLevel,

    pub button_count: usize,
    pub button_pins: &'static [PinId],
    pub button_pull: PullMode,

    pub ble: BleIdentity,
    pub usb: UsbIdentity,
    pub image: ImageMetadata,

    pub neopixel: Option<NeopixelStrip>,
}

/// Asking for a button the board does not have is a contract violation in
/// the consuming firmware, not a data problem.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("button index {index} is out of bounds, board has {count} buttons")]
pub struct ButtonIndexError {
    pub index: usize,
    pub count: usize,
}

impl BoardDescriptor {
    /// The primary indicator LED. `None` on boards without LEDs.
    pub fn primary_led(&self) -> Option<PinId> {
        if self.led_count > 0 {
            self.led_pins.first().copied()
        } else {
            None
        }
    }

    /// The secondary indicator LED, on boards that have more than one.
    pub fn secondary_led(&self) -> Option<PinId> {
        if self.led_count > 1 {
            self.led_pins.get(1).copied()
        } else {
            None
        }
    }

    pub fn led_active_level(&self) -> ActiveLevel {
        self.led_active_level
    }

    pub fn button(&self, index: usize) -> Result<PinId, ButtonIndexError> {
        if index < self.button_count {
            if let Some(pin) = self.button_pins.get(index).copied() {
                return Ok(pin);
            }
        }
        Err(ButtonIndexError {
            index,
            count: self.button_count,
        })
    }

    pub fn button_pull(&self) -> PullMode {
        self.button_pull
    }

    pub fn ble_identity(&self) -> &BleIdentity {
        &self.ble
    }

    pub fn usb_identity(&self) -> &UsbIdentity {
        &self.usb
    }

    pub fn image_metadata(&self) -> &ImageMetadata {
        &self.image
    }

    pub fn neopixel(&self) -> Option<&NeopixelStrip> {
        self.neopixel.as_ref()
    }
}
