use static_assertions::const_assert;

use crate::descriptor::{
    ActiveLevel, BleIdentity, BoardDescriptor, ImageMetadata, NeopixelStrip, PullMode, UsbIdentity,
};
use crate::pin::PinId;
use crate::validate::VOLUME_LABEL_MAX;

const LED_COUNT: usize = 2;
// Green on P0.5, red on P0.7.
const LED_PINS: &[PinId] = &[PinId::pinnum(0, 5), PinId::pinnum(0, 7)];

const BUTTON_COUNT: usize = 2;
const BUTTON_PINS: &[PinId] = &[PinId::pinnum(0, 11), PinId::pinnum(0, 12)];

const VOLUME_LABEL: &str = "CYBER60_D";

pub static CYBER60_D: BoardDescriptor = BoardDescriptor {
    name: "cyber60_d",
    led_count: LED_COUNT,
    led_pins: LED_PINS,
    led_active_level: ActiveLevel::Low,
    button_count: BUTTON_COUNT,
    button_pins: BUTTON_PINS,
    button_pull: PullMode::Up,
    ble: BleIdentity {
        manufacturer: "4pplet",
        model: "cyber60 D",
    },
    usb: UsbIdentity {
        vendor_id: 0x239A,
        uf2_pid: 0x0087,
        cdc_pid: 0x0088,
    },
    image: ImageMetadata {
        product_name: "cyber60 Rev D",
        volume_label: VOLUME_LABEL,
        board_id: "nRF52840-cyber60-rev_d",
        index_url: "https://github.com/4pplet/cyber60",
    },
    neopixel: Some(NeopixelStrip {
        pin: PinId::pinnum(0, 4),
        count: 16,
        brightness: 0x040404,
    }),
};

const_assert!(LED_PINS.len() == LED_COUNT);
const_assert!(BUTTON_PINS.len() == BUTTON_COUNT);
const_assert!(VOLUME_LABEL.len() <= VOLUME_LABEL_MAX);
