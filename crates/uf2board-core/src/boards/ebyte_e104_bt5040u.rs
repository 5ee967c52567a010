use static_assertions::const_assert;

use crate::descriptor::{
    ActiveLevel, BleIdentity, BoardDescriptor, ImageMetadata, PullMode, UsbIdentity,
};
use crate::pin::PinId;
use crate::validate::VOLUME_LABEL_MAX;

const LED_COUNT: usize = 2;
// Module pin 39 red LED, then pin 38 LED1 red.
const LED_PINS: &[PinId] = &[PinId::pinnum(0, 6), PinId::pinnum(0, 8)];

const BUTTON_COUNT: usize = 2;
// BUTTON_1 doubles as RESET; BUTTON_2 is the side switch on module pin 37.
const BUTTON_PINS: &[PinId] = &[PinId::pinnum(0, 18), PinId::pinnum(1, 6)];

const VOLUME_LABEL: &str = "BT5040U";

pub static EBYTE_E104_BT5040U: BoardDescriptor = BoardDescriptor {
    name: "ebyte_e104_bt5040u",
    led_count: LED_COUNT,
    led_pins: LED_PINS,
    led_active_level: ActiveLevel::Low,
    button_count: BUTTON_COUNT,
    button_pins: BUTTON_PINS,
    button_pull: PullMode::Up,
    ble: BleIdentity {
        manufacturer: "CDEBYTE",
        model: "E104-BT5040U",
    },
    usb: UsbIdentity {
        vendor_id: 0x239A,
        uf2_pid: 0x00EB,
        cdc_pid: 0x00EB,
    },
    image: ImageMetadata {
        product_name: "Ebyte E104-BT5040U",
        volume_label: VOLUME_LABEL,
        board_id: "nRF52840-Ebyte-E104-BT5040U",
        index_url: "https://www.cdebyte.com/products/E104-BT5040U",
    },
    neopixel: None,
};

const_assert!(LED_PINS.len() == LED_COUNT);
const_assert!(BUTTON_PINS.len() == BUTTON_COUNT);
const_assert!(VOLUME_LABEL.len() <= VOLUME_LABEL_MAX);
