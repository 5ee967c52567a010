use static_assertions::const_assert;

use crate::descriptor::{
    ActiveLevel, BleIdentity, BoardDescriptor, ImageMetadata, PullMode, UsbIdentity,
};
use crate::pin::PinId;
use crate::validate::VOLUME_LABEL_MAX;

const LED_COUNT: usize = 1;
// Blue LED, lit by driving the pin low.
const LED_PINS: &[PinId] = &[PinId::pinnum(0, 15)];

const BUTTON_COUNT: usize = 2;
// BUTTON_1 doubles as RESET; BUTTON_2 has no connection on this board.
const BUTTON_PINS: &[PinId] = &[PinId::pinnum(0, 18), PinId::pinnum(0, 19)];

const VOLUME_LABEL: &str = "LIBRA_MINI";

pub static LIBRA_MINI: BoardDescriptor = BoardDescriptor {
    name: "libra_mini",
    led_count: LED_COUNT,
    led_pins: LED_PINS,
    led_active_level: ActiveLevel::Low,
    button_count: BUTTON_COUNT,
    button_pins: BUTTON_PINS,
    button_pull: PullMode::Up,
    ble: BleIdentity {
        // Pre-burned nice!nano ids, kept until this board gets its own.
        manufacturer: "Nice Keyboards",
        model: "nice!nano",
    },
    usb: UsbIdentity {
        vendor_id: 0x239A,
        uf2_pid: 0x00B3,
        cdc_pid: 0x00B3,
    },
    image: ImageMetadata {
        product_name: "Libra mini",
        volume_label: VOLUME_LABEL,
        board_id: "LIBRA_MINI",
        index_url: "https://github.com/jhorology/keyboards/tree/main/zmk_keyboards/boards/shields/libra_mini",
    },
    neopixel: None,
};

const_assert!(LED_PINS.len() == LED_COUNT);
const_assert!(BUTTON_PINS.len() == BUTTON_COUNT);
const_assert!(VOLUME_LABEL.len() <= VOLUME_LABEL_MAX);
