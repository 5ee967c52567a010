use uf2board_core::descriptor::{ActiveLevel, BoardDescriptor, PullMode};

pub fn show(board: &BoardDescriptor) -> Result<(), Box<dyn std::error::Error>> {
    println!("board      {}", board.name);

    let active = match board.led_active_level() {
        ActiveLevel::Low => "active low",
        ActiveLevel::High => "active high",
    };
    match (board.primary_led(), board.secondary_led()) {
        (Some(primary), Some(secondary)) => {
            println!("leds       {} {} ({})", primary, secondary, active)
        }
        (Some(primary), None) => println!("leds       {} ({})", primary, active),
        _ => println!("leds       none"),
    }

    let pull = match board.button_pull() {
        PullMode::Up => "pull-up",
        PullMode::Down => "pull-down",
        PullMode::None => "no pull",
    };
    if board.button_pins.is_empty() {
        println!("buttons    none");
    } else {
        let pins: Vec<String> = board.button_pins.iter().map(|pin| pin.to_string()).collect();
        println!("buttons    {} ({})", pins.join(" "), pull);
    }

    if let Some(neopixel) = board.neopixel() {
        println!(
            "neopixel   {} x{} brightness {:#08x}",
            neopixel.pin, neopixel.count, neopixel.brightness
        );
    }

    let ble = board.ble_identity();
    println!("ble        {} / {}", ble.manufacturer, ble.model);

    let usb = board.usb_identity();
    println!(
        "usb        VID {:#06x} UF2 PID {:#06x} CDC PID {:#06x}",
        usb.vendor_id, usb.uf2_pid, usb.cdc_pid
    );

    let image = board.image_metadata();
    println!("product    {}", image.product_name);
    println!("volume     {}", image.volume_label);
    println!("board id   {}", image.board_id);
    println!("index url  {}", image.index_url);

    Ok(())
}
