use uf2board_core::registry::BoardRegistry;

pub fn list(registry: &BoardRegistry) -> Result<(), Box<dyn std::error::Error>> {
    for board in registry.boards() {
        let usb = board.usb_identity();
        println!(
            "{:<20} {:<20} VID {:#06x} UF2 PID {:#06x} CDC PID {:#06x}",
            board.name,
            board.image_metadata().product_name,
            usb.vendor_id,
            usb.uf2_pid,
            usb.cdc_pid,
        );
    }

    Ok(())
}
