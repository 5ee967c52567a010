use log::info;
use uf2board_core::registry::BoardRegistry;
use uf2board_core::validate::validate;

/// Re-run the validator over every registered descriptor.
///
/// The registry already validated everything at initialization, so in a
/// healthy tree this only confirms it; the command exists so build
/// pipelines have an explicit gate that exits non-zero with the offending
/// board name.
pub fn check(registry: &BoardRegistry) -> Result<(), Box<dyn std::error::Error>> {
    for board in registry.boards() {
        validate(board).map_err(|err| format!("board {:?}: {}", board.name, err))?;
        info!("{:<20} ok", board.name);
    }

    info!("{} board descriptors checked", registry.len());

    Ok(())
}
