use log::{debug, info};
use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::boards;
use crate::descriptor::BoardDescriptor;
use crate::validate::{validate, ValidationError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no board registered under the name {name:?}")]
pub struct UnknownBoardError {
    pub name: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryInitError {
    #[error("board {board:?} failed validation: {source}")]
    InvalidDescriptor {
        board: &'static str,
        #[source]
        source: ValidationError,
    },
    #[error("board name {name:?} is registered twice")]
    DuplicateName { name: &'static str },
}

/// Name-keyed set of validated board descriptors.
///
/// Construction validates every entry and fails fast on the first bad one,
/// so a registry that exists only hands out descriptors that already passed
/// [`validate`]. After construction it is read-only; lookups from
/// concurrent tasks need no synchronization.
#[derive(Debug)]
pub struct BoardRegistry {
    boards: Vec<&'static BoardDescriptor>,
}

impl BoardRegistry {
    pub fn new(boards: &[&'static BoardDescriptor]) -> Result<Self, RegistryInitError> {
        for (i, board) in boards.iter().enumerate() {
            if boards[..i]
                .iter()
                .any(|b| b.name.eq_ignore_ascii_case(board.name))
            {
                return Err(RegistryInitError::DuplicateName { name: board.name });
            }
            validate(board).map_err(|source| RegistryInitError::InvalidDescriptor {
                board: board.name,
                source,
            })?;
            debug!("registered board {}", board.name);
        }
        Ok(Self {
            boards: boards.to_vec(),
        })
    }

    /// The registry over the built-in board set, validated once per
    /// process. The transition is one-way: once initialized the registry
    /// lives for the rest of the process.
    pub fn builtin() -> Result<&'static BoardRegistry, RegistryInitError> {
        static BUILTIN: OnceCell<BoardRegistry> = OnceCell::new();
        BUILTIN.get_or_try_init(|| {
            info!(
                "validating {} built-in board descriptors",
                boards::all().len()
            );
            Self::new(boards::all())
        })
    }

    /// Look up a board by name, ignoring ASCII case.
    pub fn resolve(&self, name: &str) -> Result<&'static BoardDescriptor, UnknownBoardError> {
        self.boards
            .iter()
            .copied()
            .find(|board| board.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownBoardError {
                name: name.to_string(),
            })
    }

    /// Registered descriptors, in registration order.
    pub fn boards(&self) -> impl Iterator<Item = &'static BoardDescriptor> + '_ {
        self.boards.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::{CYBER60_D, LIBRA_MINI};
    use crate::validate::validate;

    #[test]
    pub fn builtin_registry_initializes() {
        let registry = BoardRegistry::builtin().unwrap();
        assert_eq!(registry.len(), boards::all().len());
    }

    #[test]
    pub fn resolve_unknown_name_fails() {
        let registry = BoardRegistry::builtin().unwrap();
        let err = registry.resolve("unknown-name").unwrap_err();
        assert_eq!(err.name, "unknown-name");
    }

    #[test]
    pub fn resolve_is_case_insensitive() {
        let registry = BoardRegistry::builtin().unwrap();
        let board = registry.resolve("CYBER60_D").unwrap();
        assert_eq!(board.name, "cyber60_d");
    }

    #[test]
    pub fn resolved_descriptors_revalidate_cleanly() {
        let registry = BoardRegistry::builtin().unwrap();
        for board in registry.boards() {
            let resolved = registry.resolve(board.name).unwrap();
            assert_eq!(validate(resolved), Ok(()));
        }
    }

    #[test]
    pub fn rejects_duplicate_names() {
        let err = BoardRegistry::new(&[&LIBRA_MINI, &CYBER60_D, &LIBRA_MINI]).unwrap_err();
        assert_eq!(
            err,
            RegistryInitError::DuplicateName { name: "libra_mini" }
        );
    }

    #[test]
    pub fn refuses_to_initialize_over_an_invalid_descriptor() {
        use crate::descriptor::{
            ActiveLevel, BleIdentity, BoardDescriptor, ImageMetadata, PullMode, UsbIdentity,
        };

        // Declared LED count disagrees with the pin table.
        static BAD: BoardDescriptor = BoardDescriptor {
            name: "badboard",
            led_count: 2,
            led_pins: &[],
            led_active_level: ActiveLevel::Low,
            button_count: 0,
            button_pins: &[],
            button_pull: PullMode::None,
            ble: BleIdentity {
                manufacturer: "Bad",
                model: "Board",
            },
            usb: UsbIdentity {
                vendor_id: 0x239A,
                uf2_pid: 0x0001,
                cdc_pid: 0x0001,
            },
            image: ImageMetadata {
                product_name: "Bad Board",
                volume_label: "BADBOOT",
                board_id: "badboard",
                index_url: "https://example.com/bad",
            },
            neopixel: None,
        };

        let err = BoardRegistry::new(&[&BAD]).unwrap_err();
        assert!(matches!(
            err,
            RegistryInitError::InvalidDescriptor {
                board: "badboard",
                ..
            }
        ));
    }
}
