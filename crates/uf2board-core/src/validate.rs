use std::fmt;

use log::debug;
use thiserror::Error;

use crate::descriptor::BoardDescriptor;
use crate::pin::PinId;

/// Longest name the emulated FAT mass-storage volume will carry.
pub const VOLUME_LABEL_MAX: usize = 11;

/// Which pin table a violation was found in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PinRole {
    Led,
    Button,
}

impl fmt::Display for PinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinRole::Led => write!(f, "LED"),
            PinRole::Button => write!(f, "button"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{role} count is {declared} but {actual} pins are listed")]
    CountMismatch {
        role: PinRole,
        declared: usize,
        actual: usize,
    },
    #[error("{role} pin {pin} is listed twice")]
    DuplicatePin { role: PinRole, pin: PinId },
    #[error("{field} must not be empty")]
    EmptyIdentityString { field: &'static str },
    #[error("volume label {label:?} {reason}")]
    InvalidVolumeLabel {
        label: &'static str,
        reason: &'static str,
    },
    #[error("{field} must not be zero")]
    ZeroIdentifier { field: &'static str },
}

/// Check every descriptor invariant, in a fixed order, returning the first
/// violation found.
///
/// This runs once per registered board when the registry initializes. A
/// failing descriptor is fatal to that build: there is no recovery or
/// best-effort mode, because shipping it risks bricking or mis-identifying
/// hardware.
pub fn validate(board: &BoardDescriptor) -> Result<(), ValidationError> {
    check_count(PinRole::Led, board.led_count, board.led_pins)?;
    check_count(PinRole::Button, board.button_count, board.button_pins)?;

    check_duplicates(PinRole::Led, board.led_pins)?;
    check_duplicates(PinRole::Button, board.button_pins)?;

    check_non_empty("BLE manufacturer name", board.ble.manufacturer)?;
    check_non_empty("BLE model name", board.ble.model)?;
    check_non_empty("image product name", board.image.product_name)?;
    check_non_empty("image volume label", board.image.volume_label)?;
    check_non_empty("image board id", board.image.board_id)?;
    check_non_empty("image index URL", board.image.index_url)?;

    check_volume_label(board.image.volume_label)?;

    check_non_zero("USB vendor id", board.usb.vendor_id)?;
    check_non_zero("USB UF2 product id", board.usb.uf2_pid)?;
    check_non_zero("USB CDC product id", board.usb.cdc_pid)?;

    debug!("descriptor for {} passed validation", board.name);
    Ok(())
}

fn check_count(role: PinRole, declared: usize, pins: &[PinId]) -> Result<(), ValidationError> {
    if declared != pins.len() {
        return Err(ValidationError::CountMismatch {
            role,
            declared,
            actual: pins.len(),
        });
    }
    Ok(())
}

// An LED and a button may share a pin (never valid on real hardware, but
// not structurally forbidden); duplicates within one role are always a
// copy-paste mistake.
fn check_duplicates(role: PinRole, pins: &[PinId]) -> Result<(), ValidationError> {
    for (i, pin) in pins.iter().enumerate() {
        if pins[..i].contains(pin) {
            return Err(ValidationError::DuplicatePin { role, pin: *pin });
        }
    }
    Ok(())
}

fn check_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyIdentityString { field });
    }
    Ok(())
}

fn check_volume_label(label: &'static str) -> Result<(), ValidationError> {
    if label.len() > VOLUME_LABEL_MAX {
        return Err(ValidationError::InvalidVolumeLabel {
            label,
            reason: "is longer than 11 bytes",
        });
    }
    let allowed =
        |b: u8| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b' ' || b == b'_' || b == b'-';
    if !label.bytes().all(allowed) {
        return Err(ValidationError::InvalidVolumeLabel {
            label,
            reason: "contains characters outside A-Z 0-9 space _ -",
        });
    }
    Ok(())
}

fn check_non_zero(field: &'static str, id: u16) -> Result<(), ValidationError> {
    if id == 0 {
        return Err(ValidationError::ZeroIdentifier { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::tests::test_board;
    use crate::pin::PinId;

    #[test]
    pub fn accepts_a_well_formed_descriptor() {
        assert_eq!(validate(&test_board()), Ok(()));
    }

    #[test]
    pub fn rejects_led_count_mismatch() {
        let mut board = test_board();
        board.led_count = 1;
        assert_eq!(
            validate(&board),
            Err(ValidationError::CountMismatch {
                role: PinRole::Led,
                declared: 1,
                actual: 2,
            })
        );
    }

    #[test]
    pub fn rejects_duplicate_button_pin() {
        let mut board = test_board();
        const BUTTON_PINS: &[PinId] = &[PinId::pinnum(0, 18), PinId::pinnum(0, 18)];
        board.button_pins = BUTTON_PINS;
        assert_eq!(
            validate(&board),
            Err(ValidationError::DuplicatePin {
                role: PinRole::Button,
                pin: PinId::pinnum(0, 18),
            })
        );
    }

    #[test]
    pub fn shared_pin_across_roles_is_not_a_duplicate() {
        let mut board = test_board();
        const LED_PINS: &[PinId] = &[PinId::pinnum(0, 11), PinId::pinnum(0, 7)];
        board.led_pins = LED_PINS;
        assert_eq!(validate(&board), Ok(()));
    }

    #[test]
    pub fn rejects_empty_identity_strings() {
        let mut board = test_board();
        board.ble.model = "";
        assert_eq!(
            validate(&board),
            Err(ValidationError::EmptyIdentityString {
                field: "BLE model name",
            })
        );

        let mut board = test_board();
        board.image.index_url = "";
        assert_eq!(
            validate(&board),
            Err(ValidationError::EmptyIdentityString {
                field: "image index URL",
            })
        );
    }

    #[test]
    pub fn rejects_overlong_volume_label() {
        let mut board = test_board();
        board.image.volume_label = "THIS_LABEL_IS_WAY_TOO_LONG";
        assert!(matches!(
            validate(&board),
            Err(ValidationError::InvalidVolumeLabel { .. })
        ));
    }

    #[test]
    pub fn volume_label_length_boundary() {
        let mut board = test_board();
        board.image.volume_label = "ELEVENCHARS";
        assert_eq!(validate(&board), Ok(()));

        board.image.volume_label = "TWELVECHARSX";
        assert!(validate(&board).is_err());
    }

    #[test]
    pub fn rejects_lowercase_volume_label() {
        let mut board = test_board();
        board.image.volume_label = "testboot";
        assert!(matches!(
            validate(&board),
            Err(ValidationError::InvalidVolumeLabel { .. })
        ));
    }

    #[test]
    pub fn rejects_zero_usb_identifiers() {
        let mut board = test_board();
        board.usb.vendor_id = 0;
        assert_eq!(
            validate(&board),
            Err(ValidationError::ZeroIdentifier {
                field: "USB vendor id",
            })
        );

        let mut board = test_board();
        board.usb.cdc_pid = 0;
        assert_eq!(
            validate(&board),
            Err(ValidationError::ZeroIdentifier {
                field: "USB CDC product id",
            })
        );
    }

    #[test]
    pub fn first_violation_wins() {
        // Both a count mismatch and a zero vendor id: the count check runs
        // first and masks the rest.
        let mut board = test_board();
        board.led_count = 3;
        board.usb.vendor_id = 0;
        assert!(matches!(
            validate(&board),
            Err(ValidationError::CountMismatch { .. })
        ));
    }
}
