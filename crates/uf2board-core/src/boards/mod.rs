//! Built-in board definitions.
//!
//! One module per supported board. Adding a board means adding a module
//! with a `pub static` descriptor and listing it in [`all`]; the registry
//! validates every entry at startup and refuses to initialize over a bad
//! one, so a broken definition fails the build/flash pipeline instead of
//! shipping.

pub mod cyber60_d;
pub mod ebyte_e104_bt5040u;
pub mod libra_mini;

pub use cyber60_d::CYBER60_D;
pub use ebyte_e104_bt5040u::EBYTE_E104_BT5040U;
pub use libra_mini::LIBRA_MINI;

use crate::descriptor::BoardDescriptor;

static ALL: &[&BoardDescriptor] = &[&LIBRA_MINI, &EBYTE_E104_BT5040U, &CYBER60_D];

/// Every board compiled into this build, in registration order.
pub fn all() -> &'static [&'static BoardDescriptor] {
    ALL
}
