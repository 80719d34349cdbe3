//! Panic hook that gives the terminal back before the report is printed.

use super::setup::emergency_restore;
use std::panic;

/// Wrap the current panic hook (color-eyre's, once installed) so the
/// terminal leaves raw mode first and the report is readable.
pub fn setup_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        emergency_restore();
        previous(info);
    }));
}
