//! Built-in mode definitions

mod btm;

use super::mode::ModeDefinition;

/// Get all built-in mode definitions
pub fn all_modes() -> Vec<ModeDefinition> {
    vec![btm::btm_mode()]
}
