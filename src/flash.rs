// SPDX-License-Identifier: GPL-3.0-only

//! Flash mode selection for photo capture
//!
//! The flash button cycles through a fixed, ordered set of modes. The mode
//! names are part of the external contract (they are reported verbatim when
//! the mode changes) and are deliberately not localized.

use serde::{Deserialize, Serialize};

/// Flash operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlashMode {
    /// Flash fires automatically based on scene brightness
    #[default]
    Auto,
    /// Flash always fires
    On,
    /// Flash never fires
    Off,
}

impl FlashMode {
    /// All modes in activation order
    pub const ALL: [FlashMode; 3] = [FlashMode::Auto, FlashMode::On, FlashMode::Off];

    /// Cycle to the next mode: Auto -> On -> Off -> Auto
    pub fn next(self) -> Self {
        match self {
            FlashMode::Auto => FlashMode::On,
            FlashMode::On => FlashMode::Off,
            FlashMode::Off => FlashMode::Auto,
        }
    }

    /// Position of this mode in the activation cycle
    pub fn index(self) -> usize {
        match self {
            FlashMode::Auto => 0,
            FlashMode::On => 1,
            FlashMode::Off => 2,
        }
    }

    /// Mode name shown on the flash button and reported on change
    pub fn label(self) -> &'static str {
        match self {
            FlashMode::Auto => "AUTO",
            FlashMode::On => "ON",
            FlashMode::Off => "OFF",
        }
    }

    /// Name of the embedded icon asset for this mode
    pub fn icon_name(self) -> &'static str {
        match self {
            FlashMode::Auto => "flash-auto",
            FlashMode::On => "flash-on",
            FlashMode::Off => "flash-off",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_order() {
        assert_eq!(FlashMode::Auto.next(), FlashMode::On);
        assert_eq!(FlashMode::On.next(), FlashMode::Off);
        assert_eq!(FlashMode::Off.next(), FlashMode::Auto);
    }

    #[test]
    fn test_labels_in_cyclic_order() {
        let labels: Vec<&str> = FlashMode::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, ["AUTO", "ON", "OFF"]);
    }

    #[test]
    fn test_index_matches_position_in_all() {
        for (i, mode) in FlashMode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), i);
        }
    }

    #[test]
    fn test_default_is_auto() {
        assert_eq!(FlashMode::default(), FlashMode::Auto);
    }
}
