// SPDX-License-Identifier: GPL-3.0-only

//! Device orientation and its mapping to a visual rotation angle
//!
//! The overlay controls are rotated to stay upright relative to the user when
//! the device is rotated. Orientations outside the four cardinal states apply
//! no rotation.

/// Physical rotation state of the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Upright, home edge down
    #[default]
    Portrait,
    /// Rotated counter-clockwise, home edge to the right
    LandscapeLeft,
    /// Rotated clockwise, home edge to the left
    LandscapeRight,
    /// Upside down
    PortraitUpsideDown,
    /// Face up, face down, or not reported
    Unknown,
}

impl Orientation {
    /// The four selectable cardinal orientations
    pub const ALL: [Orientation; 4] = [
        Orientation::Portrait,
        Orientation::LandscapeLeft,
        Orientation::LandscapeRight,
        Orientation::PortraitUpsideDown,
    ];

    /// Rotation angle in degrees applied to the overlay controls
    pub fn rotation_degrees(self) -> f32 {
        match self {
            Orientation::Portrait => 0.0,
            Orientation::LandscapeLeft => 90.0,
            Orientation::LandscapeRight => -90.0,
            Orientation::PortraitUpsideDown => 180.0,
            Orientation::Unknown => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_mapping() {
        assert_eq!(Orientation::Portrait.rotation_degrees(), 0.0);
        assert_eq!(Orientation::LandscapeLeft.rotation_degrees(), 90.0);
        assert_eq!(Orientation::LandscapeRight.rotation_degrees(), -90.0);
        assert_eq!(Orientation::PortraitUpsideDown.rotation_degrees(), 180.0);
    }

    #[test]
    fn test_unknown_orientation_applies_no_rotation() {
        assert_eq!(Orientation::Unknown.rotation_degrees(), 0.0);
    }

    #[test]
    fn test_default_is_portrait() {
        assert_eq!(Orientation::default(), Orientation::Portrait);
    }
}
