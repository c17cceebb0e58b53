// SPDX-License-Identifier: GPL-3.0-only

//! Embedded overlay icon assets
//!
//! Icons are resolved by name. A name with no embedded asset resolves to an
//! empty placeholder; the lookup failure is logged and swallowed so the
//! overlay renders without its icon rather than failing.

use crate::errors::{AppError, AppResult};
use std::borrow::Cow;
use tracing::warn;

const FLASH_AUTO_ICON: &[u8] = include_bytes!("../resources/button_icons/flash-auto.svg");
const FLASH_ON_ICON: &[u8] = include_bytes!("../resources/button_icons/flash-on.svg");
const FLASH_OFF_ICON: &[u8] = include_bytes!("../resources/button_icons/flash-off.svg");
const CAMERA_SWITCH_ICON: &[u8] = include_bytes!("../resources/button_icons/camera-switch.svg");

/// Substituted when an icon name has no embedded asset
pub const PLACEHOLDER_ICON: &[u8] =
    br#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24"/>"#;

/// Edge length of the square icon canvas, shared by all button icons
const ICON_CANVAS: u32 = 24;

const ICONS: &[(&str, &[u8])] = &[
    ("flash-auto", FLASH_AUTO_ICON),
    ("flash-on", FLASH_ON_ICON),
    ("flash-off", FLASH_OFF_ICON),
    ("camera-switch", CAMERA_SWITCH_ICON),
];

/// Look up embedded icon bytes by name
pub fn icon_bytes(name: &str) -> &'static [u8] {
    match ICONS.iter().find(|(n, _)| *n == name) {
        Some((_, bytes)) => bytes,
        None => {
            warn!(name, "No embedded icon asset, substituting placeholder");
            PLACEHOLDER_ICON
        }
    }
}

/// Look up an icon and wrap it in a rotation transform
///
/// An angle of zero returns the asset unchanged. Rotation happens at the
/// asset level so the widget layer stays a plain icon. A malformed asset
/// falls back to the unrotated bytes.
pub fn rotated_icon_bytes(name: &str, degrees: f32) -> Cow<'static, [u8]> {
    let base = icon_bytes(name);
    if degrees == 0.0 {
        return Cow::Borrowed(base);
    }

    match wrap_in_rotation(name, base, degrees) {
        Ok(bytes) => Cow::Owned(bytes),
        Err(err) => {
            warn!(%err, "Falling back to unrotated icon");
            Cow::Borrowed(base)
        }
    }
}

fn wrap_in_rotation(name: &str, base: &[u8], degrees: f32) -> AppResult<Vec<u8>> {
    let doc = std::str::from_utf8(base)
        .map_err(|err| AppError::Asset(format!("{name} is not valid UTF-8: {err}")))?;

    let center = ICON_CANVAS as f32 / 2.0;
    let wrapped = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {canvas} {canvas}" width="{canvas}" height="{canvas}"><g transform="rotate({degrees} {center} {center})">{doc}</g></svg>"#,
        canvas = ICON_CANVAS,
    );
    Ok(wrapped.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_resolve_to_assets() {
        for name in ["flash-auto", "flash-on", "flash-off", "camera-switch"] {
            assert_ne!(icon_bytes(name), PLACEHOLDER_ICON, "missing asset: {name}");
        }
    }

    #[test]
    fn test_unknown_name_resolves_to_placeholder() {
        assert_eq!(icon_bytes("does-not-exist"), PLACEHOLDER_ICON);
    }

    #[test]
    fn test_zero_rotation_returns_asset_unchanged() {
        let bytes = rotated_icon_bytes("flash-on", 0.0);
        assert_eq!(bytes.as_ref(), icon_bytes("flash-on"));
    }

    #[test]
    fn test_rotation_wraps_asset_in_transform() {
        let bytes = rotated_icon_bytes("flash-on", 90.0);
        let doc = std::str::from_utf8(&bytes).unwrap();
        assert!(doc.contains("rotate(90 12 12)"));
        assert!(doc.contains(std::str::from_utf8(icon_bytes("flash-on")).unwrap()));
    }

    #[test]
    fn test_negative_rotation() {
        let bytes = rotated_icon_bytes("camera-switch", -90.0);
        let doc = std::str::from_utf8(&bytes).unwrap();
        assert!(doc.contains("rotate(-90 12 12)"));
    }
}
