//! Deterministic per-author message colors.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Map a name to a hue in `0..360`.
///
/// `hash = hash * 31 + unit` over UTF-16 code units with wrapping `u32`
/// arithmetic, so hues match what a JS `charCodeAt` loop yields for the same
/// name. No collision resistance is intended.
#[must_use]
pub fn hue_for_name(name: &str) -> u16 {
    let hash = name
        .encode_utf16()
        .fold(0u32, |hash, unit| hash.wrapping_mul(31).wrapping_add(u32::from(unit)));
    // Always < 360.
    u16::try_from(hash % 360).unwrap_or_default()
}

/// Translucent border color for a message card of the given hue.
#[must_use]
pub fn border_color(hue: u16) -> String {
    format!("hsla({hue}, 85%, 55%, 0.35)")
}

/// Faint background tint for a message card of the given hue.
#[must_use]
pub fn background_color(hue: u16) -> String {
    format!("hsla({hue}, 85%, 55%, 0.10)")
}
