//! Color names to display colors.
//!
//! The table is ordered. Lookups that miss the exact key fall back to the
//! first entry, in table order, that is a substring of the name or contains
//! it. Reordering entries therefore changes results: "dark red" resolves to
//! `red` only because `red` comes first.

use crate::hash::unsigned_hash;
use indexmap::IndexMap;
use log::trace;
use once_cell::sync::Lazy;

const COLOR_TABLE: &[(&str, &str)] = &[
    ("red", "#e74c3c"),
    ("ferrari red", "#ff2800"),
    ("blue", "#3498db"),
    ("dark blue", "#2c3e50"),
    ("navy", "#34495e"),
    ("green", "#27ae60"),
    ("black", "#1a1a2e"),
    ("white", "#bdc3c7"),
    ("silver", "#95a5a6"),
    ("grey", "#7f8c8d"),
    ("gray", "#7f8c8d"),
    ("dark grey", "#2c3e50"),
    ("dark gray", "#2c3e50"),
    ("saville grey", "#5d6d7e"),
    ("yellow", "#f1c40f"),
    ("orange", "#e67e22"),
    ("brown", "#795548"),
    ("beige", "#d7ccc8"),
    ("beach sand", "#d4a574"),
    ("gold", "#f39c12"),
    ("purple", "#9b59b6"),
    ("pink", "#e91e63"),
];

static PALETTE: Lazy<IndexMap<&'static str, &'static str>> =
    Lazy::new(|| COLOR_TABLE.iter().copied().collect());

const FALLBACK_SATURATION: u8 = 45;
const FALLBACK_LIGHTNESS: u8 = 45;

/// Maps a free-text color name to a CSS color. Never fails.
#[must_use]
pub fn resolve_color(name: &str) -> String {
    let lower = name.to_lowercase();

    if let Some(value) = PALETTE.get(lower.as_str()) {
        trace!("Color `{name}` matched exactly");
        return (*value).to_string();
    }

    if let Some((key, value)) = PALETTE
        .iter()
        .find(|(key, _)| lower.contains(**key) || key.contains(lower.as_str()))
    {
        trace!("Color `{name}` matched table entry `{key}`");
        return (*value).to_string();
    }

    let hash = unsigned_hash(name);
    trace!("Color `{name}` is unknown, deriving hue from hash {hash}");
    fallback_color(hash)
}

/// HSL color whose hue is `hash mod 360`.
#[must_use]
pub fn fallback_color(hash: u32) -> String {
    let h = hash % 360;
    format!("hsl({h}, {FALLBACK_SATURATION}%, {FALLBACK_LIGHTNESS}%)")
}

/// Known color names in table order.
pub fn known_colors() -> impl Iterator<Item = &'static str> {
    PALETTE.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::string_hash;
    use rstest::rstest;

    #[test]
    fn every_key_resolves_to_its_value() {
        for (key, value) in COLOR_TABLE {
            assert_eq!(*value, resolve_color(key), "{key}");
            assert_eq!(*value, resolve_color(&key.to_uppercase()), "{key}");
        }
    }

    #[test]
    fn known_colors_keep_table_order() {
        let keys: Vec<_> = known_colors().collect();
        assert_eq!(COLOR_TABLE.len(), keys.len());
        assert_eq!(Some(&"red"), keys.first());
        assert_eq!(Some(&"pink"), keys.last());
    }

    #[rstest]
    #[case("Saville Grey", "#5d6d7e")]
    #[case("FERRARI RED", "#ff2800")]
    #[case("Dark Grey", "#2c3e50")]
    #[case("Beach Sand", "#d4a574")]
    // substring matches, first entry in table order wins
    #[case("Metallic Silver", "#95a5a6")]
    #[case("dark red", "#e74c3c")]
    #[case("Midnight Blue", "#3498db")]
    #[case("bla", "#1a1a2e")]
    #[case("", "#e74c3c")]
    fn table_lookups(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(expected, resolve_color(name));
    }

    #[test]
    fn unknown_color_uses_hash_hue() {
        assert_eq!("hsl(320, 45%, 45%)", resolve_color("Mauve Unicorn"));
        let hue = string_hash("Mauve Unicorn").unsigned_abs() % 360;
        assert_eq!(format!("hsl({hue}, 45%, 45%)"), resolve_color("Mauve Unicorn"));
    }

    #[test]
    fn unknown_color_is_stable() {
        let first = resolve_color("Mauve Unicorn");
        for _ in 0..10 {
            assert_eq!(first, resolve_color("Mauve Unicorn"));
        }
    }

    #[test]
    fn fallback_hashes_raw_name() {
        // Lowercasing happens for table lookups only.
        assert_eq!(
            fallback_color(unsigned_hash("Mauve Unicorn")),
            resolve_color("Mauve Unicorn")
        );
        assert_ne!(resolve_color("Mauve Unicorn"), resolve_color("mauve unicorn"));
    }

    #[test]
    fn fallback_handles_minimum_hash() {
        assert_eq!("hsl(128, 45%, 45%)", resolve_color("polygenelubricants"));
    }
}
