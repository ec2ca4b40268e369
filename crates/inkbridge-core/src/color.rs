//! Color and size normalization for engine-reported font info.

use smol_str::{SmolStr, format_smolstr};

/// Convert an `rgb(r, g, b)` textual color to `#rrggbb`.
///
/// Takes the first three integer runs in order, so an `rgba(...)` alpha
/// component is dropped rather than rejected. Returns `None` when fewer
/// than three components are present or a component exceeds 255.
pub fn rgb_to_hex(rgb: &str) -> Option<SmolStr> {
    let mut components = rgb
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .map(|run| run.parse::<u8>());

    let r = components.next()?.ok()?;
    let g = components.next()?.ok()?;
    let b = components.next()?.ok()?;

    Some(format_smolstr!("#{r:02x}{g:02x}{b:02x}"))
}

/// Strip the trailing CSS unit from a size, keeping the numeric text as-is.
///
/// `"16px"` becomes `"16"`; no numeric parsing or rounding happens.
pub fn strip_size_unit(size: &str) -> SmolStr {
    SmolStr::new(size.trim_end_matches(|c: char| c.is_ascii_alphabetic()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex("rgb(255, 0, 128)").as_deref(), Some("#ff0080"));
        assert_eq!(rgb_to_hex("rgb(0, 0, 0)").as_deref(), Some("#000000"));
        // Alpha is dropped, not rejected
        assert_eq!(
            rgb_to_hex("rgba(18, 52, 86, 0)").as_deref(),
            Some("#123456")
        );
    }

    #[test]
    fn test_rgb_to_hex_rejects_malformed() {
        assert_eq!(rgb_to_hex(""), None);
        assert_eq!(rgb_to_hex("red"), None);
        assert_eq!(rgb_to_hex("rgb(255, 0)"), None);
        assert_eq!(rgb_to_hex("rgb(300, 0, 0)"), None);
    }

    #[test]
    fn test_strip_size_unit() {
        assert_eq!(strip_size_unit("16px"), "16");
        assert_eq!(strip_size_unit("13.5px"), "13.5");
        assert_eq!(strip_size_unit("2em"), "2");
        // Already unitless text passes through verbatim
        assert_eq!(strip_size_unit("16"), "16");
    }
}
