//! Terminal color swatches.

use console::{Color, Style};

/// Parses `#rgb` or `#rrggbb`. Anything else (color functions, named
/// colors) is `None`.
///
/// ```rust
/// use swatchbook_cli::parse_hex;
///
/// assert_eq!(parse_hex("#2563eb"), Some((0x25, 0x63, 0xeb)));
/// assert_eq!(parse_hex("#fff"), Some((255, 255, 255)));
/// assert_eq!(parse_hex("rgba(0, 0, 0, 0.5)"), None);
/// ```
pub fn parse_hex(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => Some((
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        )),
        6 => Some((
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// Grays map onto the 24-step grayscale ramp, everything else onto the
/// 6x6x6 cube.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// A two-cell block painted with `value`, or dots when it is not a hex color.
pub fn swatch(value: &str) -> String {
    match parse_hex(value) {
        Some(rgb) => Style::new()
            .fg(Color::Color256(rgb_to_ansi256(rgb)))
            .apply_to("██")
            .to_string(),
        None => "··".to_string(),
    }
}
