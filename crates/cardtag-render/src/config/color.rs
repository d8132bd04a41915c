//! Host color strings to CSS.
//!
//! Host colors are written `#RRGGBB` or `#AARRGGBB` (alpha first). The
//! 8-digit form becomes `rgba(r, g, b, a)`; everything else passes through
//! unchanged.

/// Converts a host color to a CSS color value.
///
/// ```rust
/// use cardtag_render::config::css_color;
///
/// assert_eq!(css_color("#B2000000"), "rgba(0, 0, 0, 0.70)");
/// assert_eq!(css_color("#FF0000"), "#FF0000");
/// assert_eq!(css_color("red"), "red");
/// ```
pub fn css_color(color: &str) -> String {
    match parse_argb(color) {
        Some([a, r, g, b]) => format!("rgba({}, {}, {}, {:.2})", r, g, b, f64::from(a) / 255.0),
        None => color.to_string(),
    }
}

fn parse_argb(color: &str) -> Option<[u8; 4]> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 8 || !hex.is_ascii() {
        return None;
    }

    let mut channels = [0u8; 4];
    for (i, channel) in channels.iter_mut().enumerate() {
        *channel = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok()?;
    }
    Some(channels)
}
