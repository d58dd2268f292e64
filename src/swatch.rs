//! Hex formatting and parsing for palette swatches.

/// Format a packed color as `#RRGGBB`.
pub fn format_hex(rgb: u32) -> String {
    format!("#{:06X}", rgb & 0x00FF_FFFF)
}

/// Format a palette as space-separated `#RRGGBB` swatches.
pub fn format_palette(colors: &[u32]) -> String {
    colors
        .iter()
        .map(|c| format_hex(*c))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse `#RRGGBB`, `RRGGBB` or the shorthand `#RGB` into a packed color.
pub fn parse_hex_color(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        6 => u32::from_str_radix(hex, 16).ok(),
        3 => {
            let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
            u32::from_str_radix(&expanded, 16).ok()
        }
        _ => None,
    }
}
