use serde::Serialize;

/// One reported color: hex string, RGB triple and the number of pixels that had it.
///
/// Only `hex` and `rgb` are serialized; the pixel count stays internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorSwatch {
    pub hex: String,
    pub rgb: [u8; 3],
    #[serde(skip)]
    pub count: u32,
}

impl ColorSwatch {
    pub fn new(rgb: [u8; 3], count: u32) -> Self {
        Self {
            hex: to_hex(rgb),
            rgb,
            count,
        }
    }
}

/// Format an RGB triple as lowercase `#rrggbb`.
pub fn to_hex([r, g, b]: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Parse `#rrggbb` (either case) back into an RGB triple.
pub fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}
