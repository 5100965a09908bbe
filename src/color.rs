use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Hex colour parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("'{0}' is not a 6-digit hex colour")]
    InvalidHex(String),
    #[error("colour cycle is empty")]
    EmptyCycle,
}

/// Parse `RRGGBB`, with or without a leading `#`.
pub fn parse_hex(s: &str) -> Result<Color32, ColorError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(s.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColorError::InvalidHex(s.to_string()))
    };
    Ok(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

// ---------------------------------------------------------------------------
// ColorCycle: series index → Color32
// ---------------------------------------------------------------------------

/// Colours assigned to series in order, wrapping around.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorCycle {
    colors: Vec<Color32>,
}

impl ColorCycle {
    /// Build a cycle from hex strings. Fails on the first bad entry.
    pub fn from_hex<S: AsRef<str>>(hexes: &[S]) -> Result<Self, ColorError> {
        if hexes.is_empty() {
            return Err(ColorError::EmptyCycle);
        }
        let colors = hexes
            .iter()
            .map(|h| parse_hex(h.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ColorCycle { colors })
    }

    /// Evenly spaced hues, used when no custom cycle is available.
    pub fn fallback(n: usize) -> Self {
        ColorCycle {
            colors: generate_palette(n.max(1)),
        }
    }

    /// Colour for the `index`-th series.
    pub fn color_for(&self, index: usize) -> Color32 {
        self.colors[index % self.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        let p = generate_palette(5);
        assert_eq!(p.len(), 5);
        assert_ne!(p[0], p[1]);
    }

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(parse_hex("348ABD"), Ok(Color32::from_rgb(0x34, 0x8a, 0xbd)));
        assert_eq!(parse_hex("#e24a33"), Ok(Color32::from_rgb(0xe2, 0x4a, 0x33)));
    }

    #[test]
    fn rejects_bad_hex() {
        assert!(parse_hex("12345").is_err());
        assert!(parse_hex("GG0000").is_err());
        assert!(parse_hex("+12345").is_err());
    }

    #[test]
    fn cycle_wraps_around() {
        let cycle = ColorCycle::from_hex(&["000000", "ffffff"]).unwrap();
        assert_eq!(cycle.color_for(0), Color32::BLACK);
        assert_eq!(cycle.color_for(1), Color32::WHITE);
        assert_eq!(cycle.color_for(2), Color32::BLACK);
    }

    #[test]
    fn cycle_errors() {
        let empty: [&str; 0] = [];
        assert_eq!(ColorCycle::from_hex(&empty), Err(ColorError::EmptyCycle));
        assert_eq!(
            ColorCycle::from_hex(&["000000", "nope"]),
            Err(ColorError::InvalidHex("nope".into()))
        );
    }

    #[test]
    fn fallback_is_never_empty() {
        assert_eq!(ColorCycle::fallback(0).len(), 1);
        assert_eq!(ColorCycle::fallback(7).len(), 7);
    }
}
