// File: crates/chart-core/src/palette.rs
// Summary: Named series color palettes with hex parsing and cycling lookup.

use skia_safe as skia;

#[derive(Clone, Debug)]
pub struct Palette {
    /// Stable token used in URLs and config.
    pub name: &'static str,
    /// Human-facing label shown in the UI.
    pub label: &'static str,
    pub colors: Vec<skia::Color>,
}

impl Palette {
    pub fn vibrant() -> Self {
        Self::build(
            "vibrant",
            "Vibrant",
            &["#FF4B4B", "#45B8FF", "#FFB703", "#51CF66", "#845EC2", "#FF6B6B", "#4C6EF5"],
        )
    }

    pub fn pastel() -> Self {
        Self::build(
            "pastel",
            "Pastel",
            &["#FFB3B3", "#BBEEFF", "#FFE5B4", "#C8F7C5", "#E0C3FC", "#FFD3D3", "#C5D8FF"],
        )
    }

    pub fn dark() -> Self {
        Self::build(
            "dark",
            "Dark",
            &["#1F1F1F", "#2C3E50", "#34495E", "#2E4053", "#283747", "#212F3C", "#1B2631"],
        )
    }

    pub fn earth_tones() -> Self {
        Self::build(
            "earth-tones",
            "Earth Tones",
            &["#8B4513", "#A0522D", "#6B8E23", "#556B2F", "#8B7355", "#CD853F", "#DEB887"],
        )
    }

    pub fn ocean() -> Self {
        Self::build(
            "ocean",
            "Ocean",
            &["#006994", "#4C516D", "#5C8374", "#00A9FF", "#0066CC", "#142850", "#1B4F72"],
        )
    }

    pub fn forest() -> Self {
        Self::build(
            "forest",
            "Forest",
            &["#228B22", "#355E3B", "#4F7942", "#2E8B57", "#3CB371", "#90EE90", "#98FB98"],
        )
    }

    fn build(name: &'static str, label: &'static str, hex: &[&str]) -> Self {
        let colors = hex.iter().filter_map(|h| parse_hex(h)).collect();
        Self { name, label, colors }
    }

    /// Color for series/slice `i`, cycling through the palette.
    pub fn color(&self, i: usize) -> skia::Color {
        if self.colors.is_empty() {
            return skia::Color::from_argb(255, 255, 255, 255);
        }
        self.colors[i % self.colors.len()]
    }

    /// Hex strings for UI swatch previews.
    pub fn hex_colors(&self) -> Vec<String> {
        self.colors.iter().map(|c| to_hex(*c)).collect()
    }
}

/// Return the list of built-in palette presets.
pub fn presets() -> Vec<Palette> {
    vec![
        Palette::vibrant(),
        Palette::pastel(),
        Palette::dark(),
        Palette::earth_tones(),
        Palette::ocean(),
        Palette::forest(),
    ]
}

/// Find a palette by token or label, falling back to Vibrant.
pub fn find(name: &str) -> Palette {
    for p in presets() {
        if p.name.eq_ignore_ascii_case(name) || p.label.eq_ignore_ascii_case(name) {
            return p;
        }
    }
    Palette::vibrant()
}

/// Parse a `#RRGGBB` hex color (leading '#' optional).
pub fn parse_hex(s: &str) -> Option<skia::Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some(skia::Color::from_argb(255, r, g, b))
}

/// Lowercase `#rrggbb` form of a color (alpha dropped).
pub fn to_hex(c: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrip() {
        let c = parse_hex("#FF4B4B").unwrap();
        assert_eq!(to_hex(c), "#ff4b4b");
        assert!(parse_hex("FF4B4B").is_some());
        assert!(parse_hex("#ff4b").is_none());
        assert!(parse_hex("#zzzzzz").is_none());
    }

    #[test]
    fn presets_have_seven_colors_each() {
        for p in presets() {
            assert_eq!(p.colors.len(), 7, "palette {}", p.name);
        }
    }

    #[test]
    fn find_accepts_token_or_label() {
        assert_eq!(find("earth-tones").name, "earth-tones");
        assert_eq!(find("Earth Tones").name, "earth-tones");
        assert_eq!(find("bogus").name, "vibrant");
    }

    #[test]
    fn colors_cycle() {
        let p = Palette::vibrant();
        assert_eq!(p.color(0), p.color(7));
    }
}
