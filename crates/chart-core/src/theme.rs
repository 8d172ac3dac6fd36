// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Page background behind the whole surface.
    pub background: skia::Color,
    /// Fill of the plot rect itself.
    pub panel: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 14, 17, 23),
            panel: skia::Color::from_argb(255, 26, 28, 35),
            grid: skia::Color::from_argb(255, 44, 47, 56),
            axis_line: skia::Color::from_argb(255, 122, 126, 138),
            axis_label: skia::Color::from_argb(255, 250, 250, 250),
            tick: skia::Color::from_argb(255, 157, 161, 173),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            panel: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
        }
    }
}

/// Return the list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive_with_dark_fallback() {
        assert_eq!(find("LIGHT").name, "light");
        assert_eq!(find("no-such-theme").name, "dark");
    }
}
