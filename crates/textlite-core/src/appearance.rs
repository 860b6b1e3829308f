//! Appearance state: font, text color, theme, zoom and word wrap.
//!
//! Appearance lives for the session only. It survives New/Open but is not
//! written anywhere on exit.

use tracing::debug;

use crate::color::Rgb;
use crate::config::{EditorConfig, UiConfig};
use crate::fonts::FontChoice;

/// Points added or removed by one zoom step.
pub const ZOOM_STEP: u16 = 2;

/// Zooming out never goes below this size.
pub const MIN_FONT_SIZE: u16 = 1;

/// Colors for every surface the application draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    /// Text color of the editing surface and status bar
    pub foreground: Rgb,
    /// Window, editing surface and status bar background
    pub background: Rgb,
    /// Menu bar and dropdown background
    pub menu_background: Rgb,
    /// Menu label color
    pub menu_foreground: Rgb,
    /// Background of the hovered or open menu entry
    pub menu_active_background: Rgb,
}

impl ColorScheme {
    /// Black on white.
    pub const LIGHT: ColorScheme = ColorScheme {
        foreground: Rgb::BLACK,
        background: Rgb::WHITE,
        menu_background: Rgb::new(0xF0, 0xF0, 0xF0),
        menu_foreground: Rgb::BLACK,
        menu_active_background: Rgb::new(0xCC, 0xE8, 0xFF),
    };

    /// Neon green on black.
    pub const DARK: ColorScheme = ColorScheme {
        foreground: Rgb::NEON_GREEN,
        background: Rgb::BLACK,
        menu_background: Rgb::BLACK,
        menu_foreground: Rgb::NEON_GREEN,
        menu_active_background: Rgb::DARK_GREEN,
    };
}

/// Current look of the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    font_family: String,
    font_size: u16,
    /// The 100% zoom reference
    default_font_size: u16,
    /// Foreground of the light scheme, from config
    light_foreground: Rgb,
    /// Color picked by the user; wins over either scheme
    font_color: Option<Rgb>,
    dark: bool,
    word_wrap: bool,
}

impl Appearance {
    /// Builds the startup appearance from config.
    pub fn from_config(ui: &UiConfig, editor: &EditorConfig) -> Self {
        let light_foreground = ui.font_color.parse().unwrap_or_else(|err| {
            tracing::warn!("{}; using black", err);
            Rgb::BLACK
        });
        let font_size = ui.font_size.max(MIN_FONT_SIZE);

        Self {
            font_family: ui.font_family.clone(),
            font_size,
            default_font_size: font_size,
            light_foreground,
            font_color: None,
            dark: ui.dark_mode,
            word_wrap: editor.word_wrap,
        }
    }

    // ==================== Font ====================

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Applies a font picker result.
    pub fn set_font(&mut self, choice: FontChoice) {
        debug!("Font set to {} {}pt", choice.family, choice.size);
        self.font_family = choice.family;
        self.font_size = choice.size.max(MIN_FONT_SIZE);
    }

    // ==================== Zoom ====================

    pub fn zoom_in(&mut self) {
        self.font_size = self.font_size.saturating_add(ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.font_size = self.font_size.saturating_sub(ZOOM_STEP).max(MIN_FONT_SIZE);
    }

    /// Current size relative to the configured size, rounded.
    pub fn zoom_percent(&self) -> u32 {
        let size = u32::from(self.font_size);
        let base = u32::from(self.default_font_size.max(1));
        (size * 100 + base / 2) / base
    }

    // ==================== Colors ====================

    /// The active scheme, with the picked font color applied.
    pub fn scheme(&self) -> ColorScheme {
        let mut scheme = if self.dark {
            ColorScheme::DARK
        } else {
            ColorScheme {
                foreground: self.light_foreground,
                ..ColorScheme::LIGHT
            }
        };
        if let Some(color) = self.font_color {
            scheme.foreground = color;
        }
        scheme
    }

    /// The text foreground in effect.
    pub fn font_color(&self) -> Rgb {
        self.scheme().foreground
    }

    pub fn set_font_color(&mut self, color: Rgb) {
        debug!("Font color set to {}", color);
        self.font_color = Some(color);
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark = !self.dark;
    }

    // ==================== Wrapping ====================

    pub fn word_wrap(&self) -> bool {
        self.word_wrap
    }

    pub fn toggle_word_wrap(&mut self) {
        self.word_wrap = !self.word_wrap;
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::from_config(&UiConfig::default(), &EditorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zoom_steps_by_two() {
        let mut appearance = Appearance::default();
        assert_eq!(appearance.font_size(), 11);
        appearance.zoom_in();
        assert_eq!(appearance.font_size(), 13);
        appearance.zoom_out();
        appearance.zoom_out();
        assert_eq!(appearance.font_size(), 9);
    }

    #[test]
    fn test_zoom_out_clamps() {
        let mut appearance = Appearance::default();
        for _ in 0..20 {
            appearance.zoom_out();
        }
        assert_eq!(appearance.font_size(), MIN_FONT_SIZE);
    }

    #[test]
    fn test_zoom_percent() {
        let ui = UiConfig {
            font_size: 10,
            ..UiConfig::default()
        };
        let mut appearance = Appearance::from_config(&ui, &EditorConfig::default());
        assert_eq!(appearance.zoom_percent(), 100);
        appearance.zoom_in();
        assert_eq!(appearance.zoom_percent(), 120);
    }

    #[test]
    fn test_dark_mode_colors() {
        let mut appearance = Appearance::default();
        assert_eq!(appearance.scheme(), ColorScheme::LIGHT);

        appearance.toggle_dark_mode();
        let scheme = appearance.scheme();
        assert_eq!(scheme.foreground, Rgb::NEON_GREEN);
        assert_eq!(scheme.background, Rgb::BLACK);
        assert_eq!(scheme.menu_active_background, Rgb::DARK_GREEN);
    }

    #[test]
    fn test_picked_color_survives_theme_toggle() {
        let red = Rgb::new(0xFF, 0, 0);
        let mut appearance = Appearance::default();
        appearance.set_font_color(red);
        appearance.toggle_dark_mode();
        assert_eq!(appearance.font_color(), red);
        assert_eq!(appearance.scheme().background, Rgb::BLACK);
        appearance.toggle_dark_mode();
        assert_eq!(appearance.font_color(), red);
    }

    #[test]
    fn test_bad_config_color_falls_back() {
        let ui = UiConfig {
            font_color: "not-a-color".to_string(),
            ..UiConfig::default()
        };
        let appearance = Appearance::from_config(&ui, &EditorConfig::default());
        assert_eq!(appearance.font_color(), Rgb::BLACK);
    }

    proptest! {
        #[test]
        fn zoom_in_then_out_restores_size(start in 1u16..200, steps in 0usize..50) {
            let ui = UiConfig { font_size: start, ..UiConfig::default() };
            let mut appearance = Appearance::from_config(&ui, &EditorConfig::default());
            for _ in 0..steps {
                appearance.zoom_in();
            }
            for _ in 0..steps {
                appearance.zoom_out();
            }
            prop_assert_eq!(appearance.font_size(), start);
        }

        #[test]
        fn double_toggle_restores_scheme(dark in any::<bool>()) {
            let ui = UiConfig { dark_mode: dark, ..UiConfig::default() };
            let mut appearance = Appearance::from_config(&ui, &EditorConfig::default());
            let before = appearance.scheme();
            appearance.toggle_dark_mode();
            appearance.toggle_dark_mode();
            prop_assert_eq!(appearance.scheme(), before);
        }
    }
}
