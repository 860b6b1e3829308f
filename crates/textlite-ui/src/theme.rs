//! Window colors.
//!
//! The core decides *which* colors apply (light or dark, picked text color).
//! This module only converts them into iced types, so the view never has to
//! know how a scheme was chosen:
//! ```rust,ignore
//! let palette = Palette::from_scheme(editor.appearance().scheme());
//! text("Ln 1, Col 1").color(palette.text);
//! ```

use iced::Color;
use textlite_core::{ColorScheme, Rgb};

/// Colors that do not depend on the theme.
pub mod colors {
    use iced::Color;

    pub const BORDER: Color = Color::from_rgb(0.55, 0.55, 0.55);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.45, 0.45, 0.45);
    pub const BACKDROP: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.5);
    pub const SELECTION: Color = Color::from_rgba(0.2, 0.5, 0.9, 0.35);
    pub const ACCENT: Color = Color::from_rgb(0.0, 0.47, 0.84);
}

/// Converts a core color into an iced color.
pub fn to_iced(rgb: Rgb) -> Color {
    let [r, g, b] = rgb.to_f32();
    Color::from_rgb(r, g, b)
}

/// The scheme in iced colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Editing surface and status bar text
    pub text: Color,
    pub background: Color,
    pub menu_background: Color,
    pub menu_text: Color,
    /// Hovered or open menu entry
    pub menu_active: Color,
}

impl Palette {
    pub fn from_scheme(scheme: ColorScheme) -> Self {
        Self {
            text: to_iced(scheme.foreground),
            background: to_iced(scheme.background),
            menu_background: to_iced(scheme.menu_background),
            menu_text: to_iced(scheme.menu_foreground),
            menu_active: to_iced(scheme.menu_active_background),
        }
    }

    /// Base iced theme, used for widgets the palette does not style.
    pub fn iced_theme(dark: bool) -> iced::Theme {
        if dark {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_palette_is_green_on_black() {
        let palette = Palette::from_scheme(ColorScheme::DARK);
        assert_eq!(palette.text, Color::from_rgb(0.0, 1.0, 0.0));
        assert_eq!(palette.background, Color::BLACK);
    }

    #[test]
    fn test_light_palette_is_black_on_white() {
        let palette = Palette::from_scheme(ColorScheme::LIGHT);
        assert_eq!(palette.text, Color::BLACK);
        assert_eq!(palette.background, Color::WHITE);
    }
}
