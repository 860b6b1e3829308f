use std::path::PathBuf;

use iced::Font;
use textlite_core::config::Config;
use textlite_core::{FontPicker, Rgb};

/// Startup options from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// File to open once the window is up
    pub file: Option<PathBuf>,
    pub config: Config,
}

/// The in-window modal currently shown over the editor.
#[derive(Debug, Clone)]
pub enum Modal {
    FontPicker(FontPickerState),
    ColorPicker(ColorPickerState),
    /// Read-only readme viewer
    Readme(String),
}

/// Font picker plus the iced font used for its sample text.
#[derive(Debug, Clone)]
pub struct FontPickerState {
    pub picker: FontPicker,
    pub preview_font: Font,
}

/// Color picker: a palette of swatches and a hex input.
///
/// The input is kept as typed. Only a parseable value can be applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPickerState {
    pub input: String,
    parsed: Option<Rgb>,
}

impl ColorPickerState {
    pub fn new(current: Rgb) -> Self {
        Self {
            input: current.to_hex(),
            parsed: Some(current),
        }
    }

    /// A swatch was clicked.
    pub fn select(&mut self, color: Rgb) {
        self.input = color.to_hex();
        self.parsed = Some(color);
    }

    /// The hex input changed.
    pub fn edit(&mut self, input: String) {
        self.parsed = input.trim().parse().ok();
        self.input = input;
    }

    /// The color that Apply would set, if the input is valid.
    pub fn color(&self) -> Option<Rgb> {
        self.parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_picker_starts_on_current_color() {
        let state = ColorPickerState::new(Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(state.input, "#123456");
        assert_eq!(state.color(), Some(Rgb::new(0x12, 0x34, 0x56)));
    }

    #[test]
    fn test_color_picker_tracks_input_validity() {
        let mut state = ColorPickerState::new(Rgb::BLACK);

        state.edit("#FF00".to_string());
        assert_eq!(state.color(), None);

        state.edit("#ff0000".to_string());
        assert_eq!(state.color(), Some(Rgb::new(0xFF, 0x00, 0x00)));

        state.select(Rgb::WHITE);
        assert_eq!(state.input, "#FFFFFF");
        assert_eq!(state.color(), Some(Rgb::WHITE));
    }
}
