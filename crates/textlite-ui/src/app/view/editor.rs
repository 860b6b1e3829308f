use iced::widget::{container, text, text_editor};
use iced::{Background, Border, Element, Length, Theme};

use crate::app::{App, Message};
use crate::theme::{Palette, colors};

impl App {
    /// The editing surface.
    pub fn view_editor(&self, palette: &Palette) -> Element<'_, Message> {
        let palette = *palette;
        let appearance = self.editor.appearance();
        let wrapping = if appearance.word_wrap() {
            text::Wrapping::Word
        } else {
            text::Wrapping::None
        };

        let editor = text_editor(&self.content)
            .on_action(Message::EditorAction)
            .font(self.font)
            .size(f32::from(appearance.font_size()))
            .wrapping(wrapping)
            .height(Length::Fill)
            .padding(6)
            .style(move |_: &Theme, _status| text_editor::Style {
                background: Background::Color(palette.background),
                border: Border::default(),
                icon: palette.text,
                placeholder: colors::TEXT_MUTED,
                value: palette.text,
                selection: colors::SELECTION,
            });

        container(editor)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
