use iced::widget::{Space, container, horizontal_space, row, text};
use iced::{Background, Border, Element, Length, Padding};

use crate::app::{App, Message};
use crate::theme::{Palette, colors};

impl App {
    pub fn view_status_bar(&self, palette: &Palette) -> Element<'_, Message> {
        let palette = *palette;
        let status = self.editor.status_bar();

        let status_content = row![
            text(status.message.clone().unwrap_or_default())
                .size(12)
                .color(palette.text),
            horizontal_space(),
            text(status.position_label()).size(12).color(palette.text),
            Space::with_width(24),
            text(status.zoom_label()).size(12).color(palette.text),
            Space::with_width(24),
            text(status.line_ending_label()).size(12).color(palette.text),
            Space::with_width(24),
            text(status.encoding_label()).size(12).color(palette.text),
            Space::with_width(12),
        ]
        .padding(Padding::from([6, 12]))
        .align_y(iced::Alignment::Center);

        container(status_content)
            .width(Length::Fill)
            .height(28)
            .style(move |_| container::Style {
                background: Some(Background::Color(palette.background)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }
}
