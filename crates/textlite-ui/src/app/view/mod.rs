pub mod dialogs;
pub mod editor;
pub mod menu;
pub mod status;

use iced::widget::{Space, column, container, mouse_area, stack};
use iced::{Background, Element, Length};

use crate::app::{App, Message, Modal};
use crate::theme::{Palette, colors};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let palette = self.palette();

        let content = column![
            self.view_menu_bar(&palette),
            self.view_editor(&palette),
            self.view_status_bar(&palette),
        ];

        let main_view: Element<'_, Message> = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(palette.background)),
                ..Default::default()
            })
            .into();

        if let Some(modal) = &self.modal {
            let dialog = match modal {
                Modal::FontPicker(state) => self.view_font_picker(state, &palette),
                Modal::ColorPicker(state) => self.view_color_picker(state, &palette),
                Modal::Readme(text) => self.view_readme(text, &palette),
            };

            stack![
                main_view,
                mouse_area(backdrop()).on_press(Message::CloseModal),
                dialog,
            ]
            .into()
        } else if self.active_menu.is_some() {
            stack![
                mouse_area(
                    container(Space::new(Length::Fill, Length::Fill))
                        .width(Length::Fill)
                        .height(Length::Fill)
                )
                .on_press(Message::CloseTopMenu),
                main_view,
                self.view_menu_dropdown(&palette),
            ]
            .into()
        } else {
            main_view
        }
    }
}

/// Translucent layer behind a modal.
fn backdrop<'a>() -> Element<'a, Message> {
    container(Space::new(Length::Fill, Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_| container::Style {
            background: Some(Background::Color(colors::BACKDROP)),
            ..Default::default()
        })
        .into()
}

/// Centers a dialog body in a bordered box.
fn modal_frame<'a>(body: Element<'a, Message>, palette: &Palette) -> Element<'a, Message> {
    let palette = *palette;
    let dialog = container(body).padding(20).style(move |_| container::Style {
        background: Some(Background::Color(palette.menu_background)),
        text_color: Some(palette.menu_text),
        border: iced::Border {
            color: colors::BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    });

    container(dialog).center(Length::Fill).into()
}
