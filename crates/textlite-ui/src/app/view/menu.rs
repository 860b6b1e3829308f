use iced::widget::{Column, Row, Space, button, column, container, horizontal_space, row, text};
use iced::{Background, Border, Color, Element, Length, Padding, Theme};
use textlite_core::command::MENUS;
use textlite_core::{Command, MenuEntry};

use crate::app::{App, Message};
use crate::theme::{Palette, colors};

/// Height of the menu bar; dropdowns open below it.
const MENU_BAR_HEIGHT: f32 = 30.0;
const MENU_WIDTH: f32 = 240.0;

/// Approximate width of a menu title button at size 13.
fn title_width(title: &str) -> f32 {
    title.chars().count() as f32 * 7.5 + 20.0
}

impl App {
    pub fn view_menu_bar(&self, palette: &Palette) -> Element<'_, Message> {
        let palette = *palette;
        let mut menu_items: Vec<Element<'_, Message>> = Vec::new();

        for (index, menu) in MENUS.iter().enumerate() {
            let is_active = self.active_menu == Some(index);

            let menu_btn = button(text(menu.title).size(13).color(palette.menu_text))
                .padding(Padding::from([5, 10]))
                .style(move |_: &Theme, status: button::Status| {
                    let bg = if is_active {
                        palette.menu_active
                    } else {
                        match status {
                            button::Status::Hovered => palette.menu_active,
                            _ => palette.menu_background,
                        }
                    };
                    button::Style {
                        background: Some(Background::Color(bg)),
                        text_color: palette.menu_text,
                        border: Border::default(),
                        ..Default::default()
                    }
                })
                .on_press(Message::ToggleTopMenu(index));

            menu_items.push(menu_btn.into());
        }

        menu_items.push(horizontal_space().into());

        let bar = Row::with_children(menu_items)
            .padding(Padding::from([0, 4]))
            .align_y(iced::Alignment::Center);

        container(bar)
            .width(Length::Fill)
            .height(Length::Fixed(MENU_BAR_HEIGHT))
            .align_y(iced::alignment::Vertical::Center)
            .style(move |_| container::Style {
                background: Some(Background::Color(palette.menu_background)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    /// One dropdown entry with its accelerator on the right.
    fn menu_item<'a>(label: String, shortcut: String, msg: Message, palette: Palette) -> Element<'a, Message> {
        button(
            row![
                text(label).size(13).color(palette.menu_text),
                horizontal_space(),
                text(shortcut).size(12).color(colors::TEXT_MUTED),
            ]
            .width(Length::Fill)
            .align_y(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([5, 16]))
        .style(move |_: &Theme, status: button::Status| {
            let bg = match status {
                button::Status::Hovered => palette.menu_active,
                _ => Color::TRANSPARENT,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: palette.menu_text,
                border: Border::default(),
                ..Default::default()
            }
        })
        .on_press(msg)
        .into()
    }

    fn menu_separator<'a>() -> Element<'a, Message> {
        container(Space::new(Length::Fill, 1))
            .padding(Padding::from([4, 8]))
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BORDER)),
                ..Default::default()
            })
            .into()
    }

    /// Label for a menu entry; toggles carry a check mark when on.
    fn menu_label(&self, command: Command) -> String {
        let appearance = self.editor.appearance();
        let checked = match command {
            Command::ToggleWordWrap => appearance.word_wrap(),
            Command::ToggleDarkMode => appearance.is_dark(),
            _ => false,
        };
        if checked {
            format!("\u{2713} {}", command.display_name())
        } else {
            command.display_name().to_string()
        }
    }

    pub fn view_menu_dropdown(&self, palette: &Palette) -> Element<'_, Message> {
        let Some(index) = self.active_menu else {
            return Space::new(0, 0).into();
        };
        let Some(menu) = MENUS.get(index) else {
            return Space::new(0, 0).into();
        };
        let palette = *palette;

        let items: Vec<Element<'_, Message>> = menu
            .entries
            .iter()
            .map(|entry| match *entry {
                MenuEntry::Item(command) => {
                    let shortcut = self
                        .editor
                        .keymap()
                        .accelerator(command)
                        .map(|key| key.to_string())
                        .unwrap_or_default();
                    Self::menu_item(
                        self.menu_label(command),
                        shortcut,
                        Message::Command(command),
                        palette,
                    )
                }
                MenuEntry::Separator => Self::menu_separator(),
            })
            .collect();

        let menu_content = Column::with_children(items)
            .width(Length::Fixed(MENU_WIDTH))
            .padding(4);

        let menu_offset_x: f32 = 4.0 + MENUS[..index].iter().map(|m| title_width(m.title)).sum::<f32>();

        let menu_box = container(menu_content).style(move |_| container::Style {
            background: Some(Background::Color(palette.menu_background)),
            border: Border {
                color: colors::BORDER,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        });

        column![
            Space::with_height(Length::Fixed(MENU_BAR_HEIGHT)),
            row![Space::with_width(Length::Fixed(menu_offset_x)), menu_box],
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropdowns_open_left_to_right() {
        let offsets: Vec<f32> = (0..MENUS.len())
            .map(|i| MENUS[..i].iter().map(|m| title_width(m.title)).sum())
            .collect();
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    }
}
