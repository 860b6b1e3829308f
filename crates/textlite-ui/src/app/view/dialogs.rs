use iced::widget::{
    Column, Row, Space, button, column, container, horizontal_space, row, scrollable, text,
    text_input,
};
use iced::{Background, Border, Color, Element, Font, Length, Padding, Theme};
use textlite_core::FontPicker;
use textlite_core::color::PALETTE;

use super::modal_frame;
use crate::app::{App, ColorPickerState, FontPickerState, Message};
use crate::theme::{Palette, colors, to_iced};

const SWATCHES_PER_ROW: usize = 8;
const APPLY_LABEL: &str = "Apply";

/// A selectable row in a picker list.
fn list_entry<'a>(label: String, selected: bool, msg: Message, palette: Palette) -> Element<'a, Message> {
    button(text(label).size(13))
        .width(Length::Fill)
        .padding(Padding::from([3, 8]))
        .style(move |_: &Theme, status: button::Status| {
            let bg = if selected {
                palette.menu_active
            } else {
                match status {
                    button::Status::Hovered => palette.menu_active,
                    _ => Color::TRANSPARENT,
                }
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

/// Bordered, scrollable list box.
fn list_box<'a>(items: Vec<Element<'a, Message>>, width: f32, palette: Palette) -> Element<'a, Message> {
    container(scrollable(Column::with_children(items)).height(Length::Fixed(220.0)))
        .width(Length::Fixed(width))
        .style(move |_| container::Style {
            background: Some(Background::Color(palette.background)),
            border: Border {
                color: colors::BORDER,
                width: 1.0,
                radius: 2.0.into(),
            },
            ..Default::default()
        })
        .into()
}

/// Apply / Cancel row. Apply is disabled when `apply` is `None`.
fn dialog_buttons<'a>(apply: Option<Message>, palette: Palette) -> Element<'a, Message> {
    let styled = move |label: &'static str| {
        button(text(label).size(13))
            .padding(Padding::from([6, 18]))
            .style(move |_: &Theme, status: button::Status| {
                let bg = match status {
                    button::Status::Hovered => palette.menu_active,
                    _ => palette.background,
                };
                button::Style {
                    background: Some(Background::Color(bg)),
                    text_color: match status {
                        button::Status::Disabled => colors::TEXT_MUTED,
                        _ => palette.menu_text,
                    },
                    border: Border {
                        color: colors::BORDER,
                        width: 1.0,
                        radius: 4.0.into(),
                    },
                    ..Default::default()
                }
            })
    };

    row![
        horizontal_space(),
        styled(APPLY_LABEL).on_press_maybe(apply),
        Space::with_width(8),
        styled("Cancel").on_press(Message::CloseModal),
    ]
    .into()
}

impl App {
    pub fn view_font_picker(&self, state: &FontPickerState, palette: &Palette) -> Element<'_, Message> {
        let palette = *palette;
        let picker = &state.picker;

        let families: Vec<Element<'_, Message>> = picker
            .families()
            .iter()
            .enumerate()
            .map(|(index, name)| {
                list_entry(
                    name.clone(),
                    picker.selected_family() == Some(index),
                    Message::FontFamilySelected(index),
                    palette,
                )
            })
            .collect();

        let sizes: Vec<Element<'_, Message>> = FontPicker::SIZES
            .iter()
            .enumerate()
            .map(|(index, size)| {
                list_entry(
                    size.to_string(),
                    picker.selected_size() == Some(index),
                    Message::FontSizeSelected(index),
                    palette,
                )
            })
            .collect();

        let preview = picker.preview();
        let sample = container(
            text(FontPicker::SAMPLE_TEXT)
                .font(state.preview_font)
                .size(f32::from(preview.size))
                .color(palette.text),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fixed(80.0))
        .style(move |_| container::Style {
            background: Some(Background::Color(palette.background)),
            border: Border {
                color: colors::BORDER,
                width: 1.0,
                radius: 2.0.into(),
            },
            ..Default::default()
        });

        let body = column![
            text("Font").size(16),
            Space::with_height(12),
            row![
                column![text("Family").size(12), list_box(families, 260.0, palette)].spacing(4),
                Space::with_width(12),
                column![text("Size").size(12), list_box(sizes, 70.0, palette)].spacing(4),
            ],
            Space::with_height(12),
            text(format!("Sample: {} {}pt", preview.family, preview.size)).size(12),
            Space::with_height(4),
            sample,
            Space::with_height(16),
            dialog_buttons(Some(Message::ApplyFont), palette),
        ]
        .width(Length::Fixed(360.0));

        modal_frame(body.into(), &palette)
    }

    pub fn view_color_picker(&self, state: &ColorPickerState, palette: &Palette) -> Element<'_, Message> {
        let palette = *palette;
        let current = state.color();

        let swatch_rows: Vec<Element<'_, Message>> = PALETTE
            .chunks(SWATCHES_PER_ROW)
            .map(|chunk| {
                let swatches: Vec<Element<'_, Message>> = chunk
                    .iter()
                    .map(|&(_, color)| {
                        let selected = current == Some(color);
                        button(Space::new(Length::Fixed(26.0), Length::Fixed(26.0)))
                            .padding(0)
                            .style(move |_: &Theme, _status: button::Status| button::Style {
                                background: Some(Background::Color(to_iced(color))),
                                border: Border {
                                    color: if selected { colors::ACCENT } else { colors::BORDER },
                                    width: if selected { 3.0 } else { 1.0 },
                                    radius: 3.0.into(),
                                },
                                ..Default::default()
                            })
                            .on_press(Message::ColorSwatchSelected(color))
                            .into()
                    })
                    .collect();
                Row::with_children(swatches).spacing(6).into()
            })
            .collect();

        let preview_color = current.map(to_iced);
        let preview = container(Space::new(Length::Fixed(60.0), Length::Fixed(26.0))).style(move |_| {
            container::Style {
                background: preview_color.map(Background::Color),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 3.0.into(),
                },
                ..Default::default()
            }
        });

        let body = column![
            text("Font Color").size(16),
            Space::with_height(12),
            Column::with_children(swatch_rows).spacing(6),
            Space::with_height(12),
            row![
                text_input("#RRGGBB", &state.input)
                    .on_input(Message::ColorInputChanged)
                    .width(Length::Fixed(120.0))
                    .padding(4),
                Space::with_width(12),
                preview,
            ]
            .align_y(iced::Alignment::Center),
            Space::with_height(16),
            dialog_buttons(current.map(|_| Message::ApplyColor), palette),
        ]
        .width(Length::Fixed(280.0));

        modal_frame(body.into(), &palette)
    }

    pub fn view_readme<'a>(&'a self, contents: &'a str, palette: &Palette) -> Element<'a, Message> {
        let palette = *palette;

        let body = column![
            text("Readme").size(16),
            Space::with_height(12),
            container(
                scrollable(
                    container(text(contents).font(Font::MONOSPACE).size(13).color(palette.text))
                        .padding(8)
                )
                .height(Length::Fixed(380.0))
            )
            .style(move |_| container::Style {
                background: Some(Background::Color(palette.background)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 2.0.into(),
                },
                ..Default::default()
            }),
            Space::with_height(16),
            row![
                horizontal_space(),
                button(text("Close").size(13))
                    .padding(Padding::from([6, 18]))
                    .on_press(Message::CloseModal),
            ],
        ]
        .width(Length::Fixed(560.0));

        modal_frame(body.into(), &palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pickers_confirm_with_apply() {
        assert_eq!(APPLY_LABEL, "Apply");
    }
}
