// SPDX-License-Identifier: MPL-2.0
//! iced rendering of a bound surface.
//!
//! Layout: the video area on top, the progress track across the full width,
//! then a row with the toggle, the two range controls and the step buttons.
//! Pointer-driven targets (video, progress track) are wrapped in a
//! `mouse_area` inside a `responsive` so every pointer message carries the
//! target width.

use super::design_tokens::{opacity, palette, sizing, spacing};
use super::events::{Pointer, Target, UiEvent};
use super::template::{RangeInput, StepButton, Surface};
use super::Message;
use crate::domain::video::ProgressPercent;
use crate::i18n::fluent::I18n;
use iced::widget::{
    button, column, container, mouse_area, responsive, row, slider, text, tooltip, Row, Space,
    Text,
};
use iced::{Background, Color, Element, Length, Size, Theme};

pub(super) fn placeholder(i18n: &I18n) -> Element<'_, Message> {
    container(text(i18n.tr("player-no-surface")).size(sizing::LABEL_TEXT))
        .width(Length::Fill)
        .padding(spacing::XS)
        .into()
}

pub(super) fn surface<'a>(surface: &'a Surface, i18n: &'a I18n) -> Element<'a, Message> {
    let controls: Row<'a, Message> = row![
        toggle_button(surface, i18n),
        range_control(&surface.volume, Target::Volume, i18n.tr("player-volume-label")),
        range_control(&surface.rate, Target::Rate, i18n.tr("player-rate-label")),
        text(i18n.tr_with_args("player-rate-value", &[("rate", surface.rate.value)]))
            .size(sizing::LABEL_TEXT),
        Space::new().width(Length::Fill),
        step_button(&surface.step_backward, Target::StepBackward, i18n),
        step_button(&surface.step_forward, Target::StepForward, i18n),
    ]
    .spacing(spacing::XS)
    .padding(spacing::XS)
    .align_y(iced::Alignment::Center);

    let bar = container(column![progress_track(surface.progress.fill), controls])
        .width(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: opacity::CONTROLS,
                ..palette::BLACK
            })),
            ..Default::default()
        });

    column![video_area(surface), bar].width(Length::Fill).into()
}

fn video_area(surface: &Surface) -> Element<'_, Message> {
    let source = surface.video.source.as_str();
    let area = responsive(move |size: Size| {
        let width = size.width;
        let frame = container(text(source).color(palette::GRAY_400))
            .center(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(palette::GRAY_900)),
                ..Default::default()
            });

        pointer_area(frame.into(), Target::Video, width)
    });

    container(area)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn progress_track<'a>(fill: ProgressPercent) -> Element<'a, Message> {
    container(
        responsive(move |size: Size| {
            let width = size.width;
            let filled = container(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fixed(width * fill.fraction()))
                .height(Length::Fill)
                .style(|_theme: &Theme| container::Style {
                    background: Some(Background::Color(palette::ACCENT)),
                    ..Default::default()
                });

            let track = container(filled)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(|_theme: &Theme| container::Style {
                    background: Some(Background::Color(Color {
                        a: opacity::TRACK,
                        ..palette::WHITE
                    })),
                    ..Default::default()
                });

            pointer_area(track.into(), Target::ProgressTrack, width)
        }),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::PROGRESS_HEIGHT))
    .into()
}

/// Turns raw mouse activity over `content` into widget messages.
fn pointer_area<'a>(content: Element<'a, Message>, target: Target, width: f32) -> Element<'a, Message> {
    mouse_area(content)
        .on_move(move |point| Message::PointerMoved {
            target,
            offset_x: point.x,
            width,
        })
        .on_press(Message::PointerPressed(target))
        .on_release(Message::PointerReleased(target))
        .on_double_click(Message::DoubleClicked(target))
        .into()
}

fn toggle_button<'a>(surface: &'a Surface, i18n: &'a I18n) -> Element<'a, Message> {
    let content: Element<'a, Message> =
        button(text(surface.toggle.glyph.symbol()).size(sizing::GLYPH_TEXT))
            .on_press(activate(Target::Toggle))
            .padding(spacing::XXS)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .into();

    tooltip(
        content,
        Text::new(i18n.tr("player-toggle-tooltip")),
        tooltip::Position::Top,
    )
    .gap(4)
    .into()
}

fn range_control<'a>(range: &'a RangeInput, target: Target, label: String) -> Element<'a, Message> {
    let mut control = slider(range.min..=range.max, range.value, move |value| {
        Message::Interaction {
            target,
            event: UiEvent::ValueLive(value),
        }
    })
    .on_release(Message::ControlReleased(target))
    .width(Length::Fixed(sizing::RANGE_WIDTH));

    // A non-positive step would freeze the slider.
    if range.step > 0.0 {
        control = control.step(range.step);
    }

    row![text(label).size(sizing::LABEL_TEXT), control]
        .spacing(spacing::XXS)
        .align_y(iced::Alignment::Center)
        .into()
}

fn step_button<'a>(step: &'a StepButton, target: Target, i18n: &'a I18n) -> Element<'a, Message> {
    let tooltip_key = match target {
        Target::StepBackward => "player-step-backward-tooltip",
        _ => "player-step-forward-tooltip",
    };
    let content: Element<'a, Message> = button(text(step.label.as_str()).size(sizing::LABEL_TEXT))
        .on_press(activate(target))
        .padding(spacing::XXS)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .into();

    tooltip(
        content,
        Text::new(i18n.tr_with_args(tooltip_key, &[("seconds", step.seconds)])),
        tooltip::Position::Top,
    )
    .gap(4)
    .into()
}

fn activate(target: Target) -> Message {
    Message::Interaction {
        target,
        event: UiEvent::Activate(Pointer::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetConfig;
    use crate::host::HostPage;
    use crate::widget::template;

    fn rendered() -> Surface {
        let mut page = HostPage::new();
        let id = page.insert_first(page.body()).expect("body exists");
        template::render(id, "a.mp4", &WidgetConfig::default(), 1.0)
    }

    #[test]
    fn activate_carries_no_pointer() {
        assert_eq!(
            activate(Target::StepForward),
            Message::Interaction {
                target: Target::StepForward,
                event: UiEvent::Activate(Pointer::default()),
            }
        );
    }

    #[test]
    fn surface_renders() {
        let i18n = I18n::default();
        let surface = rendered();
        let _element = super::surface(&surface, &i18n);
    }

    #[test]
    fn surface_renders_with_zero_steps() {
        let i18n = I18n::default();
        let mut surface = rendered();
        surface.volume.step = 0.0;
        surface.rate.step = -1.0;
        let _element = super::surface(&surface, &i18n);
    }

    #[test]
    fn placeholder_renders() {
        let i18n = I18n::default();
        let _element = placeholder(&i18n);
    }
}
