use std::fmt::Display;

use iced::Task;

use crate::app::FilmstripInstance;
use crate::app::instance::settings::LoadMode;
use crate::utils::format_offset;

use super::{FilmstripPage, Navigation, Msg};

// Playback offsets the capture offset pick list offers.
const OFFSET_CHOICES: [u64; 5] = [15, 30, 60, 120, 300];

// Wrapper for u64, so the pick list can show offsets as timestamps.
#[derive(PartialEq, Eq, Clone)]
struct OffsetChoice {
    secs: u64
}

impl OffsetChoice {
    fn new(secs: u64) -> Self {
        Self { secs }
    }
}

impl Display for OffsetChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_offset(self.secs, self.secs >= 3600))
    }
}

// Page that allows users to modify Filmstrip settings.
pub (crate) struct SettingsPage;

impl FilmstripPage for SettingsPage {
    fn update(&mut self, _instance: &mut FilmstripInstance, message: Msg) -> (Task<Msg>, Navigation) {
        if let Msg::Back = message {
            return (Task::none(), Navigation::Back);
        }

        (Task::none(), Navigation::None)
    }

    fn view(&self, instance: &FilmstripInstance) -> iced::Element<Msg> {
        use iced::widget::{column, row, Text, PickList, Button, Tooltip, Container};
        use iced::widget::tooltip::Position;
        use iced::widget::container;
        use iced::font::{Font, Weight};
        use super::FillElement;

        column![

            // Thumbnail options
            column![
                Text::new("Thumbnails").font(Font {
                    weight: Weight::Bold,
                    ..Default::default()
                }).size(24),
                row![
                    Tooltip::new(
                        Text::new("Load mode"),
                        Container::new(
                            Text::new(
                                "Blocking grabs frames on the UI thread, freezing the window.\n\
                                Concurrent grabs them in the background, one task per row."
                            )
                        ).style(
                            |e: &iced::Theme| container::Style {
                                background: Some(iced::Background::Color(e.palette().primary)),
                                border: iced::Border {
                                    color: iced::Color::BLACK,
                                    width: 2.5,
                                    radius: iced::border::Radius::new(10)
                                },
                                ..Default::default()
                            }
                        ).padding(10),
                        Position::default()
                    ),
                    PickList::new(
                        LoadMode::ALL,
                        Some(instance.settings().load_mode()),
                        Msg::SetLoadMode
                    )
                ].spacing(10),
                row![
                    Tooltip::new(
                        Text::new("Capture offset"),
                        Container::new(
                            Text::new(
                                "How far into each video the still frame is taken."
                            )
                        ).style(
                            |e: &iced::Theme| container::Style {
                                background: Some(iced::Background::Color(e.palette().primary)),
                                border: iced::Border {
                                    color: iced::Color::BLACK,
                                    width: 2.5,
                                    radius: iced::border::Radius::new(10)
                                },
                                ..Default::default()
                            }
                        ).padding(10),
                        Position::default()
                    ),
                    PickList::new(
                        OFFSET_CHOICES
                            .iter()
                            .map(|secs| OffsetChoice::new(*secs))
                            .collect::<Vec<_>>(),
                        Some(OffsetChoice::new(instance.settings().capture_offset())),
                        |choice| Msg::SetCaptureOffset(choice.secs)
                    )
                ].spacing(10)
            ].align_x(iced::Alignment::Center).spacing(10),

            Button::new("Back").on_press(Msg::Back)
        ].spacing(25).align_x(iced::Alignment::Center).fill()
    }

    fn subscription(&self, _instance: &FilmstripInstance) -> iced::Subscription<Msg> {
        iced::Subscription::none()
    }
}
