use std::collections::HashMap;

use iced::{Element, Length, Task};
use iced::widget::{column, row, Button, Column, Image, Row, Scrollable, Text};
use iced::widget::image::Handle;

use log::{info, warn};

use crate::app::{frame_extract, FilmstripError};
use crate::app::instance::VideoRow;
use crate::app::instance::cache::ThumbnailState;
use crate::app::instance::settings::LoadMode;
use crate::utils::format_offset;

use super::{FillElement, FilmstripPage, FilmstripInstance, Navigation, Msg};

const THUMBNAIL_WIDTH: u16 = 320;
const THUMBNAIL_HEIGHT: u16 = 180;

#[derive(Debug, Clone)]
pub (crate) enum ThumbnailListMessage {
    LoadThumbnails,
    RetryFailed,
    ThumbnailLoaded(usize, Result<Handle, FilmstripError>)
}

impl From<ThumbnailListMessage> for Msg {
    fn from(value: ThumbnailListMessage) -> Self {
        Self::ThumbnailList(value)
    }
}

impl super::ConditionalMessage for ThumbnailListMessage {}

// The demo view: a scrollable list of rows, each showing either the frame grabbed
// from its video or a placeholder. A load pass claims unloaded rows through the
// cache before fetching, so re-entering the page never double-fetches a row.
pub (crate) struct ThumbnailListPage {
    // Abort handles for rows whose frame grab is still running.
    in_flight: HashMap<usize, iced::task::Handle>
}

impl FilmstripPage for ThumbnailListPage {
    fn update(&mut self, instance: &mut FilmstripInstance, message: Msg) -> (Task<Msg>, Navigation) {
        match message {
            // Leaving the page: every row leaves the visible set at once, so every
            // in-flight grab gets aborted and its slot released.
            Msg::Back => {
                self.abort_in_flight(instance);
                (Task::none(), Navigation::Back)
            },

            Msg::ThumbnailList(msg) => match msg {
                ThumbnailListMessage::LoadThumbnails => self.start_load_pass(instance),

                ThumbnailListMessage::RetryFailed => {
                    instance.cache_mut().clear_failures();
                    self.start_load_pass(instance)
                },

                ThumbnailListMessage::ThumbnailLoaded(index, result)
                    => self.on_thumbnail_loaded(instance, index, result)
            },

            _ => (Task::none(), Navigation::None)
        }
    }

    fn view(&self, instance: &FilmstripInstance) -> Element<Msg> {
        use super::ConditionalMessage;

        let settings = instance.settings();

        let header = Text::new(format!(
            "Frame at {}, {} load",
            format_offset(settings.capture_offset(), false),
            settings.load_mode()
        )).size(20);

        let mut rows = Column::<Msg>::new().spacing(10);
        for video in instance.rows() {
            rows = rows.push(self.get_row_element(video, instance));
        }

        let buttons = row![
            Button::new(Text::new("Retry failed").center())
                .width(120)
                .on_press_maybe(
                    ThumbnailListMessage::RetryFailed
                        .on_condition(instance.cache().has_failures())
                ),

            Button::new(Text::new("Back").center())
                .width(100)
                .on_press(Msg::Back)
        ].spacing(25);

        column![
            header,
            Scrollable::new(rows)
                .width(Length::Fill)
                .height(instance.settings().window_size().1 * 3.0 / 4.0),
            buttons
        ].align_x(iced::Alignment::Center).spacing(25).fill()
    }

    fn subscription(&self, _instance: &FilmstripInstance) -> iced::Subscription<Msg> {
        iced::Subscription::none()
    }
}

impl ThumbnailListPage {

    pub (crate) fn new() -> Self {
        Self {
            in_flight: HashMap::new()
        }
    }

    // Claim and fetch every row that doesn't have a thumbnail yet.
    fn start_load_pass(&mut self, instance: &mut FilmstripInstance) -> (Task<Msg>, Navigation) {
        let offset = instance.settings().capture_offset();
        let rows: Vec<VideoRow> = instance.rows().to_vec();

        let task = match instance.settings().load_mode() {
            // The whole pass runs inside update, on the UI thread. The window
            // stops responding until the last row is done, which is the point
            // of this mode.
            LoadMode::Blocking => {
                for video in rows {
                    let index = video.index();
                    if !instance.cache_mut().try_begin(index) {
                        continue;
                    }

                    info!("Grabbing frame for row {} (blocking).", index);

                    match frame_extract::extract_frame_blocking(video.url(), offset) {
                        Ok(handle) => instance.cache_mut().complete(index, handle),
                        Err(e) => {
                            warn!("Frame grab for row {} failed: {}", index, e);
                            instance.cache_mut().fail(index, e.to_string());
                        }
                    }
                }

                Task::none()
            },

            // One abortable task per row; completions come back as messages.
            LoadMode::Concurrent => {
                let mut tasks: Vec<Task<Msg>> = Vec::new();

                for video in rows {
                    let index = video.index();
                    if !instance.cache_mut().try_begin(index) {
                        continue;
                    }

                    info!("Grabbing frame for row {} (concurrent).", index);

                    let url = String::from(video.url());
                    let (task, handle) = Task::perform(
                        async move {
                            frame_extract::extract_frame(&url, offset).await
                        },

                        move |result| {
                            ThumbnailListMessage::ThumbnailLoaded(
                                index,
                                result.map_err(FilmstripError::new)
                            ).into()
                        }
                    ).abortable();

                    self.in_flight.insert(index, handle);
                    tasks.push(task);
                }

                Task::batch(tasks)
            }
        };

        (task, Navigation::None)
    }

    // Handle a finished frame grab. Writes through the cache so a row whose task
    // was aborted in the meantime stays unloaded.
    fn on_thumbnail_loaded(
        &mut self,
        instance: &mut FilmstripInstance,
        index: usize,
        result: Result<Handle, FilmstripError>) -> (Task<Msg>, Navigation) {

        self.in_flight.remove(&index);

        match result {
            Ok(handle) => {
                info!("Frame for row {} loaded.", index);
                instance.cache_mut().complete(index, handle);
            },
            Err(e) => {
                warn!("Frame grab for row {} failed: {}", index, e.error);
                instance.cache_mut().fail(index, e.error);
            }
        }

        (Task::none(), Navigation::None)
    }

    fn abort_in_flight(&mut self, instance: &mut FilmstripInstance) {
        for (index, handle) in self.in_flight.drain() {
            handle.abort();
            instance.cache_mut().cancel(index);
            info!("Aborted frame grab for row {}.", index);
        }
    }

    // A thumbnail (or its placeholder) next to the row's video info.
    fn get_row_element(&self, video: &VideoRow, instance: &FilmstripInstance) -> Element<Msg> {
        let thumbnail: Element<Msg> = match instance.cache().handle(video.index()) {
            Some(handle) => Image::new(handle)
                .width(THUMBNAIL_WIDTH)
                .height(THUMBNAIL_HEIGHT)
                .into(),

            None => placeholder(instance.cache().state(video.index()))
        };

        Row::new()
            .push(thumbnail)
            .push(
                column![
                    Text::new(format!("Video {}", video.index() + 1)),
                    Text::new(String::from(video.url())).size(12)
                ].spacing(5)
            )
            .spacing(15)
            .into()
    }
}

// Stand-in shown while a row has no thumbnail, with text telling the three
// non-loaded states apart.
fn placeholder<'a>(state: ThumbnailState) -> Element<'a, Msg> {
    use iced::widget::{container, Container};

    let label = match state {
        ThumbnailState::Unloaded => String::from("No preview yet"),
        ThumbnailState::Loading => String::from("Loading preview..."),
        ThumbnailState::Failed(reason) => format!("Unavailable: {}", reason),
        ThumbnailState::Loaded(_) => unreachable!("loaded rows show the image")
    };

    Container::new(Text::new(label).size(14).center())
        .center_x(THUMBNAIL_WIDTH)
        .center_y(THUMBNAIL_HEIGHT)
        .style(
            |e: &iced::Theme| container::Style {
                background: Some(iced::Background::Color(e.palette().primary)),
                border: iced::Border {
                    color: iced::Color::BLACK,
                    width: 2.5,
                    radius: iced::border::Radius::new(10)
                },
                ..Default::default()
            }
        )
        .into()
}
