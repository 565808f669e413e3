mod pages;
mod instance;
mod frame_extract;

use iced::window;
use iced::{Size, Task};

use log::{error, info, warn};

use instance::FilmstripInstance;
use instance::settings::{FilmstripSettings, LoadMode};

// Simple wrapper for errors.
#[derive(Debug, Clone)]
pub (crate) struct FilmstripError {
    error: String
}

impl FilmstripError {
    fn new(e: impl std::error::Error + 'static) -> Self {
        Self { error: e.to_string() }
    }
}

impl From<String> for FilmstripError {
    fn from(value: String) -> Self {
        Self { error: value }
    }
}

impl From<&str> for FilmstripError {
    fn from(value: &str) -> Self {
        Self { error: String::from(value) }
    }
}

// Messages are used to update the state of the program.
#[derive(Debug, Clone)]
pub (crate) enum FilmstripMessage {
    Init,

    MainMenu(pages::MainMenuMessage),
    ThumbnailList(pages::ThumbnailListMessage),

    WindowResize((window::Id, Size)),
    SetLoadMode(LoadMode),
    SetCaptureOffset(u64),

    Back,

    Close(window::Id)
}

// The "heart" of Filmstrip.
pub (crate) struct FilmstripApp {
    instance: FilmstripInstance,
    page_stack: Vec<Box<dyn pages::FilmstripPage>>
}

impl FilmstripApp {
    pub (crate) fn new() -> (Self, Task<FilmstripMessage>) {

        let settings = match FilmstripSettings::load() {
            Ok(s) => s,
            Err(e) => {
                warn!("Failed to load settings, using defaults: {}", e.error);
                FilmstripSettings::new()
            }
        };

        let window_settings = iced::window::Settings {
            size: Size::from(settings.window_size()),
            min_size: Some(Size::new(500.0, 500.0)),
            exit_on_close_request: true,
            ..Default::default()
        };

        let (_, window) = window::open(window_settings);

        let app = FilmstripApp {
            instance: FilmstripInstance::new(settings),
            page_stack: vec![Box::new(pages::MainMenu {})]
        };

        (app, window.map(|_| FilmstripMessage::Init))
    }

    // Sets the title of the program window.
    pub (crate) fn title(&self, _id: window::Id) -> String {
        String::from("Filmstrip")
    }

    // Update the state of the program.
    pub (crate) fn update(&mut self, message: FilmstripMessage) -> Task<FilmstripMessage> {
        use pages::Navigation;

        match message {
            FilmstripMessage::Init => {
                // Thumbnails can't load without ffmpeg, say so up front.
                match frame_extract::ffmpeg_version() {
                    Ok(version) => info!("Found ffmpeg: {}", version),
                    Err(e) => error!("Ffmpeg check failed, thumbnails will not load: {}", e)
                }
                Task::none()
            },

            FilmstripMessage::WindowResize((_id, size)) => {
                self.instance.settings_mut().set_window_size(size.width, size.height);
                Task::none()
            },

            FilmstripMessage::SetLoadMode(mode) => {
                self.instance.settings_mut().set_load_mode(mode);
                Task::none()
            },

            FilmstripMessage::SetCaptureOffset(secs) => {
                if secs != self.instance.settings().capture_offset() {
                    // Frames grabbed at the old offset would be shown under a
                    // header claiming the new one.
                    self.instance.cache_mut().invalidate_loaded();
                }
                self.instance.settings_mut().set_capture_offset(secs);
                Task::none()
            },

            FilmstripMessage::Close(_id) => {
                self.instance.settings().save();

                iced::exit()
            },

            // Retrieve command(s) and navigation info from the current page
            _ => {
                let current_page = self.page_stack
                    .last_mut()
                    .expect("Page stack should not be empty.");

                let (command, navigation) = current_page.update(&mut self.instance, message);

                match navigation {
                    Navigation::GoTo(page) => self.page_stack.push(page),
                    Navigation::Back => {self.page_stack.pop();},
                    Navigation::None => {}
                }

                command
            }
        }
    }

    // Draw the current page's UI.
    pub (crate) fn view(&self, _id: window::Id) -> iced::Element<FilmstripMessage> {
        self.page_stack.last().unwrap().view(&self.instance)
    }

    // Handle user input.
    pub (crate) fn subscription(&self) -> iced::Subscription<FilmstripMessage> {
        iced::Subscription::batch(
            [
                window::resize_events().map(FilmstripMessage::WindowResize),
                window::close_events().map(FilmstripMessage::Close),
                self.page_stack.last().unwrap().subscription(&self.instance)
            ]
        )
    }
}
