use iced::Task;

use super::{Navigation, FilmstripPage, FilmstripInstance, Msg};

// Main menu, the first page that's loaded when the program starts.
// Redirects to the Thumbnail List and Settings pages.
pub (crate) struct MainMenu;

#[derive(Debug, Clone)]
pub (crate) enum MainMenuMessage {
    ThumbnailListPage,
    SettingsPage
}

impl From<MainMenuMessage> for Msg {
    fn from(value: MainMenuMessage) -> Self {
        Self::MainMenu(value)
    }
}

impl FilmstripPage for MainMenu {

    fn update(&mut self, _instance: &mut FilmstripInstance, message: Msg) -> (Task<Msg>, Navigation) {
        use super::settings_page::SettingsPage;

        if let Msg::MainMenu(msg) = message {
            match msg {
                MainMenuMessage::ThumbnailListPage => return to_thumbnail_list_page(),
                MainMenuMessage::SettingsPage => return (
                    Task::none(),
                    Navigation::GoTo(Box::new(SettingsPage {}))
                )
            }
        }
        (Task::none(), Navigation::None)
    }

    fn view(&self, _instance: &FilmstripInstance) -> iced::Element<Msg> {
        use iced::widget::{Button, Text};
        use super::FillElement;

        // Draw buttons
        iced::widget::column![
            Button::new(Text::new("View Thumbnails").center())
                .width(200)
                .on_press(MainMenuMessage::ThumbnailListPage.into()),

            Button::new(Text::new("Settings").center())
                .width(200)
                .on_press(MainMenuMessage::SettingsPage.into())
        ].spacing(25).fill()
    }

    fn subscription(&self, _instance: &FilmstripInstance) -> iced::Subscription<Msg> {
        iced::Subscription::none()
    }
}

fn to_thumbnail_list_page() -> (Task<Msg>, Navigation) {
    use super::thumbnail_list_page::{ThumbnailListMessage, ThumbnailListPage};

    // Kick off the first load pass as soon as the page is up.
    (
        Task::done(ThumbnailListMessage::LoadThumbnails.into()),
        Navigation::GoTo(Box::new(ThumbnailListPage::new()))
    )
}
