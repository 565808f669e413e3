mod main_menu;
mod settings_page;
mod thumbnail_list_page;

use iced::{Element, Length, Subscription, Task};

use super::instance::FilmstripInstance;

pub (crate) use self::{
    main_menu::{MainMenuMessage, MainMenu},
    thumbnail_list_page::ThumbnailListMessage
};

type Msg = crate::app::FilmstripMessage;

// Companion to Messages, used to redirect to different pages.
pub (crate) enum Navigation {
    GoTo(Box<dyn FilmstripPage>),
    Back,
    None
}

// Allows pages to interact with the Iced update/render loops
pub (crate) trait FilmstripPage {
    fn update(&mut self, instance: &mut FilmstripInstance, message: Msg) -> (Task<Msg>, Navigation);
    fn view(&self, instance: &FilmstripInstance) -> Element<Msg>;
    fn subscription(&self, instance: &FilmstripInstance) -> Subscription<Msg>;
}

// Convenience trait for expanding UI elements to fit the whole screen.
trait FillElement<'a, T> {
    fn fill(self) -> Element<'a, Msg>;
}

impl <'a, T> FillElement<'a, T> for T where T: Into<Element<'a, Msg>> {
    fn fill(self) -> Element<'a, Msg> {
        iced::widget::Container::new(self)
            .center(Length::Fill)
            .into()
    }
}

// Convenience trait for optional messages
trait ConditionalMessage {
    fn on_condition(self, condition: bool) -> Option<Msg> where Self: Into<Msg> {
        if condition {
            Some(self.into())
        }
        else {
            None
        }
    }
}

impl ConditionalMessage for Msg {}
