//! Application builder and boot sequence.

use iced::{Size, Task, Theme};

use crate::api_client::ApiClient;
use crate::config::Config;
use crate::message::Message;
use crate::state::{LoadState, State};
use crate::{update, view};

/// Build and run the viewer application.
pub fn run(config: Config) -> iced::Result {
    iced::application(view::HEADING, update::update, view::view)
        .theme(app_theme)
        .window_size(Size::new(480.0, 640.0))
        .run_with(move || boot(config.server_url.clone()))
}

fn app_theme(_state: &State) -> Theme {
    Theme::TokyoNight
}

/// Initial state plus the single boot-time fetch.
///
/// The fetch is spawned here and nowhere else: re-renders never issue
/// network calls, and nothing re-enters `Loading` afterwards.
pub fn boot(server_url: String) -> (State, Task<Message>) {
    let api_client = ApiClient::new(server_url.clone());
    let state = State {
        server_url,
        directory: LoadState::Loading,
    };

    let task = Task::perform(
        async move { api_client.fetch_users().await },
        Message::UsersFetched,
    );

    (state, task)
}
