//! Root-level view composition

use iced::widget::{column, container, keyed_column, scrollable, text};
use iced::{Element, Length};
use muster_model::User;

use crate::api_client::FetchError;
use crate::message::Message;
use crate::state::{LoadState, State};

/// Window heading. The UI ships in Japanese, like the directory it fronts.
pub const HEADING: &str = "ユーザー一覧";
/// Shown from boot until the fetch resolves.
pub const LOADING_LABEL: &str = "読み込み中...";

const TRANSPORT_ERROR_LABEL: &str = "ネットワークエラーが発生しました";
const FORMAT_ERROR_LABEL: &str = "データの取得に失敗しました";
const UNEXPECTED_ERROR_LABEL: &str = "予期せぬエラーが発生しました";

/// Localized message for a failed fetch. Total over the error taxonomy.
pub fn error_label(error: &FetchError) -> &'static str {
    match error {
        FetchError::Transport(_) => TRANSPORT_ERROR_LABEL,
        FetchError::Format(_) => FORMAT_ERROR_LABEL,
        FetchError::Unexpected(_) => UNEXPECTED_ERROR_LABEL,
    }
}

/// Render the whole window as a pure function of state.
pub fn view(state: &State) -> Element<'_, Message> {
    let content: Element<'_, Message> = match &state.directory {
        LoadState::Loading => text(LOADING_LABEL).size(16).into(),
        LoadState::Failed(error) => {
            text(error_label(error)).size(16).style(text::danger).into()
        }
        LoadState::Loaded(users) => view_user_list(users),
    };

    container(column![text(HEADING).size(28), content].spacing(16))
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_user_list(users: &[User]) -> Element<'_, Message> {
    let cards = keyed_column(
        users.iter().map(|user| (user.id, view_user_card(user))),
    )
    .spacing(12);

    scrollable(cards).height(Length::Fill).into()
}

fn view_user_card(user: &User) -> Element<'_, Message> {
    container(
        column![
            text(&user.name).size(20),
            text(&user.email).size(14).style(text::secondary),
        ]
        .spacing(4),
    )
    .padding(12)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}
