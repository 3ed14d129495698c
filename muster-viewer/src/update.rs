//! Root-level update logic.

use iced::Task;

use crate::message::Message;
use crate::state::State;

/// Handle one message. This is the only mutation point for [`State`].
pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::UsersFetched(outcome) => {
            state.directory.resolve(outcome);
            Task::none()
        }
    }
}
