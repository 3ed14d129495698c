use muster_model::User;

use crate::api_client::FetchError;

/// Application messages.
///
/// One fetch per launch means one completion message.
#[derive(Debug, Clone)]
pub enum Message {
    /// The boot-time directory fetch resolved, successfully or not.
    UsersFetched(Result<Vec<User>, FetchError>),
}
