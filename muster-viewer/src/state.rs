use muster_model::User;

use crate::api_client::FetchError;

/// Three-way load state driving the whole window.
///
/// `Loading` is entered once at boot and left exactly once; both outcomes
/// are terminal for the attempt. There is no retry or re-fetch trigger.
#[derive(Debug, Clone)]
pub enum LoadState {
    /// The fetch is in flight.
    Loading,
    /// The fetch failed; the renderer localizes the error kind.
    Failed(FetchError),
    /// The fetch succeeded; records are kept in payload order.
    Loaded(Vec<User>),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Apply a fetch outcome.
    ///
    /// Only `Loading` accepts an outcome. A completion that arrives once the
    /// state is terminal is dropped, so a late or duplicate result can never
    /// clobber what is already on screen.
    pub fn resolve(&mut self, outcome: Result<Vec<User>, FetchError>) {
        if !self.is_loading() {
            log::warn!("fetch outcome arrived after a terminal state; ignoring");
            return;
        }

        *self = match outcome {
            Ok(users) => {
                log::info!("directory loaded: {} users", users.len());
                LoadState::Loaded(users)
            }
            Err(error) => {
                log::error!("directory fetch failed: {error}");
                LoadState::Failed(error)
            }
        };
    }
}

/// Root application state.
#[derive(Debug, Clone)]
pub struct State {
    pub server_url: String,
    pub directory: LoadState,
}
