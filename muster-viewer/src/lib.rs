//! Muster viewer library
//!
//! This crate contains the desktop viewer's library surfaces used by the
//! executable in `src/main.rs`: the application bootstrap, the directory
//! API client, the three-way load state, and the update/view functions
//! around it.
//!
//! Notes
//! - Most consumers should use the `muster-viewer` binary; the library is
//!   exposed mainly to enable testing and internal reuse.

pub mod api_client;
pub mod app;
pub mod config;
pub mod message;
pub mod state;
pub mod update;
pub mod view;
