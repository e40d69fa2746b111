//! # useradmin
//!
//! Client core for a small user-administration backend. The backend exposes four
//! endpoints (`GET /users`, `GET /user/{uid}`, `PUT /userupdate/{uid}` and
//! `POST /login`); this crate wraps them in an [`api::ApiClient`] and keeps the
//! presentational state of the three views (login, dashboard and user detail) in
//! plain state machines under [`views`].
//!
//! The state machines never perform I/O themselves. A front end (the `useradmin`
//! CLI in this crate, or the Leptos app under `apps/web`) asks a view for the
//! request it should send, awaits the [`api::ApiClient`] call and hands the result
//! back to the view. That keeps the flows testable without a browser.
//!
//! ## Disable toggles
//!
//! Rows track their `disable` flag as either confirmed or pending. A toggle marks
//! the row pending until the backend answers; a failed write reverts the row to
//! its last confirmed value instead of leaving the UI out of sync with the server.

pub mod api;
pub mod config;
pub mod model;
pub mod router;
pub mod views;

#[cfg(feature = "cli")]
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub use api::{ApiClient, AppError};
pub use config::ConfigStore;
pub use model::{DisableFlag, User, UserType};
pub use router::Route;
