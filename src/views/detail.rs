//! Single-user view. Fields are rendered from the explicit [`User`] schema in a
//! fixed order; the `disable` field becomes a toggle.

use super::{
    dashboard::UserRow,
    format::TimestampFormatter,
    toggle::ToggleRequest,
};
use crate::{api::AppError, model::User};
use tracing::error;

pub const NOT_FOUND_MESSAGE: &str = "User not found";
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching user";
pub const LOADING_MESSAGE: &str = "Loading...";

#[derive(Clone, Debug)]
pub enum DetailState {
    Loading,
    Ready(LoadedUser),
    Error(String),
    NotFound,
}

/// A fetched user with its last-entry timestamp already formatted.
#[derive(Clone, Debug)]
pub struct LoadedUser {
    pub row: UserRow,
    pub last_entry_display: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Toggle { label: &'static str, pending: bool },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailField {
    pub key: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
}

#[derive(Clone, Debug)]
pub struct DetailView {
    uid: String,
    state: DetailState,
    formatter: TimestampFormatter,
}

impl DetailView {
    #[must_use]
    pub fn new(uid: impl Into<String>, formatter: TimestampFormatter) -> Self {
        Self {
            uid: uid.into(),
            state: DetailState::Loading,
            formatter,
        }
    }

    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    #[must_use]
    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Settles the initial fetch. Later calls are ignored.
    pub fn finish_load(&mut self, result: Result<User, AppError>) {
        if !matches!(self.state, DetailState::Loading) {
            return;
        }

        self.state = match result {
            Ok(user) => {
                let last_entry_display = user
                    .ts_lastentry
                    .as_deref()
                    .map(|raw| self.formatter.format(raw));
                DetailState::Ready(LoadedUser {
                    row: UserRow::new(user),
                    last_entry_display,
                })
            }
            Err(AppError::NotFound(_)) => DetailState::NotFound,
            Err(err) => {
                error!(uid = %self.uid, "Error fetching user: {err}");
                DetailState::Error(FETCH_ERROR_MESSAGE.to_string())
            }
        };
    }

    pub fn begin_toggle(&mut self) -> Option<ToggleRequest> {
        match &mut self.state {
            DetailState::Ready(loaded) => loaded.row.begin_toggle(),
            _ => None,
        }
    }

    pub fn finish_toggle(&mut self, result: Result<(), AppError>) {
        if let DetailState::Ready(loaded) = &mut self.state {
            loaded.row.finish_toggle(result);
        }
    }

    /// Status line for states without fields.
    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        match &self.state {
            DetailState::Loading => Some(LOADING_MESSAGE),
            DetailState::Ready(_) => None,
            DetailState::Error(message) => Some(message),
            DetailState::NotFound => Some(NOT_FOUND_MESSAGE),
        }
    }

    /// Field list of a loaded user, empty in every other state.
    #[must_use]
    pub fn fields(&self) -> Vec<DetailField> {
        let DetailState::Ready(loaded) = &self.state else {
            return Vec::new();
        };
        let user = &loaded.row.user;
        let flag = loaded.row.displayed_flag();

        let text = |key, label, value: String| DetailField {
            key,
            label,
            value: FieldValue::Text(value),
        };

        vec![
            text("uid", "UID", user.uid.clone()),
            text("UserType", "User Type", user.user_type.to_string()),
            text("tstamp", "Timestamp", user.tstamp.to_string()),
            text(
                "ts_lastentry",
                "Last Entry",
                loaded.last_entry_display.clone().unwrap_or_default(),
            ),
            text("password", "Password", user.password_display().to_string()),
            DetailField {
                key: "disable",
                label: "Disabled",
                value: FieldValue::Toggle {
                    label: flag.action_label(),
                    pending: loaded.row.flag.is_pending(),
                },
            },
            text(
                "first_name",
                "First Name",
                user.first_name.clone().unwrap_or_default(),
            ),
            text(
                "lastName",
                "Last Name",
                user.last_name.clone().unwrap_or_default(),
            ),
            text("username", "Username", user.username.clone()),
            text("companies", "Companies", user.companies_display()),
        ]
    }

    /// Error left by the last failed toggle, if any.
    #[must_use]
    pub fn toggle_error(&self) -> Option<&str> {
        match &self.state {
            DetailState::Ready(loaded) => loaded.row.last_error.as_deref(),
            _ => None,
        }
    }
}
