//! Users table. Loads once on mount; there is no refresh. A failed load is logged
//! and leaves the table empty.

use super::toggle::{FlagState, ToggleRequest};
use crate::{
    api::AppError,
    model::{DisableFlag, User},
    router::paths,
};
use std::collections::HashSet;
use tracing::{error, warn};

/// Column headers, in render order.
pub const COLUMNS: [&str; 11] = [
    "UID",
    "User Type",
    "Timestamp",
    "Last Entry Timestamp",
    "Password",
    "Disabled",
    "First Name",
    "Last Name",
    "Username",
    "Company",
    "Details",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    LoadFailed,
}

/// A user plus the client-side state of its disable flag.
#[derive(Clone, Debug)]
pub struct UserRow {
    pub user: User,
    pub flag: FlagState,
    /// Message from the last failed update, cleared by the next toggle.
    pub last_error: Option<String>,
}

impl UserRow {
    #[must_use]
    pub fn new(user: User) -> Self {
        let flag = FlagState::Confirmed(user.disable);
        Self {
            user,
            flag,
            last_error: None,
        }
    }

    #[must_use]
    pub fn uid(&self) -> &str {
        &self.user.uid
    }

    #[must_use]
    pub fn displayed_flag(&self) -> DisableFlag {
        self.flag.displayed()
    }

    pub(crate) fn begin_toggle(&mut self) -> Option<ToggleRequest> {
        let value = self.flag.begin()?;
        self.last_error = None;
        Some(ToggleRequest {
            uid: self.user.uid.clone(),
            value,
        })
    }

    pub(crate) fn finish_toggle(&mut self, result: Result<(), AppError>) {
        let succeeded = result.is_ok();
        if !self.flag.finish(succeeded) {
            return;
        }
        self.user.disable = self.flag.displayed();
        if let Err(err) = result {
            warn!(uid = %self.user.uid, "Error updating user: {err}");
            self.last_error = Some(err.user_message());
        }
    }
}

/// One rendered table row. Every cell is display-ready text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub uid: String,
    pub user_type: String,
    pub created: String,
    pub last_entry: String,
    pub password: String,
    pub toggle_label: &'static str,
    pub toggle_pending: bool,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub companies: String,
    pub details_path: String,
    pub error: Option<String>,
}

impl From<&UserRow> for TableRow {
    fn from(row: &UserRow) -> Self {
        let user = &row.user;
        Self {
            uid: user.uid.clone(),
            user_type: user.user_type.to_string(),
            created: user.tstamp.to_string(),
            last_entry: user.ts_lastentry.clone().unwrap_or_default(),
            password: user.password_display().to_string(),
            toggle_label: row.displayed_flag().action_label(),
            toggle_pending: row.flag.is_pending(),
            first_name: user.first_name.clone().unwrap_or_default(),
            last_name: user.last_name.clone().unwrap_or_default(),
            username: user.username.clone(),
            companies: user.companies_display(),
            details_path: paths::user_detail(&user.uid),
            error: row.last_error.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DashboardView {
    state: LoadState,
    rows: Vec<UserRow>,
}

impl DashboardView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> LoadState {
        self.state
    }

    #[must_use]
    pub fn rows(&self) -> &[UserRow] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, uid: &str) -> Option<&UserRow> {
        self.rows.iter().find(|row| row.uid() == uid)
    }

    /// Moves `Idle` to `Loading`. Returns `false` if a load already started, so
    /// the list is fetched once per mount.
    pub fn begin_load(&mut self) -> bool {
        if self.state == LoadState::Idle {
            self.state = LoadState::Loading;
            true
        } else {
            false
        }
    }

    pub fn finish_load(&mut self, result: Result<Vec<User>, AppError>) {
        if self.state != LoadState::Loading {
            return;
        }

        match result {
            Ok(users) => {
                let mut seen = HashSet::new();
                self.rows = users
                    .into_iter()
                    .filter(|user| {
                        let fresh = seen.insert(user.uid.clone());
                        if !fresh {
                            warn!(uid = %user.uid, "Dropping duplicate user row");
                        }
                        fresh
                    })
                    .map(UserRow::new)
                    .collect();
                self.state = LoadState::Loaded;
            }
            Err(err) => {
                error!("Error fetching users: {err}");
                self.state = LoadState::LoadFailed;
            }
        }
    }

    /// Starts a toggle of `uid`'s flag. `None` if the row is unknown or already
    /// has an update in flight.
    pub fn begin_toggle(&mut self, uid: &str) -> Option<ToggleRequest> {
        self.rows
            .iter_mut()
            .find(|row| row.uid() == uid)?
            .begin_toggle()
    }

    /// Applies the outcome of the update sent for `uid`.
    pub fn finish_toggle(&mut self, uid: &str, result: Result<(), AppError>) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.uid() == uid) {
            row.finish_toggle(result);
        }
    }

    #[must_use]
    pub fn table(&self) -> Vec<TableRow> {
        self.rows.iter().map(TableRow::from).collect()
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{DashboardView, LoadState, COLUMNS};
    use crate::{
        api::AppError,
        model::{DisableFlag, User, PASSWORD_MASK},
    };
    use serde_json::json;

    fn user(uid: &str, disable: u8, companies: &[&str]) -> User {
        serde_json::from_value(json!({
            "uid": uid,
            "UserType": 3,
            "tstamp": 1_709_722_800,
            "ts_lastentry": "Wed, 06 Mar 2024 12:34:56 GMT",
            "password": "5f4dcc3b5aa765d61d8327deb882cf99",
            "disable": disable,
            "first_name": "John",
            "lastName": "Doe",
            "username": format!("name-{uid}"),
            "companies": companies,
        }))
        .unwrap()
    }

    fn loaded(users: Vec<User>) -> DashboardView {
        let mut view = DashboardView::new();
        assert!(view.begin_load());
        view.finish_load(Ok(users));
        view
    }

    #[test]
    fn loads_only_once() {
        let mut view = DashboardView::new();
        assert_eq!(view.state(), LoadState::Idle);
        assert!(view.begin_load());
        assert!(!view.begin_load());
        view.finish_load(Ok(vec![]));
        assert_eq!(view.state(), LoadState::Loaded);
        assert!(!view.begin_load());
    }

    #[test]
    fn n_users_render_n_uniquely_keyed_rows() {
        let view = loaded(vec![
            user("a", 0, &[]),
            user("b", 1, &[]),
            user("c", 0, &[]),
        ]);
        let table = view.table();

        assert_eq!(table.len(), 3);
        let uids: Vec<_> = table.iter().map(|row| row.uid.as_str()).collect();
        assert_eq!(uids, ["a", "b", "c"]);
    }

    #[test]
    fn duplicate_uids_keep_the_first_row() {
        let view = loaded(vec![user("a", 0, &["X"]), user("a", 1, &["Y"])]);
        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.table()[0].companies, "X");
    }

    #[test]
    fn failed_load_leaves_table_empty() {
        let mut view = DashboardView::new();
        view.begin_load();
        view.finish_load(Err(AppError::Network("refused".to_string())));

        assert_eq!(view.state(), LoadState::LoadFailed);
        assert!(view.table().is_empty());
    }

    #[test]
    fn row_cells_render_display_text() {
        let view = loaded(vec![user("a", 1, &["A", "B"])]);
        let row = &view.table()[0];

        assert_eq!(row.user_type, "user");
        assert_eq!(row.created, "1709722800");
        assert_eq!(row.last_entry, "Wed, 06 Mar 2024 12:34:56 GMT");
        assert_eq!(row.password, PASSWORD_MASK);
        assert_eq!(row.toggle_label, "Enable");
        assert_eq!(row.companies, "A, B");
        assert_eq!(row.details_path, "/UserDetail/a");
        assert_eq!(COLUMNS.len(), 11);
    }

    #[test]
    fn toggle_twice_returns_to_original_value() {
        let mut view = loaded(vec![user("a", 0, &[])]);

        let first = view.begin_toggle("a").unwrap();
        assert_eq!(first.value, DisableFlag::Disabled);
        view.finish_toggle("a", Ok(()));
        assert_eq!(view.row("a").unwrap().displayed_flag(), DisableFlag::Disabled);

        let second = view.begin_toggle("a").unwrap();
        assert_eq!(second.value, DisableFlag::Enabled);
        view.finish_toggle("a", Ok(()));
        assert_eq!(view.row("a").unwrap().displayed_flag(), DisableFlag::Enabled);
        assert_eq!(view.row("a").unwrap().user.disable, DisableFlag::Enabled);
    }

    #[test]
    fn double_click_sends_a_single_update() {
        let mut view = loaded(vec![user("a", 0, &[])]);
        assert!(view.begin_toggle("a").is_some());
        assert!(view.begin_toggle("a").is_none());
        assert!(view.table()[0].toggle_pending);
    }

    #[test]
    fn failed_update_reverts_and_reports() {
        let mut view = loaded(vec![user("a", 0, &[]), user("b", 0, &[])]);
        view.begin_toggle("a").unwrap();
        view.finish_toggle(
            "a",
            Err(AppError::Http {
                status: 500,
                message: "Failed to update user with UID a".to_string(),
            }),
        );

        let row = view.row("a").unwrap();
        assert_eq!(row.displayed_flag(), DisableFlag::Enabled);
        assert_eq!(
            row.last_error.as_deref(),
            Some("Failed to update user with UID a")
        );
        assert!(view.row("b").unwrap().last_error.is_none());

        view.begin_toggle("a").unwrap();
        assert!(view.row("a").unwrap().last_error.is_none());
    }

    #[test]
    fn toggle_of_unknown_uid_is_ignored() {
        let mut view = loaded(vec![user("a", 0, &[])]);
        assert!(view.begin_toggle("zzz").is_none());
        view.finish_toggle("zzz", Ok(()));
        assert_eq!(view.row("a").unwrap().displayed_flag(), DisableFlag::Enabled);
    }
}
