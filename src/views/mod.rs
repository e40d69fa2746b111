//! Presentational state of the three views. Each view is a small state machine
//! that hands out the request to send and consumes the response; it never
//! performs I/O.

pub mod dashboard;
pub mod detail;
pub mod format;
pub mod login;
pub mod toggle;

pub use dashboard::{DashboardView, LoadState, TableRow, UserRow};
pub use detail::{DetailField, DetailState, DetailView, FieldValue};
pub use format::TimestampFormatter;
pub use login::{LoginState, LoginView};
pub use toggle::{FlagState, ToggleRequest};
