use crate::cli::actions::{login, toggle, user, users, Action};
use anyhow::Result;

/// Execute the provided action.
// Single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Login(args) => login::execute(args).await,
        Action::Users(args) => users::execute(args).await,
        Action::User(args) => user::execute(args).await,
        Action::Toggle(args) => toggle::execute(args).await,
    }
}
