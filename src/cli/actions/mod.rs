pub mod login;
pub mod toggle;
pub mod user;
pub mod users;

// Internal "interpreter" for `Action`.
// The match lives in `run` so this module stays a plain list of actions.
mod run;

#[derive(Debug)]
pub enum Action {
    Login(login::Args),
    Users(users::Args),
    User(user::Args),
    Toggle(toggle::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
