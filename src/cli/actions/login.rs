use crate::{api::ApiClient, cli::globals::GlobalArgs, views::LoginView};
use anyhow::{anyhow, Context, Result};
use dialoguer::{Input, Password};
use secrecy::SecretString;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub username: Option<String>,
    pub password: Option<SecretString>,
}

/// Prompt for missing credentials, then log in.
///
/// # Errors
/// Returns the server's error text if the login is rejected.
pub async fn execute(args: Args) -> Result<()> {
    let client = args.globals.client()?;

    let username = match args.username {
        Some(username) => username,
        None => Input::new()
            .with_prompt("Username")
            .allow_empty(true)
            .interact_text()
            .context("prompt failed")?,
    };

    let password = match args.password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()
            .map(SecretString::from)
            .context("prompt failed")?,
    };

    let message = login(&client, username, password).await?;
    if message.is_empty() {
        println!("Login successful");
    } else {
        println!("{message}");
    }

    Ok(())
}

/// Runs the login form flow and returns the server's message.
///
/// # Errors
/// Returns the message shown on the form when the backend rejects the
/// credentials or cannot be reached.
pub async fn login(
    client: &ApiClient,
    username: String,
    password: SecretString,
) -> Result<String> {
    let mut view = LoginView::new(client.config().clone());
    view.set_username(username);
    view.set_password(password);

    let request = view.submit().context("login already in progress")?;
    let result = client.login(&request).await;

    match view.finish(result) {
        Some(route) => {
            debug!(%route, "login succeeded");
            Ok(view.message().unwrap_or_default().to_string())
        }
        None => Err(anyhow!(view.message().unwrap_or("login failed").to_string())),
    }
}
