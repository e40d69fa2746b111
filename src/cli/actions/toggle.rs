use crate::{
    api::ApiClient,
    cli::{actions::user::load_user, globals::GlobalArgs},
    model::DisableFlag,
    views::format::TimestampFormatter,
};
use anyhow::{anyhow, Context, Result};

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub uid: String,
}

/// # Errors
/// Returns an error if the user cannot be loaded or the update is rejected.
pub async fn execute(args: Args) -> Result<()> {
    let client = args.globals.client()?;
    let flag = toggle_user(&client, &args.uid, args.globals.formatter()).await?;
    println!(
        "{}: {}",
        args.uid,
        if flag.is_disabled() { "disabled" } else { "enabled" }
    );
    Ok(())
}

/// Loads the user through the detail view and flips its disable flag. Returns
/// the confirmed value after the update.
///
/// # Errors
/// Returns an error if the user cannot be loaded or the update fails. On a
/// failed update the view has already reverted the flag.
pub async fn toggle_user(
    client: &ApiClient,
    uid: &str,
    formatter: TimestampFormatter,
) -> Result<DisableFlag> {
    let mut view = load_user(client, uid, formatter).await?;

    let request = view
        .begin_toggle()
        .context("an update for this user is already in flight")?;
    let result = client.update_disable(&request.uid, request.value).await;
    let failed = result.is_err();
    view.finish_toggle(result);

    if failed {
        return Err(anyhow!(view
            .toggle_error()
            .unwrap_or("Error updating user")
            .to_string()));
    }
    Ok(request.value)
}
