use crate::cli::{
    actions::{login, toggle, user, users, Action},
    commands::{ARG_LOCALE, ARG_PASSWORD, ARG_TIMEOUT, ARG_UID, ARG_URL, ARG_USERNAME},
    globals::GlobalArgs,
};
use anyhow::{anyhow, Context, Result};
use secrecy::SecretString;

/// # Errors
/// Returns an error if required arguments are missing or invalid.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let globals = GlobalArgs::new(
        matches
            .get_one::<String>(ARG_URL)
            .cloned()
            .context("missing required argument: --url")?,
        matches.get_one::<u64>(ARG_TIMEOUT).copied().unwrap_or(10),
        matches
            .get_one::<String>(ARG_LOCALE)
            .map_or("en_US", String::as_str),
    )?;

    let uid = |sub: &clap::ArgMatches| -> Result<String> {
        sub.get_one::<String>(ARG_UID)
            .cloned()
            .context("missing required argument: <uid>")
    };

    match matches.subcommand() {
        Some(("login", sub)) => Ok(Action::Login(login::Args {
            globals,
            username: sub.get_one::<String>(ARG_USERNAME).cloned(),
            password: sub
                .get_one::<String>(ARG_PASSWORD)
                .cloned()
                .map(SecretString::from),
        })),
        Some(("users", _)) => Ok(Action::Users(users::Args { globals })),
        Some(("user", sub)) => Ok(Action::User(user::Args {
            globals,
            uid: uid(sub)?,
        })),
        Some(("toggle", sub)) => Ok(Action::Toggle(toggle::Args {
            globals,
            uid: uid(sub)?,
        })),
        Some((name, _)) => Err(anyhow!("unknown subcommand: {name}")),
        None => Err(anyhow!("missing subcommand")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::handler;
    use crate::cli::{actions::Action, commands};
    use secrecy::ExposeSecret;

    fn dispatch(args: &[&str]) -> anyhow::Result<Action> {
        temp_env::with_vars(
            [
                ("USERADMIN_URL", None::<&str>),
                ("USERADMIN_TIMEOUT", None),
                ("USERADMIN_LOCALE", None),
                ("USERADMIN_USERNAME", None),
                ("USERADMIN_PASSWORD", None),
            ],
            || handler(&commands::new().get_matches_from(args)),
        )
    }

    #[test]
    fn test_login_action() {
        let action = dispatch(&[
            "useradmin",
            "login",
            "--username",
            "admin_demo",
            "--password",
            "admin_demo",
        ])
        .unwrap();

        let Action::Login(args) = action else {
            panic!("expected login action");
        };
        assert_eq!(args.username.as_deref(), Some("admin_demo"));
        assert_eq!(args.password.unwrap().expose_secret(), "admin_demo");
        assert_eq!(args.globals.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_login_without_credentials_prompts_later() {
        let Action::Login(args) = dispatch(&["useradmin", "login"]).unwrap() else {
            panic!("expected login action");
        };
        assert!(args.username.is_none());
        assert!(args.password.is_none());
    }

    #[test]
    fn test_toggle_action() {
        let action = dispatch(&["useradmin", "--url", "http://backend:5000", "toggle", "u-1"])
            .unwrap();

        let Action::Toggle(args) = action else {
            panic!("expected toggle action");
        };
        assert_eq!(args.uid, "u-1");
        assert_eq!(args.globals.base_url, "http://backend:5000");
    }

    #[test]
    fn test_unknown_locale_fails() {
        assert!(dispatch(&["useradmin", "--locale", "xx_NOPE", "users"]).is_err());
    }
}
