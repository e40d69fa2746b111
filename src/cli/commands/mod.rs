pub mod logging;

use crate::config::DEFAULT_BASE_URL;
use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_URL: &str = "url";
pub const ARG_TIMEOUT: &str = "timeout";
pub const ARG_LOCALE: &str = "locale";
pub const ARG_USERNAME: &str = "username";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_UID: &str = "uid";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("useradmin")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_URL)
                .short('u')
                .long("url")
                .help("Backend base URL")
                .default_value(DEFAULT_BASE_URL)
                .env("USERADMIN_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .short('t')
                .long("timeout")
                .help("Request timeout in seconds")
                .default_value("10")
                .env("USERADMIN_TIMEOUT")
                .global(true)
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new(ARG_LOCALE)
                .short('l')
                .long("locale")
                .help("Locale used to format timestamps, example: de_DE")
                .default_value("en_US")
                .env("USERADMIN_LOCALE")
                .global(true),
        )
        .subcommand(
            Command::new("login")
                .about("Check credentials against the backend")
                .arg(
                    Arg::new(ARG_USERNAME)
                        .long("username")
                        .help("Username, prompted for when omitted")
                        .env("USERADMIN_USERNAME"),
                )
                .arg(
                    Arg::new(ARG_PASSWORD)
                        .long("password")
                        .help("Password, prompted for when omitted")
                        .env("USERADMIN_PASSWORD")
                        .hide_env_values(true),
                ),
        )
        .subcommand(Command::new("users").about("List all users"))
        .subcommand(
            Command::new("user")
                .about("Show a single user")
                .arg(Arg::new(ARG_UID).help("User id").required(true)),
        )
        .subcommand(
            Command::new("toggle")
                .about("Flip the disable flag of a user")
                .arg(Arg::new(ARG_UID).help("User id").required(true)),
        );

    logging::with_args(command)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn clean_env<F: FnOnce()>(f: F) {
        temp_env::with_vars(
            [
                ("USERADMIN_URL", None::<&str>),
                ("USERADMIN_TIMEOUT", None),
                ("USERADMIN_LOCALE", None),
                ("USERADMIN_LOG_LEVEL", None),
                ("USERADMIN_USERNAME", None),
                ("USERADMIN_PASSWORD", None),
            ],
            f,
        );
    }

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "useradmin");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some(env!("CARGO_PKG_DESCRIPTION").to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_defaults() {
        clean_env(|| {
            let matches = new().get_matches_from(["useradmin", "users"]);

            assert_eq!(
                matches.get_one::<String>(ARG_URL).cloned(),
                Some("http://localhost:5000".to_string())
            );
            assert_eq!(matches.get_one::<u64>(ARG_TIMEOUT).copied(), Some(10));
            assert_eq!(
                matches.get_one::<String>(ARG_LOCALE).cloned(),
                Some("en_US".to_string())
            );
            assert_eq!(matches.subcommand_name(), Some("users"));
        });
    }

    #[test]
    fn test_global_args_after_subcommand() {
        clean_env(|| {
            let matches = new().get_matches_from([
                "useradmin",
                "user",
                "abc",
                "--url",
                "http://10.0.0.7:5000",
            ]);

            assert_eq!(
                matches.get_one::<String>(ARG_URL).cloned(),
                Some("http://10.0.0.7:5000".to_string())
            );
            let (name, sub) = matches.subcommand().unwrap();
            assert_eq!(name, "user");
            assert_eq!(
                sub.get_one::<String>(ARG_UID).cloned(),
                Some("abc".to_string())
            );
        });
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        clean_env(|| {
            assert!(new()
                .try_get_matches_from(["useradmin", "--timeout", "0", "users"])
                .is_err());
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("USERADMIN_URL", Some("http://backend:5000")),
                ("USERADMIN_TIMEOUT", Some("3")),
                ("USERADMIN_LOCALE", Some("de_DE")),
                ("USERADMIN_LOG_LEVEL", Some("info")),
                ("USERADMIN_USERNAME", Some("admin_demo")),
                ("USERADMIN_PASSWORD", Some("admin_demo")),
            ],
            || {
                let matches = new().get_matches_from(["useradmin", "login"]);
                assert_eq!(
                    matches.get_one::<String>(ARG_URL).cloned(),
                    Some("http://backend:5000".to_string())
                );
                assert_eq!(matches.get_one::<u64>(ARG_TIMEOUT).copied(), Some(3));
                assert_eq!(
                    matches.get_one::<String>(ARG_LOCALE).cloned(),
                    Some("de_DE".to_string())
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );

                let sub = matches.subcommand_matches("login").unwrap();
                assert_eq!(
                    sub.get_one::<String>(ARG_USERNAME).cloned(),
                    Some("admin_demo".to_string())
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("USERADMIN_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(["useradmin", "users"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5_usize {
            temp_env::with_vars([("USERADMIN_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["useradmin".to_string(), "users".to_string()];
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }
}
